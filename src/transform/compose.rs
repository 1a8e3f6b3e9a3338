use std::fmt;

use glam::{Mat4, Vec3};

use super::Transform3D;

/// A single transform function, in the order a renderer applies it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    /// Anchor the element on its own center before positioning. Relative
    /// to the element box, so it contributes nothing to [`TransformDescriptor::matrix`].
    Center,
    /// Translation in pixels.
    Translate(Vec3),
    /// Rotation around X in degrees.
    RotateX(f32),
    /// Rotation around Y in degrees.
    RotateY(f32),
    /// Rotation around Z in degrees.
    RotateZ(f32),
    /// Uniform scale.
    Scale(f32),
}

/// Axis order of the three rotation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationOrder {
    /// X, then Y, then Z. Moves an entity into place.
    Forward,
    /// Z, then Y, then X. Undoes a forward rotation when moving the world.
    Reversed,
}

/// Ordered list of [`TransformOp`]s, leftmost outermost.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformDescriptor {
    ops: Vec<TransformOp>,
}

impl TransformDescriptor {
    /// The ops in application order.
    #[must_use]
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Whether the descriptor has no ops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Append the ops of `other` after this descriptor's ops.
    #[must_use]
    pub fn then(mut self, other: Self) -> Self {
        self.ops.extend(other.ops);
        self
    }

    /// Matrix equivalent of the whole list (`ops[0] * ops[1] * ...`).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.ops
            .iter()
            .fold(Mat4::IDENTITY, |acc, op| acc * op.matrix())
    }
}

impl FromIterator<TransformOp> for TransformDescriptor {
    fn from_iter<I: IntoIterator<Item = TransformOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl TransformOp {
    fn matrix(self) -> Mat4 {
        match self {
            Self::Center => Mat4::IDENTITY,
            Self::Translate(t) => Mat4::from_translation(t),
            Self::RotateX(deg) => Mat4::from_rotation_x(deg.to_radians()),
            Self::RotateY(deg) => Mat4::from_rotation_y(deg.to_radians()),
            Self::RotateZ(deg) => Mat4::from_rotation_z(deg.to_radians()),
            Self::Scale(s) => Mat4::from_scale(Vec3::splat(s)),
        }
    }
}

// Adding 0.0 folds -0.0 into 0.0 so negated zeros print cleanly.
fn clean(v: f32) -> f32 {
    v + 0.0
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Center => write!(f, "translate(-50%,-50%)"),
            Self::Translate(t) => write!(
                f,
                "translate3d({}px,{}px,{}px)",
                clean(t.x),
                clean(t.y),
                clean(t.z)
            ),
            Self::RotateX(deg) => write!(f, "rotateX({}deg)", clean(deg)),
            Self::RotateY(deg) => write!(f, "rotateY({}deg)", clean(deg)),
            Self::RotateZ(deg) => write!(f, "rotateZ({}deg)", clean(deg)),
            Self::Scale(s) => write!(f, "scale({})", clean(s)),
        }
    }
}

impl fmt::Display for TransformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Translation op.
#[must_use]
pub fn translate(t: Vec3) -> TransformOp {
    TransformOp::Translate(t)
}

/// The three rotation ops for `r` (degrees) in the given axis order.
#[must_use]
pub fn rotate(r: Vec3, order: RotationOrder) -> [TransformOp; 3] {
    let x = TransformOp::RotateX(r.x);
    let y = TransformOp::RotateY(r.y);
    let z = TransformOp::RotateZ(r.z);
    match order {
        RotationOrder::Forward => [x, y, z],
        RotationOrder::Reversed => [z, y, x],
    }
}

/// Scale op.
#[must_use]
pub fn scale(s: f32) -> TransformOp {
    TransformOp::Scale(s)
}

/// Translate, rotate (X, Y, Z), then scale.
#[must_use]
pub fn compose(t: &Transform3D) -> TransformDescriptor {
    std::iter::once(translate(t.translate))
        .chain(rotate(t.rotate, RotationOrder::Forward))
        .chain(std::iter::once(scale(t.scale)))
        .collect()
}

/// Centered placement of a step or decoration inside the canvas.
#[must_use]
pub fn place(t: &Transform3D) -> TransformDescriptor {
    std::iter::once(TransformOp::Center)
        .collect::<TransformDescriptor>()
        .then(compose(t))
}

/// Canvas half of a camera transform: reversed rotation, then translation.
#[must_use]
pub fn camera_canvas(target: &Transform3D) -> TransformDescriptor {
    rotate(target.rotate, RotationOrder::Reversed)
        .into_iter()
        .chain(std::iter::once(translate(target.translate)))
        .collect()
}

/// Viewport half of a camera transform: scale only.
#[must_use]
pub fn camera_viewport(target: &Transform3D) -> TransformDescriptor {
    std::iter::once(scale(target.scale)).collect()
}
