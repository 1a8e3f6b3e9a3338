//! Transform Composer.
//!
//! Pure, stateless helpers for the per-entity [`Transform3D`] and the
//! inverse camera transform that brings a step to the viewport center.
//! [`compose`] turns transforms into ordered [`TransformDescriptor`]s that a
//! renderer can apply verbatim.

/// Ordered transform descriptors and their matrix equivalents.
pub mod compose;

use glam::Vec3;

pub use compose::{TransformDescriptor, TransformOp};

use crate::error::TransformError;

/// Translation (px), rotation (degrees per axis) and uniform scale of a step,
/// decoration or camera.
///
/// `scale` is always positive for values built through [`Transform3D::new`];
/// inversion divides by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    /// Translation in pixels.
    pub translate: Vec3,
    /// Rotation around X, Y and Z in degrees.
    pub rotate: Vec3,
    /// Uniform scale factor.
    pub scale: f32,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3D {
    /// Zero translation and rotation, scale 1.
    pub const IDENTITY: Self = Self {
        translate: Vec3::ZERO,
        rotate: Vec3::ZERO,
        scale: 1.0,
    };

    /// Build a transform, coercing an invalid scale to `1`.
    #[must_use]
    pub fn new(translate: Vec3, rotate: Vec3, scale: f32) -> Self {
        let scale = if is_valid_scale(scale) {
            scale
        } else {
            log::warn!("scale {scale} is not invertible, using 1");
            1.0
        };
        Self {
            translate,
            rotate,
            scale,
        }
    }

    /// Inverse transform: negated translation and rotation, reciprocal scale.
    ///
    /// # Errors
    ///
    /// [`TransformError::NonPositiveScale`] if `scale` is zero, negative,
    /// not finite, or so small that its reciprocal overflows.
    pub fn try_invert(&self) -> Result<Self, TransformError> {
        if !is_valid_scale(self.scale) {
            return Err(TransformError::NonPositiveScale(self.scale));
        }
        Ok(Self {
            translate: -self.translate,
            rotate: -self.rotate,
            scale: 1.0 / self.scale,
        })
    }

    /// Like [`try_invert`](Self::try_invert), but an invalid scale inverts
    /// to scale `1` instead of failing.
    #[must_use]
    pub fn inverted(&self) -> Self {
        self.try_invert().unwrap_or_else(|e| {
            log::warn!("{e}; substituting identity scale");
            Self {
                translate: -self.translate,
                rotate: -self.rotate,
                scale: 1.0,
            }
        })
    }

    /// Whether translation, rotation and scale agree within `epsilon`.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.translate.abs_diff_eq(other.translate, epsilon)
            && self.rotate.abs_diff_eq(other.rotate, epsilon)
            && (self.scale - other.scale).abs() <= epsilon
    }
}

// The reciprocal must stay finite too: subnormal scales invert to infinity.
fn is_valid_scale(scale: f32) -> bool {
    scale.is_finite() && scale > 0.0 && scale.recip().is_finite()
}
