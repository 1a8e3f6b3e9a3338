use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Pixels per grid unit when mapping a [`GridLocation`] onto screen space.
pub const PIXELS_PER_UNIT: f32 = 1000.0;

/// Logical grid cell `(x, y, z)` of a step.
///
/// Grid units, not pixels. Two locations are equal iff all three components
/// compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridLocation {
    /// Horizontal cell (left/right).
    pub x: f32,
    /// Vertical cell (up/down).
    pub y: f32,
    /// Depth cell (page up/page down).
    pub z: f32,
}

impl GridLocation {
    /// The origin cell.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Location from its three components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Parse a comma-separated `"x,y,z"` string.
    ///
    /// Missing components default to 0, so `"2"` is `(2, 0, 0)`. Each
    /// component uses its leading numeric prefix (see [`parse_number`]); an
    /// unparsable component also falls back to 0. Returns `None` for an
    /// empty or blank string.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        let mut parts = text.split(',').map(|part| {
            parse_number(part).unwrap_or_else(|| {
                log::warn!("unparsable location component {part:?} in {text:?}, using 0");
                0.0
            })
        });
        let x = parts.next().unwrap_or(0.0);
        let y = parts.next().unwrap_or(0.0);
        let z = parts.next().unwrap_or(0.0);
        Some(Self::new(x, y, z))
    }

    /// Screen-space pixel translation of this cell.
    ///
    /// Grid y maps to screen depth and grid z to screen height, both with
    /// inverted sign: `(x, -z, -y) * 1000`.
    #[must_use]
    pub fn to_pixels(self) -> Vec3 {
        Vec3::new(self.x, -self.z, -self.y) * PIXELS_PER_UNIT
    }

    /// Copy with `dx`, `dy`, `dz` added.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32, dz: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Parse the longest leading decimal number of `text`, ignoring
/// surrounding whitespace and any trailing unit (`"90deg"` is 90).
///
/// Returns `None` if `text` does not start with a number.
#[must_use]
pub fn parse_number(text: &str) -> Option<f32> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_triple() {
        assert_eq!(
            GridLocation::parse("1, -2, 3.5"),
            Some(GridLocation::new(1.0, -2.0, 3.5))
        );
    }

    #[test]
    fn missing_components_default_to_zero() {
        assert_eq!(
            GridLocation::parse("4"),
            Some(GridLocation::new(4.0, 0.0, 0.0))
        );
        assert_eq!(
            GridLocation::parse("4,5"),
            Some(GridLocation::new(4.0, 5.0, 0.0))
        );
        assert_eq!(
            GridLocation::parse("1,,2"),
            Some(GridLocation::new(1.0, 0.0, 2.0))
        );
    }

    #[test]
    fn blank_is_absent() {
        assert_eq!(GridLocation::parse(""), None);
        assert_eq!(GridLocation::parse("   "), None);
    }

    #[test]
    fn pixel_mapping_swaps_and_inverts_y_z() {
        let px = GridLocation::new(1.0, 2.0, 3.0).to_pixels();
        assert_eq!(px, Vec3::new(1000.0, -3000.0, -2000.0));
        assert_eq!(GridLocation::ORIGIN.to_pixels(), Vec3::ZERO);
    }

    #[test]
    fn number_prefixes() {
        assert_eq!(parse_number("90deg"), Some(90.0));
        assert_eq!(parse_number(" -1.5 "), Some(-1.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("2."), Some(2.0));
        assert_eq!(parse_number("1e3px"), Some(1000.0));
        assert_eq!(parse_number("3e"), Some(3.0));
        assert_eq!(parse_number("+7"), Some(7.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number(""), None);
    }
}
