//! Transform parameter set
//!
//! The five numeric controls of a job (rotation, three scale factors and a
//! two-axis translation). No bounds are enforced here; range restriction is
//! a control-surface concern handled by `gxform-settings`.

use serde::{Deserialize, Serialize};

/// Machine axes carried by a motion command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in emission order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The G-code word letter for this axis
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    /// Axis addressed by a token, if the token starts with an axis letter
    ///
    /// Only uppercase letters are recognised.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.as_bytes().first() {
            Some(b'X') => Some(Axis::X),
            Some(b'Y') => Some(Axis::Y),
            Some(b'Z') => Some(Axis::Z),
            _ => None,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parameters for one transform job
///
/// X/Y are scaled, then rotated about the origin, then translated.
/// Z is only scaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParameters {
    /// Rotation about the origin in degrees (counter-clockwise)
    pub rotation_degrees: f64,
    /// Scale factor for X
    pub scale_x: f64,
    /// Scale factor for Y
    pub scale_y: f64,
    /// Scale factor for Z
    pub scale_z: f64,
    /// Translation added to X after rotation (mm)
    pub translate_x: f64,
    /// Translation added to Y after rotation (mm)
    pub translate_y: f64,
}

impl Default for TransformParameters {
    fn default() -> Self {
        Self::identity()
    }
}

impl TransformParameters {
    /// The identity transform (no rotation, unit scale, no translation)
    pub fn identity() -> Self {
        Self {
            rotation_degrees: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    /// Build a parameter set from the six raw values
    pub fn new(
        rotation_degrees: f64,
        scale_x: f64,
        scale_y: f64,
        scale_z: f64,
        translate_x: f64,
        translate_y: f64,
    ) -> Self {
        Self {
            rotation_degrees,
            scale_x,
            scale_y,
            scale_z,
            translate_x,
            translate_y,
        }
    }

    /// Set the rotation in degrees
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Set the per-axis scale factors
    pub fn with_scale(mut self, x: f64, y: f64, z: f64) -> Self {
        self.scale_x = x;
        self.scale_y = y;
        self.scale_z = z;
        self
    }

    /// Set the X/Y translation
    pub fn with_translation(mut self, x: f64, y: f64) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }

    /// Rotation converted to radians
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_degrees.to_radians()
    }

    /// Check whether every value is a finite number
    pub fn is_finite(&self) -> bool {
        [
            self.rotation_degrees,
            self.scale_x,
            self.scale_y,
            self.scale_z,
            self.translate_x,
            self.translate_y,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl std::fmt::Display for TransformParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rotate {}°, scale X{} Y{} Z{}, translate X{} Y{}",
            self.rotation_degrees,
            self.scale_x,
            self.scale_y,
            self.scale_z,
            self.translate_x,
            self.translate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let params = TransformParameters::default();
        assert_eq!(params, TransformParameters::identity());
        assert_eq!(params.scale_z, 1.0);
        assert_eq!(params.rotation_radians(), 0.0);
    }

    #[test]
    fn test_builders() {
        let params = TransformParameters::identity()
            .with_rotation(90.0)
            .with_scale(2.0, 0.5, 1.5)
            .with_translation(-10.0, 4.0);

        assert_ne!(params, TransformParameters::identity());
        assert_eq!(params, TransformParameters::new(90.0, 2.0, 0.5, 1.5, -10.0, 4.0));
        assert!((params.rotation_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(params.scale_y, 0.5);
    }

    #[test]
    fn test_is_finite() {
        assert!(TransformParameters::identity().is_finite());
        assert!(!TransformParameters::identity().with_rotation(f64::NAN).is_finite());
        assert!(!TransformParameters::identity()
            .with_translation(f64::INFINITY, 0.0)
            .is_finite());
    }

    #[test]
    fn test_axis_from_token() {
        assert_eq!(Axis::from_token("X10.5"), Some(Axis::X));
        assert_eq!(Axis::from_token("Y"), Some(Axis::Y));
        assert_eq!(Axis::from_token("Z-1"), Some(Axis::Z));
        assert_eq!(Axis::from_token("x10"), None);
        assert_eq!(Axis::from_token("F1200"), None);
        assert_eq!(Axis::from_token(""), None);
        assert_eq!(Axis::Z.to_string(), "Z");
    }

    #[test]
    fn test_partial_deserialize_fills_identity() {
        let params: TransformParameters =
            serde_json::from_str(r#"{"rotation_degrees": 45.0, "scale_z": 2.0}"#).unwrap();
        assert_eq!(params.rotation_degrees, 45.0);
        assert_eq!(params.scale_x, 1.0);
        assert_eq!(params.scale_z, 2.0);
        assert_eq!(params.translate_y, 0.0);
    }
}
