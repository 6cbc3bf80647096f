//! Composed scale → rotate → translate transform

use gxform_core::TransformParameters;

/// Result of transforming one coordinate triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformedPoint {
    pub x: f64,
    pub y: f64,
    /// Z after scaling (Z is never rotated or translated)
    pub z: f64,
}

/// Precomputed planar transform for a job
///
/// The rotation angle is converted to radians and its sine and cosine taken
/// once, when the transform is built.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateTransform {
    params: TransformParameters,
    cos_a: f64,
    sin_a: f64,
}

impl CoordinateTransform {
    /// Build the transform for `params`
    pub fn new(params: TransformParameters) -> Self {
        let angle = params.rotation_radians();
        Self {
            params,
            cos_a: angle.cos(),
            sin_a: angle.sin(),
        }
    }

    /// Parameters this transform was built from
    pub fn params(&self) -> &TransformParameters {
        &self.params
    }

    /// Apply scale, then rotation about the origin, then translation
    pub fn apply(&self, x: f64, y: f64, z: f64) -> TransformedPoint {
        let p = &self.params;

        let x_scaled = x * p.scale_x;
        let y_scaled = y * p.scale_y;
        let z_scaled = z * p.scale_z;

        let new_x = x_scaled * self.cos_a - y_scaled * self.sin_a + p.translate_x;
        let new_y = x_scaled * self.sin_a + y_scaled * self.cos_a + p.translate_y;

        TransformedPoint {
            x: new_x,
            y: new_y,
            z: z_scaled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_identity() {
        let t = CoordinateTransform::new(TransformParameters::identity());
        let p = t.apply(12.5, -3.25, 7.0);
        assert_eq!(p, TransformedPoint { x: 12.5, y: -3.25, z: 7.0 });
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let t = CoordinateTransform::new(TransformParameters::identity().with_rotation(90.0));
        let p = t.apply(10.0, 0.0, 0.0);
        assert_close(p.x, 0.0);
        assert_close(p.y, 10.0);
    }

    #[test]
    fn test_rotation_negative_angle() {
        let t = CoordinateTransform::new(TransformParameters::identity().with_rotation(-90.0));
        let p = t.apply(0.0, 5.0, 0.0);
        assert_close(p.x, 5.0);
        assert_close(p.y, 0.0);
    }

    #[test]
    fn test_scale_applies_before_rotation() {
        let params = TransformParameters::identity()
            .with_rotation(90.0)
            .with_scale(2.0, 1.0, 1.0);
        let p = CoordinateTransform::new(params).apply(3.0, 0.0, 0.0);
        // Scaled along X to 6, then rotated onto Y
        assert_close(p.x, 0.0);
        assert_close(p.y, 6.0);
    }

    #[test]
    fn test_translation_applies_after_rotation() {
        let params = TransformParameters::identity()
            .with_rotation(180.0)
            .with_translation(10.0, -5.0);
        let p = CoordinateTransform::new(params).apply(1.0, 1.0, 0.0);
        assert_close(p.x, 9.0);
        assert_close(p.y, -6.0);
    }

    #[test]
    fn test_z_is_only_scaled() {
        let params = TransformParameters::new(45.0, 1.0, 1.0, 3.0, 100.0, 100.0);
        let p = CoordinateTransform::new(params).apply(0.0, 0.0, 2.0);
        assert_eq!(p.z, 6.0);
    }
}
