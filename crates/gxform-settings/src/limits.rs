//! Parameter limits for the control surface
//!
//! The interactive form restricts each control to a range and snaps values to
//! a fixed number of decimals. The transformer accepts any finite value; the
//! limits here are applied by the caller before a job starts.

use gxform_core::TransformParameters;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Allowed range and display precision for one control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
    /// Number of decimal places values are rounded to
    pub decimals: u32,
}

impl ParameterRange {
    /// Create a new range
    pub const fn new(min: f64, max: f64, decimals: u32) -> Self {
        Self { min, max, decimals }
    }

    /// Check whether `value` lies within the range (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Round `value` to the configured number of decimals
    pub fn round(&self, value: f64) -> f64 {
        let multiplier = 10_f64.powi(self.decimals as i32);
        (value * multiplier).round() / multiplier
    }

    /// Validate `value` for the control named `key`
    pub fn check(&self, key: &str, value: f64) -> ConfigResult<()> {
        if !value.is_finite() {
            return Err(ConfigError::NonFinite {
                key: key.to_string(),
            });
        }
        if !self.contains(value) {
            return Err(ConfigError::ValueOutOfRange {
                key: key.to_string(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    fn validate_self(&self, key: &str) -> ConfigResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::InvalidRange {
                key: key.to_string(),
                reason: "bounds must be finite".to_string(),
            });
        }
        if self.min > self.max {
            return Err(ConfigError::InvalidRange {
                key: key.to_string(),
                reason: format!("min {} is greater than max {}", self.min, self.max),
            });
        }
        Ok(())
    }
}

/// Ranges for every transform control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterLimits {
    /// Rotation in degrees
    pub rotation: ParameterRange,
    /// Scale factor, shared by X, Y and Z
    pub scale: ParameterRange,
    /// Translation in mm, shared by X and Y
    pub translate: ParameterRange,
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            rotation: ParameterRange::new(-180.0, 180.0, 1),
            scale: ParameterRange::new(0.1, 3.0, 2),
            translate: ParameterRange::new(-50.0, 50.0, 1),
        }
    }
}

impl ParameterLimits {
    /// Each control paired with its name, value and range
    fn controls(&self, params: &TransformParameters) -> [(&'static str, f64, ParameterRange); 6] {
        [
            ("rotation_degrees", params.rotation_degrees, self.rotation),
            ("scale_x", params.scale_x, self.scale),
            ("scale_y", params.scale_y, self.scale),
            ("scale_z", params.scale_z, self.scale),
            ("translate_x", params.translate_x, self.translate),
            ("translate_y", params.translate_y, self.translate),
        ]
    }

    /// Check every value in `params` against its range
    ///
    /// Reports the first offending control.
    pub fn validate(&self, params: &TransformParameters) -> ConfigResult<()> {
        for (key, value, range) in self.controls(params) {
            range.check(key, value)?;
        }
        Ok(())
    }

    /// Snap every value in `params` to its control's precision
    pub fn round(&self, params: &TransformParameters) -> TransformParameters {
        TransformParameters {
            rotation_degrees: self.rotation.round(params.rotation_degrees),
            scale_x: self.scale.round(params.scale_x),
            scale_y: self.scale.round(params.scale_y),
            scale_z: self.scale.round(params.scale_z),
            translate_x: self.translate.round(params.translate_x),
            translate_y: self.translate.round(params.translate_y),
        }
    }

    /// Validate the ranges themselves
    pub fn validate_ranges(&self) -> ConfigResult<()> {
        self.rotation.validate_self("rotation")?;
        self.scale.validate_self("scale")?;
        self.translate.validate_self("translate")?;
        Ok(())
    }
}
