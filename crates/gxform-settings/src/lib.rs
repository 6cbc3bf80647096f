//! gxform Settings Crate
//!
//! Handles the control-surface side of a transform job: configuration files,
//! parameter range limits and rounding, and input/output path handling.
//! None of this is enforced by the transformer itself.

pub mod config;
pub mod error;
pub mod limits;
pub mod paths;

pub use config::{Config, OutputSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use limits::{ParameterLimits, ParameterRange};
pub use paths::{check_paths, suggest_output_path, DEFAULT_OUTPUT_SUFFIX};
