//! # gxform
//!
//! Rotate, scale and translate the motion commands of a G-code file.
//!
//! ## Architecture
//!
//! gxform is organized as a workspace with multiple crates:
//!
//! 1. **gxform-core** - Transform parameters and error types
//! 2. **gxform-gcode** - The line transformer (classification, coordinate extraction, rewrite)
//! 3. **gxform-settings** - Config files, parameter limits, output path handling
//! 4. **gxform** - This crate: re-exports, logging setup and the `gxform` binary
//!
//! Only `G0`/`G1` lines carrying X/Y/Z fields are rewritten. Every other line
//! is copied to the output byte for byte.

pub use gxform_core::{Axis, TransformError, TransformParameters};

pub use gxform_gcode::{
    classify_line, parse_coordinate, transform, transform_with, CoordinateTransform,
    CoordinateTriple, CoordinateValue, LineKind, LineTransformer, MotionCommand,
    TransformOutcome, TransformReport, TransformedPoint,
};

pub use gxform_settings::{
    check_paths, suggest_output_path, Config, ConfigError, OutputSettings, ParameterLimits,
    ParameterRange, SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output to stderr, keeping stdout for the job result
/// - RUST_LOG environment variable support, falling back to `default_level`
pub fn init_logging(default_level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
