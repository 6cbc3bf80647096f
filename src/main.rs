//! `gxform` command-line front end.
//!
//! Collects the transform parameters and the two file paths, then runs a
//! single transform job and reports its outcome.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use gxform::{
    check_paths, init_logging, suggest_output_path, transform_with, Config, TransformParameters,
};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "gxform",
    version,
    long_version = LONG_VERSION,
    about = "Rotate, scale and translate the G0/G1 moves of a G-code file",
    long_about = "Rotate, scale and translate the X/Y/Z coordinates of every G0/G1 move in a \
G-code file and write a transformed copy. X and Y are scaled, rotated about the origin and then \
translated; Z is only scaled. All other lines are copied unchanged."
)]
struct Cli {
    /// G-code file to transform.
    input: PathBuf,

    /// Output file. Defaults to `<input>_transformed.gcode` next to the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rotation about the origin in degrees (counter-clockwise).
    #[arg(short, long, allow_hyphen_values = true)]
    rotation: Option<f64>,

    /// Scale factor for X.
    #[arg(long, allow_hyphen_values = true)]
    scale_x: Option<f64>,

    /// Scale factor for Y.
    #[arg(long, allow_hyphen_values = true)]
    scale_y: Option<f64>,

    /// Scale factor for Z.
    #[arg(long, allow_hyphen_values = true)]
    scale_z: Option<f64>,

    /// Translation added to X after rotation (mm).
    #[arg(long, allow_hyphen_values = true)]
    translate_x: Option<f64>,

    /// Translation added to Y after rotation (mm).
    #[arg(long, allow_hyphen_values = true)]
    translate_y: Option<f64>,

    /// Config file (.toml or .json) with default parameters and limits.
    #[arg(short, long, env = "GXFORM_CONFIG")]
    config: Option<PathBuf>,

    /// Write the resolved parameters and limits to this config file.
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Accept parameters outside the usual control ranges.
    #[arg(long)]
    no_limits: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Overlay the command-line values onto `base`
    fn parameters(&self, base: TransformParameters) -> TransformParameters {
        TransformParameters {
            rotation_degrees: self.rotation.unwrap_or(base.rotation_degrees),
            scale_x: self.scale_x.unwrap_or(base.scale_x),
            scale_y: self.scale_y.unwrap_or(base.scale_y),
            scale_z: self.scale_z.unwrap_or(base.scale_z),
            translate_x: self.translate_x.unwrap_or(base.translate_x),
            translate_y: self.translate_y.unwrap_or(base.translate_y),
        }
    }

    fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load_or_default(&Config::default_path())
            .context("Failed to load default config"),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_level())?;

    let mut config = load_config(&cli)?;

    // --no-limits applies to this run only and is never written back
    let enforce_limits = config.output.enforce_limits && !cli.no_limits;
    let params = config
        .resolve_parameters(&cli.parameters(config.parameters), enforce_limits)
        .context("Invalid transform parameters")?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| suggest_output_path(&cli.input, &config.output.suffix));
    check_paths(&cli.input, &output)?;

    if let Some(path) = &cli.save_config {
        config.parameters = params;
        config
            .save_to_file(path)
            .with_context(|| format!("Failed to save config {}", path.display()))?;
        tracing::info!("Saved config to {}", path.display());
    }

    tracing::debug!("Transforming with {}", params);
    let outcome = transform_with(&cli.input, &output, params);

    if outcome.success {
        println!("{}", outcome.message);
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{}", outcome.message);
        Ok(ExitCode::FAILURE)
    }
}
