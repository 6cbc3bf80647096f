//! Configuration management for gxform
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats, stored by default in the platform
//! configuration directory.
//!
//! Configuration is organized into sections:
//! - Default transform parameters (a saved preset)
//! - Parameter limits applied by the control surface
//! - Output naming preferences

use gxform_core::TransformParameters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};
use crate::limits::ParameterLimits;
use crate::paths::DEFAULT_OUTPUT_SUFFIX;

/// Directory name under the platform config directory
const APP_DIR_NAME: &str = "gxform";

/// Default config file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Output preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Suffix added to the input name when no output path is given
    pub suffix: String,
    /// Whether parameters must fall inside `limits` before a job runs
    pub enforce_limits: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            enforce_limits: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Parameters used when none are given on the command line
    pub parameters: TransformParameters,
    /// Ranges and precision for each parameter
    pub limits: ParameterLimits,
    /// Output preferences
    pub output: OutputSettings,
}

impl Config {
    /// Default config file location (`<config dir>/gxform/config.toml`)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load the config at `path`, or the defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    ///
    /// The preset parameters are not range-checked here; that happens in
    /// [`Config::resolve_parameters`], where the caller decides whether
    /// limits apply.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Check that the limits are usable and the preset values are finite
    pub fn validate(&self) -> SettingsResult<()> {
        self.limits.validate_ranges()?;

        if !self.parameters.is_finite() {
            return Err(ConfigError::NonFinite {
                key: "parameters".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Prepare `params` for a job
    ///
    /// With `enforce_limits`, values are rounded to each control's precision
    /// and then range-checked against `self.limits`. Otherwise they pass
    /// through unchanged. Callers normally pass `output.enforce_limits`,
    /// possibly overridden for a single run.
    pub fn resolve_parameters(
        &self,
        params: &TransformParameters,
        enforce_limits: bool,
    ) -> SettingsResult<TransformParameters> {
        if !enforce_limits {
            return Ok(*params);
        }
        let rounded = self.limits.round(params);
        self.limits.validate(&rounded)?;
        Ok(rounded)
    }
}

/// Supported config file formats
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.parameters, TransformParameters::identity());
        assert_eq!(config.output.suffix, "_transformed");
        assert!(config.output.enforce_limits);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.parameters = TransformParameters::new(15.0, 1.5, 1.5, 1.0, -5.0, 2.5);
        config.output.suffix = "_rot".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.parameters.rotation_degrees = -90.0;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.parameters.rotation_degrees, -90.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[parameters]\nscale_z = 2.0\n").unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.parameters.scale_z, 2.0);
        assert_eq!(loaded.parameters.scale_x, 1.0);
        assert_eq!(loaded.limits, ParameterLimits::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "parameters: {}").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(ref ext)) if ext == "yaml"
        ));
    }

    #[test]
    fn test_out_of_range_preset_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preset.toml");
        std::fs::write(&path, "[parameters]\ntranslate_x = 75.0\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert!(config.output.enforce_limits);
        assert_eq!(config.parameters.translate_x, 75.0);

        // Rejected only once limits are applied to the job
        assert!(config.resolve_parameters(&config.parameters, true).is_err());
        assert_eq!(
            config.resolve_parameters(&config.parameters, false).unwrap(),
            config.parameters
        );
    }

    #[test]
    fn test_out_of_range_preset_saves_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preset.toml");

        let mut config = Config::default();
        config.parameters.scale_x = 5.0;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(loaded.output.enforce_limits);
    }

    #[test]
    fn test_non_finite_preset_rejected() {
        let mut config = Config::default();
        config.parameters.rotation_degrees = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::Config(ConfigError::NonFinite { .. }))
        ));
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_parameters() {
        let config = Config::default();
        let params = TransformParameters::new(45.04, 1.004, 1.0, 1.0, 0.0, 0.0);
        let resolved = config.resolve_parameters(&params, true).unwrap();
        assert_eq!(resolved.rotation_degrees, 45.0);
        assert_eq!(resolved.scale_x, 1.0);

        let too_big = TransformParameters::identity().with_scale(10.0, 1.0, 1.0);
        assert!(config.resolve_parameters(&too_big, true).is_err());
        assert_eq!(config.resolve_parameters(&too_big, false).unwrap(), too_big);
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        let path = Config::default_path();
        assert!(path.ends_with("gxform/config.toml"));
    }
}
