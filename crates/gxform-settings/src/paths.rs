//! Input/output path handling for the control surface

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Suffix appended to the input's stem when suggesting an output name
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_transformed";

/// Extension of suggested output files
const OUTPUT_EXTENSION: &str = "gcode";

/// Suggest an output path for `input`
///
/// Drops the last extension, appends `suffix` and uses `.gcode`:
/// `parts/bracket.nc` becomes `parts/bracket_transformed.gcode`.
pub fn suggest_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}.{}", stem, suffix, OUTPUT_EXTENSION))
}

/// Pre-flight check of the two job paths
///
/// Both must be supplied and must not name the same file, since the output
/// is truncated while the input is still being read. Existence and
/// writability are left to the transform itself, which reports them with the
/// underlying I/O error.
pub fn check_paths(input: &Path, output: &Path) -> ConfigResult<()> {
    if input.as_os_str().is_empty() {
        return Err(ConfigError::MissingPath("input".to_string()));
    }
    if output.as_os_str().is_empty() {
        return Err(ConfigError::MissingPath("output".to_string()));
    }
    if same_file(input, output) {
        return Err(ConfigError::SamePath(output.display().to_string()));
    }
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_output_path() {
        assert_eq!(
            suggest_output_path(Path::new("parts/bracket.nc"), DEFAULT_OUTPUT_SUFFIX),
            PathBuf::from("parts/bracket_transformed.gcode")
        );
        assert_eq!(
            suggest_output_path(Path::new("job.v2.gcode"), DEFAULT_OUTPUT_SUFFIX),
            PathBuf::from("job.v2_transformed.gcode")
        );
        assert_eq!(
            suggest_output_path(Path::new("toolpath"), "_rotated"),
            PathBuf::from("toolpath_rotated.gcode")
        );
    }

    #[test]
    fn test_check_paths() {
        assert!(check_paths(Path::new("in.gcode"), Path::new("out.gcode")).is_ok());
        assert_eq!(
            check_paths(Path::new(""), Path::new("out.gcode")),
            Err(ConfigError::MissingPath("input".to_string()))
        );
        assert_eq!(
            check_paths(Path::new("in.gcode"), Path::new("")),
            Err(ConfigError::MissingPath("output".to_string()))
        );
    }

    #[test]
    fn test_check_paths_rejects_same_file() {
        assert!(matches!(
            check_paths(Path::new("job.gcode"), Path::new("job.gcode")),
            Err(ConfigError::SamePath(_))
        ));

        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("job.gcode");
        std::fs::write(&input, "G1 X1\n").unwrap();
        let aliased = dir.path().join(".").join("job.gcode");
        assert!(matches!(
            check_paths(&input, &aliased),
            Err(ConfigError::SamePath(_))
        ));
        assert!(check_paths(&input, &dir.path().join("other.gcode")).is_ok());
    }
}
