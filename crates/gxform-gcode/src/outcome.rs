//! Control-surface boundary
//!
//! Callers that only need a yes/no answer and a message to show the user go
//! through [`transform`]. Every failure is caught here and turned into an
//! unsuccessful [`TransformOutcome`].

use std::path::Path;

use gxform_core::{TransformError, TransformParameters};
use serde::{Deserialize, Serialize};

use crate::transformer::{LineTransformer, TransformReport};

/// Result of a transform job as presented to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOutcome {
    /// Whether the output file was written completely
    pub success: bool,
    /// Human-readable confirmation or error description
    pub message: String,
}

impl TransformOutcome {
    /// Build an outcome from the result of a file transform
    pub fn from_result(
        input: &Path,
        output: &Path,
        result: &Result<TransformReport, TransformError>,
    ) -> Self {
        match result {
            Ok(_) => Self {
                success: true,
                message: format!(
                    "Transformed {} and saved as {}",
                    input.display(),
                    output.display()
                ),
            },
            Err(e) => Self::failure(e),
        }
    }

    /// An unsuccessful outcome carrying the error text
    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("Error: {}", error),
        }
    }
}

/// Transform `input` into `output` with the given parameters
///
/// Success names both files; failure embeds the underlying error text.
#[allow(clippy::too_many_arguments)]
pub fn transform(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    rotation_degrees: f64,
    scale_x: f64,
    scale_y: f64,
    scale_z: f64,
    translate_x: f64,
    translate_y: f64,
) -> TransformOutcome {
    let params = TransformParameters::new(
        rotation_degrees,
        scale_x,
        scale_y,
        scale_z,
        translate_x,
        translate_y,
    );
    transform_with(input, output, params)
}

/// Same as [`transform`], taking a prepared parameter set
pub fn transform_with(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    params: TransformParameters,
) -> TransformOutcome {
    let (input, output) = (input.as_ref(), output.as_ref());
    let result = LineTransformer::new(params).transform_file(input, output);
    TransformOutcome::from_result(input, output, &result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_success_message_names_both_files() {
        let outcome = TransformOutcome::from_result(
            Path::new("part.gcode"),
            Path::new("part_transformed.gcode"),
            &Ok(TransformReport::default()),
        );
        assert!(outcome.success);
        assert_eq!(
            outcome.message,
            "Transformed part.gcode and saved as part_transformed.gcode"
        );
    }

    #[test]
    fn test_failure_message_embeds_error() {
        let err = TransformError::input(
            "missing.nc",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let outcome = TransformOutcome::from_result(
            Path::new("missing.nc"),
            Path::new("out.nc"),
            &Err(err),
        );
        assert!(!outcome.success);
        assert_eq!(
            outcome.message,
            "Error: Cannot read input file missing.nc: No such file or directory"
        );
    }
}
