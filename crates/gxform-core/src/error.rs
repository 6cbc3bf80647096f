//! Error handling for gxform
//!
//! Provides the error type for a transform pass: input and output access
//! failures, each carrying the path involved and the underlying I/O error.
//!
//! A coordinate field whose number fails to parse is deliberately *not* an
//! error here; the tokenizer reports it as an absent coordinate instead.
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Transform error type
///
/// Represents the fatal failures of a transform pass. Either one aborts the
/// whole pass; nothing is retried.
#[derive(Error, Debug)]
pub enum TransformError {
    /// Input file missing, unreadable, or not valid UTF-8
    #[error("Cannot read input file {}: {source}", .path.display())]
    InputAccess {
        /// The input path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Output path uncreatable or unwritable (permissions, invalid path, disk full)
    #[error("Cannot write output file {}: {source}", .path.display())]
    OutputAccess {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl TransformError {
    /// Create an input access error for `path`
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TransformError::InputAccess {
            path: path.into(),
            source,
        }
    }

    /// Create an output access error for `path`
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TransformError::OutputAccess {
            path: path.into(),
            source,
        }
    }

    /// The I/O error that caused this failure
    pub fn io_error(&self) -> &io::Error {
        match self {
            TransformError::InputAccess { source, .. } | TransformError::OutputAccess { source, .. } => {
                source
            }
        }
    }

    /// Check if the failure happened on the input side
    pub fn is_input_error(&self) -> bool {
        matches!(self, TransformError::InputAccess { .. })
    }
}
