//! # gxform G-code
//!
//! The line-oriented G-code transformer: classifies each line, extracts the
//! X/Y/Z fields of `G0`/`G1` moves, applies a scale → rotate → translate
//! transform and re-serializes the line. Everything else is copied verbatim.

pub mod geometry;
pub mod line;
pub mod outcome;
pub mod transformer;

pub use geometry::{CoordinateTransform, TransformedPoint};
pub use line::{
    classify_line, parse_coordinate, CoordinateTriple, CoordinateValue, LineKind, MotionCommand,
};
pub use outcome::{transform, transform_with, TransformOutcome};
pub use transformer::{LineTransformer, TransformReport};
