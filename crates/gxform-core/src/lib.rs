//! # gxform Core
//!
//! Core types and error handling for gxform.
//! Provides the transform parameter set shared by the G-code transformer
//! and the control surface, plus the error taxonomy used across the workspace.

pub mod error;
pub mod params;

pub use error::TransformError;
pub use params::{Axis, TransformParameters};
