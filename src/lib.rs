//! Parametric pattern curves.
//!
//! Walks an angle parameter, evaluates a pair of functions picked from a
//! fixed function bank, and emits vertex and color buffers ready for upload
//! to a graphics API. See [`pattern::GenerateCurve`].

pub mod color;
pub mod error;
pub mod math;
pub mod pattern;
pub mod preset;

pub use error::{ConfigurationError, CurveworkError, PresetError, Result};
pub use pattern::{generate, CurveParameters, GeneratedCurve};
