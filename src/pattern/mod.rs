mod bounding_box;
mod curve;
mod generate;
mod params;
mod state;

pub use bounding_box::{Aabb, BoundingBox};
pub use curve::GeneratedCurve;
pub use generate::{generate, GenerateCurve, GeneratorConfig, DEFAULT_CAPACITY};
pub use params::{AdjustableParam, CurveParameters};
pub use state::PatternState;
