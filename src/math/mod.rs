pub mod function_bank;

pub use function_bank::{FunctionKind, FunctionTable};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Amplitude multiplier applied at `angle`.
///
/// `angle / 180 * pi * scale`. The angle accumulator is stepped in the same
/// units as the delta angle, which callers conventionally give in radians,
/// so the degree conversion here is part of the pattern's look and must
/// stay as written.
#[must_use]
pub fn scale_factor(angle: f64, scale: f64) -> f64 {
    (angle / 180.0) * std::f64::consts::PI * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factor_is_zero_at_origin() {
        assert!(scale_factor(0.0, 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn scale_factor_converts_degrees() {
        assert!((scale_factor(180.0, 1.0) - std::f64::consts::PI).abs() < TOLERANCE);
        assert!((scale_factor(90.0, 2.0) - std::f64::consts::PI).abs() < TOLERANCE);
    }
}
