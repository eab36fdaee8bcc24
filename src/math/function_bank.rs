use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar function `f64 -> f64` selectable by function code.
///
/// Domain errors are not reported: `Acos` outside `[-1, 1]` or `Log10` of a
/// negative number yield NaN, exactly as the underlying float functions do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Cos,
    Sin,
    Tan,
    Acos,
    Asin,
    Sinh,
    Cosh,
    Asinh,
    Acosh,
    Exp,
    Log10,
    Sqrt,
    Abs,
    Cbrt,
    Identity,
    Zero,
    CosSquared,
    SinSquared,
    TanSquared,
    SinCos,
    CosSin,
    Sigmoid,
    LnPlusOne,
    SinRootTwoSquared,
    Cot,
    Rational,
    DampedSine,
    Atan,
    Transcendental,
}

impl FunctionKind {
    /// Evaluates the function at `x`.
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Cos => x.cos(),
            Self::Sin => x.sin(),
            Self::Tan => x.tan(),
            Self::Acos => x.acos(),
            Self::Asin => x.asin(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Asinh => x.asinh(),
            Self::Acosh => x.acosh(),
            Self::Exp => x.exp(),
            Self::Log10 => x.log10(),
            Self::Sqrt => x.sqrt(),
            Self::Abs => x.abs(),
            Self::Cbrt => x.cbrt(),
            Self::Identity => x,
            Self::Zero => 0.0,
            Self::CosSquared => x.cos().powi(2),
            Self::SinSquared => x.sin().powi(2),
            Self::TanSquared => x.tan().powi(2),
            Self::SinCos => x.sin() * x.cos(),
            Self::CosSin => x.cos() * x.sin(),
            Self::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Self::LnPlusOne => (x + 1.0).ln(),
            Self::SinRootTwoSquared => (2.0 * x * x).sqrt().sin(),
            Self::Cot => 1.0 / x.tan(),
            Self::Rational => (x * x - 1.0) / (x + 1.0),
            Self::DampedSine => (-x).exp() * x.sin(),
            Self::Atan => x.atan(),
            Self::Transcendental => x.sin() * x.cos().exp() - x.cos() * x.sin().exp(),
        }
    }

    /// Short human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cos => "cos",
            Self::Sin => "sin",
            Self::Tan => "tan",
            Self::Acos => "acos",
            Self::Asin => "asin",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Asinh => "asinh",
            Self::Acosh => "acosh",
            Self::Exp => "exp",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Cbrt => "cbrt",
            Self::Identity => "identity",
            Self::Zero => "zero",
            Self::CosSquared => "cos^2",
            Self::SinSquared => "sin^2",
            Self::TanSquared => "tan^2",
            Self::SinCos => "sin*cos",
            Self::CosSin => "cos*sin",
            Self::Sigmoid => "sigmoid",
            Self::LnPlusOne => "ln(x+1)",
            Self::SinRootTwoSquared => "sin(sqrt(2x^2))",
            Self::Cot => "cot",
            Self::Rational => "(x^2-1)/(x+1)",
            Self::DampedSine => "exp(-x)*sin",
            Self::Atan => "atan",
            Self::Transcendental => "sin*exp(cos)-cos*exp(sin)",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const EXTENDED: [FunctionKind; 29] = [
    FunctionKind::Cos,
    FunctionKind::Sin,
    FunctionKind::Tan,
    FunctionKind::Acos,
    FunctionKind::Asin,
    FunctionKind::Sinh,
    FunctionKind::Cosh,
    FunctionKind::Asinh,
    FunctionKind::Acosh,
    FunctionKind::Exp,
    FunctionKind::Log10,
    FunctionKind::Sqrt,
    FunctionKind::Abs,
    FunctionKind::Cbrt,
    FunctionKind::Identity,
    FunctionKind::Zero,
    FunctionKind::CosSquared,
    FunctionKind::SinSquared,
    FunctionKind::TanSquared,
    FunctionKind::SinCos,
    FunctionKind::CosSin,
    FunctionKind::Sigmoid,
    FunctionKind::LnPlusOne,
    FunctionKind::SinRootTwoSquared,
    FunctionKind::Cot,
    FunctionKind::Rational,
    FunctionKind::DampedSine,
    FunctionKind::Atan,
    FunctionKind::Transcendental,
];

// Same as the first sixteen extended codes with asinh removed.
const COMPACT: [FunctionKind; 16] = [
    FunctionKind::Cos,
    FunctionKind::Sin,
    FunctionKind::Tan,
    FunctionKind::Acos,
    FunctionKind::Asin,
    FunctionKind::Sinh,
    FunctionKind::Cosh,
    FunctionKind::Acosh,
    FunctionKind::Exp,
    FunctionKind::Log10,
    FunctionKind::Sqrt,
    FunctionKind::Abs,
    FunctionKind::Cbrt,
    FunctionKind::Identity,
    FunctionKind::Zero,
    FunctionKind::Zero,
];

/// Code-to-function mapping used when resolving function codes.
///
/// Two mappings exist in saved presets. [`FunctionTable::Extended`] covers
/// codes `0..=28` and is the default. [`FunctionTable::Compact`] covers
/// `0..=15` with every code from 7 upward shifted down by one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionTable {
    #[default]
    Extended,
    Compact,
}

impl FunctionTable {
    /// Functions in code order.
    #[must_use]
    pub fn kinds(self) -> &'static [FunctionKind] {
        match self {
            Self::Extended => &EXTENDED,
            Self::Compact => &COMPACT,
        }
    }

    /// Resolves a function code.
    ///
    /// The code is floored first. Negative, non-finite or unmapped codes
    /// fall back to [`FunctionKind::Sin`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn select(self, code: f64) -> FunctionKind {
        let floored = code.floor();
        if !floored.is_finite() || floored < 0.0 {
            return FunctionKind::Sin;
        }
        self.kinds()
            .get(floored as usize)
            .copied()
            .unwrap_or(FunctionKind::Sin)
    }

    /// Resolves `code` and evaluates the function at `x`.
    #[must_use]
    pub fn evaluate(self, code: f64, x: f64) -> f64 {
        self.select(code).apply(x)
    }
}
