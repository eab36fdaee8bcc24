use thiserror::Error;

use crate::pattern::AdjustableParam;

/// Top-level error type for curvework.
#[derive(Debug, Error)]
pub enum CurveworkError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Preset(#[from] PresetError),
}

/// Invalid curve parameters or generator settings.
///
/// Always raised before the generation loop starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("delta angle must be finite and positive, got {0}")]
    NonPositiveDeltaAngle(f64),

    #[error("{params} parameters to adjust but {amounts} adjust amounts")]
    MismatchedAdjustments { params: usize, amounts: usize },

    #[error("adjust amount for {param} is not finite: {amount}")]
    NonFiniteAdjustment { param: AdjustableParam, amount: f64 },

    #[error("loop vertex period {0} cannot make forward progress")]
    DegenerateLoopPeriod(usize),

    #[error("delta angle drops to {value} after loop boundary {boundary}")]
    StalledDeltaAngle { boundary: usize, value: f64 },

    #[error("unknown adjustable parameter: {0}")]
    UnknownParameter(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("generator capacity must be positive")]
    ZeroCapacity,
}

/// Errors raised while loading parameter presets.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to parse preset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("preset {name:?} is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ConfigurationError,
    },

    #[error("preset not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for results using [`CurveworkError`].
pub type Result<T> = std::result::Result<T, CurveworkError>;
