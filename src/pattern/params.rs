use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::ConfigurationError;
use crate::math::FunctionTable;

/// Boundaries replayed one by one around a projected delta-angle crossing.
const EXACT_REPLAY_WINDOW: usize = 1024;

/// Hard cap on replayed boundaries per validation.
const MAX_REPLAY_STEPS: usize = 8 * EXACT_REPLAY_WINDOW;

/// A scalar of the working pattern state that loop perturbation may adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdjustableParam {
    OriginX,
    OriginY,
    OriginZ,
    XFunctionCode,
    YFunctionCode,
    DeltaAngle,
    Scale,
    XAngularFrequency,
    YAngularFrequency,
    XPhase,
    YPhase,
}

impl AdjustableParam {
    pub const ALL: [Self; 11] = [
        Self::OriginX,
        Self::OriginY,
        Self::OriginZ,
        Self::XFunctionCode,
        Self::YFunctionCode,
        Self::DeltaAngle,
        Self::Scale,
        Self::XAngularFrequency,
        Self::YAngularFrequency,
        Self::XPhase,
        Self::YPhase,
    ];

    /// Name as written in presets.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::OriginX => "originX",
            Self::OriginY => "originY",
            Self::OriginZ => "originZ",
            Self::XFunctionCode => "xFunctionCode",
            Self::YFunctionCode => "yFunctionCode",
            Self::DeltaAngle => "deltaAngle",
            Self::Scale => "scale",
            Self::XAngularFrequency => "xAngularFrequency",
            Self::YAngularFrequency => "yAngularFrequency",
            Self::XPhase => "xPhase",
            Self::YPhase => "yPhase",
        }
    }
}

impl fmt::Display for AdjustableParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdjustableParam {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|param| param.name() == s)
            .ok_or_else(|| ConfigurationError::UnknownParameter(s.to_owned()))
    }
}

/// Inputs to one curve generation.
///
/// A plain record: build it with named fields over [`Default`],
///
/// ```
/// use curvework::pattern::CurveParameters;
///
/// let params = CurveParameters {
///     scale: 2.0,
///     max_vertices: 500,
///     ..CurveParameters::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
///
/// Function codes are kept as `f64` so animated, fractional codes pass
/// through; they are floored when resolved against `function_table`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurveParameters {
    pub origin_x: f64,
    pub origin_y: f64,
    pub origin_z: f64,
    pub x_function_code: f64,
    pub y_function_code: f64,
    /// Angle step per vertex. Must be finite and positive.
    pub delta_angle: f64,
    pub scale: f64,
    pub x_angular_frequency: f64,
    pub y_angular_frequency: f64,
    pub x_phase: f64,
    pub y_phase: f64,
    pub max_vertices: usize,
    /// Every `n` written vertices, apply the adjustments and reset the angle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_vertex_period: Option<usize>,
    /// Parallel to `adjust_amounts`.
    pub params_to_adjust: Vec<AdjustableParam>,
    pub adjust_amounts: Vec<f64>,
    pub initial_color: Rgb,
    pub function_table: FunctionTable,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            origin_z: 0.0,
            x_function_code: 0.0,
            y_function_code: 1.0,
            delta_angle: 1.0,
            scale: 1.0,
            x_angular_frequency: 1.0,
            y_angular_frequency: 1.0,
            x_phase: 0.0,
            y_phase: 0.0,
            max_vertices: 1000,
            loop_vertex_period: None,
            params_to_adjust: Vec::new(),
            adjust_amounts: Vec::new(),
            initial_color: Rgb::WHITE,
            function_table: FunctionTable::Extended,
        }
    }
}

impl CurveParameters {
    /// Pairs each parameter to adjust with its amount, in order.
    pub fn adjustments(&self) -> impl Iterator<Item = (AdjustableParam, f64)> + '_ {
        self.params_to_adjust
            .iter()
            .copied()
            .zip(self.adjust_amounts.iter().copied())
    }

    /// Checks that generation with these parameters is well defined and
    /// makes forward progress.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the delta angle is not positive,
    /// the adjustment lists differ in length or hold non-finite amounts, the
    /// loop period is 0 or 1, or the adjustments would drive the delta angle
    /// to zero or below before the last vertex.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.validate_up_to(self.max_vertices)
    }

    /// Like [`validate`](Self::validate), but only considers the first
    /// `vertex_count` vertices for the delta-angle progress check.
    pub(crate) fn validate_up_to(&self, vertex_count: usize) -> Result<(), ConfigurationError> {
        if !(self.delta_angle.is_finite() && self.delta_angle > 0.0) {
            return Err(ConfigurationError::NonPositiveDeltaAngle(self.delta_angle));
        }

        if self.params_to_adjust.len() != self.adjust_amounts.len() {
            return Err(ConfigurationError::MismatchedAdjustments {
                params: self.params_to_adjust.len(),
                amounts: self.adjust_amounts.len(),
            });
        }

        if let Some((param, amount)) = self.adjustments().find(|(_, a)| !a.is_finite()) {
            return Err(ConfigurationError::NonFiniteAdjustment { param, amount });
        }

        if let Some(period) = self.loop_vertex_period {
            if period <= 1 {
                return Err(ConfigurationError::DegenerateLoopPeriod(period));
            }
            self.check_delta_progress(period, vertex_count)?;
        }

        Ok(())
    }

    /// Replays the delta-angle adjustments over every loop boundary that is
    /// followed by at least one more vertex.
    ///
    /// Stops as soon as a boundary leaves the delta unchanged or larger, since
    /// the same adjustments then can never bring it down. Long runs of
    /// boundaries are skipped by projecting the last observed change up to
    /// [`EXACT_REPLAY_WINDOW`] boundaries before the projected zero crossing,
    /// which is then replayed exactly.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::float_cmp
    )]
    fn check_delta_progress(
        &self,
        period: usize,
        vertex_count: usize,
    ) -> Result<(), ConfigurationError> {
        let deltas: Vec<f64> = self
            .adjustments()
            .filter(|(param, _)| *param == AdjustableParam::DeltaAngle)
            .map(|(_, amount)| amount)
            .collect();
        if deltas.iter().all(|amount| *amount >= 0.0) {
            return Ok(());
        }

        let boundaries = vertex_count.saturating_sub(1) / period;
        let mut delta = self.delta_angle;
        let mut boundary = 0;
        let mut steps = 0;
        while boundary < boundaries {
            let next = deltas.iter().fold(delta, |acc, amount| acc + amount);
            boundary += 1;
            steps += 1;
            if next <= 0.0 {
                return Err(ConfigurationError::StalledDeltaAngle {
                    boundary,
                    value: next,
                });
            }
            let change = next - delta;
            if change >= 0.0 {
                return Ok(());
            }
            delta = next;

            let remaining = boundaries - boundary;
            let to_cross = (delta / -change).ceil();
            if steps >= MAX_REPLAY_STEPS {
                // Give up on exact replay and trust the projection.
                if to_cross > remaining as f64 {
                    return Ok(());
                }
                let boundary = boundary + to_cross as usize;
                return Err(ConfigurationError::StalledDeltaAngle {
                    boundary,
                    value: delta + to_cross * change,
                });
            }
            if remaining > EXACT_REPLAY_WINDOW {
                if to_cross > (remaining + EXACT_REPLAY_WINDOW) as f64 {
                    return Ok(());
                }
                let skip = (to_cross as usize)
                    .saturating_sub(EXACT_REPLAY_WINDOW)
                    .min(remaining - EXACT_REPLAY_WINDOW);
                delta += skip as f64 * change;
                boundary += skip;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn looping(period: usize, params: Vec<AdjustableParam>, amounts: Vec<f64>) -> CurveParameters {
        CurveParameters {
            loop_vertex_period: Some(period),
            params_to_adjust: params,
            adjust_amounts: amounts,
            ..CurveParameters::default()
        }
    }

    #[test]
    fn default_is_valid() {
        assert!(CurveParameters::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_delta() {
        for delta in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let params = CurveParameters {
                delta_angle: delta,
                ..CurveParameters::default()
            };
            assert!(matches!(
                params.validate(),
                Err(ConfigurationError::NonPositiveDeltaAngle(_))
            ));
        }
    }

    #[test]
    fn rejects_mismatched_adjustments() {
        let params = looping(10, vec![AdjustableParam::Scale], vec![1.0, 2.0]);
        assert_eq!(
            params.validate(),
            Err(ConfigurationError::MismatchedAdjustments {
                params: 1,
                amounts: 2
            })
        );
    }

    #[test]
    fn rejects_non_finite_amount() {
        let params = looping(10, vec![AdjustableParam::XPhase], vec![f64::NAN]);
        assert!(matches!(
            params.validate(),
            Err(ConfigurationError::NonFiniteAdjustment {
                param: AdjustableParam::XPhase,
                ..
            })
        ));
    }

    #[test]
    fn rejects_degenerate_periods() {
        for period in [0, 1] {
            let params = looping(period, Vec::new(), Vec::new());
            assert_eq!(
                params.validate(),
                Err(ConfigurationError::DegenerateLoopPeriod(period))
            );
        }
        assert!(looping(2, Vec::new(), Vec::new()).validate().is_ok());
    }

    #[test]
    fn rejects_delta_driven_to_zero() {
        // 1.0 -> 0.5 -> 0.0 at the second boundary (vertex 20 of 25).
        let mut params = looping(10, vec![AdjustableParam::DeltaAngle], vec![-0.5]);
        params.max_vertices = 25;
        assert_eq!(
            params.validate(),
            Err(ConfigurationError::StalledDeltaAngle {
                boundary: 2,
                value: 0.0
            })
        );
    }

    #[test]
    fn boundary_at_last_vertex_is_ignored() {
        // The second boundary falls on vertex 20, the last one, so the
        // stalled delta is never used.
        let mut params = looping(10, vec![AdjustableParam::DeltaAngle], vec![-0.5]);
        params.max_vertices = 20;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn net_positive_delta_adjustments_pass() {
        let mut params = looping(
            5,
            vec![AdjustableParam::DeltaAngle, AdjustableParam::DeltaAngle],
            vec![-0.5, 0.75],
        );
        params.max_vertices = 100;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn param_names_round_trip_through_from_str() {
        for param in AdjustableParam::ALL {
            assert_eq!(param.name().parse::<AdjustableParam>().unwrap(), param);
        }
        assert_eq!(
            "rotation".parse::<AdjustableParam>(),
            Err(ConfigurationError::UnknownParameter("rotation".to_owned()))
        );
    }

    #[test]
    fn serde_names_match_display() {
        for param in AdjustableParam::ALL {
            let json = serde_json::to_string(&param).unwrap();
            assert_eq!(json, format!("\"{param}\""));
        }
    }

    #[test]
    fn absorbed_delta_decrement_validates_quickly() {
        // -1e-300 vanishes against 1.0, so the delta never moves.
        let mut params = looping(2, vec![AdjustableParam::DeltaAngle], vec![-1e-300]);
        params.max_vertices = usize::MAX;
        assert!(params.validate().is_ok());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn distant_delta_crossing_is_projected() {
        // 1.0 - 1e-12 per boundary crosses zero near boundary 1e12.
        let mut params = looping(2, vec![AdjustableParam::DeltaAngle], vec![-1e-12]);
        params.max_vertices = usize::MAX;
        match params.validate() {
            Err(ConfigurationError::StalledDeltaAngle { boundary, value }) => {
                assert!(boundary > 999_000_000_000 && boundary < 1_001_000_000_000);
                assert!(value <= 0.0);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        params.max_vertices = 200_000_000_000;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn crossing_just_past_the_window_is_exact() {
        // 1.0 - 0.00025 per boundary reaches zero at boundary 4000, past
        // the first replay window.
        let mut params = looping(2, vec![AdjustableParam::DeltaAngle], vec![-0.000_25]);
        params.delta_angle = 1.0;
        params.max_vertices = 100_000;
        match params.validate() {
            Err(ConfigurationError::StalledDeltaAngle { boundary, .. }) => {
                assert!((3999..=4001).contains(&boundary), "{boundary}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        params.max_vertices = 2 * 3990;
        assert!(params.validate().is_ok());
    }
}
