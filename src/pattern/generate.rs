use tracing::{debug, warn};

use crate::error::{ConfigurationError, Result};
use crate::math::{scale_factor, Point3};

use super::curve::GeneratedCurve;
use super::params::CurveParameters;
use super::state::PatternState;

/// Default vertex capacity of the output buffers.
pub const DEFAULT_CAPACITY: usize = 65_536;

/// Settings of the generator itself, independent of any one curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Most vertices a single generation may write. Requests above this are
    /// truncated and flagged on the result.
    pub capacity: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Generates the vertex and color arrays of a parametric pattern curve.
///
/// For each vertex, with `angle` starting at 0:
///
/// ```text
/// k = angle / 180 * pi * scale
/// x = origin_x + angle * fx(angle * x_angular_frequency + x_phase) * k
/// y = origin_y + angle * fy(angle * y_angular_frequency + y_phase) * k
/// z = origin_z
/// ```
///
/// after which `angle` advances by `delta_angle`. Every `loop_vertex_period`
/// written vertices the adjustments are added to the working state and
/// `angle` restarts from 0.
#[derive(Debug)]
pub struct GenerateCurve<'a> {
    params: &'a CurveParameters,
    config: GeneratorConfig,
}

impl<'a> GenerateCurve<'a> {
    /// Creates a new `GenerateCurve` operation with the default config.
    #[must_use]
    pub fn new(params: &'a CurveParameters) -> Self {
        Self {
            params,
            config: GeneratorConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the generation.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the parameters fail validation or
    /// the config has zero capacity. Nothing is generated in that case.
    pub fn execute(&self) -> Result<GeneratedCurve> {
        if self.config.capacity == 0 {
            return Err(ConfigurationError::ZeroCapacity.into());
        }

        let params = self.params;
        let count = params.max_vertices.min(self.config.capacity);
        params.validate_up_to(count)?;

        let truncated = params.max_vertices > count;
        if truncated {
            warn!(
                requested = params.max_vertices,
                capacity = count,
                "vertex capacity exceeded, truncating curve"
            );
        }

        let table = params.function_table;
        let mut state = PatternState::from_params(params);
        let mut fx = table.select(state.x_function_code);
        let mut fy = table.select(state.y_function_code);

        let mut vertices = Vec::with_capacity(count);
        let mut angle = 0.0_f64;
        let mut boundaries = 0;

        for index in 0..count {
            let k = scale_factor(angle, state.scale);
            let x = state.origin_x
                + angle * fx.apply(angle * state.x_angular_frequency + state.x_phase) * k;
            let y = state.origin_y
                + angle * fy.apply(angle * state.y_angular_frequency + state.y_phase) * k;
            vertices.push(Point3::new(x, y, state.origin_z));

            if let Some(period) = params.loop_vertex_period {
                if (index + 1) % period == 0 {
                    for (param, amount) in params.adjustments() {
                        state.adjust(param, amount);
                    }
                    fx = table.select(state.x_function_code);
                    fy = table.select(state.y_function_code);
                    angle = 0.0;
                    boundaries += 1;
                }
            }

            angle += state.delta_angle;
        }

        debug!(
            vertices = vertices.len(),
            boundaries,
            x_function = %fx,
            y_function = %fy,
            "generated curve"
        );

        let colors = vec![params.initial_color.normalized(); vertices.len()];
        Ok(GeneratedCurve::new(vertices, colors, truncated, boundaries, state))
    }
}

/// Generates a curve with the default [`GeneratorConfig`].
///
/// # Errors
///
/// Returns a [`ConfigurationError`] if the parameters fail validation.
pub fn generate(params: &CurveParameters) -> Result<GeneratedCurve> {
    GenerateCurve::new(params).execute()
}
