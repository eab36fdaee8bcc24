use super::params::{AdjustableParam, CurveParameters};

/// Working copy of the adjustable scalars of a [`CurveParameters`].
///
/// Generation perturbs this copy at every loop boundary and never touches
/// the caller's parameters. The state reached at the end of a generation is
/// returned with the curve so a caller animating the pattern can carry it
/// forward explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternState {
    pub origin_x: f64,
    pub origin_y: f64,
    pub origin_z: f64,
    pub x_function_code: f64,
    pub y_function_code: f64,
    pub delta_angle: f64,
    pub scale: f64,
    pub x_angular_frequency: f64,
    pub y_angular_frequency: f64,
    pub x_phase: f64,
    pub y_phase: f64,
}

impl PatternState {
    #[must_use]
    pub fn from_params(params: &CurveParameters) -> Self {
        Self {
            origin_x: params.origin_x,
            origin_y: params.origin_y,
            origin_z: params.origin_z,
            x_function_code: params.x_function_code,
            y_function_code: params.y_function_code,
            delta_angle: params.delta_angle,
            scale: params.scale,
            x_angular_frequency: params.x_angular_frequency,
            y_angular_frequency: params.y_angular_frequency,
            x_phase: params.x_phase,
            y_phase: params.y_phase,
        }
    }

    /// Current value of `param`.
    #[must_use]
    pub fn get(&self, param: AdjustableParam) -> f64 {
        match param {
            AdjustableParam::OriginX => self.origin_x,
            AdjustableParam::OriginY => self.origin_y,
            AdjustableParam::OriginZ => self.origin_z,
            AdjustableParam::XFunctionCode => self.x_function_code,
            AdjustableParam::YFunctionCode => self.y_function_code,
            AdjustableParam::DeltaAngle => self.delta_angle,
            AdjustableParam::Scale => self.scale,
            AdjustableParam::XAngularFrequency => self.x_angular_frequency,
            AdjustableParam::YAngularFrequency => self.y_angular_frequency,
            AdjustableParam::XPhase => self.x_phase,
            AdjustableParam::YPhase => self.y_phase,
        }
    }

    /// Adds `amount` to `param`.
    pub fn adjust(&mut self, param: AdjustableParam, amount: f64) {
        *self.field_mut(param) += amount;
    }

    /// Copies this state over the matching fields of `template`.
    ///
    /// Non-scalar settings (vertex count, loop settings, color, table) come
    /// from `template` unchanged.
    #[must_use]
    pub fn to_parameters(&self, template: &CurveParameters) -> CurveParameters {
        CurveParameters {
            origin_x: self.origin_x,
            origin_y: self.origin_y,
            origin_z: self.origin_z,
            x_function_code: self.x_function_code,
            y_function_code: self.y_function_code,
            delta_angle: self.delta_angle,
            scale: self.scale,
            x_angular_frequency: self.x_angular_frequency,
            y_angular_frequency: self.y_angular_frequency,
            x_phase: self.x_phase,
            y_phase: self.y_phase,
            ..template.clone()
        }
    }

    fn field_mut(&mut self, param: AdjustableParam) -> &mut f64 {
        match param {
            AdjustableParam::OriginX => &mut self.origin_x,
            AdjustableParam::OriginY => &mut self.origin_y,
            AdjustableParam::OriginZ => &mut self.origin_z,
            AdjustableParam::XFunctionCode => &mut self.x_function_code,
            AdjustableParam::YFunctionCode => &mut self.y_function_code,
            AdjustableParam::DeltaAngle => &mut self.delta_angle,
            AdjustableParam::Scale => &mut self.scale,
            AdjustableParam::XAngularFrequency => &mut self.x_angular_frequency,
            AdjustableParam::YAngularFrequency => &mut self.y_angular_frequency,
            AdjustableParam::XPhase => &mut self.x_phase,
            AdjustableParam::YPhase => &mut self.y_phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_touches_only_the_named_field() {
        let params = CurveParameters::default();
        let mut state = PatternState::from_params(&params);
        state.adjust(AdjustableParam::YPhase, 0.25);
        state.adjust(AdjustableParam::YPhase, 0.25);

        for param in AdjustableParam::ALL {
            let before = PatternState::from_params(&params).get(param);
            let expected = if param == AdjustableParam::YPhase {
                before + 0.5
            } else {
                before
            };
            assert!((state.get(param) - expected).abs() < f64::EPSILON, "{param}");
        }
    }

    #[test]
    fn to_parameters_keeps_template_settings() {
        let template = CurveParameters {
            max_vertices: 42,
            loop_vertex_period: Some(7),
            ..CurveParameters::default()
        };
        let mut state = PatternState::from_params(&template);
        state.adjust(AdjustableParam::Scale, 3.0);

        let next = state.to_parameters(&template);
        assert_eq!(next.max_vertices, 42);
        assert_eq!(next.loop_vertex_period, Some(7));
        assert!((next.scale - 4.0).abs() < f64::EPSILON);
    }
}
