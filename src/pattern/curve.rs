use crate::color::NormalizedColor;
use crate::math::Point3;

use super::bounding_box::{Aabb, BoundingBox};
use super::state::PatternState;

/// The output of one generation: parallel vertex and color arrays.
///
/// `vertices().len() == colors().len() == draw_count()` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCurve {
    vertices: Vec<Point3>,
    colors: Vec<NormalizedColor>,
    truncated: bool,
    loop_boundaries: usize,
    final_state: PatternState,
}

impl GeneratedCurve {
    pub(crate) fn new(
        vertices: Vec<Point3>,
        colors: Vec<NormalizedColor>,
        truncated: bool,
        loop_boundaries: usize,
        final_state: PatternState,
    ) -> Self {
        debug_assert_eq!(vertices.len(), colors.len());
        Self {
            vertices,
            colors,
            truncated,
            loop_boundaries,
            final_state,
        }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    #[must_use]
    pub fn colors(&self) -> &[NormalizedColor] {
        &self.colors
    }

    /// Number of valid vertices written.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether generation stopped early at the generator's capacity.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// How many loop perturbations were applied.
    #[must_use]
    pub fn loop_boundaries(&self) -> usize {
        self.loop_boundaries
    }

    /// Working state after the last vertex, perturbations included.
    #[must_use]
    pub fn final_state(&self) -> &PatternState {
        &self.final_state
    }

    /// Flat `[x0, y0, z0, x1, y1, z1, ...]` positions for a vertex buffer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn position_buffer(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Flat `[r0, g0, b0, r1, g1, b1, ...]` colors for a vertex buffer.
    #[must_use]
    pub fn color_buffer(&self) -> Vec<f32> {
        self.colors.iter().flat_map(|c| [c.r, c.g, c.b]).collect()
    }

    /// Bounding box of the finite vertices, `None` if there are none.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        BoundingBox::new(&self.vertices).execute()
    }
}
