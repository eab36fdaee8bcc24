use crate::math::{Point3, Vector3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }
}

/// Computes the axis-aligned bounding box of a set of curve vertices.
///
/// Vertices with a NaN or infinite coordinate are skipped.
pub struct BoundingBox<'a> {
    points: &'a [Point3],
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(points: &'a [Point3]) -> Self {
        Self { points }
    }

    /// Executes the query. Returns `None` when no vertex is finite.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let mut finite = self
            .points
            .iter()
            .filter(|p| p.coords.iter().all(|c| c.is_finite()));
        let first = *finite.next()?;

        let (min, max) = finite.fold((first, first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });
        Some(Aabb { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn empty_has_no_box() {
        assert!(BoundingBox::new(&[]).execute().is_none());
    }

    #[test]
    fn box_spans_points() {
        let points = [p(1.0, -2.0, 0.0), p(-3.0, 4.0, 1.0), p(0.5, 0.5, -1.0)];
        let aabb = BoundingBox::new(&points).execute();
        let Some(aabb) = aabb else {
            panic!("expected a bounding box");
        };
        assert!((aabb.min - p(-3.0, -2.0, -1.0)).norm() < TOLERANCE);
        assert!((aabb.max - p(1.0, 4.0, 1.0)).norm() < TOLERANCE);
        assert!((aabb.center() - p(-1.0, 1.0, 0.0)).norm() < TOLERANCE);
        assert!((aabb.size() - Vector3::new(4.0, 6.0, 2.0)).norm() < TOLERANCE);
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let points = [p(f64::NAN, 0.0, 0.0), p(2.0, 2.0, 2.0), p(0.0, f64::INFINITY, 0.0)];
        let aabb = BoundingBox::new(&points).execute();
        assert_eq!(
            aabb,
            Some(Aabb {
                min: p(2.0, 2.0, 2.0),
                max: p(2.0, 2.0, 2.0)
            })
        );
        assert!(BoundingBox::new(&[p(f64::NAN, 0.0, 0.0)]).execute().is_none());
    }
}
