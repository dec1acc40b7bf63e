use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// Closed boundary of a constant-width waveguide.
///
/// Stored as one vertex ring: one offset path in centerline order (the
/// forward side), followed by the opposite offset path in reverse (the
/// return side). The ring is implicitly closed (the last vertex connects
/// back to the first).
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonPolygon {
    points: Vec<Point2>,
    split: usize,
}

impl RibbonPolygon {
    /// Joins two offset paths, each in centerline order, into a ring.
    #[must_use]
    pub fn from_sides(forward: Vec<Point2>, back: Vec<Point2>) -> Self {
        let split = forward.len();
        let mut points = forward;
        points.extend(back.into_iter().rev());
        Self { points, split }
    }

    /// All boundary vertices.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of boundary vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first half of the ring, in centerline order.
    #[must_use]
    pub fn forward_side(&self) -> &[Point2] {
        &self.points[..self.split]
    }

    /// The second half of the ring, in reverse centerline order.
    #[must_use]
    pub fn return_side(&self) -> &[Point2] {
        &self.points[self.split..]
    }

    /// Iterates the closed ring's edges as `(start, end)` pairs, including
    /// the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Signed area (positive when counter-clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Consumes the polygon, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> RibbonPolygon {
        RibbonPolygon::from_sides(
            vec![Point2::new(0.0, -1.0), Point2::new(10.0, -1.0)],
            vec![Point2::new(0.0, 1.0), Point2::new(10.0, 1.0)],
        )
    }

    #[test]
    fn sides_are_joined_with_left_reversed() {
        let r = rect();
        assert_eq!(r.len(), 4);
        assert_eq!(r.points()[2], Point2::new(10.0, 1.0));
        assert_eq!(r.points()[3], Point2::new(0.0, 1.0));
        assert_eq!(r.forward_side().len(), 2);
        assert_eq!(r.return_side()[0], Point2::new(10.0, 1.0));
    }

    #[test]
    fn right_side_forward_is_ccw() {
        assert!((rect().signed_area() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn edges_close_the_ring() {
        let r = rect();
        let edges: Vec<_> = r.edges().collect();
        assert_eq!(edges.len(), 4);
        let closing = (Point2::new(0.0, 1.0), Point2::new(0.0, -1.0));
        assert_eq!(edges[3], closing);
    }
}
