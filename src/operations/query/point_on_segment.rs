use crate::math::{cross_2d, Point2};

/// Tests whether a point lies on the closed segment `[a, b]`.
///
/// The point is colinear when `|cross(c - a, b - a)|` is below `epsilon`,
/// and within the segment when `0 <= dot(c - a, b - a) <= |b - a|²`. The
/// cross product scales with the segment length, so pick `epsilon` for
/// the coordinate units in use.
#[derive(Debug, Clone, Copy)]
pub struct PointOnSegment {
    a: Point2,
    b: Point2,
    epsilon: f64,
}

impl PointOnSegment {
    /// Matches rounding the cross product to 5 decimal places.
    pub const DEFAULT_EPSILON: f64 = 5e-6;

    /// Creates a query for the segment from `a` to `b`.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            a,
            b,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }

    /// Sets the colinearity tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Executes the query for point `c`.
    #[must_use]
    pub fn execute(&self, c: &Point2) -> bool {
        let ab = self.b - self.a;
        let ac = c - self.a;
        if cross_2d(&ac, &ab).abs() >= self.epsilon {
            return false;
        }
        let dot = ac.dot(&ab);
        dot >= 0.0 && dot <= ab.norm_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(c: (f64, f64)) -> bool {
        PointOnSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0))
            .execute(&Point2::new(c.0, c.1))
    }

    #[test]
    fn interior_point() {
        assert!(on((5.0, 0.0)));
    }

    #[test]
    fn off_the_line() {
        assert!(!on((5.0, 1.0)));
    }

    #[test]
    fn beyond_end() {
        assert!(!on((15.0, 0.0)));
    }

    #[test]
    fn behind_start() {
        assert!(!on((-1.0, 0.0)));
    }

    #[test]
    fn endpoints_are_included() {
        assert!(on((0.0, 0.0)));
        assert!(on((10.0, 0.0)));
    }

    #[test]
    fn diagonal_segment() {
        let q = PointOnSegment::new(Point2::new(1.0, 1.0), Point2::new(4.0, 7.0));
        assert!(q.execute(&Point2::new(2.0, 3.0)));
        assert!(!q.execute(&Point2::new(5.0, 9.0)));
    }

    #[test]
    fn epsilon_is_configurable() {
        let near = Point2::new(5.0, 1e-4);
        let strict = PointOnSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        assert!(!strict.execute(&near));
        // cross = 1e-4 · 10 = 1e-3.
        assert!(strict.with_epsilon(2e-3).execute(&near));
    }
}
