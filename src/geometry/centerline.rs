use crate::error::{OperationError, Result};
use crate::math::polygon_2d::segment_direction;
use crate::math::{Point2, Vector2};

/// The nominal path a waveguide follows before width expansion.
///
/// An ordered, open sequence of at least two points with no zero-length
/// segment between neighbours. Point order is path order.
#[derive(Debug, Clone, PartialEq)]
pub struct Centerline {
    points: Vec<Point2>,
}

impl Centerline {
    /// Creates a centerline from points in path order.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if fewer than 2 points are given
    /// - `OperationError::InvalidInput` if two consecutive points coincide
    /// - `GeometryError::NonFinite` if a coordinate is NaN or infinite
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(OperationError::InvalidInput(format!(
                "a centerline needs at least 2 points, got {}",
                points.len()
            ))
            .into());
        }
        for p in &points {
            crate::error::ensure_finite("x", p.x)?;
            crate::error::ensure_finite("y", p.y)?;
        }
        for pair in points.windows(2) {
            segment_direction(&pair[0], &pair[1])?;
        }
        Ok(Self { points })
    }

    /// Creates a centerline from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Centerline::new`].
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self> {
        let points = coords.iter().map(|&(x, y)| Point2::new(x, y));
        Self::new(points.collect())
    }

    /// Returns the points in path order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of points (always at least 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.points[0]
    }

    /// Last point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    /// Direction of the first segment (not normalised).
    #[must_use]
    pub fn start_tangent(&self) -> Vector2 {
        self.points[1] - self.points[0]
    }

    /// Direction of the last segment (not normalised).
    #[must_use]
    pub fn end_tangent(&self) -> Vector2 {
        let n = self.points.len();
        self.points[n - 1] - self.points[n - 2]
    }

    /// Total polyline length.
    #[must_use]
    pub fn length(&self) -> f64 {
        let segments = self.points.windows(2);
        segments.map(|w| (w[1] - w[0]).norm()).sum()
    }

    /// Consumes the centerline, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

impl TryFrom<Vec<Point2>> for Centerline {
    type Error = crate::error::RibbonError;

    fn try_from(points: Vec<Point2>) -> Result<Self> {
        Self::new(points)
    }
}
