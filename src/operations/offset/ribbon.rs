use tracing::trace;

use crate::error::{ensure_positive, Result};
use crate::geometry::{Centerline, RibbonPolygon};

use super::normal_offset::offset_points;

/// Builds the closed waveguide polygon of constant `width` around a
/// centerline.
///
/// The polygon is the centerline offset by `-width/2` (right side) followed
/// by the offset by `+width/2` (left side) in reverse, so it winds
/// counter-clockwise and has exactly twice as many vertices as the
/// centerline.
///
/// # Preconditions
///
/// The local bend radius must be at least `width/2` everywhere. This is
/// not checked: a tighter bend yields a self-intersecting polygon. Run
/// [`CheckRibbon`](crate::operations::query::CheckRibbon) on the result
/// before feeding it to boolean geometry.
#[derive(Debug)]
pub struct Ribbon2D {
    centerline: Centerline,
    width: f64,
}

impl Ribbon2D {
    /// Creates a new ribbon operation.
    #[must_use]
    pub fn new(centerline: Centerline, width: f64) -> Self {
        Self { centerline, width }
    }

    /// Returns the centerline.
    #[must_use]
    pub fn centerline(&self) -> &Centerline {
        &self.centerline
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ParameterOutOfRange` if the width is not positive
    /// - `GeometryError::Degenerate` if the centerline reverses onto itself
    pub fn execute(&self) -> Result<RibbonPolygon> {
        let half = ensure_positive("width", self.width)? / 2.0;
        let points = self.centerline.points();
        let right = offset_points(points, -half)?;
        let left = offset_points(points, half)?;
        trace!(points = points.len(), width = self.width, "ribbon");
        Ok(RibbonPolygon::from_sides(right, left))
    }
}
