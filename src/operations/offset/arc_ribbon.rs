use tracing::trace;

use crate::error::{ensure_positive, GeometryError, Result};
use crate::geometry::RibbonPolygon;
use crate::math::arc_2d::arc_point_at;
use crate::math::Point2;
use crate::tessellation::{SampleArc, SamplingParams};

/// Builds a circular-arc waveguide polygon directly from the arc.
///
/// Both edges are sampled at the same angles as the centerline would be:
/// the outer edge (radius `r + w/2`) runs from `start` to `stop`, the inner
/// edge (radius `r - w/2`) runs back. Unlike [`Ribbon2D`](super::Ribbon2D)
/// the end edges are exactly radial, with no manhattan snapping.
#[derive(Debug, Clone)]
pub struct ArcRibbon2D {
    arc: SampleArc,
    width: f64,
}

impl ArcRibbon2D {
    /// Creates an arc waveguide about the origin; angles in degrees.
    #[must_use]
    pub fn new(radius: f64, width: f64, start: f64, stop: f64) -> Self {
        Self {
            arc: SampleArc::new(radius, start, stop),
            width,
        }
    }

    /// Moves the arc's center.
    #[must_use]
    pub fn with_center(mut self, center: Point2) -> Self {
        self.arc = self.arc.with_center(center);
        self
    }

    /// Requests a coarse outline (for device recognition layers).
    #[must_use]
    pub fn coarse(mut self, coarse: bool) -> Self {
        self.arc = self.arc.coarse(coarse);
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// - the errors of [`SampleArc::execute`]
    /// - `GeometryError::ParameterOutOfRange` if the width is not positive
    /// - `GeometryError::Degenerate` if `width/2` reaches the radius
    pub fn execute(&self, params: &SamplingParams) -> Result<RibbonPolygon> {
        let half = ensure_positive("width", self.width)? / 2.0;
        let angles = self.arc.sample_angles(params)?;
        let radius = self.arc.radius();
        if half >= radius {
            return Err(GeometryError::Degenerate(format!(
                "half width {half} reaches arc radius {radius}"
            ))
            .into());
        }

        let center = self.arc.center();
        let outer = angles
            .iter()
            .map(|&a| arc_point_at(&center, radius + half, a))
            .collect();
        let inner = angles
            .iter()
            .map(|&a| arc_point_at(&center, radius - half, a))
            .collect();
        let width = self.width;
        trace!(radius, width, points = angles.len(), "arc ribbon");
        Ok(RibbonPolygon::from_sides(outer, inner))
    }
}
