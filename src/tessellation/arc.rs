use tracing::trace;

use crate::error::{ensure_finite, ensure_positive, Result, TessellationError};
use crate::math::arc_2d::{arc_point_at, arc_vertex_count};
use crate::math::Point2;

use super::SamplingParams;

/// Samples a circular arc into an open polyline.
///
/// Angles are in degrees and signed: the arc runs from `start` to `stop`,
/// counter-clockwise when `stop > start` and clockwise otherwise. The first
/// point sits exactly at `start`, the last exactly at `stop`, with evenly
/// spaced angles in between.
#[derive(Debug, Clone)]
pub struct SampleArc {
    radius: f64,
    start: f64,
    stop: f64,
    center: Point2,
    coarse: bool,
}

impl SampleArc {
    /// Creates an arc about the origin.
    #[must_use]
    pub fn new(radius: f64, start: f64, stop: f64) -> Self {
        Self {
            radius,
            start,
            stop,
            center: Point2::origin(),
            coarse: false,
        }
    }

    /// Moves the arc's center.
    #[must_use]
    pub fn with_center(mut self, center: Point2) -> Self {
        self.center = center;
        self
    }

    /// Requests a coarse outline (for device recognition layers), which
    /// divides the vertex count by [`SamplingParams::coarse_divisor`].
    #[must_use]
    pub fn coarse(mut self, coarse: bool) -> Self {
        self.coarse = coarse;
        self
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the arc's center.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Executes the sampling, returning `n + 1` points for `n` segments.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ParameterOutOfRange` if the radius is not positive
    /// - `GeometryError::NonFinite` for non-finite angles or center
    /// - `TessellationError::InvalidParameters` for a zero sweep, invalid
    ///   `params`, or a sweep needing more than `params.max_segments`
    ///   segments
    pub fn execute(&self, params: &SamplingParams) -> Result<Vec<Point2>> {
        let angles = self.sample_angles(params)?;
        let points = angles
            .into_iter()
            .map(|a| arc_point_at(&self.center, self.radius, a))
            .collect();
        Ok(points)
    }

    /// Computes the sampled angles (radians), shared with arc ribbons which
    /// evaluate them at two radii.
    pub(crate) fn sample_angles(&self, params: &SamplingParams) -> Result<Vec<f64>> {
        params.validate()?;
        let radius = ensure_positive("radius", self.radius)?;
        let start = ensure_finite("start", self.start)?;
        let stop = ensure_finite("stop", self.stop)?;
        ensure_finite("center.x", self.center.x)?;
        ensure_finite("center.y", self.center.y)?;

        let sweep_deg = stop - start;
        if sweep_deg == 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "arc sweep must be non-zero (start = stop = {start})"
            ))
            .into());
        }

        let full = params.points_per_circle(radius);
        let divisor = params.coarse(self.coarse);
        let limit = params.max_segments;
        let Some(n) = arc_vertex_count(full.count(), sweep_deg, divisor, limit) else {
            return Err(TessellationError::InvalidParameters(format!(
                "sweep of {sweep_deg} degrees needs more than {limit} segments"
            ))
            .into());
        };
        trace!(radius, sweep_deg, ?full, segments = n, "sampling arc");

        let start_rad = start.to_radians();
        let sweep_rad = sweep_deg.to_radians();
        #[allow(clippy::cast_precision_loss)]
        let angles = (0..=n)
            .map(|i| start_rad + sweep_rad * (i as f64 / n as f64))
            .collect();
        Ok(angles)
    }
}
