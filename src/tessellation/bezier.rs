use tracing::trace;

use crate::error::{ensure_finite, ensure_positive, GeometryError, Result};
use crate::math::{Point2, Vector2};

use super::SamplingParams;

/// Samples a 90° waveguide bend shaped as a cubic Bezier curve.
///
/// The bend is built in a fixed frame: it starts at `(-L, 0)` heading +x
/// and ends at `(0, L)` heading +y, where `L` is the bend radius. The
/// control points are `(0, 0)`, `((1 - b)·L, 0)`, `(L, b·L)` and `(L, L)`,
/// shifted by `(-L, 0)`, with `b` the shape fraction. `b = 0` pulls the
/// curve into the corner, `b = 1` gives a straight diagonal.
///
/// Callers place the bend by transforming the result.
#[derive(Debug, Clone)]
pub struct SampleBezierBend {
    radius: f64,
    shape: f64,
    coarse: bool,
}

impl SampleBezierBend {
    /// Creates a bend with the given radius and shape fraction.
    #[must_use]
    pub fn new(radius: f64, shape: f64) -> Self {
        Self {
            radius,
            shape,
            coarse: false,
        }
    }

    /// Requests a coarse outline (for device recognition layers).
    #[must_use]
    pub fn coarse(mut self, coarse: bool) -> Self {
        self.coarse = coarse;
        self
    }

    /// The four control points, in curve order.
    ///
    /// # Errors
    ///
    /// Same as [`SampleBezierBend::execute`], minus parameter validation.
    pub fn control_points(&self) -> Result<[Point2; 4]> {
        let length = ensure_positive("radius", self.radius)?;
        let shape = ensure_finite("shape", self.shape)?;
        if !(0.0..=1.0).contains(&shape) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "shape",
                value: shape,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        let origin = Vector2::new(-length, 0.0);
        Ok([
            Point2::new(0.0, 0.0) + origin,
            Point2::new((1.0 - shape) * length, 0.0) + origin,
            Point2::new(length, shape * length) + origin,
            Point2::new(length, length) + origin,
        ])
    }

    /// Executes the sampling.
    ///
    /// Evaluates the curve at `N - 1` evenly spaced parameters from `t = 0`
    /// (with `N` = [`SamplingParams::bezier_points`], divided for coarse
    /// outlines), then appends the exact end point `(0, L)`. When the last
    /// sample is further than [`SamplingParams::bezier_end_guard`] from the
    /// end, a guard vertex at `(0, L - guard)` is inserted first so the
    /// closing edge runs exactly along +y.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ParameterOutOfRange` if the radius is not positive
    ///   or the shape is outside `[0, 1]`
    /// - `TessellationError::InvalidParameters` for invalid `params`
    pub fn execute(&self, params: &SamplingParams) -> Result<Vec<Point2>> {
        params.validate()?;
        let ctrl = self.control_points()?;
        let length = self.radius;
        let shape = self.shape;

        let mut samples = params.bezier_points;
        if let Some(divisor) = params.coarse(self.coarse) {
            samples /= divisor;
        }
        let samples = samples.max(3);
        trace!(length, shape, samples, "sampling bezier bend");

        // Power-basis coefficients: p(t) = cubic·t³ + quad·t² + linear·t + p0.
        let [p0, p1, p2, p3] = ctrl.map(|p| p.coords);
        let cubic = p3 - p2 * 3.0 + p1 * 3.0 - p0;
        let quad = p2 * 3.0 - p1 * 6.0 + p0 * 3.0;
        let linear = p1 * 3.0 - p0 * 3.0;

        #[allow(clippy::cast_precision_loss)]
        let step = 1.0 / (samples - 1) as f64;
        let mut pts = Vec::with_capacity(samples + 1);
        pts.push(Point2::from(p0));
        for i in 1..samples - 1 {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 * step;
            pts.push(Point2::from(((cubic * t + quad) * t + linear) * t + p0));
        }

        let end = Point2::from(p3);
        let guard = params.bezier_end_guard;
        if guard > 0.0 && guard < length {
            let guard_pt = Point2::new(end.x, end.y - guard);
            if pts.last().is_some_and(|p| p.y < guard_pt.y) {
                pts.push(guard_pt);
            }
        }
        pts.push(end);
        Ok(pts)
    }
}
