mod arc;
mod bezier;

pub use arc::SampleArc;
pub use bezier::SampleBezierBend;

use crate::error::{Result, TessellationError};
use crate::math::arc_2d::{points_per_circle, CircleResolution};

/// Parameters controlling curve sampling resolution.
///
/// Passed explicitly to every sampling operation; derive one from the
/// layout's database unit with [`SamplingParams::from_dbu`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Maximum allowed chord-to-arc deviation, in layout coordinates.
    pub chord_tolerance: f64,
    /// Radii at or below this get `fallback_points` instead of the
    /// chord-error estimate.
    pub min_radius: f64,
    /// Vertex count used for near-degenerate radii.
    pub fallback_points: usize,
    /// Number of parameter samples for a Bezier bend.
    pub bezier_points: usize,
    /// Divisor applied to vertex counts for coarse (device recognition)
    /// outlines.
    pub coarse_divisor: usize,
    /// Distance before the end of a Bezier bend at which a guard vertex is
    /// placed so the final edge leaves along the bend's exit direction.
    pub bezier_end_guard: f64,
    /// Upper bound on the segment count of a single sampled curve. Requests
    /// above it are rejected instead of allocated.
    pub max_segments: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::from_dbu(Self::DEFAULT_DBU)
    }
}

impl SamplingParams {
    /// Database unit (in micrometres) assumed when none is given.
    pub const DEFAULT_DBU: f64 = 0.001;

    /// Default for [`SamplingParams::max_segments`].
    pub const DEFAULT_MAX_SEGMENTS: usize = 1 << 20;

    /// Builds parameters from a database unit given in micrometres.
    ///
    /// The chord tolerance follows the host convention of half a database
    /// unit expressed in nanometres: `1e3 · dbu / 2`.
    #[must_use]
    pub fn from_dbu(dbu: f64) -> Self {
        Self {
            chord_tolerance: 1e3 * dbu / 2.0,
            min_radius: 0.1,
            fallback_points: 100,
            bezier_points: 100,
            coarse_divisor: 10,
            bezier_end_guard: 1.0,
            max_segments: Self::DEFAULT_MAX_SEGMENTS,
        }
    }

    /// Sets the chord tolerance.
    #[must_use]
    pub fn with_chord_tolerance(mut self, chord_tolerance: f64) -> Self {
        self.chord_tolerance = chord_tolerance;
        self
    }

    /// Sets the near-zero radius threshold.
    #[must_use]
    pub fn with_min_radius(mut self, min_radius: f64) -> Self {
        self.min_radius = min_radius;
        self
    }

    /// Sets the fallback vertex count.
    #[must_use]
    pub fn with_fallback_points(mut self, fallback_points: usize) -> Self {
        self.fallback_points = fallback_points;
        self
    }

    /// Sets the Bezier sample count.
    #[must_use]
    pub fn with_bezier_points(mut self, bezier_points: usize) -> Self {
        self.bezier_points = bezier_points;
        self
    }

    /// Sets the Bezier end-guard distance (`0` disables the guard vertex).
    #[must_use]
    pub fn with_bezier_end_guard(mut self, bezier_end_guard: f64) -> Self {
        self.bezier_end_guard = bezier_end_guard;
        self
    }

    /// Sets the per-curve segment limit.
    #[must_use]
    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    /// Checks the parameters for consistency.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` if the tolerance is not
    /// positive and finite, a count is zero, the Bezier sample count is below
    /// 3 or above `max_segments`, or the end guard is negative.
    pub fn validate(&self) -> Result<()> {
        if !(self.chord_tolerance.is_finite() && self.chord_tolerance > 0.0) {
            return Err(invalid(format!(
                "chord tolerance must be positive, got {}",
                self.chord_tolerance
            )));
        }
        if !self.min_radius.is_finite() {
            return Err(invalid(format!(
                "min radius must be finite, got {}",
                self.min_radius
            )));
        }
        if self.fallback_points == 0 {
            return Err(invalid("fallback point count must be non-zero".to_owned()));
        }
        if self.bezier_points < 3 {
            return Err(invalid(format!(
                "bezier sample count must be at least 3, got {}",
                self.bezier_points
            )));
        }
        if self.bezier_points > self.max_segments {
            let (samples, limit) = (self.bezier_points, self.max_segments);
            return Err(invalid(format!(
                "bezier sample count {samples} exceeds the segment limit {limit}"
            )));
        }
        if self.coarse_divisor == 0 {
            return Err(invalid("coarse divisor must be non-zero".to_owned()));
        }
        if !(self.bezier_end_guard.is_finite() && self.bezier_end_guard >= 0.0) {
            return Err(invalid(format!(
                "bezier end guard must be non-negative, got {}",
                self.bezier_end_guard
            )));
        }
        Ok(())
    }

    /// Vertex count for a full circle of `radius` under these parameters.
    #[must_use]
    pub fn points_per_circle(&self, radius: f64) -> CircleResolution {
        points_per_circle(
            radius,
            self.chord_tolerance,
            self.min_radius,
            self.fallback_points,
        )
    }

    /// Divisor to apply for a coarse outline, if requested.
    pub(crate) fn coarse(&self, coarse: bool) -> Option<usize> {
        coarse.then_some(self.coarse_divisor)
    }
}

fn invalid(message: String) -> crate::error::RibbonError {
    TessellationError::InvalidParameters(message).into()
}
