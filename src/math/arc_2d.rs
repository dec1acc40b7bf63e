//! 2D circular-arc math utilities.
//!
//! Angles are in radians unless a function says otherwise. The chord-error
//! estimator answers "how many vertices does a regular polygon need so that
//! no edge strays more than `tolerance` from the circle".
use std::f64::consts::PI;

use tracing::debug;

use super::{Point2, Vector2};

/// Vertex count chosen for a full circle.
///
/// `Fallback` marks a count that did not come from the chord-error formula
/// because the radius was too small for it to be meaningful. Callers that
/// need to know whether the polygon honours the tolerance must inspect the
/// tag; [`CircleResolution::count`] hides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleResolution {
    /// Computed from the chord-error formula.
    Exact(usize),
    /// Fixed default applied to a near-degenerate radius.
    Fallback(usize),
}

impl CircleResolution {
    /// Returns the vertex count regardless of how it was obtained.
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::Exact(n) | Self::Fallback(n) => n,
        }
    }

    /// Returns `true` if the fixed fallback was applied.
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Minimum number of vertices for a full circle of `radius` such that the
/// chord-to-arc deviation stays within `tolerance`.
///
/// Each edge subtends `2·acos(1 − tol/r)`, which is the same angle as
/// `acos(2·(1 − tol/r)² − 1)`. It is evaluated as `4·asin(sqrt(tol / 2r))` so
/// that `tol/r` far below machine epsilon still yields a non-zero step. The
/// angle is only meaningful while `r ≥ tol`; smaller radii get `fallback`, as
/// do radii at or below `min_radius`.
///
/// Within the exact range the count never decreases as the radius grows. It
/// saturates at `usize::MAX` instead of overflowing; samplers cap the counts
/// they accept separately (see `SamplingParams::max_segments`).
#[must_use]
pub fn points_per_circle(
    radius: f64,
    tolerance: f64,
    min_radius: f64,
    fallback: usize,
) -> CircleResolution {
    if radius <= min_radius || radius < tolerance {
        debug!(radius, tolerance, fallback, "radius too small");
        return CircleResolution::Fallback(fallback);
    }

    let step = 4.0 * (tolerance / (2.0 * radius)).sqrt().asin();
    let n = (2.0 * PI / step).ceil();

    if n.is_nan() {
        debug!(radius, tolerance, fallback, "estimate undefined");
        return CircleResolution::Fallback(fallback);
    }

    // Float to int casts saturate, so an infinite count maps to `usize::MAX`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = n as usize;
    CircleResolution::Exact(count)
}

/// Vertex count for a partial arc sweeping `sweep_deg` degrees, given the
/// count for the full circle.
///
/// `floor(full · |sweep| / 360)`, further divided by `coarse_divisor` when
/// set, and never less than 1. Returns `None` if the result would exceed
/// `max_segments` or is not finite.
#[must_use]
pub fn arc_vertex_count(
    full_circle: usize,
    sweep_deg: f64,
    coarse_divisor: Option<usize>,
    max_segments: usize,
) -> Option<usize> {
    let circle_fraction = sweep_deg.abs() / 360.0;
    #[allow(clippy::cast_precision_loss)]
    let mut n = (full_circle as f64 * circle_fraction).floor();
    if let Some(divisor) = coarse_divisor.filter(|d| *d > 0) {
        #[allow(clippy::cast_precision_loss)]
        let divisor = divisor as f64;
        n = (n / divisor).floor();
    }
    #[allow(clippy::cast_precision_loss)]
    let limit = max_segments as f64;
    if n.is_nan() || n > limit {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = n as usize;
    Some(count.max(1))
}

/// Evaluates the point at `angle` on a circle of `radius` about `center`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, angle: f64) -> Point2 {
    center + Vector2::new(radius * angle.cos(), radius * angle.sin())
}
