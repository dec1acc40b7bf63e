//! Angle helpers working in degrees, the unit used by bend parameters.

use crate::error::{GeometryError, Result};

use super::{Vector2, TOLERANCE};

/// Signed angle in degrees from `u` to `v`: `atan2(v) - atan2(u)`.
///
/// Not normalised, so the result lies in `(-360, 360)`. Use
/// [`angle_trunc`] to wrap it.
#[must_use]
pub fn angle_between_vectors(u: &Vector2, v: &Vector2) -> f64 {
    (v.y.atan2(v.x) - u.y.atan2(u.x)).to_degrees()
}

/// Unsigned angle in degrees between `u` and `v`, always the smaller one
/// (in `[0, 180]`).
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if either vector has zero length.
pub fn inner_angle_between_vectors(u: &Vector2, v: &Vector2) -> Result<f64> {
    let denom = u.norm() * v.norm();
    if denom < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    // Rounding can push the cosine just past ±1 for (anti)parallel vectors.
    let cos = (u.dot(v) / denom).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// Direction of `u` in degrees, in `(-180, 180]`.
#[must_use]
pub fn angle_of_vector(u: &Vector2) -> f64 {
    u.y.atan2(u.x).to_degrees()
}

/// Wraps `a` into `[0, trunc)`.
#[must_use]
pub fn angle_trunc(a: f64, trunc: f64) -> f64 {
    a.rem_euclid(trunc)
}
