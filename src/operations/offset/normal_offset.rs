use std::f64::consts::FRAC_PI_2;

use tracing::trace;

use crate::error::{ensure_finite, GeometryError, Result};
use crate::geometry::Centerline;
use crate::math::angle_2d::angle_of_vector;
use crate::math::polygon_2d::left_normal;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Displaces every centerline point along its local normal.
///
/// # Algorithm
///
/// - **Interior points**: the tangent is the central difference
///   `p[i+1] - p[i-1]`, rotated by +90°, normalised and scaled by the signed
///   distance. This tracks the curve well for smooth, densely sampled input;
///   it is not a curvature estimate for sparse or noisy polylines.
/// - **Endpoints**: the tangent is the adjacent segment; the point moves
///   `|d|` along the segment's angle ±90°.
/// - **Manhattan snapping**: each offset endpoint keeps its larger axis
///   deviation from the centerline endpoint and takes the centerline's
///   coordinate on the other axis, so the ribbon's end edges are
///   axis-aligned.
///
/// # Sign Convention
///
/// - Positive distance: left offset (relative to walking direction)
/// - Negative distance: right offset
#[derive(Debug)]
pub struct NormalOffset2D {
    centerline: Centerline,
    distance: f64,
}

impl NormalOffset2D {
    /// Creates a new normal offset operation.
    #[must_use]
    pub fn new(centerline: Centerline, distance: f64) -> Self {
        Self {
            centerline,
            distance,
        }
    }

    /// Executes the offset, returning one point per centerline point.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if the distance is NaN or infinite
    /// - `GeometryError::Degenerate` if the centerline doubles back so that
    ///   an interior central difference vanishes
    pub fn execute(&self) -> Result<Vec<Point2>> {
        offset_points(self.centerline.points(), self.distance)
    }
}

/// Offsets `points` (at least 2, no repeated neighbours) by `distance`.
pub(crate) fn offset_points(points: &[Point2], distance: f64) -> Result<Vec<Point2>> {
    let d = ensure_finite("distance", distance)?;
    if d.abs() < TOLERANCE {
        return Ok(points.to_vec());
    }

    let n = points.len();
    let first = points[0];
    let last = points[n - 1];

    let mut out = Vec::with_capacity(n);
    let start_offset = endpoint_offset(&(points[1] - first), d);
    out.push(snap_manhattan(&first, first + start_offset));

    for i in 1..n - 1 {
        let tangent = points[i + 1] - points[i - 1];
        let len = tangent.norm();
        if len < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "centerline reverses onto itself at point {i} ({}, {})",
                points[i].x, points[i].y
            ))
            .into());
        }
        out.push(points[i] + left_normal(&tangent) * (d / len));
    }

    let end_offset = endpoint_offset(&(last - points[n - 2]), d);
    out.push(snap_manhattan(&last, last + end_offset));
    trace!(points = n, distance = d, "normal offset");
    Ok(out)
}

/// Offset of an endpoint whose adjacent segment runs along `segment`.
fn endpoint_offset(segment: &Vector2, d: f64) -> Vector2 {
    let turn = if d > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
    let a = angle_of_vector(segment).to_radians() + turn;
    Vector2::new(a.cos(), a.sin()) * d.abs()
}

/// Forces the edge from `anchor` to `offset` onto the axis with the larger
/// deviation. Ties keep the y deviation.
fn snap_manhattan(anchor: &Point2, offset: Point2) -> Point2 {
    if (offset.x - anchor.x).abs() > (offset.y - anchor.y).abs() {
        Point2::new(offset.x, anchor.y)
    } else {
        Point2::new(anchor.x, offset.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RibbonError;
    use crate::tessellation::{SampleArc, SampleBezierBend, SamplingParams};
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-9;

    fn offset(coords: &[(f64, f64)], d: f64) -> Vec<Point2> {
        let c = Centerline::from_xy(coords).unwrap();
        NormalOffset2D::new(c, d).execute().unwrap()
    }

    fn assert_point_near(a: &Point2, b: &Point2, tol: f64, msg: &str) {
        let d = (a - b).norm();
        assert!(d < tol, "{msg}: expected {b}, got {a}, dist={d}");
    }

    #[test]
    fn straight_line_left_and_right() {
        let left = offset(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)], 1.0);
        assert_eq!(left.len(), 3);
        for (p, x) in left.iter().zip([0.0, 5.0, 10.0]) {
            assert_point_near(p, &Point2::new(x, 1.0), TOL, "left");
        }

        let right = offset(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)], -1.0);
        for (p, x) in right.iter().zip([0.0, 5.0, 10.0]) {
            assert_point_near(p, &Point2::new(x, -1.0), TOL, "right");
        }
    }

    #[test]
    fn two_point_centerline() {
        let pts = offset(&[(0.0, 0.0), (0.0, 10.0)], 2.0);
        assert_eq!(pts.len(), 2);
        // Heading +y, left is -x.
        assert_point_near(&pts[0], &Point2::new(-2.0, 0.0), TOL, "start");
        assert_point_near(&pts[1], &Point2::new(-2.0, 10.0), TOL, "end");
    }

    #[test]
    fn endpoints_are_snapped_exactly() {
        // A shallow diagonal: raw endpoint offsets would carry a small x
        // component, snapping removes it.
        let pts = offset(&[(0.0, 0.0), (10.0, 1.0), (20.0, 3.0)], 1.0);
        assert_eq!(pts[0].x, 0.0);
        assert_eq!(pts[2].x, 20.0);
        assert!(pts[0].y > 0.9);
        assert!(pts[2].y > 0.9 + 3.0 - 0.2);
    }

    #[test]
    fn steep_endpoint_snaps_to_x_offset() {
        let pts = offset(&[(0.0, 0.0), (1.0, 10.0)], 1.0);
        // Mostly heading +y: the offset is mostly -x, so y is reset.
        assert_eq!(pts[0].y, 0.0);
        assert_eq!(pts[1].y, 10.0);
        assert!(pts[0].x < -0.9);
    }

    #[test]
    fn interior_uses_central_difference() {
        // L-shape: the corner's tangent is (10, 10), its normal points
        // up-left at 45°.
        let pts = offset(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], 1.0);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_point_near(&pts[1], &Point2::new(10.0 - s, s), TOL, "corner");
    }

    #[test]
    fn same_length_as_input() {
        let params = SamplingParams::default();
        let arc = SampleArc::new(5000.0, -90.0, 0.0);
        let pts = arc.execute(&params).unwrap();
        let n = pts.len();
        let c = Centerline::new(pts).unwrap();
        let out = NormalOffset2D::new(c, 250.0).execute().unwrap();
        assert_eq!(out.len(), n);
    }

    #[test]
    fn opposite_distances_reflect_across_centerline() {
        let params = SamplingParams::default();
        let bend = SampleBezierBend::new(5000.0, 0.4);
        let c = Centerline::new(bend.execute(&params).unwrap()).unwrap();
        let plus = offset_points(c.points(), 300.0).unwrap();
        let minus = offset_points(c.points(), -300.0).unwrap();
        for ((p, q), o) in plus.iter().zip(&minus).zip(c.points()) {
            let a = p - o;
            let b = q - o;
            assert_abs_diff_eq!(a.norm(), b.norm(), epsilon = 1e-6);
            assert_abs_diff_eq!(a.x, -b.x, epsilon = 1e-6);
            assert_abs_diff_eq!(a.y, -b.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn arc_offset_changes_radius() {
        let params = SamplingParams::default();
        let arc = SampleArc::new(5000.0, 10.0, 80.0);
        let arc = arc.execute(&params).unwrap();
        // CCW arc: left is towards the center.
        let inner = offset_points(&arc, 200.0).unwrap();
        for p in &inner[1..inner.len() - 1] {
            assert_abs_diff_eq!(p.coords.norm(), 4800.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn zero_distance_is_identity() {
        let coords = [(0.0, 0.0), (3.0, 1.0), (4.0, 5.0)];
        let pts = offset(&coords, 0.0);
        for (p, &(x, y)) in pts.iter().zip(&coords) {
            assert_eq!(*p, Point2::new(x, y));
        }
    }

    #[test]
    fn hairpin_is_degenerate() {
        let c = Centerline::from_xy(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)]).unwrap();
        let err = NormalOffset2D::new(c, 1.0).execute().unwrap_err();
        assert!(matches!(err, RibbonError::Geometry(GeometryError::Degenerate(_))));
    }

    #[test]
    fn nan_distance_rejected() {
        let c = Centerline::from_xy(&[(0.0, 0.0), (10.0, 0.0)]).unwrap();
        assert!(NormalOffset2D::new(c, f64::NAN).execute().is_err());
    }
}
