use crate::geometry::{Centerline, RibbonPolygon};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::polygon_2d::circumradius;

/// Result of [`CheckRibbon`].
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonReport {
    /// Smallest local bend radius along the centerline (`f64::INFINITY`
    /// for a straight centerline).
    pub min_bend_radius: f64,
    /// Index of the centerline point where that radius occurs.
    pub min_bend_index: Option<usize>,
    /// Half of the checked width.
    pub half_width: f64,
    /// Pairs of non-adjacent polygon edges that intersect, by edge index
    /// (edge `i` runs from vertex `i` to vertex `i + 1`).
    pub self_intersections: Vec<(usize, usize)>,
}

impl RibbonReport {
    /// Returns `true` if every bend is at least `width/2`.
    #[must_use]
    pub fn bend_radius_ok(&self) -> bool {
        self.min_bend_radius >= self.half_width
    }

    /// Returns `true` if the polygon is simple and the bends are wide enough.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.bend_radius_ok() && self.self_intersections.is_empty()
    }
}

/// Checks a ribbon polygon against the minimum bend radius precondition
/// and for self-intersections.
///
/// The local bend radius at each interior centerline point is the radius of
/// the circle through it and its two neighbours. The intersection scan is
/// quadratic in the vertex count.
#[derive(Debug)]
pub struct CheckRibbon<'a> {
    centerline: &'a Centerline,
    ribbon: &'a RibbonPolygon,
    width: f64,
}

impl<'a> CheckRibbon<'a> {
    /// Creates a check of `ribbon`, built from `centerline` at `width`.
    #[must_use]
    pub fn new(centerline: &'a Centerline, ribbon: &'a RibbonPolygon, width: f64) -> Self {
        Self {
            centerline,
            ribbon,
            width,
        }
    }

    /// Executes the check.
    #[must_use]
    pub fn execute(&self) -> RibbonReport {
        let (min_bend_radius, min_bend_index) = min_bend(self.centerline);
        RibbonReport {
            min_bend_radius,
            min_bend_index,
            half_width: self.width.abs() / 2.0,
            self_intersections: self_intersections(self.ribbon),
        }
    }
}

fn min_bend(centerline: &Centerline) -> (f64, Option<usize>) {
    let mut best = (f64::INFINITY, None);
    for (i, w) in centerline.points().windows(3).enumerate() {
        if let Some(r) = circumradius(&w[0], &w[1], &w[2]) {
            if r < best.0 {
                best = (r, Some(i + 1));
            }
        }
    }
    best
}

fn self_intersections(ribbon: &RibbonPolygon) -> Vec<(usize, usize)> {
    let edges: Vec<_> = ribbon.edges().collect();
    let n = edges.len();
    let mut hits = Vec::new();
    for i in 0..n {
        // Skip the neighbour (shares a vertex) and, for edge 0, the
        // closing edge.
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a0, a1) = edges[i];
            let (b0, b1) = edges[j];
            if segment_segment_intersect_2d(&a0, &a1, &b0, &b1).is_some() {
                hits.push((i, j));
            }
        }
    }
    hits
}
