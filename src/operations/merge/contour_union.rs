use cavalier_contours::polyline::{BooleanOp, PlineSource, PlineSourceMut, Polyline};
use tracing::debug;

use crate::geometry::{BoundaryPath, BoundaryRing};
use crate::math::polygon_2d::{offset_ring, split_pinched};
use crate::math::{Aabb, Point2};

use super::BoundaryMerger;

/// Default tolerance for dropping duplicate and collinear union vertices.
const SIMPLIFY_EPS: f64 = 1e-7;

/// Default weld distance. Kept well above the boolean engine's own
/// coincidence tolerance of `1e-5`.
const WELD_DISTANCE: f64 = 1e-4;

/// Polygon union backed by `cavalier_contours` boolean operations.
///
/// Rings are folded one at a time into a set of disjoint regions. Pairs
/// whose bounding boxes do not touch are never handed to the boolean engine.
///
/// Every ring is grown by the weld distance before the union and the result
/// is shrunk back afterwards, so shapes sharing an edge or a corner are
/// joined instead of being reported as neighbours. Gaps narrower than twice
/// the weld distance close up. Outputs that end up touching themselves at a
/// single vertex are split there, so every returned ring is simple.
#[derive(Debug, Clone, Copy)]
pub struct ContourUnion {
    simplify_eps: f64,
    weld: f64,
}

impl Default for ContourUnion {
    fn default() -> Self {
        Self {
            simplify_eps: SIMPLIFY_EPS,
            weld: WELD_DISTANCE,
        }
    }
}

impl ContourUnion {
    /// Creates a union with a custom simplification tolerance.
    #[must_use]
    pub fn with_tolerance(simplify_eps: f64) -> Self {
        Self {
            simplify_eps,
            ..Self::default()
        }
    }

    /// Sets the distance within which boundaries are welded together.
    #[must_use]
    pub fn with_weld(mut self, weld: f64) -> Self {
        self.weld = weld.abs();
        self
    }
}

impl BoundaryMerger for ContourUnion {
    fn merge(&self, rings: &[BoundaryRing]) -> Vec<BoundaryPath> {
        let mut regions: Vec<Region> = Vec::new();
        for ring in rings {
            let mut merged = Region::grown(ring, self.weld);
            let mut i = 0;
            while i < regions.len() {
                if let Some(joined) = merged.union(&regions[i], self.simplify_eps) {
                    merged = joined;
                    regions.swap_remove(i);
                } else {
                    i += 1;
                }
            }
            regions.push(merged);
        }

        let paths: Vec<BoundaryPath> = regions
            .into_iter()
            .flat_map(|r| {
                let paths = r.into_paths(self.weld, self.simplify_eps);
                if paths.is_empty() {
                    debug!("dropping degenerate union region");
                }
                paths
            })
            .collect();
        debug!(rings = rings.len(), paths = paths.len(), "merged boundary rings");
        paths
    }
}

/// One connected area of the running union, held in welded (grown) form.
/// All rings are counter-clockwise.
struct Region {
    outer: BoundaryRing,
    holes: Vec<BoundaryRing>,
    bounds: Aabb,
}

impl Region {
    fn grown(ring: &BoundaryRing, weld: f64) -> Self {
        let ccw = ring.to_ccw();
        let outer = BoundaryRing::new(&offset_ring(ccw.points(), -weld)).unwrap_or(ccw);
        Self {
            bounds: outer.bounds(),
            outer,
            holes: Vec::new(),
        }
    }

    /// Unions two regions, or `None` if they stay separate.
    ///
    /// A point is a hole of the result when it lies in a new hole of the
    /// outer union, in a hole of one region outside the other's outer
    /// boundary, or in holes of both.
    fn union(&self, other: &Region, eps: f64) -> Option<Region> {
        if !self.bounds.overlaps_xy(&other.bounds) {
            return None;
        }
        let a = to_pline(&self.outer);
        let b = to_pline(&other.outer);
        let result = a.boolean(&b, BooleanOp::Or);
        if result.pos_plines.len() != 1 {
            return None;
        }
        let outer = result
            .pos_plines
            .iter()
            .find_map(|r| ring_from_pline(&r.pline, eps))?;

        let mut holes: Vec<BoundaryRing> = result
            .neg_plines
            .iter()
            .filter_map(|r| ring_from_pline(&r.pline, eps))
            .collect();
        for h in &self.holes {
            holes.extend(boolean_rings(h, &other.outer, BooleanOp::Not, eps));
        }
        for h in &other.holes {
            holes.extend(boolean_rings(h, &self.outer, BooleanOp::Not, eps));
        }
        for h1 in &self.holes {
            for h2 in &other.holes {
                holes.extend(boolean_rings(h1, h2, BooleanOp::And, eps));
            }
        }

        Some(Region {
            outer,
            holes,
            bounds: Aabb {
                min: self.bounds.min.inf(&other.bounds.min),
                max: self.bounds.max.sup(&other.bounds.max),
            },
        })
    }

    /// Undoes the weld and splits pinched rings into simple ones.
    ///
    /// Clockwise loops split off the outer boundary enclose uncovered area
    /// and become holes.
    fn into_paths(self, weld: f64, eps: f64) -> Vec<BoundaryPath> {
        let mut paths = Vec::new();
        let mut holes = Vec::new();
        for piece in split_pinched(&offset_ring(self.outer.points(), weld), eps) {
            let Some(ring) = BoundaryRing::simplified(&piece, eps) else {
                continue;
            };
            if ring.signed_area() > 0.0 {
                paths.push(BoundaryPath::new(ring));
            } else {
                holes.push(ring.reversed());
            }
        }
        for hole in &self.holes {
            for piece in split_pinched(&offset_ring(hole.points(), -weld), eps) {
                holes.extend(BoundaryRing::simplified(&piece, eps).map(|r| r.to_ccw()));
            }
        }
        for hole in holes {
            let bounds = hole.bounds();
            if let Some(path) = paths
                .iter_mut()
                .find(|p| p.outer.bounds().contains_xy(&bounds))
            {
                path.holes.push(hole);
            }
        }
        paths
    }
}

fn to_pline(ring: &BoundaryRing) -> Polyline<f64> {
    let mut pline = Polyline::new_closed();
    for p in ring.points() {
        pline.add(p.x, p.y, 0.0);
    }
    pline
}

/// Converts boolean output back to a counter-clockwise ring.
fn ring_from_pline(pline: &Polyline<f64>, eps: f64) -> Option<BoundaryRing> {
    let points: Vec<Point2> = pline
        .vertex_data
        .iter()
        .map(|v| Point2::new(v.x, v.y))
        .collect();
    BoundaryRing::simplified(&points, eps).map(|r| r.to_ccw())
}

fn boolean_rings(
    a: &BoundaryRing,
    b: &BoundaryRing,
    op: BooleanOp,
    eps: f64,
) -> Vec<BoundaryRing> {
    to_pline(a)
        .boolean(&to_pline(b), op)
        .pos_plines
        .iter()
        .filter_map(|r| ring_from_pline(&r.pline, eps))
        .collect()
}
