use tracing::debug;

use crate::math::polygon_2d::{point_in_triangle, signed_area_2d, turn};
use crate::math::{Point2, TOLERANCE};

/// Triangles indexing into the point array they were built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Triangulation {
    /// Index triples, each wound clockwise in the XY plane.
    pub triangles: Vec<[usize; 3]>,
    /// `false` when clipping gave up before the polygon was exhausted.
    pub complete: bool,
}

impl Triangulation {
    /// Number of triangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Sum of unsigned triangle areas over `points`.
    #[must_use]
    pub fn covered_area(&self, points: &[Point2]) -> f64 {
        self.triangles
            .iter()
            .map(|&[a, b, c]| turn(&points[a], &points[b], &points[c]).abs() * 0.5)
            .sum()
    }
}

/// Ear-clipping triangulation of one simple polygon of either winding.
///
/// Internally the polygon is walked counter-clockwise. An ear is a vertex
/// whose turn exceeds `epsilon` and whose triangle holds no other remaining
/// vertex (boundary inclusive). Every scan attempt spends one unit of a
/// retry budget of twice the remaining vertex count; the budget resets on
/// each clip, and running out ends the triangulation early.
pub struct EarClip<'a> {
    points: &'a [Point2],
    epsilon: f64,
}

impl<'a> EarClip<'a> {
    /// Creates a new `EarClip` operation with the default convexity epsilon.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            epsilon: TOLERANCE,
        }
    }

    /// Sets the convexity threshold for candidate ears.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Executes the triangulation.
    ///
    /// Fewer than three points yield an empty, complete triangulation.
    #[must_use]
    pub fn execute(&self) -> Triangulation {
        let n = self.points.len();
        if n < 3 {
            return Triangulation {
                triangles: Vec::new(),
                complete: true,
            };
        }

        let mut working: Vec<usize> = if signed_area_2d(self.points) > 0.0 {
            (0..n).collect()
        } else {
            (0..n).rev().collect()
        };

        let mut triangles = Vec::with_capacity(n - 2);
        let mut budget = 2 * n;
        let mut v = n - 1;
        let mut complete = true;

        while working.len() > 2 {
            if budget == 0 {
                debug!(
                    vertices = n,
                    remaining = working.len(),
                    emitted = triangles.len(),
                    "ear clipping did not converge"
                );
                complete = false;
                break;
            }
            budget -= 1;

            let nv = working.len();
            let u = if v < nv { v } else { 0 };
            v = if u + 1 < nv { u + 1 } else { 0 };
            let w = if v + 1 < nv { v + 1 } else { 0 };

            if self.is_ear(&working, u, v, w) {
                triangles.push([working[u], working[v], working[w]]);
                working.remove(v);
                budget = 2 * working.len();
                v = working.len() - 1;
            }
        }

        // Undo the counter-clockwise walk: emitted stream reversed end to end.
        triangles.reverse();
        for tri in &mut triangles {
            tri.reverse();
        }

        Triangulation {
            triangles,
            complete,
        }
    }

    fn is_ear(&self, working: &[usize], u: usize, v: usize, w: usize) -> bool {
        let a = &self.points[working[u]];
        let b = &self.points[working[v]];
        let c = &self.points[working[w]];

        if turn(a, b, c) <= self.epsilon {
            return false;
        }

        !working
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != u && i != v && i != w)
            .any(|(_, &idx)| point_in_triangle(a, b, c, &self.points[idx]))
    }
}
