use crate::math::polygon_2d::{self, Orientation};
use crate::math::{Aabb, Point2, Point3, TOLERANCE};

/// An implicitly closed loop of 2D points.
///
/// Consecutive points are always distinct and there are at least three of
/// them; anything else is rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRing {
    points: Vec<Point2>,
}

impl BoundaryRing {
    /// Builds a ring, dropping consecutive duplicates.
    ///
    /// Returns `None` if fewer than three distinct points remain or any
    /// coordinate is non-finite.
    #[must_use]
    pub fn new(points: &[Point2]) -> Option<Self> {
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return None;
        }
        let points = polygon_2d::dedup_closed(points, TOLERANCE);
        (points.len() >= 3).then_some(Self { points })
    }

    /// Builds a ring with duplicate and collinear vertices removed.
    #[must_use]
    pub fn simplified(points: &[Point2], eps: f64) -> Option<Self> {
        Self::new(&polygon_2d::remove_redundant(points, eps))
    }

    /// The ring's vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Constructed rings are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area; positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        polygon_2d::signed_area_2d(&self.points)
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        polygon_2d::orientation(&self.points)
    }

    /// Returns the ring with its traversal order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Returns the ring wound counter-clockwise.
    #[must_use]
    pub fn to_ccw(&self) -> Self {
        if self.signed_area() < 0.0 {
            self.reversed()
        } else {
            self.clone()
        }
    }

    /// XY bounds at z = 0.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let mut min = Point3::new(self.points[0].x, self.points[0].y, 0.0);
        let mut max = min;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Aabb { min, max }
    }
}

/// One connected region of a union: an outer boundary and its holes.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPath {
    pub outer: BoundaryRing,
    pub holes: Vec<BoundaryRing>,
}

impl BoundaryPath {
    /// A region without holes.
    #[must_use]
    pub fn new(outer: BoundaryRing) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Enclosed area, holes subtracted.
    #[must_use]
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|h| h.signed_area().abs()).sum();
        self.outer.signed_area().abs() - holes
    }
}
