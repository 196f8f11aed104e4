mod contour_union;

pub use contour_union::ContourUnion;

use crate::geometry::{BoundaryPath, BoundaryRing};

/// Unions boundary rings into disjoint, simple boundary paths.
///
/// Output must stay in the caller's coordinate space, and an empty input
/// must produce an empty output.
pub trait BoundaryMerger {
    fn merge(&self, rings: &[BoundaryRing]) -> Vec<BoundaryPath>;
}

/// Treats every ring as its own region without any union.
///
/// For hosts whose shapes are already known not to overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepSeparate;

impl BoundaryMerger for KeepSeparate {
    fn merge(&self, rings: &[BoundaryRing]) -> Vec<BoundaryPath> {
        rings.iter().cloned().map(BoundaryPath::new).collect()
    }
}
