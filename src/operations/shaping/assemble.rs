use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::BoundaryPath;
use crate::tessellation::{EarClip, SolidMesh};

use super::{ExtrudeRing, ExtrusionParams};

/// Turns every boundary path into a prism and combines them into one mesh.
///
/// Only the outer ring of each path is triangulated; reported holes are
/// filled.
pub struct AssembleSolid<'a> {
    paths: &'a [BoundaryPath],
    params: ExtrusionParams,
}

impl<'a> AssembleSolid<'a> {
    /// Creates a new `AssembleSolid` operation.
    #[must_use]
    pub fn new(paths: &'a [BoundaryPath], params: ExtrusionParams) -> Self {
        Self { paths, params }
    }

    /// Executes the assembly. No paths yield an empty mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the extrusion depths are invalid.
    pub fn execute(&self) -> Result<SolidMesh> {
        let mut combined = SolidMesh::default();
        for (i, path) in self.paths.iter().enumerate() {
            let outer = &path.outer;
            let triangulation = EarClip::new(outer.points())
                .with_epsilon(self.params.convexity_epsilon)
                .execute();
            if !triangulation.complete {
                debug!(
                    path = i,
                    vertices = outer.len(),
                    triangles = triangulation.len(),
                    "cap triangulation is partial"
                );
            }
            if !path.holes.is_empty() {
                trace!(path = i, holes = path.holes.len(), "filling holes");
            }
            let prism =
                ExtrudeRing::new(outer, &triangulation, self.params.front, self.params.back)
                    .execute()?;
            combined.merge(&prism);
        }
        combined.recompute();
        Ok(combined)
    }
}
