use tracing::debug;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::geometry::{BoundaryRing, Shape};
use crate::operations::merge::BoundaryMerger;
use crate::operations::sampling::{SampleShape, SelectShapes};
use crate::operations::shaping::AssembleSolid;
use crate::scene::{ContextId, ShapeSource};
use crate::tessellation::SolidMesh;

/// One synchronous pass from host colliders to a combined collision solid.
///
/// Selects the shapes that belong to `context`, samples them into world
/// rings, unions the rings and extrudes every resulting region.
pub struct BuildSurface<'a, S: ShapeSource + ?Sized, M: BoundaryMerger + ?Sized> {
    source: &'a S,
    merger: &'a M,
    context: ContextId,
    config: &'a PipelineConfig,
}

impl<'a, S: ShapeSource + ?Sized, M: BoundaryMerger + ?Sized> BuildSurface<'a, S, M> {
    /// Creates a new `BuildSurface` operation.
    #[must_use]
    pub fn new(
        source: &'a S,
        merger: &'a M,
        context: ContextId,
        config: &'a PipelineConfig,
    ) -> Self {
        Self {
            source,
            merger,
            context,
            config,
        }
    }

    /// Samples every selected shape into a ring. Degenerate shapes are dropped.
    #[must_use]
    pub fn sample_rings(&self) -> Vec<BoundaryRing> {
        let selected = SelectShapes::new(self.context, &self.config.exclusions)
            .execute(self.source.scene_shapes());
        selected
            .into_iter()
            .filter_map(|mut desc| {
                if let Shape::Circle { segments, .. } = &mut desc.shape {
                    *segments = self.config.circle_segments;
                }
                let ring = SampleShape::new(&desc).execute();
                if ring.is_none() {
                    debug!(kind = desc.shape.kind(), "dropping degenerate shape");
                }
                ring
            })
            .collect()
    }

    /// Executes the pass. No contributing shapes yield an empty mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured extrusion depths are invalid.
    pub fn execute(&self) -> Result<SolidMesh> {
        let rings = self.sample_rings();
        let paths = self.merger.merge(&rings);
        let mesh = AssembleSolid::new(&paths, self.config.extrusion_params()).execute()?;
        debug!(
            rings = rings.len(),
            paths = paths.len(),
            triangles = mesh.triangle_count(),
            "built static surface"
        );
        Ok(mesh)
    }
}
