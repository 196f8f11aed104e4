//! Output side of the pipeline: tagged meshes handed to a physics backend.

use serde::{Deserialize, Serialize};

use crate::tessellation::SolidMesh;

/// How the physics backend treats a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SurfaceKind {
    #[default]
    Default,
    /// Characters may grab and hang from the surface's edges.
    Hangable,
}

/// A mesh published to the consumer as one collision volume.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSurface {
    pub mesh: SolidMesh,
    pub kind: SurfaceKind,
    pub visible: bool,
}

impl StaticSurface {
    #[must_use]
    pub fn new(mesh: SolidMesh, kind: SurfaceKind, visible: bool) -> Self {
        Self {
            mesh,
            kind,
            visible,
        }
    }

    /// A visible surface of the default kind.
    #[must_use]
    pub fn visible(mesh: SolidMesh) -> Self {
        Self::new(mesh, SurfaceKind::Default, true)
    }
}

/// Receives the full set of active surfaces.
///
/// Every call replaces whatever the previous call loaded.
pub trait SurfaceSink {
    fn load_static_surfaces(&mut self, surfaces: &[&StaticSurface]);
}

/// Keeps the most recently loaded set, for hosts that poll.
#[derive(Debug, Default)]
pub struct SurfaceBuffer {
    pub surfaces: Vec<StaticSurface>,
    /// Number of `load_static_surfaces` calls so far.
    pub loads: usize,
}

impl SurfaceSink for SurfaceBuffer {
    fn load_static_surfaces(&mut self, surfaces: &[&StaticSurface]) {
        self.surfaces = surfaces.iter().map(|s| (*s).clone()).collect();
        self.loads += 1;
    }
}
