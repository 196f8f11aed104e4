//! Frame-driven refresh loop for the static surface and the tracked floor.
//!
//! [`RefreshScheduler`] is advanced only by [`RefreshScheduler::tick`]. A
//! pending static rebuild always finishes before the same tick publishes
//! the floor, and nothing that goes wrong while replacing the floor stops
//! the publish.

mod floor_slot;
mod interval;

pub use floor_slot::FloorSlot;
pub use interval::IntervalTimer;

use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::error::{FloorError, Result};
use crate::math::Point3;
use crate::operations::merge::BoundaryMerger;
use crate::operations::BuildSurface;
use crate::scene::{ContextId, ShapeSource};
use crate::surface::{StaticSurface, SurfaceSink};

/// A moving point the floor is kept under.
pub trait TrackedPoint {
    /// Current world position.
    ///
    /// # Errors
    ///
    /// Returns a [`FloorError`] when the point cannot be read this frame.
    fn position(&self) -> std::result::Result<Point3, FloorError>;
}

impl TrackedPoint for Point3 {
    fn position(&self) -> std::result::Result<Point3, FloorError> {
        Ok(*self)
    }
}

/// What one [`RefreshScheduler::tick`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// A pending static rebuild ran and succeeded.
    pub rebuilt: bool,
    /// The floor interval elapsed.
    pub floor_fired: bool,
    /// The floor could not be replaced; the slot is empty until next firing.
    pub floor_failed: bool,
}

/// Host collaborators consulted during a tick.
pub struct RefreshHost<'a> {
    pub source: &'a dyn ShapeSource,
    pub tracked: &'a dyn TrackedPoint,
    pub sink: &'a mut dyn SurfaceSink,
}

/// Owns the generated surfaces and decides when to regenerate them.
pub struct RefreshScheduler {
    config: PipelineConfig,
    context: ContextId,
    merger: Box<dyn BoundaryMerger>,
    timer: IntervalTimer,
    dirty: bool,
    static_surface: Option<StaticSurface>,
    floor: FloorSlot,
}

impl RefreshScheduler {
    /// Creates a scheduler for the shapes of `context`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn new(
        config: PipelineConfig,
        context: ContextId,
        merger: Box<dyn BoundaryMerger>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            timer: IntervalTimer::new(config.refresh_interval),
            config,
            context,
            merger,
            dirty: false,
            static_surface: None,
            floor: FloorSlot::new(),
        })
    }

    /// Flags the shape set as changed; the next tick rebuilds.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuilds the static surface immediately and publishes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the rebuild fails; the dirty flag stays cleared.
    pub fn initialize(&mut self, host: &mut RefreshHost<'_>) -> Result<()> {
        self.mark_dirty();
        self.rebuild(host.source)?;
        self.publish(host.sink);
        Ok(())
    }

    /// Advances the loop by `elapsed` seconds.
    pub fn tick(&mut self, elapsed: f64, host: &mut RefreshHost<'_>) -> RefreshReport {
        let mut report = RefreshReport::default();

        if self.dirty {
            match self.rebuild(host.source) {
                Ok(()) => report.rebuilt = true,
                Err(err) => warn!(%err, "static surface rebuild failed"),
            }
        }

        if self.timer.tick(elapsed) {
            report.floor_fired = true;
            if let Err(err) = self.floor.replace(
                host.tracked,
                self.config.floor_offset,
                self.config.floor_half_extent,
            ) {
                debug!(%err, "floor refresh skipped");
                report.floor_failed = true;
            }
        }

        if report.rebuilt || report.floor_fired {
            self.publish(host.sink);
        }
        report
    }

    /// The current static surface, if the last rebuild produced one.
    #[must_use]
    pub fn static_surface(&self) -> Option<&StaticSurface> {
        self.static_surface.as_ref()
    }

    #[must_use]
    pub fn floor(&self) -> &FloorSlot {
        &self.floor
    }

    #[must_use]
    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn rebuild(&mut self, source: &dyn ShapeSource) -> Result<()> {
        self.dirty = false;
        let mesh = BuildSurface::new(source, self.merger.as_ref(), self.context, &self.config)
            .execute()?;
        self.static_surface = (!mesh.is_empty()).then(|| {
            StaticSurface::new(
                mesh,
                self.config.static_surface_kind,
                self.config.render_static,
            )
        });
        debug!(
            empty = self.static_surface.is_none(),
            "static surface rebuilt"
        );
        Ok(())
    }

    fn publish(&self, sink: &mut dyn SurfaceSink) {
        let surfaces: Vec<&StaticSurface> = self
            .static_surface
            .iter()
            .chain(self.floor.surface())
            .collect();
        sink.load_static_surfaces(&surfaces);
    }
}
