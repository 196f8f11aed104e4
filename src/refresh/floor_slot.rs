use crate::error::FloorError;
use crate::math::Point3;
use crate::operations::shaping::MakeFloor;
use crate::surface::StaticSurface;

use super::TrackedPoint;

/// Owns the current tracked floor surface and the point it was centred on.
#[derive(Debug, Default)]
pub struct FloorSlot {
    surface: Option<StaticSurface>,
    centre: Option<Point3>,
}

impl FloorSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the slot, returning the previous surface.
    pub fn release(&mut self) -> Option<StaticSurface> {
        self.centre = None;
        self.surface.take()
    }

    /// Releases the current floor, then builds a new one under `tracked`.
    ///
    /// # Errors
    ///
    /// Returns a [`FloorError`] if the point cannot be read or the quad
    /// cannot be built. The slot is left empty in that case.
    pub fn replace(
        &mut self,
        tracked: &dyn TrackedPoint,
        vertical_offset: f64,
        half_extent: f64,
    ) -> Result<(), FloorError> {
        self.release();
        let point = tracked.position()?;
        let mesh = MakeFloor::new(point, vertical_offset, half_extent).execute()?;
        self.surface = Some(StaticSurface::visible(mesh));
        self.centre = Some(point);
        Ok(())
    }

    #[must_use]
    pub fn surface(&self) -> Option<&StaticSurface> {
        self.surface.as_ref()
    }

    /// The tracked position the current floor was built under.
    #[must_use]
    pub fn centre(&self) -> Option<Point3> {
        self.centre
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    struct Missing;

    impl TrackedPoint for Missing {
        fn position(&self) -> Result<Point3, FloorError> {
            Err(FloorError::TrackedPointUnavailable("despawned".into()))
        }
    }

    #[test]
    fn replace_builds_under_point() {
        let mut slot = FloorSlot::new();
        slot.replace(&Point3::new(1.0, 5.0, 2.0), -20.0, 4.0).unwrap();
        let surface = slot.surface().unwrap();
        assert!(surface.visible);
        let bb = surface.mesh.bounds.unwrap();
        assert_relative_eq!(bb.center(), Point3::new(1.0, -15.0, 2.0));
        assert_eq!(slot.centre(), Some(Point3::new(1.0, 5.0, 2.0)));
    }

    #[test]
    fn failed_replace_leaves_slot_empty() {
        let mut slot = FloorSlot::new();
        slot.replace(&Point3::origin(), -20.0, 4.0).unwrap();
        assert!(slot.replace(&Missing, -20.0, 4.0).is_err());
        assert!(slot.surface().is_none());
        assert!(slot.centre().is_none());
    }

    #[test]
    fn release_returns_previous() {
        let mut slot = FloorSlot::new();
        assert!(slot.release().is_none());
        slot.replace(&Point3::origin(), -20.0, 4.0).unwrap();
        assert!(slot.release().is_some());
        assert!(slot.surface().is_none());
    }
}
