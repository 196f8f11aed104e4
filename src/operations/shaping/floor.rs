use crate::error::{FloorError, GeometryError};
use crate::math::Point3;
use crate::tessellation::SolidMesh;

/// Builds the flat safety-net quad under a tracked point.
///
/// The quad lies in the XZ plane at `point.y + vertical_offset` and faces +Y.
pub struct MakeFloor {
    point: Point3,
    vertical_offset: f64,
    half_extent: f64,
}

impl MakeFloor {
    /// Creates a new `MakeFloor` operation.
    #[must_use]
    pub fn new(point: Point3, vertical_offset: f64, half_extent: f64) -> Self {
        Self {
            point,
            vertical_offset,
            half_extent,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`FloorError::NonFinitePosition`] for a non-finite point and
    /// a geometry error for a non-positive half-extent.
    pub fn execute(&self) -> Result<SolidMesh, FloorError> {
        if !self.point.iter().all(|c| c.is_finite()) || !self.vertical_offset.is_finite() {
            return Err(FloorError::NonFinitePosition);
        }
        if !(self.half_extent > 0.0 && self.half_extent.is_finite()) {
            return Err(GeometryError::Degenerate(format!(
                "floor half-extent must be positive, got {}",
                self.half_extent
            ))
            .into());
        }

        let (x, y, z) = (
            self.point.x,
            self.point.y + self.vertical_offset,
            self.point.z,
        );
        let h = self.half_extent;
        let vertices = vec![
            Point3::new(x - h, y, z - h),
            Point3::new(x + h, y, z + h),
            Point3::new(x + h, y, z - h),
            Point3::new(x - h, y, z + h),
        ];
        Ok(SolidMesh::new(vertices, vec![[0, 1, 2], [1, 0, 3]]))
    }
}
