use crate::error::{GeometryError, Result};
use crate::geometry::BoundaryRing;
use crate::math::{Point3, TOLERANCE};
use crate::tessellation::{SolidMesh, Triangulation};

/// Extrudes a triangulated ring along Z into a closed prism.
///
/// Vertex `i` sits at `front` depth, vertex `i + n` mirrors it at `back`.
pub struct ExtrudeRing<'a> {
    ring: &'a BoundaryRing,
    triangulation: &'a Triangulation,
    front: f64,
    back: f64,
}

impl<'a> ExtrudeRing<'a> {
    /// Creates a new `ExtrudeRing` operation.
    #[must_use]
    pub fn new(
        ring: &'a BoundaryRing,
        triangulation: &'a Triangulation,
        front: f64,
        back: f64,
    ) -> Self {
        Self {
            ring,
            triangulation,
            front,
            back,
        }
    }

    /// Executes the extrusion.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the two depths coincide and
    /// [`GeometryError::NonFinite`] if either depth is not finite.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<SolidMesh> {
        if !self.front.is_finite() || !self.back.is_finite() {
            return Err(GeometryError::NonFinite("extrusion depth").into());
        }
        if (self.front - self.back).abs() < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "front and back extrusion depths coincide".into(),
            )
            .into());
        }

        let points = self.ring.points();
        let n = points.len();
        let len = n as u32;

        let mut vertices = Vec::with_capacity(2 * n);
        vertices.extend(points.iter().map(|p| Point3::new(p.x, p.y, self.front)));
        vertices.extend(points.iter().map(|p| Point3::new(p.x, p.y, self.back)));

        let caps = self.triangulation.len();
        let mut indices = Vec::with_capacity(2 * caps + 2 * n);

        // Front cap: triangulation output is clockwise in XY, facing -Z.
        for &[a, b, c] in &self.triangulation.triangles {
            indices.push([a as u32, b as u32, c as u32]);
        }

        // Back cap: reversed winding on the mirrored ring.
        for &[a, b, c] in &self.triangulation.triangles {
            indices.push([c as u32 + len, b as u32 + len, a as u32 + len]);
        }

        // Side walls face along the right-hand edge normal of a
        // counter-clockwise ring; clockwise rings use the mirrored pair.
        let ccw = self.ring.signed_area() >= 0.0;
        for i in 0..len {
            let next = (i + 1) % len;
            if ccw {
                indices.push([next, i + len, i]);
                indices.push([next, next + len, i + len]);
            } else {
                indices.push([i, i + len, next]);
                indices.push([i + len, next + len, next]);
            }
        }

        Ok(SolidMesh::new(vertices, indices))
    }
}
