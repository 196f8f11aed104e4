mod ear_clip;

pub use ear_clip::{EarClip, Triangulation};

use crate::math::{Aabb, Point3, Vector3, TOLERANCE};

/// A triangle mesh describing a solid or a surface patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolidMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Per-vertex normals, area-weighted over adjacent triangles.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
    /// Bounds of all vertices; `None` for an empty mesh.
    pub bounds: Option<Aabb>,
}

impl SolidMesh {
    /// Builds a mesh and derives normals and bounds from its triangles.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, indices: Vec<[u32; 3]>) -> Self {
        let mut mesh = Self {
            vertices,
            normals: Vec::new(),
            indices,
            bounds: None,
        };
        mesh.recompute();
        mesh
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// `true` when the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends another mesh, rebasing its indices.
    ///
    /// Normals and bounds are left stale; call [`SolidMesh::recompute`] once
    /// after the last merge.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &SolidMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|t| t.map(|i| i + base)));
    }

    /// Recomputes normals and bounds from the current triangles.
    pub fn recompute(&mut self) {
        self.recompute_normals();
        self.bounds = Aabb::from_points(&self.vertices);
    }

    /// Area-weighted vertex normals.
    pub fn recompute_normals(&mut self) {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];
        for tri in &self.indices {
            let n = self.face_cross(tri);
            for &i in tri {
                normals[i as usize] += n;
            }
        }
        for n in &mut normals {
            let len = n.norm();
            if len > TOLERANCE {
                *n /= len;
            }
        }
        self.normals = normals;
    }

    /// Unit normal of triangle `index`, or zero for a degenerate triangle.
    #[must_use]
    pub fn face_normal(&self, index: usize) -> Vector3 {
        let n = self.face_cross(&self.indices[index]);
        let len = n.norm();
        if len > TOLERANCE {
            n / len
        } else {
            Vector3::zeros()
        }
    }

    /// Signed enclosed volume; positive when triangles face outward.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.indices
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (
                    self.vertices[a as usize].coords,
                    self.vertices[b as usize].coords,
                    self.vertices[c as usize].coords,
                );
                a.dot(&b.cross(&c)) / 6.0
            })
            .sum()
    }

    /// `true` when every vertex is used by at least one triangle.
    #[must_use]
    pub fn all_vertices_referenced(&self) -> bool {
        let mut used = vec![false; self.vertices.len()];
        for tri in &self.indices {
            for &i in tri {
                used[i as usize] = true;
            }
        }
        used.into_iter().all(|u| u)
    }

    fn face_cross(&self, tri: &[u32; 3]) -> Vector3 {
        let a = self.vertices[tri[0] as usize];
        let b = self.vertices[tri[1] as usize];
        let c = self.vertices[tri[2] as usize];
        (b - a).cross(&(c - a))
    }
}
