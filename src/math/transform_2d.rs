use nalgebra::Rotation2;

use super::{Point2, Vector2};

/// World placement of a 2D shape: translation, rotation and lossy scale.
///
/// Scale is applied by the sampler while building the local outline;
/// [`Transform2::apply`] only rotates and translates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2 {
    /// World-space position.
    pub position: Vector2,
    /// Counter-clockwise rotation in radians.
    pub rotation: f64,
    /// Per-axis world scale, possibly non-uniform.
    pub scale: Vector2,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2 {
    /// The identity placement.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Vector2::zeros(),
            rotation: 0.0,
            scale: Vector2::new(1.0, 1.0),
        }
    }

    /// A pure translation.
    #[must_use]
    pub fn from_position(x: f64, y: f64) -> Self {
        Self {
            position: Vector2::new(x, y),
            ..Self::identity()
        }
    }

    /// Returns a copy with the given rotation.
    #[must_use]
    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }

    /// Returns a copy with the given per-axis scale.
    #[must_use]
    pub fn with_scale(mut self, sx: f64, sy: f64) -> Self {
        self.scale = Vector2::new(sx, sy);
        self
    }

    /// Scales a local vector component-wise by the lossy scale.
    #[must_use]
    pub fn scale_local(&self, v: Vector2) -> Vector2 {
        v.component_mul(&self.scale)
    }

    /// Maps an already-scaled local point into world space.
    #[must_use]
    pub fn apply(&self, local: &Point2) -> Point2 {
        Rotation2::new(self.rotation) * local + self.position
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|c| c.is_finite())
            && self.rotation.is_finite()
            && self.scale.iter().all(|c| c.is_finite())
    }
}
