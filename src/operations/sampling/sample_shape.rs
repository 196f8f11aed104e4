use std::f64::consts::TAU;

use crate::geometry::{BoundaryRing, Shape, ShapeDescriptor};
use crate::math::{Point2, Vector2};

/// Converts one shape descriptor into a world-space boundary ring.
pub struct SampleShape<'a> {
    descriptor: &'a ShapeDescriptor,
}

impl<'a> SampleShape<'a> {
    /// Creates a new `SampleShape` operation.
    #[must_use]
    pub fn new(descriptor: &'a ShapeDescriptor) -> Self {
        Self { descriptor }
    }

    /// Executes the sampling.
    ///
    /// Returns `None` when the outline has fewer than three distinct points
    /// or the placement is non-finite.
    #[must_use]
    pub fn execute(&self) -> Option<BoundaryRing> {
        let transform = &self.descriptor.transform;
        if !transform.is_finite() {
            return None;
        }
        let local = self.local_outline();
        let world: Vec<Point2> = local.iter().map(|p| transform.apply(p)).collect();
        BoundaryRing::new(&world)
    }

    /// Outline in local space with the lossy scale already applied.
    fn local_outline(&self) -> Vec<Point2> {
        let transform = &self.descriptor.transform;
        match &self.descriptor.shape {
            // Polygon offsets are applied unscaled.
            Shape::Polygon { points, offset } => points
                .iter()
                .map(|p| Point2::from(transform.scale_local(p.coords) + offset))
                .collect(),
            Shape::Box {
                half_extents,
                offset,
            } => {
                let center = transform.scale_local(*offset);
                let h = transform.scale_local(*half_extents);
                [(-h.x, -h.y), (h.x, -h.y), (h.x, h.y), (-h.x, h.y)]
                    .iter()
                    .map(|&(x, y)| Point2::from(center + Vector2::new(x, y)))
                    .collect()
            }
            Shape::Circle {
                radius,
                offset,
                segments,
            } => {
                let center = transform.scale_local(*offset);
                let r = transform.scale_local(Vector2::new(*radius, *radius));
                circle_points(center, r, *segments)
            }
        }
    }
}

/// Vertices at angles `TAU * i / segments` on an axis-aligned ellipse.
#[allow(clippy::cast_precision_loss)]
fn circle_points(center: Vector2, radii: Vector2, segments: usize) -> Vec<Point2> {
    (0..segments)
        .map(|i| {
            let angle = i as f64 / segments as f64 * TAU;
            Point2::new(
                center.x + angle.cos() * radii.x,
                center.y + angle.sin() * radii.y,
            )
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::polygon_2d::Orientation;
    use crate::math::Transform2;

    fn sample(shape: Shape, transform: Transform2) -> Option<BoundaryRing> {
        let desc = ShapeDescriptor::new(shape, transform);
        SampleShape::new(&desc).execute()
    }

    #[test]
    fn box_corners_in_fixed_order() {
        let ring = sample(Shape::rect(1.0, 0.5), Transform2::identity()).unwrap();
        let pts = ring.points();
        assert_eq!(pts.len(), 4);
        assert_relative_eq!(pts[0], Point2::new(-1.0, -0.5));
        assert_relative_eq!(pts[1], Point2::new(1.0, -0.5));
        assert_relative_eq!(pts[2], Point2::new(1.0, 0.5));
        assert_relative_eq!(pts[3], Point2::new(-1.0, 0.5));
        assert_eq!(ring.orientation(), Orientation::CounterClockwise);
    }

    #[test]
    fn box_offset_and_size_are_scaled() {
        let shape = Shape::rect(0.5, 0.5).with_offset(1.0, 0.0);
        let t = Transform2::from_position(10.0, 20.0).with_scale(2.0, 3.0);
        let ring = sample(shape, t).unwrap();
        let bb = ring.bounds();
        assert_relative_eq!(bb.min.x, 11.0);
        assert_relative_eq!(bb.max.x, 13.0);
        assert_relative_eq!(bb.min.y, 18.5);
        assert_relative_eq!(bb.max.y, 21.5);
    }

    #[test]
    fn polygon_points_scaled_offset_unscaled() {
        let shape = Shape::polygon(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ])
        .with_offset(1.0, 1.0);
        let ring = sample(shape, Transform2::identity().with_scale(2.0, 2.0)).unwrap();
        assert_relative_eq!(ring.points()[1], Point2::new(3.0, 1.0));
        assert_relative_eq!(ring.points()[2], Point2::new(1.0, 3.0));
    }

    #[test]
    fn polygon_order_preserved() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        let ring = sample(Shape::polygon(pts), Transform2::identity()).unwrap();
        assert_eq!(ring.orientation(), Orientation::Clockwise);
    }

    #[test]
    fn rotation_applied_after_scale() {
        let t = Transform2::identity().with_rotation(FRAC_PI_2).with_scale(2.0, 1.0);
        let ring = sample(Shape::rect(1.0, 1.0), t).unwrap();
        let bb = ring.bounds();
        assert_relative_eq!(bb.max.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(bb.max.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn circle_has_fixed_segment_count() {
        let ring = sample(Shape::circle(2.0), Transform2::identity()).unwrap();
        assert_eq!(ring.len(), 32);
        assert_relative_eq!(ring.points()[0], Point2::new(2.0, 0.0));
        assert_relative_eq!(ring.points()[8], Point2::new(0.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn circle_becomes_ellipse_under_non_uniform_scale() {
        let t = Transform2::identity().with_scale(2.0, 1.0);
        let ring = sample(Shape::circle(1.0).with_segments(64), t).unwrap();
        let bb = ring.bounds();
        assert_relative_eq!(bb.max.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(bb.max.y, 1.0, epsilon = 1e-12);
        // 64-gon inscribed in an ellipse of area 2*PI.
        let expected = 0.5 * 64.0 * (2.0 * PI / 64.0).sin() * 2.0;
        assert_relative_eq!(ring.signed_area(), expected, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_shapes_are_dropped() {
        assert!(sample(Shape::rect(0.0, 0.0), Transform2::identity()).is_none());
        assert!(sample(Shape::circle(1.0).with_segments(2), Transform2::identity()).is_none());
        assert!(sample(Shape::polygon(vec![Point2::origin()]), Transform2::identity()).is_none());
        assert!(sample(Shape::rect(1.0, 1.0), Transform2::from_position(f64::INFINITY, 0.0)).is_none());
    }
}
