use crate::math::{Point2, Transform2, Vector2};

/// Default number of segments used to approximate a circle.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 32;

/// A 2D collider outline in its owner's local space.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Arbitrary outline; points are in order, implicitly closed.
    Polygon { points: Vec<Point2>, offset: Vector2 },
    /// Axis-aligned rectangle in local space.
    Box { half_extents: Vector2, offset: Vector2 },
    /// Circle approximated by `segments` vertices.
    Circle {
        radius: f64,
        offset: Vector2,
        segments: usize,
    },
}

impl Shape {
    /// Creates a polygon shape with no offset.
    #[must_use]
    pub fn polygon(points: Vec<Point2>) -> Self {
        Self::Polygon {
            points,
            offset: Vector2::zeros(),
        }
    }

    /// Creates a box shape from its half-extents.
    #[must_use]
    pub fn rect(half_width: f64, half_height: f64) -> Self {
        Self::Box {
            half_extents: Vector2::new(half_width, half_height),
            offset: Vector2::zeros(),
        }
    }

    /// Creates a circle with [`DEFAULT_CIRCLE_SEGMENTS`] segments.
    #[must_use]
    pub fn circle(radius: f64) -> Self {
        Self::Circle {
            radius,
            offset: Vector2::zeros(),
            segments: DEFAULT_CIRCLE_SEGMENTS,
        }
    }

    /// Returns a copy with the given local offset.
    #[must_use]
    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        match &mut self {
            Self::Polygon { offset, .. } | Self::Box { offset, .. } | Self::Circle { offset, .. } => {
                *offset = Vector2::new(x, y);
            }
        }
        self
    }

    /// Returns a copy with a different circle segment count.
    ///
    /// Has no effect on polygons and boxes.
    #[must_use]
    pub fn with_segments(mut self, count: usize) -> Self {
        if let Self::Circle { segments, .. } = &mut self {
            *segments = count;
        }
        self
    }

    /// Human-readable kind tag, used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Polygon { .. } => "polygon",
            Self::Box { .. } => "box",
            Self::Circle { .. } => "circle",
        }
    }
}

/// A shape together with its world placement, valid for one pipeline pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub shape: Shape,
    pub transform: Transform2,
}

impl ShapeDescriptor {
    #[must_use]
    pub fn new(shape: Shape, transform: Transform2) -> Self {
        Self { shape, transform }
    }
}
