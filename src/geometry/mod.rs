pub mod ring;
pub mod shape;

pub use ring::{BoundaryPath, BoundaryRing};
pub use shape::{Shape, ShapeDescriptor, DEFAULT_CIRCLE_SEGMENTS};
