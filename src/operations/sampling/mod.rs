mod sample_shape;
mod select_shapes;

pub use sample_shape::SampleShape;
pub use select_shapes::SelectShapes;
