pub mod build_surface;
pub mod merge;
pub mod sampling;
pub mod shaping;

pub use build_surface::BuildSurface;
