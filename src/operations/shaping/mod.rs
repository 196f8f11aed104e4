mod assemble;
mod extrude;
mod floor;

pub use assemble::AssembleSolid;
pub use extrude::ExtrudeRing;
pub use floor::MakeFloor;

use crate::math::TOLERANCE;

/// Parameters controlling how boundary paths become solids.
#[derive(Debug, Clone, Copy)]
pub struct ExtrusionParams {
    /// Depth of the front cap.
    pub front: f64,
    /// Depth of the back cap.
    pub back: f64,
    /// Minimum turn for an ear-clipping candidate.
    pub convexity_epsilon: f64,
}

impl Default for ExtrusionParams {
    fn default() -> Self {
        Self {
            front: -10.0,
            back: 10.0,
            convexity_epsilon: TOLERANCE,
        }
    }
}
