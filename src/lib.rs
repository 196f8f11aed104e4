//! Collision-surface generation from 2D scene shapes.
//!
//! Colliders reported by a host scene are sampled into world-space rings,
//! unioned into disjoint regions, triangulated by ear clipping and extruded
//! into one closed solid. [`refresh::RefreshScheduler`] keeps that solid and
//! a floor under a tracked point up to date from the host's frame loop.

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod refresh;
pub mod scene;
pub mod surface;
pub mod tessellation;

pub use config::PipelineConfig;
pub use error::{Result, SolidifyError};
