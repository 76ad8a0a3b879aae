//! # octaview algorithms
//!
//! The viewpoint synthesis pipeline: procedural scene generation, bracketing of
//! the camera azimuth between reference views, visibility filtering and
//! projection into depth-sorted screen primitives.

pub mod generation;
pub mod interpolation;
pub mod visibility;
pub mod projection;
pub mod pipeline;

pub use generation::*;
pub use interpolation::*;
pub use visibility::*;
pub use projection::*;
pub use pipeline::*;
