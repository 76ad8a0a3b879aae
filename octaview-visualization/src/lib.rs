//! Presentation-side collaborators for octaview
//!
//! The synthesis pipeline knows nothing about input devices, timers or
//! drawing. This crate supplies those pieces:
//! - Camera control from slider-style input
//! - Cancellable auto-rotation on a Tokio interval
//! - Info panel text for a synthesized frame
//! - Hand-off of primitives to any `RenderSurface`

pub mod controller;
pub mod turntable;
pub mod status;
pub mod surface;

pub use controller::*;
pub use turntable::*;
pub use status::*;
pub use surface::*;
