//! # octaview
//!
//! Continuous 360 degree viewpoint synthesis from eight reference views.
//!
//! This is the umbrella crate that re-exports the octaview crates. Use it to
//! get everything in one place, or depend on individual crates for more
//! granular control over dependencies.
//!
//! ## Quick Start
//!
//! ```rust
//! use octaview::prelude::*;
//! use std::sync::Arc;
//!
//! let store = SceneStore::new(42);
//! let synthesizer = ViewSynthesizer::new(Arc::clone(store.scene()));
//!
//! let view = synthesizer.synthesize(&ViewCamera::new(60.0, 10.0));
//! assert_eq!(view.bracket.lower_index, 1);
//! assert!(view.primitives.windows(2).all(|p| p[0].distance >= p[1].distance));
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables core and algorithms
//! - `algorithms`: Scene generation and the synthesis pipeline
//! - `visualization`: Camera controller, auto-rotation and render hand-off
//! - `all`: Enables all features

// Re-export core functionality
pub use octaview_core::*;

#[cfg(feature = "algorithms")]
pub use octaview_algorithms as algorithms;

#[cfg(feature = "visualization")]
pub use octaview_visualization as visualization;

/// Convenient imports for common use cases
pub mod prelude {
    pub use octaview_core::*;

    #[cfg(feature = "algorithms")]
    pub use octaview_algorithms::*;

    #[cfg(feature = "visualization")]
    pub use octaview_visualization::*;
}
