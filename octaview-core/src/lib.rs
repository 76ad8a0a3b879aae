//! Core data structures and traits for octaview
//!
//! This crate provides the fundamental types shared by the viewpoint synthesis
//! pipeline: scene points and point clouds, the orbiting view camera, the table
//! of reference views, pipeline configuration and the rendering surface trait.

pub mod point;
pub mod point_cloud;
pub mod scene;
pub mod camera;
pub mod reference;
pub mod config;
pub mod primitive;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use scene::*;
pub use camera::*;
pub use reference::*;
pub use config::*;
pub use primitive::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Rotation3};
