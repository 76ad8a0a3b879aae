//! Screen-space output of the projector

use crate::point::{color_to_rgb8, Color3f, SceneCategory};
use serde::{Deserialize, Serialize};

/// A filled circle ready for a 2D drawing surface.
///
/// Primitives are recomputed every frame and carry no identity across frames.
/// Lists of primitives are ordered by descending `distance`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPrimitive {
    pub screen_x: f32,
    pub screen_y: f32,
    /// Radius in screen units, never below 1
    pub size: f32,
    pub color: Color3f,
    /// In `(0, 1]`
    pub opacity: f32,
    /// Distance from the origin in camera-relative space
    pub distance: f32,
    pub category: SceneCategory,
}

impl ProjectedPrimitive {
    pub fn rgb8(&self) -> [u8; 3] {
        color_to_rgb8(self.color)
    }
}
