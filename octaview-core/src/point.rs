//! Point types and related functionality

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Linear RGB color with each channel in `[0, 1]`
pub type Color3f = [f32; 3];

/// The kind of scene element a point was generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneCategory {
    Ground,
    Building,
    Vegetation,
    Vehicle,
}

impl SceneCategory {
    /// All categories in generation order
    pub const ALL: [SceneCategory; 4] = [
        SceneCategory::Ground,
        SceneCategory::Building,
        SceneCategory::Vegetation,
        SceneCategory::Vehicle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SceneCategory::Ground => "ground",
            SceneCategory::Building => "building",
            SceneCategory::Vegetation => "vegetation",
            SceneCategory::Vehicle => "vehicle",
        }
    }
}

/// A colored scene point tagged with the category it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub position: Point3f,
    pub color: Color3f,
    pub category: SceneCategory,
}

impl ScenePoint {
    /// Create a new scene point
    pub fn new(position: Point3f, color: Color3f, category: SceneCategory) -> Self {
        Self {
            position,
            color,
            category,
        }
    }

    /// Euclidean distance from the world origin
    pub fn distance_from_origin(&self) -> f32 {
        self.position.coords.norm()
    }

    /// Color as 8-bit channels, truncating `c * 255`
    pub fn rgb8(&self) -> [u8; 3] {
        color_to_rgb8(self.color)
    }
}

/// Convert a `[0, 1]` color to 8-bit channels.
///
/// Channels are clamped first so out-of-range values saturate instead of wrapping.
pub fn color_to_rgb8(color: Color3f) -> [u8; 3] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).floor() as u8)
}
