//! Point cloud container

use crate::point::*;
use serde::{Deserialize, Serialize};

/// A generic, ordered point cloud container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloud<T> {
    pub points: Vec<T>,
}

/// A point cloud of colored, categorised scene points
pub type ScenePointCloud = PointCloud<ScenePoint>;

impl<T> PointCloud<T> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a point cloud from a vector of points
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.points
    }
}

impl PointCloud<ScenePoint> {
    /// Number of points belonging to `category`
    pub fn count_category(&self, category: SceneCategory) -> usize {
        self.points.iter().filter(|p| p.category == category).count()
    }
}

impl<T> Default for PointCloud<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PointCloud<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}
