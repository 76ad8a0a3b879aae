//! Immutable scene store

use crate::point::{SceneCategory, ScenePoint};
use crate::point_cloud::ScenePointCloud;
use serde::Serialize;
use std::collections::BTreeMap;

/// The synthetic scene the reference views were "captured" from.
///
/// A scene is built once and never mutated afterwards; the pipeline only
/// borrows it. Share it between owners with `Arc<Scene>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    cloud: ScenePointCloud,
}

impl Scene {
    pub fn from_points(points: Vec<ScenePoint>) -> Self {
        Self {
            cloud: ScenePointCloud::from_points(points),
        }
    }

    pub fn points(&self) -> &[ScenePoint] {
        self.cloud.as_slice()
    }

    pub fn cloud(&self) -> &ScenePointCloud {
        &self.cloud
    }

    pub fn len(&self) -> usize {
        self.cloud.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cloud.is_empty()
    }

    /// Number of points per category; categories without points are omitted
    pub fn category_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for point in self.cloud.iter() {
            *counts.entry(point.category.name()).or_insert(0) += 1;
        }
        counts
    }

    pub fn count_category(&self, category: SceneCategory) -> usize {
        self.cloud.count_category(category)
    }
}

impl From<ScenePointCloud> for Scene {
    fn from(cloud: ScenePointCloud) -> Self {
        Self { cloud }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point3f;

    #[test]
    fn test_category_counts_skip_empty_categories() {
        let scene = Scene::from_points(vec![
            ScenePoint::new(Point3f::new(0.0, 0.0, 0.1), [0.2, 0.8, 0.3], SceneCategory::Ground),
            ScenePoint::new(Point3f::new(1.0, 1.0, 2.0), [0.8, 0.2, 0.2], SceneCategory::Vehicle),
            ScenePoint::new(Point3f::new(2.0, 1.0, 2.0), [0.8, 0.2, 0.2], SceneCategory::Vehicle),
        ]);

        let counts = scene.category_counts();
        assert_eq!(counts.get("ground"), Some(&1));
        assert_eq!(counts.get("vehicle"), Some(&2));
        assert_eq!(counts.get("building"), None);
        assert_eq!(scene.len(), 3);
    }
}
