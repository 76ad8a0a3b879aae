//! Visibility filtering
//!
//! A coarse "facing-ish" cone test rather than a frustum: a point survives when
//! it lies inside the absolute far plane and its direction from the origin is
//! within roughly 120 degrees of the camera forward direction.

use octaview_core::{Point3f, Positioned, Scene, ScenePoint, Vector3f, ViewCamera, VisibilityConfig};

/// Test a single position against the visibility cone.
///
/// `forward` must be a unit vector. A point at the origin has no direction and
/// is always visible.
pub fn is_visible(position: &Point3f, forward: &Vector3f, config: &VisibilityConfig) -> bool {
    let distance = position.coords.norm();
    if distance >= config.far_plane {
        return false;
    }
    if distance <= f32::EPSILON {
        return true;
    }

    let direction = position.coords / distance;
    forward.dot(&direction) > config.min_facing_dot
}

/// Points of `scene` visible from `camera` using the default cone parameters.
///
/// Output keeps scene order.
///
/// # Example
/// ```rust
/// use octaview_core::{Point3f, Scene, SceneCategory, ScenePoint, ViewCamera};
/// use octaview_algorithms::filter_visible;
///
/// let scene = Scene::from_points(vec![
///     ScenePoint::new(Point3f::new(5.0, 0.0, 0.0), [0.2, 0.8, 0.3], SceneCategory::Ground),
///     ScenePoint::new(Point3f::new(-5.0, 0.0, 0.0), [0.2, 0.8, 0.3], SceneCategory::Ground),
/// ]);
///
/// let visible = filter_visible(&scene, &ViewCamera::new(0.0, 0.0));
/// assert_eq!(visible.len(), 1);
/// ```
pub fn filter_visible(scene: &Scene, camera: &ViewCamera) -> Vec<ScenePoint> {
    filter_visible_with(scene, camera, &VisibilityConfig::default())
}

/// Points of `scene` visible from `camera` under `config`
pub fn filter_visible_with(
    scene: &Scene,
    camera: &ViewCamera,
    config: &VisibilityConfig,
) -> Vec<ScenePoint> {
    filter_points(scene.points(), camera, config)
}

/// Visibility test over any slice of positioned points
pub fn filter_points<T>(points: &[T], camera: &ViewCamera, config: &VisibilityConfig) -> Vec<T>
where
    T: Positioned + Copy,
{
    let forward = camera.forward();
    let visible: Vec<T> = points
        .iter()
        .filter(|point| is_visible(&point.position(), &forward, config))
        .copied()
        .collect();

    log::trace!(
        "visibility: {} of {} points from azimuth {:.1}, elevation {:.1}",
        visible.len(),
        points.len(),
        camera.azimuth_degrees(),
        camera.elevation_degrees()
    );
    visible
}
