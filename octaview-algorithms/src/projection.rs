//! Projection of visible points into screen space
//!
//! Points are rotated into the camera frame, scaled by a perspective-like
//! falloff and sorted back-to-front so a painter's-algorithm surface can draw
//! them in list order.

use std::cmp::Ordering;

use octaview_core::{ProjectedPrimitive, ProjectionConfig, ScenePoint, ViewRotation};

/// Project `points` for a camera at `azimuth_degrees` with the default constants
///
/// # Example
/// ```rust
/// use octaview_core::{Point3f, SceneCategory, ScenePoint};
/// use octaview_algorithms::project;
///
/// let points = vec![
///     ScenePoint::new(Point3f::new(1.0, 0.0, 0.0), [0.2, 0.8, 0.3], SceneCategory::Ground),
///     ScenePoint::new(Point3f::new(10.0, 0.0, 0.0), [0.6, 0.6, 0.7], SceneCategory::Building),
/// ];
///
/// let primitives = project(&points, 0.0);
/// assert_eq!(primitives.len(), 2);
/// assert!(primitives[0].distance >= primitives[1].distance);
/// ```
pub fn project(points: &[ScenePoint], azimuth_degrees: f32) -> Vec<ProjectedPrimitive> {
    project_with(points, azimuth_degrees, &ProjectionConfig::default())
}

/// Project `points` under `config`, sorted by descending distance.
///
/// Ties keep their input order.
pub fn project_with(
    points: &[ScenePoint],
    azimuth_degrees: f32,
    config: &ProjectionConfig,
) -> Vec<ProjectedPrimitive> {
    let rotation = ViewRotation::from_azimuth_degrees(azimuth_degrees);

    let mut primitives: Vec<ProjectedPrimitive> = points
        .iter()
        .map(|point| project_point(point, &rotation, config))
        .collect();

    primitives.sort_by(|a, b| b.distance.partial_cmp(&a.distance).unwrap_or(Ordering::Equal));
    primitives
}

fn project_point(
    point: &ScenePoint,
    rotation: &ViewRotation,
    config: &ProjectionConfig,
) -> ProjectedPrimitive {
    let rotated = rotation.apply(&point.position);
    let distance = rotated.coords.norm();
    let scale = config.scale_numerator / (distance + config.scale_offset);

    // Screen x follows the camera-relative y axis; screen y grows downwards
    let screen_x = config.origin_x + rotated.y * scale;
    let screen_y = config.origin_y - rotated.z * scale;

    ProjectedPrimitive {
        screen_x,
        screen_y,
        size: (scale * 2.0).max(config.min_size),
        color: point.color,
        opacity: opacity_for(distance, config.opacity_distance),
        distance,
        category: point.category,
    }
}

/// `min(1, fade / distance)`, fully opaque at zero distance
fn opacity_for(distance: f32, fade: f32) -> f32 {
    if distance <= f32::EPSILON {
        return 1.0;
    }
    let opacity = (fade / distance).min(1.0);
    // Underflow at extreme distances must not make a primitive invisible
    opacity.max(f32::MIN_POSITIVE)
}
