//! Orbiting view camera described by azimuth and elevation

use crate::point::Vector3f;
use serde::{Deserialize, Serialize};

/// Lowest allowed elevation in degrees
pub const MIN_ELEVATION_DEGREES: f32 = -30.0;
/// Highest allowed elevation in degrees
pub const MAX_ELEVATION_DEGREES: f32 = 60.0;
/// Azimuth the camera starts at
pub const DEFAULT_AZIMUTH_DEGREES: f32 = 0.0;
/// Elevation the camera starts at
pub const DEFAULT_ELEVATION_DEGREES: f32 = 10.0;

/// The virtual camera orbiting the scene origin.
///
/// Azimuth is kept in `[0, 360)` and elevation in
/// `[MIN_ELEVATION_DEGREES, MAX_ELEVATION_DEGREES]`; every constructor and
/// mutator normalises its input so the pipeline can treat the camera as
/// already validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawViewCamera")]
pub struct ViewCamera {
    azimuth_degrees: f32,
    elevation_degrees: f32,
}

impl ViewCamera {
    /// Create a camera, wrapping azimuth and clamping elevation
    pub fn new(azimuth_degrees: f32, elevation_degrees: f32) -> Self {
        Self {
            azimuth_degrees: normalize_azimuth(azimuth_degrees),
            elevation_degrees: clamp_elevation(elevation_degrees),
        }
    }

    pub fn azimuth_degrees(&self) -> f32 {
        self.azimuth_degrees
    }

    pub fn elevation_degrees(&self) -> f32 {
        self.elevation_degrees
    }

    pub fn set_azimuth(&mut self, degrees: f32) {
        self.azimuth_degrees = normalize_azimuth(degrees);
    }

    pub fn set_elevation(&mut self, degrees: f32) {
        self.elevation_degrees = clamp_elevation(degrees);
    }

    /// Rotate the camera around the vertical axis by `delta` degrees
    pub fn advance_azimuth(&mut self, delta: f32) {
        self.set_azimuth(self.azimuth_degrees + delta);
    }

    /// Unit direction the camera looks along.
    ///
    /// `(cos(az) cos(el), sin(az) cos(el), sin(el))`
    pub fn forward(&self) -> Vector3f {
        let azimuth = self.azimuth_degrees.to_radians();
        let elevation = self.elevation_degrees.to_radians();
        Vector3f::new(
            azimuth.cos() * elevation.cos(),
            azimuth.sin() * elevation.cos(),
            elevation.sin(),
        )
    }
}

/// Serialized form of a camera, normalised on the way in
#[derive(Deserialize)]
struct RawViewCamera {
    azimuth_degrees: f32,
    elevation_degrees: f32,
}

impl From<RawViewCamera> for ViewCamera {
    fn from(raw: RawViewCamera) -> Self {
        Self::new(raw.azimuth_degrees, raw.elevation_degrees)
    }
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::new(DEFAULT_AZIMUTH_DEGREES, DEFAULT_ELEVATION_DEGREES)
    }
}

/// Reduce an azimuth to `[0, 360)`.
///
/// Non-finite input maps to 0. `rem_euclid` can round tiny negative values up
/// to exactly 360, which is folded back to 0.
pub fn normalize_azimuth(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn clamp_elevation(degrees: f32) -> f32 {
    if degrees.is_nan() {
        return DEFAULT_ELEVATION_DEGREES;
    }
    degrees.clamp(MIN_ELEVATION_DEGREES, MAX_ELEVATION_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_pose() {
        let camera = ViewCamera::default();
        assert_eq!(camera.azimuth_degrees(), 0.0);
        assert_eq!(camera.elevation_degrees(), 10.0);
    }

    #[test]
    fn test_azimuth_wraps() {
        assert_eq!(ViewCamera::new(360.0, 0.0).azimuth_degrees(), 0.0);
        assert_relative_eq!(ViewCamera::new(-90.0, 0.0).azimuth_degrees(), 270.0);
        assert_relative_eq!(ViewCamera::new(725.0, 0.0).azimuth_degrees(), 5.0, epsilon = 1e-4);
        assert_eq!(normalize_azimuth(f32::NAN), 0.0);
        assert_eq!(normalize_azimuth(f32::INFINITY), 0.0);
        assert!(normalize_azimuth(-1e-7) < 360.0);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let camera: ViewCamera =
            serde_json::from_str(r#"{"azimuth_degrees": 725.0, "elevation_degrees": 500.0}"#)
                .unwrap();
        assert_relative_eq!(camera.azimuth_degrees(), 5.0, epsilon = 1e-4);
        assert_eq!(camera.elevation_degrees(), 60.0);

        let camera: ViewCamera =
            serde_json::from_str(r#"{"azimuth_degrees": -90.0, "elevation_degrees": -45.0}"#)
                .unwrap();
        assert_relative_eq!(camera.azimuth_degrees(), 270.0);
        assert_eq!(camera.elevation_degrees(), -30.0);

        let original = ViewCamera::new(135.0, 25.0);
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(serde_json::from_str::<ViewCamera>(&json).unwrap(), original);
    }

    #[test]
    fn test_elevation_clamps() {
        assert_eq!(ViewCamera::new(0.0, 90.0).elevation_degrees(), 60.0);
        assert_eq!(ViewCamera::new(0.0, -45.0).elevation_degrees(), -30.0);
        assert_eq!(ViewCamera::new(0.0, f32::NAN).elevation_degrees(), 10.0);
    }

    #[test]
    fn test_advance_wraps_past_full_turn() {
        let mut camera = ViewCamera::new(358.0, 10.0);
        camera.advance_azimuth(2.0);
        assert_eq!(camera.azimuth_degrees(), 0.0);
        camera.advance_azimuth(2.0);
        assert_relative_eq!(camera.azimuth_degrees(), 2.0);
    }

    #[test]
    fn test_forward_is_unit_length() {
        for (az, el) in [(0.0, 0.0), (45.0, 10.0), (200.0, -30.0), (315.0, 60.0)] {
            let forward = ViewCamera::new(az, el).forward();
            assert_relative_eq!(forward.norm(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_forward_axes() {
        let forward = ViewCamera::new(0.0, 0.0).forward();
        assert_relative_eq!(forward.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(forward.y, 0.0, epsilon = 1e-6);

        let forward = ViewCamera::new(90.0, 0.0).forward();
        assert_relative_eq!(forward.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(forward.y, 1.0, epsilon = 1e-6);
    }
}
