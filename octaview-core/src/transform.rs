//! Camera-relative rotation about the vertical axis

use crate::point::Point3f;
use nalgebra::{Rotation3, Vector3};

/// Rotation that brings world points into the frame of a camera at a given azimuth.
///
/// The world is rotated by `-azimuth` about z, so
/// `x' = x cos(az) + y sin(az)` and `y' = -x sin(az) + y cos(az)`; z is unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRotation {
    rotation: Rotation3<f32>,
}

impl ViewRotation {
    pub fn from_azimuth_degrees(azimuth_degrees: f32) -> Self {
        Self {
            rotation: Rotation3::from_axis_angle(&Vector3::z_axis(), -azimuth_degrees.to_radians()),
        }
    }

    pub fn apply(&self, point: &Point3f) -> Point3f {
        self.rotation * point
    }
}
