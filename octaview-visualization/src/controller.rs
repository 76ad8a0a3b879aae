//! Camera controller for slider-style input
//!
//! Owns the mutable camera pose. Input handlers and the turntable write to it;
//! subscribers read the latest pose and re-run the synthesis pipeline.

use std::sync::Arc;

use octaview_core::{ViewCamera, MAX_ELEVATION_DEGREES, MIN_ELEVATION_DEGREES};
use tokio::sync::watch;

use crate::turntable::{Turntable, TurntableHandle};

/// Input range of the azimuth slider; 360 wraps to 0
pub const AZIMUTH_INPUT_RANGE: (f32, f32) = (0.0, 360.0);
/// Input range of the elevation slider
pub const ELEVATION_INPUT_RANGE: (f32, f32) = (MIN_ELEVATION_DEGREES, MAX_ELEVATION_DEGREES);

/// Mediates between user input, auto-rotation and camera subscribers
#[derive(Debug)]
pub struct CameraController {
    camera: Arc<watch::Sender<ViewCamera>>,
    turntable: Turntable,
    rotation: Option<TurntableHandle>,
}

impl CameraController {
    pub fn new(turntable: Turntable) -> Self {
        let (camera, _) = watch::channel(ViewCamera::default());
        Self {
            camera: Arc::new(camera),
            turntable,
            rotation: None,
        }
    }

    /// Current pose
    pub fn camera(&self) -> ViewCamera {
        *self.camera.borrow()
    }

    /// Receiver notified on every pose change
    pub fn subscribe(&self) -> watch::Receiver<ViewCamera> {
        self.camera.subscribe()
    }

    /// Handle an azimuth slider value; out-of-range input is clamped to the slider range first
    pub fn on_azimuth_input(&self, degrees: f32) {
        let (min, max) = AZIMUTH_INPUT_RANGE;
        let degrees = if degrees.is_nan() { min } else { degrees.clamp(min, max) };
        self.camera.send_modify(|camera| camera.set_azimuth(degrees));
    }

    /// Handle an elevation slider value
    pub fn on_elevation_input(&self, degrees: f32) {
        self.camera.send_modify(|camera| camera.set_elevation(degrees));
    }

    pub fn is_auto_rotating(&self) -> bool {
        self.rotation.as_ref().is_some_and(TurntableHandle::is_running)
    }

    /// Start auto-rotation if it is not already running. Requires a Tokio runtime.
    pub fn start_auto_rotate(&mut self) {
        if !self.is_auto_rotating() {
            self.rotation = Some(self.turntable.start(Arc::clone(&self.camera)));
        }
    }

    pub fn stop_auto_rotate(&mut self) {
        if let Some(mut handle) = self.rotation.take() {
            handle.stop();
        }
    }

    /// Flip auto-rotation and report whether it is now running
    pub fn toggle_auto_rotate(&mut self) -> bool {
        if self.is_auto_rotating() {
            self.stop_auto_rotate();
        } else {
            self.start_auto_rotate();
        }
        self.is_auto_rotating()
    }

    /// Stop rotating and return to the default pose
    pub fn reset(&mut self) {
        self.stop_auto_rotate();
        self.camera.send_replace(ViewCamera::default());
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(Turntable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::time::Duration;

    #[test]
    fn test_slider_input() {
        let controller = CameraController::default();
        controller.on_azimuth_input(135.0);
        controller.on_elevation_input(45.0);
        assert_relative_eq!(controller.camera().azimuth_degrees(), 135.0);
        assert_relative_eq!(controller.camera().elevation_degrees(), 45.0);
    }

    #[test]
    fn test_slider_ranges() {
        let controller = CameraController::default();
        controller.on_azimuth_input(360.0);
        assert_eq!(controller.camera().azimuth_degrees(), 0.0);
        controller.on_azimuth_input(400.0);
        assert_eq!(controller.camera().azimuth_degrees(), 0.0);
        controller.on_azimuth_input(-5.0);
        assert_eq!(controller.camera().azimuth_degrees(), 0.0);

        controller.on_elevation_input(75.0);
        assert_eq!(controller.camera().elevation_degrees(), 60.0);
        controller.on_elevation_input(-75.0);
        assert_eq!(controller.camera().elevation_degrees(), -30.0);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let controller = CameraController::default();
        let mut rx = controller.subscribe();
        assert!(!rx.has_changed().unwrap());
        controller.on_azimuth_input(90.0);
        assert!(rx.has_changed().unwrap());
        assert_relative_eq!(rx.borrow_and_update().azimuth_degrees(), 90.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_and_reset() {
        let mut controller = CameraController::default();
        controller.on_elevation_input(30.0);

        assert!(controller.toggle_auto_rotate());
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(controller.camera().azimuth_degrees() > 0.0);

        controller.reset();
        assert!(!controller.is_auto_rotating());
        assert_eq!(controller.camera(), ViewCamera::default());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(controller.camera(), ViewCamera::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_twice_stops() {
        let mut controller = CameraController::default();
        assert!(controller.toggle_auto_rotate());
        assert!(!controller.toggle_auto_rotate());
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(controller.camera().azimuth_degrees(), 0.0);
    }
}
