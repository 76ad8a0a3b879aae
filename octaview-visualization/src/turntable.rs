//! Periodic auto-rotation
//!
//! The turntable is the only time-driven part of the system. It advances the
//! camera azimuth by a fixed step on a fixed period and publishes the new pose
//! through a `watch` channel; whoever listens re-runs the pipeline. Stopping the
//! turntable just ends future ticks, since each synthesis call finishes
//! synchronously.

use std::sync::Arc;
use std::time::Duration;

use octaview_core::ViewCamera;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Cadence of the auto-rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurntableConfig {
    pub period: Duration,
    pub step_degrees: f32,
}

impl Default for TurntableConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(50),
            step_degrees: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Turntable {
    config: TurntableConfig,
}

impl Turntable {
    pub fn new(config: TurntableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TurntableConfig {
        &self.config
    }

    /// Apply a single tick to `camera`
    pub fn advance(&self, camera: &mut ViewCamera) {
        camera.advance_azimuth(self.config.step_degrees);
    }

    /// Start rotating the camera held by `camera`.
    ///
    /// Must be called from within a Tokio runtime. The first step happens one
    /// period after the call.
    pub fn start(&self, camera: Arc<watch::Sender<ViewCamera>>) -> TurntableHandle {
        let turntable = *self;
        log::debug!(
            "turntable started: {:.1} degrees every {:?}",
            turntable.config.step_degrees,
            turntable.config.period
        );

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(turntable.config.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                camera.send_modify(|pose| turntable.advance(pose));
            }
        });

        TurntableHandle { task: Some(task) }
    }
}

/// Running auto-rotation; dropping the handle stops it as well
#[derive(Debug)]
pub struct TurntableHandle {
    task: Option<JoinHandle<()>>,
}

impl TurntableHandle {
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop issuing camera updates. Calling it again has no effect.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("turntable stopped");
        }
    }
}

impl Drop for TurntableHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_wraps() {
        let turntable = Turntable::default();
        let mut camera = ViewCamera::new(358.0, 10.0);
        turntable.advance(&mut camera);
        assert_eq!(camera.azimuth_degrees(), 0.0);
        turntable.advance(&mut camera);
        assert_relative_eq!(camera.azimuth_degrees(), 2.0);
        assert_eq!(camera.elevation_degrees(), 10.0);
    }

    #[test]
    fn test_full_turn_returns_home() {
        let turntable = Turntable::default();
        let mut camera = ViewCamera::default();
        for _ in 0..180 {
            turntable.advance(&mut camera);
        }
        assert!(camera.azimuth_degrees() < 1e-3 || camera.azimuth_degrees() > 360.0 - 1e-3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rotates_until_stopped() {
        let (tx, rx) = watch::channel(ViewCamera::default());
        let mut handle = Turntable::default().start(Arc::new(tx));
        assert!(handle.is_running());

        tokio::time::sleep(Duration::from_millis(175)).await;
        let advanced = rx.borrow().azimuth_degrees();
        assert!(advanced > 0.0);
        assert_eq!(advanced % 2.0, 0.0);

        handle.stop();
        tokio::task::yield_now().await;
        assert!(!handle.is_running());
        let frozen = rx.borrow().azimuth_degrees();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(rx.borrow().azimuth_degrees(), frozen);

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_rotation() {
        let (tx, rx) = watch::channel(ViewCamera::default());
        let handle = Turntable::default().start(Arc::new(tx));
        tokio::time::sleep(Duration::from_millis(120)).await;
        drop(handle);
        tokio::task::yield_now().await;

        let frozen = rx.borrow().azimuth_degrees();
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(rx.borrow().azimuth_degrees(), frozen);
    }
}
