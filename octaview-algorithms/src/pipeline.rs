//! The full viewpoint synthesis pipeline
//!
//! `ViewSynthesizer` chains bracketing, visibility filtering and projection for
//! one camera pose. It holds no per-frame state: every call recomputes the
//! frame from the immutable scene, so the caller simply invokes it again after
//! each camera change.

use std::sync::Arc;

use octaview_core::{
    PipelineConfig, ProjectedPrimitive, ReferenceView, ReferenceViewTable, Result, Scene,
    ViewCamera,
};

use crate::interpolation::{bracket, ViewBracket};
use crate::projection::project_with;
use crate::visibility::filter_visible_with;

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedView {
    pub camera: ViewCamera,
    pub bracket: ViewBracket,
    /// Back-to-front screen primitives
    pub primitives: Vec<ProjectedPrimitive>,
}

impl SynthesizedView {
    pub fn visible_count(&self) -> usize {
        self.primitives.len()
    }
}

/// Synthesizes views of a fixed scene from arbitrary camera poses
#[derive(Debug, Clone)]
pub struct ViewSynthesizer {
    scene: Arc<Scene>,
    references: ReferenceViewTable,
    config: PipelineConfig,
}

impl ViewSynthesizer {
    /// Synthesizer over the eight default reference views and default constants
    pub fn new(scene: Arc<Scene>) -> Self {
        Self {
            scene,
            references: ReferenceViewTable::eight_views(),
            config: PipelineConfig::default(),
        }
    }

    /// Synthesizer with explicit reference views and constants; the config is validated
    pub fn with_config(
        scene: Arc<Scene>,
        references: ReferenceViewTable,
        config: PipelineConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scene,
            references,
            config,
        })
    }

    pub fn scene(&self) -> &Arc<Scene> {
        &self.scene
    }

    pub fn references(&self) -> &ReferenceViewTable {
        &self.references
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The reference view the camera currently starts its bracket from
    pub fn current_reference(&self, camera: &ViewCamera) -> &ReferenceView {
        bracket(camera.azimuth_degrees(), &self.references).lower(&self.references)
    }

    /// Run bracket, filter and project for `camera`
    pub fn synthesize(&self, camera: &ViewCamera) -> SynthesizedView {
        let azimuth = camera.azimuth_degrees();
        let bracket = bracket(azimuth, &self.references);
        let visible = filter_visible_with(&self.scene, camera, &self.config.visibility);
        let primitives = project_with(&visible, azimuth, &self.config.projection);

        log::debug!(
            "synthesized azimuth {:.1} elevation {:.1}: {} of {} points, bracket {}->{} t={:.2}",
            azimuth,
            camera.elevation_degrees(),
            primitives.len(),
            self.scene.len(),
            bracket.lower_index,
            bracket.upper_index,
            bracket.t
        );

        SynthesizedView {
            camera: *camera,
            bracket,
            primitives,
        }
    }
}
