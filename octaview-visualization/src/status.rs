//! Human-readable frame status

use std::fmt;

use octaview_algorithms::SynthesizedView;
use octaview_core::ReferenceViewTable;

/// The info panel shown next to a synthesized frame
#[derive(Debug, Clone, PartialEq)]
pub struct ViewStatus {
    pub azimuth_degrees: f32,
    pub elevation_degrees: f32,
    pub reference_label: String,
    pub reference_angle: u16,
    pub interpolation_factor: f32,
    pub visible_points: usize,
}

impl ViewStatus {
    pub fn new(view: &SynthesizedView, references: &ReferenceViewTable) -> Self {
        let reference = view.bracket.lower(references);
        Self {
            azimuth_degrees: view.camera.azimuth_degrees(),
            elevation_degrees: view.camera.elevation_degrees(),
            reference_label: reference.label.clone(),
            reference_angle: reference.angle_degrees,
            interpolation_factor: view.bracket.t,
            visible_points: view.visible_count(),
        }
    }
}

impl fmt::Display for ViewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "azimuth: {:.1}°", self.azimuth_degrees)?;
        writeln!(f, "elevation: {:.1}°", self.elevation_degrees)?;
        writeln!(f, "reference: {} ({}°)", self.reference_label, self.reference_angle)?;
        writeln!(f, "interpolation: {:.2}", self.interpolation_factor)?;
        write!(f, "visible points: {}", self.visible_points)
    }
}
