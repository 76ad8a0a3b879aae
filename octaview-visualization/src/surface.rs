//! Hand-off of synthesized frames to drawing surfaces

use octaview_algorithms::SynthesizedView;
use octaview_core::{ProjectedPrimitive, RenderSurface};

/// Draw every primitive of `view` onto `surface` in back-to-front order.
///
/// Returns the number of primitives drawn.
pub fn render_view<S: RenderSurface + ?Sized>(view: &SynthesizedView, surface: &mut S) -> usize {
    surface.begin_frame();
    for primitive in &view.primitives {
        surface.draw_circle(primitive);
    }
    surface.end_frame();
    view.primitives.len()
}

/// A surface that keeps the primitives of the last frame
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    primitives: Vec<ProjectedPrimitive>,
    frames: usize,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[ProjectedPrimitive] {
        &self.primitives
    }

    /// Number of completed frames
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl RenderSurface for FrameRecorder {
    fn begin_frame(&mut self) {
        self.primitives.clear();
    }

    fn draw_circle(&mut self, primitive: &ProjectedPrimitive) {
        self.primitives.push(*primitive);
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}
