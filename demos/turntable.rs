//! Auto-rotate the camera and synthesize a frame on every step

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use octaview_algorithms::{SceneStore, ViewSynthesizer};
use octaview_visualization::{CameraController, Turntable, TurntableConfig, ViewStatus};

#[derive(Parser, Debug)]
#[command(about = "Run the turntable for a number of frames")]
struct Args {
    /// Number of frames to synthesize before stopping
    #[arg(long, default_value_t = 180)]
    frames: usize,

    /// Milliseconds between steps
    #[arg(long, default_value_t = 50)]
    period_ms: u64,

    /// Degrees per step
    #[arg(long, default_value_t = 2.0)]
    step: f32,

    /// Camera elevation in degrees
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    elevation: f32,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let store = SceneStore::new(args.seed);
    let synthesizer = ViewSynthesizer::new(Arc::clone(store.scene()));

    let turntable = Turntable::new(TurntableConfig {
        period: Duration::from_millis(args.period_ms.max(1)),
        step_degrees: args.step,
    });
    let mut controller = CameraController::new(turntable);
    controller.on_elevation_input(args.elevation);

    let mut poses = controller.subscribe();
    controller.start_auto_rotate();

    let mut last_reference = None;
    for frame in 0..args.frames {
        poses.changed().await?;
        let camera = *poses.borrow_and_update();
        let view = synthesizer.synthesize(&camera);
        let status = ViewStatus::new(&view, synthesizer.references());

        if last_reference != Some(view.bracket.lower_index) {
            log::info!("frame {frame}: now past reference view {}", status.reference_label);
            last_reference = Some(view.bracket.lower_index);
        }
        log::debug!(
            "frame {frame}: azimuth {:.1}, t {:.2}, {} primitives",
            status.azimuth_degrees,
            status.interpolation_factor,
            status.visible_points
        );
    }

    controller.stop_auto_rotate();
    let view = synthesizer.synthesize(&controller.camera());
    println!("{}", ViewStatus::new(&view, synthesizer.references()));
    Ok(())
}
