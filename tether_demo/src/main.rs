//! Desktop demo: the full frame loop over the simulated backends.
//!
//! Opens a window, "detects" a horizontal plane after a short warmup,
//! and anchors a two-mesh pawn model to it. Everything observable
//! happens in the log output.

use std::process::ExitCode;
use std::sync::Arc;

use tether_ar::asset::ModelSource;
use tether_ar::tether::{FrameLoop, ShellConfig};
use tether_ar_backend_sim::{SimModelDecoder, SimTrackingEngine, HeadlessRenderEngine};

const PAWN_MANIFEST: &[u8] = b"model pawn\nmesh body\nmesh base\n";

fn main() -> ExitCode {
    let render = HeadlessRenderEngine::new();
    let tracking = SimTrackingEngine::horizontal_plane_after(90);
    let model = ModelSource::new(Arc::new(SimModelDecoder), PAWN_MANIFEST);

    let frame_loop = FrameLoop::new(Box::new(render), Box::new(tracking), Some(model));
    let config = ShellConfig::new().title("Tether AR Demo").size(1280, 720);

    match tether_ar::tether::run(frame_loop, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tether_demo: {}", e);
            ExitCode::FAILURE
        }
    }
}
