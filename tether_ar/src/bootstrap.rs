//! Scene Bootstrap
//!
//! One-time scene setup run when a surface is first created: scene
//! container, background color, placeholder camera projection (real
//! aspect ratio arrives with the first resize), and the kicked-off
//! asynchronous model decode.

use crate::asset::{ModelHandoff, ModelSource};
use crate::error::Result;
use crate::render::{RenderEngine, SceneId};
use crate::tether_info;

const SOURCE: &str = "tether::SceneBootstrap";

/// Vertical field of view of the placement camera, in degrees.
pub const DEFAULT_FOV_Y_DEGREES: f32 = 45.0;

/// Near clip plane distance.
pub const DEFAULT_NEAR_PLANE: f32 = 0.1;

/// Far clip plane distance.
pub const DEFAULT_FAR_PLANE: f32 = 100.0;

/// Scene background (skybox) color, RGBA.
pub const BACKGROUND_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];

/// Result of scene bootstrap.
pub struct SceneSetup {
    /// The created scene container
    pub scene: SceneId,
    /// In-flight model decode, polled by the frame loop each tick
    pub handoff: Option<ModelHandoff>,
}

/// Run one-time scene setup against the render engine.
///
/// Scene creation failure is fatal (the engine failed to initialize)
/// and propagates. Model decoding is only started here; decode failure
/// surfaces later through the handoff and degrades to a background-only
/// scene.
pub fn bootstrap_scene(
    render: &mut dyn RenderEngine,
    model: Option<&ModelSource>,
) -> Result<SceneSetup> {
    let scene = render.create_scene()?;
    render.set_background_color(scene, BACKGROUND_COLOR)?;

    // Placeholder projection; the first resize supplies the real aspect ratio
    render.set_camera_projection(
        DEFAULT_FOV_Y_DEGREES,
        1.0,
        DEFAULT_NEAR_PLANE,
        DEFAULT_FAR_PLANE,
    );

    let handoff = model.map(ModelHandoff::spawn);
    tether_info!(
        SOURCE,
        "Scene {:?} bootstrapped (model decode {})",
        scene,
        if handoff.is_some() { "started" } else { "skipped" }
    );

    Ok(SceneSetup { scene, handoff })
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;
