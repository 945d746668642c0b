/// Mock render engine for unit tests (no GPU required)
///
/// Records every facade call in a shared log so tests can assert call
/// ordering (begin/render/end pairing, stale-target rules) while the
/// frame loop owns the engine. begin_frame outcomes are scriptable.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use glam::Mat4;

use crate::asset::DecodedModel;
use crate::error::{Error, Result};
use super::{EntityId, RenderEngine, SceneId, SurfaceDescriptor, TargetId};

/// One recorded facade call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    CreateScene(SceneId),
    DestroyScene(SceneId),
    SetBackgroundColor(SceneId, [f32; 4]),
    AttachModel(SceneId, usize),
    SetCameraProjection {
        fov_y_degrees: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    },
    SetCameraView(Mat4),
    SetEntityTransform(EntityId, Mat4),
    CreateTarget(TargetId, u32, u32),
    DestroyTarget(TargetId),
    BeginFrame {
        target: TargetId,
        accepted: bool,
    },
    Render,
    EndFrame,
}

pub type SharedRenderLog = Arc<Mutex<Vec<RenderCall>>>;

/// Mock render engine with a shared call log.
pub struct MockRenderEngine {
    log: SharedRenderLog,
    /// Scripted begin_frame outcomes; exhausted script always accepts
    begin_frame_script: VecDeque<Result<bool>>,
    fail_create_scene: bool,
    fail_attach_model: bool,
    next_scene: u64,
    next_entity: u64,
    next_target: u64,
    frame_open: bool,
}

impl MockRenderEngine {
    pub fn new() -> (Self, SharedRenderLog) {
        let log = SharedRenderLog::default();
        (
            Self {
                log: log.clone(),
                begin_frame_script: VecDeque::new(),
                fail_create_scene: false,
                fail_attach_model: false,
                next_scene: 0,
                next_entity: 0,
                next_target: 0,
                frame_open: false,
            },
            log,
        )
    }

    /// Queue the next begin_frame outcomes (front first).
    pub fn script_begin_frame(&mut self, outcomes: Vec<Result<bool>>) {
        self.begin_frame_script = outcomes.into();
    }

    /// Make create_scene fail (fatal startup path).
    pub fn fail_create_scene(&mut self) {
        self.fail_create_scene = true;
    }

    /// Make attach_model fail (asset degradation path).
    pub fn fail_attach_model(&mut self) {
        self.fail_attach_model = true;
    }

    fn record(&self, call: RenderCall) {
        self.log.lock().unwrap().push(call);
    }
}

impl RenderEngine for MockRenderEngine {
    fn create_scene(&mut self) -> Result<SceneId> {
        if self.fail_create_scene {
            return Err(Error::InitializationFailed(
                "mock render engine failed to initialize".to_string(),
            ));
        }
        self.next_scene += 1;
        let scene = SceneId(self.next_scene);
        self.record(RenderCall::CreateScene(scene));
        Ok(scene)
    }

    fn destroy_scene(&mut self, scene: SceneId) {
        self.record(RenderCall::DestroyScene(scene));
    }

    fn set_background_color(&mut self, scene: SceneId, color: [f32; 4]) -> Result<()> {
        self.record(RenderCall::SetBackgroundColor(scene, color));
        Ok(())
    }

    fn attach_model(&mut self, scene: SceneId, model: &DecodedModel) -> Result<Vec<EntityId>> {
        if self.fail_attach_model {
            return Err(Error::AssetDecode(
                "mock attach_model failure".to_string(),
            ));
        }
        self.record(RenderCall::AttachModel(scene, model.mesh_count()));
        let mut entities = Vec::with_capacity(model.mesh_count());
        for _ in 0..model.mesh_count() {
            self.next_entity += 1;
            entities.push(EntityId(self.next_entity));
        }
        Ok(entities)
    }

    fn set_camera_projection(&mut self, fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32) {
        self.record(RenderCall::SetCameraProjection {
            fov_y_degrees,
            aspect_ratio,
            near,
            far,
        });
    }

    fn set_camera_view(&mut self, view: Mat4) {
        self.record(RenderCall::SetCameraView(view));
    }

    fn set_entity_transform(&mut self, entity: EntityId, transform: Mat4) -> Result<()> {
        self.record(RenderCall::SetEntityTransform(entity, transform));
        Ok(())
    }

    fn create_presentation_target(&mut self, surface: &SurfaceDescriptor) -> Result<TargetId> {
        self.next_target += 1;
        let target = TargetId(self.next_target);
        self.record(RenderCall::CreateTarget(target, surface.width, surface.height));
        Ok(target)
    }

    fn destroy_presentation_target(&mut self, target: TargetId) {
        self.record(RenderCall::DestroyTarget(target));
    }

    fn begin_frame(&mut self, target: TargetId, _timestamp_nanos: i64) -> Result<bool> {
        let outcome = self.begin_frame_script.pop_front().unwrap_or(Ok(true));
        let accepted = matches!(outcome, Ok(true));
        self.record(RenderCall::BeginFrame { target, accepted });
        if accepted {
            self.frame_open = true;
        }
        outcome
    }

    fn render(&mut self) -> Result<()> {
        if !self.frame_open {
            return Err(Error::Backend(
                "render() without successful begin_frame".to_string(),
            ));
        }
        self.record(RenderCall::Render);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        if !self.frame_open {
            return Err(Error::Backend(
                "end_frame() without successful begin_frame".to_string(),
            ));
        }
        self.frame_open = false;
        self.record(RenderCall::EndFrame);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_render_tests.rs"]
mod tests;
