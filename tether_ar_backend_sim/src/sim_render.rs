//! Headless render backend.
//!
//! Implements the render facade with real resource lifetimes but no
//! GPU: scenes and entities live in slot maps, presentation targets are
//! generation-counted so a begin_frame against a stale target is
//! rejected the way a real swapchain rejects an outdated surface.

use glam::Mat4;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, Key, KeyData, SlotMap};

use tether_ar::asset::DecodedModel;
use tether_ar::render::{
    EntityId, RenderEngine, SceneId, SurfaceDescriptor, TargetId,
};
use tether_ar::tether::{Error, Result};

new_key_type! {
    /// Stable key for a simulated scene entity.
    struct EntityKey;
}

struct EntityRecord {
    transform: Mat4,
}

struct SceneRecord {
    background_color: [f32; 4],
    entities: Vec<EntityId>,
}

struct TargetRecord {
    width: u32,
    height: u32,
    /// Targets from older generations are stale and refuse frames
    generation: u64,
}

/// Render engine that records state instead of drawing.
pub struct HeadlessRenderEngine {
    scenes: FxHashMap<u64, SceneRecord>,
    entities: SlotMap<EntityKey, EntityRecord>,
    targets: FxHashMap<u64, TargetRecord>,
    next_scene: u64,
    next_target: u64,
    target_generation: u64,
    camera_projection: Option<(f32, f32, f32, f32)>,
    camera_view: Mat4,
    frame_open: bool,
    frames_rendered: u64,
}

impl HeadlessRenderEngine {
    pub fn new() -> Self {
        Self {
            scenes: FxHashMap::default(),
            entities: SlotMap::with_key(),
            targets: FxHashMap::default(),
            next_scene: 0,
            next_target: 0,
            target_generation: 0,
            camera_projection: None,
            camera_view: Mat4::IDENTITY,
            frame_open: false,
            frames_rendered: 0,
        }
    }

    // ===== TEST/DEMO OBSERVATION =====

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn camera_view(&self) -> Mat4 {
        self.camera_view
    }

    pub fn camera_projection(&self) -> Option<(f32, f32, f32, f32)> {
        self.camera_projection
    }

    /// Current world transform of an entity, if it is alive.
    pub fn entity_transform(&self, entity: EntityId) -> Option<Mat4> {
        self.entities
            .get(EntityKey::from(KeyData::from_ffi(entity.0)))
            .map(|record| record.transform)
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn scene_background(&self, scene: SceneId) -> Option<[f32; 4]> {
        self.scenes.get(&scene.0).map(|record| record.background_color)
    }

    pub fn scene_entities(&self, scene: SceneId) -> Vec<EntityId> {
        self.scenes
            .get(&scene.0)
            .map(|record| record.entities.clone())
            .unwrap_or_default()
    }
}

impl Default for HeadlessRenderEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderEngine for HeadlessRenderEngine {
    fn create_scene(&mut self) -> Result<SceneId> {
        self.next_scene += 1;
        let scene = SceneId(self.next_scene);
        self.scenes.insert(
            scene.0,
            SceneRecord {
                background_color: [0.0, 0.0, 0.0, 1.0],
                entities: Vec::new(),
            },
        );
        Ok(scene)
    }

    fn destroy_scene(&mut self, scene: SceneId) {
        if let Some(record) = self.scenes.remove(&scene.0) {
            for entity in record.entities {
                self.entities.remove(EntityKey::from(KeyData::from_ffi(entity.0)));
            }
        }
    }

    fn set_background_color(&mut self, scene: SceneId, color: [f32; 4]) -> Result<()> {
        let record = self
            .scenes
            .get_mut(&scene.0)
            .ok_or_else(|| Error::Backend(format!("Unknown scene {:?}", scene)))?;
        record.background_color = color;
        Ok(())
    }

    fn attach_model(&mut self, scene: SceneId, model: &DecodedModel) -> Result<Vec<EntityId>> {
        if !self.scenes.contains_key(&scene.0) {
            return Err(Error::Backend(format!("Unknown scene {:?}", scene)));
        }
        let mut created = Vec::with_capacity(model.mesh_count());
        for _ in 0..model.mesh_count() {
            let key = self.entities.insert(EntityRecord {
                transform: Mat4::IDENTITY,
            });
            created.push(EntityId(key.data().as_ffi()));
        }
        if let Some(record) = self.scenes.get_mut(&scene.0) {
            record.entities.extend_from_slice(&created);
        }
        Ok(created)
    }

    fn set_camera_projection(&mut self, fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32) {
        self.camera_projection = Some((fov_y_degrees, aspect_ratio, near, far));
    }

    fn set_camera_view(&mut self, view: Mat4) {
        self.camera_view = view;
    }

    fn set_entity_transform(&mut self, entity: EntityId, transform: Mat4) -> Result<()> {
        let record = self
            .entities
            .get_mut(EntityKey::from(KeyData::from_ffi(entity.0)))
            .ok_or_else(|| Error::Backend(format!("Unknown entity {:?}", entity)))?;
        record.transform = transform;
        Ok(())
    }

    fn create_presentation_target(&mut self, surface: &SurfaceDescriptor) -> Result<TargetId> {
        if surface.width == 0 || surface.height == 0 {
            return Err(Error::Backend(format!(
                "Zero-sized presentation target for surface {:?}",
                surface.handle
            )));
        }
        self.next_target += 1;
        self.target_generation += 1;
        self.targets.insert(
            self.next_target,
            TargetRecord {
                width: surface.width,
                height: surface.height,
                generation: self.target_generation,
            },
        );
        Ok(TargetId(self.next_target))
    }

    fn destroy_presentation_target(&mut self, target: TargetId) {
        self.targets.remove(&target.0);
    }

    fn begin_frame(&mut self, target: TargetId, _timestamp_nanos: i64) -> Result<bool> {
        if self.frame_open {
            return Err(Error::Backend(
                "begin_frame while a frame is already open".to_string(),
            ));
        }
        let Some(record) = self.targets.get(&target.0) else {
            // Destroyed target: the frame is skipped, not an error
            return Ok(false);
        };
        if record.generation != self.target_generation {
            return Ok(false);
        }
        if record.width == 0 || record.height == 0 {
            return Ok(false);
        }
        self.frame_open = true;
        Ok(true)
    }

    fn render(&mut self) -> Result<()> {
        if !self.frame_open {
            return Err(Error::Backend(
                "render() without an open frame".to_string(),
            ));
        }
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        if !self.frame_open {
            return Err(Error::Backend(
                "end_frame() without an open frame".to_string(),
            ));
        }
        self.frame_open = false;
        self.frames_rendered += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sim_render_tests.rs"]
mod tests;
