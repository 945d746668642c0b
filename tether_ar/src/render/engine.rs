/// RenderEngine trait - the rendering facade driven by the frame loop.
///
/// All handles are opaque ids owned by the backend. The frame loop never
/// holds engine internals, only ids, so backends are free to recycle
/// resources as long as ids stay unique within a session.

use glam::Mat4;

use crate::asset::DecodedModel;
use crate::error::Result;

// ============================================================================
// Opaque handles
// ============================================================================

/// Handle to a scene container owned by the render engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(pub u64);

/// Handle to a renderable entity in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

/// Handle to a presentation target bound to one on-screen surface.
///
/// Targets are generation-counted: a resize or surface recreation always
/// produces a new id, and stale ids must never be submitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

/// Platform-opaque handle to an on-screen drawable surface.
///
/// The windowing shell issues a fresh handle per surface generation;
/// backends pair it with the native surface object out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub u64);

/// A drawable surface and its current pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceDescriptor {
    pub handle: SurfaceHandle,
    pub width: u32,
    pub height: u32,
}

// ============================================================================
// RenderEngine trait
// ============================================================================

/// Main rendering facade trait
///
/// Implemented by backend-specific bindings. Driven only from the render
/// thread; implementations need `Send` so the frame loop can be moved
/// onto that thread, but no concurrent access ever happens.
pub trait RenderEngine: Send {
    /// Create the scene container.
    ///
    /// # Errors
    ///
    /// Fails fatally if the underlying engine failed to initialize;
    /// the caller aborts the session rather than retrying.
    fn create_scene(&mut self) -> Result<SceneId>;

    /// Destroy a scene and every entity it owns.
    fn destroy_scene(&mut self, scene: SceneId);

    /// Set the scene background (skybox) color, RGBA in [0, 1].
    fn set_background_color(&mut self, scene: SceneId, color: [f32; 4]) -> Result<()>;

    /// Attach a decoded model's entities to the scene graph.
    ///
    /// # Returns
    ///
    /// The created entities; the first one is the model root that
    /// receives placement transforms.
    fn attach_model(&mut self, scene: SceneId, model: &DecodedModel) -> Result<Vec<EntityId>>;

    /// Set the camera's perspective projection. Called on every resize.
    fn set_camera_projection(&mut self, fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32);

    /// Set the camera's view matrix for this frame.
    fn set_camera_view(&mut self, view: Mat4);

    /// Set an entity's world transform.
    ///
    /// Idempotent: overwrites the prior transform for that entity.
    fn set_entity_transform(&mut self, entity: EntityId, transform: Mat4) -> Result<()>;

    /// Create a presentation target for the given surface.
    ///
    /// Must be called again after every resize/recreate; the previous
    /// target is discarded, not reused.
    fn create_presentation_target(&mut self, surface: &SurfaceDescriptor) -> Result<TargetId>;

    /// Destroy a presentation target.
    fn destroy_presentation_target(&mut self, target: TargetId);

    /// Begin a frame against the given target.
    ///
    /// # Returns
    ///
    /// `Ok(false)` when the engine is not ready to accept a new frame
    /// (stale target, device busy): the caller skips `render`/`end_frame`
    /// for this tick and retries next tick.
    fn begin_frame(&mut self, target: TargetId, timestamp_nanos: i64) -> Result<bool>;

    /// Render the scene. Only valid after a successful `begin_frame`.
    fn render(&mut self) -> Result<()>;

    /// End the frame begun by the last successful `begin_frame`.
    fn end_frame(&mut self) -> Result<()>;
}
