//! Frame Loop — per-tick orchestration of tracking, placement, and
//! rendering.
//!
//! Owns every engine handle as constructed-once state (no deferred-init
//! locals): the render engine, the tracking engine and its session, the
//! scene, the presentation target, the placement map, and the anchor
//! resolver. All lifecycle events and ticks arrive serialized on the
//! render thread; nothing here needs a lock.
//!
//! Failure semantics: recoverable per-tick conditions (dropped frame,
//! transient tracking loss, no plane visible yet) are absorbed and the
//! loop continues; fatal startup errors propagate out of
//! `on_surface_created`; degradations (tracking unavailable, model
//! decode failure) surface exactly once as a [`Notice`].

use rustc_hash::FxHashMap;

use crate::asset::{ModelHandoff, ModelSource};
use crate::bootstrap::{
    bootstrap_scene, DEFAULT_FAR_PLANE, DEFAULT_FOV_Y_DEGREES, DEFAULT_NEAR_PLANE,
};
use crate::error::Result;
use crate::placement::AnchorResolver;
use crate::render::{EntityId, RenderEngine, SceneId, SurfaceDescriptor, TargetId};
use crate::tracking::{TrackingConfig, TrackingEngine, TrackingSession};
use crate::{tether_debug, tether_info, tether_warn};

const SOURCE: &str = "tether::FrameLoop";

// ============================================================================
// State machine and supporting types
// ============================================================================

/// Frame loop lifecycle state.
///
/// `Uninitialized → Bootstrapped → Running ⇄ Paused → Destroyed`, with
/// `Destroyed → Bootstrapped` when a new surface is created later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No surface seen yet
    Uninitialized,
    /// Scene bootstrapped, waiting for a valid presentation target
    Bootstrapped,
    /// Ticking and presenting
    Running,
    /// Presentation target torn down (resize in progress, app background)
    Paused,
    /// Surface destroyed; ticks are ignored until a new surface arrives
    Destroyed,
}

/// Logical role of a placed entity in the scene.
///
/// Placement is keyed by role rather than by a raw entity index so
/// additional placed objects are a natural extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementRole {
    /// Root entity of the placement model
    PlacedModel,
}

/// Frame loop counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameLoopStats {
    /// Draw ticks processed (excluding ticks ignored after destroy)
    pub ticks: u64,
    /// Frames that completed begin/render/end
    pub rendered_frames: u64,
    /// Ticks that skipped presentation (no target, engine not ready)
    pub dropped_frames: u64,
    /// advance() calls that reported transient tracking loss
    pub tracking_losses: u64,
}

/// A condition that crosses to the user-facing layer, surfaced exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// World tracking is unavailable; the loop runs render-only
    TrackingUnavailable(String),
    /// The placement model failed to decode; background-only scene
    ModelLoadFailed(String),
}

// ============================================================================
// Frame loop
// ============================================================================

/// Per-frame orchestrator: advance tracking, resolve the anchor, push
/// the transform, present.
pub struct FrameLoop {
    render: Box<dyn RenderEngine>,
    tracking: Box<dyn TrackingEngine>,
    tracking_config: TrackingConfig,
    model: Option<ModelSource>,

    session: Option<Box<dyn TrackingSession>>,
    scene: Option<SceneId>,
    target: Option<TargetId>,
    surface: Option<SurfaceDescriptor>,
    handoff: Option<ModelHandoff>,
    placements: FxHashMap<PlacementRole, EntityId>,
    resolver: AnchorResolver,

    state: LoopState,
    stats: FrameLoopStats,
    notices: Vec<Notice>,
}

impl FrameLoop {
    /// Create a frame loop around the two engine bindings.
    ///
    /// # Arguments
    ///
    /// * `render` - Render engine binding
    /// * `tracking` - World-tracking engine binding
    /// * `model` - Placement model source, or None for a background-only scene
    pub fn new(
        render: Box<dyn RenderEngine>,
        tracking: Box<dyn TrackingEngine>,
        model: Option<ModelSource>,
    ) -> Self {
        Self {
            render,
            tracking,
            tracking_config: TrackingConfig::default(),
            model,
            session: None,
            scene: None,
            target: None,
            surface: None,
            handoff: None,
            placements: FxHashMap::default(),
            resolver: AnchorResolver::new(),
            state: LoopState::Uninitialized,
            stats: FrameLoopStats::default(),
            notices: Vec::new(),
        }
    }

    /// Replace the tracking configuration used at session start.
    pub fn with_tracking_config(mut self, config: TrackingConfig) -> Self {
        self.tracking_config = config;
        self
    }

    // ===== ACCESSORS =====

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> FrameLoopStats {
        self.stats
    }

    /// Whether the placement anchor has been created.
    pub fn is_placed(&self) -> bool {
        self.resolver.anchor().is_some()
    }

    /// Entity currently bound to a placement role.
    pub fn placement(&self, role: PlacementRole) -> Option<EntityId> {
        self.placements.get(&role).copied()
    }

    /// Drain pending user-facing notices. Each condition appears once.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ===== LIFECYCLE EVENTS =====

    /// Surface created: run scene bootstrap and start the tracking session.
    ///
    /// # Errors
    ///
    /// Fatal startup failures (render engine initialization) propagate;
    /// the caller surfaces a single failure notice and stops the loop.
    pub fn on_surface_created(&mut self, surface: &SurfaceDescriptor) -> Result<()> {
        match self.state {
            LoopState::Uninitialized | LoopState::Destroyed => {}
            _ => {
                tether_warn!(SOURCE, "Duplicate surface-created event ignored");
                return Ok(());
            }
        }
        tether_info!(
            SOURCE,
            "Surface {:?} created ({}x{})",
            surface.handle,
            surface.width,
            surface.height
        );

        let setup = bootstrap_scene(self.render.as_mut(), self.model.as_ref())?;
        self.scene = Some(setup.scene);
        self.handoff = setup.handoff;

        // Missing platform capability degrades to render-only, not a crash
        match self.tracking.start(&self.tracking_config) {
            Ok(session) => self.session = Some(session),
            Err(e) => {
                tether_warn!(SOURCE, "Tracking session unavailable, render-only: {}", e);
                self.notices.push(Notice::TrackingUnavailable(e.to_string()));
            }
        }

        self.surface = Some(*surface);
        self.state = LoopState::Bootstrapped;
        Ok(())
    }

    /// Surface resized: recreate the presentation target and update the
    /// camera projection.
    ///
    /// The old target is destroyed before the new one exists, so no tick
    /// can ever submit to a stale target.
    pub fn on_surface_resized(&mut self, width: u32, height: u32) {
        match self.state {
            LoopState::Uninitialized | LoopState::Destroyed => {
                tether_warn!(SOURCE, "Resize before surface creation ignored");
                return;
            }
            _ => {}
        }

        self.teardown_target();

        if width == 0 || height == 0 {
            // Minimized/zero-sized surface: stay paused until a real size arrives
            tether_debug!(SOURCE, "Zero-sized surface, presentation paused");
            return;
        }

        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.width = width;
        surface.height = height;
        let desc = *surface;

        let aspect_ratio = width as f32 / height as f32;
        self.render.set_camera_projection(
            DEFAULT_FOV_Y_DEGREES,
            aspect_ratio,
            DEFAULT_NEAR_PLANE,
            DEFAULT_FAR_PLANE,
        );

        match self.render.create_presentation_target(&desc) {
            Ok(target) => {
                tether_debug!(SOURCE, "Presentation target {:?} for {}x{}", target, width, height);
                self.target = Some(target);
            }
            Err(e) => {
                // Ticks keep dropping until a later resize succeeds
                tether_warn!(SOURCE, "Presentation target creation failed: {}", e);
            }
        }
    }

    /// Tear down the presentation target (resize in progress, app background).
    pub fn pause(&mut self) {
        if matches!(self.state, LoopState::Running | LoopState::Bootstrapped | LoopState::Paused) {
            self.teardown_target();
        }
    }

    /// One display-refresh tick: advance tracking, resolve placement,
    /// present.
    pub fn on_draw_tick(&mut self, timestamp_nanos: i64) {
        match self.state {
            // No engine calls after destroy or before the first surface
            LoopState::Uninitialized | LoopState::Destroyed => return,
            LoopState::Bootstrapped | LoopState::Running | LoopState::Paused => {}
        }
        self.stats.ticks += 1;

        self.poll_model_handoff();
        self.track_and_place();
        self.present(timestamp_nanos);
    }

    /// Surface destroyed: release session, presentation target, and
    /// scene, in that order. Later ticks are no-ops; a later
    /// surface-created event restarts from Bootstrapped.
    pub fn on_surface_destroyed(&mut self) {
        match self.state {
            LoopState::Uninitialized | LoopState::Destroyed => return,
            _ => {}
        }

        if let Some(mut session) = self.session.take() {
            session.close();
        }
        self.teardown_target();
        if let Some(scene) = self.scene.take() {
            self.render.destroy_scene(scene);
        }

        // Cancel any in-flight decode and forget the placement
        self.handoff = None;
        self.placements.clear();
        self.resolver.reset();
        self.surface = None;

        self.state = LoopState::Destroyed;
        tether_info!(SOURCE, "Surface destroyed, frame loop stopped");
    }

    // ===== TICK PHASES =====

    /// Receive the decoded model from the worker, if it arrived.
    fn poll_model_handoff(&mut self) {
        let result = match self.handoff.as_mut().and_then(|h| h.poll()) {
            Some(result) => result,
            None => return,
        };
        self.handoff = None;

        let model = match result {
            Ok(model) => model,
            Err(e) => {
                tether_warn!(SOURCE, "Model decode failed, background-only scene: {}", e);
                self.notices.push(Notice::ModelLoadFailed(e.to_string()));
                return;
            }
        };

        let Some(scene) = self.scene else { return };
        match self.render.attach_model(scene, &model) {
            Ok(entities) if !entities.is_empty() => {
                tether_info!(
                    SOURCE,
                    "Model '{}' attached ({} entities)",
                    model.name(),
                    entities.len()
                );
                self.placements.insert(PlacementRole::PlacedModel, entities[0]);
            }
            Ok(_) => {
                tether_warn!(SOURCE, "Model '{}' decoded to zero entities", model.name());
            }
            Err(e) => {
                tether_warn!(SOURCE, "Model attach failed, background-only scene: {}", e);
                self.notices.push(Notice::ModelLoadFailed(e.to_string()));
            }
        }
    }

    /// Advance tracking and apply the placement transform.
    ///
    /// Every failure in here is per-tick recoverable: the render step
    /// still runs.
    fn track_and_place(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return; // render-only mode
        };

        let mut frame = match session.advance() {
            Ok(frame) => frame,
            Err(e) => {
                self.stats.tracking_losses += 1;
                tether_debug!(SOURCE, "Transient tracking loss: {}", e);
                return;
            }
        };

        self.render.set_camera_view(frame.camera_pose().to_view_matrix());

        match self.resolver.resolve(&mut frame, session.as_mut()) {
            Ok(Some(transform)) => {
                // Tolerate an entity-less scene: placement waits for the model
                if let Some(&entity) = self.placements.get(&PlacementRole::PlacedModel) {
                    if let Err(e) = self.render.set_entity_transform(entity, transform) {
                        tether_warn!(SOURCE, "Transform update failed: {}", e);
                    }
                }
            }
            Ok(None) => {} // no plane tracked yet; expected steady state
            Err(e) => {
                self.stats.tracking_losses += 1;
                tether_debug!(SOURCE, "Anchor resolution failed: {}", e);
            }
        }
    }

    /// Submit the frame: begin/render/end, or drop silently.
    fn present(&mut self, timestamp_nanos: i64) {
        let Some(target) = self.target else {
            self.stats.dropped_frames += 1;
            return;
        };
        // Surface valid: the loop counts as running from here on
        self.state = LoopState::Running;

        match self.render.begin_frame(target, timestamp_nanos) {
            Ok(true) => {
                let rendered = match self.render.render() {
                    Ok(()) => true,
                    Err(e) => {
                        tether_warn!(SOURCE, "Render failed: {}", e);
                        false
                    }
                };
                if let Err(e) = self.render.end_frame() {
                    tether_warn!(SOURCE, "End frame failed: {}", e);
                }
                if rendered {
                    self.stats.rendered_frames += 1;
                } else {
                    self.stats.dropped_frames += 1;
                }
            }
            // Engine not ready: a dropped frame, not an error
            Ok(false) => {
                self.stats.dropped_frames += 1;
            }
            Err(e) => {
                self.stats.dropped_frames += 1;
                tether_warn!(SOURCE, "Begin frame failed: {}", e);
            }
        }
    }

    fn teardown_target(&mut self) {
        if let Some(target) = self.target.take() {
            self.render.destroy_presentation_target(target);
            if self.state == LoopState::Running {
                self.state = LoopState::Paused;
            }
        }
    }
}

#[cfg(test)]
#[path = "frame_loop_tests.rs"]
mod tests;
