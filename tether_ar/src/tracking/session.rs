/// Tracking traits and per-frame snapshot types.
///
/// A TrackingEngine starts a TrackingSession; the session produces one
/// immutable TrackingFrame per advance() call. Frames are valid for a
/// single render tick and are never retained across ticks.

use crate::error::Result;
use crate::pose::Pose;

// ============================================================================
// Identifiers
// ============================================================================

/// Stable identity of a tracked planar surface within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Identity of an anchor created by the tracking engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(pub u64);

// ============================================================================
// Tracked surfaces and anchors
// ============================================================================

/// Tracking-quality state of a planar surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingQuality {
    /// Tracking is paused for this surface
    Paused,
    /// Surface detected but not yet reliably tracked
    Starting,
    /// Surface is actively tracked with a valid pose
    Tracking,
    /// The engine stopped tracking this surface
    Stopped,
}

/// A tracked real-world planar surface.
///
/// Surfaces are created/updated/removed by the tracking engine between
/// advance() calls; this binding only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarSurface {
    id: SurfaceId,
    quality: TrackingQuality,
    center_pose: Pose,
}

impl PlanarSurface {
    /// Create a surface snapshot (backend use).
    pub fn new(id: SurfaceId, quality: TrackingQuality, center_pose: Pose) -> Self {
        Self { id, quality, center_pose }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn quality(&self) -> TrackingQuality {
        self.quality
    }

    /// Pose of the surface center for this frame.
    pub fn center_pose(&self) -> Pose {
        self.center_pose
    }
}

/// A pose fixed relative to a tracked surface at the moment of creation.
///
/// The pose never changes after creation; re-anchoring requires creating
/// a new anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    id: AnchorId,
    pose: Pose,
}

impl Anchor {
    /// Create an anchor snapshot (backend use).
    pub fn new(id: AnchorId, pose: Pose) -> Self {
        Self { id, pose }
    }

    pub fn id(&self) -> AnchorId {
        self.id
    }

    /// The world pose fixed at creation time.
    pub fn pose(&self) -> Pose {
        self.pose
    }
}

// ============================================================================
// Per-tick frame snapshot
// ============================================================================

/// Immutable snapshot produced by one advance() call.
///
/// The tracked-surface set is a finite one-shot sequence: `take_surfaces`
/// drains it, and a second call yields nothing. A new advance() produces
/// a new sequence — surfaces must never be cached beyond one tick.
#[derive(Debug)]
pub struct TrackingFrame {
    timestamp_nanos: i64,
    camera_pose: Pose,
    surfaces: Option<Vec<PlanarSurface>>,
}

impl TrackingFrame {
    /// Create a frame snapshot (backend use).
    pub fn new(timestamp_nanos: i64, camera_pose: Pose, surfaces: Vec<PlanarSurface>) -> Self {
        Self {
            timestamp_nanos,
            camera_pose,
            surfaces: Some(surfaces),
        }
    }

    pub fn timestamp_nanos(&self) -> i64 {
        self.timestamp_nanos
    }

    /// Device camera pose for this frame.
    pub fn camera_pose(&self) -> Pose {
        self.camera_pose
    }

    /// Drain the tracked surfaces for this frame.
    ///
    /// One-shot: the first call yields every surface, subsequent calls
    /// yield an empty iterator.
    pub fn take_surfaces(&mut self) -> std::vec::IntoIter<PlanarSurface> {
        self.surfaces.take().unwrap_or_default().into_iter()
    }
}

// ============================================================================
// Engine and session traits
// ============================================================================

/// Platform execution context handed to the tracking engine at start.
///
/// Opaque at this boundary; concrete backends interpret it.
#[derive(Debug, Clone)]
pub struct TrackingConfig {
    /// Application identifier reported to the platform tracking service
    pub app_name: String,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            app_name: "tether-ar".to_string(),
        }
    }
}

/// World-tracking engine factory.
///
/// Implemented by backend crates. `start` fails with
/// [`crate::error::Error::TrackingUnavailable`] when the required
/// platform capability is missing; the frame loop then runs render-only
/// instead of crashing.
pub trait TrackingEngine: Send {
    /// Start a world-tracking session.
    fn start(&mut self, config: &TrackingConfig) -> Result<Box<dyn TrackingSession>>;
}

/// A live world-tracking session.
///
/// Owned exclusively by the frame loop; created at surface-creation time
/// and closed when the surface is destroyed or the app backgrounds.
pub trait TrackingSession: Send {
    /// Advance tracking and produce the frame snapshot for this tick.
    ///
    /// Bounded: returns within one frame interval. May yield zero
    /// surfaces (no plane visible yet). Internal tracking loss is
    /// reported as [`crate::error::Error::TrackingLost`] — non-fatal,
    /// the caller skips this tick's placement step and continues.
    fn advance(&mut self) -> Result<TrackingFrame>;

    /// Create an anchor fixed at the given surface's center pose.
    fn create_anchor(&mut self, surface: &PlanarSurface) -> Result<Anchor>;

    /// Release engine-side session resources.
    fn close(&mut self);
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
