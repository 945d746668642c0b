//! Tracking Session Binding
//!
//! Thin facade over an external world-tracking engine: per-call frame
//! advance, camera pose, and the set of currently tracked planar
//! surfaces with quality state. The engine itself is a black box behind
//! the [`TrackingEngine`]/[`TrackingSession`] traits; backends live in
//! separate crates.

mod session;

pub use session::{
    Anchor, AnchorId, PlanarSurface, SurfaceId, TrackingConfig, TrackingEngine, TrackingFrame,
    TrackingQuality, TrackingSession,
};

#[cfg(test)]
pub mod mock_tracking;
