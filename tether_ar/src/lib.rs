/*!
# Tether AR

Core traits and frame-loop orchestration for anchoring a virtual 3D
object to a detected planar surface over a live camera view.

This crate provides the platform-agnostic API using trait-based dynamic
polymorphism. Backend implementations (platform world tracking, GPU
renderers, the simulated backends used for tests) plug in behind these
traits.

## Architecture

- **TrackingEngine / TrackingSession**: world-tracking facade (camera
  pose, detected planar surfaces, anchors)
- **RenderEngine**: rendering facade (scene, entities, presentation
  targets, the begin/render/end frame cycle)
- **FrameLoop**: per-tick orchestrator tying the two together with
  single-shot placement
- **Shell**: window adapter translating platform callbacks into
  frame-loop lifecycle events

Backend implementations provide concrete types that implement these
traits.
*/

// Internal modules
mod error;
pub mod adapter;
pub mod asset;
pub mod bootstrap;
pub mod frame_loop;
pub mod log;
pub mod placement;
pub mod pose;
pub mod render;
pub mod tracking;

// Main tether namespace module
pub mod tether {
    // Error types
    pub use crate::error::{Error, Result};

    // Frame loop orchestrator
    pub use crate::frame_loop::{FrameLoop, FrameLoopStats, LoopState, Notice, PlacementRole};

    // Platform shell
    pub use crate::adapter::{run, ShellConfig};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
        // Note: tether_* macros are NOT re-exported here - they are internal only
    }

    // Tracking sub-module with the world-tracking facade
    pub mod tracking {
        pub use crate::tracking::*;
    }

    // Render sub-module with the rendering facade
    pub mod render {
        pub use crate::render::*;
    }

    // Asset sub-module
    pub mod asset {
        pub use crate::asset::*;
    }

    // Placement sub-module
    pub mod placement {
        pub use crate::placement::*;
    }

    // Scene bootstrap sub-module
    pub mod bootstrap {
        pub use crate::bootstrap::*;
    }

    // Pose math
    pub use crate::pose::Pose;
}

// Re-export math library at crate root
pub use glam;
