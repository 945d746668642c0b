//! Render Engine Binding
//!
//! Thin facade over an external 3-D rendering engine: scene container,
//! camera, presentation target, and entity transform setter. The engine
//! is a black box behind the [`RenderEngine`] trait; backends live in
//! separate crates.

mod engine;

pub use engine::{
    EntityId, RenderEngine, SceneId, SurfaceDescriptor, SurfaceHandle, TargetId,
};

#[cfg(test)]
pub mod mock_render;
