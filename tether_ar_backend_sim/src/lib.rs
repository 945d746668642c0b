/*!
# Tether AR - Simulated Backends

Simulated implementations of the tether_ar engine traits.

This crate provides a scripted world-tracking backend and a headless
render backend that track real resource lifetimes (scenes, entities,
presentation targets) without touching a GPU or platform tracking
stack. They back the integration tests and the desktop demo.
*/

mod sim_asset;
mod sim_render;
mod sim_tracking;

pub use sim_asset::SimModelDecoder;
pub use sim_render::HeadlessRenderEngine;
pub use sim_tracking::{SimFrame, SimTrackingEngine};
