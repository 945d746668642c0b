/// Mock tracking engine for unit tests (no platform tracking required)
///
/// Sessions replay a scripted frame sequence and count created anchors,
/// letting frame-loop and resolver tests assert placement behavior
/// without a real tracking backend.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::pose::Pose;
use super::{
    Anchor, AnchorId, PlanarSurface, TrackingConfig, TrackingEngine, TrackingFrame,
    TrackingSession,
};

/// One scripted advance() outcome.
#[derive(Debug, Clone)]
pub enum ScriptedStep {
    /// Produce a frame with the given camera pose and surfaces
    Frame {
        camera_pose: Pose,
        surfaces: Vec<PlanarSurface>,
    },
    /// Report transient tracking loss
    Loss,
}

impl ScriptedStep {
    pub fn empty() -> Self {
        Self::Frame {
            camera_pose: Pose::IDENTITY,
            surfaces: Vec::new(),
        }
    }

    pub fn with_surfaces(surfaces: Vec<PlanarSurface>) -> Self {
        Self::Frame {
            camera_pose: Pose::IDENTITY,
            surfaces,
        }
    }
}

/// Shared counters observed by tests while the frame loop owns the session.
#[derive(Debug, Default)]
pub struct MockTrackingState {
    pub advances: u64,
    pub anchors_created: u64,
    pub closed: bool,
}

pub type SharedTrackingState = Arc<Mutex<MockTrackingState>>;

/// Mock tracking engine replaying a script.
pub struct MockTrackingEngine {
    script: Vec<ScriptedStep>,
    available: bool,
    state: SharedTrackingState,
}

impl MockTrackingEngine {
    /// Engine whose sessions replay `script`, then produce empty frames.
    pub fn new(script: Vec<ScriptedStep>) -> (Self, SharedTrackingState) {
        let state = SharedTrackingState::default();
        (
            Self {
                script,
                available: true,
                state: state.clone(),
            },
            state,
        )
    }

    /// Engine whose start() always fails with TrackingUnavailable.
    pub fn unavailable() -> (Self, SharedTrackingState) {
        let (mut engine, state) = Self::new(Vec::new());
        engine.available = false;
        (engine, state)
    }
}

impl TrackingEngine for MockTrackingEngine {
    fn start(&mut self, _config: &TrackingConfig) -> Result<Box<dyn TrackingSession>> {
        if !self.available {
            return Err(Error::TrackingUnavailable(
                "mock tracking capability disabled".to_string(),
            ));
        }
        Ok(Box::new(MockTrackingSession {
            script: self.script.clone().into(),
            state: self.state.clone(),
            tick: 0,
        }))
    }
}

struct MockTrackingSession {
    script: VecDeque<ScriptedStep>,
    state: SharedTrackingState,
    tick: i64,
}

impl TrackingSession for MockTrackingSession {
    fn advance(&mut self) -> Result<TrackingFrame> {
        self.state.lock().unwrap().advances += 1;
        self.tick += 1;
        match self.script.pop_front() {
            Some(ScriptedStep::Frame { camera_pose, surfaces }) => {
                Ok(TrackingFrame::new(self.tick, camera_pose, surfaces))
            }
            Some(ScriptedStep::Loss) => {
                Err(Error::TrackingLost("scripted tracking loss".to_string()))
            }
            // Script exhausted: keep producing empty frames
            None => Ok(TrackingFrame::new(self.tick, Pose::IDENTITY, Vec::new())),
        }
    }

    fn create_anchor(&mut self, surface: &PlanarSurface) -> Result<Anchor> {
        let mut state = self.state.lock().unwrap();
        state.anchors_created += 1;
        Ok(Anchor::new(AnchorId(state.anchors_created), surface.center_pose()))
    }

    fn close(&mut self) {
        self.state.lock().unwrap().closed = true;
    }
}

#[cfg(test)]
#[path = "mock_tracking_tests.rs"]
mod tests;
