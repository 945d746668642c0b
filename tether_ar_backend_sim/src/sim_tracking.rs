//! Scripted world-tracking backend.
//!
//! Sessions replay a fixed frame script, then keep repeating the final
//! frame — matching real tracking stacks, which keep reporting the same
//! plane set once the world is mapped.

use tether_ar::pose::Pose;
use tether_ar::tether::{Error, Result};
use tether_ar::tracking::{
    Anchor, AnchorId, PlanarSurface, SurfaceId, TrackingConfig, TrackingEngine, TrackingFrame,
    TrackingQuality, TrackingSession,
};

use glam::Vec3;

/// One scripted tracking frame.
#[derive(Debug, Clone)]
pub struct SimFrame {
    pub camera_pose: Pose,
    pub surfaces: Vec<PlanarSurface>,
}

impl SimFrame {
    /// A frame with the camera at origin and nothing detected.
    pub fn empty() -> Self {
        Self {
            camera_pose: Pose::IDENTITY,
            surfaces: Vec::new(),
        }
    }

    pub fn with_surfaces(surfaces: Vec<PlanarSurface>) -> Self {
        Self {
            camera_pose: Pose::IDENTITY,
            surfaces,
        }
    }
}

/// Scripted tracking engine.
pub struct SimTrackingEngine {
    script: Vec<SimFrame>,
    available: bool,
}

impl SimTrackingEngine {
    /// Engine whose sessions replay `script`, then repeat its final frame.
    pub fn new(script: Vec<SimFrame>) -> Self {
        Self {
            script,
            available: true,
        }
    }

    /// Engine whose start() always fails, as on a device without the
    /// tracking capability.
    pub fn unavailable() -> Self {
        Self {
            script: Vec::new(),
            available: false,
        }
    }

    /// Typical detection script: `warmup` empty frames, then a tracked
    /// horizontal plane one meter in front of the camera.
    pub fn horizontal_plane_after(warmup: usize) -> Self {
        let mut script = vec![SimFrame::empty(); warmup];
        script.push(SimFrame::with_surfaces(vec![PlanarSurface::new(
            SurfaceId(1),
            TrackingQuality::Tracking,
            Pose::from_translation(Vec3::new(0.0, -0.4, -1.0)),
        )]));
        Self::new(script)
    }
}

impl TrackingEngine for SimTrackingEngine {
    fn start(&mut self, _config: &TrackingConfig) -> Result<Box<dyn TrackingSession>> {
        if !self.available {
            return Err(Error::TrackingUnavailable(
                "simulated device lacks world tracking".to_string(),
            ));
        }
        Ok(Box::new(SimTrackingSession {
            script: self.script.clone(),
            cursor: 0,
            tick: 0,
            next_anchor: 0,
            closed: false,
        }))
    }
}

struct SimTrackingSession {
    script: Vec<SimFrame>,
    cursor: usize,
    tick: i64,
    next_anchor: u64,
    closed: bool,
}

impl TrackingSession for SimTrackingSession {
    fn advance(&mut self) -> Result<TrackingFrame> {
        if self.closed {
            return Err(Error::TrackingLost("session closed".to_string()));
        }
        self.tick += 1;

        let Some(frame) = self.script.get(self.cursor) else {
            // Empty script: nothing was ever detected
            return Ok(TrackingFrame::new(self.tick, Pose::IDENTITY, Vec::new()));
        };
        if self.cursor + 1 < self.script.len() {
            self.cursor += 1;
        }
        Ok(TrackingFrame::new(
            self.tick,
            frame.camera_pose,
            frame.surfaces.clone(),
        ))
    }

    fn create_anchor(&mut self, surface: &PlanarSurface) -> Result<Anchor> {
        if self.closed {
            return Err(Error::TrackingLost("session closed".to_string()));
        }
        self.next_anchor += 1;
        Ok(Anchor::new(AnchorId(self.next_anchor), surface.center_pose()))
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
#[path = "sim_tracking_tests.rs"]
mod tests;
