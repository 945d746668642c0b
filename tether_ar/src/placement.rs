/// Anchor Resolver — single-shot placement on the first tracked plane.
///
/// Scans the frame's surface sequence for the first surface in Tracking
/// state, creates an anchor at its center pose, and caches it for the
/// rest of the session. Placement is deliberately single-shot: the
/// anchor is never replaced on drift or when a "better" plane appears.

use glam::Mat4;

use crate::error::Result;
use crate::tracking::{Anchor, TrackingFrame, TrackingQuality, TrackingSession};
use crate::tether_info;

const SOURCE: &str = "tether::AnchorResolver";

/// Resolves the per-frame placement transform from tracked surfaces.
pub struct AnchorResolver {
    anchor: Option<Anchor>,
}

impl AnchorResolver {
    /// Create a resolver with no anchor yet.
    pub fn new() -> Self {
        Self { anchor: None }
    }

    /// The cached anchor, if placement has happened.
    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    /// Forget the anchor (surface destroyed; anchors do not persist
    /// across sessions).
    pub fn reset(&mut self) {
        self.anchor = None;
    }

    /// Resolve the placement transform for this frame.
    ///
    /// With a cached anchor, returns its fixed transform without looking
    /// at the frame's surfaces. Otherwise selects the first surface in
    /// Tracking state (first-match, no scoring), creates the anchor
    /// through the session, and caches it. Returns `None` when no anchor
    /// exists and no surface is tracking yet — the caller leaves the
    /// object unplaced for this tick.
    pub fn resolve(
        &mut self,
        frame: &mut TrackingFrame,
        session: &mut dyn TrackingSession,
    ) -> Result<Option<Mat4>> {
        if let Some(anchor) = &self.anchor {
            return Ok(Some(anchor.pose().to_matrix()));
        }

        let Some(surface) = frame
            .take_surfaces()
            .find(|s| s.quality() == TrackingQuality::Tracking)
        else {
            return Ok(None);
        };

        let anchor = session.create_anchor(&surface)?;
        tether_info!(
            SOURCE,
            "Anchor {:?} placed on surface {:?}",
            anchor.id(),
            surface.id()
        );
        let transform = anchor.pose().to_matrix();
        self.anchor = Some(anchor);
        Ok(Some(transform))
    }
}

impl Default for AnchorResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod tests;
