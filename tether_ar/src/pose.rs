/// Pose — position + orientation in 3-D space.
///
/// The common currency between the tracking and rendering bindings:
/// tracked surfaces and anchors report poses, the render binding
/// consumes 4x4 column-major matrices derived from them.

use glam::{Mat4, Quat, Vec3};

/// A rigid transform: position + orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    position: Vec3,
    orientation: Quat,
}

impl Pose {
    /// The identity pose (origin, no rotation).
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Create a pose from a position and an orientation.
    ///
    /// The orientation is expected to be a unit quaternion; tracking
    /// engines report normalized orientations.
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self { position, orientation }
    }

    /// Create a translation-only pose.
    pub fn from_translation(position: Vec3) -> Self {
        Self { position, orientation: Quat::IDENTITY }
    }

    /// Position component.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Orientation component.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Convert to a column-major 4x4 world matrix (rotation + translation).
    ///
    /// This is the layout the render engine binding expects for
    /// `set_entity_transform`.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    /// Convert to a view matrix (inverse of the pose's world matrix).
    ///
    /// Used for the render camera when this pose is the tracked device pose.
    pub fn to_view_matrix(&self) -> Mat4 {
        self.to_matrix().inverse()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
