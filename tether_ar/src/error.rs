//! Error types for the Tether AR core
//!
//! This module defines the error taxonomy used throughout the crate:
//! fatal startup failures, recoverable per-frame tracking conditions,
//! backend failures, and asset decode failures.

use std::fmt;

/// Result type for Tether AR operations
pub type Result<T> = std::result::Result<T, Error>;

/// Tether AR errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Engine or subsystem failed to initialize (fatal, no retry)
    InitializationFailed(String),

    /// Platform world-tracking capability is unavailable on this device
    TrackingUnavailable(String),

    /// Transient tracking loss reported by the tracking engine (per-frame, recoverable)
    TrackingLost(String),

    /// Backend-specific failure in the rendering or tracking engine
    Backend(String),

    /// Model asset could not be decoded
    AssetDecode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::TrackingUnavailable(msg) => write!(f, "Tracking unavailable: {}", msg),
            Error::TrackingLost(msg) => write!(f, "Tracking lost: {}", msg),
            Error::Backend(msg) => write!(f, "Backend error: {}", msg),
            Error::AssetDecode(msg) => write!(f, "Asset decode error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR entry and produce an [`Error::Backend`] with the same message
///
/// # Example
///
/// ```ignore
/// let err = scene.ok_or_else(|| tether_err!("tether::FrameLoop", "Scene not created"));
/// ```
#[macro_export]
macro_rules! tether_err {
    ($source:expr, $($arg:tt)*) => {{
        $crate::tether_error!($source, $($arg)*);
        $crate::error::Error::Backend(format!($($arg)*))
    }};
}

/// Log an ERROR entry and return early with an [`Error::Backend`]
#[macro_export]
macro_rules! tether_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::tether_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
