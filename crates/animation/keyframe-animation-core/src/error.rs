//! Error types for keyframe animation

use serde::{Deserialize, Serialize};

/// Errors raised by keyframe sets, animators and configuration loading.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimationError {
    /// Keyframe time is negative
    #[error("Invalid keyframe time: {time_ms} ms (must be >= 0)")]
    InvalidTime { time_ms: i64 },

    /// Indexed keyframe access outside `[0, len)`
    #[error("Keyframe index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl AnimationError {
    /// Check if this is a recoverable error.
    ///
    /// A rejected keyframe leaves the animator untouched, so callers can simply
    /// retry with a valid time. Index errors indicate a programming mistake.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidTime { .. } | Self::InvalidConfig { .. })
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidTime { .. } => "validation",
            Self::IndexOutOfRange { .. } => "index",
            Self::InvalidConfig { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
