//! Core configuration for keyframe-animation-core.

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// Sizing hints for animators and the scheduler.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial capacity of each animator's keyframe set.
    pub keyframe_capacity: usize,
    /// Initial capacity of the scheduler's active list.
    pub scheduler_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keyframe_capacity: 8,
            scheduler_capacity: 64,
        }
    }
}

impl Config {
    /// Parse a JSON configuration. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, AnimationError> {
        Ok(serde_json::from_str(json)?)
    }
}
