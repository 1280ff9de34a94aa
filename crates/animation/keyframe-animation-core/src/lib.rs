//! Keyframe Animation Core (engine-agnostic)
//!
//! Maps elapsed time to values on arbitrary objects:
//! - [`OrderedKeyframeSet`]: time-sorted keyframes with binary-search interval lookup
//! - [`KeyframeAnimator`]: per-tick driver that eases between keyframes and
//!   writes through an [`Animatable`] capability
//! - [`AnimationScheduler`]: frame-loop helper that ticks animators until they finish

pub mod animator;
pub mod config;
pub mod easing;
pub mod error;
pub mod ids;
pub mod keyframe;
pub mod property;
pub mod scheduler;
pub mod value;

// Re-exports for consumers
pub use animator::{AnimatorState, KeyframeAnimator, KeyframeWriter};
pub use config::Config;
pub use easing::Interpolation;
pub use error::AnimationError;
pub use ids::AnimId;
pub use keyframe::{Interval, Keyframe, OrderedKeyframeSet};
pub use property::{Animatable, DiscreteProperty, FnProperty, Property};
pub use scheduler::{Animation, AnimationScheduler};
pub use value::{Blend, Quat, Rgba};

/// Result type for fallible keyframe operations
pub type Result<T> = core::result::Result<T, AnimationError>;
