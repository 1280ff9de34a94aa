//! Per-tick keyframe animator.
//!
//! Model:
//! - Keyframes live in an [`OrderedKeyframeSet`] shared behind one mutex, so
//!   other threads can add or remove keyframes through a [`KeyframeWriter`]
//!   while the frame loop ticks.
//! - `initialize()` snapshots the target's current value. Before the first
//!   keyframe the animator blends from that snapshot toward the first value.
//! - Each segment is eased by the interpolation policy of the keyframe that
//!   ends it.
//! - Capability callbacks always run after the lock is released.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::config::Config;
use crate::easing::Interpolation;
use crate::error::AnimationError;
use crate::keyframe::{Interval, Keyframe, OrderedKeyframeSet};
use crate::property::Animatable;
use crate::scheduler::Animation;

/// Shared, thread-safe handle to an animator's keyframes.
pub struct KeyframeWriter<V> {
    keyframes: Arc<Mutex<OrderedKeyframeSet<V>>>,
}

impl<V> Clone for KeyframeWriter<V> {
    fn clone(&self) -> Self {
        Self {
            keyframes: Arc::clone(&self.keyframes),
        }
    }
}

impl<V> KeyframeWriter<V> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            keyframes: Arc::new(Mutex::new(OrderedKeyframeSet::with_capacity(capacity))),
        }
    }

    /// Every write completes before the guard drops, so a poisoned lock still
    /// holds a sorted set.
    #[inline]
    fn lock(&self) -> MutexGuard<'_, OrderedKeyframeSet<V>> {
        self.keyframes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `value` at `time_ms`, replacing any keyframe already there.
    pub fn add_keyframe(
        &self,
        time_ms: i64,
        value: V,
        interpolation: Interpolation,
    ) -> Result<(), AnimationError> {
        let time = u64::try_from(time_ms).map_err(|_| {
            warn!(time_ms, "rejected keyframe with negative time");
            AnimationError::InvalidTime { time_ms }
        })?;
        let replaced = self
            .lock()
            .insert_or_replace(Keyframe::new(time, value, interpolation));
        if replaced.is_some() {
            debug!(time_ms = time, easing = interpolation.name(), "replaced keyframe");
        }
        Ok(())
    }

    pub fn add_linear_keyframe(&self, time_ms: i64, value: V) -> Result<(), AnimationError> {
        self.add_keyframe(time_ms, value, Interpolation::Linear)
    }

    pub fn remove_keyframe(&self, time_ms: u64) -> Option<Keyframe<V>> {
        self.lock().remove(time_ms)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the keyframes as of one consistent moment.
    pub fn snapshot(&self) -> Vec<Keyframe<V>>
    where
        V: Clone,
    {
        self.lock().as_slice().to_vec()
    }
}

enum Lifecycle<V> {
    Uninitialized,
    Initialized { initial: V },
}

/// Observable animator lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    /// `initialize()` has not captured the initial value yet.
    Uninitialized,
    /// Initialized but not ticked.
    Ready,
    /// The last tick returned `true`.
    Active,
    /// The last tick reached or passed the final keyframe.
    Finished,
}

/// What a tick will write, extracted while the lock is held.
enum Sample<V> {
    Set { value: V, active: bool },
    FromInitial { first: V, coeff: f32 },
    Between { before: V, after: V, coeff: f32 },
}

fn sample_at<V: Clone>(set: &OrderedKeyframeSet<V>, elapsed_ms: u64) -> Option<Sample<V>> {
    let keyframes = set.as_slice();
    Some(match set.interval_of(elapsed_ms)? {
        Interval::Before => {
            let first = &keyframes[0];
            // elapsed >= 0 and elapsed < first.time, so first.time > 0
            let progress = elapsed_ms as f32 / first.time_ms as f32;
            Sample::FromInitial {
                first: first.value.clone(),
                coeff: first.interpolation.ease(progress),
            }
        }
        Interval::After(last) => Sample::Set {
            value: keyframes[last].value.clone(),
            active: false,
        },
        Interval::Exact(idx) => Sample::Set {
            value: keyframes[idx].value.clone(),
            active: true,
        },
        Interval::Between(lower, upper) => {
            let before = &keyframes[lower];
            let after = &keyframes[upper];
            let progress = (elapsed_ms - before.time_ms) as f32
                / (after.time_ms - before.time_ms) as f32;
            Sample::Between {
                before: before.value.clone(),
                after: after.value.clone(),
                coeff: after.interpolation.ease(progress),
            }
        }
    })
}

/// Drives one property of one target from elapsed time.
pub struct KeyframeAnimator<'a, P: Animatable> {
    target: &'a mut P::Target,
    property: P,
    keyframes: KeyframeWriter<P::Value>,
    lifecycle: Lifecycle<P::Value>,
    state: AnimatorState,
}

impl<'a, P: Animatable> KeyframeAnimator<'a, P> {
    pub fn new(target: &'a mut P::Target, property: P) -> Self {
        Self::with_config(target, property, &Config::default())
    }

    pub fn with_config(target: &'a mut P::Target, property: P, config: &Config) -> Self {
        Self {
            target,
            property,
            keyframes: KeyframeWriter::with_capacity(config.keyframe_capacity),
            lifecycle: Lifecycle::Uninitialized,
            state: AnimatorState::Uninitialized,
        }
    }

    /// Add a keyframe. Fails with [`AnimationError::InvalidTime`] for negative
    /// times, leaving the keyframes unchanged.
    pub fn add_keyframe(
        &self,
        time_ms: i64,
        value: P::Value,
        interpolation: Interpolation,
    ) -> Result<(), AnimationError> {
        self.keyframes.add_keyframe(time_ms, value, interpolation)
    }

    pub fn add_linear_keyframe(&self, time_ms: i64, value: P::Value) -> Result<(), AnimationError> {
        self.keyframes.add_linear_keyframe(time_ms, value)
    }

    pub fn remove_keyframe(&self, time_ms: u64) -> Option<Keyframe<P::Value>> {
        self.keyframes.remove_keyframe(time_ms)
    }

    pub fn keyframe_count(&self) -> usize {
        self.keyframes.len()
    }

    /// Handle for mutating keyframes from another thread.
    pub fn keyframe_writer(&self) -> KeyframeWriter<P::Value> {
        self.keyframes.clone()
    }

    /// Capture the target's current value as the starting point. Calling it
    /// again re-captures, which restarts the lead-in toward the first keyframe.
    pub fn initialize(&mut self) {
        let initial = self.property.get_value(self.target);
        self.lifecycle = Lifecycle::Initialized { initial };
        self.state = AnimatorState::Ready;
    }

    /// Apply the value for `elapsed_ms` since start. Returns whether the
    /// animation still needs ticking.
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        let sample = {
            let set = self.keyframes.lock();
            sample_at(&set, elapsed_ms)
        };
        let Some(sample) = sample else {
            return false;
        };

        let active = match sample {
            Sample::Set { value, active } => {
                self.property.set_value(self.target, &value);
                active
            }
            Sample::FromInitial { first, coeff } => {
                let initial = self.initial_or_capture();
                self.property
                    .interpolate(self.target, &initial, 1.0 - coeff, &first, coeff);
                true
            }
            Sample::Between {
                before,
                after,
                coeff,
            } => {
                self.property
                    .interpolate(self.target, &before, 1.0 - coeff, &after, coeff);
                true
            }
        };

        if active {
            self.state = AnimatorState::Active;
        } else if self.state != AnimatorState::Finished {
            debug!(elapsed_ms, "keyframe animation finished");
            self.state = AnimatorState::Finished;
        }
        active
    }

    fn initial_or_capture(&mut self) -> P::Value {
        let initial = match &self.lifecycle {
            Lifecycle::Initialized { initial } => return initial.clone(),
            Lifecycle::Uninitialized => self.property.get_value(self.target),
        };
        warn!("animator ticked before initialize(); capturing initial value now");
        self.lifecycle = Lifecycle::Initialized {
            initial: initial.clone(),
        };
        initial
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn initial_value(&self) -> Option<&P::Value> {
        match &self.lifecycle {
            Lifecycle::Initialized { initial } => Some(initial),
            Lifecycle::Uninitialized => None,
        }
    }

    pub fn target(&self) -> &P::Target {
        self.target
    }

    pub fn property(&self) -> &P {
        &self.property
    }
}

impl<'a, P: Animatable> Animation for KeyframeAnimator<'a, P> {
    fn initialize(&mut self) {
        KeyframeAnimator::initialize(self);
    }

    fn tick(&mut self, elapsed_ms: u64) -> bool {
        KeyframeAnimator::tick(self, elapsed_ms)
    }
}
