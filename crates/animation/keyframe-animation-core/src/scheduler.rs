//! Per-frame driver for running animations.
//!
//! The scheduler remembers when each animation started, hands it the elapsed
//! time on every frame and drops it once `tick` reports it is done.

use tracing::debug;

use crate::config::Config;
use crate::ids::{AnimId, IdAllocator};

/// Contract between an animation and whatever drives it once per frame.
pub trait Animation {
    /// Called once, right before the first tick.
    fn initialize(&mut self);

    /// Evaluate at `elapsed_ms` since start. `false` means finished.
    fn tick(&mut self, elapsed_ms: u64) -> bool;
}

struct Scheduled<'a> {
    id: AnimId,
    start_ms: u64,
    animation: Box<dyn Animation + 'a>,
}

#[derive(Default)]
pub struct AnimationScheduler<'a> {
    active: Vec<Scheduled<'a>>,
    ids: IdAllocator,
}

impl<'a> AnimationScheduler<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            active: Vec::with_capacity(config.scheduler_capacity),
            ids: IdAllocator::new(),
        }
    }

    /// Initialize `animation` and start its clock at `now_ms`.
    pub fn start(&mut self, mut animation: impl Animation + 'a, now_ms: u64) -> AnimId {
        animation.initialize();
        let id = self.ids.alloc_anim();
        debug!(id = id.0, now_ms, "animation started");
        self.active.push(Scheduled {
            id,
            start_ms: now_ms,
            animation: Box::new(animation),
        });
        id
    }

    /// Tick every active animation in start order and drop the finished ones.
    /// Returns how many remain active.
    pub fn advance(&mut self, now_ms: u64) -> usize {
        self.active.retain_mut(|entry| {
            let still_active = entry
                .animation
                .tick(now_ms.saturating_sub(entry.start_ms));
            if !still_active {
                debug!(id = entry.id.0, now_ms, "animation removed");
            }
            still_active
        });
        self.active.len()
    }

    /// Drop an animation without ticking it again. Its target keeps the last
    /// applied value.
    pub fn stop(&mut self, id: AnimId) -> bool {
        let before = self.active.len();
        self.active.retain(|entry| entry.id != id);
        let removed = self.active.len() != before;
        if removed {
            debug!(id = id.0, "animation stopped");
        }
        removed
    }

    pub fn is_active(&self, id: AnimId) -> bool {
        self.active.iter().any(|entry| entry.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}
