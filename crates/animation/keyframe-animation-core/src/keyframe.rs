//! Keyframes and the time-sorted set that holds them.

use crate::easing::Interpolation;
use crate::error::AnimationError;

/// A value pinned at a point in time, plus the easing used on the segment
/// that ends here.
#[derive(Debug, Clone)]
pub struct Keyframe<V> {
    pub time_ms: u64,
    pub value: V,
    pub interpolation: Interpolation,
}

impl<V> Keyframe<V> {
    #[inline]
    pub fn new(time_ms: u64, value: V, interpolation: Interpolation) -> Self {
        Self {
            time_ms,
            value,
            interpolation,
        }
    }

    #[inline]
    pub fn linear(time_ms: u64, value: V) -> Self {
        Self::new(time_ms, value, Interpolation::Linear)
    }
}

/// Position of a query time relative to the keyframes of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// Strictly before the first keyframe.
    Before,
    /// Exactly on a keyframe that is not the last one.
    Exact(usize),
    /// Strictly between two adjacent keyframes; `upper == lower + 1`.
    Between(usize, usize),
    /// At or after the last keyframe (carries its index).
    After(usize),
}

impl Interval {
    /// `(lower, upper)` index pair using `-1` for a missing bound.
    pub fn as_indices(&self) -> (isize, isize) {
        match *self {
            Self::Before => (-1, 0),
            Self::Exact(i) => (i as isize, i as isize),
            Self::Between(lower, upper) => (lower as isize, upper as isize),
            Self::After(last) => (last as isize, -1),
        }
    }
}

/// Keyframes kept strictly increasing by `time_ms`, at most one per time.
#[derive(Debug, Clone)]
pub struct OrderedKeyframeSet<V> {
    keyframes: Vec<Keyframe<V>>,
}

impl<V> Default for OrderedKeyframeSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OrderedKeyframeSet<V> {
    pub fn new() -> Self {
        Self {
            keyframes: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keyframes: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn position(&self, time_ms: u64) -> Result<usize, usize> {
        self.keyframes.binary_search_by_key(&time_ms, |k| k.time_ms)
    }

    /// Insert at the sorted position. A keyframe already at the same time is
    /// replaced and returned.
    pub fn insert_or_replace(&mut self, keyframe: Keyframe<V>) -> Option<Keyframe<V>> {
        match self.position(keyframe.time_ms) {
            Ok(idx) => Some(std::mem::replace(&mut self.keyframes[idx], keyframe)),
            Err(idx) => {
                self.keyframes.insert(idx, keyframe);
                None
            }
        }
    }

    /// Remove the keyframe at `time_ms`, if any.
    pub fn remove(&mut self, time_ms: u64) -> Option<Keyframe<V>> {
        self.position(time_ms)
            .ok()
            .map(|idx| self.keyframes.remove(idx))
    }

    /// Remove by time equality with `keyframe`; value and easing are ignored.
    pub fn remove_keyframe(&mut self, keyframe: &Keyframe<V>) -> Option<Keyframe<V>> {
        self.remove(keyframe.time_ms)
    }

    pub fn index_at(&self, index: usize) -> Result<&Keyframe<V>, AnimationError> {
        self.keyframes
            .get(index)
            .ok_or(AnimationError::IndexOutOfRange {
                index,
                len: self.keyframes.len(),
            })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&Keyframe<V>> {
        self.keyframes.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Keyframe<V>> {
        self.keyframes.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe<V>> {
        self.keyframes.iter()
    }

    pub fn as_slice(&self) -> &[Keyframe<V>] {
        &self.keyframes
    }

    pub fn clear(&mut self) {
        self.keyframes.clear();
    }

    /// Times of the first and last keyframes.
    pub fn time_range(&self) -> Option<(u64, u64)> {
        Some((self.first()?.time_ms, self.last()?.time_ms))
    }

    /// Locate `query_ms` among the keyframes. `None` for an empty set.
    ///
    /// Reaching the last keyframe counts as [`Interval::After`], never
    /// [`Interval::Exact`], so a set with one keyframe is either before it or
    /// done.
    pub fn interval_of(&self, query_ms: u64) -> Option<Interval> {
        let first = self.first()?;
        let last_idx = self.keyframes.len() - 1;
        if query_ms < first.time_ms {
            return Some(Interval::Before);
        }
        if query_ms >= self.keyframes[last_idx].time_ms {
            return Some(Interval::After(last_idx));
        }
        // first.time <= query < last.time, so 1 <= idx <= last_idx on a miss
        Some(match self.position(query_ms) {
            Ok(idx) => Interval::Exact(idx),
            Err(idx) => Interval::Between(idx - 1, idx),
        })
    }
}

impl<'a, V> IntoIterator for &'a OrderedKeyframeSet<V> {
    type Item = &'a Keyframe<V>;
    type IntoIter = std::slice::Iter<'a, Keyframe<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keyframes.iter()
    }
}
