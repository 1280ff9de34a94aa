//! Capabilities that connect an animator to the object it animates.
//!
//! An [`Animatable`] knows how to read the animated value from a target, write
//! a value back, and write a blend of two keyframe values. Concrete animations
//! (position, color, texture blend, ...) are built from the helpers below
//! rather than by subclassing an animator.

use std::marker::PhantomData;

use crate::value::Blend;

pub trait Animatable {
    type Target: ?Sized;
    type Value: Clone;

    /// Read the current value; used once to capture the initial value.
    fn get_value(&self, target: &Self::Target) -> Self::Value;

    /// Apply a keyframe value as-is.
    fn set_value(&self, target: &mut Self::Target, value: &Self::Value);

    /// Apply `before * before_coeff + after * after_coeff`.
    fn interpolate(
        &self,
        target: &mut Self::Target,
        before: &Self::Value,
        before_coeff: f32,
        after: &Self::Value,
        after_coeff: f32,
    );
}

/// Getter/setter pair for a [`Blend`] value. Interpolation blends the two
/// keyframe values and hands the result to the setter.
pub struct Property<T: ?Sized, V, G, S> {
    get: G,
    set: S,
    _marker: PhantomData<fn(&mut T) -> V>,
}

impl<T: ?Sized, V, G, S> Property<T, V, G, S>
where
    G: Fn(&T) -> V,
    S: Fn(&mut T, V),
{
    pub fn new(get: G, set: S) -> Self {
        Self {
            get,
            set,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, V, G, S> Animatable for Property<T, V, G, S>
where
    V: Blend + Clone,
    G: Fn(&T) -> V,
    S: Fn(&mut T, V),
{
    type Target = T;
    type Value = V;

    fn get_value(&self, target: &T) -> V {
        (self.get)(target)
    }

    fn set_value(&self, target: &mut T, value: &V) {
        (self.set)(target, value.clone())
    }

    fn interpolate(&self, target: &mut T, before: &V, before_coeff: f32, after: &V, after_coeff: f32) {
        (self.set)(target, before.blend(before_coeff, after, after_coeff))
    }
}

/// Getter/setter pair for values that cannot be blended (names, flags,
/// texture handles). Interpolation leaves the target untouched, so the value
/// only changes when a keyframe is reached.
pub struct DiscreteProperty<T: ?Sized, V, G, S> {
    get: G,
    set: S,
    _marker: PhantomData<fn(&mut T) -> V>,
}

impl<T: ?Sized, V, G, S> DiscreteProperty<T, V, G, S>
where
    G: Fn(&T) -> V,
    S: Fn(&mut T, V),
{
    pub fn new(get: G, set: S) -> Self {
        Self {
            get,
            set,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, V, G, S> Animatable for DiscreteProperty<T, V, G, S>
where
    V: Clone,
    G: Fn(&T) -> V,
    S: Fn(&mut T, V),
{
    type Target = T;
    type Value = V;

    fn get_value(&self, target: &T) -> V {
        (self.get)(target)
    }

    fn set_value(&self, target: &mut T, value: &V) {
        (self.set)(target, value.clone())
    }

    fn interpolate(&self, _target: &mut T, _before: &V, _before_coeff: f32, _after: &V, _after_coeff: f32) {}
}

/// All three capabilities as closures, for targets that mix values
/// themselves (e.g. a material that cross-fades two textures by weight).
pub struct FnProperty<T: ?Sized, V, G, S, I> {
    get: G,
    set: S,
    interpolate: I,
    _marker: PhantomData<fn(&mut T) -> V>,
}

impl<T: ?Sized, V, G, S, I> FnProperty<T, V, G, S, I>
where
    G: Fn(&T) -> V,
    S: Fn(&mut T, &V),
    I: Fn(&mut T, &V, f32, &V, f32),
{
    pub fn new(get: G, set: S, interpolate: I) -> Self {
        Self {
            get,
            set,
            interpolate,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, V, G, S, I> Animatable for FnProperty<T, V, G, S, I>
where
    V: Clone,
    G: Fn(&T) -> V,
    S: Fn(&mut T, &V),
    I: Fn(&mut T, &V, f32, &V, f32),
{
    type Target = T;
    type Value = V;

    fn get_value(&self, target: &T) -> V {
        (self.get)(target)
    }

    fn set_value(&self, target: &mut T, value: &V) {
        (self.set)(target, value)
    }

    fn interpolate(&self, target: &mut T, before: &V, before_coeff: f32, after: &V, after_coeff: f32) {
        (self.interpolate)(target, before, before_coeff, after, after_coeff)
    }
}
