//! Blendable value types:
//! - scalars and fixed-size float vectors (component-wise weighted sum)
//! - [`Rgba`] colors (per-channel)
//! - [`Quat`] rotations (NLERP with shortest-arc correction)

use serde::{Deserialize, Serialize};

/// Weighted mix of two values. Coefficients normally sum to 1 but are not
/// required to (overshooting easings push one of them negative).
pub trait Blend: Sized {
    fn blend(&self, self_coeff: f32, other: &Self, other_coeff: f32) -> Self;
}

impl Blend for f32 {
    #[inline]
    fn blend(&self, self_coeff: f32, other: &Self, other_coeff: f32) -> Self {
        self * self_coeff + other * other_coeff
    }
}

impl Blend for f64 {
    #[inline]
    fn blend(&self, self_coeff: f32, other: &Self, other_coeff: f32) -> Self {
        self * f64::from(self_coeff) + other * f64::from(other_coeff)
    }
}

impl<const N: usize> Blend for [f32; N] {
    #[inline]
    fn blend(&self, self_coeff: f32, other: &Self, other_coeff: f32) -> Self {
        std::array::from_fn(|i| self[i].blend(self_coeff, &other[i], other_coeff))
    }
}

/// Linear RGBA color, channels nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl Blend for Rgba {
    #[inline]
    fn blend(&self, self_coeff: f32, other: &Self, other_coeff: f32) -> Self {
        self.to_array()
            .blend(self_coeff, &other.to_array(), other_coeff)
            .into()
    }
}

/// Rotation quaternion stored as (x, y, z, w).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat(pub [f32; 4]);

impl Quat {
    pub const IDENTITY: Quat = Quat([0.0, 0.0, 0.0, 1.0]);

    /// Rotation of `angle` radians about the normalized `axis`.
    pub fn from_axis_angle(axis: [f32; 3], angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Quat(normalize4([axis[0] * s, axis[1] * s, axis[2] * s, c]))
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[inline]
fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
fn normalize4(mut q: [f32; 4]) -> [f32; 4] {
    let len2 = dot4(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        for c in q.iter_mut() {
            *c *= inv_len;
        }
    }
    q
}

impl Blend for Quat {
    /// NLERP: if dot < 0 the second quaternion is negated so the blend takes
    /// the shortest arc. The result is normalized.
    fn blend(&self, self_coeff: f32, other: &Self, other_coeff: f32) -> Self {
        let mut b = other.0;
        if dot4(self.0, b) < 0.0 {
            for c in b.iter_mut() {
                *c = -*c;
            }
        }
        Quat(normalize4(self.0.blend(self_coeff, &b, other_coeff)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scalar_blend() {
        assert_relative_eq!(0.0f32.blend(0.5, &10.0, 0.5), 5.0);
        assert_relative_eq!(2.0f64.blend(0.25, &6.0, 0.75), 5.0);
    }

    #[test]
    fn vector_blend_is_componentwise() {
        let v = [0.0f32, 10.0, -4.0].blend(0.5, &[2.0, 0.0, 4.0], 0.5);
        assert_eq!(v, [1.0, 5.0, 0.0]);
    }

    #[test]
    fn color_blend_per_channel() {
        let red = Rgba::opaque(1.0, 0.0, 0.0);
        let blue = Rgba::new(0.0, 0.0, 1.0, 0.0);
        let mid = red.blend(0.5, &blue, 0.5);
        assert_eq!(mid, Rgba::new(0.5, 0.0, 0.5, 0.5));
    }

    #[test]
    fn quat_blend_takes_shortest_arc() {
        let a = Quat::IDENTITY;
        let neg = Quat([0.0, 0.0, 0.0, -1.0]);
        // -identity is the same rotation; shortest arc keeps us at identity
        let q = a.blend(0.5, &neg, 0.5);
        assert_relative_eq!(q.0[3], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn quat_blend_halfway_is_half_angle() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle([0.0, 0.0, 1.0], std::f32::consts::FRAC_PI_2);
        let mid = a.blend(0.5, &b, 0.5);
        let expected = Quat::from_axis_angle([0.0, 0.0, 1.0], std::f32::consts::FRAC_PI_4);
        for i in 0..4 {
            assert_relative_eq!(mid.0[i], expected.0[i], epsilon = 1e-5);
        }
    }
}
