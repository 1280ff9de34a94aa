//! Interpolation policies.
//!
//! A policy maps normalized progress between two keyframes to an eased ratio.
//! Results are not clamped: overshooting curves such as [`Interpolation::Back`]
//! legitimately leave `[0, 1]`.

/// Default overshoot for [`Interpolation::Back`].
pub const DEFAULT_BACK_OVERSHOOT: f32 = 1.701_58;

/// Easing applied on the segment that ends at a keyframe.
#[derive(Debug, Clone, Copy, Default)]
pub enum Interpolation {
    #[default]
    Linear,
    /// Hold the previous value until the segment completes.
    Step,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS-style timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Ease-out that overshoots the target before settling.
    Back { overshoot: f32 },
    Custom(fn(f32) -> f32),
}

impl Interpolation {
    pub fn back() -> Self {
        Self::Back {
            overshoot: DEFAULT_BACK_OVERSHOOT,
        }
    }

    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Map progress `t` (normally in `[0, 1]`) to an eased coefficient.
    #[inline]
    pub fn ease(&self, t: f32) -> f32 {
        match *self {
            Self::Linear => t,
            Self::Step => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => bezier_ease_t(t, x1, y1, x2, y2),
            Self::Back { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u * u * u + overshoot * u * u
            }
            Self::Custom(f) => f(t),
        }
    }

    /// Short name, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Step => "step",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::CubicBezier { .. } => "cubic-bezier",
            Self::Back { .. } => "back",
            Self::Custom(_) => "custom",
        }
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Bezier(0,0,1,1) is exactly linear
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [Interpolation; 6] = [
        Interpolation::Linear,
        Interpolation::EaseIn,
        Interpolation::EaseOut,
        Interpolation::EaseInOut,
        Interpolation::CubicBezier {
            x1: 0.42,
            y1: 0.0,
            x2: 0.58,
            y2: 1.0,
        },
        Interpolation::Back {
            overshoot: DEFAULT_BACK_OVERSHOOT,
        },
    ];

    #[test]
    fn endpoints_are_fixed() {
        for policy in ALL {
            assert_relative_eq!(policy.ease(0.0), 0.0, epsilon = 1e-4);
            assert_relative_eq!(policy.ease(1.0), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_relative_eq!(Interpolation::Linear.ease(0.25), 0.25);
        assert_relative_eq!(Interpolation::cubic_bezier(0.0, 0.0, 1.0, 1.0).ease(0.3), 0.3);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let p = Interpolation::EaseInOut;
        assert_relative_eq!(p.ease(0.5), 0.5);
        assert_relative_eq!(p.ease(0.2) + p.ease(0.8), 1.0, epsilon = 1e-5);
        assert!(Interpolation::EaseIn.ease(0.5) < 0.5);
        assert!(Interpolation::EaseOut.ease(0.5) > 0.5);
    }

    #[test]
    fn step_holds_until_end() {
        assert_eq!(Interpolation::Step.ease(0.0), 0.0);
        assert_eq!(Interpolation::Step.ease(0.99), 0.0);
        assert_eq!(Interpolation::Step.ease(1.0), 1.0);
    }

    #[test]
    fn back_overshoots() {
        let peak = (1..100)
            .map(|i| Interpolation::back().ease(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn custom_policy_is_called() {
        fn square(t: f32) -> f32 {
            t * t
        }
        assert_relative_eq!(Interpolation::Custom(square).ease(0.5), 0.25);
        assert_eq!(Interpolation::Custom(square).name(), "custom");
    }
}
