//! Value functions for every [`Curve`](crate::Curve).
//!
//! Each function maps `(start, end, t)` to the eased value. At `t = 0` they
//! return `start` and at `t = 1` they return `end`, give or take rounding;
//! in between, the back, elastic, bounce and spring curves may leave the
//! `[start, end]` range. Input outside of `[0, 1]` is extrapolated, except by
//! [`spring`], which clamps `t` first. The circular curves are only defined
//! on `[0, 1]` and return NaN far outside of it.
//!
//! # Example
//! ```
//! # use assert_approx_eq::assert_approx_eq;
//! use easeful::ease;
//!
//! assert_approx_eq!(ease::ease_in_quad(0.0f32, 10.0, 0.5), 2.5);
//! assert_approx_eq!(ease::ease_out_quad(0.0f32, 10.0, 0.5), 7.5);
//! assert_approx_eq!(ease::ease_in_out_quad(0.0f32, 10.0, 0.5), 5.0);
//! ```

use crate::params::{Back, Elastic};
use crate::{clamp01, lit, Scalar};

pub(crate) const BOUNCE_SCALE: f32 = 7.5625;
pub(crate) const BOUNCE_DIVISOR: f32 = 2.75;

pub fn linear<V: Scalar>(start: V, end: V, t: V) -> V {
    start + (end - start) * t
}

/// A damped oscillation that overshoots `end` a few times before settling.
///
/// `t` is clamped to `[0, 1]`.
pub fn spring<V: Scalar>(start: V, end: V, t: V) -> V {
    let t = clamp01(t);
    let u = V::one() - t;
    let phase = V::PI() * t * (lit::<V>(0.2) + lit::<V>(2.5) * t * t * t);
    let shape = (phase.sin() * u.powf(lit(2.2)) + t) * (V::one() + lit::<V>(1.2) * u);

    start + (end - start) * shape
}

pub fn ease_in_quad<V: Scalar>(start: V, end: V, t: V) -> V {
    (end - start) * t * t + start
}

pub fn ease_out_quad<V: Scalar>(start: V, end: V, t: V) -> V {
    -(end - start) * t * (t - lit(2.0)) + start
}

pub fn ease_in_out_quad<V: Scalar>(start: V, end: V, t: V) -> V {
    let half = (end - start) * lit(0.5);
    let x = t * lit(2.0);

    if x < V::one() {
        half * x * x + start
    } else {
        let x = x - V::one();

        -half * (x * (x - lit(2.0)) - V::one()) + start
    }
}

pub fn ease_in_cubic<V: Scalar>(start: V, end: V, t: V) -> V {
    (end - start) * t.powi(3) + start
}

pub fn ease_out_cubic<V: Scalar>(start: V, end: V, t: V) -> V {
    (end - start) * ((t - V::one()).powi(3) + V::one()) + start
}

pub fn ease_in_out_cubic<V: Scalar>(start: V, end: V, t: V) -> V {
    let half = (end - start) * lit(0.5);
    let x = t * lit(2.0);

    if x < V::one() {
        half * x.powi(3) + start
    } else {
        half * ((x - lit(2.0)).powi(3) + lit(2.0)) + start
    }
}

pub fn ease_in_quart<V: Scalar>(start: V, end: V, t: V) -> V {
    (end - start) * t.powi(4) + start
}

pub fn ease_out_quart<V: Scalar>(start: V, end: V, t: V) -> V {
    -(end - start) * ((t - V::one()).powi(4) - V::one()) + start
}

pub fn ease_in_out_quart<V: Scalar>(start: V, end: V, t: V) -> V {
    let half = (end - start) * lit(0.5);
    let x = t * lit(2.0);

    if x < V::one() {
        half * x.powi(4) + start
    } else {
        -half * ((x - lit(2.0)).powi(4) - lit(2.0)) + start
    }
}

pub fn ease_in_quint<V: Scalar>(start: V, end: V, t: V) -> V {
    (end - start) * t.powi(5) + start
}

pub fn ease_out_quint<V: Scalar>(start: V, end: V, t: V) -> V {
    (end - start) * ((t - V::one()).powi(5) + V::one()) + start
}

pub fn ease_in_out_quint<V: Scalar>(start: V, end: V, t: V) -> V {
    let half = (end - start) * lit(0.5);
    let x = t * lit(2.0);

    if x < V::one() {
        half * x.powi(5) + start
    } else {
        half * ((x - lit(2.0)).powi(5) + lit(2.0)) + start
    }
}

pub fn ease_in_sine<V: Scalar>(start: V, end: V, t: V) -> V {
    let delta = end - start;

    -delta * (t * V::FRAC_PI_2()).cos() + delta + start
}

pub fn ease_out_sine<V: Scalar>(start: V, end: V, t: V) -> V {
    (end - start) * (t * V::FRAC_PI_2()).sin() + start
}

pub fn ease_in_out_sine<V: Scalar>(start: V, end: V, t: V) -> V {
    -(end - start) * lit(0.5) * ((V::PI() * t).cos() - V::one()) + start
}

/// Starts at exactly `start`, even though `2^(10(t - 1))` is not quite zero
/// at `t = 0`.
pub fn ease_in_expo<V: Scalar>(start: V, end: V, t: V) -> V {
    if t == V::zero() {
        return start;
    }

    (end - start) * (lit::<V>(10.0) * (t - V::one())).exp2() + start
}

/// Ends at exactly `end`.
pub fn ease_out_expo<V: Scalar>(start: V, end: V, t: V) -> V {
    if t == V::one() {
        return end;
    }

    (end - start) * (V::one() - (lit::<V>(-10.0) * t).exp2()) + start
}

pub fn ease_in_out_expo<V: Scalar>(start: V, end: V, t: V) -> V {
    if t == V::zero() {
        return start;
    }
    if t == V::one() {
        return end;
    }

    let half = (end - start) * lit(0.5);
    let x = t * lit(2.0) - V::one();

    if x < V::zero() {
        half * (lit::<V>(10.0) * x).exp2() + start
    } else {
        half * (lit::<V>(2.0) - (lit::<V>(-10.0) * x).exp2()) + start
    }
}

pub fn ease_in_circ<V: Scalar>(start: V, end: V, t: V) -> V {
    -(end - start) * ((V::one() - t * t).sqrt() - V::one()) + start
}

pub fn ease_out_circ<V: Scalar>(start: V, end: V, t: V) -> V {
    let x = t - V::one();

    (end - start) * (V::one() - x * x).sqrt() + start
}

pub fn ease_in_out_circ<V: Scalar>(start: V, end: V, t: V) -> V {
    let half = (end - start) * lit(0.5);
    let x = t * lit(2.0);

    if x < V::one() {
        -half * ((V::one() - x * x).sqrt() - V::one()) + start
    } else {
        let x = x - lit(2.0);

        half * ((V::one() - x * x).sqrt() + V::one()) + start
    }
}

pub fn ease_in_bounce<V: Scalar>(start: V, end: V, t: V) -> V {
    let delta = end - start;

    delta - ease_out_bounce(V::zero(), delta, V::one() - t) + start
}

pub fn ease_out_bounce<V: Scalar>(start: V, end: V, t: V) -> V {
    let (x, height) = bounce_segment(t);

    (end - start) * (lit::<V>(BOUNCE_SCALE) * x * x + height) + start
}

pub fn ease_in_out_bounce<V: Scalar>(start: V, end: V, t: V) -> V {
    let delta = end - start;
    let half = lit::<V>(0.5);

    if t < half {
        ease_in_bounce(V::zero(), delta, t * lit(2.0)) * half + start
    } else {
        ease_out_bounce(V::zero(), delta, t * lit(2.0) - V::one()) * half + delta * half + start
    }
}

/// Split `t` into its offset from the vertex of the bounce parabola it falls
/// in, and the height of that vertex.
pub(crate) fn bounce_segment<V: Scalar>(t: V) -> (V, V) {
    let divisor = lit::<V>(BOUNCE_DIVISOR);

    if t < V::one() / divisor {
        (t, V::zero())
    } else if t < lit::<V>(2.0) / divisor {
        (t - lit::<V>(1.5) / divisor, lit(0.75))
    } else if t < lit::<V>(2.5) / divisor {
        (t - lit::<V>(2.25) / divisor, lit(0.9375))
    } else {
        (t - lit::<V>(2.625) / divisor, lit(0.984375))
    }
}

pub fn ease_in_back<V: Scalar>(start: V, end: V, t: V) -> V {
    Back::default().ease_in(start, end, t)
}

pub fn ease_out_back<V: Scalar>(start: V, end: V, t: V) -> V {
    Back::default().ease_out(start, end, t)
}

pub fn ease_in_out_back<V: Scalar>(start: V, end: V, t: V) -> V {
    Back::default().ease_in_out(start, end, t)
}

pub fn ease_in_elastic<V: Scalar>(start: V, end: V, t: V) -> V {
    Elastic::default().ease_in(start, end, t)
}

pub fn ease_out_elastic<V: Scalar>(start: V, end: V, t: V) -> V {
    Elastic::default().ease_out(start, end, t)
}

pub fn ease_in_out_elastic<V: Scalar>(start: V, end: V, t: V) -> V {
    Elastic::default().ease_in_out(start, end, t)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn spring_matches_reference_values() {
        assert_approx_eq!(spring(0.0f64, 1.0, 0.5), 1.0510158018655051, 1e-6);
        assert_eq!(spring(0.0f32, 1.0, 0.0), 0.0);
        assert_approx_eq!(spring(0.0f32, 1.0, 1.0), 1.0);
    }

    #[test]
    fn spring_clamps_time() {
        assert_eq!(spring(2.0f32, 5.0, -3.0), 2.0);
        assert_approx_eq!(spring(2.0f32, 5.0, 7.0), 5.0);
    }

    #[test]
    fn polynomial_midpoints() {
        assert_approx_eq!(ease_in_cubic(0.0f32, 1.0, 0.5), 0.125);
        assert_approx_eq!(ease_out_cubic(0.0f32, 1.0, 0.5), 0.875);
        assert_approx_eq!(ease_in_quart(0.0f32, 1.0, 0.5), 0.0625);
        assert_approx_eq!(ease_out_quart(0.0f32, 1.0, 0.5), 0.9375);
        assert_approx_eq!(ease_in_quint(0.0f32, 1.0, 0.5), 0.03125);
        assert_approx_eq!(ease_out_quint(0.0f32, 1.0, 0.5), 0.96875);

        let in_outs: [fn(f32, f32, f32) -> f32; 3] =
            [ease_in_out_cubic, ease_in_out_quart, ease_in_out_quint];

        for f in in_outs {
            assert_approx_eq!(f(0.0, 1.0, 0.5), 0.5);
        }
    }

    #[test]
    fn bounce_segments_are_continuous() {
        let divisor = BOUNCE_DIVISOR as f64;

        for &edge in &[1.0 / divisor, 2.0 / divisor, 2.5 / divisor] {
            let below = ease_out_bounce(0.0f64, 1.0, edge - 1e-12);
            let above = ease_out_bounce(0.0f64, 1.0, edge);

            assert_approx_eq!(below, above, 1e-6);
        }
    }

    #[test]
    fn bounce_in_mirrors_out() {
        for &t in &[0.0f32, 0.2, 0.45, 0.8, 1.0] {
            assert_approx_eq!(
                ease_in_bounce(1.0, 3.0, t) + ease_out_bounce(1.0, 3.0, 1.0 - t),
                4.0
            );
        }
    }

    #[test]
    fn expo_is_pinned_at_the_ends() {
        assert_eq!(ease_in_expo(-1.0f32, 1.0, 0.0), -1.0);
        assert_eq!(ease_out_expo(-1.0f32, 1.0, 1.0), 1.0);
        assert_eq!(ease_in_out_expo(-1.0f32, 1.0, 0.0), -1.0);
        assert_eq!(ease_in_out_expo(-1.0f32, 1.0, 1.0), 1.0);
        assert_approx_eq!(ease_in_out_expo(-1.0f32, 1.0, 0.5), 0.0);
    }

    #[test]
    fn circ_is_undefined_far_outside_unit_range() {
        assert!(ease_in_circ(0.0f32, 1.0, 1.5).is_nan());
        assert!(ease_out_circ(0.0f32, 1.0, -0.5).is_nan());
    }

    #[test]
    fn elastic_settles_at_target() {
        assert_eq!(ease_out_elastic(0.0f32, 1.0, 1.0), 1.0);
        assert_eq!(ease_in_elastic(0.0f32, 1.0, 0.0), 0.0);
        assert_approx_eq!(ease_in_out_elastic(0.0f32, 1.0, 0.5), 0.5);
    }
}
