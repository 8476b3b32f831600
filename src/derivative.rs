//! Derivatives of the functions in [`ease`](crate::ease) with respect to `t`.
//!
//! Every function here shares its name and signature with its counterpart
//! in `ease`. The result is the rate of change per unit of normalized time;
//! divide it by the real duration of an animation to get a velocity (see
//! [`TweenWithDur::velocity`](crate::TweenWithDur::velocity)).
//!
//! Where a curve pins its value at `t = 0` or `t = 1` (expo, elastic), the
//! derivative at that point is the one of the unpinned formula.

use crate::ease::{bounce_segment, BOUNCE_SCALE};
use crate::params::{Back, Elastic};
use crate::{lit, Scalar};

pub fn linear<V: Scalar>(start: V, end: V, _t: V) -> V {
    end - start
}

/// Zero outside of `[0, 1]`, where [`ease::spring`](crate::ease::spring)
/// holds its clamped value.
pub fn spring<V: Scalar>(start: V, end: V, t: V) -> V {
    if t < V::zero() || t > V::one() {
        return V::zero();
    }

    let u = V::one() - t;
    let t3 = t * t * t;
    let phase = V::PI() * t * (lit::<V>(0.2) + lit::<V>(2.5) * t3);
    let phase_rate = V::PI() * (lit::<V>(0.2) + lit::<V>(10.0) * t3);
    let decay = u.powf(lit(2.2));

    let wave = phase.sin() * decay + t;
    let wave_rate =
        phase.cos() * phase_rate * decay - lit::<V>(2.2) * phase.sin() * u.powf(lit(1.2)) + V::one();
    let gain = V::one() + lit::<V>(1.2) * u;

    (end - start) * (wave_rate * gain - lit::<V>(1.2) * wave)
}

pub fn ease_in_quad<V: Scalar>(start: V, end: V, t: V) -> V {
    lit::<V>(2.0) * (end - start) * t
}

pub fn ease_out_quad<V: Scalar>(start: V, end: V, t: V) -> V {
    lit::<V>(2.0) * (end - start) * (V::one() - t)
}

pub fn ease_in_out_quad<V: Scalar>(start: V, end: V, t: V) -> V {
    let delta = end - start;
    let x = t * lit(2.0);

    if x < V::one() {
        lit::<V>(2.0) * delta * x
    } else {
        lit::<V>(2.0) * delta * (lit::<V>(2.0) - x)
    }
}

pub fn ease_in_cubic<V: Scalar>(start: V, end: V, t: V) -> V {
    lit::<V>(3.0) * (end - start) * t * t
}

pub fn ease_out_cubic<V: Scalar>(start: V, end: V, t: V) -> V {
    lit::<V>(3.0) * (end - start) * (t - V::one()).powi(2)
}

pub fn ease_in_out_cubic<V: Scalar>(start: V, end: V, t: V) -> V {
    let x = t * lit(2.0);
    let x = if x < V::one() { x } else { x - lit(2.0) };

    lit::<V>(3.0) * (end - start) * x * x
}

pub fn ease_in_quart<V: Scalar>(start: V, end: V, t: V) -> V {
    lit::<V>(4.0) * (end - start) * t.powi(3)
}

pub fn ease_out_quart<V: Scalar>(start: V, end: V, t: V) -> V {
    lit::<V>(-4.0) * (end - start) * (t - V::one()).powi(3)
}

pub fn ease_in_out_quart<V: Scalar>(start: V, end: V, t: V) -> V {
    let x = t * lit(2.0);

    if x < V::one() {
        lit::<V>(4.0) * (end - start) * x.powi(3)
    } else {
        lit::<V>(-4.0) * (end - start) * (x - lit(2.0)).powi(3)
    }
}

pub fn ease_in_quint<V: Scalar>(start: V, end: V, t: V) -> V {
    lit::<V>(5.0) * (end - start) * t.powi(4)
}

pub fn ease_out_quint<V: Scalar>(start: V, end: V, t: V) -> V {
    lit::<V>(5.0) * (end - start) * (t - V::one()).powi(4)
}

pub fn ease_in_out_quint<V: Scalar>(start: V, end: V, t: V) -> V {
    let x = t * lit(2.0);
    let x = if x < V::one() { x } else { x - lit(2.0) };

    lit::<V>(5.0) * (end - start) * x.powi(4)
}

pub fn ease_in_sine<V: Scalar>(start: V, end: V, t: V) -> V {
    (end - start) * V::FRAC_PI_2() * (t * V::FRAC_PI_2()).sin()
}

pub fn ease_out_sine<V: Scalar>(start: V, end: V, t: V) -> V {
    (end - start) * V::FRAC_PI_2() * (t * V::FRAC_PI_2()).cos()
}

pub fn ease_in_out_sine<V: Scalar>(start: V, end: V, t: V) -> V {
    (end - start) * V::FRAC_PI_2() * (V::PI() * t).sin()
}

pub fn ease_in_expo<V: Scalar>(start: V, end: V, t: V) -> V {
    expo_rate::<V>() * (end - start) * (lit::<V>(10.0) * (t - V::one())).exp2()
}

pub fn ease_out_expo<V: Scalar>(start: V, end: V, t: V) -> V {
    expo_rate::<V>() * (end - start) * (lit::<V>(-10.0) * t).exp2()
}

pub fn ease_in_out_expo<V: Scalar>(start: V, end: V, t: V) -> V {
    let x = t * lit(2.0) - V::one();
    let x = if x < V::zero() { x } else { -x };

    expo_rate::<V>() * (end - start) * (lit::<V>(10.0) * x).exp2()
}

/// `d/dx 2^(10x) = 10 ln(2) 2^(10x)`
fn expo_rate<V: Scalar>() -> V {
    lit::<V>(10.0) * V::LN_2()
}

/// Infinite at `t = 1`, where the curve is vertical.
pub fn ease_in_circ<V: Scalar>(start: V, end: V, t: V) -> V {
    (end - start) * t / (V::one() - t * t).sqrt()
}

/// Infinite at `t = 0`, where the curve is vertical.
pub fn ease_out_circ<V: Scalar>(start: V, end: V, t: V) -> V {
    let x = t - V::one();

    -(end - start) * x / (V::one() - x * x).sqrt()
}

pub fn ease_in_out_circ<V: Scalar>(start: V, end: V, t: V) -> V {
    let delta = end - start;
    let x = t * lit(2.0);

    if x < V::one() {
        delta * x / (V::one() - x * x).sqrt()
    } else {
        let x = x - lit(2.0);

        -delta * x / (V::one() - x * x).sqrt()
    }
}

pub fn ease_in_bounce<V: Scalar>(start: V, end: V, t: V) -> V {
    ease_out_bounce(start, end, V::one() - t)
}

pub fn ease_out_bounce<V: Scalar>(start: V, end: V, t: V) -> V {
    let (x, _) = bounce_segment(t);

    lit::<V>(2.0 * BOUNCE_SCALE) * (end - start) * x
}

pub fn ease_in_out_bounce<V: Scalar>(start: V, end: V, t: V) -> V {
    let delta = end - start;

    if t < lit(0.5) {
        ease_in_bounce(V::zero(), delta, t * lit(2.0))
    } else {
        ease_out_bounce(V::zero(), delta, t * lit(2.0) - V::one())
    }
}

pub fn ease_in_back<V: Scalar>(start: V, end: V, t: V) -> V {
    Back::default().ease_in_derivative(start, end, t)
}

pub fn ease_out_back<V: Scalar>(start: V, end: V, t: V) -> V {
    Back::default().ease_out_derivative(start, end, t)
}

pub fn ease_in_out_back<V: Scalar>(start: V, end: V, t: V) -> V {
    Back::default().ease_in_out_derivative(start, end, t)
}

pub fn ease_in_elastic<V: Scalar>(start: V, end: V, t: V) -> V {
    Elastic::default().ease_in_derivative(start, end, t)
}

pub fn ease_out_elastic<V: Scalar>(start: V, end: V, t: V) -> V {
    Elastic::default().ease_out_derivative(start, end, t)
}

pub fn ease_in_out_elastic<V: Scalar>(start: V, end: V, t: V) -> V {
    Elastic::default().ease_in_out_derivative(start, end, t)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn polynomial_slopes_vanish_where_curves_flatten() {
        assert_eq!(ease_in_quad(0.0f32, 1.0, 0.0), 0.0);
        assert_eq!(ease_out_quad(0.0f32, 1.0, 1.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.0f32, 1.0, 1.0), 0.0);
        assert_eq!(ease_out_quint(0.0f32, 1.0, 1.0), 0.0);
    }

    #[test]
    fn in_out_slopes_peak_at_midpoint() {
        assert_approx_eq!(ease_in_out_quad(0.0f32, 1.0, 0.5), 2.0);
        assert_approx_eq!(ease_in_out_cubic(0.0f32, 1.0, 0.5), 3.0);
        assert_approx_eq!(ease_in_out_quart(0.0f32, 1.0, 0.5), 4.0);
        assert_approx_eq!(ease_in_out_quint(0.0f32, 1.0, 0.5), 5.0);
        assert_approx_eq!(ease_in_out_sine(0.0f32, 1.0, 0.5), std::f32::consts::FRAC_PI_2);
        assert_approx_eq!(
            ease_in_out_expo(0.0f64, 1.0, 0.5),
            10.0 * std::f64::consts::LN_2
        );
    }

    #[test]
    fn spring_is_flat_outside_unit_range() {
        assert_eq!(spring(0.0f32, 1.0, -0.1), 0.0);
        assert_eq!(spring(0.0f32, 1.0, 1.1), 0.0);
        assert_approx_eq!(spring(0.0f64, 1.0, 1.0), -0.2, 1e-6);
    }

    #[test]
    fn circ_slope_is_vertical_at_the_edge() {
        assert!(ease_in_circ(0.0f32, 1.0, 1.0).is_infinite());
        assert!(ease_out_circ(0.0f32, 1.0, 0.0).is_infinite());
        assert_approx_eq!(ease_in_out_circ(0.0f32, 1.0, 0.25), 1.0 / 3.0f32.sqrt());
    }

    #[test]
    fn linear_slope_is_distance() {
        assert_eq!(linear(2.0f32, -4.0, 0.3), -6.0);
    }
}
