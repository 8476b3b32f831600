//! Curves with tunable constants.
//!
//! The `Back` and `Elastic` members of [`Curve`](crate::Curve) are these
//! curves with their default parameters. Build them directly to change how
//! far a back curve overshoots or how wide and how fast an elastic curve
//! oscillates.

use crate::{lit, CurveError, Scalar};

/// Overshoot of the standard back curves.
pub const DEFAULT_OVERSHOOT: f32 = 1.70158;

/// Factor applied to the overshoot for the in-out back curve, so that each
/// half overshoots about as far as the full in or out curve does.
pub const IN_OUT_OVERSHOOT_SCALE: f32 = 1.525;

/// Oscillation period of the standard elastic curves, in normalized time.
pub const DEFAULT_PERIOD: f32 = 0.3;

/// A cubic curve that pulls back before moving towards its target (`ease_in`)
/// or shoots past its target before settling (`ease_out`).
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let subtle = easeful::Back::new(0.5f32);
///
/// // Dips below the start value, but not as far as the default curve does.
/// let dip = subtle.ease_in(0.0, 1.0, 0.2);
/// assert!(dip < 0.0);
/// assert!(dip > easeful::Back::default().ease_in(0.0, 1.0, 0.2));
/// assert_approx_eq!(subtle.ease_in(0.0, 1.0, 1.0), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Back<V> {
    pub overshoot: V,
}

impl<V: Scalar> Default for Back<V> {
    fn default() -> Self {
        Back::new(lit(DEFAULT_OVERSHOOT))
    }
}

impl<V: Scalar> Back<V> {
    pub fn new(overshoot: V) -> Self {
        Back { overshoot }
    }

    pub fn ease_in(&self, start: V, end: V, t: V) -> V {
        let s = self.overshoot;

        (end - start) * t * t * ((s + V::one()) * t - s) + start
    }

    pub fn ease_out(&self, start: V, end: V, t: V) -> V {
        let s = self.overshoot;
        let x = t - V::one();

        (end - start) * (x * x * ((s + V::one()) * x + s) + V::one()) + start
    }

    pub fn ease_in_out(&self, start: V, end: V, t: V) -> V {
        let s = self.overshoot * lit(IN_OUT_OVERSHOOT_SCALE);
        let half = (end - start) * lit(0.5);
        let x = t * lit(2.0);

        if x < V::one() {
            half * (x * x * ((s + V::one()) * x - s)) + start
        } else {
            let x = x - lit(2.0);

            half * (x * x * ((s + V::one()) * x + s) + lit(2.0)) + start
        }
    }

    pub fn ease_in_derivative(&self, start: V, end: V, t: V) -> V {
        let s = self.overshoot;

        (end - start) * (lit::<V>(3.0) * (s + V::one()) * t * t - lit::<V>(2.0) * s * t)
    }

    pub fn ease_out_derivative(&self, start: V, end: V, t: V) -> V {
        let s = self.overshoot;
        let x = t - V::one();

        (end - start) * (lit::<V>(3.0) * (s + V::one()) * x * x + lit::<V>(2.0) * s * x)
    }

    pub fn ease_in_out_derivative(&self, start: V, end: V, t: V) -> V {
        let s = self.overshoot * lit(IN_OUT_OVERSHOOT_SCALE);
        let delta = end - start;
        let x = t * lit(2.0);

        // The halves are scaled by 1/2 in value and by 2 in time, which cancels.
        if x < V::one() {
            delta * (lit::<V>(3.0) * (s + V::one()) * x * x - lit::<V>(2.0) * s * x)
        } else {
            let x = x - lit(2.0);

            delta * (lit::<V>(3.0) * (s + V::one()) * x * x + lit::<V>(2.0) * s * x)
        }
    }
}

/// An exponentially decaying sine wave that snaps into (`ease_out`) or out
/// of (`ease_in`) its target.
///
/// By default the amplitude equals the distance between start and end. A
/// caller-supplied amplitude is only honored when it is at least that
/// distance; smaller amplitudes fall back to the default.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// let wobbly = easeful::Elastic::new(Some(2.0f64), 0.5).unwrap();
///
/// assert_approx_eq!(wobbly.ease_out(0.0, 1.0, 0.0), 0.0);
/// assert_approx_eq!(wobbly.ease_out(0.0, 1.0, 1.0), 1.0);
///
/// assert!(easeful::Elastic::new(None, 0.0f32).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "ElasticParams<V>",
        bound(deserialize = "V: Scalar + serde::Deserialize<'de>")
    )
)]
pub struct Elastic<V> {
    amplitude: Option<V>,
    period: V,
}

/// Unchecked form of [`Elastic`], validated by [`Elastic::new`] when
/// deserializing.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ElasticParams<V> {
    amplitude: Option<V>,
    period: V,
}

#[cfg(feature = "serde")]
impl<V: Scalar> TryFrom<ElasticParams<V>> for Elastic<V> {
    type Error = CurveError;

    fn try_from(params: ElasticParams<V>) -> Result<Self, CurveError> {
        Elastic::new(params.amplitude, params.period)
    }
}

impl<V: Scalar> Default for Elastic<V> {
    fn default() -> Self {
        Elastic {
            amplitude: None,
            period: lit(DEFAULT_PERIOD),
        }
    }
}

impl<V: Scalar> Elastic<V> {
    /// Build an elastic curve, rejecting periods that are not strictly
    /// positive and amplitudes or periods that are not finite.
    pub fn new(amplitude: Option<V>, period: V) -> Result<Self, CurveError> {
        if !period.is_finite() || period <= V::zero() {
            return Err(CurveError::InvalidParameter {
                name: "period",
                value: period.to_f64().unwrap_or(f64::NAN),
            });
        }

        if let Some(amplitude) = amplitude.filter(|a| !a.is_finite()) {
            return Err(CurveError::InvalidParameter {
                name: "amplitude",
                value: amplitude.to_f64().unwrap_or(f64::NAN),
            });
        }

        log::debug!(
            "elastic curve with amplitude {:?} and period {:?}",
            amplitude.and_then(|a| a.to_f64()),
            period.to_f64(),
        );

        Ok(Elastic { amplitude, period })
    }

    pub fn amplitude(&self) -> Option<V> {
        self.amplitude
    }

    pub fn period(&self) -> V {
        self.period
    }

    pub fn ease_in(&self, start: V, end: V, t: V) -> V {
        if t == V::zero() {
            return start;
        }
        if t == V::one() {
            return end;
        }

        let wave = self.wave(end - start);
        let x = t - V::one();

        -wave.rising(x) + start
    }

    pub fn ease_out(&self, start: V, end: V, t: V) -> V {
        if t == V::zero() {
            return start;
        }
        if t == V::one() {
            return end;
        }

        let delta = end - start;

        self.wave(delta).decaying(t) + delta + start
    }

    pub fn ease_in_out(&self, start: V, end: V, t: V) -> V {
        if t == V::zero() {
            return start;
        }

        let x = t * lit(2.0);
        if x == lit(2.0) {
            return end;
        }

        let delta = end - start;
        let wave = self.wave(delta);
        let y = x - V::one();

        if x < V::one() {
            -wave.rising(y) * lit(0.5) + start
        } else {
            wave.decaying(y) * lit(0.5) + delta + start
        }
    }

    pub fn ease_in_derivative(&self, start: V, end: V, t: V) -> V {
        -self.wave(end - start).rising_derivative(t - V::one())
    }

    pub fn ease_out_derivative(&self, start: V, end: V, t: V) -> V {
        self.wave(end - start).decaying_derivative(t)
    }

    pub fn ease_in_out_derivative(&self, start: V, end: V, t: V) -> V {
        let wave = self.wave(end - start);
        let x = t * lit(2.0);
        let y = x - V::one();

        if x < V::one() {
            -wave.rising_derivative(y)
        } else {
            wave.decaying_derivative(y)
        }
    }

    fn wave(&self, delta: V) -> Wave<V> {
        let period = self.period;

        let (amplitude, phase) = match self.amplitude {
            Some(a) if a != V::zero() && a >= delta.abs() => {
                (a, period / (V::PI() * lit(2.0)) * (delta / a).asin())
            }
            _ => (delta, period / lit(4.0)),
        };

        Wave {
            amplitude,
            phase,
            frequency: (V::PI() * lit(2.0)) / period,
        }
    }
}

/// `amplitude * 2^(±10x) * sin((x - phase) * frequency)`, the two halves
/// every elastic curve is made of.
struct Wave<V> {
    amplitude: V,
    phase: V,
    frequency: V,
}

impl<V: Scalar> Wave<V> {
    fn rising(&self, x: V) -> V {
        self.amplitude * (lit::<V>(10.0) * x).exp2() * self.angle(x).sin()
    }

    fn decaying(&self, x: V) -> V {
        self.amplitude * (lit::<V>(-10.0) * x).exp2() * self.angle(x).sin()
    }

    fn rising_derivative(&self, x: V) -> V {
        let angle = self.angle(x);
        let growth = lit::<V>(10.0) * V::LN_2();

        self.amplitude
            * (lit::<V>(10.0) * x).exp2()
            * (growth * angle.sin() + self.frequency * angle.cos())
    }

    fn decaying_derivative(&self, x: V) -> V {
        let angle = self.angle(x);
        let decay = lit::<V>(10.0) * V::LN_2();

        self.amplitude
            * (lit::<V>(-10.0) * x).exp2()
            * (self.frequency * angle.cos() - decay * angle.sin())
    }

    fn angle(&self, x: V) -> V {
        (x - self.phase) * self.frequency
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn back_in_out_halves_meet() {
        let back = Back::<f64>::default();

        assert_approx_eq!(back.ease_in_out(0.0, 4.0, 0.5), 2.0);
        assert_approx_eq!(back.ease_in_out(0.0, 4.0, 0.0), 0.0);
        assert_approx_eq!(back.ease_in_out(0.0, 4.0, 1.0), 4.0);
    }

    #[test]
    fn back_out_overshoots_target() {
        let back = Back::<f32>::default();

        assert!(back.ease_out(0.0, 1.0, 0.7) > 1.0);
    }

    #[test]
    fn elastic_rejects_bad_parameters() {
        assert_eq!(
            Elastic::new(None, -1.0f64),
            Err(CurveError::InvalidParameter {
                name: "period",
                value: -1.0
            })
        );
        assert!(Elastic::new(Some(f32::INFINITY), 0.3).is_err());
        assert!(Elastic::new(None, f32::NAN).is_err());
    }

    #[test]
    fn elastic_small_amplitude_falls_back_to_distance() {
        let default = Elastic::<f64>::default();
        let small = Elastic::new(Some(0.25), 0.3).unwrap();

        for &t in &[0.1, 0.35, 0.6, 0.9] {
            assert_approx_eq!(small.ease_out(0.0, 2.0, t), default.ease_out(0.0, 2.0, t));
        }
    }

    #[test]
    fn elastic_large_amplitude_is_continuous_at_midpoint() {
        let elastic = Elastic::new(Some(3.0f64), 0.45).unwrap();
        let below = elastic.ease_in_out(1.0, 2.0, 0.5 - 1e-9);
        let above = elastic.ease_in_out(1.0, 2.0, 0.5 + 1e-9);

        assert_approx_eq!(below, above, 1e-6);
    }

    #[test]
    fn elastic_without_distance_stays_put() {
        let elastic = Elastic::<f32>::default();

        for &t in &[0.0, 0.2, 0.5, 0.8, 1.0] {
            assert_eq!(elastic.ease_in(3.0, 3.0, t), 3.0);
            assert_eq!(elastic.ease_in_out(3.0, 3.0, t), 3.0);
            assert_eq!(elastic.ease_out_derivative(3.0, 3.0, t), 0.0);
        }
    }
}
