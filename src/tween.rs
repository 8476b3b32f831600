use crate::anim_with_dur::{AnimWithDur, TweenWithDur};
use crate::{fun, Anim, Curve, Fun, Scalar};

/// A single eased motion from `start` to `end`, taking `duration` units of
/// time.
///
/// `Tween` is the bridge between [`Curve`]s, which work on normalized time,
/// and [`Anim`]ations, which work on real time. Evaluated at `time`, it
/// evaluates its curve at `time / duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween<V> {
    pub curve: Curve,
    pub start: V,
    pub end: V,
    pub duration: V,
}

impl<V: Scalar> Tween<V> {
    /// A tween over one unit of time.
    pub fn new(curve: Curve, start: V, end: V) -> Self {
        Tween {
            curve,
            start,
            end,
            duration: V::one(),
        }
    }

    /// Whether the tween takes no time at all. Such a tween is always at
    /// its end.
    pub fn is_instant(&self) -> bool {
        !(self.duration > V::zero())
    }

    /// Normalized time at `time`.
    pub fn progress(&self, time: V) -> V {
        if self.is_instant() {
            return V::one();
        }

        time / self.duration
    }

    pub fn value(&self, time: V) -> V {
        self.curve.eval(self.start, self.end, self.progress(time))
    }

    /// Rate of change at `time`, per unit of real time. Zero for an instant
    /// tween.
    pub fn velocity(&self, time: V) -> V {
        if self.is_instant() {
            return V::zero();
        }

        self.curve.derivative(self.start, self.end, self.progress(time)) / self.duration
    }
}

impl<V: Scalar> Fun for Tween<V> {
    type T = V;
    type V = V;

    fn eval(&self, time: V) -> V {
        self.value(time)
    }
}

/// Ease from `start` to `end` along `curve` in time `[0 .. 1]`.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use easeful::Curve;
///
/// let anim = easeful::tween(Curve::EaseInOutQuad, -1.0f32, 1.0);
///
/// assert_approx_eq!(anim.eval(0.0), -1.0);
/// assert_approx_eq!(anim.eval(0.5), 0.0);
/// assert_approx_eq!(anim.eval(1.0), 1.0);
/// ```
pub fn tween<V: Scalar>(curve: Curve, start: V, end: V) -> Anim<Tween<V>> {
    Anim(Tween::new(curve, start, end))
}

impl<V: Scalar> Anim<Tween<V>> {
    /// The velocity of this tween as an animation of its own.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easeful::Curve;
    ///
    /// let speed = easeful::tween(Curve::EaseOutQuad, 0.0f64, 3.0).velocity();
    ///
    /// assert_approx_eq!(speed.eval(0.0), 6.0);
    /// assert_approx_eq!(speed.eval(1.0), 0.0);
    /// ```
    pub fn velocity(&self) -> Anim<impl Fun<T = V, V = V>> {
        let tween = self.0;

        fun(move |time| tween.velocity(time))
    }

    /// Stretch this tween so that it takes `duration` units of time, and tag
    /// it with that duration.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easeful::Curve;
    ///
    /// let anim = easeful::tween(Curve::EaseInQuad, 0.0f32, 8.0).over(4.0);
    ///
    /// assert_approx_eq!(anim.eval(2.0), 2.0);
    /// assert_approx_eq!(anim.velocity(2.0), 2.0);
    /// assert!(anim.is_finished(4.0));
    /// ```
    pub fn over(self, duration: V) -> TweenWithDur<V> {
        AnimWithDur(Anim(Tween { duration, ..self.0 }), duration)
    }
}

impl<V, F> Anim<F>
where
    V: Scalar,
    F: Fun<T = V, V = V>,
{
    /// Play two animations in sequence, easing from one into the other.
    ///
    /// `self` plays until `self_end`. Then a tween along `curve` takes
    /// `ease_duration` to move from the value of `self` at `self_end` to the
    /// value of `next` at time zero. After that, `next` plays, seeing time
    /// starting at zero.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easeful::Curve;
    ///
    /// let idle = easeful::constant(0.0f32);
    /// let active = easeful::constant(10.0f32);
    /// let anim = idle.seq_ease(1.0, Curve::EaseInOutQuad, 2.0, active);
    ///
    /// assert_approx_eq!(anim.eval(0.5), 0.0);
    /// assert_approx_eq!(anim.eval(2.0), 5.0);
    /// assert_approx_eq!(anim.eval(3.0), 10.0);
    /// assert_approx_eq!(anim.eval(7.0), 10.0);
    /// ```
    pub fn seq_ease<G, A>(
        self,
        self_end: V,
        curve: Curve,
        ease_duration: V,
        next: A,
    ) -> Anim<impl Fun<T = V, V = V>>
    where
        G: Fun<T = V, V = V>,
        A: Into<Anim<G>>,
    {
        let next = next.into();
        let transition = tween(curve, self.eval(self_end), next.eval(V::zero())).over(ease_duration);

        self.seq(self_end, transition.0)
            .seq(self_end + ease_duration, next)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn value_scales_time_by_duration() {
        let tween = Tween {
            duration: 2.0f32,
            ..Tween::new(Curve::EaseOutCubic, 1.0, 3.0)
        };

        assert_approx_eq!(tween.value(1.0), Curve::EaseOutCubic.eval(1.0, 3.0, 0.5));
        assert_approx_eq!(tween.value(2.0), 3.0);
    }

    #[test]
    fn velocity_divides_by_duration() {
        let tween = Tween {
            duration: 4.0f64,
            ..Tween::new(Curve::Linear, 0.0, 2.0)
        };

        assert_approx_eq!(tween.velocity(1.0), 0.5);
        assert_approx_eq!(tween.velocity(3.0), 0.5);
    }

    #[test]
    fn instant_tween_jumps_to_end() {
        for &duration in &[0.0f32, -1.0, f32::NAN] {
            let anim = tween(Curve::Linear, 0.0f32, 1.0).over(duration);

            for &time in &[0.0, 0.5, 1.0] {
                assert_eq!(anim.eval(time), 1.0);
                assert_eq!(anim.velocity(time), 0.0);
            }
        }

        let anim = tween(Curve::EaseInOutElastic, 2.0f64, 5.0).over(0.0);
        assert_eq!(anim.eval(0.0), 5.0);
        assert!(anim.is_finished(0.0));
    }

    #[test]
    fn velocity_anim_tracks_curve_derivative() {
        let anim = tween(Curve::EaseInOutSine, 0.0f64, 1.0);
        let speed = anim.velocity();

        for &t in &[0.1, 0.4, 0.8] {
            assert_approx_eq!(speed.eval(t), Curve::EaseInOutSine.derivative(0.0, 1.0, t));
        }
    }
}
