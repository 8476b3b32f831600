use std::ops::{Add, Sub};

use crate::{Anim, Fun, Scalar, Tween};

/// An `Anim` together with the duration that it is intended to be played for.
///
/// Carrying the duration makes it possible to chain animations without
/// repeating where each one ends.
#[derive(Clone, Debug)]
pub struct AnimWithDur<F: Fun>(pub Anim<F>, pub F::T);

/// A [`Tween`] stretched over a known duration. See
/// [`Anim::over`](Anim::over).
pub type TweenWithDur<V> = AnimWithDur<Tween<V>>;

impl<F> Anim<F>
where
    F: Fun,
{
    /// Tag this animation with the duration that it is intended to be played
    /// for.
    ///
    /// The animation itself is not changed. Use [`Anim::over`] to stretch a
    /// tween to a duration.
    pub fn dur(self, t: F::T) -> AnimWithDur<F> {
        AnimWithDur(self, t)
    }
}

impl<F> AnimWithDur<F>
where
    F: Fun,
{
    pub fn eval(&self, t: F::T) -> F::V {
        self.0.eval(t)
    }
}

impl<F> AnimWithDur<F>
where
    F: Fun,
    F::T: Copy + PartialOrd,
{
    pub fn duration(&self) -> F::T {
        self.1
    }

    /// Whether the animation has played to its end at time `t`.
    pub fn is_finished(&self, t: F::T) -> bool {
        t >= self.1
    }
}

impl<F> AnimWithDur<F>
where
    F: Fun,
    F::T: Copy + PartialOrd + Sub<Output = F::T>,
{
    /// Play `next` once this animation has finished.
    pub fn seq<G>(self, next: Anim<G>) -> Anim<impl Fun<T = F::T, V = F::V>>
    where
        G: Fun<T = F::T, V = F::V>,
    {
        self.0.seq(self.1, next)
    }

    /// Play this animation in reverse over the same duration.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easeful::Curve;
    ///
    /// let anim = easeful::tween(Curve::EaseOutQuad, 0.0f32, 1.0).over(2.0).backwards();
    ///
    /// assert_approx_eq!(anim.eval(0.0), 1.0);
    /// assert_approx_eq!(anim.eval(2.0), 0.0);
    /// ```
    pub fn backwards(self) -> AnimWithDur<impl Fun<T = F::T, V = F::V>> {
        let dur = self.1;

        AnimWithDur(self.0.backwards(dur), dur)
    }
}

impl<F> AnimWithDur<F>
where
    F: Fun,
    F::T: Copy + PartialOrd + Sub<Output = F::T> + Add<Output = F::T>,
{
    /// Play `next` once this animation has finished, summing up the
    /// durations. See also [`seq_with_dur!`](crate::seq_with_dur).
    pub fn seq_with_dur<G>(self, next: AnimWithDur<G>) -> AnimWithDur<impl Fun<T = F::T, V = F::V>>
    where
        G: Fun<T = F::T, V = F::V>,
    {
        let dur = self.1 + next.1;

        AnimWithDur(self.seq(next.0), dur)
    }
}

impl<V: Scalar> TweenWithDur<V> {
    /// Rate of change at `time`, per unit of real time.
    ///
    /// This is the curve's derivative divided by the duration.
    pub fn velocity(&self, time: V) -> V {
        (self.0).0.velocity(time)
    }

    pub fn tween(&self) -> &Tween<V> {
        &(self.0).0
    }
}

/// Chain animations with durations one after another.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use easeful::Curve;
///
/// let anim = easeful::seq_with_dur!(
///     easeful::tween(Curve::EaseInQuad, 0.0f32, 1.0).over(1.0),
///     easeful::tween(Curve::EaseOutBounce, 1.0f32, 0.0).over(2.0),
///     easeful::tween(Curve::Linear, 0.0f32, 5.0).over(0.5),
/// );
///
/// assert_approx_eq!(anim.duration(), 3.5);
/// assert_approx_eq!(anim.eval(1.0), 1.0);
/// assert_approx_eq!(anim.eval(3.0), 0.0);
/// assert_approx_eq!(anim.eval(3.5), 5.0);
/// ```
#[macro_export]
macro_rules! seq_with_dur {
    (
        $expr:expr $(,)?
    ) => {
        $expr
    };

    (
        $head:expr,
        $($tail:expr $(,)?)+
    ) => {
        $head.seq_with_dur($crate::seq_with_dur!($($tail,)*))
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use crate::{tween, Curve};

    #[test]
    fn velocity_of_stretched_tween() {
        let anim = tween(Curve::EaseInOutCubic, 0.0f64, 10.0).over(5.0);

        assert_approx_eq!(anim.velocity(2.5), 3.0 * 10.0 / 5.0);
        assert_approx_eq!(anim.velocity(0.0), 0.0);
        assert_eq!(anim.tween().duration, 5.0);
    }

    #[test]
    fn finished_at_duration() {
        let anim = tween(Curve::EaseOutElastic, 0.0f32, 1.0).over(0.8);

        assert!(!anim.is_finished(0.79));
        assert!(anim.is_finished(0.8));
        assert_approx_eq!(anim.eval(0.8), 1.0);
    }

    #[test]
    fn seq_with_dur_sums_durations() {
        let anim = tween(Curve::Linear, 0.0f32, 1.0)
            .over(2.0)
            .seq_with_dur(tween(Curve::Linear, 1.0f32, 3.0).over(1.0));

        assert_approx_eq!(anim.duration(), 3.0);
        assert_approx_eq!(anim.eval(1.0), 0.5);
        assert_approx_eq!(anim.eval(2.5), 2.0);
    }
}
