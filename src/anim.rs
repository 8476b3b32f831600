use std::marker::PhantomData;
use std::ops::Sub;

use num_traits::{One, Zero};

use crate::{Curve, Scalar};

/// A `Fun` maps from some input type `T` to an output type `V`.
///
/// `T` usually stands for time and `V` for a value that changes over time.
/// [`Tween`](crate::Tween) is the `Fun` this crate is built around.
pub trait Fun {
    /// The function's input type. Usually time.
    type T;

    /// The function's output type.
    type V;

    /// Evaluate the function at time `t`.
    fn eval(&self, t: Self::T) -> Self::V;
}

impl<'a, F> Fun for &'a F
where
    F: Fun,
{
    type T = F::T;
    type V = F::V;

    fn eval(&self, t: Self::T) -> Self::V {
        (*self).eval(t)
    }
}

/// A wrapper around any type implementing [`Fun`].
///
/// `Anim` provides the methods that chain eased tweens in time: sequencing,
/// delaying, holding, reversing and reshaping time with a [`Curve`].
#[derive(Clone, Debug)]
pub struct Anim<F>(pub F);

impl<F> Anim<F>
where
    F: Fun,
{
    /// Evaluate the animation at time `t`.
    pub fn eval(&self, t: F::T) -> F::V {
        self.0.eval(t)
    }

    /// Apply `f` to every value of the animation.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easeful::Curve;
    ///
    /// let degrees = easeful::tween(Curve::EaseInOutSine, 0.0f32, 180.0);
    /// let radians = degrees.map(f32::to_radians);
    ///
    /// assert_approx_eq!(radians.eval(1.0), std::f32::consts::PI);
    /// ```
    pub fn map<W>(self, f: impl Fn(F::V) -> W) -> Anim<impl Fun<T = F::T, V = W>> {
        fun(move |t| f(self.eval(t)))
    }

    /// Pass time through `f` before evaluating the animation.
    ///
    /// # Example
    /// Run a tween two times slower:
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easeful::Curve;
    ///
    /// let anim = easeful::tween(Curve::EaseOutCubic, 0.0f32, 1.0);
    /// let slower = anim.as_ref().map_time(|t: f32| t / 2.0);
    ///
    /// assert_approx_eq!(slower.eval(1.0), anim.eval(0.5));
    /// ```
    pub fn map_time<S>(self, f: impl Fn(S) -> F::T) -> Anim<impl Fun<T = S, V = F::V>> {
        fun(move |s| self.eval(f(s)))
    }

    /// Borrow the animation, so that it can be composed without being
    /// consumed.
    pub fn as_ref(&self) -> Anim<&F> {
        Anim(&self.0)
    }
}

impl<F> Anim<F>
where
    F: Fun,
    F::T: Copy + Sub<Output = F::T>,
{
    /// Delay the animation by `delay`.
    pub fn shift_time(self, delay: F::T) -> Anim<impl Fun<T = F::T, V = F::V>> {
        self.map_time(move |t: F::T| t - delay)
    }

    /// Play the animation in time `[0 .. end]` in reverse.
    pub fn backwards(self, end: F::T) -> Anim<impl Fun<T = F::T, V = F::V>> {
        self.map_time(move |t: F::T| end - t)
    }
}

impl<F> Anim<F>
where
    F: Fun,
    F::T: Copy + PartialOrd,
{
    /// Use `self` before time `at`, and `next` from `at` on. `next` sees the
    /// same time as `self`.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easeful::Curve;
    ///
    /// // Bounce for half a second, then jump back to the start
    /// let anim = easeful::tween(Curve::EaseOutBounce, 0.0f32, 1.0)
    ///     .switch(0.5, 0.0);
    ///
    /// assert!(anim.eval(0.4) > 0.0);
    /// assert_eq!(anim.eval(0.5), 0.0);
    /// ```
    pub fn switch<G, A>(self, at: F::T, next: A) -> Anim<Switch<F, G>>
    where
        G: Fun<T = F::T, V = F::V>,
        A: Into<Anim<G>>,
    {
        Anim(Switch {
            before: self.0,
            at,
            after: next.into().0,
        })
    }
}

/// Two animations joined at a point in time. See [`Anim::switch`].
#[derive(Clone, Debug)]
pub struct Switch<F: Fun, G> {
    before: F,
    at: F::T,
    after: G,
}

impl<F, G> Fun for Switch<F, G>
where
    F: Fun,
    F::T: Copy + PartialOrd,
    G: Fun<T = F::T, V = F::V>,
{
    type T = F::T;
    type V = F::V;

    fn eval(&self, t: F::T) -> F::V {
        if t < self.at {
            self.before.eval(t)
        } else {
            self.after.eval(t)
        }
    }
}

impl<F> Anim<F>
where
    F: Fun,
    F::T: Copy + PartialOrd,
    F::V: Copy,
{
    /// Play the animation until `end`, then rest at its value there.
    ///
    /// Curves keep extrapolating past `t = 1`, so a tween that should stay
    /// at its end value is usually held there.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easeful::Curve;
    ///
    /// let anim = easeful::tween(Curve::EaseInCubic, 0.0f32, 2.0).hold(1.0);
    ///
    /// assert_approx_eq!(anim.eval(1.0), 2.0);
    /// assert_approx_eq!(anim.eval(3.0), 2.0);
    /// ```
    pub fn hold(self, end: F::T) -> Anim<impl Fun<T = F::T, V = F::V>> {
        let rest = self.eval(end);

        self.switch(end, constant(rest))
    }
}

impl<F> Anim<F>
where
    F: Fun,
    F::T: Copy + PartialOrd + Sub<Output = F::T>,
{
    /// Play `self` until `self_end`, then `next`, which sees time starting
    /// at zero.
    ///
    /// # Example
    /// Ease in, then ease back out:
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easeful::Curve;
    ///
    /// let there = easeful::tween(Curve::EaseInQuad, 0.0f32, 4.0);
    /// let back = easeful::tween(Curve::EaseOutQuad, 4.0f32, 0.0);
    /// let anim = there.seq(1.0, back);
    ///
    /// assert_approx_eq!(anim.eval(0.5), 1.0);
    /// assert_approx_eq!(anim.eval(1.0), 4.0);
    /// assert_approx_eq!(anim.eval(1.5), 1.0);
    /// ```
    pub fn seq<G, A>(self, self_end: F::T, next: A) -> Anim<impl Fun<T = F::T, V = F::V>>
    where
        G: Fun<T = F::T, V = F::V>,
        A: Into<Anim<G>>,
    {
        self.switch(self_end, next.into().shift_time(self_end))
    }
}

impl<F> Anim<F>
where
    F: Fun,
    F::T: Scalar,
{
    /// Reshape the time of an animation with an easing curve, so that time
    /// `[0 .. 1]` is traversed along `curve` instead of linearly.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use easeful::Curve;
    ///
    /// let linear = easeful::tween(Curve::Linear, 10.0f64, 20.0);
    /// let eased = linear.ease(Curve::EaseInQuad);
    ///
    /// assert_approx_eq!(eased.eval(0.5), 12.5);
    /// assert_approx_eq!(eased.eval(1.0), 20.0);
    /// ```
    pub fn ease(self, curve: Curve) -> Anim<impl Fun<T = F::T, V = F::V>> {
        self.map_time(move |t: F::T| {
            curve.eval(<F::T as Zero>::zero(), <F::T as One>::one(), t)
        })
    }
}

/// Turn any function `Fn(T) -> V` into an [`Anim`].
pub fn fun<T, V>(f: impl Fn(T) -> V) -> Anim<impl Fun<T = T, V = V>> {
    Anim(FromFn(f, PhantomData))
}

/// An animation that always returns `value`.
///
/// Plain values convert into constant animations wherever an animation is
/// expected, as in `tween(..).switch(0.5, 0.0)`.
///
/// # Example
/// ```
/// let anim = easeful::constant::<f32, f32>(3.0);
///
/// assert_eq!(anim.eval(-1.0), 3.0);
/// assert_eq!(anim.eval(100.0), 3.0);
/// ```
pub fn constant<T, V: Copy>(value: V) -> Anim<Constant<T, V>> {
    Anim(Constant(value, PhantomData))
}

struct FromFn<T, V, F: Fn(T) -> V>(F, PhantomData<(T, V)>);

impl<T, V, F> Fun for FromFn<T, V, F>
where
    F: Fn(T) -> V,
{
    type T = T;
    type V = V;

    fn eval(&self, t: T) -> V {
        self.0(t)
    }
}

/// See [`constant`].
#[derive(Debug, Clone, Copy)]
pub struct Constant<T, V>(V, PhantomData<T>);

impl<T, V: Copy> Fun for Constant<T, V> {
    type T = T;
    type V = V;

    fn eval(&self, _t: T) -> V {
        self.0
    }
}

impl<T, V: Copy> From<V> for Anim<Constant<T, V>> {
    fn from(value: V) -> Self {
        constant(value)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::tween;

    #[test]
    fn switch_uses_same_time() {
        let anim = tween(Curve::Linear, 0.0f32, 1.0).switch(0.5, tween(Curve::Linear, 10.0, 11.0));

        assert_approx_eq!(anim.eval(0.25), 0.25);
        assert_approx_eq!(anim.eval(0.75), 10.75);
    }

    #[test]
    fn seq_shifts_time_of_next() {
        let anim = constant(1.0f64).seq(2.0, tween(Curve::EaseInQuad, 0.0, 1.0));

        assert_approx_eq!(anim.eval(1.0), 1.0);
        assert_approx_eq!(anim.eval(2.0), 0.0);
        assert_approx_eq!(anim.eval(2.5), 0.25);
    }

    #[test]
    fn hold_rests_past_overshoot() {
        let anim = tween(Curve::EaseOutBack, 0.0f64, 1.0).hold(1.0);

        assert!(anim.eval(0.8) > 1.0);
        assert_approx_eq!(anim.eval(1.0), 1.0);
        assert_approx_eq!(anim.eval(1.5), 1.0);
    }

    #[test]
    fn backwards_reverses_motion() {
        let anim = tween(Curve::EaseInCubic, 0.0f32, 1.0).backwards(1.0);

        assert_approx_eq!(anim.eval(0.0), 1.0);
        assert_approx_eq!(anim.eval(1.0), 0.0);
        assert_approx_eq!(anim.eval(0.5), 0.125);
    }

    #[test]
    fn ease_composes_curves() {
        let anim = tween(Curve::EaseInQuad, 0.0f64, 1.0).ease(Curve::EaseInQuad);

        assert_approx_eq!(anim.eval(0.5), 0.0625);
    }

    #[test]
    fn ease_reshapes_time_without_overshoot_clamp() {
        // Back curves dip below zero, so the eased tween runs briefly backwards.
        let anim = tween(Curve::Linear, 0.0f32, 10.0).ease(Curve::EaseInBack);

        assert!(anim.eval(0.2) < 0.0);
        assert_approx_eq!(anim.eval(1.0), 10.0);
    }

    #[test]
    fn map_applies_to_values() {
        let anim = tween(Curve::EaseInOutQuad, 0.0f32, 4.0).map(|v| v * 2.0);

        assert_approx_eq!(anim.eval(0.5), 4.0);
    }
}
