//! Easeful is a collection of easing curves: closed-form functions that
//! shape how a value moves from `start` to `end` as a normalized parameter
//! `t` goes from zero to one. Every curve also comes with its analytic
//! derivative, so that the speed of an eased value is available without
//! finite differencing.
//!
//! Curves are picked with the [`Curve`] enum and evaluated through
//! [`evaluate`] and [`evaluate_derivative`], or called directly from the
//! [`ease`] and [`derivative`] modules. All functions are generic over
//! [`Scalar`], which covers `f32` and `f64`.
//!
//! For animation code, [`tween()`] turns a curve into an [`Anim`] that can be
//! composed with other animations over time.
//!
//! ## Examples
//!
//! ```rust
//! # use assert_approx_eq::assert_approx_eq;
//! use easeful::Curve;
//!
//! // Evaluate a curve halfway between 0 and 10
//! let value = easeful::evaluate(Curve::EaseInQuad, 0.0f32, 10.0, 0.5);
//! assert_approx_eq!(value, 2.5);
//!
//! // The rate of change at the same point
//! let slope = easeful::evaluate_derivative(Curve::EaseInQuad, 0.0f32, 10.0, 0.5);
//! assert_approx_eq!(slope, 10.0);
//!
//! // Curves coming from untyped data are resolved explicitly
//! assert!(easeful::try_evaluate(Curve::EaseOutBounce.id(), 0.0f32, 1.0, 0.5).is_ok());
//! assert!(easeful::try_evaluate(99, 0.0f32, 1.0, 0.5).is_err());
//!
//! // Tweens are animations: bounce into place within two seconds, then stay
//! let anim = easeful::tween(Curve::EaseOutBounce, 0.0f32, 100.0)
//!     .over(2.0)
//!     .seq(easeful::constant(100.0));
//!
//! assert_approx_eq!(anim.eval(0.0), 0.0);
//! assert_approx_eq!(anim.eval(5.0), 100.0);
//! ```

use num_traits::{Float, FloatConst};

mod anim;
mod anim_with_dur;
mod curve;
pub mod derivative;
pub mod ease;
mod error;
mod params;
mod tween;

pub use anim::{constant, fun, Anim, Constant, Fun, Switch};
pub use anim_with_dur::{AnimWithDur, TweenWithDur};
pub use curve::{Curve, CurveFns, Direction, EaseFn, Family};
pub use error::CurveError;
pub use params::{Back, Elastic, DEFAULT_OVERSHOOT, DEFAULT_PERIOD, IN_OUT_OVERSHOOT_SCALE};
pub use tween::{tween, Tween};

pub use strum::{EnumCount, IntoEnumIterator};

/// The numeric types curves can be evaluated with.
///
/// Implemented for every type that is a [`Float`] with [`FloatConst`]s and
/// that can represent the single-precision constants the curves are defined
/// with. In practice: `f32` and `f64`.
pub trait Scalar: Float + FloatConst + From<f32> {}

impl<V> Scalar for V where V: Float + FloatConst + From<f32> {}

pub(crate) fn lit<V: Scalar>(x: f32) -> V {
    <V as From<f32>>::from(x)
}

pub(crate) fn clamp01<V: Scalar>(t: V) -> V {
    t.max(V::zero()).min(V::one())
}

/// Evaluate `curve` between `start` and `end` at `t`.
pub fn evaluate<V: Scalar>(curve: Curve, start: V, end: V, t: V) -> V {
    curve.eval(start, end, t)
}

/// Evaluate the derivative of `curve` with respect to `t`.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use easeful::Curve;
///
/// // Linear curves move at a constant rate
/// assert_approx_eq!(easeful::evaluate_derivative(Curve::Linear, 2.0f32, 5.0, 0.1), 3.0);
/// assert_approx_eq!(easeful::evaluate_derivative(Curve::Linear, 2.0f32, 5.0, 0.9), 3.0);
/// ```
pub fn evaluate_derivative<V: Scalar>(curve: Curve, start: V, end: V, t: V) -> V {
    curve.derivative(start, end, t)
}

/// Evaluate the curve with the given integer id.
///
/// Fails with [`CurveError::UnknownId`] if `id` does not name a curve.
pub fn try_evaluate<V: Scalar>(id: u8, start: V, end: V, t: V) -> Result<V, CurveError> {
    Ok(Curve::from_id(id)?.eval(start, end, t))
}

/// Evaluate the derivative of the curve with the given integer id.
pub fn try_evaluate_derivative<V: Scalar>(
    id: u8,
    start: V,
    end: V,
    t: V,
) -> Result<V, CurveError> {
    Ok(Curve::from_id(id)?.derivative(start, end, t))
}

/// Evaluate the curve with the given integer id, returning zero if there is
/// no such curve.
///
/// This is for callers that store curve ids in formats where a lookup
/// failure cannot be reported. Unknown ids are logged as a warning. Prefer
/// [`try_evaluate`] everywhere else.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// assert_approx_eq!(easeful::evaluate_id_or_zero(2, 0.0f32, 10.0, 0.5), 2.5);
/// assert_eq!(easeful::evaluate_id_or_zero(200, 3.0f32, 10.0, 0.5), 0.0);
/// ```
pub fn evaluate_id_or_zero<V: Scalar>(id: u8, start: V, end: V, t: V) -> V {
    try_evaluate(id, start, end, t).unwrap_or_else(|err| {
        log::warn!("{}, evaluating to zero", err);
        V::zero()
    })
}
