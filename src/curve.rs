//! The [`Curve`] enum, naming every built-in curve, and the table that
//! resolves each one to its value and derivative functions.
//!
//! A `Curve` can be stored by integer id or by name, and classified by
//! [`Family`] and [`Direction`].

use strum_macros::{Display, EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::{clamp01, derivative, ease, CurveError, Scalar};

/// Signature shared by all curve and derivative functions:
/// `(start, end, t) -> value`.
pub type EaseFn<V> = fn(V, V, V) -> V;

/// The two functions a [`Curve`] resolves to.
#[derive(Clone, Copy, Debug)]
pub struct CurveFns<V> {
    pub value: EaseFn<V>,
    pub derivative: EaseFn<V>,
}

impl<V> CurveFns<V> {
    pub fn new(value: EaseFn<V>, derivative: EaseFn<V>) -> Self {
        CurveFns { value, derivative }
    }
}

/// Identifies one of the built-in easing curves.
///
/// The integer ids (see [`Curve::id`]) and names are stable, so a `Curve`
/// can be stored as either.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use easeful::Curve;
///
/// let curve: Curve = "easeoutbounce".parse().unwrap();
/// assert_eq!(curve, Curve::EaseOutBounce);
/// assert_eq!(curve.id(), 24);
/// assert_eq!(curve.to_string(), "EaseOutBounce");
///
/// assert_approx_eq!(curve.eval(0.0f32, 1.0, 1.0), 1.0);
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Curve {
    #[default]
    Linear = 0,
    Spring,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
}

/// The shape a [`Curve`] is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    Linear,
    Spring,
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Expo,
    Circ,
    Bounce,
    Back,
    Elastic,
}

/// Where a [`Curve`] applies its shape: at the start, at the end, or both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    In,
    Out,
    InOut,
}

impl Curve {
    /// Look up the value and derivative functions of this curve.
    pub fn functions<V: Scalar>(self) -> CurveFns<V> {
        use Curve::*;

        match self {
            Linear => CurveFns::new(ease::linear, derivative::linear),
            Spring => CurveFns::new(ease::spring, derivative::spring),
            EaseInQuad => CurveFns::new(ease::ease_in_quad, derivative::ease_in_quad),
            EaseOutQuad => CurveFns::new(ease::ease_out_quad, derivative::ease_out_quad),
            EaseInOutQuad => CurveFns::new(ease::ease_in_out_quad, derivative::ease_in_out_quad),
            EaseInCubic => CurveFns::new(ease::ease_in_cubic, derivative::ease_in_cubic),
            EaseOutCubic => CurveFns::new(ease::ease_out_cubic, derivative::ease_out_cubic),
            EaseInOutCubic => CurveFns::new(ease::ease_in_out_cubic, derivative::ease_in_out_cubic),
            EaseInQuart => CurveFns::new(ease::ease_in_quart, derivative::ease_in_quart),
            EaseOutQuart => CurveFns::new(ease::ease_out_quart, derivative::ease_out_quart),
            EaseInOutQuart => CurveFns::new(ease::ease_in_out_quart, derivative::ease_in_out_quart),
            EaseInQuint => CurveFns::new(ease::ease_in_quint, derivative::ease_in_quint),
            EaseOutQuint => CurveFns::new(ease::ease_out_quint, derivative::ease_out_quint),
            EaseInOutQuint => CurveFns::new(ease::ease_in_out_quint, derivative::ease_in_out_quint),
            EaseInSine => CurveFns::new(ease::ease_in_sine, derivative::ease_in_sine),
            EaseOutSine => CurveFns::new(ease::ease_out_sine, derivative::ease_out_sine),
            EaseInOutSine => CurveFns::new(ease::ease_in_out_sine, derivative::ease_in_out_sine),
            EaseInExpo => CurveFns::new(ease::ease_in_expo, derivative::ease_in_expo),
            EaseOutExpo => CurveFns::new(ease::ease_out_expo, derivative::ease_out_expo),
            EaseInOutExpo => CurveFns::new(ease::ease_in_out_expo, derivative::ease_in_out_expo),
            EaseInCirc => CurveFns::new(ease::ease_in_circ, derivative::ease_in_circ),
            EaseOutCirc => CurveFns::new(ease::ease_out_circ, derivative::ease_out_circ),
            EaseInOutCirc => CurveFns::new(ease::ease_in_out_circ, derivative::ease_in_out_circ),
            EaseInBounce => CurveFns::new(ease::ease_in_bounce, derivative::ease_in_bounce),
            EaseOutBounce => CurveFns::new(ease::ease_out_bounce, derivative::ease_out_bounce),
            EaseInOutBounce => CurveFns::new(ease::ease_in_out_bounce, derivative::ease_in_out_bounce),
            EaseInBack => CurveFns::new(ease::ease_in_back, derivative::ease_in_back),
            EaseOutBack => CurveFns::new(ease::ease_out_back, derivative::ease_out_back),
            EaseInOutBack => CurveFns::new(ease::ease_in_out_back, derivative::ease_in_out_back),
            EaseInElastic => CurveFns::new(ease::ease_in_elastic, derivative::ease_in_elastic),
            EaseOutElastic => CurveFns::new(ease::ease_out_elastic, derivative::ease_out_elastic),
            EaseInOutElastic => CurveFns::new(ease::ease_in_out_elastic, derivative::ease_in_out_elastic),
        }
    }

    pub fn value_fn<V: Scalar>(self) -> EaseFn<V> {
        self.functions().value
    }

    pub fn derivative_fn<V: Scalar>(self) -> EaseFn<V> {
        self.functions().derivative
    }

    /// Evaluate the curve between `start` and `end` at `t`.
    pub fn eval<V: Scalar>(self, start: V, end: V, t: V) -> V {
        (self.value_fn())(start, end, t)
    }

    /// Evaluate the derivative of the curve with respect to `t`.
    pub fn derivative<V: Scalar>(self, start: V, end: V, t: V) -> V {
        (self.derivative_fn())(start, end, t)
    }

    /// Like [`eval`](Curve::eval), but with `t` clamped to `[0, 1]`, so that
    /// the curve holds `start` before and `end` after.
    pub fn eval_clamped<V: Scalar>(self, start: V, end: V, t: V) -> V {
        self.eval(start, end, clamp01(t))
    }

    /// The derivative of [`eval_clamped`](Curve::eval_clamped): zero outside
    /// of `[0, 1]`.
    pub fn derivative_clamped<V: Scalar>(self, start: V, end: V, t: V) -> V {
        if t < V::zero() || t > V::one() {
            V::zero()
        } else {
            self.derivative(start, end, t)
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Result<Self, CurveError> {
        Curve::from_repr(id).ok_or(CurveError::UnknownId(id))
    }

    /// Parse a curve from its name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, CurveError> {
        name.parse()
            .map_err(|_| CurveError::UnknownName(name.to_owned()))
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn family(self) -> Family {
        use Curve::*;

        match self {
            Linear => Family::Linear,
            Spring => Family::Spring,
            EaseInQuad | EaseOutQuad | EaseInOutQuad => Family::Quad,
            EaseInCubic | EaseOutCubic | EaseInOutCubic => Family::Cubic,
            EaseInQuart | EaseOutQuart | EaseInOutQuart => Family::Quart,
            EaseInQuint | EaseOutQuint | EaseInOutQuint => Family::Quint,
            EaseInSine | EaseOutSine | EaseInOutSine => Family::Sine,
            EaseInExpo | EaseOutExpo | EaseInOutExpo => Family::Expo,
            EaseInCirc | EaseOutCirc | EaseInOutCirc => Family::Circ,
            EaseInBounce | EaseOutBounce | EaseInOutBounce => Family::Bounce,
            EaseInBack | EaseOutBack | EaseInOutBack => Family::Back,
            EaseInElastic | EaseOutElastic | EaseInOutElastic => Family::Elastic,
        }
    }

    /// `None` for [`Curve::Linear`] and [`Curve::Spring`].
    pub fn direction(self) -> Option<Direction> {
        use Curve::*;

        match self {
            Linear | Spring => None,
            EaseInQuad | EaseInCubic | EaseInQuart | EaseInQuint | EaseInSine | EaseInExpo
            | EaseInCirc | EaseInBounce | EaseInBack | EaseInElastic => Some(Direction::In),
            EaseOutQuad | EaseOutCubic | EaseOutQuart | EaseOutQuint | EaseOutSine
            | EaseOutExpo | EaseOutCirc | EaseOutBounce | EaseOutBack | EaseOutElastic => {
                Some(Direction::Out)
            }
            EaseInOutQuad | EaseInOutCubic | EaseInOutQuart | EaseInOutQuint | EaseInOutSine
            | EaseInOutExpo | EaseInOutCirc | EaseInOutBounce | EaseInOutBack
            | EaseInOutElastic => Some(Direction::InOut),
        }
    }

    /// Whether the curve stays between `start` and `end` for `t` in `[0, 1]`.
    ///
    /// Spring, back and elastic curves deliberately move past their ends.
    pub fn is_bounded(self) -> bool {
        !matches!(self.family(), Family::Spring | Family::Back | Family::Elastic)
    }
}

impl TryFrom<u8> for Curve {
    type Error = CurveError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Curve::from_id(id)
    }
}

impl From<Curve> for u8 {
    fn from(curve: Curve) -> u8 {
        curve.id()
    }
}
