use thiserror::Error;

/// Failure to resolve or build a curve from untyped input.
///
/// Evaluating a [`Curve`](crate::Curve) never fails; these errors only come
/// up at the edges, where a curve is picked by integer id or by name, or
/// where tunable parameters are supplied by the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("unknown curve id {0}")]
    UnknownId(u8),

    #[error("unknown curve name {0:?}")]
    UnknownName(String),

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
