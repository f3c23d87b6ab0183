
use thiserror::Error;

/// Error produced when constructing a [`Fraction`](super::Fraction)
/// with a zero denominator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("denominator of a fraction cannot be zero")]
#[non_exhaustive]
pub struct ZeroDenominatorError {}

/// Error produced when taking the reciprocal of the zero fraction,
/// directly or through division. Carries the textual form of the
/// offending value for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot reciprocate fraction with value {value}")]
pub struct ReciprocateZeroError {
  pub value: String,
  pub(super) _priv: (),
}
