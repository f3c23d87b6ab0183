
//! Exact rational arithmetic over arbitrary-precision integers.
//!
//! The [`Fraction`] type stores a rational number in canonical form: the
//! denominator is strictly positive and shares no common factor with the
//! numerator. Every operation preserves that form, so equality on the two
//! integer fields coincides with equality of the represented value.

// The #[non_exhaustive] attribute applies at the crate-level, and I
// want module-level restrictions, which are far stricter.
#![allow(clippy::manual_non_exhaustive)]

pub mod fraction;

pub use fraction::Fraction;
