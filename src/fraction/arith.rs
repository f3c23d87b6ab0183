
use super::{Fraction, ReciprocateZeroError};

use num::{BigInt, Integer, One, Signed, Zero};

use std::ops;

impl Fraction {
  /// The reciprocal of `self`. Fails on the zero fraction, whose
  /// reciprocal is undefined.
  pub fn recip(&self) -> Result<Fraction, ReciprocateZeroError> {
    if self.numer.is_zero() {
      return Err(ReciprocateZeroError { value: self.to_string(), _priv: () });
    }
    // The fields are already coprime, so swapping them only requires
    // moving the sign back into the numerator.
    let mut numer = self.denom.clone();
    let mut denom = self.numer.clone();
    if denom.is_negative() {
      numer = -numer;
      denom = -denom;
    }
    Ok(Fraction::from_parts(numer, denom))
  }

  /// Divides `self` by `other`. Fails when `other` is zero, carrying
  /// the same error as [`Fraction::recip`].
  pub fn checked_div(&self, other: &Fraction) -> Result<Fraction, ReciprocateZeroError> {
    Ok(self * &other.recip()?)
  }

  /// The largest integer less than or equal to `self`.
  ///
  /// Truncating division rounds toward zero, which overshoots the
  /// floor exactly when the division is inexact and the value is
  /// negative. The denominator is strictly positive, so the remainder
  /// carries the numerator's sign and a negative remainder detects
  /// precisely that case.
  pub fn floor(&self) -> BigInt {
    let (quotient, remainder) = self.numer.div_rem(&self.denom);
    if remainder.is_negative() {
      quotient - BigInt::one()
    } else {
      quotient
    }
  }

  /// The smallest integer greater than or equal to `self`.
  pub fn ceil(&self) -> BigInt {
    let (quotient, remainder) = self.numer.div_rem(&self.denom);
    if remainder.is_positive() {
      quotient + BigInt::one()
    } else {
      quotient
    }
  }
}

/// Negation preserves canonical form directly: the denominator is
/// untouched and coprimality is symmetric in sign.
impl ops::Neg for Fraction {
  type Output = Fraction;

  fn neg(self) -> Fraction {
    Fraction::from_parts(-self.numer, self.denom)
  }
}

impl ops::Neg for &Fraction {
  type Output = Fraction;

  fn neg(self) -> Fraction {
    (*self).clone().neg()
  }
}

impl ops::Add for Fraction {
  type Output = Fraction;

  fn add(self, other: Fraction) -> Fraction {
    let numer = &self.numer * &other.denom + &self.denom * &other.numer;
    let denom = self.denom * other.denom;
    Fraction::reduced(numer, denom)
  }
}

impl ops::Add for &Fraction {
  type Output = Fraction;

  fn add(self, other: &Fraction) -> Fraction {
    (*self).clone() + (*other).clone()
  }
}

impl ops::Sub for Fraction {
  type Output = Fraction;

  fn sub(self, other: Fraction) -> Fraction {
    self + (-other)
  }
}

impl ops::Sub for &Fraction {
  type Output = Fraction;

  fn sub(self, other: &Fraction) -> Fraction {
    (*self).clone() - (*other).clone()
  }
}

impl ops::Mul for Fraction {
  type Output = Fraction;

  fn mul(self, other: Fraction) -> Fraction {
    let numer = self.numer * other.numer;
    let denom = self.denom * other.denom;
    Fraction::reduced(numer, denom)
  }
}

impl ops::Mul for &Fraction {
  type Output = Fraction;

  fn mul(self, other: &Fraction) -> Fraction {
    (*self).clone() * (*other).clone()
  }
}
