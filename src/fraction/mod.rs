
mod arith;
mod error;

pub use error::{ReciprocateZeroError, ZeroDenominatorError};

use num::{BigInt, Integer, One, Signed, Zero};
use once_cell::sync::{Lazy, OnceCell};

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

/// An exact rational number, stored as a ratio of two
/// arbitrary-precision integers.
///
/// Every `Fraction` is kept in canonical form: the denominator is
/// strictly positive, the numerator and denominator are coprime, and
/// the zero value is always represented as `0/1`. The only way to
/// build a `Fraction` is through a canonicalizing constructor, and no
/// operation mutates an existing value, so the invariant can never be
/// broken after construction.
#[derive(Clone)]
pub struct Fraction {
  numer: BigInt,
  denom: BigInt,
  // Memoized Display output. Not logical state: equality, hashing,
  // and ordering must never look at this field.
  cached_display: OnceCell<String>,
}

impl Fraction {
  /// Produces the canonical fraction `numer / denom`.
  ///
  /// The denominator may be negative, in which case the sign moves to
  /// the numerator. A zero numerator always produces the canonical
  /// zero value `0/1`, regardless of the denominator given. Fails if
  /// the denominator is zero.
  ///
  /// # Examples
  ///
  /// ```
  /// # use fraction::Fraction;
  /// assert_eq!(Fraction::new(2, 4).unwrap(), Fraction::half());
  /// assert_eq!(Fraction::new(1, -2).unwrap(), Fraction::new(-1, 2).unwrap());
  /// assert!(Fraction::new(1, 0).is_err());
  /// ```
  pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Fraction, ZeroDenominatorError> {
    let denom = denom.into();
    if denom.is_zero() {
      return Err(ZeroDenominatorError {});
    }
    Ok(Fraction::reduced(numer.into(), denom))
  }

  /// Produces the fraction `n / 1`.
  pub fn from_integer(n: impl Into<BigInt>) -> Fraction {
    Fraction::from_parts(n.into(), BigInt::one())
  }

  /// The value `1/2`.
  pub fn half() -> Fraction {
    static HALF: Lazy<Fraction> = Lazy::new(|| Fraction::from_parts(BigInt::one(), BigInt::from(2)));
    HALF.clone()
  }

  /// The value `1/4`.
  pub fn quarter() -> Fraction {
    static QUARTER: Lazy<Fraction> = Lazy::new(|| Fraction::from_parts(BigInt::one(), BigInt::from(4)));
    QUARTER.clone()
  }

  /// The numerator, in canonical form. Carries the sign of the value.
  pub fn numer(&self) -> &BigInt {
    &self.numer
  }

  /// The denominator, in canonical form. Always strictly positive.
  pub fn denom(&self) -> &BigInt {
    &self.denom
  }

  /// Returns true if the denominator is one.
  pub fn is_integer(&self) -> bool {
    self.denom.is_one()
  }

  /// The value as an integer, if the denominator is one.
  pub fn to_integer(&self) -> Option<BigInt> {
    if self.is_integer() {
      Some(self.numer.clone())
    } else {
      None
    }
  }

  /// The absolute value of `self`.
  pub fn abs(&self) -> Fraction {
    Fraction::from_parts(self.numer.abs(), self.denom.clone())
  }

  /// The sign of the value, as an integer: -1, 0, or 1.
  pub fn signum(&self) -> BigInt {
    self.numer.signum()
  }

  pub fn is_positive(&self) -> bool {
    self.numer.is_positive()
  }

  pub fn is_negative(&self) -> bool {
    self.numer.is_negative()
  }

  /// Builds a fraction from fields already known to be canonical.
  /// Every constructor bottoms out here.
  fn from_parts(numer: BigInt, denom: BigInt) -> Fraction {
    Fraction { numer, denom, cached_display: OnceCell::new() }
  }

  /// Canonicalizes a numerator-denominator pair. The denominator must
  /// be nonzero; callers are responsible for having checked that.
  fn reduced(mut numer: BigInt, mut denom: BigInt) -> Fraction {
    if numer.is_zero() {
      return Fraction::from_parts(BigInt::zero(), BigInt::one());
    }
    if denom.is_negative() {
      numer = -numer;
      denom = -denom;
    }
    let gcd = numer.gcd(&denom);
    Fraction::from_parts(numer / &gcd, denom / gcd)
  }
}

/// Constructs an integer fraction from an `i32`.
impl From<i32> for Fraction {
  fn from(n: i32) -> Fraction {
    Fraction::from_integer(n)
  }
}

/// Constructs an integer fraction from an `i64`.
impl From<i64> for Fraction {
  fn from(n: i64) -> Fraction {
    Fraction::from_integer(n)
  }
}

/// Constructs an integer fraction from an arbitrary-sized `BigInt`.
impl From<BigInt> for Fraction {
  fn from(n: BigInt) -> Fraction {
    Fraction::from_integer(n)
  }
}

impl Default for Fraction {
  fn default() -> Fraction {
    Fraction::zero()
  }
}

/// Two fractions are equal iff their fields are equal. Since every
/// live value is canonical, this coincides with equality of the
/// represented rational number.
impl PartialEq for Fraction {
  fn eq(&self, other: &Fraction) -> bool {
    self.numer == other.numer && self.denom == other.denom
  }
}

impl Eq for Fraction {}

/// Hashes the two integer fields and nothing else, consistent with
/// `PartialEq`. The display cache never participates.
impl Hash for Fraction {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.numer.hash(state);
    self.denom.hash(state);
  }
}

/// Total order on the represented value: the sign of `self - other`.
/// The difference is canonical, so its denominator is positive and
/// the numerator's sign is the sign of the value.
impl Ord for Fraction {
  fn cmp(&self, other: &Fraction) -> Ordering {
    let difference = self - other;
    difference.numer.cmp(&BigInt::zero())
  }
}

impl PartialOrd for Fraction {
  fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Zero for Fraction {
  fn zero() -> Fraction {
    Fraction::from_parts(BigInt::zero(), BigInt::one())
  }
  fn is_zero(&self) -> bool {
    self.numer.is_zero()
  }
}

impl One for Fraction {
  fn one() -> Fraction {
    Fraction::from_parts(BigInt::one(), BigInt::one())
  }
  fn is_one(&self) -> bool {
    self.numer.is_one() && self.denom.is_one()
  }
}

/// Prints `"numer"` when the denominator is one, `"numer/denom"`
/// otherwise. The text is computed once per value and memoized; the
/// fields are immutable, so recomputation would always produce the
/// same string, and a racing first call merely does the formatting
/// work twice.
impl Display for Fraction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let text = self.cached_display.get_or_init(|| {
      if self.denom.is_one() {
        self.numer.to_string()
      } else {
        format!("{}/{}", self.numer, self.denom)
      }
    });
    f.write_str(text)
  }
}

impl Debug for Fraction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Fraction")
      .field("numer", &self.numer)
      .field("denom", &self.denom)
      .finish()
  }
}
