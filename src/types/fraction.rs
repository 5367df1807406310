// src/types/fraction.rs

use crate::error::{FractionError, Result};
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use std::cmp::Ordering;
use std::ops::{Mul, MulAssign};

/// Non-negative rational number kept in lowest terms.
///
/// Zero is stored as `0/1`. Every constructor and every arithmetic operation
/// reduces its result, so the derived `PartialEq` and `Hash` compare reduced
/// pairs and two fractions are equal exactly when they denote the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numerator: 0, denominator: 1 };
    pub const ONE: Fraction = Fraction { numerator: 1, denominator: 1 };

    /// Creates `numerator/denominator` in reduced form.
    ///
    /// Fails with [`FractionError::ZeroDenominator`] when `denominator` is 0.
    pub fn new(numerator: u64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        let (numerator, denominator) = reduce(numerator as u128, denominator as u128)?;
        Ok(Fraction { numerator, denominator })
    }

    /// `value/1`, already in lowest terms.
    pub const fn from_integer(value: u64) -> Self {
        Fraction { numerator: value, denominator: 1 }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Multiplies the numerator by `numerator_factor` and the denominator by
    /// `denominator_factor`, then reduces.
    ///
    /// This is the only place where arithmetic results get reduced. The
    /// products are formed in `u128`, which holds any product of two `u64`.
    /// `self` is left untouched when the reduced result does not fit.
    fn scale_in_place(&mut self, numerator_factor: u64, denominator_factor: u64) -> Result<()> {
        debug_assert!(denominator_factor != 0);
        let (numerator, denominator) = reduce(
            self.numerator as u128 * numerator_factor as u128,
            self.denominator as u128 * denominator_factor as u128,
        )?;
        self.numerator = numerator;
        self.denominator = denominator;
        Ok(())
    }

    /// `self * factor`, or [`FractionError::Overflow`] if the reduced result
    /// does not fit in `u64`.
    pub fn checked_scale(self, factor: u64) -> Result<Self> {
        let mut result = self;
        result.scale_in_place(factor, 1)?;
        Ok(result)
    }

    /// `self * other`, or [`FractionError::Overflow`] if the reduced result
    /// does not fit in `u64`.
    pub fn checked_mul(self, other: Fraction) -> Result<Self> {
        let mut result = self;
        result.scale_in_place(other.numerator, other.denominator)?;
        Ok(result)
    }

    /// Cross-multiplication comparison.
    ///
    /// Both products fit in `u128`, so this never overflows. All other
    /// relational operations are derived from this and `==`.
    pub fn less_than(&self, other: &Fraction) -> bool {
        (self.numerator as u128) * (other.denominator as u128)
            < (other.numerator as u128) * (self.denominator as u128)
    }

    pub fn less_or_equal(&self, other: &Fraction) -> bool {
        self.less_than(other) || self == other
    }

    pub fn greater_than(&self, other: &Fraction) -> bool {
        other.less_than(self)
    }

    pub fn greater_or_equal(&self, other: &Fraction) -> bool {
        other.less_than(self) || self == other
    }
}

/// Divides both parts by their gcd and narrows them back to `u64`.
///
/// `denominator` must be non-zero. `gcd(0, d) == d`, so zero comes out as `0/1`.
fn reduce(numerator: u128, denominator: u128) -> Result<(u64, u64)> {
    let divisor = numerator.gcd(&denominator);
    let numerator = numerator / divisor;
    let denominator = denominator / divisor;

    log::trace!("reduced by {} to {}/{}", divisor, numerator, denominator);

    match (u64::try_from(numerator), u64::try_from(denominator)) {
        (Ok(numerator), Ok(denominator)) => Ok((numerator, denominator)),
        _ => {
            log::debug!("fraction {}/{} does not fit in u64", numerator, denominator);
            Err(FractionError::Overflow { numerator, denominator })
        }
    }
}

impl From<u64> for Fraction {
    fn from(value: u64) -> Self {
        Fraction::from_integer(value)
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.less_than(other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

// ============================================================================
// Multiplication
// ============================================================================
//
// The by-value operators are written in terms of the compound assignments.
// Like the primitive integer operators they panic on overflow; use
// `checked_scale` / `checked_mul` to get an error instead.

impl MulAssign<u64> for Fraction {
    fn mul_assign(&mut self, factor: u64) {
        if let Err(err) = self.scale_in_place(factor, 1) {
            panic!("{}", err);
        }
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, other: Fraction) {
        if let Err(err) = self.scale_in_place(other.numerator, other.denominator) {
            panic!("{}", err);
        }
    }
}

impl Mul<u64> for Fraction {
    type Output = Fraction;

    fn mul(mut self, factor: u64) -> Fraction {
        self *= factor;
        self
    }
}

impl Mul<Fraction> for u64 {
    type Output = Fraction;

    fn mul(self, fraction: Fraction) -> Fraction {
        fraction * self
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(mut self, other: Fraction) -> Fraction {
        self *= other;
        self
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction::ONE
    }
}

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        (self.numerator / self.denominator).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        Some(self.numerator / self.denominator)
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.numerator as f64 / self.denominator as f64)
    }
}
