//! Exact rational numbers with explicit reduction.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

use crate::error::{AlgebraError, Result};

/// A ratio of two integers.
///
/// Construction does not reduce; call [`Fraction::reduce`] for the canonical form
/// (gcd-divided, positive denominator). Arithmetic always returns reduced values.
/// Equality and ordering compare by value, so `2/4 == 1/2`.
#[derive(Clone, Debug)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(AlgebraError::DivideByZero);
        }
        Ok(Fraction {
            numer: numer.into(),
            denom,
        })
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Fraction {
            numer: value.into(),
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Fraction::integer(0)
    }

    pub fn one() -> Self {
        Fraction::integer(1)
    }

    // Callers guarantee `denom != 0`.
    fn from_parts(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());
        Fraction { numer, denom }.reduce()
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.numer == self.denom
    }

    pub fn is_negative(&self) -> bool {
        !self.numer.is_zero() && (self.numer.is_negative() != self.denom.is_negative())
    }

    pub fn is_integer(&self) -> bool {
        self.numer.is_multiple_of(&self.denom)
    }

    /// Divide through by the gcd and move the sign onto the numerator.
    pub fn reduce(&self) -> Fraction {
        if self.numer.is_zero() {
            return Fraction::zero();
        }
        let gcd = self.numer.gcd(&self.denom);
        let mut numer = &self.numer / &gcd;
        let mut denom = &self.denom / &gcd;
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Fraction { numer, denom }
    }

    pub fn add(&self, other: &Fraction) -> Fraction {
        if self.denom == other.denom {
            return Fraction::from_parts(&self.numer + &other.numer, self.denom.clone());
        }
        let lcm = self.denom.lcm(&other.denom);
        let lhs = &self.numer * (&lcm / &self.denom);
        let rhs = &other.numer * (&lcm / &other.denom);
        Fraction::from_parts(lhs + rhs, lcm)
    }

    pub fn subtract(&self, other: &Fraction) -> Fraction {
        self.add(&other.negate())
    }

    pub fn multiply(&self, other: &Fraction) -> Fraction {
        Fraction::from_parts(&self.numer * &other.numer, &self.denom * &other.denom)
    }

    pub fn divide(&self, other: &Fraction) -> Result<Fraction> {
        if other.is_zero() {
            return Err(AlgebraError::DivideByZero);
        }
        Ok(Fraction::from_parts(
            &self.numer * &other.denom,
            &self.denom * &other.numer,
        ))
    }

    pub fn reciprocal(&self) -> Result<Fraction> {
        Fraction::one().divide(self)
    }

    /// Raise to an integer power. Negative exponents invert first.
    pub fn pow(&self, exp: i64) -> Result<Fraction> {
        let base = if exp < 0 {
            self.reciprocal()?
        } else {
            self.reduce()
        };
        let n = exp.unsigned_abs() as usize;
        Ok(Fraction::from_parts(
            num_traits::pow(base.numer, n),
            num_traits::pow(base.denom, n),
        ))
    }

    pub fn abs(&self) -> Fraction {
        Fraction::from_parts(self.numer.abs(), self.denom.abs())
    }

    pub fn negate(&self) -> Fraction {
        Fraction::from_parts(-&self.numer, self.denom.clone())
    }

    pub fn equal_to(&self, other: &Fraction) -> bool {
        self == other
    }

    /// Decimal approximation.
    pub fn value_of(&self) -> f64 {
        self.to_rational().to_f64().unwrap_or(f64::NAN)
    }

    /// True when the square root of this value is itself rational.
    pub fn sqrt_is_exact(&self) -> bool {
        self.sqrt().is_some()
    }

    pub fn sqrt(&self) -> Option<Fraction> {
        let reduced = self.reduce();
        if reduced.numer.is_negative() {
            return None;
        }
        let numer = exact_sqrt(&reduced.numer)?;
        let denom = exact_sqrt(&reduced.denom)?;
        Some(Fraction { numer, denom })
    }

    pub fn to_rational(&self) -> BigRational {
        BigRational::new(self.numer.clone(), self.denom.clone())
    }
}

fn exact_sqrt(n: &BigInt) -> Option<BigInt> {
    let root = n.sqrt();
    if &root * &root == *n {
        Some(root)
    } else {
        None
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        &self.numer * &other.denom == &other.numer * &self.denom
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.reduce();
        let b = other.reduce();
        (&a.numer * &b.denom).cmp(&(&b.numer * &a.denom))
    }
}

impl std::ops::Neg for Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        self.negate()
    }
}

impl std::ops::Neg for &Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        self.negate()
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::integer(value)
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Fraction::integer(value)
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction::integer(value)
    }
}

impl From<BigRational> for Fraction {
    fn from(value: BigRational) -> Self {
        let (numer, denom) = value.into_raw();
        Fraction { numer, denom }
    }
}

impl TryFrom<f64> for Fraction {
    type Error = AlgebraError;

    /// Only integral floats are accepted; anything else would not be exact.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(AlgebraError::invalid(format!(
                "{value} is not an integer; fractions only hold integer ratios"
            )));
        }
        BigInt::from_f64(value)
            .map(Fraction::integer)
            .ok_or_else(|| AlgebraError::invalid(format!("{value} is out of range")))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::text::fraction(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn construction_keeps_raw_parts() {
        let f = frac(2, -4);
        assert_eq!(f.numer(), &BigInt::from(2));
        assert_eq!(f.denom(), &BigInt::from(-4));
        let r = f.reduce();
        assert_eq!(r.numer(), &BigInt::from(-1));
        assert_eq!(r.denom(), &BigInt::from(2));
    }

    #[test]
    fn add_uses_common_multiple() {
        let sum = frac(1, 6).add(&frac(1, 4));
        assert_eq!(sum.numer(), &BigInt::from(5));
        assert_eq!(sum.denom(), &BigInt::from(12));
    }

    #[test]
    fn sign_of_unreduced_fraction() {
        assert!(frac(1, -3).is_negative());
        assert!(!frac(-1, -3).is_negative());
        assert!(!frac(0, -3).is_negative());
    }

    #[test]
    fn exact_square_roots() {
        assert!(frac(9, 4).sqrt_is_exact());
        assert!(frac(18, 8).sqrt_is_exact());
        assert!(!frac(2, 1).sqrt_is_exact());
        assert!(!frac(-4, 1).sqrt_is_exact());
        assert!(frac(0, 5).sqrt_is_exact());
        assert_eq!(frac(9, 4).sqrt(), Some(frac(3, 2)));
    }
}
