//! Complex numbers with exact parts, multiplied through the expression engine.

use std::fmt;

use crate::error::{AlgebraError, Result};
use crate::expression::{Expression, QuadraticCoefficients};
use crate::fraction::Fraction;

const IMAGINARY_UNIT: &str = "i";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Complex {
    pub real: Fraction,
    pub imaginary: Fraction,
}

impl Complex {
    pub fn new(real: impl Into<Fraction>, imaginary: impl Into<Fraction>) -> Self {
        let (real, imaginary): (Fraction, Fraction) = (real.into(), imaginary.into());
        Complex {
            real: real.reduce(),
            imaginary: imaginary.reduce(),
        }
    }

    pub fn add(&self, other: impl Into<Complex>) -> Complex {
        let other: Complex = other.into();
        Complex::new(
            self.real.add(&other.real),
            self.imaginary.add(&other.imaginary),
        )
    }

    pub fn subtract(&self, other: impl Into<Complex>) -> Complex {
        let other: Complex = other.into();
        Complex::new(
            self.real.subtract(&other.real),
            self.imaginary.subtract(&other.imaginary),
        )
    }

    /// Expand `(a + bi)(c + di)` as expressions in `i`, then apply `i² = -1`.
    pub fn multiply(&self, other: impl Into<Complex>) -> Result<Complex> {
        let other: Complex = other.into();
        let product = self.to_expression().multiply(other.to_expression());
        let QuadraticCoefficients { a, b, c } = product.quadratic_coefficients()?;
        Ok(Complex::new(c.subtract(&a), b))
    }

    /// Multiply by the conjugate, then divide by the squared modulus.
    pub fn divide(&self, other: impl Into<Complex>) -> Result<Complex> {
        let other: Complex = other.into();
        let modulus = other.squared_modulus();
        if modulus.is_zero() {
            return Err(AlgebraError::DivideByZero);
        }
        let numerator = self.multiply(other.conjugate())?;
        Ok(Complex::new(
            numerator.real.divide(&modulus)?,
            numerator.imaginary.divide(&modulus)?,
        ))
    }

    pub fn conjugate(&self) -> Complex {
        Complex::new(self.real.clone(), self.imaginary.negate())
    }

    pub fn squared_modulus(&self) -> Fraction {
        self.real
            .multiply(&self.real)
            .add(&self.imaginary.multiply(&self.imaginary))
    }

    /// `real + imaginary·i` as an expression in the symbol `i`.
    pub fn to_expression(&self) -> Expression {
        Expression::constant(self.real.clone())
            .add(Expression::variable(IMAGINARY_UNIT).multiply(&self.imaginary))
    }
}

impl From<Fraction> for Complex {
    fn from(real: Fraction) -> Self {
        Complex::new(real, Fraction::zero())
    }
}

impl From<i32> for Complex {
    fn from(real: i32) -> Self {
        Complex::new(real, 0)
    }
}

impl From<i64> for Complex {
    fn from(real: i64) -> Self {
        Complex::new(real, 0)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::text::complex(self))
    }
}
