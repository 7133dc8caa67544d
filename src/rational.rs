//! Ratios of expressions.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{AlgebraError, Result};
use crate::expression::{Bindings, Expression};
use crate::fraction::Fraction;
use crate::term::{Term, Variable};

/// `numerator / denominator`, kept in lowest terms only after [`RationalExpression::reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalExpression {
    numerator: Expression,
    denominator: Expression,
}

impl RationalExpression {
    pub fn new(numerator: Expression, denominator: Expression) -> Result<Self> {
        let denominator = denominator.simplify();
        if denominator.is_zero() {
            return Err(AlgebraError::DivideByZero);
        }
        Ok(RationalExpression {
            numerator: numerator.simplify(),
            denominator,
        })
    }

    pub fn numerator(&self) -> &Expression {
        &self.numerator
    }

    pub fn denominator(&self) -> &Expression {
        &self.denominator
    }

    pub fn add(&self, other: impl Into<RationalExpression>) -> RationalExpression {
        let other: RationalExpression = other.into();
        if self.denominator == other.denominator {
            return RationalExpression {
                numerator: self.numerator.add(&other.numerator),
                denominator: self.denominator.clone(),
            };
        }
        RationalExpression {
            numerator: self
                .numerator
                .multiply(&other.denominator)
                .add(other.numerator.multiply(&self.denominator)),
            denominator: self.denominator.multiply(&other.denominator),
        }
    }

    pub fn subtract(&self, other: impl Into<RationalExpression>) -> RationalExpression {
        let other: RationalExpression = other.into();
        self.add(other.negate())
    }

    pub fn multiply(&self, other: impl Into<RationalExpression>) -> RationalExpression {
        let other: RationalExpression = other.into();
        RationalExpression {
            numerator: self.numerator.multiply(&other.numerator),
            denominator: self.denominator.multiply(&other.denominator),
        }
    }

    pub fn divide(&self, other: impl Into<RationalExpression>) -> Result<RationalExpression> {
        let other: RationalExpression = other.into();
        Ok(self.multiply(other.reciprocal()?))
    }

    pub fn reciprocal(&self) -> Result<RationalExpression> {
        RationalExpression::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn negate(&self) -> RationalExpression {
        RationalExpression {
            numerator: self.numerator.negate(),
            denominator: self.denominator.clone(),
        }
    }

    pub fn eval(&self, bindings: &Bindings) -> Result<RationalExpression> {
        RationalExpression::new(
            self.numerator.eval(bindings)?,
            self.denominator.eval(bindings)?,
        )
    }

    /// The plain expression, when the denominator is a nonzero constant.
    pub fn to_expression(&self) -> Option<Expression> {
        let denominator = self.denominator.constant_value()?;
        self.numerator.divide(denominator).ok()
    }

    /// Divide numerator and denominator by the largest term dividing all of their terms.
    pub fn reduce(&self) -> Result<RationalExpression> {
        if self.numerator.is_zero() {
            return Ok(RationalExpression {
                numerator: Expression::new(),
                denominator: Expression::constant(Fraction::one()),
            });
        }
        let terms: Vec<Term> = all_terms(&self.numerator)
            .chain(all_terms(&self.denominator))
            .collect();
        let divisor = common_factor(&terms);
        tracing::trace!(%divisor, "reducing rational expression");
        RationalExpression::new(
            self.numerator.divide_by_term(&divisor)?,
            self.denominator.divide_by_term(&divisor)?,
        )
    }
}

fn all_terms(expr: &Expression) -> impl Iterator<Item = Term> + '_ {
    let constant = expr.constant_part();
    expr.terms()
        .iter()
        .map(Term::simplify)
        .chain((!constant.is_zero()).then(|| Term::constant(constant.clone())))
}

// Numeric gcd of the coefficients times the lowest shared power of each symbol.
fn common_factor(terms: &[Term]) -> Term {
    let mut numer_gcd = BigInt::zero();
    let mut denom_lcm = BigInt::one();
    for term in terms {
        let coefficient = term.coefficient().reduce();
        numer_gcd = numer_gcd.gcd(coefficient.numer());
        denom_lcm = denom_lcm.lcm(coefficient.denom());
    }
    let coefficient = if numer_gcd.is_zero() {
        Fraction::one()
    } else {
        Fraction::new(numer_gcd.abs(), denom_lcm).unwrap_or_else(|_| Fraction::one())
    };

    let variables = match terms.split_first() {
        Some((first, rest)) => first
            .variables()
            .iter()
            .filter_map(|var| {
                let degree = rest
                    .iter()
                    .map(|t| t.degree_of(&var.symbol))
                    .fold(var.degree, i64::min);
                (degree > 0).then(|| Variable::with_degree(var.symbol.clone(), degree))
            })
            .collect(),
        None => Vec::new(),
    };
    Term::with_variables(coefficient, variables).simplify()
}

impl From<Expression> for RationalExpression {
    fn from(numerator: Expression) -> Self {
        RationalExpression {
            numerator: numerator.simplify(),
            denominator: Expression::constant(Fraction::one()),
        }
    }
}

impl From<&Expression> for RationalExpression {
    fn from(numerator: &Expression) -> Self {
        RationalExpression::from(numerator.clone())
    }
}

impl From<Term> for RationalExpression {
    fn from(term: Term) -> Self {
        RationalExpression::from(Expression::from(term))
    }
}

impl From<Fraction> for RationalExpression {
    fn from(value: Fraction) -> Self {
        RationalExpression::from(Expression::constant(value))
    }
}

impl From<i32> for RationalExpression {
    fn from(value: i32) -> Self {
        RationalExpression::from(Expression::constant(value))
    }
}

impl From<i64> for RationalExpression {
    fn from(value: i64) -> Self {
        RationalExpression::from(Expression::constant(value))
    }
}

impl fmt::Display for RationalExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::text::rational(self))
    }
}
