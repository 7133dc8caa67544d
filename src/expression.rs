//! Sums of terms over exact rationals.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use num_bigint::BigInt;

use crate::error::{AlgebraError, Result};
use crate::fraction::Fraction;
use crate::rational::RationalExpression;
use crate::term::{Term, Variable};

/// Values substituted by [`Expression::eval`], keyed by symbol.
pub type Bindings = BTreeMap<String, Operand>;

/// Anything that can take part in expression arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Symbol(String),
    Integer(BigInt),
    Fraction(Fraction),
    Term(Term),
    Expression(Expression),
}

impl Operand {
    pub fn into_expression(self) -> Expression {
        match self {
            Operand::Symbol(name) => Expression::variable(name),
            Operand::Integer(n) => Expression::constant(Fraction::integer(n)),
            Operand::Fraction(f) => Expression::constant(f),
            Operand::Term(t) => Expression::from(t),
            Operand::Expression(e) => e,
        }
    }

    /// The numeric value, if this operand carries no free symbols.
    pub fn as_scalar(&self) -> Option<Fraction> {
        match self {
            Operand::Symbol(_) => None,
            Operand::Integer(n) => Some(Fraction::integer(n.clone())),
            Operand::Fraction(f) => Some(f.reduce()),
            Operand::Term(t) => t.is_constant().then(|| t.coefficient().reduce()),
            Operand::Expression(e) => e.constant_value(),
        }
    }
}

impl From<&str> for Operand {
    fn from(symbol: &str) -> Self {
        Operand::Symbol(symbol.to_string())
    }
}

impl From<String> for Operand {
    fn from(symbol: String) -> Self {
        Operand::Symbol(symbol)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value.into())
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Integer(value.into())
    }
}

impl From<BigInt> for Operand {
    fn from(value: BigInt) -> Self {
        Operand::Integer(value)
    }
}

impl From<Fraction> for Operand {
    fn from(value: Fraction) -> Self {
        Operand::Fraction(value)
    }
}

impl From<&Fraction> for Operand {
    fn from(value: &Fraction) -> Self {
        Operand::Fraction(value.clone())
    }
}

impl From<Variable> for Operand {
    fn from(value: Variable) -> Self {
        Operand::Term(Term::new(value))
    }
}

impl From<Term> for Operand {
    fn from(value: Term) -> Self {
        Operand::Term(value)
    }
}

impl From<&Term> for Operand {
    fn from(value: &Term) -> Self {
        Operand::Term(value.clone())
    }
}

impl From<Expression> for Operand {
    fn from(value: Expression) -> Self {
        Operand::Expression(value)
    }
}

impl From<&Expression> for Operand {
    fn from(value: &Expression) -> Self {
        Operand::Expression(value.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadraticCoefficients {
    pub a: Fraction,
    pub b: Fraction,
    pub c: Fraction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubicCoefficients {
    pub a: Fraction,
    pub b: Fraction,
    pub c: Fraction,
    pub d: Fraction,
}

/// A list of terms plus a folded constant.
///
/// Every arithmetic method returns a new value. The `*_with` variants take a
/// `simplify` flag; the plain variants always simplify. A simplified expression
/// has no like terms left to combine, no zero coefficients, and its terms sorted
/// by descending degree, then by descending number of symbols, then by symbol name.
///
/// Equality compares terms in order, so compare simplified expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    terms: Vec<Term>,
    constant: Fraction,
}

impl Default for Expression {
    fn default() -> Self {
        Expression::new()
    }
}

impl Expression {
    /// Largest exponent accepted by [`Expression::pow`].
    pub const MAX_POWER: u32 = 64;

    pub fn new() -> Self {
        Expression {
            terms: Vec::new(),
            constant: Fraction::zero(),
        }
    }

    pub fn variable(symbol: impl Into<String>) -> Self {
        Expression::from(Term::new(Variable::new(symbol)))
    }

    pub fn constant(value: impl Into<Fraction>) -> Self {
        let value: Fraction = value.into();
        Expression {
            terms: Vec::new(),
            constant: value.reduce(),
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn constant_part(&self) -> &Fraction {
        &self.constant
    }

    pub fn is_zero(&self) -> bool {
        self.constant.is_zero() && self.terms.iter().all(|t| t.coefficient().is_zero())
    }

    pub fn is_constant(&self) -> bool {
        self.constant_value().is_some()
    }

    /// The value of this expression when it has no surviving variable terms.
    pub fn constant_value(&self) -> Option<Fraction> {
        let simplified = self.simplify();
        simplified
            .terms
            .is_empty()
            .then_some(simplified.constant)
    }

    pub fn add(&self, other: impl Into<Operand>) -> Expression {
        self.add_with(other, true)
    }

    pub fn add_with(&self, other: impl Into<Operand>, simplify: bool) -> Expression {
        let other = Operand::into_expression(other.into());
        let mut terms = self.terms.clone();
        terms.extend(other.terms);
        let sum = Expression {
            terms,
            constant: self.constant.add(&other.constant),
        };
        sum.finish(simplify)
    }

    pub fn subtract(&self, other: impl Into<Operand>) -> Expression {
        self.subtract_with(other, true)
    }

    pub fn subtract_with(&self, other: impl Into<Operand>, simplify: bool) -> Expression {
        let negated = Operand::into_expression(other.into()).negate();
        self.add_with(negated, simplify)
    }

    pub fn multiply(&self, other: impl Into<Operand>) -> Expression {
        self.multiply_with(other, true)
    }

    /// Distribute every term and the constant of `self` over those of `other`.
    pub fn multiply_with(&self, other: impl Into<Operand>, simplify: bool) -> Expression {
        let other = Operand::into_expression(other.into());
        let mut terms = Vec::with_capacity((self.terms.len() + 1) * (other.terms.len() + 1));
        for lhs in &self.terms {
            for rhs in &other.terms {
                terms.push(lhs.product(rhs));
            }
            if !other.constant.is_zero() {
                terms.push(lhs.scale(&other.constant));
            }
        }
        if !self.constant.is_zero() {
            for rhs in &other.terms {
                terms.push(rhs.scale(&self.constant));
            }
        }
        let product = Expression {
            terms,
            constant: self.constant.multiply(&other.constant),
        };
        product.finish(simplify)
    }

    pub fn divide(&self, divisor: impl Into<Operand>) -> Result<Expression> {
        self.divide_with(divisor, true)
    }

    /// Divide by a scalar. Use [`Expression::over`] for non-constant divisors.
    pub fn divide_with(&self, divisor: impl Into<Operand>, simplify: bool) -> Result<Expression> {
        let divisor: Operand = divisor.into();
        let scalar = divisor.as_scalar().ok_or_else(|| {
            AlgebraError::invalid(format!(
                "cannot divide by the non-constant {}; use a rational expression",
                divisor.into_expression()
            ))
        })?;
        if scalar.is_zero() {
            return Err(AlgebraError::DivideByZero);
        }
        let terms = self
            .terms
            .iter()
            .map(|t| t.divide_scalar(&scalar))
            .collect::<Result<Vec<_>>>()?;
        let quotient = Expression {
            terms,
            constant: self.constant.divide(&scalar)?,
        };
        Ok(quotient.finish(simplify))
    }

    /// Divide every term by `divisor`, subtracting its degrees.
    pub(crate) fn divide_by_term(&self, divisor: &Term) -> Result<Expression> {
        let mut terms = self
            .terms
            .iter()
            .map(|t| t.divide(divisor))
            .collect::<Result<Vec<_>>>()?;
        if !self.constant.is_zero() {
            terms.push(Term::constant(self.constant.clone()).divide(divisor)?);
        }
        Ok(Expression {
            terms,
            constant: Fraction::zero(),
        }
        .simplify())
    }

    pub fn over(&self, denominator: impl Into<Operand>) -> Result<RationalExpression> {
        RationalExpression::new(self.clone(), Operand::into_expression(denominator.into()))
    }

    pub fn pow(&self, exp: u32) -> Result<Expression> {
        self.pow_with(exp, true)
    }

    /// Repeated multiplication. `pow(0)` is `1`, including for zero.
    pub fn pow_with(&self, exp: u32, simplify: bool) -> Result<Expression> {
        if exp > Self::MAX_POWER {
            return Err(AlgebraError::invalid(format!(
                "exponent {exp} exceeds the limit of {}",
                Self::MAX_POWER
            )));
        }
        let mut result = Expression::constant(Fraction::one());
        for _ in 0..exp {
            result = result.multiply_with(self, simplify);
        }
        Ok(result.finish(simplify))
    }

    pub fn negate(&self) -> Expression {
        Expression {
            terms: self.terms.iter().map(Term::negate).collect(),
            constant: self.constant.negate(),
        }
    }

    pub fn eval(&self, bindings: &Bindings) -> Result<Expression> {
        self.eval_with(bindings, true)
    }

    pub fn eval_with(&self, bindings: &Bindings, simplify: bool) -> Result<Expression> {
        let mut result = Expression::constant(self.constant.clone());
        for term in &self.terms {
            result = result.add_with(term.evaluate_at(bindings)?, simplify);
        }
        Ok(result.finish(simplify))
    }

    /// Fold constants, combine like terms, drop zero terms, and sort.
    pub fn simplify(&self) -> Expression {
        let mut constant = self.constant.reduce();
        let mut combined: Vec<Term> = Vec::with_capacity(self.terms.len());
        for term in self.terms.iter().map(Term::simplify) {
            if term.is_constant() {
                constant = constant.add(term.coefficient());
                continue;
            }
            match combined.iter_mut().find(|t| t.can_be_combined_with(&term)) {
                Some(existing) => *existing = existing.merge(&term),
                None => combined.push(term),
            }
        }
        combined.retain(|t| !t.coefficient().is_zero());
        let mut simplified = Expression {
            terms: combined,
            constant,
        };
        simplified.sort();
        simplified
    }

    fn finish(self, simplify: bool) -> Expression {
        if simplify {
            self.simplify()
        } else {
            self
        }
    }

    fn sort(&mut self) {
        self.terms.sort_by(|a, b| {
            b.max_degree()
                .cmp(&a.max_degree())
                .then_with(|| b.symbol_count().cmp(&a.symbol_count()))
                .then_with(|| a.signature().cmp(&b.signature()))
        });
    }

    /// Highest term degree, never below zero: a constant has degree 0.
    pub fn max_degree(&self) -> i64 {
        self.terms
            .iter()
            .map(Term::max_degree)
            .max()
            .unwrap_or(0)
            .max(0)
    }

    pub fn max_degree_of_variable(&self, symbol: &str) -> i64 {
        self.terms
            .iter()
            .map(|t| t.degree_of(symbol))
            .max()
            .unwrap_or(0)
    }

    pub fn has_variable(&self, symbol: &str) -> bool {
        self.terms.iter().any(|t| t.has_variable(symbol))
    }

    pub fn only_has_variable(&self, symbol: &str) -> bool {
        self.terms.iter().all(|t| {
            t.simplify()
                .variables()
                .iter()
                .all(|v| v.symbol == symbol)
        })
    }

    /// True when no term mixes two different symbols.
    pub fn no_cross_products(&self) -> bool {
        self.terms.iter().all(|t| t.symbol_count() <= 1)
    }

    pub fn no_cross_products_with_variable(&self, symbol: &str) -> bool {
        self.terms
            .iter()
            .filter(|t| t.has_variable(symbol))
            .all(|t| t.symbol_count() <= 1)
    }

    /// Distinct symbols in sorted order.
    pub fn variables(&self) -> Vec<String> {
        let symbols: BTreeSet<String> = self
            .simplify()
            .terms
            .iter()
            .flat_map(|t| t.variables().iter().map(|v| v.symbol.clone()))
            .collect();
        symbols.into_iter().collect()
    }

    /// `(a, b, c)` of `a·v² + b·v + c` for a single-variable expression.
    pub fn quadratic_coefficients(&self) -> Result<QuadraticCoefficients> {
        let [a, b, c] = self.polynomial_coefficients::<3>()?;
        Ok(QuadraticCoefficients { a, b, c })
    }

    /// `(a, b, c, d)` of `a·v³ + b·v² + c·v + d` for a single-variable expression.
    pub fn cubic_coefficients(&self) -> Result<CubicCoefficients> {
        let [a, b, c, d] = self.polynomial_coefficients::<4>()?;
        Ok(CubicCoefficients { a, b, c, d })
    }

    // Coefficients ordered from degree N-1 down to the constant.
    fn polynomial_coefficients<const N: usize>(&self) -> Result<[Fraction; N]> {
        let simplified = self.simplify();
        let top = N as i64 - 1;
        let mut coeffs: [Fraction; N] = std::array::from_fn(|_| Fraction::zero());
        for term in &simplified.terms {
            let degree = term.max_degree();
            if term.symbol_count() != 1 || degree < 1 || degree > top {
                return Err(AlgebraError::invalid(format!(
                    "{term} does not fit a single-variable polynomial of degree {top}"
                )));
            }
            let slot = (top - degree) as usize;
            coeffs[slot] = coeffs[slot].add(term.coefficient());
        }
        coeffs[N - 1] = simplified.constant;
        Ok(coeffs)
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Expression {
            terms: vec![term],
            constant: Fraction::zero(),
        }
        .simplify()
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Expression::from(Term::new(variable))
    }
}

impl From<Fraction> for Expression {
    fn from(value: Fraction) -> Self {
        Expression::constant(value)
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        Expression::constant(value)
    }
}

impl From<i32> for Expression {
    fn from(value: i32) -> Self {
        Expression::constant(value)
    }
}

impl From<BigInt> for Expression {
    fn from(value: BigInt) -> Self {
        Expression::constant(value)
    }
}

impl From<&str> for Expression {
    fn from(symbol: &str) -> Self {
        Expression::variable(symbol)
    }
}

impl std::ops::Neg for Expression {
    type Output = Expression;
    fn neg(self) -> Expression {
        self.negate()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::text::expression(self))
    }
}
