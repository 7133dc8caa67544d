use std::fmt;

use crate::error::{AlgebraError, Result};
use crate::expression::{Bindings, Expression};
use crate::fraction::Fraction;

/// A named symbol raised to an integer power.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub symbol: String,
    pub degree: i64,
}

impl Variable {
    pub fn new(symbol: impl Into<String>) -> Self {
        Variable::with_degree(symbol, 1)
    }

    pub fn with_degree(symbol: impl Into<String>, degree: i64) -> Self {
        Variable {
            symbol: symbol.into(),
            degree,
        }
    }
}

/// A coefficient times a product of variable powers, e.g. `3xy^2`.
///
/// After [`Term::simplify`] every symbol appears at most once, zero degrees are
/// gone, and variables are ordered by descending degree, then by symbol.
/// Equality compares the coefficient by value and the variables as a multiset,
/// so `xy == yx` and `x·x == x^2`.
#[derive(Clone, Debug)]
pub struct Term {
    coefficient: Fraction,
    variables: Vec<Variable>,
}

impl Term {
    pub fn new(variable: Variable) -> Self {
        Term {
            coefficient: Fraction::one(),
            variables: vec![variable],
        }
        .simplify()
    }

    pub fn constant(coefficient: Fraction) -> Self {
        Term {
            coefficient: coefficient.reduce(),
            variables: Vec::new(),
        }
    }

    /// Build a term as given, without merging or sorting the variables.
    pub fn with_variables(coefficient: Fraction, variables: Vec<Variable>) -> Self {
        Term {
            coefficient,
            variables,
        }
    }

    pub fn coefficient(&self) -> &Fraction {
        &self.coefficient
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn is_constant(&self) -> bool {
        self.simplify().variables.is_empty()
    }

    pub fn max_degree(&self) -> i64 {
        self.simplify()
            .variables
            .iter()
            .map(|v| v.degree)
            .max()
            .unwrap_or(0)
    }

    pub fn degree_of(&self, symbol: &str) -> i64 {
        self.variables
            .iter()
            .filter(|v| v.symbol == symbol)
            .map(|v| v.degree)
            .sum()
    }

    pub fn has_variable(&self, symbol: &str) -> bool {
        self.degree_of(symbol) != 0
    }

    /// Number of distinct symbols with a nonzero degree.
    pub fn symbol_count(&self) -> usize {
        self.simplify().variables.len()
    }

    /// Sorted `(symbol, degree)` pairs; equal signatures mean the terms are alike.
    pub fn signature(&self) -> Vec<(String, i64)> {
        let mut pairs: Vec<(String, i64)> = self
            .simplify()
            .variables
            .into_iter()
            .map(|v| (v.symbol, v.degree))
            .collect();
        pairs.sort();
        pairs
    }

    pub fn can_be_combined_with(&self, other: &Term) -> bool {
        self.signature() == other.signature()
    }

    pub fn add(&self, other: &Term) -> Result<Term> {
        if !self.can_be_combined_with(other) {
            return Err(AlgebraError::invalid(format!(
                "cannot combine {self} with {other}"
            )));
        }
        Ok(self.merge(other))
    }

    pub fn subtract(&self, other: &Term) -> Result<Term> {
        self.add(&other.negate())
    }

    // Caller has checked `can_be_combined_with`.
    pub(crate) fn merge(&self, other: &Term) -> Term {
        let mut merged = self.simplify();
        merged.coefficient = merged.coefficient.add(&other.coefficient);
        merged
    }

    pub fn negate(&self) -> Term {
        self.scale(&Fraction::integer(-1))
    }

    pub fn scale(&self, factor: &Fraction) -> Term {
        Term {
            coefficient: self.coefficient.multiply(factor),
            variables: self.variables.clone(),
        }
    }

    pub fn multiply(&self, other: &Term) -> Term {
        self.product(other).simplify()
    }

    // Concatenates factors without merging repeated symbols.
    pub(crate) fn product(&self, other: &Term) -> Term {
        let mut variables = self.variables.clone();
        variables.extend(other.variables.iter().cloned());
        Term {
            coefficient: self.coefficient.multiply(&other.coefficient),
            variables,
        }
    }

    pub fn divide_scalar(&self, divisor: &Fraction) -> Result<Term> {
        Ok(Term {
            coefficient: self.coefficient.divide(divisor)?,
            variables: self.variables.clone(),
        })
    }

    /// Divide by another term, subtracting its degrees. Degrees may go negative.
    pub fn divide(&self, other: &Term) -> Result<Term> {
        let mut variables = self.variables.clone();
        variables.extend(
            other
                .variables
                .iter()
                .map(|v| Variable::with_degree(v.symbol.clone(), -v.degree)),
        );
        Ok(Term {
            coefficient: self.coefficient.divide(&other.coefficient)?,
            variables,
        }
        .simplify())
    }

    pub fn simplify(&self) -> Term {
        let mut merged: Vec<Variable> = Vec::with_capacity(self.variables.len());
        for var in &self.variables {
            match merged.iter_mut().find(|m| m.symbol == var.symbol) {
                Some(existing) => existing.degree += var.degree,
                None => merged.push(var.clone()),
            }
        }
        merged.retain(|v| v.degree != 0);
        merged.sort_by(|a, b| {
            b.degree
                .cmp(&a.degree)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });
        Term {
            coefficient: self.coefficient.reduce(),
            variables: merged,
        }
    }

    /// Substitute bound symbols. Unbound variables stay symbolic in the result.
    pub fn evaluate_at(&self, bindings: &Bindings) -> Result<Expression> {
        let simplified = self.simplify();
        let mut result = Expression::constant(simplified.coefficient.clone());
        for var in &simplified.variables {
            let factor = match bindings.get(&var.symbol) {
                Some(value) => match value.as_scalar() {
                    Some(scalar) => Expression::constant(scalar.pow(var.degree)?),
                    None => {
                        let exp = u32::try_from(var.degree).map_err(|_| {
                            AlgebraError::invalid(format!(
                                "cannot substitute an expression into {}^{}",
                                var.symbol, var.degree
                            ))
                        })?;
                        value.clone().into_expression().pow(exp)?
                    }
                },
                None => Expression::from(Term::new(var.clone())),
            };
            result = result.multiply(factor);
        }
        Ok(result)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.coefficient == other.coefficient && self.signature() == other.signature()
    }
}

impl Eq for Term {}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Term::new(variable)
    }
}

impl From<Fraction> for Term {
    fn from(coefficient: Fraction) -> Self {
        Term::constant(coefficient)
    }
}

impl std::ops::Neg for Term {
    type Output = Term;
    fn neg(self) -> Term {
        self.negate()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::text::term(self))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::text::variable(self))
    }
}
