use std::fmt;

use crate::error::Result;
use crate::expression::{Bindings, Expression};
use crate::fraction::Fraction;
use crate::solver::{self, SolverOptions};

/// A root of a polynomial equation: exact when the closed form stays rational.
#[derive(Clone, Debug, PartialEq)]
pub enum Root {
    Exact(Fraction),
    Approximate(f64),
}

impl Root {
    pub fn value_of(&self) -> f64 {
        match self {
            Root::Exact(f) => f.value_of(),
            Root::Approximate(v) => *v,
        }
    }

    pub fn as_exact(&self) -> Option<&Fraction> {
        match self {
            Root::Exact(f) => Some(f),
            Root::Approximate(_) => None,
        }
    }
}

/// Result of [`Equation::solve_for`].
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    /// Linear equation solved to a number.
    Value(Fraction),
    /// Linear equation whose solution still depends on other symbols.
    Expression(Expression),
    /// The equation holds for every value of the variable.
    AnyValue,
    /// Real roots of a quadratic or cubic, possibly empty.
    Roots(Vec<Root>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    lhs: Expression,
    rhs: Expression,
}

impl Equation {
    pub fn new(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Self {
        let (lhs, rhs): (Expression, Expression) = (lhs.into(), rhs.into());
        Equation {
            lhs: lhs.simplify(),
            rhs: rhs.simplify(),
        }
    }

    pub fn lhs(&self) -> &Expression {
        &self.lhs
    }

    pub fn rhs(&self) -> &Expression {
        &self.rhs
    }

    /// `lhs - rhs`, simplified.
    pub fn normalized(&self) -> Expression {
        self.lhs.subtract(&self.rhs)
    }

    pub fn is_linear(&self) -> bool {
        [&self.lhs, &self.rhs]
            .iter()
            .all(|side| side.max_degree() <= 1 && side.no_cross_products())
    }

    pub fn has_variable(&self, symbol: &str) -> bool {
        self.lhs.has_variable(symbol) || self.rhs.has_variable(symbol)
    }

    pub fn solve_for(&self, variable: &str) -> Result<Solution> {
        self.solve_for_with(variable, &SolverOptions::default())
    }

    pub fn solve_for_with(&self, variable: &str, options: &SolverOptions) -> Result<Solution> {
        solver::solve(self, variable, options)
    }

    pub fn eval(&self, bindings: &Bindings) -> Result<Equation> {
        Ok(Equation {
            lhs: self.lhs.eval(bindings)?,
            rhs: self.rhs.eval(bindings)?,
        })
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::text::root(self))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::text::solution(self))
    }
}
