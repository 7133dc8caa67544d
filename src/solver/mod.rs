//! Closed-form solving of single-variable equations up to degree three.

mod cubic;
mod linear;
mod quadratic;

use tracing::debug;

use crate::equation::{Equation, Solution};
use crate::error::{AlgebraError, Result};
use crate::expression::Expression;

#[derive(Clone, Debug, PartialEq)]
pub struct SolverOptions {
    /// How far a floating cubic root may sit from a rational candidate before
    /// the candidate is checked exactly.
    pub snap_tolerance: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            snap_tolerance: 1e-6,
        }
    }
}

/// Shape of an equation with respect to one variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Linear,
    Quadratic,
    Cubic,
}

/// Classify `equation` for `variable` from its `lhs - rhs = 0` form, or explain
/// why no closed form applies.
pub fn classify(equation: &Equation, variable: &str) -> Result<Shape> {
    let normalized = equation.normalized();
    if has_negative_degree(&normalized, variable) {
        return Err(AlgebraError::UnsupportedEquation(format!(
            "{variable} appears with a negative exponent"
        )));
    }
    if is_linear_in(&normalized, variable) {
        return Ok(Shape::Linear);
    }
    if !normalized.only_has_variable(variable) {
        return Err(AlgebraError::UnsupportedEquation(format!(
            "nonlinear in several variables: {normalized} = 0"
        )));
    }
    match normalized.max_degree() {
        2 => Ok(Shape::Quadratic),
        3 => Ok(Shape::Cubic),
        degree => Err(AlgebraError::UnsupportedEquation(format!(
            "degree {degree} in {variable}"
        ))),
    }
}

pub(crate) fn solve(equation: &Equation, variable: &str, options: &SolverOptions) -> Result<Solution> {
    if !equation.has_variable(variable) {
        return Err(AlgebraError::invalid(format!(
            "{variable} does not appear in {equation}"
        )));
    }

    let normalized = equation.normalized();
    if normalized.terms().is_empty() {
        debug!(%equation, "variable cancels out");
        return identity_or_contradiction(&normalized);
    }

    let shape = classify(equation, variable)?;
    debug!(%equation, variable, ?shape, "solving");
    match shape {
        Shape::Linear => linear::solve(&normalized, variable),
        Shape::Quadratic => quadratic::solve(&normalized).map(Solution::Roots),
        Shape::Cubic => cubic::solve(&normalized, variable, options).map(Solution::Roots),
    }
}

// `normalized` has no variable terms left: either `0 = 0` or `c = 0` with `c != 0`.
fn identity_or_contradiction(normalized: &Expression) -> Result<Solution> {
    if normalized.constant_part().is_zero() {
        Ok(Solution::AnyValue)
    } else {
        Err(AlgebraError::NoSolution)
    }
}

// `variable` appears only as `c·v`, whatever the other symbols do.
fn is_linear_in(normalized: &Expression, variable: &str) -> bool {
    normalized.max_degree_of_variable(variable) <= 1
        && normalized.no_cross_products_with_variable(variable)
}

fn has_negative_degree(expr: &Expression, variable: &str) -> bool {
    expr.terms().iter().any(|t| t.degree_of(variable) < 0)
}
