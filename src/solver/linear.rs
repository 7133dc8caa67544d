use tracing::debug;

use crate::equation::Solution;
use crate::error::{AlgebraError, Result};
use crate::expression::Expression;
use crate::term::{Term, Variable};

/// Split `normalized = 0` into `c·v` terms and the rest, then divide.
pub(super) fn solve(normalized: &Expression, variable: &str) -> Result<Solution> {
    let target = Term::new(Variable::new(variable));
    let mut isolated = Expression::new();
    let mut rest = Expression::constant(normalized.constant_part().negate());

    for term in normalized.terms() {
        if term.can_be_combined_with(&target) {
            isolated = isolated.add(term);
        } else {
            rest = rest.subtract(term);
        }
    }

    let Some(lead) = isolated.terms().first() else {
        return match rest.constant_value() {
            Some(c) if c.is_zero() => Ok(Solution::AnyValue),
            Some(_) => Err(AlgebraError::NoSolution),
            None => Err(AlgebraError::UnsupportedEquation(format!(
                "{variable} cancels out but {rest} = 0 remains"
            ))),
        };
    };

    let solved = rest.divide(lead.coefficient())?;
    debug!(variable, solution = %solved, "isolated linear variable");
    Ok(match solved.constant_value() {
        Some(value) => Solution::Value(value.reduce()),
        None => Solution::Expression(solved),
    })
}
