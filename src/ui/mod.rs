//! String-in, string-out helpers for quick use and rendering.

use crate::equation::{Equation, Solution};
use crate::error::Result;
use crate::expression::Expression;
use crate::format::ToTex;
use crate::parser::{parse_equation, parse_expression};

pub fn parse(input: &str) -> Result<Expression> {
    parse_expression(input)
}

pub fn equation(input: &str) -> Result<Equation> {
    parse_equation(input)
}

pub fn simplify(input: &str) -> Result<Expression> {
    Ok(parse_expression(input)?.simplify())
}

pub fn simp(input: &str) -> Result<String> {
    Ok(simplify(input)?.to_string())
}

/// Render an expression, or an equation when the input contains `=`.
pub fn tex(input: &str) -> Result<String> {
    if input.contains('=') {
        Ok(parse_equation(input)?.to_tex())
    } else {
        Ok(parse_expression(input)?.to_tex())
    }
}

pub fn solve(input: &str, variable: &str) -> Result<Solution> {
    parse_equation(input)?.solve_for(variable)
}

pub fn sol(input: &str, variable: &str) -> Result<String> {
    Ok(format!("{variable} = {}", solve(input, variable)?))
}

pub fn solve_tex(input: &str, variable: &str) -> Result<String> {
    Ok(format!("{variable} = {}", solve(input, variable)?.to_tex()))
}
