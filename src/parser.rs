use nom::branch::alt;
use nom::character::complete::{alpha1, char, digit1, multispace0};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::error::{convert_error, VerboseError};
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded};
use nom::IResult;
use num_bigint::BigInt;
use num_traits::{Num, ToPrimitive};

use crate::equation::Equation;
use crate::error::{AlgebraError, Result};
use crate::expression::Expression;
use crate::format::GreekLetters;
use crate::fraction::Fraction;

#[derive(Clone, Debug)]
enum Ast {
    Number(Fraction),
    Identifier(String),
    Add(Box<Ast>, Box<Ast>),
    Sub(Box<Ast>, Box<Ast>),
    Mul(Box<Ast>, Box<Ast>),
    Div(Box<Ast>, Box<Ast>),
    Pow(Box<Ast>, Box<Ast>),
    Neg(Box<Ast>),
}

impl Ast {
    fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

pub fn parse_expression(input: &str) -> Result<Expression> {
    parse_expression_with(input, &GreekLetters::default())
}

/// Parse with a custom set of multi-letter symbol names. Any other run of letters
/// is read as a product of single-letter variables, so `xy` means `x*y`.
pub fn parse_expression_with(input: &str, greek: &GreekLetters) -> Result<Expression> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, ast)) => lower(&ast, greek),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(AlgebraError::Parse(convert_error(input, e)))
        }
        Err(e) => Err(AlgebraError::Parse(format!("{e:?}"))),
    }
}

pub fn parse_equation(input: &str) -> Result<Equation> {
    parse_equation_with(input, &GreekLetters::default())
}

pub fn parse_equation_with(input: &str, greek: &GreekLetters) -> Result<Equation> {
    let (lhs, rhs) = input
        .split_once('=')
        .ok_or_else(|| AlgebraError::Parse("equation must contain '='".to_string()))?;
    Ok(Equation::new(
        parse_expression_with(lhs.trim(), greek)?,
        parse_expression_with(rhs.trim(), greek)?,
    ))
}

fn parse_add_sub(input: &str) -> ParseResult<'_, Ast> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Ast::Add(acc.boxed(), rhs.boxed()),
            _ => Ast::Sub(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

// Explicit `*` and `/`, plus juxtaposition such as `2x` or `3(x + 1)`.
fn parse_mul_div(input: &str) -> ParseResult<'_, Ast> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        alt((
            pair(ws(alt((char('*'), char('/')))), parse_unary),
            map(parse_implicit_factor, |rhs| ('*', rhs)),
        )),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Ast::Mul(acc.boxed(), rhs.boxed()),
            _ => Ast::Div(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_implicit_factor(input: &str) -> ParseResult<'_, Ast> {
    let (rest, base) = alt((parse_parens, parse_identifier))(input)?;
    parse_exponent(rest, base)
}

fn parse_unary(input: &str) -> ParseResult<'_, Ast> {
    if let Ok((rest, expr)) = preceded(ws(char('-')), parse_unary)(input) {
        Ok((rest, Ast::Neg(expr.boxed())))
    } else {
        parse_pow(input)
    }
}

fn parse_pow(input: &str) -> ParseResult<'_, Ast> {
    let (rest, base) = parse_primary(input)?;
    parse_exponent(rest, base)
}

fn parse_exponent(input: &str, base: Ast) -> ParseResult<'_, Ast> {
    if let Ok((next, exp)) = preceded(ws(char('^')), parse_unary)(input) {
        Ok((next, Ast::Pow(base.boxed(), exp.boxed())))
    } else {
        Ok((input, base))
    }
}

fn parse_primary(input: &str) -> ParseResult<'_, Ast> {
    alt((parse_parens, parse_number, parse_identifier))(input)
}

fn parse_parens(input: &str) -> ParseResult<'_, Ast> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_number(input: &str) -> ParseResult<'_, Ast> {
    map(
        map_res(
            ws(recognize(pair(digit1, opt(pair(char('.'), digit1))))),
            decimal,
        ),
        Ast::Number,
    )(input)
}

fn parse_identifier(input: &str) -> ParseResult<'_, Ast> {
    map(ws(alpha1), |s: &str| Ast::Identifier(s.to_string()))(input)
}

// `12.25` becomes `1225/100`, kept exact.
fn decimal(literal: &str) -> Result<Fraction> {
    let (whole, frac) = literal.split_once('.').unwrap_or((literal, ""));
    let digits = format!("{whole}{frac}");
    let numer = BigInt::from_str_radix(&digits, 10)
        .map_err(|e| AlgebraError::Parse(format!("{literal}: {e}")))?;
    let denom = num_traits::pow(BigInt::from(10), frac.len());
    Fraction::new(numer, denom)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn lower(ast: &Ast, greek: &GreekLetters) -> Result<Expression> {
    Ok(match ast {
        Ast::Number(n) => Expression::constant(n.clone()),
        Ast::Identifier(name) if greek.contains(name) => Expression::variable(name.as_str()),
        Ast::Identifier(name) => letters(name),
        Ast::Add(a, b) => lower(a, greek)?.add(lower(b, greek)?),
        Ast::Sub(a, b) => lower(a, greek)?.subtract(lower(b, greek)?),
        Ast::Mul(a, b) => lower(a, greek)?.multiply(lower(b, greek)?),
        Ast::Div(a, b) => lower(a, greek)?.divide(lower(b, greek)?)?,
        Ast::Neg(a) => lower(a, greek)?.negate(),
        Ast::Pow(base, exp) => {
            let exponent = lower(exp, greek)?;
            let power = exponent
                .constant_value()
                .filter(Fraction::is_integer)
                .and_then(|f| f.reduce().numer().to_u32())
                .ok_or_else(|| {
                    AlgebraError::invalid(format!(
                        "exponent {exponent} is not a non-negative integer"
                    ))
                })?;
            match &**base {
                // `xy^2` raises only the last letter.
                Ast::Identifier(name) if !greek.contains(name) && name.chars().count() > 1 => {
                    let split = name.char_indices().last().map_or(0, |(i, _)| i);
                    let (head, tail) = name.split_at(split);
                    letters(head).multiply(letters(tail).pow(power)?)
                }
                _ => lower(base, greek)?.pow(power)?,
            }
        }
    })
}

fn letters(name: &str) -> Expression {
    name.chars()
        .map(|c| Expression::variable(c.to_string()))
        .fold(Expression::constant(1), |acc, v| acc.multiply(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_literals_are_exact() {
        assert_eq!(decimal("0.25").unwrap(), Fraction::new(1, 4).unwrap());
        assert_eq!(decimal("3").unwrap(), Fraction::integer(3));
    }

    #[test]
    fn implicit_product_of_letters() {
        let expr = parse_expression("2xy").unwrap();
        assert_eq!(expr.to_string(), "2xy");
    }

    #[test]
    fn exponent_binds_to_last_letter() {
        let expr = parse_expression("xy^2").unwrap();
        assert_eq!(expr.to_string(), "y^2x");
    }

    #[test]
    fn greek_names_stay_whole() {
        let expr = parse_expression("alpha + 1").unwrap();
        assert_eq!(expr.variables(), vec!["alpha".to_string()]);
    }
}
