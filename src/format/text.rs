use crate::complex::Complex;
use crate::equation::{Root, Solution};
use crate::expression::Expression;
use crate::fraction::Fraction;
use crate::rational::RationalExpression;
use crate::term::{Term, Variable};

use super::{join_signed, split_coefficient};

pub fn fraction(f: &Fraction) -> String {
    let r = f.reduce();
    if r.is_integer() {
        format!("{}", r.numer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}

pub fn variable(v: &Variable) -> String {
    if v.degree == 1 {
        v.symbol.clone()
    } else {
        format!("{}^{}", v.symbol, v.degree)
    }
}

pub fn term(t: &Term) -> String {
    let (negative, body) = unsigned_term(t);
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

fn unsigned_term(t: &Term) -> (bool, String) {
    if t.variables().is_empty() {
        let c = t.coefficient();
        return (c.is_negative(), fraction(&c.abs()));
    }
    let (negative, magnitude) = split_coefficient(t.coefficient());
    let mut body = magnitude.map(|m| fraction(&m)).unwrap_or_default();
    for v in t.variables() {
        body.push_str(&variable(v));
    }
    (negative, body)
}

pub fn expression(e: &Expression) -> String {
    let mut pieces: Vec<(bool, String)> = e.terms().iter().map(unsigned_term).collect();
    let constant = e.constant_part();
    if !constant.is_zero() {
        pieces.push((constant.is_negative(), fraction(&constant.abs())));
    }
    join_signed(pieces)
}

pub fn rational(r: &RationalExpression) -> String {
    format!("({})/({})", expression(r.numerator()), expression(r.denominator()))
}

pub fn root(r: &Root) -> String {
    match r {
        Root::Exact(f) => fraction(f),
        Root::Approximate(v) => format!("{v}"),
    }
}

pub fn roots(rs: &[Root]) -> String {
    let body: Vec<String> = rs.iter().map(root).collect();
    format!("[{}]", body.join(", "))
}

pub fn solution(s: &Solution) -> String {
    match s {
        Solution::Value(f) => fraction(f),
        Solution::Expression(e) => expression(e),
        Solution::AnyValue => "any value".to_string(),
        Solution::Roots(rs) => roots(rs),
    }
}

pub fn complex(c: &Complex) -> String {
    let mut pieces = Vec::new();
    if !c.real.is_zero() {
        pieces.push((c.real.is_negative(), fraction(&c.real.abs())));
    }
    if !c.imaginary.is_zero() {
        let magnitude = c.imaginary.abs();
        let body = if magnitude.is_one() {
            "i".to_string()
        } else {
            format!("{}i", fraction(&magnitude))
        };
        pieces.push((c.imaginary.is_negative(), body));
    }
    join_signed(pieces)
}
