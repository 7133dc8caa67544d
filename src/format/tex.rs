use std::collections::BTreeSet;

use crate::complex::Complex;
use crate::equation::{Equation, Root, Solution};
use crate::expression::Expression;
use crate::fraction::Fraction;
use crate::rational::RationalExpression;
use crate::term::{Term, Variable};

use super::{join_signed, split_coefficient};

const STANDARD_GREEK: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi",
    "psi", "omega", "Gamma", "Delta", "Theta", "Lambda", "Xi", "Pi", "Sigma", "Upsilon", "Phi",
    "Psi", "Omega",
];

/// Symbol names rendered as TeX commands (`alpha` becomes `\alpha`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GreekLetters {
    names: BTreeSet<String>,
}

impl GreekLetters {
    pub fn empty() -> Self {
        GreekLetters {
            names: BTreeSet::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for GreekLetters {
    fn default() -> Self {
        STANDARD_GREEK
            .iter()
            .fold(GreekLetters::empty(), |set, name| set.with(*name))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TexOptions {
    /// TeX command name of the multiplication glyph, without the backslash.
    pub multiplication: String,
    /// Join the factors of a term with the glyph instead of juxtaposing them.
    pub explicit: bool,
    pub greek: GreekLetters,
}

impl Default for TexOptions {
    fn default() -> Self {
        TexOptions {
            multiplication: "cdot".to_string(),
            explicit: false,
            greek: GreekLetters::default(),
        }
    }
}

pub trait ToTex {
    fn to_tex_with(&self, options: &TexOptions) -> String;

    fn to_tex(&self) -> String {
        self.to_tex_with(&TexOptions::default())
    }
}

impl ToTex for Fraction {
    fn to_tex_with(&self, _options: &TexOptions) -> String {
        let r = self.reduce();
        if r.is_integer() {
            return format!("{}", r.numer());
        }
        let sign = if r.is_negative() { "-" } else { "" };
        format!("{sign}\\frac{{{}}}{{{}}}", r.numer().magnitude(), r.denom())
    }
}

impl ToTex for Variable {
    fn to_tex_with(&self, options: &TexOptions) -> String {
        let name = if options.greek.contains(&self.symbol) {
            format!("\\{}", self.symbol)
        } else {
            self.symbol.clone()
        };
        if self.degree == 1 {
            name
        } else {
            format!("{name}^{{{}}}", self.degree)
        }
    }
}

fn unsigned_term(t: &Term, options: &TexOptions) -> (bool, String) {
    if t.variables().is_empty() {
        let c = t.coefficient();
        return (c.is_negative(), c.abs().to_tex_with(options));
    }
    let (negative, magnitude) = split_coefficient(t.coefficient());
    let factors: Vec<String> = magnitude
        .map(|m| m.to_tex_with(options))
        .into_iter()
        .chain(t.variables().iter().map(|v| v.to_tex_with(options)))
        .collect();
    let separator = if options.explicit {
        format!(" \\{} ", options.multiplication)
    } else {
        String::new()
    };
    (negative, factors.join(&separator))
}

impl ToTex for Term {
    fn to_tex_with(&self, options: &TexOptions) -> String {
        let (negative, body) = unsigned_term(self, options);
        if negative {
            format!("-{body}")
        } else {
            body
        }
    }
}

impl ToTex for Expression {
    fn to_tex_with(&self, options: &TexOptions) -> String {
        let mut pieces: Vec<(bool, String)> = self
            .terms()
            .iter()
            .map(|t| unsigned_term(t, options))
            .collect();
        let constant = self.constant_part();
        if !constant.is_zero() {
            pieces.push((constant.is_negative(), constant.abs().to_tex_with(options)));
        }
        join_signed(pieces)
    }
}

impl ToTex for RationalExpression {
    fn to_tex_with(&self, options: &TexOptions) -> String {
        format!(
            "\\frac{{{}}}{{{}}}",
            self.numerator().to_tex_with(options),
            self.denominator().to_tex_with(options)
        )
    }
}

impl ToTex for Equation {
    fn to_tex_with(&self, options: &TexOptions) -> String {
        format!(
            "{} = {}",
            self.lhs().to_tex_with(options),
            self.rhs().to_tex_with(options)
        )
    }
}

impl ToTex for Root {
    fn to_tex_with(&self, options: &TexOptions) -> String {
        match self {
            Root::Exact(f) => f.to_tex_with(options),
            Root::Approximate(v) => format!("{v}"),
        }
    }
}

impl ToTex for [Root] {
    fn to_tex_with(&self, options: &TexOptions) -> String {
        if self.is_empty() {
            return "\\emptyset".to_string();
        }
        let parts: Vec<String> = self.iter().map(|r| r.to_tex_with(options)).collect();
        parts.join(", ")
    }
}

impl ToTex for Solution {
    fn to_tex_with(&self, options: &TexOptions) -> String {
        match self {
            Solution::Value(f) => f.to_tex_with(options),
            Solution::Expression(e) => e.to_tex_with(options),
            Solution::AnyValue => "\\mathbb{R}".to_string(),
            Solution::Roots(rs) => rs.to_tex_with(options),
        }
    }
}

impl ToTex for Complex {
    fn to_tex_with(&self, options: &TexOptions) -> String {
        let mut pieces = Vec::new();
        if !self.real.is_zero() {
            pieces.push((self.real.is_negative(), self.real.abs().to_tex_with(options)));
        }
        if !self.imaginary.is_zero() {
            let magnitude = self.imaginary.abs();
            let body = if magnitude.is_one() {
                "i".to_string()
            } else {
                format!("{}i", magnitude.to_tex_with(options))
            };
            pieces.push((self.imaginary.is_negative(), body));
        }
        join_signed(pieces)
    }
}
