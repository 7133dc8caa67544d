//! Formatting helpers for rendering values as plain text and TeX.

pub mod tex;
pub mod text;

pub use tex::{GreekLetters, TexOptions, ToTex};

use crate::fraction::Fraction;

// Join signed pieces as `a + b - c`; an empty list renders as `0`.
fn join_signed(pieces: Vec<(bool, String)>) -> String {
    let mut out = String::new();
    for (i, (negative, body)) in pieces.into_iter().enumerate() {
        match (i, negative) {
            (0, true) => out.push('-'),
            (0, false) => {}
            (_, true) => out.push_str(" - "),
            (_, false) => out.push_str(" + "),
        }
        out.push_str(&body);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

// Coefficient prefix of a term with variables: `` for 1, `-` for -1.
fn split_coefficient(coefficient: &Fraction) -> (bool, Option<Fraction>) {
    let reduced = coefficient.reduce();
    let negative = reduced.is_negative();
    let magnitude = reduced.abs();
    if magnitude.is_one() {
        (negative, None)
    } else {
        (negative, Some(magnitude))
    }
}
