use tracing::debug;

use crate::equation::Root;
use crate::error::Result;
use crate::expression::{Expression, QuadraticCoefficients};
use crate::fraction::Fraction;

/// Real roots of `a·v² + b·v + c = 0`, with `(-b - √D) / 2a` listed first.
pub(super) fn solve(normalized: &Expression) -> Result<Vec<Root>> {
    let QuadraticCoefficients { a, b, c } = normalized.quadratic_coefficients()?;
    let four_ac = a.multiply(&c).multiply(&Fraction::integer(4));
    let discriminant = b.multiply(&b).subtract(&four_ac);
    let two_a = a.multiply(&Fraction::integer(2));
    let neg_b = b.negate();
    debug!(%discriminant, "quadratic discriminant");

    if discriminant.is_negative() {
        return Ok(Vec::new());
    }
    if discriminant.is_zero() {
        return Ok(vec![Root::Exact(neg_b.divide(&two_a)?)]);
    }

    match discriminant.sqrt() {
        Some(root) => Ok(vec![
            Root::Exact(neg_b.subtract(&root).divide(&two_a)?),
            Root::Exact(neg_b.add(&root).divide(&two_a)?),
        ]),
        None => {
            let sqrt_d = discriminant.value_of().sqrt();
            let (neg_b, two_a) = (neg_b.value_of(), two_a.value_of());
            Ok(vec![
                Root::Approximate((neg_b - sqrt_d) / two_a),
                Root::Approximate((neg_b + sqrt_d) / two_a),
            ])
        }
    }
}
