use std::f64::consts::PI;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, One};
use tracing::{debug, trace};

use crate::equation::Root;
use crate::error::Result;
use crate::expression::{Bindings, CubicCoefficients, Expression, Operand};
use crate::fraction::Fraction;

use super::SolverOptions;

/// Real roots of `a·v³ + b·v² + c·v + d = 0`.
///
/// A vanishing discriminant gives exact roots directly. Otherwise the cubic is
/// depressed with `v = t - b/3a` and solved numerically: Cardano's formula for
/// one real root, the trigonometric method for three. Numeric roots are snapped
/// to exact fractions when one satisfies the polynomial exactly.
pub(super) fn solve(
    normalized: &Expression,
    variable: &str,
    options: &SolverOptions,
) -> Result<Vec<Root>> {
    let coeffs = normalized.cubic_coefficients()?;
    let CubicCoefficients { a, b, c, d } = &coeffs;
    let k = |n: i64| Fraction::integer(n);

    let discriminant = k(18)
        .multiply(a)
        .multiply(b)
        .multiply(c)
        .multiply(d)
        .subtract(&k(4).multiply(&b.pow(3)?).multiply(d))
        .add(&b.pow(2)?.multiply(&c.pow(2)?))
        .subtract(&k(4).multiply(a).multiply(&c.pow(3)?))
        .subtract(&k(27).multiply(&a.pow(2)?).multiply(&d.pow(2)?));
    let d0 = b.pow(2)?.subtract(&k(3).multiply(a).multiply(c));
    debug!(%discriminant, %d0, "cubic discriminant");

    if discriminant.is_zero() {
        if d0.is_zero() {
            let triple = b.negate().divide(&k(3).multiply(a))?;
            return Ok(vec![Root::Exact(triple)]);
        }
        let simple = k(4)
            .multiply(a)
            .multiply(b)
            .multiply(c)
            .subtract(&k(9).multiply(&a.pow(2)?).multiply(d))
            .subtract(&b.pow(3)?)
            .divide(&a.multiply(&d0))?;
        let double = k(9)
            .multiply(a)
            .multiply(d)
            .subtract(&b.multiply(c))
            .divide(&k(2).multiply(&d0))?;
        return Ok(vec![Root::Exact(simple), Root::Exact(double)]);
    }

    // Depressed cubic t³ + p·t + q = 0.
    let p = k(3)
        .multiply(a)
        .multiply(c)
        .subtract(&b.pow(2)?)
        .divide(&k(3).multiply(&a.pow(2)?))?
        .value_of();
    let q = k(2)
        .multiply(&b.pow(3)?)
        .subtract(&k(9).multiply(a).multiply(b).multiply(c))
        .add(&k(27).multiply(&a.pow(2)?).multiply(d))
        .divide(&k(27).multiply(&a.pow(3)?))?
        .value_of();
    let shift = b.divide(&k(3).multiply(a))?.value_of();

    let snapper = Snapper::new(normalized, variable, &coeffs, options);
    if discriminant.is_negative() {
        let delta = (q * q / 4.0 + p * p * p / 27.0).sqrt();
        let t = (-q / 2.0 + delta).cbrt() + (-q / 2.0 - delta).cbrt();
        return Ok(vec![snapper.snap(t - shift)?]);
    }

    let amplitude = 2.0 * (-p / 3.0).sqrt();
    let angle = ((3.0 * q / (2.0 * p)) * (-3.0 / p).sqrt()).clamp(-1.0, 1.0).acos() / 3.0;
    let root = |n: f64| amplitude * (angle - 2.0 * PI * n / 3.0).cos() - shift;
    let (x1, x2, x3) = (root(0.0), root(1.0), root(2.0));
    Ok(vec![
        snapper.snap(x3)?,
        snapper.snap(x2)?,
        snapper.snap(x1)?,
    ])
}

/// Replaces a floating root by an exact fraction when that fraction is a root.
///
/// Candidates come from the rational root theorem: once the polynomial has
/// integer coefficients, every rational root has a denominator dividing the
/// leading coefficient, so `round(r·A)/A` is the only candidate near `r`.
struct Snapper<'a> {
    polynomial: &'a Expression,
    variable: &'a str,
    leading: BigInt,
    tolerance: f64,
}

impl<'a> Snapper<'a> {
    fn new(
        polynomial: &'a Expression,
        variable: &'a str,
        coeffs: &CubicCoefficients,
        options: &SolverOptions,
    ) -> Self {
        let scale = [&coeffs.a, &coeffs.b, &coeffs.c, &coeffs.d]
            .iter()
            .fold(BigInt::one(), |acc, f| acc.lcm(f.reduce().denom()));
        let leading = coeffs.a.multiply(&Fraction::integer(scale));
        Snapper {
            polynomial,
            variable,
            leading: leading.reduce().numer().clone(),
            tolerance: options.snap_tolerance,
        }
    }

    fn snap(&self, root: f64) -> Result<Root> {
        let Some(candidate) = self.candidate(root) else {
            return Ok(Root::Approximate(root));
        };
        if (candidate.value_of() - root).abs() > self.tolerance {
            return Ok(Root::Approximate(root));
        }
        let mut bindings = Bindings::new();
        bindings.insert(self.variable.to_string(), Operand::from(&candidate));
        let residual = self.polynomial.eval(&bindings)?;
        if residual.constant_value().is_some_and(|v| v.is_zero()) {
            trace!(root, %candidate, "snapped cubic root");
            Ok(Root::Exact(candidate))
        } else {
            Ok(Root::Approximate(root))
        }
    }

    fn candidate(&self, root: f64) -> Option<Fraction> {
        let denom = Fraction::integer(self.leading.clone()).value_of();
        let numer = BigInt::from_f64((root * denom).round())?;
        Fraction::new(numer, self.leading.clone())
            .ok()
            .map(|f| f.reduce())
    }
}
