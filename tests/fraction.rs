use num_bigint::BigInt;
use ralgebra::{AlgebraError, Fraction};

fn frac(n: i64, d: i64) -> Fraction {
    Fraction::new(n, d).expect("nonzero denominator")
}

#[test]
fn zero_denominator_is_rejected() {
    assert_eq!(Fraction::new(1, 0).unwrap_err(), AlgebraError::DivideByZero);
}

#[test]
fn reduce_normalizes_sign_and_gcd() {
    let r = frac(6, -8).reduce();
    assert_eq!(r.numer(), &BigInt::from(-3));
    assert_eq!(r.denom(), &BigInt::from(4));
    assert_eq!(frac(0, -7).reduce().denom(), &BigInt::from(1));
}

#[test]
fn arithmetic_returns_reduced_values() {
    assert_eq!(frac(1, 2).add(&frac(1, 3)).to_string(), "5/6");
    assert_eq!(frac(1, 2).subtract(&frac(1, 2)).to_string(), "0");
    assert_eq!(frac(2, 3).multiply(&frac(9, 4)).to_string(), "3/2");
    assert_eq!(
        frac(2, 3).divide(&frac(4, 9)).expect("divide").to_string(),
        "3/2"
    );
}

#[test]
fn division_by_zero_fails() {
    assert_eq!(
        frac(1, 2).divide(&Fraction::zero()).unwrap_err(),
        AlgebraError::DivideByZero
    );
    assert_eq!(
        Fraction::zero().reciprocal().unwrap_err(),
        AlgebraError::DivideByZero
    );
}

#[test]
fn powers_handle_negative_exponents() {
    assert_eq!(frac(2, 3).pow(3).expect("pow"), frac(8, 27));
    assert_eq!(frac(2, 3).pow(-2).expect("pow"), frac(9, 4));
    assert_eq!(frac(5, 7).pow(0).expect("pow"), Fraction::one());
    assert!(Fraction::zero().pow(-1).is_err());
}

#[test]
fn equality_is_by_value() {
    assert_eq!(frac(2, 4), frac(1, 2));
    assert!(frac(-1, 2).equal_to(&frac(1, -2)));
    assert!(frac(1, 3) < frac(1, 2));
    assert!(frac(-1, 2) < Fraction::zero());
}

#[test]
fn predicates() {
    assert!(frac(4, 2).is_integer());
    assert!(!frac(3, 2).is_integer());
    assert!(frac(3, 3).is_one());
    assert!(Fraction::zero().is_zero());
    assert_eq!(frac(-3, 4).abs(), frac(3, 4));
    assert_eq!(-frac(3, 4), frac(-3, 4));
}

#[test]
fn value_of_approximates() {
    assert!((frac(1, 3).value_of() - 0.333_333).abs() < 1e-5);
    assert_eq!(frac(-5, 2).value_of(), -2.5);
}

#[test]
fn float_conversion_accepts_only_integers() {
    assert_eq!(Fraction::try_from(4.0).expect("integral"), Fraction::integer(4));
    assert!(matches!(
        Fraction::try_from(0.5),
        Err(AlgebraError::InvalidArgument(_))
    ));
    assert!(Fraction::try_from(f64::NAN).is_err());
}

#[test]
fn rational_conversion() {
    let f = frac(3, 6);
    let r = f.to_rational();
    assert_eq!(Fraction::from(r), frac(1, 2));
}
