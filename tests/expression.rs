use ralgebra::{
    parse_expression, AlgebraError, Bindings, Expression, Fraction, Operand, QuadraticCoefficients,
    Term, Variable,
};

fn expr(input: &str) -> Expression {
    parse_expression(input).expect("parse expression")
}

fn frac(n: i64, d: i64) -> Fraction {
    Fraction::new(n, d).expect("nonzero denominator")
}

#[test]
fn add_combines_like_terms() {
    let sum = expr("2x + 3").add(expr("x - 5"));
    assert_eq!(sum.to_string(), "3x - 2");
    assert_eq!(expr("x").add("x").add(1).to_string(), "2x + 1");
}

#[test]
fn subtract_to_zero() {
    let a = expr("x^2 + 2xy");
    assert!(a.subtract(&a).is_zero());
    assert_eq!(a.subtract(&a).to_string(), "0");
}

#[test]
fn multiply_distributes() {
    assert_eq!(expr("x + 1").multiply(expr("x - 1")).to_string(), "x^2 - 1");
    assert_eq!(
        expr("x + y").multiply(expr("x + y")).to_string(),
        "x^2 + y^2 + 2xy"
    );
    assert_eq!(expr("2x").multiply(frac(1, 4)).to_string(), "1/2x");
}

#[test]
fn divide_by_scalars_only() {
    assert_eq!(
        expr("4x + 2").divide(2).expect("scalar divisor").to_string(),
        "2x + 1"
    );
    assert_eq!(expr("x").divide(0).unwrap_err(), AlgebraError::DivideByZero);
    assert!(matches!(
        expr("x").divide("y"),
        Err(AlgebraError::InvalidArgument(_))
    ));
}

#[test]
fn pow_expands() {
    assert_eq!(
        expr("x - 1").pow(3).expect("pow").to_string(),
        "x^3 - 3x^2 + 3x - 1"
    );
    assert_eq!(expr("x + 1").pow(0).expect("pow").to_string(), "1");
    assert!(expr("x").pow(Expression::MAX_POWER + 1).is_err());
}

#[test]
fn unsimplified_results_keep_raw_terms() {
    let raw = expr("x").multiply_with(expr("x + 1"), false);
    assert_eq!(raw.terms().len(), 2);
    assert_eq!(raw.simplify().to_string(), "x^2 + x");
}

#[test]
fn eval_substitutes_numbers_and_expressions() {
    let e = expr("x^2 + 2x + y");
    let mut bindings = Bindings::new();
    bindings.insert("x".to_string(), Operand::from(3));
    assert_eq!(e.eval(&bindings).expect("eval").to_string(), "y + 15");

    let mut bindings = Bindings::new();
    bindings.insert("x".to_string(), Operand::from(expr("y + 1")));
    assert_eq!(
        e.eval(&bindings).expect("eval").to_string(),
        "y^2 + 5y + 3"
    );
}

#[test]
fn degree_queries() {
    let e = expr("x^3 + xy + 2");
    assert_eq!(e.max_degree(), 3);
    assert_eq!(e.max_degree_of_variable("y"), 1);
    assert!(e.has_variable("y"));
    assert!(!e.has_variable("z"));
    assert!(!e.only_has_variable("x"));
    assert!(!e.no_cross_products());
    assert!(expr("x^2 + y").no_cross_products());
    assert!(expr("x + xy").no_cross_products_with_variable("z"));
    assert_eq!(e.variables(), vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn constant_value_of_folded_expression() {
    assert_eq!(expr("1/2 + 1/3").constant_value(), Some(frac(5, 6)));
    assert_eq!(expr("x - x + 2").constant_value(), Some(Fraction::integer(2)));
    assert_eq!(expr("x").constant_value(), None);
}

#[test]
fn quadratic_coefficients_fill_missing_slots() {
    let QuadraticCoefficients { a, b, c } =
        expr("3x^2 - 4").quadratic_coefficients().expect("quadratic");
    assert_eq!(a, Fraction::integer(3));
    assert_eq!(b, Fraction::zero());
    assert_eq!(c, Fraction::integer(-4));
}

#[test]
fn cubic_coefficients() {
    let coeffs = expr("2x^3 - x + 1/2").cubic_coefficients().expect("cubic");
    assert_eq!(coeffs.a, Fraction::integer(2));
    assert_eq!(coeffs.b, Fraction::zero());
    assert_eq!(coeffs.c, Fraction::integer(-1));
    assert_eq!(coeffs.d, frac(1, 2));
}

#[test]
fn coefficients_reject_other_shapes() {
    assert!(expr("x^3").quadratic_coefficients().is_err());
    assert!(expr("xy").quadratic_coefficients().is_err());
}

#[test]
fn negation() {
    assert_eq!((-expr("x - 2")).to_string(), "-x + 2");
}

#[test]
fn max_degree_is_never_negative() {
    let reciprocal = Term::with_variables(Fraction::one(), vec![Variable::with_degree("x", -1)]);
    let e = Expression::from(reciprocal);
    assert_eq!(e.terms().len(), 1);
    assert_eq!(e.max_degree(), 0);
    assert_eq!(expr("x^2 + 1").max_degree(), 2);
}
