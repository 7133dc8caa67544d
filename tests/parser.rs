use ralgebra::parser::{parse_equation_with, parse_expression_with};
use ralgebra::prelude::*;
use ralgebra::{parse_equation, parse_expression, AlgebraError, Fraction, GreekLetters};

fn rendered(input: &str) -> String {
    parse_expression(input).expect("parse").to_string()
}

#[test]
fn precedence_and_grouping() {
    let cases = vec![
        ("1 + 2 * 3", "7"),
        ("(1 + 2) * 3", "9"),
        ("2^3^2", "512"),
        ("-2^2", "-4"),
        ("2(x + 1)", "2x + 2"),
        ("(x + 1)(x - 1)", "x^2 - 1"),
        ("x * x * x", "x^3"),
        ("6x / 4", "3/2x"),
        ("  x  +  1 ", "x + 1"),
    ];
    for (input, expected) in cases {
        assert_eq!(rendered(input), expected, "parsing {input}");
    }
}

#[test]
fn decimals_become_fractions() {
    let expr = parse_expression("0.75x + 1.5").expect("parse");
    assert_eq!(expr.to_string(), "3/4x + 3/2");
    assert_eq!(
        parse_expression("12.25").expect("parse").constant_value(),
        Some(Fraction::new(49, 4).expect("fraction"))
    );
}

#[test]
fn letter_runs_are_products() {
    assert_eq!(rendered("ab + ba"), "2ab");
    assert_eq!(rendered("3xy^2"), "3y^2x");
}

#[test]
fn custom_greek_set() {
    let greek = GreekLetters::empty().with("rate");
    let expr = parse_expression_with("2rate", &greek).expect("parse");
    assert_eq!(expr.variables(), vec!["rate".to_string()]);

    let split = parse_expression_with("alpha", &GreekLetters::empty()).expect("parse");
    assert_eq!(split.variables().len(), 4);
}

#[test]
fn invalid_inputs() {
    for input in ["", "x +", "(x", "x ^ y", "x / y", "2 $ 3"] {
        assert!(parse_expression(input).is_err(), "{input} should not parse");
    }
    assert!(matches!(
        parse_expression("1 +"),
        Err(AlgebraError::Parse(_))
    ));
    assert!(matches!(
        parse_expression("x^y"),
        Err(AlgebraError::InvalidArgument(_))
    ));
    assert_eq!(
        parse_expression("x / 0").unwrap_err(),
        AlgebraError::DivideByZero
    );
}

#[test]
fn equations_need_one_equals_sign() {
    assert!(matches!(parse_equation("x + 1"), Err(AlgebraError::Parse(_))));
    let eq = parse_equation_with("beta = 2", &GreekLetters::default()).expect("parse");
    assert_eq!(eq.lhs().variables(), vec!["beta".to_string()]);
}

#[test]
fn prelude_helpers() {
    assert_eq!(simp("x + x + 1").expect("simplify"), "2x + 1");
    assert_eq!(sol("x^2 + x - 2 = 0", "x").expect("solve"), "x = [-2, 1]");
    assert_eq!(sol("2x = 1", "x").expect("solve"), "x = 1/2");
    assert_eq!(tex("x^2 = 4").expect("tex"), "x^{2} = 4");
    assert_eq!(tex("x/2").expect("tex"), "\\frac{1}{2}x");
    assert_eq!(
        solve_tex("x + 1 = x + 1", "x").expect("solve"),
        "x = \\mathbb{R}"
    );
    assert_eq!(parse("y").expect("parse").to_string(), "y");
    assert_eq!(simplify("y - y").expect("parse").to_string(), "0");
    assert!(equation("x = 1").expect("parse").is_linear());
    assert!(solve("x^5 = 1", "x").is_err());
}
