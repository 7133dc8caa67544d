use std::collections::BTreeMap;

use ralgebra::{Bindings, Fraction, Operand, Term, Variable};

fn frac(n: i64, d: i64) -> Fraction {
    Fraction::new(n, d).expect("nonzero denominator")
}

fn term(coefficient: Fraction, vars: &[(&str, i64)]) -> Term {
    let variables = vars
        .iter()
        .map(|(s, d)| Variable::with_degree(*s, *d))
        .collect();
    Term::with_variables(coefficient, variables)
}

#[test]
fn simplify_merges_symbols_and_sorts() {
    let t = term(frac(3, 1), &[("x", 1), ("y", 2), ("x", 1)]).simplify();
    assert_eq!(t.to_string(), "3x^2y^2");
    let t = term(frac(2, 1), &[("y", 1), ("x", 2)]).simplify();
    assert_eq!(t.to_string(), "2x^2y");
}

#[test]
fn zero_degrees_disappear() {
    let t = term(frac(5, 1), &[("x", 1), ("x", -1)]);
    assert!(t.is_constant());
    assert_eq!(t.simplify().to_string(), "5");
}

#[test]
fn combining_requires_matching_signatures() {
    let a = term(frac(2, 1), &[("x", 1), ("y", 1)]);
    let b = term(frac(3, 1), &[("y", 1), ("x", 1)]);
    assert!(a.can_be_combined_with(&b));
    assert_eq!(a.add(&b).expect("like terms").to_string(), "5xy");
    assert_eq!(a.subtract(&b).expect("like terms").to_string(), "-xy");

    let c = term(frac(1, 1), &[("x", 2)]);
    assert!(!a.can_be_combined_with(&c));
    assert!(a.add(&c).is_err());
}

#[test]
fn multiply_adds_degrees() {
    let a = term(frac(1, 2), &[("x", 1)]);
    let b = term(frac(4, 1), &[("x", 2), ("y", 1)]);
    assert_eq!(a.multiply(&b).to_string(), "2x^3y");
}

#[test]
fn divide_subtracts_degrees() {
    let a = term(frac(6, 1), &[("x", 3), ("y", 1)]);
    let b = term(frac(3, 1), &[("x", 1), ("y", 1)]);
    assert_eq!(a.divide(&b).expect("divide").to_string(), "2x^2");
    assert!(a.divide_scalar(&Fraction::zero()).is_err());
}

#[test]
fn degree_queries() {
    let t = term(frac(1, 1), &[("x", 3), ("y", 1)]);
    assert_eq!(t.max_degree(), 3);
    assert_eq!(t.degree_of("y"), 1);
    assert_eq!(t.degree_of("z"), 0);
    assert!(t.has_variable("x"));
    assert_eq!(t.symbol_count(), 2);
}

#[test]
fn evaluate_at_substitutes_bound_symbols() {
    let t = term(frac(3, 1), &[("x", 2), ("y", 1)]);
    let mut bindings: Bindings = BTreeMap::new();
    bindings.insert("x".to_string(), Operand::from(2));
    let partial = t.evaluate_at(&bindings).expect("evaluate");
    assert_eq!(partial.to_string(), "12y");

    bindings.insert("y".to_string(), Operand::from(frac(1, 4)));
    let full = t.evaluate_at(&bindings).expect("evaluate");
    assert_eq!(full.constant_value(), Some(Fraction::integer(3)));
}

#[test]
fn evaluate_at_expands_expression_values() {
    let t = term(frac(1, 1), &[("x", 2)]);
    let mut bindings = Bindings::new();
    bindings.insert("x".to_string(), Operand::from("y"));
    assert_eq!(t.evaluate_at(&bindings).expect("evaluate").to_string(), "y^2");
}

#[test]
fn negation() {
    let t = Term::new(Variable::new("x"));
    assert_eq!((-t).to_string(), "-x");
}

#[test]
fn equality_ignores_variable_order() {
    let xy = term(frac(2, 1), &[("x", 1), ("y", 1)]);
    let yx = term(frac(4, 2), &[("y", 1), ("x", 1)]);
    assert_eq!(xy, yx);
    assert_eq!(term(frac(1, 1), &[("x", 1), ("x", 1)]), term(frac(1, 1), &[("x", 2)]));
    assert_ne!(xy, term(frac(2, 1), &[("x", 1)]));
}
