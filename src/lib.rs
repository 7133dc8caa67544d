//! Exact symbolic algebra: rational coefficients, polynomial-like expressions,
//! and closed-form solving of linear, quadratic, and cubic equations.

pub mod complex;
pub mod equation;
pub mod error;
pub mod expression;
pub mod format;
pub mod fraction;
pub mod parser;
pub mod prelude;
pub mod rational;
pub mod solver;
pub mod term;
pub mod ui;

pub use complex::Complex;
pub use equation::{Equation, Root, Solution};
pub use error::{AlgebraError, Result};
pub use expression::{Bindings, CubicCoefficients, Expression, Operand, QuadraticCoefficients};
pub use format::{GreekLetters, TexOptions, ToTex};
pub use fraction::Fraction;
pub use parser::{parse_equation, parse_expression};
pub use rational::RationalExpression;
pub use solver::{classify, Shape, SolverOptions};
pub use term::{Term, Variable};
