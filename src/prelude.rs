//! String-based convenience API for quick experimentation.

pub use crate::ui::{equation, parse, simp, simplify, sol, solve, solve_tex, tex};
