//! A little symbolic algebra system: exact fractions, terms over named
//! variables, and single-variable linear equations.
//!
//! ```
//! use algebra::{Equation, Fraction, Solution, Variable};
//!
//! let x = Variable::named("x");
//! let equation = Equation::new(Fraction::from(2) * x + 3, 7);
//!
//! assert_eq!(equation.to_string(), "2x + 3 = 7");
//! assert_eq!(
//!     equation.solve_for("x"),
//!     Ok(Solution::Value(Fraction::from(2))),
//! );
//! ```

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod emit;
mod equation;
mod expr;
mod fraction;

pub use emit::Latex;
pub use equation::{Equation, Solution, SolveError};
pub use expr::{Expression, Summand, Term, Variable};
pub use fraction::Fraction;
