//! The equation algebra.

mod equation;
mod parse;
pub mod terms;

pub use equation::{Coefficients, Degree, DivisionByZero, Equation};
pub use parse::ParseError;
