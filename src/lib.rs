//! Linear, quadratic, cubic and quartic equations.
//!
//! Equations can be built from their coefficients or parsed from the
//! canonical superscript notation (e.g. `"4x²+12x+40"`), combined with other
//! equations of the same degree, and solved using closed-form formulas.
//!
//! ```rust
//! use polyeq::{Complex, Equation};
//!
//! let first: Equation = "4x²+12x+40".parse()?;
//! let second = Equation::quadratic(2.0, 6.0, 10.0);
//!
//! assert_eq!((first - second).to_string(), "2x²+6x+30");
//!
//! let roots = Equation::quadratic(1.0, 0.0, -4.0).solve()?;
//! assert_eq!(roots, vec![Complex::new(-2.0, 0.0), Complex::new(2.0, 0.0)]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod algebra;
mod closed_form;
#[cfg(test)]
mod proptests;
mod solve;

pub use algebra::{
    terms, Coefficients, Degree, DivisionByZero, Equation, ParseError,
};
pub use nalgebra::Complex;
pub use solve::{solve, Number, SolveError};
