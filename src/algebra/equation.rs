use crate::{
    algebra::{parse, terms, ParseError},
    solve::SolveError,
};
use approx::{AbsDiffEq, RelativeEq};
use arrayvec::ArrayVec;
use nalgebra::Complex;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

/// An equation's coefficients, highest power first.
pub type Coefficients = ArrayVec<[f64; 5]>;

/// A polynomial equation of degree one to four.
///
/// Nothing stops the leading coefficient from being zero, so an
/// [`Equation::Quadratic`] may really be a linear equation in disguise. How
/// those equations get solved is up to [`crate::solve()`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Equation {
    /// `ax + b`
    Linear { a: f64, b: f64 },
    /// `ax² + bx + c`
    Quadratic { a: f64, b: f64, c: f64 },
    /// `ax³ + bx² + cx + d`
    Cubic { a: f64, b: f64, c: f64, d: f64 },
    /// `ax⁴ + bx³ + cx² + dx + e`
    Quartic {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
    },
}

impl Equation {
    /// Create an equation from an array of coefficients, highest power first.
    ///
    /// ```rust
    /// # use polyeq::Equation;
    /// let equation = Equation::new([4.0, 12.0, 40.0]);
    /// assert_eq!(equation, Equation::quadratic(4.0, 12.0, 40.0));
    /// ```
    pub fn new<C>(coefficients: C) -> Self
    where
        C: Into<Equation>,
    {
        coefficients.into()
    }

    pub fn linear(a: f64, b: f64) -> Self { Equation::Linear { a, b } }

    pub fn quadratic(a: f64, b: f64, c: f64) -> Self {
        Equation::Quadratic { a, b, c }
    }

    pub fn cubic(a: f64, b: f64, c: f64, d: f64) -> Self {
        Equation::Cubic { a, b, c, d }
    }

    pub fn quartic(a: f64, b: f64, c: f64, d: f64, e: f64) -> Self {
        Equation::Quartic { a, b, c, d, e }
    }

    /// Create an equation from a slice of 2 to 5 coefficients.
    pub fn from_coefficients(coefficients: &[f64]) -> Option<Self> {
        match *coefficients {
            [a, b] => Some(Equation::linear(a, b)),
            [a, b, c] => Some(Equation::quadratic(a, b, c)),
            [a, b, c, d] => Some(Equation::cubic(a, b, c, d)),
            [a, b, c, d, e] => Some(Equation::quartic(a, b, c, d, e)),
            _ => None,
        }
    }

    /// Parse an equation of a particular [`Degree`] from its canonical form.
    ///
    /// ```rust
    /// # use polyeq::{Degree, Equation};
    /// let equation = Equation::parse_as("x² - 3x + 2", Degree::Quadratic)?;
    /// assert_eq!(equation, Equation::quadratic(1.0, -3.0, 2.0));
    /// # Ok::<(), polyeq::ParseError>(())
    /// ```
    pub fn parse_as(src: &str, degree: Degree) -> Result<Self, ParseError> {
        parse::parse(src, Some(degree))
    }

    pub fn degree(&self) -> Degree {
        match self {
            Equation::Linear { .. } => Degree::Linear,
            Equation::Quadratic { .. } => Degree::Quadratic,
            Equation::Cubic { .. } => Degree::Cubic,
            Equation::Quartic { .. } => Degree::Quartic,
        }
    }

    pub fn coefficients(&self) -> Coefficients {
        match *self {
            Equation::Linear { a, b } => [a, b].iter().copied().collect(),
            Equation::Quadratic { a, b, c } => {
                [a, b, c].iter().copied().collect()
            },
            Equation::Cubic { a, b, c, d } => {
                [a, b, c, d].iter().copied().collect()
            },
            Equation::Quartic { a, b, c, d, e } => {
                [a, b, c, d, e].iter().copied().collect()
            },
        }
    }

    pub fn leading_coefficient(&self) -> f64 {
        match *self {
            Equation::Linear { a, .. }
            | Equation::Quadratic { a, .. }
            | Equation::Cubic { a, .. }
            | Equation::Quartic { a, .. } => a,
        }
    }

    pub fn constant(&self) -> f64 {
        match *self {
            Equation::Linear { b, .. } => b,
            Equation::Quadratic { c, .. } => c,
            Equation::Cubic { d, .. } => d,
            Equation::Quartic { e, .. } => e,
        }
    }

    /// Multiply every coefficient by `factor`.
    pub fn scale(self, factor: f64) -> Self { self.map(|c| c * factor) }

    /// Divide every coefficient by `divisor`.
    pub fn divide(self, divisor: f64) -> Result<Self, DivisionByZero> {
        if divisor == 0.0 {
            Err(DivisionByZero)
        } else {
            Ok(self.map(|c| c / divisor))
        }
    }

    /// Add two equations, returning `None` if they have different degrees.
    pub fn checked_add(self, other: Equation) -> Option<Self> {
        self.zip_with(other, |left, right| left + right)
    }

    /// Subtract `other` from this equation, returning `None` if they have
    /// different degrees.
    pub fn checked_sub(self, other: Equation) -> Option<Self> {
        self.zip_with(other, |left, right| left - right)
    }

    /// Find the equation's roots.
    ///
    /// The coefficients are handed to [`crate::solve()`] as-is, so the usual
    /// degree dispatch rules apply.
    pub fn solve(&self) -> Result<Vec<Complex<f64>>, SolveError> {
        crate::solve(self.coefficients().as_slice())
    }

    fn map<F>(self, mut op: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        match self {
            Equation::Linear { a, b } => Equation::linear(op(a), op(b)),
            Equation::Quadratic { a, b, c } => {
                Equation::quadratic(op(a), op(b), op(c))
            },
            Equation::Cubic { a, b, c, d } => {
                Equation::cubic(op(a), op(b), op(c), op(d))
            },
            Equation::Quartic { a, b, c, d, e } => {
                Equation::quartic(op(a), op(b), op(c), op(d), op(e))
            },
        }
    }

    fn zip_with<F>(self, other: Equation, mut op: F) -> Option<Self>
    where
        F: FnMut(f64, f64) -> f64,
    {
        if self.degree() != other.degree() {
            return None;
        }

        let combined: Coefficients = self
            .coefficients()
            .iter()
            .zip(other.coefficients().iter())
            .map(|(&left, &right)| op(left, right))
            .collect();

        Equation::from_coefficients(&combined)
    }
}

impl Display for Equation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&terms::render(&self.coefficients()))
    }
}

impl FromStr for Equation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse::parse(s, None) }
}

// operator overloads for combining equations of the same degree

impl Add for Equation {
    type Output = Equation;

    fn add(self, rhs: Equation) -> Equation {
        match self.checked_add(rhs) {
            Some(sum) => sum,
            None => panic!(
                "Unable to add a {} equation to a {} equation",
                rhs.degree(),
                self.degree()
            ),
        }
    }
}

impl Sub for Equation {
    type Output = Equation;

    fn sub(self, rhs: Equation) -> Equation {
        match self.checked_sub(rhs) {
            Some(difference) => difference,
            None => panic!(
                "Unable to subtract a {} equation from a {} equation",
                rhs.degree(),
                self.degree()
            ),
        }
    }
}

impl Mul<f64> for Equation {
    type Output = Equation;

    fn mul(self, rhs: f64) -> Equation { self.scale(rhs) }
}

impl Neg for Equation {
    type Output = Equation;

    fn neg(self) -> Self::Output { self.scale(-1.0) }
}

impl AbsDiffEq for Equation {
    type Epsilon = f64;

    fn default_epsilon() -> f64 { f64::default_epsilon() }

    fn abs_diff_eq(&self, other: &Equation, epsilon: f64) -> bool {
        self.degree() == other.degree()
            && self
                .coefficients()
                .iter()
                .zip(other.coefficients().iter())
                .all(|(left, right)| left.abs_diff_eq(right, epsilon))
    }
}

impl RelativeEq for Equation {
    fn default_max_relative() -> f64 { f64::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Equation,
        epsilon: f64,
        max_relative: f64,
    ) -> bool {
        self.degree() == other.degree()
            && self
                .coefficients()
                .iter()
                .zip(other.coefficients().iter())
                .all(|(left, right)| {
                    left.relative_eq(right, epsilon, max_relative)
                })
    }
}

/// Implement `From<[f64; N]>` for each equation variant.
macro_rules! equation_array_impls {
    ($( $n:expr => $variant:ident { $($field:ident),* } ),* $(,)?) => {
        $(
            impl From<[f64; $n]> for Equation {
                fn from([$($field),*]: [f64; $n]) -> Self {
                    Equation::$variant { $($field),* }
                }
            }
        )*
    };
}

equation_array_impls! {
    2 => Linear { a, b },
    3 => Quadratic { a, b, c },
    4 => Cubic { a, b, c, d },
    5 => Quartic { a, b, c, d, e },
}

/// The highest power in an [`Equation`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Degree {
    Linear = 1,
    Quadratic = 2,
    Cubic = 3,
    Quartic = 4,
}

impl Degree {
    pub fn from_power(power: usize) -> Option<Degree> {
        match power {
            1 => Some(Degree::Linear),
            2 => Some(Degree::Quadratic),
            3 => Some(Degree::Cubic),
            4 => Some(Degree::Quartic),
            _ => None,
        }
    }

    pub fn power(self) -> usize { self as usize }

    /// The number of terms in an equation of this degree.
    pub fn terms(self) -> usize { self.power() + 1 }
}

impl Display for Degree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Degree::Linear => write!(f, "linear"),
            Degree::Quadratic => write!(f, "quadratic"),
            Degree::Cubic => write!(f, "cubic"),
            Degree::Quartic => write!(f, "quartic"),
        }
    }
}

/// The error returned when dividing an [`Equation`] by zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DivisionByZero;

impl Display for DivisionByZero {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to divide an equation by zero")
    }
}

impl Error for DivisionByZero {}
