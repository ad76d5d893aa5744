use crate::closed_form::{self, Roots};
use nalgebra::Complex;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Find the roots of `ax⁴ + bx³ + cx² + dx + e`, given between 2 and 5
/// coefficients `a, b, c, d, e`. Coefficients which aren't provided are
/// treated as zero.
///
/// The formula used is picked by looking for the lowest-order coefficient
/// which is nonzero, starting from `e`:
///
/// | Nonzero | Formula                          |
/// | ------- | -------------------------------- |
/// | `e`     | quartic, using `(a, b, c, d, e)` |
/// | `d`     | cubic, using `(a, b, c, d)`      |
/// | `c`     | quadratic, using `(a, b, c)`     |
/// | `b`     | linear, `x = -b/a`               |
/// | (none)  | `[a]`                            |
///
/// This means the highest power isn't necessarily the one you'd expect. For
/// example, `solve(&[0, 0, 0, 0, 5])` goes to the quartic formula even though
/// there is no `x⁴` term. The formulas deal with a zero leading coefficient
/// by falling back to the next lowest degree, so you'll get fewer roots back.
///
/// ```rust
/// # use polyeq::{solve, Complex};
/// let roots = solve(&[1.0, -3.0, 2.0])?;
/// assert_eq!(roots, vec![Complex::new(2.0, 0.0), Complex::new(1.0, 0.0)]);
/// # Ok::<(), polyeq::SolveError>(())
/// ```
pub fn solve<N>(coefficients: &[N]) -> Result<Vec<Complex<f64>>, SolveError>
where
    N: Into<Number> + Copy,
{
    if coefficients.len() < 2 || coefficients.len() > 5 {
        return Err(SolveError::Arity {
            found: coefficients.len(),
        });
    }

    let mut slots = [0.0; 5];

    for (position, &coefficient) in coefficients.iter().enumerate() {
        slots[position] = real_coefficient(position, coefficient.into())?;
    }

    let [a, b, c, d, e] = slots;
    let routine = Routine::select(b, c, d, e);

    let roots: Roots = match routine {
        Routine::Quartic => closed_form::quartic(a, b, c, d, e)?,
        Routine::Cubic => closed_form::cubic(a, b, c, d)?,
        Routine::Quadratic => closed_form::quadratic(a, b, c)?,
        Routine::Linear => closed_form::linear(a, b)?,
        Routine::Fallback => {
            let mut roots = Roots::new();
            roots.push(Complex::new(a, 0.0));
            roots
        },
    };

    tracing::debug!(
        target: "solve",
        %routine,
        roots = roots.len(),
        "Solved a polynomial"
    );

    Ok(roots.into_iter().collect())
}

fn real_coefficient(position: usize, value: Number) -> Result<f64, SolveError> {
    match value {
        Number::Real(value) if value.is_finite() => Ok(value),
        Number::Real(_) => Err(SolveError::NotFinite { position }),
        Number::Complex(value) => {
            Err(SolveError::InvalidCoefficient { position, value })
        },
    }
}

/// The closed-form formula used to find an equation's roots.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Routine {
    Quartic,
    Cubic,
    Quadratic,
    Linear,
    Fallback,
}

impl Routine {
    pub(crate) fn select(b: f64, c: f64, d: f64, e: f64) -> Routine {
        if e != 0.0 {
            Routine::Quartic
        } else if d != 0.0 {
            Routine::Cubic
        } else if c != 0.0 {
            Routine::Quadratic
        } else if b != 0.0 {
            Routine::Linear
        } else {
            Routine::Fallback
        }
    }
}

impl Display for Routine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Routine::Quartic => write!(f, "quartic"),
            Routine::Cubic => write!(f, "cubic"),
            Routine::Quadratic => write!(f, "quadratic"),
            Routine::Linear => write!(f, "linear"),
            Routine::Fallback => write!(f, "fallback"),
        }
    }
}

/// A number passed to [`solve()`].
///
/// Only real numbers may be used as coefficients, complex numbers are
/// accepted here so they can be rejected with a useful error.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Number {
    Real(f64),
    Complex(Complex<f64>),
}

impl From<f64> for Number {
    fn from(value: f64) -> Self { Number::Real(value) }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self { Number::Real(value.into()) }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self { Number::Real(value.into()) }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self { Number::Real(value.into()) }
}

impl From<Complex<f64>> for Number {
    fn from(value: Complex<f64>) -> Self { Number::Complex(value) }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Only 2 to 5 coefficients may be provided.
    Arity { found: usize },
    /// A complex number was used as a coefficient.
    InvalidCoefficient {
        position: usize,
        value: Complex<f64>,
    },
    /// A coefficient was infinite or NaN.
    NotFinite { position: usize },
    /// Every unknown dropped out, leaving a nonzero constant equal to zero.
    Inconsistent,
    /// Every coefficient was zero, so any value is a root.
    Indeterminate,
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Arity { found } => write!(
                f,
                "Expected between 2 and 5 coefficients, but {} were provided",
                found
            ),
            SolveError::InvalidCoefficient { position, value } => write!(
                f,
                "All coefficients must be real, but coefficient {} was {}",
                position, value
            ),
            SolveError::NotFinite { position } => {
                write!(f, "Coefficient {} isn't a finite number", position)
            },
            SolveError::Inconsistent => write!(f, "The equation has no roots"),
            SolveError::Indeterminate => {
                write!(f, "Every coefficient is zero, so any value is a root")
            },
        }
    }
}

impl Error for SolveError {}
