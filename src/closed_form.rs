//! Closed-form root formulas for polynomials up to the fourth degree.
//!
//! Each routine takes real coefficients (highest power first) and gives back
//! every root, real or complex, with repeated roots listed once per
//! multiplicity. A zero leading coefficient drops the routine down to the
//! formula for the next lowest degree, so the root set may be smaller than
//! the nominal degree. Quartic roots get a couple of Newton-Raphson steps
//! afterwards, since depressing the polynomial can throw away precision.
//!
//! See also:
//!
//! - https://en.wikipedia.org/wiki/Quadratic_formula
//! - https://en.wikipedia.org/wiki/Cubic_equation#Cardano's_formula
//! - https://en.wikipedia.org/wiki/Quartic_function#Ferrari's_solution

use crate::solve::SolveError;
use arrayvec::ArrayVec;
use euclid::approxeq::ApproxEq;
use nalgebra::{Complex, ComplexField, Normed};
use std::{cmp::Ordering, f64::consts::PI};

/// The roots of a polynomial, in no particular order.
pub(crate) type Roots = ArrayVec<[Complex<f64>; 4]>;

/// How close a discriminant needs to be to zero, relative to the size of the
/// terms it was calculated from, before we treat it as zero.
const RELATIVE_TOLERANCE: f64 = 1e-12;

/// `ax + b = 0`
pub(crate) fn linear(a: f64, b: f64) -> Result<Roots, SolveError> {
    if a == 0.0 {
        return Err(if b == 0.0 {
            SolveError::Indeterminate
        } else {
            SolveError::Inconsistent
        });
    }

    let mut roots = Roots::new();
    roots.push(real(-b / a));
    Ok(roots)
}

/// `ax² + bx + c = 0`
pub(crate) fn quadratic(a: f64, b: f64, c: f64) -> Result<Roots, SolveError> {
    if a == 0.0 {
        return linear(b, c);
    }

    let discriminant = b * b - 4.0 * a * c;
    let mut roots = Roots::new();

    if discriminant >= 0.0 {
        // Pick the sign which avoids cancellation, then get the second root
        // from the product of the roots (c/a).
        let q = -0.5 * (b + discriminant.sqrt().copysign(b));

        if q == 0.0 {
            // b and c are both zero
            roots.push(real(0.0));
            roots.push(real(0.0));
        } else {
            roots.push(real(q / a));
            roots.push(real(c / q));
        }
    } else {
        let real_part = -b / (2.0 * a);
        let imaginary_part = (-discriminant).sqrt() / (2.0 * a).abs();
        roots.push(Complex::new(real_part, imaginary_part));
        roots.push(Complex::new(real_part, -imaginary_part));
    }

    Ok(roots)
}

/// `ax³ + bx² + cx + d = 0`, using Cardano's method.
pub(crate) fn cubic(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
) -> Result<Roots, SolveError> {
    if a == 0.0 {
        return quadratic(b, c, d);
    }

    let (b, c, d) = (b / a, c / a, d / a);

    // substitute x = t - b/3 to get the depressed cubic, t³ + pt + q = 0
    let shift = b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;

    let half_q = q / 2.0;
    let third_p_cubed = (p / 3.0).powi(3);
    let discriminant = half_q * half_q + third_p_cubed;

    let mut roots = Roots::new();

    if is_negligible(discriminant, half_q * half_q + third_p_cubed.abs()) {
        if is_negligible(p, b * b / 3.0 + c.abs()) {
            // a triple root
            for _ in 0..3 {
                roots.push(real(-shift));
            }
        } else {
            // one single root and one double root
            let single = 3.0 * q / p;
            let double = -3.0 * q / (2.0 * p);
            roots.push(real(single - shift));
            roots.push(real(double - shift));
            roots.push(real(double - shift));
        }
    } else if discriminant > 0.0 {
        // one real root and a complex conjugate pair. Only one of
        // -q/2 ± √Δ is free of cancellation, the other cube root comes from
        // uv = -p/3.
        let sqrt_discriminant = discriminant.sqrt();
        let u = (-half_q - sqrt_discriminant.copysign(half_q)).cbrt();
        let v = if u == 0.0 { 0.0 } else { -p / (3.0 * u) };

        let real_part = -(u + v) / 2.0 - shift;
        let imaginary_part = 3_f64.sqrt() / 2.0 * (u - v);

        roots.push(real(u + v - shift));
        roots.push(Complex::new(real_part, imaginary_part));
        roots.push(Complex::new(real_part, -imaginary_part));
    } else {
        // three distinct real roots, found with the trigonometric method
        let amplitude = 2.0 * (-p / 3.0).sqrt();
        let cos_3_theta = (3.0 * q / (2.0 * p) * (-3.0 / p).sqrt())
            .max(-1.0)
            .min(1.0);
        let theta = cos_3_theta.acos() / 3.0;

        for k in 0..3 {
            let angle = theta - 2.0 * PI * f64::from(k) / 3.0;
            roots.push(real(amplitude * angle.cos() - shift));
        }
    }

    Ok(roots)
}

/// `ax⁴ + bx³ + cx² + dx + e = 0`, using Ferrari's method.
pub(crate) fn quartic(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
) -> Result<Roots, SolveError> {
    if a == 0.0 {
        return cubic(b, c, d, e);
    }

    let (b, c, d, e) = (b / a, c / a, d / a, e / a);
    let monic = [1.0, b, c, d, e];

    // substitute x = y - b/4 to get the depressed quartic,
    // y⁴ + py² + qy + r = 0
    let shift = b / 4.0;
    let b_squared = b * b;
    let p = c - 3.0 * b_squared / 8.0;
    let q = b_squared * b / 8.0 - b * c / 2.0 + d;
    let r = -3.0 * b_squared * b_squared / 256.0 + b_squared * c / 16.0
        - b * d / 4.0
        + e;

    let q_scale = (b_squared * b / 8.0).abs() + (b * c / 2.0).abs() + d.abs();

    let depressed_roots = if is_negligible(q, q_scale) {
        // biquadratic, solve for z = y² and take both square roots
        let mut depressed_roots = Roots::new();

        for z in &monic_quadratic(real(p), real(r)) {
            let y = z.sqrt();
            depressed_roots.push(y);
            depressed_roots.push(-y);
        }

        depressed_roots
    } else {
        // Rewrite as (y² + p/2 + m)² = 2m·y² - q·y + m² + mp + p²/4 - r and
        // choose m so the right hand side is a perfect square. The resolvent
        // cubic for m can't have zero as a root because q != 0.
        let resolvent = cubic(8.0, 8.0 * p, 2.0 * p * p - 8.0 * r, -q * q)?;
        let m = resolvent
            .iter()
            .copied()
            .max_by(|left, right| {
                left.norm()
                    .partial_cmp(&right.norm())
                    .unwrap_or(Ordering::Equal)
            })
            .ok_or(SolveError::Indeterminate)?;

        let s = (m * 2.0).sqrt();
        let offset = Complex::from(q) / (s * 2.0);
        let constant = m + p / 2.0;

        let mut depressed_roots = Roots::new();
        for &(sign, adjustment) in &[(-1.0, offset), (1.0, -offset)] {
            let pair = monic_quadratic(s * sign, constant + adjustment);
            depressed_roots.extend(pair.iter().copied());
        }
        depressed_roots
    };

    Ok(depressed_roots
        .iter()
        .map(|&y| polish(&monic, y - shift))
        .collect())
}

/// Tidy up a root with a couple of Newton-Raphson steps, only keeping a step
/// when it moves the polynomial closer to zero.
fn polish(coefficients: &[f64], root: Complex<f64>) -> Complex<f64> {
    let mut root = root;

    for _ in 0..2 {
        let (value, slope) = evaluate(coefficients, root);
        if slope == Complex::new(0.0, 0.0) {
            break;
        }

        let candidate = root - value / slope;
        if evaluate(coefficients, candidate).0.norm() >= value.norm() {
            break;
        }
        root = candidate;
    }

    root
}

/// Evaluate a polynomial (highest power first) and its derivative at `x`.
fn evaluate(
    coefficients: &[f64],
    x: Complex<f64>,
) -> (Complex<f64>, Complex<f64>) {
    let zero = Complex::new(0.0, 0.0);

    coefficients.iter().fold((zero, zero), |(value, slope), &c| {
        (value * x + c, slope * x + value)
    })
}

/// The roots of `x² + bx + c` for complex `b` and `c`.
fn monic_quadratic(b: Complex<f64>, c: Complex<f64>) -> [Complex<f64>; 2] {
    let sqrt_discriminant = (b * b - c * 4.0).sqrt();

    [(-b + sqrt_discriminant) / 2.0, (-b - sqrt_discriminant) / 2.0]
}

fn real(value: f64) -> Complex<f64> { Complex::new(value, 0.0) }

/// Is `value` indistinguishable from zero, given it was calculated from terms
/// whose magnitudes add up to `scale`?
fn is_negligible(value: f64, scale: f64) -> bool {
    let epsilon = RELATIVE_TOLERANCE * scale.max(std::f64::MIN_POSITIVE);
    value.approx_eq_eps(&0.0, &epsilon)
}
