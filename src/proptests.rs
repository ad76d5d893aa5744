//! Property-based tests for equation arithmetic, rendering and solving.

#[cfg(test)]
mod tests {
    use approx::relative_eq;
    use nalgebra::{Complex, Normed};
    use proptest::prelude::*;

    use crate::{Equation, SolveError};

    // Integer-valued coefficients keep addition and subtraction exact
    fn small_coeff() -> impl Strategy<Value = f64> + Clone {
        (-1000i32..1000i32).prop_map(f64::from)
    }

    // Multiples of a quarter render without any rounding
    fn renderable_coeff() -> impl Strategy<Value = f64> + Clone {
        (-400i32..400i32)
            .prop_filter("coefficient must be non-zero", |&k| k != 0)
            .prop_map(|k| f64::from(k) / 4.0)
    }

    fn equation_from(
        coeff: impl Strategy<Value = f64> + Clone,
    ) -> impl Strategy<Value = Equation> {
        (2usize..=5).prop_flat_map(move |len| {
            proptest::collection::vec(coeff.clone(), len).prop_map(
                |coefficients| {
                    Equation::from_coefficients(&coefficients).unwrap()
                },
            )
        })
    }

    fn small_equation() -> impl Strategy<Value = Equation> {
        equation_from(small_coeff())
    }

    // Two equations with the same degree
    fn same_degree_pair() -> impl Strategy<Value = (Equation, Equation)> {
        (2usize..=5).prop_flat_map(|len| {
            let equation = proptest::collection::vec(small_coeff(), len)
                .prop_map(|c| Equation::from_coefficients(&c).unwrap());
            (equation.clone(), equation)
        })
    }

    fn evaluate(coefficients: &[f64], x: Complex<f64>) -> Complex<f64> {
        coefficients
            .iter()
            .fold(Complex::new(0.0, 0.0), |acc, &c| acc * x + c)
    }

    /// How far `x` is from being a root, relative to the size of the terms
    /// being added together.
    fn relative_residual(coefficients: &[f64], x: Complex<f64>) -> f64 {
        let magnitude: f64 = coefficients
            .iter()
            .rev()
            .enumerate()
            .map(|(power, c)| c.abs() * x.norm().powi(power as i32))
            .sum();

        evaluate(coefficients, x).norm() / magnitude.max(1.0)
    }

    fn real_root() -> impl Strategy<Value = f64> {
        -10.0f64..10.0
    }

    // alpha ± beta·i, with beta kept away from zero
    fn complex_pair() -> impl Strategy<Value = (f64, f64)> {
        (-10.0f64..10.0, 0.01f64..10.0)
    }

    fn leading_coefficient() -> impl Strategy<Value = f64> {
        0.5f64..5.0
    }

    /// Expand `lead·(x - r₁)(x - r₂)(x - r₃)(x - r₄)`.
    fn quartic_with_roots(lead: f64, roots: [f64; 4]) -> Equation {
        let [r1, r2, r3, r4] = roots;
        let e1 = r1 + r2 + r3 + r4;
        let e2 = r1 * r2 + r1 * r3 + r1 * r4 + r2 * r3 + r2 * r4 + r3 * r4;
        let e3 = r1 * r2 * r3 + r1 * r2 * r4 + r1 * r3 * r4 + r2 * r3 * r4;
        let e4 = r1 * r2 * r3 * r4;

        Equation::quartic(lead, -lead * e1, lead * e2, -lead * e3, lead * e4)
    }

    /// Expand `lead·(x - r)(x - alpha - beta·i)(x - alpha + beta·i)`.
    fn cubic_with_complex_pair(
        lead: f64,
        r: f64,
        (alpha, beta): (f64, f64),
    ) -> Equation {
        let modulus_squared = alpha * alpha + beta * beta;

        Equation::cubic(
            lead,
            -lead * (r + 2.0 * alpha),
            lead * (2.0 * alpha * r + modulus_squared),
            -lead * r * modulus_squared,
        )
    }

    proptest! {
        #[test]
        fn add_then_subtract_is_identity((p, q) in same_degree_pair()) {
            prop_assert_eq!((p + q) - q, p);
        }

        #[test]
        fn addition_is_commutative((p, q) in same_degree_pair()) {
            prop_assert_eq!(p + q, q + p);
        }

        #[test]
        fn addition_works_coefficient_by_coefficient(
            (p, q) in same_degree_pair(),
        ) {
            let sum = p + q;
            let expected: Vec<f64> = p
                .coefficients()
                .iter()
                .zip(q.coefficients().iter())
                .map(|(left, right)| left + right)
                .collect();

            prop_assert_eq!(sum.degree(), p.degree());
            prop_assert_eq!(sum.coefficients().to_vec(), expected);
        }

        #[test]
        fn different_degrees_cant_be_combined(
            p in small_equation(),
            q in small_equation(),
        ) {
            prop_assume!(p.degree() != q.degree());

            prop_assert!(p.checked_add(q).is_none());
            prop_assert!(p.checked_sub(q).is_none());
        }

        #[test]
        fn rendered_equations_parse_back(
            p in equation_from(renderable_coeff()),
        ) {
            let rendered = p.to_string();
            let got: Equation = rendered.parse().unwrap();

            prop_assert_eq!(got, p, "{}", rendered);
        }

        #[test]
        fn rendering_never_starts_with_a_plus(p in small_equation()) {
            let rendered = p.to_string();

            prop_assert!(!rendered.is_empty());
            prop_assert!(!rendered.starts_with('+'), "{}", rendered);
        }

        #[test]
        fn dividing_by_zero_always_fails(p in small_equation()) {
            prop_assert!(p.divide(0.0).is_err());
            prop_assert!(p.divide(-0.0).is_err());
        }

        #[test]
        fn scale_then_divide_is_identity(
            p in small_equation(),
            factor in 0.5f64..100.0,
        ) {
            let got = p.scale(factor).divide(factor).unwrap();

            prop_assert!(
                relative_eq!(got, p, epsilon = 1e-9, max_relative = 1e-12),
                "{:?} != {:?}",
                got,
                p
            );
        }

        #[test]
        fn quadratic_roots_satisfy_the_equation(
            r1 in -20i32..20,
            r2 in -20i32..20,
            a in 1i32..10,
        ) {
            // keep the constant non-zero so the quadratic formula is used
            prop_assume!(r1 != 0 && r2 != 0);
            let (a, r1, r2) = (f64::from(a), f64::from(r1), f64::from(r2));
            let equation = Equation::quadratic(a, -a * (r1 + r2), a * r1 * r2);

            let roots = equation.solve().unwrap();
            prop_assert_eq!(roots.len(), 2);

            let coefficients = equation.coefficients();
            for root in roots {
                let residual = evaluate(&coefficients, root).norm();
                prop_assert!(residual < 1e-6, "P({}) = {}", root, residual);
            }
        }

        #[test]
        fn cubic_roots_satisfy_the_equation(
            r1 in 1i32..10,
            r2 in 1i32..10,
            r3 in 1i32..10,
        ) {
            let (r1, r2, r3) = (f64::from(r1), f64::from(r2), f64::from(r3));
            let equation = Equation::cubic(
                1.0,
                -(r1 + r2 + r3),
                r1 * r2 + r1 * r3 + r2 * r3,
                -r1 * r2 * r3,
            );

            let roots = equation.solve().unwrap();
            prop_assert_eq!(roots.len(), 3);

            let coefficients = equation.coefficients();
            for root in roots {
                let residual = evaluate(&coefficients, root).norm();
                prop_assert!(residual < 1e-4, "P({}) = {}", root, residual);
            }
        }

        #[test]
        fn cubic_roots_with_a_complex_pair_satisfy_the_equation(
            lead in leading_coefficient(),
            r in real_root(),
            pair in complex_pair(),
        ) {
            let equation = cubic_with_complex_pair(lead, r, pair);
            // a zero constant sends the equation to the quadratic formula
            prop_assume!(equation.constant() != 0.0);

            let roots = equation.solve().unwrap();
            prop_assert_eq!(roots.len(), 3);

            let coefficients = equation.coefficients();
            for root in roots {
                let residual = relative_residual(&coefficients, root);
                prop_assert!(
                    residual < 1e-9,
                    "{}: {} ({})",
                    equation,
                    root,
                    residual
                );
            }
        }

        #[test]
        fn quartic_roots_satisfy_the_equation(
            lead in leading_coefficient(),
            real_roots in [real_root(), real_root(), real_root(), real_root()],
        ) {
            let equation = quartic_with_roots(lead, real_roots);
            prop_assume!(equation.constant() != 0.0);

            let roots = equation.solve().unwrap();
            prop_assert_eq!(roots.len(), 4);

            let coefficients = equation.coefficients();
            for root in roots {
                let residual = relative_residual(&coefficients, root);
                prop_assert!(
                    residual < 1e-9,
                    "{}: {} ({})",
                    equation,
                    root,
                    residual
                );
            }
        }

        #[test]
        fn quartic_roots_with_a_complex_pair_satisfy_the_equation(
            lead in leading_coefficient(),
            r1 in real_root(),
            r2 in real_root(),
            (alpha, beta) in complex_pair(),
        ) {
            // (x - r₁)(x - r₂)(x² - tx + m)
            let (s, p) = (r1 + r2, r1 * r2);
            let (t, m) = (2.0 * alpha, alpha * alpha + beta * beta);
            let equation = Equation::quartic(
                lead,
                -lead * (s + t),
                lead * (p + s * t + m),
                -lead * (p * t + s * m),
                lead * p * m,
            );
            prop_assume!(equation.constant() != 0.0);

            let roots = equation.solve().unwrap();
            prop_assert_eq!(roots.len(), 4);

            let coefficients = equation.coefficients();
            for root in roots {
                let residual = relative_residual(&coefficients, root);
                prop_assert!(
                    residual < 1e-9,
                    "{}: {} ({})",
                    equation,
                    root,
                    residual
                );
            }
        }

        #[test]
        fn complex_coefficients_are_never_accepted(re in -10.0f64..10.0) {
            let coefficients = [Complex::new(re, 1.0), Complex::new(1.0, 0.0)];

            let got = crate::solve(&coefficients);

            let is_invalid_coefficient =
                matches!(got, Err(SolveError::InvalidCoefficient { .. }));
            prop_assert!(is_invalid_coefficient);
        }
    }
}
