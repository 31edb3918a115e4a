//! Property tests: solving must invert building a polynomial from known
//! roots, and reported root counts must always match the degree.

use mat_num::rational::from_int;
use mat_num::Rational;
use mat_poly::Polynomial;
use mat_solver::{solve_polynomial, ExactRoot, Root, Solution};
use num_traits::Zero;
use proptest::prelude::*;

fn rational_root() -> impl Strategy<Value = Rational> {
    (-6i64..=6).prop_map(from_int)
}

fn poly_from_roots(roots: &[Rational]) -> Polynomial {
    let mut poly = Polynomial::from_rational_coefficients("x", &[from_int(1)]);
    for root in roots {
        let linear = Polynomial::linear_from_root("x", root);
        poly = poly.mul(&linear).unwrap();
    }
    poly
}

fn exact_values(solution: &Solution) -> Vec<Rational> {
    let Solution::Roots { roots, .. } = solution else {
        panic!("expected roots, got {solution:?}");
    };
    roots
        .iter()
        .map(|root| match root {
            Root::Exact(value) => {
                assert!(value.is_rational(), "expected rational root: {value}");
                value.rational_part().clone()
            }
            Root::Unsolvable { factor } => panic!("unexpected marker for {factor}"),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn solving_recovers_planted_rational_roots(
        planted in prop::collection::vec(rational_root(), 1..=4)
    ) {
        let poly = poly_from_roots(&planted);
        let solution = solve_polynomial(&poly).unwrap();
        let mut found = exact_values(&solution);
        let mut expected = planted.clone();
        found.sort();
        expected.sort();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn root_count_matches_degree(
        coeffs in prop::collection::vec(-9i64..=9, 2..=6)
    ) {
        prop_assume!(*coeffs.last().unwrap() != 0);
        let rationals: Vec<Rational> = coeffs.iter().map(|&c| from_int(c)).collect();
        let poly = Polynomial::from_rational_coefficients("x", &rationals);
        let degree = rationals.len() - 1;
        let solution = solve_polynomial(&poly).unwrap();
        let Solution::Roots { roots, .. } = solution else {
            panic!("non-constant polynomial must report roots");
        };
        prop_assert_eq!(roots.len(), degree);
    }

    #[test]
    fn linear_equations_solve_in_closed_form(
        a in 1i64..=9,
        b in -9i64..=9,
    ) {
        let poly = Polynomial::from_rational_coefficients(
            "x",
            &[from_int(b), from_int(a)],
        );
        let solution = solve_polynomial(&poly).unwrap();
        let expected = Solution::Roots {
            variable: "x".to_string(),
            roots: vec![Root::Exact(ExactRoot::from_rational(
                Rational::new((-b).into(), a.into()),
            ))],
        };
        prop_assert_eq!(solution, expected);
    }

    #[test]
    fn exact_quadratic_roots_satisfy_the_equation(
        a in 1i64..=5,
        b in -9i64..=9,
        c in -9i64..=9,
    ) {
        let poly = Polynomial::from_rational_coefficients(
            "x",
            &[from_int(c), from_int(b), from_int(a)],
        );
        let Solution::Roots { roots, .. } = solve_polynomial(&poly).unwrap() else {
            panic!("quadratic must report roots");
        };
        for root in roots {
            if let Root::Exact(value) = root {
                if value.is_rational() {
                    let x = value.rational_part();
                    prop_assert!(poly.evaluate(x).unwrap().is_zero());
                }
            }
        }
    }
}
