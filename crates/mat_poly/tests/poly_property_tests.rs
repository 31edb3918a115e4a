//! Property tests for the polynomial layer.
//!
//! These pin the algebraic contracts that the unit tests only spot-check:
//! synthetic division must reconstruct the dividend exactly, factorization
//! must expand back to its input, and display must round-trip through the
//! parser.

use mat_num::Rational;
use mat_poly::factor::{
    factor_completely, find_rational_roots, horner_eval, synthetic_division, FactorBudget,
};
use mat_poly::{parse_polynomial, Polynomial};
use num_bigint::BigInt;
use num_traits::Zero;
use proptest::prelude::*;

fn rational(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

fn dense(coeffs: &[i64]) -> Vec<Rational> {
    coeffs.iter().map(|&c| rational(c)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn synthetic_division_reconstructs_dividend(
        raw in prop::collection::vec(-9i64..=9, 2..6),
        root in -5i64..=5,
    ) {
        prop_assume!(raw.last() != Some(&0));
        let coeffs = dense(&raw);
        let root = rational(root);
        let (quotient, remainder) = synthetic_division(&coeffs, &root);

        // p(x) = (x - r) * q(x) + remainder, checked coefficient-wise.
        let mut rebuilt = vec![Rational::zero(); coeffs.len()];
        rebuilt[0] = &remainder - &root * &quotient[0];
        for i in 1..coeffs.len() {
            let high = if i < quotient.len() {
                &root * &quotient[i]
            } else {
                Rational::zero()
            };
            rebuilt[i] = &quotient[i - 1] - high;
        }
        prop_assert_eq!(rebuilt, coeffs);
    }

    #[test]
    fn horner_matches_naive_evaluation(
        raw in prop::collection::vec(-9i64..=9, 1..6),
        x in -6i64..=6,
    ) {
        let coeffs = dense(&raw);
        let x = rational(x);
        let naive = coeffs
            .iter()
            .enumerate()
            .fold(Rational::zero(), |acc, (i, c)| acc + c * x.pow(i as i32));
        prop_assert_eq!(horner_eval(&coeffs, &x), naive);
    }

    #[test]
    fn found_roots_actually_evaluate_to_zero(
        raw in prop::collection::vec(-6i64..=6, 4..7),
    ) {
        prop_assume!(raw.last() != Some(&0));
        let coeffs = dense(&raw);
        let (roots, _) = find_rational_roots(coeffs.clone(), &FactorBudget::default());
        for root in &roots {
            prop_assert!(horner_eval(&coeffs, root).is_zero());
        }
    }

    #[test]
    fn factorization_expands_back_to_input(
        raw in prop::collection::vec(-6i64..=6, 1..6),
    ) {
        prop_assume!(raw.iter().any(|&c| c != 0));
        let p = Polynomial::from_rational_coefficients("x", &dense(&raw));
        let f = factor_completely(&p, &FactorBudget::default()).unwrap();
        prop_assert_eq!(f.expand().unwrap(), p);
    }

    #[test]
    fn display_round_trips_through_parser(
        raw in prop::collection::vec(-9i64..=9, 1..6),
    ) {
        let p = Polynomial::from_rational_coefficients("x", &dense(&raw));
        let reparsed = parse_polynomial(&p.to_string()).unwrap();
        prop_assert_eq!(reparsed, p);
    }

    #[test]
    fn addition_commutes(
        raw_a in prop::collection::vec(-9i64..=9, 1..5),
        raw_b in prop::collection::vec(-9i64..=9, 1..5),
    ) {
        let a = Polynomial::from_rational_coefficients("x", &dense(&raw_a));
        let b = Polynomial::from_rational_coefficients("x", &dense(&raw_b));
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn multiplication_degree_adds(
        raw_a in prop::collection::vec(-9i64..=9, 2..5),
        raw_b in prop::collection::vec(-9i64..=9, 2..5),
    ) {
        prop_assume!(raw_a.last() != Some(&0) && raw_b.last() != Some(&0));
        let a = Polynomial::from_rational_coefficients("x", &dense(&raw_a));
        let b = Polynomial::from_rational_coefficients("x", &dense(&raw_b));
        let product = a.mul(&b).unwrap();
        let expected = rational((raw_a.len() + raw_b.len()) as i64 - 2);
        prop_assert_eq!(product.degree(), Some(&expected));
    }
}
