//! Algebraic invariants of the numeric leaf layer, checked over random
//! inputs: normalization of constructed rationals and the square-free
//! contract of simplified radicals.

use mat_num::radical::simplify_sqrt;
use mat_num::rational;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;

fn nonzero(n: i64) -> i64 {
    if n == 0 {
        1
    } else {
        n
    }
}

/// True when no square factor > 1 divides `n`.
fn is_square_free(n: &BigInt) -> bool {
    let mut m = n.abs();
    let mut d = BigInt::from(2);
    while &d * &d <= m {
        let square = &d * &d;
        if m.is_multiple_of(&square) {
            return false;
        }
        while m.is_multiple_of(&d) {
            m /= &d;
        }
        d += 1;
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn construction_normalizes(n in -1000i64..1000, d in -1000i64..1000) {
        let d = nonzero(d);
        let r = rational::new(n.into(), d.into()).unwrap();
        prop_assert!(r.denom().is_positive());
        prop_assert!(r.numer().gcd(r.denom()).is_one() || r.numer().is_zero());
    }

    #[test]
    fn division_then_multiplication_is_identity(
        a in -500i64..500,
        b in -500i64..500,
    ) {
        let b = nonzero(b);
        let a = rational::from_int(a);
        let b = rational::from_int(b);
        let quotient = rational::checked_div(&a, &b).unwrap();
        prop_assert_eq!(quotient * &b, a);
    }

    #[test]
    fn format_parse_round_trips(n in -10_000i64..10_000, d in 1i64..500) {
        let r = rational::new(n.into(), d.into()).unwrap();
        prop_assert_eq!(rational::parse(&rational::format(&r)).unwrap(), r);
    }

    #[test]
    fn simplified_radicands_are_square_free(n in 0i64..5000, d in 1i64..200) {
        let value = rational::new(n.into(), d.into()).unwrap();
        let radical = simplify_sqrt(&value).unwrap();
        prop_assert!(radical.radicand().is_integer());
        prop_assert!(is_square_free(&radical.radicand().to_integer()));
    }

    #[test]
    fn square_factors_move_to_the_coefficient(k in 1i64..60, m in 1i64..200) {
        // sqrt(k^2 * m) and sqrt(m) expose the same radicand.
        let scaled = simplify_sqrt(&rational::from_int(k * k * m)).unwrap();
        let plain = simplify_sqrt(&rational::from_int(m)).unwrap();
        prop_assert_eq!(scaled.radicand(), plain.radicand());
        prop_assert_eq!(
            scaled.coefficient(),
            &(plain.coefficient() * rational::from_int(k))
        );
    }

    #[test]
    fn radical_squares_back_to_its_input(n in 0i64..2000, d in 1i64..100) {
        let value = rational::new(n.into(), d.into()).unwrap();
        let radical = simplify_sqrt(&value).unwrap();
        let squared = radical.mul(&radical);
        prop_assert_eq!(squared.to_rational().unwrap(), value);
    }
}
