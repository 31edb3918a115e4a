//! Checked construction and helpers for exact rationals.
//!
//! `BigRational` keeps every value in lowest terms with a positive
//! denominator, but its constructors panic on a zero denominator and `/`
//! panics on a zero divisor. The functions here are the non-panicking
//! surface the rest of the workspace uses.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::NumError;

/// The exact scalar type of the whole engine.
pub type Rational = BigRational;

/// Build `numerator / denominator`, rejecting a zero denominator.
pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Rational, NumError> {
    if denominator.is_zero() {
        return Err(NumError::InvalidArgument(format!(
            "{numerator}/0 has a zero denominator"
        )));
    }
    Ok(BigRational::new(numerator, denominator))
}

/// Rational from a machine integer.
#[inline]
pub fn from_int(n: i64) -> Rational {
    BigRational::from_integer(BigInt::from(n))
}

/// Rational from an arbitrary-precision integer.
#[inline]
pub fn from_bigint(n: BigInt) -> Rational {
    BigRational::from_integer(n)
}

/// Exact division; `DivisionByZero` when `divisor` is the zero rational.
pub fn checked_div(value: &Rational, divisor: &Rational) -> Result<Rational, NumError> {
    if divisor.is_zero() {
        return Err(NumError::DivisionByZero);
    }
    Ok(value / divisor)
}

/// Render a rational the way the engine prints every scalar: the denominator
/// is elided when it is 1 (`3`, `-2`, `3/2`).
pub fn format(value: &Rational) -> String {
    if value.is_integer() {
        value.to_integer().to_string()
    } else {
        format!("{}/{}", value.numer(), value.denom())
    }
}

/// Parse `123`, `-7`, `3/2` or a decimal literal such as `8.25` into an
/// exact rational. Decimals convert exactly (`8.25` is `33/4`), never through
/// floating point.
pub fn parse(input: &str) -> Result<Rational, NumError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(NumError::InvalidArgument("empty number".to_string()));
    }

    if let Some((numer, denom)) = text.split_once('/') {
        let n: BigInt = numer
            .trim()
            .parse()
            .map_err(|_| NumError::InvalidArgument(format!("bad numerator in '{text}'")))?;
        let d: BigInt = denom
            .trim()
            .parse()
            .map_err(|_| NumError::InvalidArgument(format!("bad denominator in '{text}'")))?;
        return new(n, d);
    }

    if let Some((int_part, frac_part)) = text.split_once('.') {
        return decimal_to_rational(int_part, frac_part);
    }

    let n: BigInt = text
        .parse()
        .map_err(|_| NumError::InvalidArgument(format!("'{text}' is not a number")))?;
    Ok(BigRational::from_integer(n))
}

/// Convert a decimal split at the dot into `(int*10^k + frac) / 10^k`.
/// Supports `8.2`, `.5`, `8.` and plain digit runs.
pub fn decimal_to_rational(int_part: &str, frac_part: &str) -> Result<Rational, NumError> {
    let int_part = int_part.trim();
    let frac_part = frac_part.trim();
    if frac_part.is_empty() && int_part.is_empty() {
        return Err(NumError::InvalidArgument("'.' is not a number".to_string()));
    }
    if !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(NumError::InvalidArgument(format!(
            "bad fractional digits '{frac_part}'"
        )));
    }

    let negative = int_part.starts_with('-');
    let int_digits = int_part.strip_prefix('-').unwrap_or(int_part);

    let int_val: BigInt = if int_digits.is_empty() {
        BigInt::zero()
    } else {
        int_digits
            .parse()
            .map_err(|_| NumError::InvalidArgument(format!("bad integer digits '{int_part}'")))?
    };

    let mut denominator = BigInt::one();
    let ten = BigInt::from(10);
    for _ in 0..frac_part.len() {
        denominator *= &ten;
    }

    let frac_val: BigInt = if frac_part.is_empty() {
        BigInt::zero()
    } else {
        // all-digit string, parse cannot fail
        frac_part.parse().unwrap_or_else(|_| BigInt::zero())
    };

    let mut numerator = int_val * &denominator + frac_val;
    if negative {
        numerator = -numerator;
    }
    Ok(BigRational::new(numerator, denominator))
}

/// GCD of the absolute numerators of a non-empty slice; zero entries are
/// skipped. Returns 0 only when every entry is zero.
pub fn gcd_of_numerators(values: &[Rational]) -> BigInt {
    let mut g = BigInt::zero();
    for v in values {
        if !v.is_zero() {
            g = g.gcd(&v.numer().abs());
        }
    }
    g
}

/// LCM of the denominators of a slice (1 for an empty slice).
pub fn lcm_of_denominators(values: &[Rational]) -> BigInt {
    let mut l = BigInt::one();
    for v in values {
        l = l.lcm(v.denom());
    }
    l
}

/// Exact integer square root: `Some(s)` iff `n == s*s` with `s >= 0`.
pub fn int_sqrt_exact(n: &BigInt) -> Option<BigInt> {
    if n.is_negative() {
        return None;
    }
    let s = n.sqrt();
    if &(&s * &s) == n {
        Some(s)
    } else {
        None
    }
}

/// Exact rational square root: `Some(r)` iff `value == r*r` with `r >= 0`.
///
/// This is the explicit is-it-a-perfect-square probe the solver uses to pick
/// between rational and radical quadratic roots, replacing the legacy
/// try-and-catch dispatch.
pub fn is_perfect_square(value: &Rational) -> Option<Rational> {
    let n = int_sqrt_exact(value.numer())?;
    let d = int_sqrt_exact(value.denom())?;
    Some(BigRational::new(n, d))
}
