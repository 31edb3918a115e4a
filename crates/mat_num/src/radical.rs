//! Simplified square-root values: `coefficient * sqrt(radicand)`.
//!
//! Canonical form: the radicand is a square-free non-negative integer (any
//! perfect-square factor is extracted into the coefficient, any denominator
//! is rationalized away), and a zero coefficient forces the radicand to 1 so
//! there is exactly one representation of zero. With both rules in place,
//! structural equality is value equality.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::NumError;
use crate::rational::{self, Rational};

/// `coefficient * sqrt(radicand)` in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radical {
    coefficient: Rational,
    radicand: Rational,
}

/// Split `n >= 0` into `(k, m)` with `n = k^2 * m` and `m` square-free.
///
/// Trial division: factors of 4 are pulled out first (halving the even part
/// quickly), then odd squares up to the shrinking root bound.
fn split_square_factor(n: &BigInt) -> (BigInt, BigInt) {
    debug_assert!(!n.is_negative());
    let mut m = n.clone();
    let mut k = BigInt::one();

    let four = BigInt::from(4);
    let two = BigInt::from(2);
    while (&m % &four).is_zero() {
        m /= &four;
        k *= &two;
    }

    let mut p = BigInt::from(3);
    loop {
        let p2 = &p * &p;
        if p2 > m {
            break;
        }
        while (&m % &p2).is_zero() {
            m /= &p2;
            k *= &p;
        }
        p += 2;
    }

    (k, m)
}

impl Radical {
    /// The canonical zero (`0 * sqrt(1)`).
    pub fn zero() -> Self {
        Radical {
            coefficient: Rational::zero(),
            radicand: Rational::one(),
        }
    }

    /// Wrap a plain rational (`radicand = 1`).
    pub fn from_rational(value: Rational) -> Self {
        if value.is_zero() {
            return Radical::zero();
        }
        Radical {
            coefficient: value,
            radicand: Rational::one(),
        }
    }

    /// Canonicalize `coefficient * sqrt(radicand)` for a non-negative
    /// radicand: rationalize the radicand's denominator, extract every
    /// perfect-square factor, collapse zeros.
    fn canonical(coefficient: Rational, radicand: Rational) -> Self {
        debug_assert!(!radicand.is_negative());
        if coefficient.is_zero() || radicand.is_zero() {
            return Radical::zero();
        }
        // sqrt(n/d) = sqrt(n*d) / d
        let merged = radicand.numer() * radicand.denom();
        let (k, m) = split_square_factor(&merged);
        let scale = BigRational::new(k, radicand.denom().clone());
        Radical {
            coefficient: coefficient * scale,
            radicand: BigRational::from_integer(m),
        }
    }

    /// Checked canonical constructor; negative radicands are a hard error.
    pub fn new(coefficient: Rational, radicand: Rational) -> Result<Self, NumError> {
        if radicand.is_negative() {
            return Err(NumError::NegativeRadicand(rational::format(&radicand)));
        }
        Ok(Self::canonical(coefficient, radicand))
    }

    pub fn coefficient(&self) -> &Rational {
        &self.coefficient
    }

    pub fn radicand(&self) -> &Rational {
        &self.radicand
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// A radical is rational iff its radicand simplified to 1.
    pub fn is_rational(&self) -> bool {
        self.radicand.is_one()
    }

    /// Convert back to a plain rational; fails for genuinely irrational
    /// values.
    pub fn to_rational(&self) -> Result<Rational, NumError> {
        if self.is_rational() {
            Ok(self.coefficient.clone())
        } else {
            Err(NumError::NotRational(self.to_string()))
        }
    }

    pub fn neg(&self) -> Self {
        Radical {
            coefficient: -self.coefficient.clone(),
            radicand: self.radicand.clone(),
        }
    }

    pub fn abs(&self) -> Self {
        Radical {
            coefficient: self.coefficient.abs(),
            radicand: self.radicand.clone(),
        }
    }

    /// Addition requires both operands to live in the same radical family
    /// (identical radicands after simplification). The canonical zero is the
    /// additive identity for every family.
    pub fn add(&self, other: &Self) -> Result<Self, NumError> {
        if self.is_zero() {
            return Ok(other.clone());
        }
        if other.is_zero() {
            return Ok(self.clone());
        }
        if self.radicand != other.radicand {
            return Err(NumError::IncompatibleRadicands(
                rational::format(&self.radicand),
                rational::format(&other.radicand),
            ));
        }
        let sum = &self.coefficient + &other.coefficient;
        if sum.is_zero() {
            return Ok(Radical::zero());
        }
        Ok(Radical {
            coefficient: sum,
            radicand: self.radicand.clone(),
        })
    }

    pub fn sub(&self, other: &Self) -> Result<Self, NumError> {
        self.add(&other.neg())
    }

    /// Multiply coefficients and radicands, then re-simplify the product
    /// radicand, so `sqrt(2) * sqrt(8)` comes out as `4` rather than
    /// `sqrt(16)`.
    pub fn mul(&self, other: &Self) -> Self {
        Self::canonical(
            &self.coefficient * &other.coefficient,
            &self.radicand * &other.radicand,
        )
    }

    /// Multiply by a plain rational.
    pub fn scale(&self, factor: &Rational) -> Self {
        if factor.is_zero() {
            return Radical::zero();
        }
        Radical {
            coefficient: &self.coefficient * factor,
            radicand: self.radicand.clone(),
        }
    }

    /// Exact division, rationalizing the divisor's radicand:
    /// `1 / (c*sqrt(r)) = sqrt(r) / (c*r)`.
    pub fn div(&self, other: &Self) -> Result<Self, NumError> {
        if other.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        let denom = &other.coefficient * &other.radicand;
        Ok(Self::canonical(
            &self.coefficient / denom,
            &self.radicand * &other.radicand,
        ))
    }

    /// Divide by a plain rational.
    pub fn div_rational(&self, divisor: &Rational) -> Result<Self, NumError> {
        if divisor.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(Radical {
            coefficient: &self.coefficient / divisor,
            radicand: self.radicand.clone(),
        })
    }
}

/// Simplified square root of a rational: factor out every perfect square so
/// the radicand ends up square-free (`sqrt(f)` with `f = n/d` becomes
/// `(k/d) * sqrt(m)` where `n*d = k^2 * m`).
pub fn simplify_sqrt(value: &Rational) -> Result<Radical, NumError> {
    if value.is_negative() {
        return Err(NumError::NegativeRadicand(rational::format(value)));
    }
    Ok(Radical::canonical(Rational::one(), value.clone()))
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rational() {
            return write!(f, "{}", rational::format(&self.coefficient));
        }
        let root = format!("sqrt({})", rational::format(&self.radicand));
        if self.coefficient.is_one() {
            write!(f, "{root}")
        } else if self.coefficient == -Rational::one() {
            write!(f, "-{root}")
        } else {
            write!(f, "{}*{root}", rational::format(&self.coefficient))
        }
    }
}
