//! Closed-form root values.
//!
//! A real root of a rational-coefficient quadratic is `-b/2a ± sqrt(D)/2a`,
//! so the general shape is a rational part plus a radical part. When the
//! discriminant is a perfect square the radical part collapses and the root
//! is plain rational.

use std::fmt;

use mat_num::radical::simplify_sqrt;
use mat_num::{rational, Radical, Rational};
use mat_poly::factor::discriminant;
use mat_poly::{Polynomial, PolyError};
use num_traits::{Signed, Zero};

/// `rational + radical`, e.g. `1 - sqrt(2)` is rational part `1` with
/// radical part `-1 * sqrt(2)`. Rational-valued radicals are folded into
/// the rational part on construction, so the radical part is either zero
/// or genuinely irrational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactRoot {
    rational: Rational,
    radical: Radical,
}

impl ExactRoot {
    pub fn new(rational: Rational, radical: Radical) -> Self {
        match radical.to_rational() {
            Ok(flat) => ExactRoot {
                rational: rational + flat,
                radical: Radical::zero(),
            },
            Err(_) => ExactRoot { rational, radical },
        }
    }

    pub fn from_rational(value: Rational) -> Self {
        ExactRoot {
            rational: value,
            radical: Radical::zero(),
        }
    }

    pub fn rational_part(&self) -> &Rational {
        &self.rational
    }

    pub fn radical_part(&self) -> &Radical {
        &self.radical
    }

    pub fn is_rational(&self) -> bool {
        self.radical.is_zero()
    }
}

impl fmt::Display for ExactRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.radical.is_zero() {
            return write!(f, "{}", rational::format(&self.rational));
        }
        if self.rational.is_zero() {
            return write!(f, "{}", self.radical);
        }
        let joiner = if self.radical.coefficient().is_negative() {
            " - "
        } else {
            " + "
        };
        write!(
            f,
            "{}{}{}",
            rational::format(&self.rational),
            joiner,
            self.radical.abs()
        )
    }
}

/// One reported root of an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root {
    Exact(ExactRoot),
    /// No closed form; carries the irreducible factor it came from. An
    /// irreducible factor of degree `d` contributes `d` of these markers so
    /// the root count always matches the equation's degree.
    Unsolvable { factor: Polynomial },
}

impl Root {
    pub fn rational(value: Rational) -> Self {
        Root::Exact(ExactRoot::from_rational(value))
    }
}

/// Both real roots of `a*x^2 + b*x + c`, plus branch first.
///
/// `None` when `a` is zero or the discriminant is negative, i.e. when there
/// is no pair of real roots to return.
pub fn quadratic_roots(
    a: &Rational,
    b: &Rational,
    c: &Rational,
) -> Result<Option<(ExactRoot, ExactRoot)>, PolyError> {
    if a.is_zero() {
        return Ok(None);
    }
    let delta = discriminant(a, b, c);
    if delta.is_negative() {
        return Ok(None);
    }
    let sqrt_delta = simplify_sqrt(&delta)?;
    let two_a = Rational::from_integer(2.into()) * a;
    let base = -b / &two_a;
    let offset = sqrt_delta.scale(&two_a.recip());
    Ok(Some((
        ExactRoot::new(base.clone(), offset.clone()),
        ExactRoot::new(base, offset.neg()),
    )))
}
