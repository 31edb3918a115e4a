//! A single term: coefficient, optional variable, rational power.

use std::fmt;

use mat_num::{rational, Radical, Rational};
use num_traits::{One, Signed, Zero};

use crate::error::PolyError;

/// One term of a polynomial, `coefficient * variable^power`.
///
/// Canonical form: a zero coefficient or a zero power collapses the term to a
/// constant (`variable = None`, `power = 0`), so constants of every origin
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monomial {
    coefficient: Radical,
    variable: Option<String>,
    power: Rational,
}

impl Monomial {
    /// Constant term.
    pub fn constant(coefficient: Radical) -> Self {
        Monomial {
            coefficient,
            variable: None,
            power: Rational::zero(),
        }
    }

    /// Term `coefficient * variable^power`, collapsed to a constant when the
    /// coefficient or the power is zero.
    pub fn new(coefficient: Radical, variable: &str, power: Rational) -> Self {
        if coefficient.is_zero() || power.is_zero() {
            return Monomial::constant(coefficient);
        }
        Monomial {
            coefficient,
            variable: Some(variable.to_string()),
            power,
        }
    }

    pub fn coefficient(&self) -> &Radical {
        &self.coefficient
    }

    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    pub fn power(&self) -> &Rational {
        &self.power
    }

    pub fn is_constant(&self) -> bool {
        self.variable.is_none()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn neg(&self) -> Self {
        Monomial {
            coefficient: self.coefficient.neg(),
            variable: self.variable.clone(),
            power: self.power.clone(),
        }
    }

    /// Product of two terms. Fails when the factors name different variables.
    pub fn mul(&self, other: &Monomial) -> Result<Monomial, PolyError> {
        let variable = match (&self.variable, &other.variable) {
            (Some(a), Some(b)) if a != b => {
                return Err(PolyError::MultipleVariables(a.clone(), b.clone()));
            }
            (Some(a), _) => Some(a.clone()),
            (None, b) => b.clone(),
        };
        let coefficient = self.coefficient.mul(&other.coefficient);
        let power = &self.power + &other.power;
        Ok(match variable {
            Some(v) => Monomial::new(coefficient, &v, power),
            None => Monomial::constant(coefficient),
        })
    }

    /// Writes the term without its sign; `Polynomial`'s display joins terms
    /// with explicit `+`/`-` separators.
    pub(crate) fn write_magnitude(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.coefficient.abs();
        let Some(variable) = &self.variable else {
            return write!(f, "{magnitude}");
        };
        if magnitude.is_rational() {
            // Rational coefficients attach directly: `3x^2`, `1/2x`.
            if !magnitude.coefficient().is_one() {
                write!(f, "{}", rational::format(magnitude.coefficient()))?;
            }
        } else {
            write!(f, "{magnitude}*")?;
        }
        write!(f, "{variable}")?;
        if self.power.is_one() {
            Ok(())
        } else if self.power.is_integer() && self.power.is_positive() {
            write!(f, "^{}", self.power.numer())
        } else {
            write!(f, "^({})", rational::format(&self.power))
        }
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient.coefficient().is_negative() {
            write!(f, "-")?;
        }
        self.write_magnitude(f)
    }
}
