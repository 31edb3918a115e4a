//! Canonical polynomials and equations over a single variable.

use std::collections::BTreeMap;
use std::fmt;

use mat_num::{Radical, Rational};
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::PolyError;
use crate::factor::horner_eval;
use crate::monomial::Monomial;

/// A polynomial in canonical form.
///
/// Terms are grouped by power, zero terms dropped, and the survivors sorted by
/// strictly descending power. A polynomial with no non-constant term carries
/// `variable = None`; the zero polynomial has no terms at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    variable: Option<String>,
    terms: Vec<Monomial>,
}

impl Polynomial {
    pub fn zero() -> Self {
        Polynomial {
            variable: None,
            terms: Vec::new(),
        }
    }

    pub fn constant(value: Radical) -> Self {
        if value.is_zero() {
            return Polynomial::zero();
        }
        Polynomial {
            variable: None,
            terms: vec![Monomial::constant(value)],
        }
    }

    /// Canonicalizes an arbitrary bag of terms: checks that at most one
    /// variable is named, groups by power, drops zeros and orders by
    /// descending power.
    ///
    /// Grouping adds coefficients, so terms of the same power must live in
    /// the same radical family ([`mat_num::NumError::IncompatibleRadicands`]
    /// otherwise).
    pub fn new(terms: Vec<Monomial>) -> Result<Self, PolyError> {
        let mut variable: Option<String> = None;
        for term in &terms {
            if let Some(v) = term.variable() {
                match &variable {
                    Some(seen) if seen != v => {
                        return Err(PolyError::MultipleVariables(seen.clone(), v.to_string()));
                    }
                    Some(_) => {}
                    None => variable = Some(v.to_string()),
                }
            }
        }

        let mut grouped: BTreeMap<Rational, Radical> = BTreeMap::new();
        for term in terms {
            let power = term.power().clone();
            let merged = match grouped.remove(&power) {
                Some(acc) => acc.add(term.coefficient())?,
                None => term.coefficient().clone(),
            };
            grouped.insert(power, merged);
        }

        let mut canonical = Vec::with_capacity(grouped.len());
        for (power, coefficient) in grouped.into_iter().rev() {
            if coefficient.is_zero() {
                continue;
            }
            if power.is_zero() {
                canonical.push(Monomial::constant(coefficient));
            } else {
                // A non-zero power can only have come from a term that named
                // the variable, so `variable` is set here.
                let Some(v) = &variable else {
                    return Err(PolyError::Syntax(format!(
                        "power {power} without a variable"
                    )));
                };
                canonical.push(Monomial::new(coefficient, v, power));
            }
        }

        let has_variable_term = canonical.iter().any(|t| !t.is_constant());
        Ok(Polynomial {
            variable: if has_variable_term { variable } else { None },
            terms: canonical,
        })
    }

    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        self.variable.is_none()
    }

    /// Highest power, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<&Rational> {
        self.terms.first().map(|t| t.power())
    }

    pub fn leading_coefficient(&self) -> Option<&Radical> {
        self.terms.first().map(|t| t.coefficient())
    }

    /// Coefficient of `variable^power`, zero when the term is absent.
    pub fn coefficient_of(&self, power: &Rational) -> Radical {
        self.terms
            .iter()
            .find(|t| t.power() == power)
            .map(|t| t.coefficient().clone())
            .unwrap_or_else(Radical::zero)
    }

    pub fn constant_term(&self) -> Radical {
        self.coefficient_of(&Rational::zero())
    }

    pub fn neg(&self) -> Self {
        Polynomial {
            variable: self.variable.clone(),
            terms: self.terms.iter().map(Monomial::neg).collect(),
        }
    }

    pub fn add(&self, other: &Polynomial) -> Result<Polynomial, PolyError> {
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Polynomial::new(terms)
    }

    pub fn sub(&self, other: &Polynomial) -> Result<Polynomial, PolyError> {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &Polynomial) -> Result<Polynomial, PolyError> {
        let mut products = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                products.push(a.mul(b)?);
            }
        }
        Polynomial::new(products)
    }

    pub fn scale(&self, factor: &Radical) -> Polynomial {
        if factor.is_zero() {
            return Polynomial::zero();
        }
        // Scaling by a non-zero radical keeps every term non-zero and leaves
        // the power order untouched.
        let terms = self
            .terms
            .iter()
            .map(|t| match t.variable() {
                Some(v) => Monomial::new(t.coefficient().mul(factor), v, t.power().clone()),
                None => Monomial::constant(t.coefficient().mul(factor)),
            })
            .collect();
        Polynomial {
            variable: self.variable.clone(),
            terms,
        }
    }

    /// Dense low-to-high rational coefficients.
    ///
    /// Requires every coefficient to be rational and every power to be a
    /// non-negative integer; the zero polynomial yields `[0]`.
    pub fn rational_coefficients(&self) -> Result<Vec<Rational>, PolyError> {
        if self.is_zero() {
            return Ok(vec![Rational::zero()]);
        }
        let mut degree = 0usize;
        let mut sparse = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            let coefficient = term
                .coefficient()
                .to_rational()
                .map_err(|_| PolyError::RadicalCoefficient(term.to_string()))?;
            let power = term.power();
            if !power.is_integer() || power.is_negative() {
                return Err(PolyError::NonIntegerPower(term.to_string()));
            }
            let power = power
                .to_integer()
                .to_usize()
                .ok_or_else(|| PolyError::NonIntegerPower(term.to_string()))?;
            degree = degree.max(power);
            sparse.push((power, coefficient));
        }
        let mut coeffs = vec![Rational::zero(); degree + 1];
        for (power, coefficient) in sparse {
            coeffs[power] = coefficient;
        }
        Ok(coeffs)
    }

    /// Rebuilds a polynomial from dense low-to-high coefficients.
    pub fn from_rational_coefficients(variable: &str, coeffs: &[Rational]) -> Polynomial {
        let mut terms = Vec::new();
        for (power, coefficient) in coeffs.iter().enumerate().rev() {
            if coefficient.is_zero() {
                continue;
            }
            let coefficient = Radical::from_rational(coefficient.clone());
            if power == 0 {
                terms.push(Monomial::constant(coefficient));
            } else {
                terms.push(Monomial::new(
                    coefficient,
                    variable,
                    Rational::from_integer(power.into()),
                ));
            }
        }
        let has_variable_term = terms.iter().any(|t| !t.is_constant());
        Polynomial {
            variable: has_variable_term.then(|| variable.to_string()),
            terms,
        }
    }

    /// The factor `variable - root`.
    pub fn linear_from_root(variable: &str, root: &Rational) -> Polynomial {
        Polynomial::from_rational_coefficients(variable, &[-root.clone(), Rational::one()])
    }

    /// Exact evaluation at a rational point via Horner's rule.
    pub fn evaluate(&self, x: &Rational) -> Result<Rational, PolyError> {
        let coeffs = self.rational_coefficients()?;
        Ok(horner_eval(&coeffs, x))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            let negative = term.coefficient().coefficient().is_negative();
            if i == 0 {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            term.write_magnitude(f)?;
        }
        Ok(())
    }
}

/// An equation `lhs = rhs` between two polynomials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    lhs: Polynomial,
    rhs: Polynomial,
}

impl Equation {
    pub fn new(lhs: Polynomial, rhs: Polynomial) -> Result<Self, PolyError> {
        if let (Some(a), Some(b)) = (lhs.variable(), rhs.variable()) {
            if a != b {
                return Err(PolyError::MultipleVariables(a.to_string(), b.to_string()));
            }
        }
        Ok(Equation { lhs, rhs })
    }

    pub fn lhs(&self) -> &Polynomial {
        &self.lhs
    }

    pub fn rhs(&self) -> &Polynomial {
        &self.rhs
    }

    pub fn variable(&self) -> Option<&str> {
        self.lhs.variable().or(self.rhs.variable())
    }

    /// Moves everything to the left side: the polynomial `lhs - rhs`.
    pub fn normalized(&self) -> Result<Polynomial, PolyError> {
        self.lhs.sub(&self.rhs)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}
