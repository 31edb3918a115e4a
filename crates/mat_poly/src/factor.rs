//! Factorization over the rationals.
//!
//! The pipeline mirrors how the factors are reported: numeric content first,
//! then the minimal power of the variable, then linear factors found by the
//! rational root theorem with synthetic deflation, and finally a quadratic
//! split when the discriminant is a perfect square. Anything irreducible over
//! the rationals is kept as a single residual factor.

use std::collections::HashSet;
use std::fmt;

use mat_num::{rational, Radical, Rational};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::debug;

use crate::error::PolyError;
use crate::polynomial::Polynomial;

/// Limits on the root search to keep factorization from exploding.
#[derive(Clone, Debug)]
pub struct FactorBudget {
    /// Cap on rational-root candidates per deflation round.
    pub max_candidates: usize,
    /// Cap on synthetic-division deflations.
    pub max_deflations: usize,
}

impl Default for FactorBudget {
    fn default() -> Self {
        Self {
            max_candidates: 200,
            max_deflations: 32,
        }
    }
}

/// A product of polynomial factors, in reporting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    factors: Vec<Polynomial>,
}

impl Factorization {
    pub fn factors(&self) -> &[Polynomial] {
        &self.factors
    }

    /// Multiplies the factors back together.
    pub fn expand(&self) -> Result<Polynomial, PolyError> {
        let mut product = Polynomial::constant(Radical::from_rational(Rational::one()));
        for factor in &self.factors {
            product = product.mul(factor)?;
        }
        Ok(product)
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "1");
        }
        for (i, factor) in self.factors.iter().enumerate() {
            if i > 0 {
                write!(f, " * ")?;
            }
            if factor.terms().len() > 1 {
                write!(f, "({factor})")?;
            } else {
                write!(f, "{factor}")?;
            }
        }
        Ok(())
    }
}

/// Evaluate dense low-to-high coefficients at `x` using Horner's method.
pub fn horner_eval(coeffs: &[Rational], x: &Rational) -> Rational {
    let mut result = Rational::zero();
    for c in coeffs.iter().rev() {
        result = &result * x + c;
    }
    result
}

/// Scale rational coefficients to integers by the LCM of their denominators.
pub fn normalize_to_integers(coeffs: &[Rational]) -> Vec<BigInt> {
    let lcm = rational::lcm_of_denominators(coeffs);
    let scale = Rational::from_integer(lcm);
    coeffs.iter().map(|c| (c * &scale).to_integer()).collect()
}

fn small_divisors(n: &BigInt) -> Vec<BigInt> {
    if n.is_zero() {
        return vec![];
    }

    let n_u64: u64 = match n.abs().try_into() {
        Ok(v) => v,
        Err(_) => return vec![],
    };

    let mut divs = Vec::new();
    let sqrt_n = (n_u64 as f64).sqrt() as u64;
    for i in 1..=sqrt_n {
        if n_u64 % i == 0 {
            divs.push(BigInt::from(i));
            if i != n_u64 / i {
                divs.push(BigInt::from(n_u64 / i));
            }
        }
    }

    if divs.len() > 50 {
        return vec![];
    }

    divs
}

/// Candidate rational roots `±p/q` per the rational root theorem, with `p`
/// dividing the constant term and `q` the leading coefficient.
///
/// Candidates come out deterministic: integers before fractions, smaller
/// magnitude first, positive before negative. Returns an empty list when the
/// candidate space exceeds `max_candidates`.
pub fn rational_root_candidates(int_coeffs: &[BigInt], max_candidates: usize) -> Vec<Rational> {
    let (Some(a0), Some(an)) = (int_coeffs.first(), int_coeffs.last()) else {
        return vec![];
    };

    if an.is_zero() {
        return vec![];
    }
    if a0.is_zero() {
        return vec![Rational::zero()];
    }

    let divisors_a0 = small_divisors(&a0.abs());
    let divisors_an = small_divisors(&an.abs());
    if divisors_a0.is_empty() || divisors_an.is_empty() {
        return vec![];
    }

    let candidate_count = divisors_a0.len() * divisors_an.len() * 2;
    if candidate_count > max_candidates {
        return vec![];
    }

    let mut candidates = Vec::with_capacity(candidate_count);
    let mut seen = HashSet::new();

    for p in &divisors_a0 {
        for q in &divisors_an {
            let candidate = Rational::new(p.clone(), q.clone());
            let key = (candidate.numer().clone(), candidate.denom().clone());
            if seen.insert(key.clone()) {
                candidates.push(candidate.clone());
                let neg_key = (-key.0, key.1);
                if seen.insert(neg_key) {
                    candidates.push(-candidate);
                }
            }
        }
    }

    candidates.sort_by(|a, b| {
        (!a.is_integer())
            .cmp(&!b.is_integer())
            .then_with(|| a.abs().cmp(&b.abs()))
            .then_with(|| b.cmp(a))
    });
    candidates
}

/// Divide dense low-to-high coefficients by `(x - root)`.
///
/// Returns `(quotient, remainder)`; the remainder is zero exactly when `root`
/// is a root of the polynomial.
pub fn synthetic_division(coeffs: &[Rational], root: &Rational) -> (Vec<Rational>, Rational) {
    let n = coeffs.len();
    if n == 0 {
        return (vec![], Rational::zero());
    }
    if n == 1 {
        return (vec![], coeffs[0].clone());
    }

    let mut quotient = vec![Rational::zero(); n - 1];
    quotient[n - 2] = coeffs[n - 1].clone();
    for i in (0..n - 2).rev() {
        quotient[i] = &coeffs[i + 1] + root * &quotient[i + 1];
    }
    let remainder = &coeffs[0] + root * &quotient[0];

    (quotient, remainder)
}

/// Extract rational roots by repeated candidate testing + synthetic deflation.
///
/// Returns `(roots, residual_coeffs)`. Deflation stops once the residual
/// degree drops to 2, a candidate round finds no root, or the budget runs
/// out; a division whose remainder is not exactly zero never deflates.
pub fn find_rational_roots(
    mut coeffs: Vec<Rational>,
    budget: &FactorBudget,
) -> (Vec<Rational>, Vec<Rational>) {
    let mut roots = Vec::new();
    let mut deflations = 0usize;

    loop {
        // A zero constant term means x = 0 is a root.
        while coeffs.len() > 1 && coeffs[0].is_zero() {
            coeffs.remove(0);
            roots.push(Rational::zero());
        }

        let degree = coeffs.len().saturating_sub(1);
        if degree <= 2 || deflations >= budget.max_deflations {
            break;
        }

        let int_coeffs = normalize_to_integers(&coeffs);
        let candidates = rational_root_candidates(&int_coeffs, budget.max_candidates);
        if candidates.is_empty() {
            break;
        }

        let mut found = false;
        for candidate in &candidates {
            if !horner_eval(&coeffs, candidate).is_zero() {
                continue;
            }
            let (quotient, remainder) = synthetic_division(&coeffs, candidate);
            if !remainder.is_zero() {
                continue;
            }
            debug!(root = %rational::format(candidate), degree, "deflated by rational root");
            roots.push(candidate.clone());
            coeffs = quotient;
            found = true;
            break;
        }

        if !found {
            break;
        }
        deflations += 1;
    }

    (roots, coeffs)
}

/// The quadratic discriminant `b^2 - 4ac`.
pub fn discriminant(a: &Rational, b: &Rational, c: &Rational) -> Rational {
    b * b - Rational::from_integer(4.into()) * a * c
}

/// Both rational roots of `ax^2 + bx + c` when the discriminant is a perfect
/// square, plus-branch first.
pub fn rational_quadratic_roots(
    a: &Rational,
    b: &Rational,
    c: &Rational,
) -> Option<(Rational, Rational)> {
    if a.is_zero() {
        return None;
    }
    let delta = discriminant(a, b, c);
    if delta.is_negative() {
        return None;
    }
    let sqrt_delta = rational::is_perfect_square(&delta)?;
    let two_a = Rational::from_integer(2.into()) * a;
    let x1 = (-b + &sqrt_delta) / &two_a;
    let x2 = (-b - &sqrt_delta) / &two_a;
    Some((x1, x2))
}

/// Numeric content, minimal variable power, and the reduced coefficients left
/// after dividing both out.
struct Extraction {
    content: Rational,
    min_power: usize,
    reduced: Vec<Rational>,
}

fn extract_content(coeffs: &[Rational]) -> Extraction {
    let g = rational::gcd_of_numerators(coeffs);
    let l = rational::lcm_of_denominators(coeffs);
    let content = Rational::new(g, l);
    let min_power = coeffs
        .iter()
        .position(|c| !c.is_zero())
        .unwrap_or(0);
    let reduced = coeffs[min_power..]
        .iter()
        .map(|c| c / &content)
        .collect();
    Extraction {
        content,
        min_power,
        reduced,
    }
}

fn monomial_power(variable: &str, power: usize) -> Polynomial {
    let mut coeffs = vec![Rational::zero(); power + 1];
    coeffs[power] = Rational::one();
    Polynomial::from_rational_coefficients(variable, &coeffs)
}

/// Shared tail handling: split a residual quadratic when possible, otherwise
/// keep the residual whole. Returns an extra constant pulled out by the split.
fn push_residual(
    residual: &[Rational],
    variable: &str,
    tail: &mut Vec<Polynomial>,
) -> Rational {
    let degree = residual.len().saturating_sub(1);
    if degree == 2 {
        let (c, b, a) = (&residual[0], &residual[1], &residual[2]);
        if let Some((x1, x2)) = rational_quadratic_roots(a, b, c) {
            tail.push(Polynomial::linear_from_root(variable, &x1));
            tail.push(Polynomial::linear_from_root(variable, &x2));
            return a.clone();
        }
    }
    if degree >= 1 {
        tail.push(Polynomial::from_rational_coefficients(variable, residual));
        return Rational::one();
    }
    // Constant residual folds into the content.
    residual.first().cloned().unwrap_or_else(Rational::one)
}

fn assemble(
    constant: Rational,
    min_power: usize,
    variable: &str,
    tail: Vec<Polynomial>,
) -> Factorization {
    let mut factors = Vec::with_capacity(tail.len() + 2);
    if !constant.is_one() || (min_power == 0 && tail.is_empty()) {
        factors.push(Polynomial::constant(Radical::from_rational(constant)));
    }
    if min_power > 0 {
        factors.push(monomial_power(variable, min_power));
    }
    factors.extend(tail);
    Factorization { factors }
}

/// One-step factorization: content, minimal power of the variable, and a
/// quadratic split when the discriminant is a perfect square.
///
/// Requires rational coefficients and non-negative integer powers; the zero
/// polynomial has no factorization.
pub fn factor(p: &Polynomial) -> Result<Factorization, PolyError> {
    if p.is_zero() {
        return Err(PolyError::ZeroPolynomial);
    }
    let coeffs = p.rational_coefficients()?;
    let variable = p.variable().unwrap_or("x");

    let Extraction {
        content,
        min_power,
        reduced,
    } = extract_content(&coeffs);
    debug!(
        content = %rational::format(&content),
        min_power,
        "extracted numeric content"
    );

    let mut tail = Vec::new();
    let extra = push_residual(&reduced, variable, &mut tail);
    Ok(assemble(content * extra, min_power, variable, tail))
}

/// Complete factorization over the rationals: content and minimal power
/// first, then rational-root deflation, then the quadratic split on whatever
/// remains.
pub fn factor_completely(p: &Polynomial, budget: &FactorBudget) -> Result<Factorization, PolyError> {
    if p.is_zero() {
        return Err(PolyError::ZeroPolynomial);
    }
    let coeffs = p.rational_coefficients()?;
    let variable = p.variable().unwrap_or("x");

    let Extraction {
        content,
        min_power,
        reduced,
    } = extract_content(&coeffs);

    let (roots, residual) = find_rational_roots(reduced, budget);
    let mut tail: Vec<Polynomial> = roots
        .iter()
        .map(|r| Polynomial::linear_from_root(variable, r))
        .collect();
    let extra = push_residual(&residual, variable, &mut tail);
    Ok(assemble(content * extra, min_power, variable, tail))
}
