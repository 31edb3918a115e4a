//! Equation solving by degree dispatch on the standard form `P(x) = 0`.
//!
//! Degrees 0 through 2 have closed forms. Higher degrees go through complete
//! factorization and each factor is solved on its own; a factor the engine
//! cannot crack degrades to [`Root::Unsolvable`] markers instead of wiping
//! out the roots already found. Radical coefficients are rejected before any
//! dispatch happens, because factorization and root search both work over
//! the rationals.

use std::fmt;

use mat_num::Rational;
use mat_poly::factor::{factor_completely, FactorBudget};
use mat_poly::{Equation, PolyError, Polynomial};
use num_traits::Zero;
use tracing::debug;

use crate::roots::{quadratic_roots, Root};

/// Outcome of solving one equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// `0 = 0` after normalization: every value satisfies the equation.
    Identity,
    /// A non-zero constant equated to zero: no value satisfies it.
    Contradiction,
    /// One entry per unit of degree, repeated roots included.
    Roots { variable: String, roots: Vec<Root> },
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Identity => write!(f, "identity: every value is a solution"),
            Solution::Contradiction => write!(f, "no solution: contradiction"),
            Solution::Roots { variable, roots } => {
                for (i, root) in roots.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match root {
                        Root::Exact(value) => write!(f, "{variable} = {value}")?,
                        Root::Unsolvable { factor } => {
                            write!(f, "{variable} = ? ({factor})")?
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

/// Solve `lhs = rhs` by normalizing to `P(x) = 0`.
pub fn solve_equation(equation: &Equation) -> Result<Solution, PolyError> {
    solve_polynomial(&equation.normalized()?)
}

/// Solve `P(x) = 0`.
pub fn solve_polynomial(poly: &Polynomial) -> Result<Solution, PolyError> {
    let coeffs = poly.rational_coefficients()?;
    let degree = coeffs.len() - 1;
    if degree == 0 {
        return Ok(if coeffs[0].is_zero() {
            Solution::Identity
        } else {
            Solution::Contradiction
        });
    }

    let variable = poly.variable().unwrap_or("x").to_string();
    debug!(degree, variable = %variable, "dispatching on degree");
    let roots = match degree {
        1 => vec![Root::rational(-(&coeffs[0]) / &coeffs[1])],
        2 => match quadratic_roots(&coeffs[2], &coeffs[1], &coeffs[0])? {
            Some((x1, x2)) => vec![Root::Exact(x1), Root::Exact(x2)],
            None => unsolvable_markers(poly, 2),
        },
        _ => solve_by_factoring(poly, degree),
    };
    Ok(Solution::Roots { variable, roots })
}

/// Degree > 2: factor completely, then read roots off each factor. Any
/// factorization failure turns into markers rather than an error, so one
/// stubborn factor cannot discard the rest of the solution.
fn solve_by_factoring(poly: &Polynomial, degree: usize) -> Vec<Root> {
    let factorization = match factor_completely(poly, &FactorBudget::default()) {
        Ok(factorization) => factorization,
        Err(error) => {
            debug!(%error, "factorization failed, degrading to unsolvable markers");
            return unsolvable_markers(poly, degree);
        }
    };
    let mut roots = Vec::with_capacity(degree);
    for factor in factorization.factors() {
        match factor_roots(factor) {
            Ok(found) => roots.extend(found),
            Err(error) => {
                let span = factor.rational_coefficients().map(|c| c.len() - 1).unwrap_or(1);
                debug!(%error, factor = %factor, "factor not solvable in closed form");
                roots.extend(unsolvable_markers(factor, span));
            }
        }
    }
    roots
}

/// Roots of one factor from a complete factorization: zero roots from the
/// `x^k` monomial part, then a closed form for what remains when its degree
/// allows one.
fn factor_roots(factor: &Polynomial) -> Result<Vec<Root>, PolyError> {
    let coeffs = factor.rational_coefficients()?;
    let zeros = coeffs.iter().position(|c| !c.is_zero()).unwrap_or(0);
    let mut roots = vec![Root::rational(Rational::zero()); zeros];
    let reduced = &coeffs[zeros..];
    match reduced.len() - 1 {
        0 => {}
        1 => roots.push(Root::rational(-(&reduced[0]) / &reduced[1])),
        2 => match quadratic_roots(&reduced[2], &reduced[1], &reduced[0])? {
            Some((x1, x2)) => {
                roots.push(Root::Exact(x1));
                roots.push(Root::Exact(x2));
            }
            None => roots.extend(unsolvable_markers(factor, 2)),
        },
        residual_degree => roots.extend(unsolvable_markers(factor, residual_degree)),
    }
    Ok(roots)
}

fn unsolvable_markers(factor: &Polynomial, count: usize) -> Vec<Root> {
    vec![
        Root::Unsolvable {
            factor: factor.clone(),
        };
        count
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roots::ExactRoot;
    use mat_num::rational::from_int;
    use mat_poly::{parse_equation, parse_polynomial};

    fn solve(text: &str) -> Solution {
        solve_equation(&parse_equation(text).unwrap()).unwrap()
    }

    #[test]
    fn constant_dispatch() {
        assert_eq!(solve("3 = 3"), Solution::Identity);
        assert_eq!(solve("0 = 0"), Solution::Identity);
        assert_eq!(solve("3 = 5"), Solution::Contradiction);
    }

    #[test]
    fn linear_root() {
        assert_eq!(solve("2x + 6 = 0").to_string(), "x = -3");
        assert_eq!(solve("2x + 6 = x + 3").to_string(), "x = -3");
        assert_eq!(solve("3y = 2").to_string(), "y = 2/3");
    }

    #[test]
    fn quadratic_with_rational_roots() {
        assert_eq!(solve("x^2 - 5x + 6 = 0").to_string(), "x = 3, x = 2");
    }

    #[test]
    fn quadratic_with_radical_roots() {
        assert_eq!(solve("x^2 - 2 = 0").to_string(), "x = sqrt(2), x = -sqrt(2)");
        assert_eq!(
            solve("x^2 - 2x - 1 = 0").to_string(),
            "x = 1 + sqrt(2), x = 1 - sqrt(2)"
        );
    }

    #[test]
    fn repeated_root_is_reported_twice() {
        assert_eq!(solve("x^2 - 2x + 1 = 0").to_string(), "x = 1, x = 1");
    }

    #[test]
    fn negative_discriminant_marks_both_roots() {
        let Solution::Roots { roots, .. } = solve("x^2 + 1 = 0") else {
            panic!("expected roots");
        };
        assert_eq!(roots.len(), 2);
        assert!(roots
            .iter()
            .all(|r| matches!(r, Root::Unsolvable { .. })));
    }

    #[test]
    fn cubic_factors_into_three_roots() {
        // (x - 1)(x - 2)(x - 3) = x^3 - 6x^2 + 11x - 6
        let solution = solve("x^3 - 6x^2 + 11x - 6 = 0");
        let Solution::Roots { roots, .. } = &solution else {
            panic!("expected roots");
        };
        assert_eq!(roots.len(), 3);
        let mut values: Vec<String> = roots
            .iter()
            .map(|r| match r {
                Root::Exact(v) => v.to_string(),
                Root::Unsolvable { .. } => panic!("unexpected marker in {solution}"),
            })
            .collect();
        values.sort();
        assert_eq!(values, vec!["1", "2", "3"]);
    }

    #[test]
    fn quartic_mixes_closed_forms_and_markers() {
        // x^4 - 1 = (x - 1)(x + 1)(x^2 + 1): two rational roots, two markers.
        let Solution::Roots { roots, .. } = solve("x^4 - 1 = 0") else {
            panic!("expected roots");
        };
        assert_eq!(roots.len(), 4);
        let exact = roots
            .iter()
            .filter(|r| matches!(r, Root::Exact(_)))
            .count();
        let markers = roots
            .iter()
            .filter(|r| matches!(r, Root::Unsolvable { .. }))
            .count();
        assert_eq!((exact, markers), (2, 2));
    }

    #[test]
    fn pure_power_has_zero_roots_with_multiplicity() {
        let Solution::Roots { roots, .. } = solve("x^3 = 0") else {
            panic!("expected roots");
        };
        assert_eq!(
            roots,
            vec![Root::rational(from_int(0)); 3]
        );
    }

    #[test]
    fn radical_coefficients_are_rejected_up_front() {
        let equation = parse_equation("sqrt(2)x + 1 = 0").unwrap();
        assert!(matches!(
            solve_equation(&equation),
            Err(PolyError::RadicalCoefficient(_))
        ));
    }

    #[test]
    fn solve_polynomial_directly() {
        let poly = parse_polynomial("x^2 - 4").unwrap();
        let solution = solve_polynomial(&poly).unwrap();
        assert_eq!(
            solution,
            Solution::Roots {
                variable: "x".to_string(),
                roots: vec![
                    Root::Exact(ExactRoot::from_rational(from_int(2))),
                    Root::Exact(ExactRoot::from_rational(from_int(-2))),
                ],
            }
        );
    }

    #[test]
    fn unresolvable_quartic_yields_four_markers() {
        // x^4 - 4 has no rational roots, so factorization leaves it whole.
        let Solution::Roots { roots, .. } = solve("x^4 - 4 = 0") else {
            panic!("expected roots");
        };
        assert_eq!(roots.len(), 4);
        assert!(roots
            .iter()
            .all(|r| matches!(r, Root::Unsolvable { .. })));
    }
}
