//! Text-in, text-out entry points.
//!
//! Each function parses its input, runs the corresponding engine operation
//! and renders the result back to a string, so embedders never touch the
//! engine types directly.

use mat_poly::{factor_completely, parse_equation, parse_polynomial, FactorBudget};
use mat_solver::solve_equation;
use tracing::debug;

use crate::error::ApiError;

/// Parse an expression and render it in canonical form: like terms merged,
/// monomials in descending power order.
pub fn simplify_expression(text: &str) -> Result<String, ApiError> {
    let poly = parse_polynomial(text)?;
    let rendered = poly.to_string();
    debug!(input = text, output = %rendered, "simplified expression");
    Ok(rendered)
}

/// Parse an expression and render its complete factorization over the
/// rationals. Irreducible input comes back as a single factor.
pub fn factor_expression(text: &str) -> Result<String, ApiError> {
    let poly = parse_polynomial(text)?;
    let factorization = factor_completely(&poly, &FactorBudget::default())?;
    let rendered = factorization.to_string();
    debug!(input = text, output = %rendered, "factored expression");
    Ok(rendered)
}

/// Parse an equation (`lhs = rhs`) and render its solution set.
pub fn solve_expression(text: &str) -> Result<String, ApiError> {
    let equation = parse_equation(text)?;
    let solution = solve_equation(&equation)?;
    let rendered = solution.to_string();
    debug!(input = text, output = %rendered, "solved equation");
    Ok(rendered)
}
