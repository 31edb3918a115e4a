//! Single-variable polynomials over exact scalars.
//!
//! A [`Polynomial`] is a canonical sum of [`Monomial`]s: terms are grouped by
//! power, zero terms dropped, and the remainder sorted by descending power.
//! Coefficients are [`mat_num::Radical`]s, so `sqrt(2)*x + 1` is a first-class
//! value; powers are rationals, so `x^(1/2)` parses and prints faithfully.
//!
//! The crate has three layers:
//! * the term model ([`monomial`], [`polynomial`]),
//! * a `nom` parser for expanded expressions and equations ([`parser`]),
//! * factorization over the rationals ([`factor`]).

pub mod error;
pub mod factor;
pub mod monomial;
pub mod parser;
pub mod polynomial;

pub use error::PolyError;
pub use factor::{factor, factor_completely, FactorBudget, Factorization};
pub use monomial::Monomial;
pub use parser::{parse_equation, parse_polynomial};
pub use polynomial::{Equation, Polynomial};
