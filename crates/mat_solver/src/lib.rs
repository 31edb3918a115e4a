//! Exact single-variable equation solving.
//!
//! The solver normalizes `lhs = rhs` to `P(x) = 0` and dispatches on the
//! degree: constants classify as identity or contradiction, degree 1 and 2
//! get closed forms (radical roots included), and anything higher runs
//! through [`mat_poly`]'s complete factorization with per-factor recovery.
//! Roots the engine cannot express stay in the answer as explicit
//! [`Root::Unsolvable`] markers instead of aborting the whole equation.

pub mod roots;
pub mod solver;

pub use roots::{quadratic_roots, ExactRoot, Root};
pub use solver::{solve_equation, solve_polynomial, Solution};
