//! Exact linear algebra over rational matrices.
//!
//! Everything here computes with [`mat_num::Rational`] entries, so answers
//! are exact: a determinant of `-2` is `-2`, an inverse entry of `3/2` is
//! `3/2`. The crate follows one pattern throughout: each algorithm has a
//! silent form and a `_recorded` twin returning `(result, history)`, where
//! the history is an append-only log of the elementary row operations
//! ([`OperationHistory`]) or cofactor-expansion terms ([`ExpansionHistory`])
//! that produced the result.
//!
//! Layers:
//! * containers ([`matrix`], [`vector`]) with the elementary row operations,
//! * Gaussian/Gauss-Jordan algorithms ([`elimination`]),
//! * cofactor expansion, adjugate, and the adjugate inverse ([`cofactor`]),
//! * the `A x = b` solver with rank classification ([`system`]).

pub mod cofactor;
pub mod elimination;
pub mod error;
pub mod history;
pub mod matrix;
pub mod system;
pub mod vector;

pub use cofactor::{
    adjugate, adjugate_recorded, cofactor_matrix, cofactor_matrix_recorded,
    determinant_by_expansion, determinant_by_expansion_recorded, inverse_by_adjugate,
    inverse_by_adjugate_recorded,
};
pub use elimination::{
    determinant_by_elimination, determinant_by_elimination_recorded, inverse_gauss_jordan,
    inverse_gauss_jordan_recorded, rank, rank_recorded, reduced_row_echelon_form,
    reduced_row_echelon_form_recorded, row_echelon_form, row_echelon_form_recorded,
};
pub use error::LinAlgError;
pub use history::{ExpansionHistory, ExpansionStep, OperationHistory, OperationStep, RowOp};
pub use matrix::Matrix;
pub use system::{solve_system, solve_system_recorded, RankAnalysis, SolutionSet, SystemSolution};
pub use vector::Vector;
