//! Gaussian and Gauss-Jordan elimination.
//!
//! Every algorithm here comes in two forms: a silent one and a `_recorded`
//! one returning the result together with the [`OperationHistory`] of
//! elementary row operations that produced it. The silent form runs the
//! recording form against an ephemeral history and drops it, so both always
//! perform identical arithmetic.
//!
//! Forward elimination never normalizes pivots. Each entry below a pivot is
//! cleared with `elim_factor = -entry / pivot`, which keeps intermediate
//! fractions smaller than scale-to-one elimination would. Pivots are only
//! normalized during the backward pass of the reduced form.

use mat_num::Rational;
use num_traits::{One, Zero};
use tracing::debug;

use crate::error::LinAlgError;
use crate::history::OperationHistory;
use crate::matrix::Matrix;

/// Forward phase: staircase of pivots, entries below each pivot cleared.
///
/// Pivot search is restricted to the first `pivot_cols` columns so that
/// augmented blocks (`[A | I]`, `[A | b]`) are carried along without ever
/// being chosen as pivots. Returns the pivot column of each pivot row, top
/// to bottom.
pub(crate) fn forward_phase(
    work: &mut Matrix,
    pivot_cols: usize,
    history: &mut OperationHistory,
) -> Vec<usize> {
    let rows = work.rows();
    let mut pivots = Vec::new();
    let mut pivot_row = 0;
    for col in 0..pivot_cols {
        if pivot_row == rows {
            break;
        }
        let Some(found) = (pivot_row..rows).find(|&r| !work.entry(r, col).is_zero()) else {
            continue;
        };
        if found != pivot_row {
            work.record_swap(pivot_row, found, history);
        }
        let pivot = work.entry(pivot_row, col).clone();
        for r in pivot_row + 1..rows {
            let entry = work.entry(r, col);
            if entry.is_zero() {
                continue;
            }
            let elim_factor = -(entry / &pivot);
            work.record_add_multiple(r, pivot_row, &elim_factor, history);
        }
        pivots.push(col);
        pivot_row += 1;
    }
    pivots
}

/// Backward phase: bottom-up, normalize each pivot to 1 and clear the
/// entries above it. Expects the forward phase to have run already.
pub(crate) fn backward_phase(
    work: &mut Matrix,
    pivots: &[usize],
    history: &mut OperationHistory,
) {
    for (row, &col) in pivots.iter().enumerate().rev() {
        let pivot = work.entry(row, col).clone();
        if !pivot.is_one() {
            work.record_scale(row, &pivot.recip(), history);
        }
        for r in 0..row {
            let entry = work.entry(r, col);
            if entry.is_zero() {
                continue;
            }
            let elim_factor = -entry.clone();
            work.record_add_multiple(r, row, &elim_factor, history);
        }
    }
}

pub fn row_echelon_form_recorded(matrix: &Matrix) -> (Matrix, OperationHistory) {
    let mut history = OperationHistory::new();
    let mut work = matrix.clone();
    let pivot_cols = work.cols();
    forward_phase(&mut work, pivot_cols, &mut history);
    debug!(
        rows = work.rows(),
        cols = work.cols(),
        steps = history.len(),
        "row echelon form"
    );
    (work, history)
}

pub fn row_echelon_form(matrix: &Matrix) -> Matrix {
    row_echelon_form_recorded(matrix).0
}

pub fn reduced_row_echelon_form_recorded(matrix: &Matrix) -> (Matrix, OperationHistory) {
    let mut history = OperationHistory::new();
    let mut work = matrix.clone();
    let pivot_cols = work.cols();
    let pivots = forward_phase(&mut work, pivot_cols, &mut history);
    backward_phase(&mut work, &pivots, &mut history);
    (work, history)
}

pub fn reduced_row_echelon_form(matrix: &Matrix) -> Matrix {
    reduced_row_echelon_form_recorded(matrix).0
}

/// Rank as the number of non-zero rows of the reduced row-echelon form.
pub fn rank_recorded(matrix: &Matrix) -> (usize, OperationHistory) {
    let (reduced, history) = reduced_row_echelon_form_recorded(matrix);
    let rank = (0..reduced.rows())
        .filter(|&i| !reduced.is_row_zero(i))
        .count();
    (rank, history)
}

pub fn rank(matrix: &Matrix) -> usize {
    rank_recorded(matrix).0
}

pub fn determinant_by_elimination_recorded(
    matrix: &Matrix,
) -> Result<(Rational, OperationHistory), LinAlgError> {
    if !matrix.is_square() {
        return Err(LinAlgError::NotSquare {
            operation: "determinant",
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }
    let mut history = OperationHistory::new();
    let n = matrix.rows();
    if n == 1 {
        return Ok((matrix.entry(0, 0).clone(), history));
    }
    if n == 2 {
        let det = matrix.entry(0, 0) * matrix.entry(1, 1)
            - matrix.entry(0, 1) * matrix.entry(1, 0);
        return Ok((det, history));
    }

    let mut work = matrix.clone();
    let mut negated = false;
    for col in 0..n {
        // A column with no usable pivot forces a zero determinant.
        let Some(found) = (col..n).find(|&r| !work.entry(r, col).is_zero()) else {
            return Ok((Rational::zero(), history));
        };
        if found != col {
            work.record_swap(col, found, &mut history);
            negated = !negated;
        }
        let pivot = work.entry(col, col).clone();
        for r in col + 1..n {
            let entry = work.entry(r, col);
            if entry.is_zero() {
                continue;
            }
            let elim_factor = -(entry / &pivot);
            work.record_add_multiple(r, col, &elim_factor, &mut history);
        }
    }

    let mut det = Rational::one();
    for i in 0..n {
        det = &det * work.entry(i, i);
    }
    if negated {
        det = -det;
    }
    Ok((det, history))
}

pub fn determinant_by_elimination(matrix: &Matrix) -> Result<Rational, LinAlgError> {
    determinant_by_elimination_recorded(matrix).map(|(det, _)| det)
}

/// Gauss-Jordan inversion: reduce `[A | I]` until the left block is the
/// identity, then read the inverse off the right block.
pub fn inverse_gauss_jordan_recorded(
    matrix: &Matrix,
) -> Result<(Matrix, OperationHistory), LinAlgError> {
    if !matrix.is_square() {
        return Err(LinAlgError::NotSquare {
            operation: "inverse",
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }
    let n = matrix.rows();
    let mut history = OperationHistory::new();
    let mut work = matrix.augment(&Matrix::identity(n)?)?;
    let pivots = forward_phase(&mut work, n, &mut history);
    if pivots.len() < n {
        debug!(rank = pivots.len(), order = n, "inversion hit a zero pivot");
        return Err(LinAlgError::NotInvertible);
    }
    backward_phase(&mut work, &pivots, &mut history);
    let inverse = work.columns(n, 2 * n)?;
    Ok((inverse, history))
}

pub fn inverse_gauss_jordan(matrix: &Matrix) -> Result<Matrix, LinAlgError> {
    inverse_gauss_jordan_recorded(matrix).map(|(inverse, _)| inverse)
}

/// True when the matrix has a leading-entries staircase (used in tests and
/// by callers that want to verify a reduction before trusting it).
pub fn is_row_echelon(matrix: &Matrix) -> bool {
    let mut last_lead: Option<usize> = None;
    let mut seen_zero_row = false;
    for i in 0..matrix.rows() {
        let lead = (0..matrix.cols()).find(|&j| !matrix.entry(i, j).is_zero());
        match lead {
            None => seen_zero_row = true,
            Some(col) => {
                if seen_zero_row {
                    return false;
                }
                if let Some(prev) = last_lead {
                    if col <= prev {
                        return false;
                    }
                }
                last_lead = Some(col);
            }
        }
    }
    true
}
