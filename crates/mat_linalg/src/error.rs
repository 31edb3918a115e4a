use mat_num::NumError;
use thiserror::Error;

/// Errors produced by the matrix engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinAlgError {
    #[error("a matrix needs at least one row and one column, got {rows}x{cols}")]
    EmptyMatrix { rows: usize, cols: usize },

    #[error("a {rows}x{cols} matrix needs {expected} entries, got {actual}")]
    DataShape {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{operation}: dimensions {left} and {right} do not conform")]
    DimensionMismatch {
        operation: &'static str,
        left: String,
        right: String,
    },

    #[error("row {index} out of bounds for {rows} rows")]
    RowOutOfBounds { index: usize, rows: usize },

    #[error("{operation} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("cannot scale a row by zero")]
    ScaleByZero,

    #[error("matrix is not invertible")]
    NotInvertible,

    #[error(transparent)]
    Num(#[from] NumError),
}
