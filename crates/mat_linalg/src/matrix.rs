//! Rectangular matrix of exact rationals, row-major.
//!
//! Structural operations live here, together with the three elementary row
//! operations every elimination algorithm is built from. Each elementary
//! operation has two forms: a pure one returning a new matrix, and an
//! in-place one that appends an [`OperationStep`] to a caller-supplied
//! history. The matrix mutates in place by design; a caller that needs the
//! pre-operation state clones first.

use std::fmt;

use mat_num::{rational, Rational};
use num_traits::{One, Zero};

use crate::error::LinAlgError;
use crate::history::{OperationHistory, OperationStep, RowOp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Rational>,
}

impl Matrix {
    /// Builds a `rows x cols` matrix from row-major data.
    pub fn new(rows: usize, cols: usize, data: Vec<Rational>) -> Result<Self, LinAlgError> {
        if rows == 0 || cols == 0 {
            return Err(LinAlgError::EmptyMatrix { rows, cols });
        }
        let expected = rows * cols;
        if data.len() != expected {
            return Err(LinAlgError::DataShape {
                rows,
                cols,
                expected,
                actual: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Builds a matrix from nested rows; every row must have the same width.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self, LinAlgError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(LinAlgError::EmptyMatrix {
                rows: height,
                cols: width,
            });
        }
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            if row.len() != width {
                return Err(LinAlgError::DataShape {
                    rows: height,
                    cols: width,
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Matrix {
            rows: height,
            cols: width,
            data,
        })
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self, LinAlgError> {
        Matrix::new(rows, cols, vec![Rational::zero(); rows.saturating_mul(cols)])
    }

    pub fn identity(n: usize) -> Result<Self, LinAlgError> {
        let mut m = Matrix::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = Rational::one();
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Rational> {
        if row < self.rows && col < self.cols {
            Some(&self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: Rational) -> Result<(), LinAlgError> {
        self.check_row(row)?;
        if col >= self.cols {
            return Err(LinAlgError::DimensionMismatch {
                operation: "set",
                left: format!("column {col}"),
                right: format!("{} columns", self.cols),
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Option<&[Rational]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Unchecked entry access for engine internals with loop-bounded indices.
    pub(crate) fn entry(&self, row: usize, col: usize) -> &Rational {
        &self.data[row * self.cols + col]
    }

    pub(crate) fn entry_mut(&mut self, row: usize, col: usize) -> &mut Rational {
        let cols = self.cols;
        &mut self.data[row * cols + col]
    }

    fn dims(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }

    fn check_row(&self, index: usize) -> Result<(), LinAlgError> {
        if index >= self.rows {
            return Err(LinAlgError::RowOutOfBounds {
                index,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Check if dimensions match for addition.
    pub fn can_add(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Check if dimensions are compatible for multiplication:
    /// self (m×n) * other (p×q) requires n == p.
    pub fn can_multiply(&self, other: &Self) -> bool {
        self.cols == other.rows
    }

    pub fn add(&self, other: &Self) -> Result<Self, LinAlgError> {
        if !self.can_add(other) {
            return Err(LinAlgError::DimensionMismatch {
                operation: "add",
                left: self.dims(),
                right: other.dims(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    pub fn sub(&self, other: &Self) -> Result<Self, LinAlgError> {
        if !self.can_add(other) {
            return Err(LinAlgError::DimensionMismatch {
                operation: "sub",
                left: self.dims(),
                right: other.dims(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    pub fn scalar_mul(&self, scalar: &Rational) -> Self {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v * scalar).collect(),
        }
    }

    /// self (m×n) * other (n×p) → result (m×p).
    pub fn multiply(&self, other: &Self) -> Result<Self, LinAlgError> {
        if !self.can_multiply(other) {
            return Err(LinAlgError::DimensionMismatch {
                operation: "multiply",
                left: self.dims(),
                right: other.dims(),
            });
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = Rational::zero();
                for k in 0..self.cols {
                    sum += self.entry(i, k) * other.entry(k, j);
                }
                data.push(sum);
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.entry(i, j).clone());
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Sum of the diagonal entries; square matrices only.
    pub fn trace(&self) -> Result<Rational, LinAlgError> {
        if !self.is_square() {
            return Err(LinAlgError::NotSquare {
                operation: "trace",
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut sum = Rational::zero();
        for i in 0..self.rows {
            sum = &sum + self.entry(i, i);
        }
        Ok(sum)
    }

    /// Submatrix with `skip_row` and `skip_col` removed.
    pub fn minor(&self, skip_row: usize, skip_col: usize) -> Result<Self, LinAlgError> {
        if self.rows < 2 || self.cols < 2 {
            return Err(LinAlgError::EmptyMatrix {
                rows: self.rows.saturating_sub(1),
                cols: self.cols.saturating_sub(1),
            });
        }
        self.check_row(skip_row)?;
        if skip_col >= self.cols {
            return Err(LinAlgError::DimensionMismatch {
                operation: "minor",
                left: format!("column {skip_col}"),
                right: format!("{} columns", self.cols),
            });
        }
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == skip_row {
                continue;
            }
            for j in 0..self.cols {
                if j == skip_col {
                    continue;
                }
                data.push(self.entry(i, j).clone());
            }
        }
        Ok(Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        })
    }

    /// Glues `other` to the right: `[self | other]`.
    pub fn augment(&self, other: &Self) -> Result<Self, LinAlgError> {
        if self.rows != other.rows {
            return Err(LinAlgError::DimensionMismatch {
                operation: "augment",
                left: self.dims(),
                right: other.dims(),
            });
        }
        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for i in 0..self.rows {
            data.extend_from_slice(&self.data[i * self.cols..(i + 1) * self.cols]);
            data.extend_from_slice(&other.data[i * other.cols..(i + 1) * other.cols]);
        }
        Ok(Matrix {
            rows: self.rows,
            cols,
            data,
        })
    }

    /// Copy of the column range `[from, to)` as its own matrix.
    pub fn columns(&self, from: usize, to: usize) -> Result<Self, LinAlgError> {
        if from >= to || to > self.cols {
            return Err(LinAlgError::DimensionMismatch {
                operation: "columns",
                left: format!("range {from}..{to}"),
                right: format!("{} columns", self.cols),
            });
        }
        let cols = to - from;
        let mut data = Vec::with_capacity(self.rows * cols);
        for i in 0..self.rows {
            for j in from..to {
                data.push(self.entry(i, j).clone());
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols,
            data,
        })
    }

    pub fn is_row_zero(&self, row: usize) -> bool {
        (0..self.cols).all(|j| self.entry(row, j).is_zero())
    }

    // ------------------------------------------------------------------
    // Elementary row operations
    // ------------------------------------------------------------------

    fn apply_swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    fn apply_scale(&mut self, row: usize, factor: &Rational) {
        for j in 0..self.cols {
            let v = self.entry(row, j) * factor;
            *self.entry_mut(row, j) = v;
        }
    }

    fn apply_add_multiple(&mut self, target: usize, source: usize, factor: &Rational) {
        for j in 0..self.cols {
            let v = self.entry(target, j) + self.entry(source, j) * factor;
            *self.entry_mut(target, j) = v;
        }
    }

    /// Pure form: rows `a` and `b` exchanged.
    pub fn swapped_rows(&self, a: usize, b: usize) -> Result<Self, LinAlgError> {
        self.check_row(a)?;
        self.check_row(b)?;
        let mut m = self.clone();
        m.apply_swap(a, b);
        Ok(m)
    }

    /// Pure form: `row` multiplied by a non-zero `factor`.
    pub fn scaled_row(&self, row: usize, factor: &Rational) -> Result<Self, LinAlgError> {
        self.check_row(row)?;
        if factor.is_zero() {
            return Err(LinAlgError::ScaleByZero);
        }
        let mut m = self.clone();
        m.apply_scale(row, factor);
        Ok(m)
    }

    /// Pure form: `factor * source` added to `target`.
    pub fn added_multiple(
        &self,
        target: usize,
        source: usize,
        factor: &Rational,
    ) -> Result<Self, LinAlgError> {
        self.check_row(target)?;
        self.check_row(source)?;
        let mut m = self.clone();
        m.apply_add_multiple(target, source, factor);
        Ok(m)
    }

    /// In-place recording form of [`Matrix::swapped_rows`].
    pub fn swap_rows(
        &mut self,
        a: usize,
        b: usize,
        history: &mut OperationHistory,
    ) -> Result<(), LinAlgError> {
        self.check_row(a)?;
        self.check_row(b)?;
        self.record_swap(a, b, history);
        Ok(())
    }

    /// In-place recording form of [`Matrix::scaled_row`].
    pub fn scale_row(
        &mut self,
        row: usize,
        factor: &Rational,
        history: &mut OperationHistory,
    ) -> Result<(), LinAlgError> {
        self.check_row(row)?;
        if factor.is_zero() {
            return Err(LinAlgError::ScaleByZero);
        }
        self.record_scale(row, factor, history);
        Ok(())
    }

    /// In-place recording form of [`Matrix::added_multiple`].
    pub fn add_multiple_of_row(
        &mut self,
        target: usize,
        source: usize,
        factor: &Rational,
        history: &mut OperationHistory,
    ) -> Result<(), LinAlgError> {
        self.check_row(target)?;
        self.check_row(source)?;
        self.record_add_multiple(target, source, factor, history);
        Ok(())
    }

    // Engine internals: indices are loop-bounded at the call sites, so these
    // skip the checks but still record.

    pub(crate) fn record_swap(&mut self, a: usize, b: usize, history: &mut OperationHistory) {
        self.apply_swap(a, b);
        history.push(OperationStep::new(RowOp::Swap { a, b }, self.clone()));
    }

    pub(crate) fn record_scale(
        &mut self,
        row: usize,
        factor: &Rational,
        history: &mut OperationHistory,
    ) {
        self.apply_scale(row, factor);
        history.push(OperationStep::new(
            RowOp::Scale {
                row,
                factor: factor.clone(),
            },
            self.clone(),
        ));
    }

    pub(crate) fn record_add_multiple(
        &mut self,
        target: usize,
        source: usize,
        factor: &Rational,
        history: &mut OperationHistory,
    ) {
        self.apply_add_multiple(target, source, factor);
        history.push(OperationStep::new(
            RowOp::AddMultiple {
                target,
                source,
                factor: factor.clone(),
            },
            self.clone(),
        ));
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted: Vec<String> = self.data.iter().map(rational::format).collect();
        let width = formatted.iter().map(String::len).max().unwrap_or(0);
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", formatted[i * self.cols + j])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
