//! Column vector of exact rationals.
//!
//! Logically a one-column matrix, kept as its own type so component access
//! does not need a column index. The Euclidean norm stays exact by returning
//! a [`Radical`] instead of a rounded scalar.

use std::fmt;

use mat_num::radical::simplify_sqrt;
use mat_num::{rational, Radical, Rational};
use num_traits::Zero;

use crate::error::LinAlgError;
use crate::matrix::Matrix;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector {
    data: Vec<Rational>,
}

impl Vector {
    pub fn new(data: Vec<Rational>) -> Result<Self, LinAlgError> {
        if data.is_empty() {
            return Err(LinAlgError::EmptyMatrix { rows: 0, cols: 1 });
        }
        Ok(Vector { data })
    }

    pub fn zeros(len: usize) -> Result<Self, LinAlgError> {
        Vector::new(vec![Rational::zero(); len])
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rational> {
        self.data.get(index)
    }

    pub fn components(&self) -> &[Rational] {
        &self.data
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Rational::is_zero)
    }

    fn check_len(&self, other: &Self, operation: &'static str) -> Result<(), LinAlgError> {
        if self.len() != other.len() {
            return Err(LinAlgError::DimensionMismatch {
                operation,
                left: format!("length {}", self.len()),
                right: format!("length {}", other.len()),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> Result<Self, LinAlgError> {
        self.check_len(other, "add")?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Vector { data })
    }

    pub fn sub(&self, other: &Self) -> Result<Self, LinAlgError> {
        self.check_len(other, "sub")?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Vector { data })
    }

    pub fn scale(&self, scalar: &Rational) -> Self {
        Vector {
            data: self.data.iter().map(|v| v * scalar).collect(),
        }
    }

    pub fn dot(&self, other: &Self) -> Result<Rational, LinAlgError> {
        self.check_len(other, "dot")?;
        let mut sum = Rational::zero();
        for (a, b) in self.data.iter().zip(&other.data) {
            sum += a * b;
        }
        Ok(sum)
    }

    /// Cross product, defined for 3-component vectors only.
    pub fn cross(&self, other: &Self) -> Result<Self, LinAlgError> {
        if self.len() != 3 || other.len() != 3 {
            return Err(LinAlgError::DimensionMismatch {
                operation: "cross",
                left: format!("length {}", self.len()),
                right: format!("length {}", other.len()),
            });
        }
        let (a, b) = (&self.data, &other.data);
        let data = vec![
            &a[1] * &b[2] - &a[2] * &b[1],
            &a[2] * &b[0] - &a[0] * &b[2],
            &a[0] * &b[1] - &a[1] * &b[0],
        ];
        Ok(Vector { data })
    }

    /// Exact Euclidean norm: `sqrt(v . v)` as a simplified radical.
    pub fn norm(&self) -> Result<Radical, LinAlgError> {
        let mut sum = Rational::zero();
        for v in &self.data {
            sum += v * v;
        }
        Ok(simplify_sqrt(&sum)?)
    }

    /// The same components as an `n x 1` matrix.
    pub fn to_column_matrix(&self) -> Result<Matrix, LinAlgError> {
        Matrix::new(self.len(), 1, self.data.clone())
    }

    /// Reads a single-column matrix back into a vector.
    pub fn from_column_matrix(matrix: &Matrix) -> Result<Self, LinAlgError> {
        if matrix.cols() != 1 {
            return Err(LinAlgError::DimensionMismatch {
                operation: "from_column_matrix",
                left: format!("{}x{}", matrix.rows(), matrix.cols()),
                right: "single column".to_string(),
            });
        }
        let data = (0..matrix.rows())
            .map(|i| {
                matrix
                    .get(i, 0)
                    .cloned()
                    .ok_or(LinAlgError::RowOutOfBounds {
                        index: i,
                        rows: matrix.rows(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Vector::new(data)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", rational::format(v))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mat_num::rational::from_int;

    fn vec_of(values: &[i64]) -> Vector {
        Vector::new(values.iter().map(|&v| from_int(v)).collect()).unwrap()
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Vector::new(vec![]),
            Err(LinAlgError::EmptyMatrix { .. })
        ));
    }

    #[test]
    fn dot_product() {
        let a = vec_of(&[1, 2, 3]);
        let b = vec_of(&[4, 5, 6]);
        assert_eq!(a.dot(&b).unwrap(), from_int(32));
        assert!(a.dot(&vec_of(&[1, 2])).is_err());
    }

    #[test]
    fn cross_product_follows_right_hand_rule() {
        let x = vec_of(&[1, 0, 0]);
        let y = vec_of(&[0, 1, 0]);
        assert_eq!(x.cross(&y).unwrap(), vec_of(&[0, 0, 1]));
        assert_eq!(y.cross(&x).unwrap(), vec_of(&[0, 0, -1]));
        assert!(vec_of(&[1, 2]).cross(&vec_of(&[3, 4])).is_err());
    }

    #[test]
    fn norm_simplifies_the_radical() {
        // |(3, 4)| = 5, |(1, 1)| = sqrt(2), |(2, 2)| = 2*sqrt(2)
        assert_eq!(vec_of(&[3, 4]).norm().unwrap().to_string(), "5");
        assert_eq!(vec_of(&[1, 1]).norm().unwrap().to_string(), "sqrt(2)");
        assert_eq!(vec_of(&[2, 2]).norm().unwrap().to_string(), "2*sqrt(2)");
    }

    #[test]
    fn add_sub_scale() {
        let a = vec_of(&[1, 2]);
        let b = vec_of(&[3, 4]);
        assert_eq!(a.add(&b).unwrap(), vec_of(&[4, 6]));
        assert_eq!(b.sub(&a).unwrap(), vec_of(&[2, 2]));
        assert_eq!(a.scale(&from_int(3)), vec_of(&[3, 6]));
    }

    #[test]
    fn column_matrix_round_trip() {
        let v = vec_of(&[1, 2, 3]);
        let m = v.to_column_matrix().unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 1);
        assert_eq!(Vector::from_column_matrix(&m).unwrap(), v);
    }

    #[test]
    fn display_uses_bracket_list() {
        let v = Vector::new(vec![from_int(1), Rational::new(3.into(), 2.into())]).unwrap();
        assert_eq!(v.to_string(), "[1, 3/2]");
    }
}
