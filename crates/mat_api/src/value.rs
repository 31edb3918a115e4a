//! Tagged result value for operations that can yield a scalar, a vector or a
//! matrix.
//!
//! The variant is the type tag: callers match on it instead of downcasting,
//! and the text serializer writes it as the leading field of every record.

use std::fmt;

use mat_linalg::{Matrix, Vector};
use mat_num::{rational, Rational};

/// Any value an engine operation can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(Rational),
    Vector(Vector),
    Matrix(Matrix),
}

impl Value {
    /// The tag the text format stores this variant under.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Vector(_) => "vector",
            Value::Matrix(_) => "matrix",
        }
    }

    pub fn as_scalar(&self) -> Option<&Rational> {
        match self {
            Value::Scalar(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Value::Scalar(r)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Value::Matrix(m)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(r) => write!(f, "{}", rational::format(r)),
            Value::Vector(v) => write!(f, "{v}"),
            Value::Matrix(m) => write!(f, "{m}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mat_num::rational::from_int;

    #[test]
    fn kind_matches_variant() {
        let scalar = Value::from(from_int(3));
        let vector = Value::from(Vector::new(vec![from_int(1), from_int(2)]).unwrap());
        assert_eq!(scalar.kind(), "scalar");
        assert_eq!(vector.kind(), "vector");
        assert!(scalar.as_scalar().is_some());
        assert!(scalar.as_matrix().is_none());
        assert!(vector.as_vector().is_some());
    }

    #[test]
    fn display_follows_the_inner_type() {
        let scalar = Value::Scalar(Rational::new(3.into(), 2.into()));
        assert_eq!(scalar.to_string(), "3/2");

        let vector = Value::from(Vector::new(vec![from_int(1), from_int(-2)]).unwrap());
        assert_eq!(vector.to_string(), "[1, -2]");

        let matrix = Value::from(
            Matrix::new(2, 2, vec![from_int(1), from_int(2), from_int(3), from_int(4)]).unwrap(),
        );
        assert_eq!(matrix.to_string(), "[1 2]\n[3 4]");
    }
}
