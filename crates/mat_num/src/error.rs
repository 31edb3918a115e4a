use thiserror::Error;

/// Errors raised by the exact numeric layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumError {
    /// Construction with a zero denominator or an otherwise malformed value.
    #[error("invalid rational: {0}")]
    InvalidArgument(String),

    /// Division by an exact zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative value (no complex support).
    #[error("negative radicand: sqrt({0}) is not real")]
    NegativeRadicand(String),

    /// Addition or subtraction of radicals from different families.
    #[error("incompatible radicands: sqrt({0}) and sqrt({1})")]
    IncompatibleRadicands(String, String),

    /// Conversion of an irrational radical back to a plain rational.
    #[error("radical {0} is not rational")]
    NotRational(String),
}
