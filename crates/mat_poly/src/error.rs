use mat_num::NumError;
use thiserror::Error;

/// Errors produced while parsing, normalizing or factoring polynomials.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("unconsumed input after expression: '{0}'")]
    UnconsumedInput(String),

    #[error("expected a single variable, found '{0}' and '{1}'")]
    MultipleVariables(String, String),

    #[error("equation must contain exactly one '='")]
    MalformedEquation,

    #[error("operation requires rational coefficients, found {0}")]
    RadicalCoefficient(String),

    #[error("operation requires non-negative integer powers, found {0}")]
    NonIntegerPower(String),

    #[error("polynomial is zero")]
    ZeroPolynomial,

    #[error(transparent)]
    Num(#[from] NumError),
}
