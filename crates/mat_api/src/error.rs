use mat_linalg::LinAlgError;
use mat_num::NumError;
use mat_poly::PolyError;
use thiserror::Error;

/// Errors surfaced by the API layer: anything the underlying engines raise,
/// plus failures of the layer's own text and JSON formats.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Num(#[from] NumError),

    #[error(transparent)]
    Poly(#[from] PolyError),

    #[error(transparent)]
    LinAlg(#[from] LinAlgError),

    /// Serialized text that does not parse back into a value.
    #[error("malformed serialized text: {0}")]
    Malformed(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
