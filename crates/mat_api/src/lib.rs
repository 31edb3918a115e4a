//! Embedding surface of ExpliMat.
//!
//! Three layers, all string-friendly:
//!
//! * [`exprs`] - parse-compute-render entry points (`simplify`, `factor`,
//!   `solve`) for callers that speak plain text.
//! * [`text`] - a compact field-separated serialization for engine results,
//!   with exact round-trip guarantees.
//! * [`wire`] - JSON DTOs for structured consumers, pre-rendered so no
//!   big-rational support is needed on the other side.
//!
//! [`Value`] is the tagged union the generic layers traffic in: a result is
//! a scalar, a vector or a matrix, and callers match instead of downcasting.

pub mod error;
pub mod exprs;
pub mod text;
pub mod value;
pub mod wire;

pub use error::ApiError;
pub use exprs::{factor_expression, simplify_expression, solve_expression};
pub use text::{
    deserialize_solution, deserialize_value, serialize_solution, serialize_value,
};
pub use value::Value;
pub use wire::{
    ResultJson, SolutionKindJson, StepJson, SystemSolutionJson, SCHEMA_VERSION,
};
