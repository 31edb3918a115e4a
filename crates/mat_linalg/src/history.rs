//! Append-only step records for pedagogical replay.
//!
//! Two history flavors share the same shape: [`OperationHistory`] logs
//! elementary row operations (elimination-style algorithms), and
//! [`ExpansionHistory`] logs cofactor-expansion terms. A history is owned by
//! whoever asked for recording; the engine appends to it and keeps no
//! reference afterwards. Callers that do not care about steps use the silent
//! algorithm variants, which discard an ephemeral history internally.

use std::fmt;

use mat_num::{rational, Rational};

use crate::matrix::Matrix;

/// An elementary row operation, with its operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOp {
    Swap {
        a: usize,
        b: usize,
    },
    Scale {
        row: usize,
        factor: Rational,
    },
    AddMultiple {
        target: usize,
        source: usize,
        factor: Rational,
    },
}

impl RowOp {
    /// Human description with 1-based row labels.
    pub fn describe(&self) -> String {
        match self {
            RowOp::Swap { a, b } => format!("swap R{} and R{}", a + 1, b + 1),
            RowOp::Scale { row, factor } => {
                format!("scale R{} by {}", row + 1, rational::format(factor))
            }
            RowOp::AddMultiple {
                target,
                source,
                factor,
            } => format!(
                "add {} * R{} to R{}",
                rational::format(factor),
                source + 1,
                target + 1
            ),
        }
    }
}

/// One recorded row operation: the op, its description, and the matrix as it
/// looked right after applying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStep {
    pub op: RowOp,
    pub description: String,
    pub state_after: Matrix,
}

impl OperationStep {
    pub fn new(op: RowOp, state_after: Matrix) -> Self {
        let description = op.describe();
        OperationStep {
            op,
            description,
            state_after,
        }
    }
}

/// Ordered, append-only log of row operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationHistory {
    steps: Vec<OperationStep>,
}

impl OperationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: OperationStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[OperationStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for OperationHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "step {}: {}", i + 1, step.description)?;
            writeln!(f, "{}", step.state_after)?;
        }
        Ok(())
    }
}

/// One term of a cofactor expansion: the entry being expanded, its sign, the
/// minor it leaves behind, that minor's determinant, and `accumulated` - the
/// running total for a determinant expansion, or the step's own cofactor
/// value for per-entry algorithms like the cofactor matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionStep {
    pub row: usize,
    pub col: usize,
    pub entry: Rational,
    pub sign: i32,
    pub minor: Matrix,
    pub minor_det: Rational,
    pub accumulated: Rational,
    pub description: String,
}

/// Ordered, append-only log of cofactor-expansion terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionHistory {
    steps: Vec<ExpansionStep>,
}

impl ExpansionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: ExpansionStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[ExpansionStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for ExpansionHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "step {}: {}", i + 1, step.description)?;
        }
        Ok(())
    }
}
