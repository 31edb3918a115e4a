//! Linear-system solver over `A x = b`.
//!
//! Reduces the augmented matrix `[A | b]` with pivots restricted to the
//! coefficient columns, then classifies by the Rouché-Capelli comparison of
//! coefficient rank, augmented rank, and variable count. Infinite solution
//! sets come back as a particular solution plus a basis of the homogeneous
//! space, one basis vector per free column.

use std::fmt;

use mat_num::Rational;
use num_traits::{One, Zero};
use tracing::debug;

use crate::elimination::{backward_phase, forward_phase};
use crate::error::LinAlgError;
use crate::history::OperationHistory;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// How a solved system classifies, with the witnesses for each case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionSet {
    /// Exactly one solution vector.
    Unique(Vector),
    /// Consistent with free variables: every solution is
    /// `particular + c1*basis[0] + c2*basis[1] + ...`.
    Infinite {
        particular: Vector,
        basis: Vec<Vector>,
    },
    /// No vector satisfies all equations.
    Inconsistent,
    /// Every equation is `0 = 0`; the system constrains nothing.
    Undetermined,
}

/// The rank comparison that justifies a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankAnalysis {
    pub coefficient_rank: usize,
    pub augmented_rank: usize,
    pub variables: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSolution {
    pub set: SolutionSet,
    pub analysis: RankAnalysis,
}

impl fmt::Display for RankAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rank(A) = {}, rank([A|b]) = {}, {} variables",
            self.coefficient_rank, self.augmented_rank, self.variables
        )
    }
}

impl fmt::Display for SolutionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionSet::Unique(x) => write!(f, "unique solution {x}"),
            SolutionSet::Infinite { particular, basis } => {
                write!(f, "infinite solutions: x = {particular}")?;
                for (i, v) in basis.iter().enumerate() {
                    write!(f, " + c{} * {v}", i + 1)?;
                }
                Ok(())
            }
            SolutionSet::Inconsistent => write!(f, "no solution"),
            SolutionSet::Undetermined => write!(f, "undetermined: every vector is a solution"),
        }
    }
}

impl fmt::Display for SystemSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.set, self.analysis)
    }
}

pub fn solve_system_recorded(
    a: &Matrix,
    b: &Vector,
) -> Result<(SystemSolution, OperationHistory), LinAlgError> {
    if a.rows() != b.len() {
        return Err(LinAlgError::DimensionMismatch {
            operation: "solve",
            left: format!("{}x{}", a.rows(), a.cols()),
            right: format!("length {}", b.len()),
        });
    }
    let variables = a.cols();
    let mut history = OperationHistory::new();
    let mut aug = a.augment(&b.to_column_matrix()?)?;

    let pivots = forward_phase(&mut aug, variables, &mut history);
    backward_phase(&mut aug, &pivots, &mut history);

    let coefficient_rank = pivots.len();
    let tail_has_residual = (coefficient_rank..aug.rows())
        .any(|i| !aug.entry(i, variables).is_zero());
    let augmented_rank = coefficient_rank + usize::from(tail_has_residual);
    let analysis = RankAnalysis {
        coefficient_rank,
        augmented_rank,
        variables,
    };
    debug!(%analysis, "system classified");

    let set = if augmented_rank == 0 {
        SolutionSet::Undetermined
    } else if augmented_rank > coefficient_rank {
        SolutionSet::Inconsistent
    } else {
        // Consistent: pivot variables take the reduced right-hand side,
        // free variables take zero.
        let mut particular = vec![Rational::zero(); variables];
        for (row, &col) in pivots.iter().enumerate() {
            particular[col] = aug.entry(row, variables).clone();
        }
        let particular = Vector::new(particular)?;
        if coefficient_rank == variables {
            SolutionSet::Unique(particular)
        } else {
            let mut basis = Vec::with_capacity(variables - coefficient_rank);
            for free in (0..variables).filter(|c| !pivots.contains(c)) {
                let mut direction = vec![Rational::zero(); variables];
                direction[free] = Rational::one();
                for (row, &col) in pivots.iter().enumerate() {
                    direction[col] = -aug.entry(row, free).clone();
                }
                basis.push(Vector::new(direction)?);
            }
            SolutionSet::Infinite { particular, basis }
        }
    };

    Ok((SystemSolution { set, analysis }, history))
}

pub fn solve_system(a: &Matrix, b: &Vector) -> Result<SystemSolution, LinAlgError> {
    solve_system_recorded(a, b).map(|(solution, _)| solution)
}
