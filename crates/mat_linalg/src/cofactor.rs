//! Cofactor expansion: determinants, cofactor matrix, adjugate, and the
//! adjugate-method inverse.
//!
//! Expansion always runs along the first row, with signs alternating from
//! `+`. It is slower than elimination but each term is easy to narrate, so
//! the `_recorded` forms log one [`ExpansionStep`] per contributing entry
//! while the recursion below the narrated level stays silent. Zero entries
//! contribute nothing and are omitted from both computation and trace.

use mat_num::{rational, Rational};
use num_traits::Zero;
use tracing::debug;

use crate::error::LinAlgError;
use crate::history::{ExpansionHistory, ExpansionStep};
use crate::matrix::Matrix;

fn require_square(matrix: &Matrix, operation: &'static str) -> Result<usize, LinAlgError> {
    if !matrix.is_square() {
        return Err(LinAlgError::NotSquare {
            operation,
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }
    Ok(matrix.rows())
}

/// Silent recursive expansion along the first row.
fn expand(matrix: &Matrix) -> Result<Rational, LinAlgError> {
    let n = matrix.rows();
    if n == 1 {
        return Ok(matrix.entry(0, 0).clone());
    }
    let mut total = Rational::zero();
    for col in 0..n {
        let entry = matrix.entry(0, col);
        if entry.is_zero() {
            continue;
        }
        let minor_det = expand(&matrix.minor(0, col)?)?;
        let term = entry * &minor_det;
        if col % 2 == 0 {
            total = &total + &term;
        } else {
            total = &total - &term;
        }
    }
    Ok(total)
}

pub fn determinant_by_expansion_recorded(
    matrix: &Matrix,
) -> Result<(Rational, ExpansionHistory), LinAlgError> {
    let n = require_square(matrix, "determinant")?;
    let mut history = ExpansionHistory::new();
    if n == 1 {
        return Ok((matrix.entry(0, 0).clone(), history));
    }
    let mut total = Rational::zero();
    for col in 0..n {
        let entry = matrix.entry(0, col).clone();
        if entry.is_zero() {
            continue;
        }
        let sign = if col % 2 == 0 { 1 } else { -1 };
        let minor = matrix.minor(0, col)?;
        let minor_det = expand(&minor)?;
        let mut term = &entry * &minor_det;
        if sign < 0 {
            term = -term;
        }
        total = &total + &term;
        let description = format!(
            "a[1][{}] = {}, sign {}, minor det {}, term {}, total {}",
            col + 1,
            rational::format(&entry),
            if sign < 0 { "-" } else { "+" },
            rational::format(&minor_det),
            rational::format(&term),
            rational::format(&total),
        );
        history.push(ExpansionStep {
            row: 0,
            col,
            entry,
            sign,
            minor,
            minor_det,
            accumulated: total.clone(),
            description,
        });
    }
    debug!(order = n, steps = history.len(), "cofactor determinant");
    Ok((total, history))
}

pub fn determinant_by_expansion(matrix: &Matrix) -> Result<Rational, LinAlgError> {
    let n = require_square(matrix, "determinant")?;
    if n == 1 {
        return Ok(matrix.entry(0, 0).clone());
    }
    expand(matrix)
}

/// Every entry replaced by its signed minor determinant.
pub fn cofactor_matrix_recorded(
    matrix: &Matrix,
) -> Result<(Matrix, ExpansionHistory), LinAlgError> {
    let n = require_square(matrix, "cofactor matrix")?;
    let mut history = ExpansionHistory::new();
    if n == 1 {
        // By convention the lone cofactor is det of the empty minor, 1.
        return Ok((Matrix::identity(1)?, history));
    }
    let mut data = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let entry = matrix.entry(row, col).clone();
            let sign = if (row + col) % 2 == 0 { 1 } else { -1 };
            let minor = matrix.minor(row, col)?;
            let minor_det = expand(&minor)?;
            let cofactor = if sign < 0 {
                -minor_det.clone()
            } else {
                minor_det.clone()
            };
            let description = format!(
                "cofactor c[{}][{}] = {}{}",
                row + 1,
                col + 1,
                if sign < 0 { "-" } else { "" },
                rational::format(&minor_det),
            );
            history.push(ExpansionStep {
                row,
                col,
                entry,
                sign,
                minor,
                minor_det,
                accumulated: cofactor.clone(),
                description,
            });
            data.push(cofactor);
        }
    }
    Ok((Matrix::new(n, n, data)?, history))
}

pub fn cofactor_matrix(matrix: &Matrix) -> Result<Matrix, LinAlgError> {
    let n = require_square(matrix, "cofactor matrix")?;
    if n == 1 {
        return Ok(Matrix::identity(1)?);
    }
    let mut data = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let minor_det = expand(&matrix.minor(row, col)?)?;
            data.push(if (row + col) % 2 == 0 {
                minor_det
            } else {
                -minor_det
            });
        }
    }
    Ok(Matrix::new(n, n, data)?)
}

/// Transpose of the cofactor matrix.
pub fn adjugate_recorded(matrix: &Matrix) -> Result<(Matrix, ExpansionHistory), LinAlgError> {
    let (cofactors, history) = cofactor_matrix_recorded(matrix)?;
    Ok((cofactors.transpose(), history))
}

pub fn adjugate(matrix: &Matrix) -> Result<Matrix, LinAlgError> {
    Ok(cofactor_matrix(matrix)?.transpose())
}

/// `inverse(A) = adjugate(A) / det(A)`, determinant taken by expansion.
pub fn inverse_by_adjugate_recorded(
    matrix: &Matrix,
) -> Result<(Matrix, ExpansionHistory), LinAlgError> {
    require_square(matrix, "inverse")?;
    let (det, mut history) = determinant_by_expansion_recorded(matrix)?;
    if det.is_zero() {
        debug!("adjugate inversion found zero determinant");
        return Err(LinAlgError::NotInvertible);
    }
    let (adj, adj_history) = adjugate_recorded(matrix)?;
    for step in adj_history.steps() {
        history.push(step.clone());
    }
    Ok((adj.scalar_mul(&det.recip()), history))
}

pub fn inverse_by_adjugate(matrix: &Matrix) -> Result<Matrix, LinAlgError> {
    require_square(matrix, "inverse")?;
    let det = determinant_by_expansion(matrix)?;
    if det.is_zero() {
        return Err(LinAlgError::NotInvertible);
    }
    Ok(adjugate(matrix)?.scalar_mul(&det.recip()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elimination::determinant_by_elimination;
    use mat_num::rational::from_int;

    fn mat(rows: &[&[i64]]) -> Matrix {
        Matrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| from_int(v)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn expansion_matches_known_determinants() {
        assert_eq!(
            determinant_by_expansion(&mat(&[&[7]])).unwrap(),
            from_int(7)
        );
        assert_eq!(
            determinant_by_expansion(&mat(&[&[1, 2], &[3, 4]])).unwrap(),
            from_int(-2)
        );
        assert_eq!(
            determinant_by_expansion(&mat(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]])).unwrap(),
            from_int(0)
        );
        assert_eq!(
            determinant_by_expansion(&mat(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 1]])).unwrap(),
            from_int(2)
        );
    }

    #[test]
    fn expansion_agrees_with_elimination() {
        let a = mat(&[&[3, 1, 4, 1], &[5, 9, 2, 6], &[5, 3, 5, 8], &[9, 7, 9, 3]]);
        assert_eq!(
            determinant_by_expansion(&a).unwrap(),
            determinant_by_elimination(&a).unwrap()
        );
    }

    #[test]
    fn recorded_expansion_narrates_contributing_terms() {
        let a = mat(&[&[1, 0, 2], &[3, 4, 5], &[6, 7, 8]]);
        let (det, history) = determinant_by_expansion_recorded(&a).unwrap();
        assert_eq!(det, determinant_by_expansion(&a).unwrap());
        // Zero entry in column 2 is skipped, so two steps remain.
        assert_eq!(history.len(), 2);
        assert_eq!(history.steps()[0].col, 0);
        assert_eq!(history.steps()[1].col, 2);
        assert_eq!(history.steps()[1].accumulated, det);
        assert_eq!(history.steps()[0].minor, mat(&[&[4, 5], &[7, 8]]));
    }

    #[test]
    fn cofactor_matrix_of_2x2() {
        let a = mat(&[&[1, 2], &[3, 4]]);
        assert_eq!(
            cofactor_matrix(&a).unwrap(),
            mat(&[&[4, -3], &[-2, 1]])
        );
        assert_eq!(
            adjugate(&a).unwrap(),
            mat(&[&[4, -2], &[-3, 1]])
        );
    }

    #[test]
    fn adjugate_identity_product() {
        // A * adj(A) = det(A) * I
        let a = mat(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 1]]);
        let det = determinant_by_expansion(&a).unwrap();
        let product = a.multiply(&adjugate(&a).unwrap()).unwrap();
        assert_eq!(product, Matrix::identity(3).unwrap().scalar_mul(&det));
    }

    #[test]
    fn inverse_by_adjugate_matches_scenario() {
        let a = mat(&[&[1, 2], &[3, 4]]);
        let inv = inverse_by_adjugate(&a).unwrap();
        let expected = Matrix::from_rows(vec![
            vec![from_int(-2), from_int(1)],
            vec![
                Rational::new(3.into(), 2.into()),
                Rational::new((-1).into(), 2.into()),
            ],
        ])
        .unwrap();
        assert_eq!(inv, expected);
    }

    #[test]
    fn inverse_by_adjugate_rejects_singular() {
        let a = mat(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        assert!(matches!(
            inverse_by_adjugate(&a),
            Err(LinAlgError::NotInvertible)
        ));
    }

    #[test]
    fn one_by_one_inverse() {
        let a = Matrix::new(1, 1, vec![from_int(4)]).unwrap();
        let inv = inverse_by_adjugate(&a).unwrap();
        assert_eq!(
            inv.get(0, 0),
            Some(&Rational::new(1.into(), 4.into()))
        );
        let zero = Matrix::new(1, 1, vec![from_int(0)]).unwrap();
        assert!(matches!(
            inverse_by_adjugate(&zero),
            Err(LinAlgError::NotInvertible)
        ));
    }

    #[test]
    fn cofactor_steps_record_signed_values() {
        let a = mat(&[&[1, 2], &[3, 4]]);
        let (_, history) = cofactor_matrix_recorded(&a).unwrap();
        assert_eq!(history.len(), 4);
        let step = &history.steps()[1]; // c[1][2] = -3
        assert_eq!(step.row, 0);
        assert_eq!(step.col, 1);
        assert_eq!(step.sign, -1);
        assert_eq!(step.accumulated, from_int(-3));
        assert_eq!(step.description, "cofactor c[1][2] = -3");
    }
}
