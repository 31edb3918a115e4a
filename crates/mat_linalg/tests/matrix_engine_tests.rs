//! End-to-end checks of the matrix engine on the reference matrices used
//! throughout the crate docs.

use mat_linalg::{
    determinant_by_elimination, determinant_by_expansion, inverse_by_adjugate,
    inverse_gauss_jordan, rank, reduced_row_echelon_form, reduced_row_echelon_form_recorded,
    solve_system, LinAlgError, Matrix, RowOp, SolutionSet, Vector,
};
use mat_num::rational::from_int;
use mat_num::Rational;

fn mat(rows: &[&[i64]]) -> Matrix {
    Matrix::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|&v| from_int(v)).collect())
            .collect(),
    )
    .unwrap()
}

fn vec_of(values: &[i64]) -> Vector {
    Vector::new(values.iter().map(|&v| from_int(v)).collect()).unwrap()
}

fn half(n: i64) -> Rational {
    Rational::new(n.into(), 2.into())
}

#[test]
fn two_by_two_reference_matrix() {
    let a = mat(&[&[1, 2], &[3, 4]]);

    assert_eq!(determinant_by_elimination(&a).unwrap(), from_int(-2));
    assert_eq!(determinant_by_expansion(&a).unwrap(), from_int(-2));
    assert_eq!(rank(&a), 2);

    let expected_inverse = Matrix::from_rows(vec![
        vec![from_int(-2), from_int(1)],
        vec![half(3), half(-1)],
    ])
    .unwrap();

    let gj = inverse_gauss_jordan(&a).unwrap();
    let adj = inverse_by_adjugate(&a).unwrap();
    assert_eq!(gj, expected_inverse);
    assert_eq!(adj, expected_inverse);
    assert_eq!(a.multiply(&gj).unwrap(), Matrix::identity(2).unwrap());
    assert_eq!(a.multiply(&adj).unwrap(), Matrix::identity(2).unwrap());
}

#[test]
fn singular_three_by_three() {
    let a = mat(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);

    assert_eq!(determinant_by_elimination(&a).unwrap(), from_int(0));
    assert_eq!(determinant_by_expansion(&a).unwrap(), from_int(0));
    assert_eq!(rank(&a), 2);

    assert!(matches!(
        inverse_gauss_jordan(&a),
        Err(LinAlgError::NotInvertible)
    ));
    assert!(matches!(
        inverse_by_adjugate(&a),
        Err(LinAlgError::NotInvertible)
    ));
}

#[test]
fn rref_history_replays_step_by_step() {
    let a = mat(&[&[0, 2, 4], &[3, 6, 9], &[1, 1, 1]]);
    let (reduced, history) = reduced_row_echelon_form_recorded(&a);

    // Applying each logged operation to a fresh copy must reproduce every
    // intermediate snapshot and end at the recorded result.
    let mut replay = a.clone();
    for step in history.steps() {
        replay = match &step.op {
            RowOp::Swap { a, b } => replay.swapped_rows(*a, *b).unwrap(),
            RowOp::Scale { row, factor } => replay.scaled_row(*row, factor).unwrap(),
            RowOp::AddMultiple {
                target,
                source,
                factor,
            } => replay.added_multiple(*target, *source, factor).unwrap(),
        };
        assert_eq!(replay, step.state_after);
    }
    assert_eq!(replay, reduced);
    assert_eq!(reduced, reduced_row_echelon_form(&a));
}

#[test]
fn first_recorded_step_is_the_pivot_swap() {
    let a = mat(&[&[0, 2], &[3, 6]]);
    let (_, history) = reduced_row_echelon_form_recorded(&a);
    assert_eq!(history.steps()[0].description, "swap R1 and R2");
}

#[test]
fn adjugate_relation_three_by_three() {
    use mat_linalg::adjugate;

    let a = mat(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 1]]);
    let det = determinant_by_expansion(&a).unwrap();
    let lhs = a.multiply(&adjugate(&a).unwrap()).unwrap();
    assert_eq!(lhs, Matrix::identity(3).unwrap().scalar_mul(&det));
}

#[test]
fn system_solving_end_to_end() {
    let a = mat(&[&[2, 1, -1], &[-3, -1, 2], &[-2, 1, 2]]);
    let b = vec_of(&[8, -11, -3]);
    let solution = solve_system(&a, &b).unwrap();
    assert_eq!(solution.set, SolutionSet::Unique(vec_of(&[2, 3, -1])));
    assert_eq!(
        solution.to_string(),
        "unique solution [2, 3, -1] (rank(A) = 3, rank([A|b]) = 3, 3 variables)"
    );
}

#[test]
fn inverse_entries_are_exact_fractions() {
    let a = mat(&[&[2, 0], &[0, 3]]);
    let inv = inverse_gauss_jordan(&a).unwrap();
    assert_eq!(inv.get(0, 0), Some(&half(1)));
    assert_eq!(inv.get(1, 1), Some(&Rational::new(1.into(), 3.into())));
}
