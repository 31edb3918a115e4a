//! Round-trip properties of the text format, driven by random engine values.

use mat_api::text::{
    deserialize_solution, deserialize_value, escape, serialize_solution, serialize_value,
    unescape,
};
use mat_api::Value;
use mat_linalg::{solve_system, Matrix, Vector};
use mat_num::Rational;
use proptest::prelude::*;

fn rational_strategy() -> impl Strategy<Value = Rational> {
    (-99i64..=99, 1i64..=12).prop_map(|(n, d)| Rational::new(n.into(), d.into()))
}

fn vector_strategy(len: usize) -> impl Strategy<Value = Vector> {
    prop::collection::vec(rational_strategy(), len)
        .prop_map(|components| Vector::new(components).unwrap())
}

fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(rational_strategy(), rows * cols)
        .prop_map(move |data| Matrix::new(rows, cols, data).unwrap())
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        rational_strategy().prop_map(Value::Scalar),
        (1usize..=6).prop_flat_map(vector_strategy).prop_map(Value::Vector),
        (1usize..=4, 1usize..=4)
            .prop_flat_map(|(r, c)| matrix_strategy(r, c))
            .prop_map(Value::Matrix),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn escaping_round_trips(text in "[a-z;\\\\\\n]{0,40}") {
        prop_assert_eq!(unescape(&escape(&text)).unwrap(), text);
    }

    #[test]
    fn escaped_fields_are_line_safe(text in "[a-z;\\\\\\n]{0,40}") {
        let escaped = escape(&text);
        prop_assert!(!escaped.contains('\n'));
    }

    #[test]
    fn values_round_trip_exactly(value in value_strategy()) {
        let record = serialize_value(&value);
        prop_assert!(!record.contains('\n'));
        prop_assert_eq!(deserialize_value(&record).unwrap(), value);
    }

    #[test]
    fn system_solutions_round_trip_exactly(
        (a, b) in (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| {
            (matrix_strategy(rows, cols), vector_strategy(rows))
        })
    ) {
        let solution = solve_system(&a, &b).unwrap();
        let record = serialize_solution(&solution);
        prop_assert_eq!(deserialize_solution(&record).unwrap(), solution);
    }
}
