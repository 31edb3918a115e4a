//! Runs both determinant algorithms on the same matrix and prints every
//! recorded step, with engine debug logging enabled:
//!
//!     cargo run -p mat_linalg --example determinant_walkthrough

use mat_linalg::{
    determinant_by_elimination_recorded, determinant_by_expansion_recorded, Matrix,
};
use mat_num::rational::{self, from_int};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let entries: [i64; 9] = [2, 1, -1, -3, -1, 2, -2, 1, 2];
    let matrix = Matrix::new(3, 3, entries.iter().map(|&n| from_int(n)).collect()).unwrap();

    println!("Matrix:\n{matrix}\n");

    println!("=== Determinant by elimination ===");
    let (det, history) = determinant_by_elimination_recorded(&matrix).unwrap();
    print!("{history}");
    println!("det = {}\n", rational::format(&det));

    println!("=== Determinant by cofactor expansion ===");
    let (det, history) = determinant_by_expansion_recorded(&matrix).unwrap();
    for step in history.steps() {
        println!("{}", step.description);
        println!("minor:\n{}\n", step.minor);
    }
    println!("det = {}", rational::format(&det));
}
