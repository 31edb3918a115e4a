//! Exact numeric leaf layer: rationals and simplified radicals.
//!
//! Every scalar in ExpliMat is a `num_rational::BigRational`, which already
//! guarantees the reduced-form invariant (gcd(|numerator|, denominator) = 1,
//! denominator > 0, zero as 0/1). This crate adds the checked entry points
//! that turn the panicking `Ratio` constructors into recoverable errors, and
//! the `Radical` type for values of the form `coefficient * sqrt(radicand)`.

pub mod error;
pub mod radical;
pub mod rational;

pub use error::NumError;
pub use radical::Radical;
pub use rational::Rational;
