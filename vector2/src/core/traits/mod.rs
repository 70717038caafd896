//! Core/common traits for use in vector2.
mod fuzzy_eq;
mod real;

pub use fuzzy_eq::FuzzyEq;
pub use real::Real;
