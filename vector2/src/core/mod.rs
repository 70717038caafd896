//! Core math types and the numeric traits they are built on.
pub mod math;
pub mod traits;
