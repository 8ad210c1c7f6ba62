//! # Linear algebra primitives
//!
//! Dense storage of the input matrix, with the row selection and transposition that the
//! certificate search needs.
pub mod matrix;
