//! # Data structures
//!
//! The input matrix, subsets of its rows, the certificates collected about those subsets and the
//! linear programs that are handed to a backend.
pub mod certificate;
pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
pub mod subset;
