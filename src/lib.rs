//! # Hoffman constant estimation
//!
//! The Hoffman constant of a matrix `A` bounds the distance from a point to the polyhedron
//! `{x : A x <= b}` in terms of the constraint violation at that point, uniformly over all
//! right-hand sides `b`.
//!
//! It is computed by searching over subsets of rows of `A`. Each tested subset is classified by
//! solving a Chebyshev linear program, and the next subset to test is proposed by a binary
//! program over the certificates collected so far. Both programs are solved by a pluggable
//! backend, see the `solver` module.
#![warn(missing_docs)]

pub mod algorithm;
pub mod config;
pub mod data;
pub mod error;
pub mod solver;

pub use algorithm::hoffman::{
    Classification,
    Estimate,
    hoffman,
    Hoffman,
    IterationRecord,
    Termination,
    Witness,
};
pub use config::Settings;
pub use data::linear_algebra::matrix::DenseMatrix;
pub use error::Error;

#[cfg(test)]
mod tests;
