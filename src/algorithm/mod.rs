//! # Algorithms
//!
//! The certificate search for Hoffman constants, built from two programs that are formulated here
//! and solved by a backend from the `solver` module.
pub mod chebyshev;
pub mod hoffman;
pub mod subset;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm
#[allow(missing_docs)]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum OptimizationResult<T> {
    Infeasible,
    FiniteOptimum(T),
    Unbounded,
}
