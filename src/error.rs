//! # Error reporting
//!
//! Errors are split in two levels. A `SolverError` is raised by an optimization backend and says
//! nothing about the Hoffman search itself. An `Error` is what the search reports to the caller;
//! backend failures are wrapped in it.
use thiserror::Error;

use crate::solver::SolverError;

/// Anything that can go wrong while estimating a Hoffman constant.
#[derive(Debug, Error)]
pub enum Error {
    /// The matrix data is not rectangular, or shapes of two objects don't agree.
    #[error("dimension mismatch: {0}")]
    Dimension(String),
    /// The matrix contains a NaN or an infinite value.
    #[error("matrix value at ({row}, {column}) is not finite")]
    NonFinite {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
    },
    /// A Chebyshev program was requested over a simplex without any coordinates.
    ///
    /// The simplex `{x >= 0, sum(x) = 1}` is empty in dimension zero.
    #[error("the simplex over zero coordinates is empty")]
    EmptySimplex,
    /// The settings can't be used for a search.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    /// The Chebyshev program was reported infeasible or unbounded.
    ///
    /// This program is always feasible and bounded, so this indicates a misconfigured backend.
    #[error("the Chebyshev program over {nr_columns} coordinates was reported {status}")]
    ConvexProgram {
        /// Either "infeasible" or "unbounded".
        status: &'static str,
        /// Number of simplex coordinates of the failing program.
        nr_columns: usize,
    },
    /// A backend failed for a reason other than infeasibility.
    #[error(transparent)]
    Solver(#[from] SolverError),
    /// A certificate did not hold up when solved again.
    #[error("certificate verification failed: {0}")]
    Verification(String),
}
