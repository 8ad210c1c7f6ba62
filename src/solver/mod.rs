//! # Optimization backends
//!
//! The certificate search needs two capabilities: solving a linear program with continuous
//! variables, and solving one with binary variables. Both are expressed as traits over the
//! backend-neutral `LinearProgram`, such that any conforming backend can be substituted without
//! touching the search.
use thiserror::Error;

use crate::algorithm::OptimizationResult;
use crate::data::linear_program::LinearProgram;

pub mod exhaustive;
pub mod microlp;

/// A backend failed for a reason other than the program being infeasible or unbounded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// The backend reported an internal failure.
    #[error("backend failure: {0}")]
    Backend(String),
    /// The backend can't handle this kind of program.
    #[error("unsupported program: {0}")]
    Unsupported(String),
    /// The backend returned values that don't form a valid solution.
    #[error("invalid solution: {0}")]
    InvalidSolution(String),
}

/// Solving linear programs with continuous variables only.
pub trait ConvexSolver {
    /// Solve a program.
    ///
    /// # Return value
    ///
    /// Whether the program is feasible, and if so, one value per variable of an optimal solution if
    /// the program is bounded. An `Err` is only returned if the backend itself failed.
    fn solve_continuous(
        &self,
        program: &LinearProgram,
    ) -> Result<OptimizationResult<Vec<f64>>, SolverError>;
}

/// Solving linear programs in which some variables are restricted to integer values.
pub trait IntegerSolver {
    /// Solve a program, respecting integrality.
    ///
    /// # Return value
    ///
    /// As for `ConvexSolver::solve_continuous`. Values of integer variables may contain rounding
    /// errors.
    fn solve_integer(
        &self,
        program: &LinearProgram,
    ) -> Result<OptimizationResult<Vec<f64>>, SolverError>;
}

impl<S: ConvexSolver + ?Sized> ConvexSolver for &S {
    fn solve_continuous(
        &self,
        program: &LinearProgram,
    ) -> Result<OptimizationResult<Vec<f64>>, SolverError> {
        (**self).solve_continuous(program)
    }
}

impl<S: IntegerSolver + ?Sized> IntegerSolver for &S {
    fn solve_integer(
        &self,
        program: &LinearProgram,
    ) -> Result<OptimizationResult<Vec<f64>>, SolverError> {
        (**self).solve_integer(program)
    }
}
