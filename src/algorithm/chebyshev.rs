//! # Chebyshev radius of a simplex under a linear map
//!
//! For a matrix `M` with `k` columns, find the point `x` of the simplex `{x >= 0, sum(x) = 1}`
//! whose image `M x` is closest to the origin in the maximum norm:
//!
//! ```text
//! minimize    t
//! subject to  M x <= t 1
//!             M x >= -t 1
//!             sum(x) = 1
//!             x >= 0, t >= 0
//! ```
//!
//! A positive optimal `t` certifies that no convex combination of the columns of `M` vanishes.
//! An optimal `t` of zero comes with a point `x` that is mapped to the origin.
use log::trace;

use crate::algorithm::OptimizationResult;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::{Constraint, LinearProgram, SparseTuple, Variable};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::number_types::numerical_precision::clamp_nonnegative;
use crate::error::Error;
use crate::solver::{ConvexSolver, SolverError};

/// Optimal solution of the Chebyshev program.
#[derive(Clone, Debug, PartialEq)]
pub struct ChebyshevPoint {
    /// Point on the simplex, one value per column of the matrix.
    pub point: Vec<f64>,
    /// Largest absolute value of the image of `point`, minimized.
    pub radius: f64,
}

/// Solve the Chebyshev program for a matrix.
///
/// # Arguments
///
/// * `matrix`: Matrix `M` with at least one column. Without rows, the answer is the uniform point
/// with radius zero and the solver is not called.
/// * `solver`: Backend for the linear program.
///
/// # Return value
///
/// The optimal point and radius. The program is always feasible and bounded, so a backend
/// reporting otherwise results in an `Error::ConvexProgram`.
pub fn chebyshev_certificate<S: ConvexSolver + ?Sized>(
    matrix: &DenseMatrix,
    solver: &S,
) -> Result<ChebyshevPoint, Error> {
    let nr_columns = matrix.nr_columns();
    if nr_columns == 0 {
        return Err(Error::EmptySimplex);
    }
    if matrix.nr_rows() == 0 {
        return Ok(ChebyshevPoint {
            point: vec![1_f64 / nr_columns as f64; nr_columns],
            radius: 0_f64,
        });
    }

    let program = formulate(matrix)?;
    trace!(
        "Chebyshev program: {} variables, {} constraints",
        program.nr_variables(), program.nr_constraints(),
    );

    match solver.solve_continuous(&program)? {
        OptimizationResult::FiniteOptimum(values) => interpret(values, nr_columns),
        OptimizationResult::Infeasible => Err(Error::ConvexProgram { status: "infeasible", nr_columns }),
        OptimizationResult::Unbounded => Err(Error::ConvexProgram { status: "unbounded", nr_columns }),
    }
}

/// Describe the Chebyshev program of a matrix as a linear program.
///
/// Variables `0..k` are the simplex coordinates, variable `k` is the radius `t`. Each row of the
/// matrix contributes an upper and a lower constraint, and a final equality fixes the coordinate
/// sum.
pub fn formulate(matrix: &DenseMatrix) -> Result<LinearProgram, Error> {
    let nr_columns = matrix.nr_columns();
    if nr_columns == 0 {
        return Err(Error::EmptySimplex);
    }

    let mut program = LinearProgram::new(Objective::Minimize);
    for _ in 0..nr_columns {
        program.push_variable(Variable::nonnegative(0_f64));
    }
    let radius = program.push_variable(Variable::nonnegative(1_f64));

    for row in matrix.rows() {
        let coefficients = row.iter().enumerate()
            .filter(|&(_, &value)| value != 0_f64)
            .map(|(j, &value)| (j, value))
            .collect::<Vec<SparseTuple>>();

        let mut upper = coefficients.clone();
        upper.push((radius, -1_f64));
        program.push_constraint(Constraint::new(upper, ConstraintType::Less, 0_f64))?;

        let mut lower = coefficients;
        lower.push((radius, 1_f64));
        program.push_constraint(Constraint::new(lower, ConstraintType::Greater, 0_f64))?;
    }

    let simplex = (0..nr_columns).map(|j| (j, 1_f64)).collect();
    program.push_constraint(Constraint::new(simplex, ConstraintType::Equal, 1_f64))?;

    Ok(program)
}

/// Largest absolute value of `matrix · point`.
///
/// Zero for a matrix without rows.
pub fn radius_at(matrix: &DenseMatrix, point: &[f64]) -> f64 {
    matrix.multiply(point).into_iter().map(f64::abs).fold(0_f64, f64::max)
}

fn interpret(values: Vec<f64>, nr_columns: usize) -> Result<ChebyshevPoint, Error> {
    if values.len() != nr_columns + 1 {
        return Err(SolverError::InvalidSolution(format!(
            "expected {} values, got {}", nr_columns + 1, values.len(),
        )).into());
    }

    let radius = clamp_nonnegative(values[nr_columns]);
    let point = values.into_iter().take(nr_columns).map(clamp_nonnegative).collect();

    Ok(ChebyshevPoint { point, radius })
}
