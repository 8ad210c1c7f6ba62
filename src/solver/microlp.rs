//! # The `microlp` backend
//!
//! A pure Rust simplex implementation with branch and bound for integer variables. It computes in
//! `f64`, so values of integer variables come back with small rounding errors.
use log::trace;
use ::microlp::{ComparisonOp, OptimizationDirection, Problem, Variable as MicroLpVariable};

use crate::algorithm::OptimizationResult;
use crate::data::linear_program::{LinearProgram, Variable};
use crate::data::linear_program::elements::{ConstraintType, Objective, VariableType};
use crate::solver::{ConvexSolver, IntegerSolver, SolverError};

/// Solves both continuous and integer programs with `microlp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLp;

impl MicroLp {
    fn solve(&self, program: &LinearProgram) -> Result<OptimizationResult<Vec<f64>>, SolverError> {
        if program.nr_variables() == 0 {
            return Err(SolverError::Unsupported("program without variables".to_string()));
        }
        // Constraints without coefficients are never passed on, only checked.
        if program.trivially_infeasible(0_f64) {
            return Ok(OptimizationResult::Infeasible);
        }

        let mut problem = Problem::new(match program.objective() {
            Objective::Maximize => OptimizationDirection::Maximize,
            Objective::Minimize => OptimizationDirection::Minimize,
        });
        let variables = program.variables().iter()
            .map(|variable| add_variable(&mut problem, variable))
            .collect::<Vec<_>>();

        for constraint in program.constraints() {
            let expression = constraint.coefficients.iter()
                .filter(|&&(_, coefficient)| coefficient != 0_f64)
                .map(|&(j, coefficient)| (variables[j], coefficient))
                .collect::<Vec<_>>();
            if expression.is_empty() {
                continue;
            }
            let operator = match constraint.constraint_type {
                ConstraintType::Equal => ComparisonOp::Eq,
                ConstraintType::Greater => ComparisonOp::Ge,
                ConstraintType::Less => ComparisonOp::Le,
            };
            problem.add_constraint(expression, operator, constraint.rhs);
        }

        trace!(
            "solving with microlp: {} variables, {} constraints, integer: {}",
            program.nr_variables(), program.nr_constraints(), program.has_integer_variables(),
        );
        match problem.solve() {
            Ok(solution) => Ok(OptimizationResult::FiniteOptimum(
                variables.iter().map(|&variable| solution[variable]).collect(),
            )),
            Err(::microlp::Error::Infeasible) => Ok(OptimizationResult::Infeasible),
            Err(::microlp::Error::Unbounded) => Ok(OptimizationResult::Unbounded),
            Err(error) => Err(SolverError::Backend(error.to_string())),
        }
    }
}

fn add_variable(problem: &mut Problem, variable: &Variable) -> MicroLpVariable {
    match variable.variable_type {
        VariableType::Continuous => problem.add_var(
            variable.cost,
            (
                variable.lower_bound.unwrap_or(f64::NEG_INFINITY),
                variable.upper_bound.unwrap_or(f64::INFINITY),
            ),
        ),
        VariableType::Integer if variable.is_binary() => problem.add_binary_var(variable.cost),
        VariableType::Integer => problem.add_integer_var(
            variable.cost,
            (
                variable.lower_bound.map_or(i32::MIN, |bound| bound.ceil() as i32),
                variable.upper_bound.map_or(i32::MAX, |bound| bound.floor() as i32),
            ),
        ),
    }
}

impl ConvexSolver for MicroLp {
    fn solve_continuous(
        &self,
        program: &LinearProgram,
    ) -> Result<OptimizationResult<Vec<f64>>, SolverError> {
        if program.has_integer_variables() {
            return Err(SolverError::Unsupported(
                "integer variables in a continuous program".to_string(),
            ));
        }

        self.solve(program)
    }
}

impl IntegerSolver for MicroLp {
    fn solve_integer(
        &self,
        program: &LinearProgram,
    ) -> Result<OptimizationResult<Vec<f64>>, SolverError> {
        self.solve(program)
    }
}
