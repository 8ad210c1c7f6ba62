//! # Exhaustive enumeration of integer programs
//!
//! Evaluates every assignment of a pure integer program with bounded variables. Only usable for
//! small programs, but exact and deterministic: among all optimal assignments, the first one in
//! lexicographic order is returned.
use std::ops::RangeInclusive;

use itertools::Itertools;
use log::trace;

use crate::algorithm::OptimizationResult;
use crate::data::linear_program::elements::{Objective, VariableType};
use crate::data::linear_program::LinearProgram;
use crate::solver::{IntegerSolver, SolverError};

/// Solves pure integer programs by trying every assignment.
#[derive(Debug, Clone, Copy)]
pub struct Exhaustive {
    max_assignments: u64,
}

impl Default for Exhaustive {
    fn default() -> Self {
        Self { max_assignments: 1 << 20 }
    }
}

impl Exhaustive {
    /// Limit the number of assignments that may be enumerated.
    ///
    /// Programs with a larger search space are rejected as unsupported.
    #[must_use]
    pub fn with_max_assignments(mut self, max_assignments: u64) -> Self {
        self.max_assignments = max_assignments;
        self
    }

    fn domains(&self, program: &LinearProgram) -> Result<Vec<RangeInclusive<i64>>, SolverError> {
        let domains = program.variables().iter().enumerate()
            .map(|(j, variable)| match (variable.variable_type, variable.lower_bound, variable.upper_bound) {
                (VariableType::Integer, Some(lower), Some(upper)) if lower.is_finite() && upper.is_finite() => {
                    Ok(lower.ceil() as i64..=upper.floor() as i64)
                },
                _ => Err(SolverError::Unsupported(format!(
                    "variable {} is not an integer variable with finite bounds", j,
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let nr_assignments = domains.iter()
            .map(|domain| (domain.end() - domain.start() + 1).max(0) as u64)
            .try_fold(1_u64, u64::checked_mul);
        match nr_assignments {
            Some(count) if count <= self.max_assignments => Ok(domains),
            _ => Err(SolverError::Unsupported(format!(
                "more than {} assignments to enumerate", self.max_assignments,
            ))),
        }
    }
}

impl IntegerSolver for Exhaustive {
    fn solve_integer(
        &self,
        program: &LinearProgram,
    ) -> Result<OptimizationResult<Vec<f64>>, SolverError> {
        let domains = self.domains(program)?;
        trace!("enumerating assignments of {} integer variables", domains.len());

        let sign = match program.objective() {
            Objective::Maximize => 1_f64,
            Objective::Minimize => -1_f64,
        };
        let candidates: Box<dyn Iterator<Item = Vec<f64>>> = if domains.is_empty() {
            Box::new(std::iter::once(Vec::new()))
        } else {
            Box::new(domains.into_iter()
                .multi_cartesian_product()
                .map(|assignment| assignment.into_iter().map(|value| value as f64).collect()))
        };

        let mut best: Option<(f64, Vec<f64>)> = None;
        for candidate in candidates {
            if !program.is_feasible(&candidate, 0_f64) {
                continue;
            }
            let value = sign * program.objective_value(&candidate);
            if best.as_ref().map_or(true, |(best_value, _)| value > *best_value) {
                best = Some((value, candidate));
            }
        }

        Ok(match best {
            Some((_, assignment)) => OptimizationResult::FiniteOptimum(assignment),
            None => OptimizationResult::Infeasible,
        })
    }
}
