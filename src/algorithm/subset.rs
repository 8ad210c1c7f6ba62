//! # Proposing the next subset to test
//!
//! Given everything learned so far, find a largest subset of rows that is not yet decided:
//!
//! * it is not contained in a subset already known to be surjective, because subsets of a
//! surjective subset have a Chebyshev radius at least as large and can't improve the bound;
//! * it doesn't contain the support of a known non-surjectivity witness, because such a subset is
//! non-surjective as well;
//! * it is not larger than the previously tested subset.
//!
//! As a binary program over indicator variables `x`:
//!
//! ```text
//! maximize    sum(x)
//! subject to  (f - 1) · x <= -1          for every surjective certificate f
//!             i · x <= sum(i) - 1        for every non-surjectivity certificate i
//!             sum(x) <= sum(previous)
//!             x binary
//! ```
use log::trace;

use crate::algorithm::OptimizationResult;
use crate::data::certificate::CertificateSet;
use crate::data::linear_program::{Constraint, LinearProgram, Variable};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::number_types::numerical_precision::round_to_binary;
use crate::data::subset::Subset;
use crate::error::Error;
use crate::solver::{IntegerSolver, SolverError};

/// Outcome of a successful proposal attempt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Proposal {
    /// A nonempty subset that should be tested next.
    Subset(Subset),
    /// Every remaining subset is decided by the certificates.
    Exhausted,
}

/// Propose the next subset to test.
///
/// # Arguments
///
/// * `surjective`: Subsets known to be surjective.
/// * `non_surjective`: Supports of witnesses of non-surjectivity.
/// * `previous`: The subset tested last, which bounds the size of the proposal.
/// * `solver`: Backend for the binary program.
///
/// # Return value
///
/// A proposal, or `Exhausted` if the binary program is infeasible or only admits the empty subset.
/// Any other backend failure, including a solution that doesn't satisfy the program after
/// rounding, is an error.
pub fn propose<S: IntegerSolver + ?Sized>(
    surjective: &CertificateSet,
    non_surjective: &CertificateSet,
    previous: &Subset,
    solver: &S,
) -> Result<Proposal, Error> {
    let program = formulate(surjective, non_surjective, previous)?;
    if program.nr_variables() == 0 || program.trivially_infeasible(0_f64) {
        return Ok(Proposal::Exhausted);
    }
    trace!(
        "subset program: {} variables, {} constraints",
        program.nr_variables(), program.nr_constraints(),
    );

    match solver.solve_integer(&program)? {
        OptimizationResult::FiniteOptimum(values) => interpret(&program, &values),
        OptimizationResult::Infeasible => Ok(Proposal::Exhausted),
        OptimizationResult::Unbounded => Err(SolverError::InvalidSolution(
            "a program over binary variables was reported unbounded".to_string(),
        ).into()),
    }
}

/// Describe the subset program as a linear program with one binary variable per row.
pub fn formulate(
    surjective: &CertificateSet,
    non_surjective: &CertificateSet,
    previous: &Subset,
) -> Result<LinearProgram, Error> {
    let width = previous.len();
    for (name, set) in [("surjective", surjective), ("non-surjective", non_surjective)] {
        if set.width() != width {
            return Err(Error::Dimension(format!(
                "{} certificates have width {}, the previous subset has length {}",
                name, set.width(), width,
            )));
        }
    }

    let mut program = LinearProgram::new(Objective::Maximize);
    for _ in 0..width {
        program.push_variable(Variable::binary(1_f64));
    }

    // Include at least one index outside of each surjective subset
    for certificate in surjective {
        let coefficients = (0..width)
            .filter(|&j| !certificate.contains(j))
            .map(|j| (j, -1_f64))
            .collect();
        program.push_constraint(Constraint::new(coefficients, ConstraintType::Less, -1_f64))?;
    }

    // Exclude at least one index of each witness support
    for certificate in non_surjective {
        let coefficients = certificate.support().map(|j| (j, 1_f64)).collect();
        let rhs = certificate.cardinality() as f64 - 1_f64;
        program.push_constraint(Constraint::new(coefficients, ConstraintType::Less, rhs))?;
    }

    let size = (0..width).map(|j| (j, 1_f64)).collect();
    program.push_constraint(Constraint::new(size, ConstraintType::Less, previous.cardinality() as f64))?;

    Ok(program)
}

fn interpret(program: &LinearProgram, values: &[f64]) -> Result<Proposal, Error> {
    if values.len() != program.nr_variables() {
        return Err(SolverError::InvalidSolution(format!(
            "expected {} values, got {}", program.nr_variables(), values.len(),
        )).into());
    }
    trace!("largest rounding distance: {}", program.binary_rounding_error(values));

    let subset = Subset::from_indicator(values.iter().map(|&value| round_to_binary(value)).collect());
    let rounded = subset.indicator().iter().map(|&included| if included { 1_f64 } else { 0_f64 }).collect::<Vec<_>>();
    if !program.is_feasible(&rounded, 0_f64) {
        return Err(SolverError::InvalidSolution(format!(
            "rounded subset {} violates the subset program", subset,
        )).into());
    }

    if subset.is_empty() {
        Ok(Proposal::Exhausted)
    } else {
        Ok(Proposal::Subset(subset))
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::OptimizationResult;
    use crate::algorithm::subset::{formulate, propose, Proposal};
    use crate::data::certificate::CertificateSet;
    use crate::data::linear_program::LinearProgram;
    use crate::data::linear_program::elements::ConstraintType;
    use crate::data::subset::Subset;
    use crate::error::Error;
    use crate::solver::{IntegerSolver, SolverError};
    use crate::solver::exhaustive::Exhaustive;
    use crate::solver::microlp::MicroLp;

    struct Fixed(OptimizationResult<Vec<f64>>);

    impl IntegerSolver for Fixed {
        fn solve_integer(&self, _: &LinearProgram) -> Result<OptimizationResult<Vec<f64>>, SolverError> {
            Ok(self.0.clone())
        }
    }

    fn certificates(width: usize, rows: &[&[u8]]) -> CertificateSet {
        let mut set = CertificateSet::new(width);
        for row in rows {
            set.push(Subset::from_binary(row));
        }
        set
    }

    #[test]
    fn formulation() {
        let surjective = certificates(3, &[&[1, 1, 0]]);
        let non_surjective = certificates(3, &[&[0, 1, 1]]);
        let program = formulate(&surjective, &non_surjective, &Subset::full(3)).unwrap();

        assert_eq!(program.nr_variables(), 3);
        assert_eq!(program.nr_constraints(), 3);
        let constraints = program.constraints();
        assert_eq!(constraints[0].coefficients, vec![(2, -1_f64)]);
        assert_eq!(constraints[0].rhs, -1_f64);
        assert_eq!(constraints[1].coefficients, vec![(1, 1_f64), (2, 1_f64)]);
        assert_eq!(constraints[1].rhs, 1_f64);
        assert_eq!(constraints[2].rhs, 3_f64);
        assert!(constraints.iter().all(|c| c.constraint_type == ConstraintType::Less));
    }

    #[test]
    fn only_size_cap() {
        let nothing = CertificateSet::new(3);
        let proposal = propose(&nothing, &nothing, &Subset::full(3), &Exhaustive::default()).unwrap();
        assert_eq!(proposal, Proposal::Subset(Subset::full(3)));

        let proposal = propose(&nothing, &nothing, &Subset::full(3), &MicroLp).unwrap();
        assert_eq!(proposal, Proposal::Subset(Subset::full(3)));
    }

    #[test]
    fn full_surjective_subset_exhausts() {
        let surjective = certificates(2, &[&[1, 1]]);
        let nothing = CertificateSet::new(2);
        // Decided without calling the backend
        let solver = Fixed(OptimizationResult::FiniteOptimum(vec![1_f64, 1_f64]));
        assert_eq!(propose(&surjective, &nothing, &Subset::full(2), &solver).unwrap(), Proposal::Exhausted);
    }

    #[test]
    fn exclude_witness_support() {
        let nothing = CertificateSet::new(3);
        let non_surjective = certificates(3, &[&[0, 0, 1]]);
        for proposal in [
            propose(&nothing, &non_surjective, &Subset::full(3), &Exhaustive::default()).unwrap(),
            propose(&nothing, &non_surjective, &Subset::full(3), &MicroLp).unwrap(),
        ] {
            assert_eq!(proposal, Proposal::Subset(Subset::from_binary(&[1, 1, 0])));
        }
    }

    #[test]
    fn conflicting_certificates_exhaust() {
        let surjective = certificates(3, &[&[1, 1, 0]]);
        let non_surjective = certificates(3, &[&[0, 0, 1]]);
        let previous = Subset::from_binary(&[1, 1, 0]);
        assert_eq!(propose(&surjective, &non_surjective, &previous, &Exhaustive::default()).unwrap(), Proposal::Exhausted);
        assert_eq!(propose(&surjective, &non_surjective, &previous, &MicroLp).unwrap(), Proposal::Exhausted);
    }

    #[test]
    fn size_is_capped() {
        let nothing = CertificateSet::new(3);
        let non_surjective = certificates(3, &[&[1, 1, 1]]);
        let proposal = propose(&nothing, &non_surjective, &Subset::full(3), &Exhaustive::default()).unwrap();
        assert_eq!(proposal, Proposal::Subset(Subset::from_binary(&[0, 1, 1])));

        match propose(&nothing, &non_surjective, &Subset::full(3), &MicroLp).unwrap() {
            Proposal::Subset(subset) => assert_eq!(subset.cardinality(), 2),
            Proposal::Exhausted => panic!(),
        }

        let previous = Subset::from_binary(&[1, 0, 0]);
        let proposal = propose(&nothing, &nothing, &previous, &Exhaustive::default()).unwrap();
        assert_eq!(proposal.clone(), Proposal::Subset(Subset::from_binary(&[0, 0, 1])));
    }

    #[test]
    fn near_binary_values_are_rounded() {
        let nothing = CertificateSet::new(2);
        let solver = Fixed(OptimizationResult::FiniteOptimum(vec![0.9999999, 1e-8]));
        let proposal = propose(&nothing, &nothing, &Subset::full(2), &solver).unwrap();
        assert_eq!(proposal, Proposal::Subset(Subset::from_binary(&[1, 0])));
    }

    #[test]
    fn empty_optimum_exhausts() {
        let nothing = CertificateSet::new(2);
        let solver = Fixed(OptimizationResult::FiniteOptimum(vec![0_f64, 0_f64]));
        assert_eq!(propose(&nothing, &nothing, &Subset::full(2), &solver).unwrap(), Proposal::Exhausted);
        let nothing = CertificateSet::new(0);
        assert_eq!(propose(&nothing, &nothing, &Subset::full(0), &solver).unwrap(), Proposal::Exhausted);
    }

    #[test]
    fn invalid_solutions_are_errors() {
        let nothing = CertificateSet::new(2);
        let non_surjective = certificates(2, &[&[1, 1]]);
        let solver = Fixed(OptimizationResult::FiniteOptimum(vec![1_f64, 1_f64]));
        assert!(matches!(
            propose(&nothing, &non_surjective, &Subset::full(2), &solver),
            Err(Error::Solver(SolverError::InvalidSolution(_))),
        ));
        let solver = Fixed(OptimizationResult::FiniteOptimum(vec![1_f64]));
        assert!(matches!(
            propose(&nothing, &nothing, &Subset::full(2), &solver),
            Err(Error::Solver(SolverError::InvalidSolution(_))),
        ));
        let solver = Fixed(OptimizationResult::Unbounded);
        assert!(matches!(
            propose(&nothing, &nothing, &Subset::full(2), &solver),
            Err(Error::Solver(SolverError::InvalidSolution(_))),
        ));
    }

    #[test]
    fn width_mismatch() {
        let narrow = CertificateSet::new(2);
        let wide = CertificateSet::new(3);
        assert!(matches!(
            propose(&narrow, &wide, &Subset::full(3), &Exhaustive::default()),
            Err(Error::Dimension(_)),
        ));
    }
}
