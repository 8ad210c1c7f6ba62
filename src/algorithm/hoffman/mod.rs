//! # Certificate search for the Hoffman constant
//!
//! Starting from all rows of the matrix, repeatedly test a subset of rows and record what was
//! learned about it:
//!
//! * if the transposed restriction of the matrix has a positive Chebyshev radius `t`, the subset
//! is surjective and `1 / t` is a lower bound on the Hoffman constant;
//! * otherwise, the simplex point mapped to zero is a witness of non-surjectivity, and every subset
//! containing its support is non-surjective as well.
//!
//! The next subset is the largest one that these facts don't decide. Once no such subset remains,
//! the largest bound found is the Hoffman constant.
use enum_map::EnumMap;
use log::{debug, info, warn};

use crate::algorithm::chebyshev::{chebyshev_certificate, ChebyshevPoint};
use crate::algorithm::subset::{propose, Proposal};
use crate::config::Settings;
use crate::data::certificate::CertificateSet;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::numerical_precision::is_positive;
use crate::data::subset::Subset;
use crate::error::Error;
use crate::solver::{ConvexSolver, IntegerSolver};
use crate::solver::microlp::MicroLp;

pub use estimate::{Classification, Estimate, IterationRecord, Termination, Witness};

mod estimate;
mod verify;

/// Estimate the Hoffman constant of a matrix with the default backend and tolerance.
///
/// # Arguments
///
/// * `matrix`: Matrix `A` describing the polyhedra `{x : A x <= b}`.
/// * `max_iterations`: Cap on the number of tested subsets.
pub fn hoffman(matrix: &DenseMatrix, max_iterations: usize) -> Result<Estimate, Error> {
    Hoffman::new(MicroLp, MicroLp)
        .with_settings(Settings::default().with_max_iterations(max_iterations))
        .estimate(matrix)
}

/// Certificate search, parametrized by the backends solving its two programs.
#[derive(Debug, Clone)]
pub struct Hoffman<C, I> {
    convex: C,
    integer: I,
    settings: Settings,
}

impl Default for Hoffman<MicroLp, MicroLp> {
    fn default() -> Self {
        Self::new(MicroLp, MicroLp)
    }
}

impl<C: ConvexSolver, I: IntegerSolver> Hoffman<C, I> {
    /// Create a search with default settings.
    ///
    /// # Arguments
    ///
    /// * `convex`: Solves the Chebyshev program of each tested subset.
    /// * `integer`: Solves the binary program proposing the next subset.
    pub fn new(convex: C, integer: I) -> Self {
        Self { convex, integer, settings: Settings::default() }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    #[allow(missing_docs)]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the search on a matrix.
    ///
    /// # Return value
    ///
    /// The bound with its certificates. Reaching the iteration cap is not an error; it is reported
    /// through `Estimate::termination`. Errors are only returned for invalid settings and backend
    /// failures.
    pub fn estimate(&self, matrix: &DenseMatrix) -> Result<Estimate, Error> {
        self.settings.validate()?;

        let mut search = Search::new(matrix, self.settings.tolerance);
        let mut state = if matrix.nr_rows() > 0 {
            State::Running(Subset::full(matrix.nr_rows()))
        } else {
            State::Done(Termination::Converged)
        };

        let mut iterations = 0;
        let termination = loop {
            state = match state {
                State::Running(subset) if iterations < self.settings.max_iterations => {
                    iterations += 1;
                    search.step(subset, &self.convex, &self.integer)?
                },
                State::Running(subset) => {
                    warn!(
                        "stopped after {} iterations with candidate {} of size {} untested",
                        iterations, subset, subset.cardinality(),
                    );
                    break Termination::IterationLimit;
                },
                State::Done(termination) => break termination,
            };
        };

        info!(
            "search {:?} after {} iterations with bound {} ({} surjective, {} non-surjective)",
            termination, iterations, search.constant,
            search.counts[Classification::Surjective], search.counts[Classification::NonSurjective],
        );

        Ok(search.finish(iterations, self.settings.max_iterations, termination))
    }
}

/// Where the search is between iterations.
enum State {
    /// This subset is to be tested next.
    Running(Subset),
    Done(Termination),
}

/// Everything accumulated by the search.
struct Search<'a> {
    matrix: &'a DenseMatrix,
    tolerance: f64,
    surjective: CertificateSet,
    non_surjective: CertificateSet,
    constant: f64,
    best: Option<Witness>,
    history: Vec<IterationRecord>,
    counts: EnumMap<Classification, usize>,
}

impl<'a> Search<'a> {
    fn new(matrix: &'a DenseMatrix, tolerance: f64) -> Self {
        Self {
            matrix,
            tolerance,
            surjective: CertificateSet::new(matrix.nr_rows()),
            non_surjective: CertificateSet::new(matrix.nr_rows()),
            constant: 0_f64,
            best: None,
            history: Vec::new(),
            counts: EnumMap::default(),
        }
    }

    /// Test one subset, record the outcome and propose the next subset.
    fn step<C: ConvexSolver, I: IntegerSolver>(
        &mut self,
        subset: Subset,
        convex: &C,
        integer: &I,
    ) -> Result<State, Error> {
        debug_assert!(!subset.is_empty());

        let restricted = self.matrix.select_rows(&subset).transpose();
        let ChebyshevPoint { point, radius } = chebyshev_certificate(&restricted, convex)?;

        let classification = if is_positive(radius, self.tolerance) {
            self.surjective.push(subset.clone());

            let bound = 1_f64 / radius;
            if bound > self.constant {
                self.constant = bound;
                self.best = Some(Witness { subset: subset.clone(), point: subset.lift(&point), radius });
            }

            Classification::Surjective
        } else {
            let support = Subset::support_of(&subset.lift(&point), self.tolerance);
            debug_assert!(support.is_subset_of(&subset));
            // A simplex point always has a large enough coordinate, unless the tolerance is
            // unreasonably large. The tested subset itself is a weaker, but valid, certificate.
            let certificate = if support.is_empty() { subset.clone() } else { support };
            self.non_surjective.push(certificate);

            Classification::NonSurjective
        };

        debug!(
            "iteration {}: subset of size {} has radius {} ({:?}), bound {}",
            self.history.len() + 1, subset.cardinality(), radius, classification, self.constant,
        );
        self.counts[classification] += 1;

        let proposal = propose(&self.surjective, &self.non_surjective, &subset, integer)?;
        self.history.push(IterationRecord { subset, radius, classification, bound: self.constant });

        Ok(match proposal {
            Proposal::Subset(next) => State::Running(next),
            Proposal::Exhausted => State::Done(Termination::Converged),
        })
    }

    fn finish(self, iterations: usize, max_iterations: usize, termination: Termination) -> Estimate {
        Estimate {
            constant: self.constant,
            surjective: self.surjective,
            non_surjective: self.non_surjective,
            iterations,
            max_iterations,
            termination,
            best: self.best,
            history: self.history,
            counts: self.counts,
        }
    }
}
