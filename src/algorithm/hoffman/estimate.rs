//! # Outcome of a certificate search
use std::fmt;

use enum_map::{Enum, EnumMap};

use crate::data::certificate::CertificateSet;
use crate::data::subset::Subset;

/// What a tested subset turned out to be.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Enum)]
pub enum Classification {
    /// Positive Chebyshev radius.
    Surjective,
    /// A simplex point is mapped to zero.
    NonSurjective,
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Termination {
    /// No undecided subset remains, the bound is final.
    Converged,
    /// The iteration cap was reached while an untested candidate remained.
    IterationLimit,
}

/// The subset attaining the bound, with its Chebyshev solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Witness {
    #[allow(missing_docs)]
    pub subset: Subset,
    /// Simplex point over all rows of the matrix, zero outside of `subset`.
    pub point: Vec<f64>,
    /// Chebyshev radius, the bound is its reciprocal.
    pub radius: f64,
}

/// A single tested subset.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord {
    #[allow(missing_docs)]
    pub subset: Subset,
    #[allow(missing_docs)]
    pub radius: f64,
    #[allow(missing_docs)]
    pub classification: Classification,
    /// The bound after this iteration.
    pub bound: f64,
}

/// Hoffman constant estimate together with the certificates that support it.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Largest reciprocal Chebyshev radius over the surjective subsets, zero if there are none.
    pub constant: f64,
    /// Subsets found surjective.
    pub surjective: CertificateSet,
    /// Supports of the simplex points mapped to zero.
    pub non_surjective: CertificateSet,
    /// Number of subsets tested.
    pub iterations: usize,
    /// The iteration cap the search ran with.
    pub max_iterations: usize,
    #[allow(missing_docs)]
    pub termination: Termination,
    /// Subset attaining `constant`, if any subset was surjective.
    pub best: Option<Witness>,
    /// Every tested subset, in order.
    pub history: Vec<IterationRecord>,
    /// Number of tested subsets per classification.
    pub counts: EnumMap<Classification, usize>,
}

impl Estimate {
    /// The number of iterations, or `-1` if the iteration cap was reached.
    ///
    /// The cap counts as reached even when the last allowed iteration happened to decide every
    /// remaining subset; `termination` tells the two apart.
    pub fn iteration_number(&self) -> i64 {
        if self.iterations >= self.max_iterations {
            -1
        } else {
            self.iterations as i64
        }
    }

    /// Whether the bound is final.
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "H = {}", self.constant)?;
        writeln!(f, "iterations: {} ({:?})", self.iterations, self.termination)?;
        writeln!(f, "surjective: {}", self.surjective)?;
        write!(f, "non-surjective: {}", self.non_surjective)
    }
}
