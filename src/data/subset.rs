//! # Subset indicators
//!
//! A subset of the rows of the input matrix, stored as an indicator vector over all rows.
use std::fmt;

use itertools::Itertools;

use crate::data::number_types::numerical_precision::is_positive;

/// Indicator of a subset of `{0, ..., len - 1}`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Subset {
    indicator: Vec<bool>,
}

impl Subset {
    /// Subset containing every index.
    pub fn full(len: usize) -> Self {
        Self { indicator: vec![true; len] }
    }

    /// Subset containing no index.
    pub fn empty(len: usize) -> Self {
        Self { indicator: vec![false; len] }
    }

    #[allow(missing_docs)]
    pub fn from_indicator(indicator: Vec<bool>) -> Self {
        Self { indicator }
    }

    /// Create a subset from a `0/1` vector, where any nonzero value is included.
    pub fn from_binary(values: &[u8]) -> Self {
        Self { indicator: values.iter().map(|&v| v != 0).collect() }
    }

    /// Create a subset from the indices it contains.
    ///
    /// # Arguments
    ///
    /// * `len`: Size of the ground set.
    /// * `indices`: Elements of the subset, all smaller than `len`.
    pub fn from_indices(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut indicator = vec![false; len];
        for i in indices {
            debug_assert!(i < len);
            indicator[i] = true;
        }

        Self { indicator }
    }

    /// Indices where a vector is positive beyond a tolerance.
    pub fn support_of(values: &[f64], tolerance: f64) -> Self {
        Self { indicator: values.iter().map(|&v| is_positive(v, tolerance)).collect() }
    }

    /// Size of the ground set, not of the subset.
    pub fn len(&self) -> usize {
        self.indicator.len()
    }

    /// Number of elements in the subset.
    pub fn cardinality(&self) -> usize {
        self.indicator.iter().filter(|&&included| included).count()
    }

    /// Whether the subset contains no elements.
    ///
    /// Note that this is about the subset, the ground set might still be nonempty.
    pub fn is_empty(&self) -> bool {
        !self.indicator.iter().any(|&included| included)
    }

    #[allow(missing_docs)]
    pub fn contains(&self, i: usize) -> bool {
        self.indicator[i]
    }

    /// Indices of the elements, in increasing order.
    pub fn support(&self) -> impl Iterator<Item = usize> + '_ {
        self.indicator.iter().positions(|&included| included)
    }

    /// Whether every element of this subset is also in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        debug_assert_eq!(self.len(), other.len());

        self.indicator.iter().zip(&other.indicator).all(|(&mine, &theirs)| !mine || theirs)
    }

    /// Spread values belonging to the elements of this subset over the full ground set.
    ///
    /// # Arguments
    ///
    /// * `values`: One value per element of the subset, ordered by index.
    ///
    /// # Return value
    ///
    /// A vector of length `self.len()` that is zero outside of the subset.
    pub fn lift(&self, values: &[f64]) -> Vec<f64> {
        debug_assert_eq!(values.len(), self.cardinality());

        let mut lifted = vec![0_f64; self.len()];
        for (i, &value) in self.support().zip(values) {
            lifted[i] = value;
        }

        lifted
    }

    /// The indicator as a `0/1` vector.
    pub fn to_binary(&self) -> Vec<u8> {
        self.indicator.iter().map(|&included| included as u8).collect()
    }

    #[allow(missing_docs)]
    pub fn indicator(&self) -> &[bool] {
        &self.indicator
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.to_binary().iter().join(", "))
    }
}
