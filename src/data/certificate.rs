//! # Certificate collections
//!
//! The search accumulates facts about subsets of rows. Each fact is a subset of the same ground
//! set; a collection of them is only ever appended to.
use std::fmt;
use std::slice::Iter;

use itertools::Itertools;

use crate::data::subset::Subset;

/// Append-only collection of subsets of `{0, ..., width - 1}`.
///
/// Used for both the surjectivity certificates (subsets with a positive Chebyshev radius) and the
/// non-surjectivity certificates (supports of simplex points mapped to zero).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateSet {
    width: usize,
    rows: Vec<Subset>,
}

impl CertificateSet {
    /// Create an empty collection for subsets of a ground set of size `width`.
    pub fn new(width: usize) -> Self {
        Self { width, rows: Vec::new() }
    }

    /// Add a certificate.
    ///
    /// # Arguments
    ///
    /// * `subset`: Subset over a ground set of size `self.width()`.
    pub fn push(&mut self, subset: Subset) {
        debug_assert_eq!(subset.len(), self.width);

        self.rows.push(subset);
    }

    /// Size of the ground set of each certificate.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of certificates.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[allow(missing_docs)]
    pub fn iter(&self) -> Iter<'_, Subset> {
        self.rows.iter()
    }

    #[allow(missing_docs)]
    pub fn contains(&self, subset: &Subset) -> bool {
        self.rows.contains(subset)
    }

    /// The certificates as `0/1` rows, one per certificate.
    pub fn to_binary_rows(&self) -> Vec<Vec<u8>> {
        self.rows.iter().map(Subset::to_binary).collect()
    }
}

impl<'a> IntoIterator for &'a CertificateSet {
    type Item = &'a Subset;
    type IntoIter = Iter<'a, Subset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for CertificateSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.rows.iter().join(", "))
    }
}
