//! # Checking the certificates of an estimate
//!
//! The certificates returned by a search can be checked independently, by solving the Chebyshev
//! program of each of them again.
use itertools::Itertools;

use crate::algorithm::chebyshev::{chebyshev_certificate, radius_at};
use crate::algorithm::hoffman::estimate::Estimate;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::numerical_precision::is_positive;
use crate::data::subset::Subset;
use crate::error::Error;
use crate::solver::ConvexSolver;

impl Estimate {
    /// Check that the certificates are consistent with the matrix and with each other.
    ///
    /// The following is verified:
    ///
    /// * every surjective subset has a positive radius `t` with `1 / t` at most the bound;
    /// * every non-surjectivity support is nonempty and has radius zero;
    /// * the best witness is one of the surjective subsets, attains the bound, and its point has
    /// the recorded radius;
    /// * in the history, bounds never decrease and subset sizes never increase.
    ///
    /// # Arguments
    ///
    /// * `matrix`: The matrix the estimate was computed for.
    /// * `solver`: Backend for the Chebyshev programs.
    /// * `tolerance`: Threshold for zero radii, also used as relative slack on the bound.
    pub fn verify<S: ConvexSolver + ?Sized>(
        &self,
        matrix: &DenseMatrix,
        solver: &S,
        tolerance: f64,
    ) -> Result<(), Error> {
        let width = matrix.nr_rows();
        if self.surjective.width() != width || self.non_surjective.width() != width {
            return Err(Error::Dimension(format!(
                "certificates have widths {} and {}, the matrix has {} rows",
                self.surjective.width(), self.non_surjective.width(), width,
            )));
        }
        if !(self.constant >= 0_f64) {
            return Err(Error::Verification(format!("bound {} is negative", self.constant)));
        }
        let slack = tolerance * self.constant.max(1_f64);

        for certificate in &self.surjective {
            let radius = radius_of(matrix, certificate, solver)?;
            if !is_positive(radius, tolerance) {
                return Err(Error::Verification(format!(
                    "surjective subset {} has radius {}", certificate, radius,
                )));
            }
            if 1_f64 / radius > self.constant + slack {
                return Err(Error::Verification(format!(
                    "surjective subset {} gives bound {}, exceeding {}", certificate, 1_f64 / radius, self.constant,
                )));
            }
        }

        for certificate in &self.non_surjective {
            if certificate.is_empty() {
                return Err(Error::Verification("empty non-surjectivity support".to_string()));
            }
            let radius = radius_of(matrix, certificate, solver)?;
            if is_positive(radius, tolerance) {
                return Err(Error::Verification(format!(
                    "non-surjectivity support {} has radius {}", certificate, radius,
                )));
            }
        }

        if let Some(best) = &self.best {
            if !self.surjective.contains(&best.subset) {
                return Err(Error::Verification(format!(
                    "best subset {} is not among the surjective subsets", best.subset,
                )));
            }
            if (1_f64 / best.radius - self.constant).abs() > slack {
                return Err(Error::Verification(format!(
                    "best subset has radius {}, which doesn't attain bound {}", best.radius, self.constant,
                )));
            }
            let outside_support = best.point.iter()
                .zip(best.subset.indicator())
                .any(|(&value, &included)| !included && value != 0_f64);
            if best.point.len() != width || outside_support {
                return Err(Error::Verification(format!(
                    "best point is not supported on subset {}", best.subset,
                )));
            }
            let attained = radius_at(&matrix.transpose(), &best.point);
            if (attained - best.radius).abs() > tolerance * best.radius.max(1_f64) {
                return Err(Error::Verification(format!(
                    "best point has radius {}, while {} was recorded", attained, best.radius,
                )));
            }
        }

        for (previous, next) in self.history.iter().tuple_windows() {
            if next.bound < previous.bound {
                return Err(Error::Verification(format!(
                    "bound decreased from {} to {}", previous.bound, next.bound,
                )));
            }
            if next.subset.cardinality() > previous.subset.cardinality() {
                return Err(Error::Verification(format!(
                    "subset {} is larger than its predecessor {}", next.subset, previous.subset,
                )));
            }
        }

        Ok(())
    }
}

/// Chebyshev radius of the transposed restriction of the matrix to a subset of its rows.
fn radius_of<S: ConvexSolver + ?Sized>(
    matrix: &DenseMatrix,
    certificate: &Subset,
    solver: &S,
) -> Result<f64, Error> {
    let restricted = matrix.select_rows(certificate).transpose();
    Ok(chebyshev_certificate(&restricted, solver)?.radius)
}
