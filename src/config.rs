//! # Search settings
use crate::error::Error;

/// Options for the Hoffman certificate search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Maximum number of iterations, each consisting of one convex and one integer solve.
    pub max_iterations: usize,
    /// Values at or below this threshold are treated as zero.
    ///
    /// Used both to decide whether a Chebyshev radius is positive and to determine the support of
    /// a non-surjectivity witness.
    pub tolerance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-9,
        }
    }
}

impl Settings {
    /// Replace the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Replace the zero threshold.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !self.tolerance.is_finite() || self.tolerance < 0_f64 {
            return Err(Error::InvalidSettings(format!(
                "tolerance should be finite and nonnegative, got {}", self.tolerance,
            )));
        }

        Ok(())
    }
}
