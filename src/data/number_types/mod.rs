//! # Number types
//!
//! All optimization backends currently used compute in `f64`. This module collects the policy for
//! interpreting their output: when a value counts as zero and how near-binary values are rounded.
pub mod numerical_precision;
