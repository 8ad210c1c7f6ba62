//! Helper methods for the accuracy of floating point solver output.
use num_traits::Float;

/// Whether a value is positive beyond numerical noise.
///
/// # Arguments
///
/// * `value`: Solver output, possibly with rounding errors.
/// * `tolerance`: Nonnegative threshold at or below which the value counts as zero.
pub fn is_positive<F: Float>(value: F, tolerance: F) -> bool {
    debug_assert!(tolerance >= F::zero());

    value > tolerance
}

/// Round a value that should be binary to the nearest of `0` and `1`.
///
/// Values outside of the unit interval are clamped, such that e.g. `-1e-12` becomes `false` and
/// `1.000001` becomes `true`.
pub fn round_to_binary<F: Float>(value: F) -> bool {
    let half = F::one() / (F::one() + F::one());

    value >= half
}

/// Distance of a value to the binary value it rounds to.
pub fn binary_rounding_error<F: Float>(value: F) -> F {
    let candidate = if round_to_binary(value) { F::one() } else { F::zero() };

    (candidate - value).abs()
}

/// Clamp tiny negative values that result from rounding errors to zero.
pub fn clamp_nonnegative<F: Float>(value: F) -> F {
    value.max(F::zero())
}
