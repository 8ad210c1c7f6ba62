//! Small matrices with a known Hoffman constant.
use approx::assert_abs_diff_eq;

use hoffman::{DenseMatrix, Error, hoffman, Termination};

#[test]
fn identity() {
    let estimate = hoffman(&DenseMatrix::identity(2), 10).unwrap();

    // The uniform point maps to (1/2, 1/2)
    assert_abs_diff_eq!(estimate.constant, 2_f64, epsilon = 1e-6);
    assert_eq!(estimate.surjective.to_binary_rows(), vec![vec![1, 1]]);
    assert!(estimate.non_surjective.is_empty());
    assert_eq!(estimate.iteration_number(), 1);
}

#[test]
fn zero_row_is_excluded() {
    let matrix = DenseMatrix::from_data(vec![
        vec![2_f64, 0_f64, 0_f64],
        vec![0_f64, 2_f64, 0_f64],
        vec![0_f64, 0_f64, 0_f64],
        vec![0_f64, 0_f64, 2_f64],
    ]).unwrap();
    let estimate = hoffman(&matrix, 100).unwrap();

    assert!(estimate.is_converged());
    assert_eq!(estimate.non_surjective.to_binary_rows()[0], vec![0, 0, 1, 0]);
    for certificate in &estimate.surjective {
        assert!(!certificate.contains(2));
    }
    assert_eq!(estimate.surjective.to_binary_rows(), vec![vec![1, 1, 0, 1]]);
    // Three scaled unit vectors, the uniform point maps to (2/3, 2/3, 2/3)
    assert_abs_diff_eq!(estimate.constant, 1.5, epsilon = 1e-6);
}

#[test]
fn no_iterations() {
    let estimate = hoffman(&DenseMatrix::identity(2), 0).unwrap();

    assert_eq!(estimate.constant, 0_f64);
    assert!(estimate.surjective.is_empty());
    assert!(estimate.non_surjective.is_empty());
    assert_eq!(estimate.iteration_number(), -1);
    assert_eq!(estimate.termination, Termination::IterationLimit);
}

#[test]
fn singleton() {
    let estimate = hoffman(&DenseMatrix::from_data(vec![vec![5_f64]]).unwrap(), 10).unwrap();

    assert_abs_diff_eq!(estimate.constant, 0.2, epsilon = 1e-9);
    assert_eq!(estimate.surjective.to_binary_rows(), vec![vec![1]]);
    assert!(estimate.non_surjective.is_empty());
    assert_eq!(estimate.iteration_number(), 1);

    let best = estimate.best.unwrap();
    assert_abs_diff_eq!(best.radius, 5_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(best.point[0], 1_f64, epsilon = 1e-9);
}

#[test]
fn invalid_matrices() {
    assert!(matches!(
        DenseMatrix::from_data(vec![vec![1_f64, 2_f64], vec![3_f64]]),
        Err(Error::Dimension(_)),
    ));
    assert!(matches!(
        DenseMatrix::from_data(vec![vec![1_f64], vec![f64::NAN]]),
        Err(Error::NonFinite { row: 1, column: 0 }),
    ));
}
