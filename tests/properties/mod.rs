//! Properties that hold for any matrix.
use hoffman::{Classification, DenseMatrix, Hoffman, hoffman, Settings};
use hoffman::solver::exhaustive::Exhaustive;
use hoffman::solver::microlp::MicroLp;

fn matrices() -> Vec<DenseMatrix> {
    vec![
        DenseMatrix::identity(3),
        DenseMatrix::from_data(vec![
            vec![1_f64, 1_f64],
            vec![1_f64, -1_f64],
            vec![-1_f64, 0_f64],
        ]).unwrap(),
        DenseMatrix::from_data(vec![
            vec![1_f64, 2_f64, 0_f64],
            vec![0_f64, 1_f64, -1_f64],
            vec![-1_f64, -3_f64, 1_f64],
            vec![0_f64, 0_f64, 0_f64],
        ]).unwrap(),
        DenseMatrix::from_data(vec![vec![3_f64], vec![-2_f64]]).unwrap(),
    ]
}

#[test]
fn certificates_verify() {
    for matrix in matrices() {
        let estimate = Hoffman::new(MicroLp, Exhaustive::default()).estimate(&matrix).unwrap();
        assert!(estimate.is_converged());
        assert!(estimate.verify(&matrix, &MicroLp, 1e-6).is_ok());
    }
}

#[test]
fn certificates_are_consistent() {
    for matrix in matrices() {
        let estimate = Hoffman::new(MicroLp, Exhaustive::default()).estimate(&matrix).unwrap();

        assert_eq!(estimate.surjective.width(), matrix.nr_rows());
        assert_eq!(estimate.non_surjective.width(), matrix.nr_rows());
        assert_eq!(estimate.surjective.len(), estimate.counts[Classification::Surjective]);
        assert_eq!(estimate.non_surjective.len(), estimate.counts[Classification::NonSurjective]);
        assert_eq!(estimate.history.len(), estimate.iterations);
        // No subset is tested twice
        for (i, first) in estimate.history.iter().enumerate() {
            for second in &estimate.history[i + 1..] {
                assert_ne!(first.subset, second.subset);
            }
        }
        // Every non-surjectivity support lies within the subset that produced it
        let non_surjective_records = estimate.history.iter()
            .filter(|record| record.classification == Classification::NonSurjective);
        for (certificate, record) in estimate.non_surjective.iter().zip(non_surjective_records) {
            assert!(certificate.is_subset_of(&record.subset));
        }
    }
}

#[test]
fn iteration_cap_only_shortens() {
    for matrix in matrices() {
        let full = Hoffman::new(MicroLp, Exhaustive::default()).estimate(&matrix).unwrap();
        for max_iterations in 0..full.iterations {
            let settings = Settings::default().with_max_iterations(max_iterations);
            let capped = Hoffman::new(MicroLp, Exhaustive::default())
                .with_settings(settings)
                .estimate(&matrix)
                .unwrap();

            assert_eq!(capped.iteration_number(), -1);
            assert_eq!(capped.iterations, max_iterations);
            assert!(capped.constant <= full.constant);
            assert_eq!(capped.history[..], full.history[..max_iterations]);
        }
    }
}

#[test]
fn backends_agree_on_the_bound() {
    for matrix in matrices() {
        let microlp = hoffman(&matrix, 1000).unwrap();
        let exhaustive = Hoffman::new(MicroLp, Exhaustive::default()).estimate(&matrix).unwrap();
        assert!((microlp.constant - exhaustive.constant).abs() <= 1e-6 * exhaustive.constant.max(1_f64));
    }
}
