use adbench_algo::DetByMinor;
use adbench_core::{Error, FunObj, Options};
use adbench_gradient::{CentralDifference, Dual, ForwardGradient};
use proptest::prelude::*;
use rstest::rstest;

type ForwardDet = ForwardGradient<DetByMinor<Dual<f64>>, f64>;
type CentralDet = CentralDifference<DetByMinor<f64>, f64>;

fn cofactors_3x3(x: &[f64]) -> Vec<f64> {
    vec![
        x[4] * x[8] - x[5] * x[7],
        -(x[3] * x[8] - x[5] * x[6]),
        x[3] * x[7] - x[4] * x[6],
        -(x[1] * x[8] - x[2] * x[7]),
        x[0] * x[8] - x[2] * x[6],
        -(x[0] * x[7] - x[1] * x[6]),
        x[1] * x[5] - x[2] * x[4],
        -(x[0] * x[5] - x[2] * x[3]),
        x[0] * x[4] - x[1] * x[3],
    ]
}

#[rstest]
fn test_forward_gradient_is_cofactor_matrix() {
    let mut grad = ForwardDet::default();
    grad.setup(&Options::new(9, 0)).unwrap();
    let x = [1., 2., 3., 4., 5., 6., 7., 8., 10.];
    assert_eq!(Ok(9), grad.domain());
    assert_eq!(Ok(9), grad.range());
    assert_eq!(Ok(cofactors_3x3(&x)), grad.call(&x));
}

#[rstest]
fn test_central_difference_is_cofactor_matrix() {
    let mut grad = CentralDet::default();
    grad.setup(&Options::new(9, 0).with("step", 1e-3)).unwrap();
    let x = [1., 2., 3., 4., 5., 6., 7., 8., 10.];
    let g = grad.call(&x).unwrap();
    for (expected, actual) in cofactors_3x3(&x).into_iter().zip(g) {
        approx::assert_abs_diff_eq!(expected, actual, epsilon = 1e-6);
    }
}

#[rstest]
fn test_gradient_of_identity(#[values(1, 2, 3, 4)] ell: usize) {
    let mut grad = ForwardDet::default();
    grad.setup(&Options::new(ell * ell, 0)).unwrap();
    let x: Vec<f64> = (0..ell * ell)
        .map(|k| if k / ell == k % ell { 1.0 } else { 0.0 })
        .collect();
    // The cofactor matrix of the identity is the identity
    assert_eq!(Ok(x.clone()), grad.call(&x));
}

#[rstest]
fn test_wrapped_configuration_errors_propagate() {
    let mut grad = ForwardDet::default();
    assert!(matches!(grad.setup(&Options::new(5, 0)), Err(Error::Configuration(_))));
    assert!(matches!(grad.setup(&Options::new(4, 1)), Err(Error::Configuration(_))));
    assert_eq!(Err(Error::NotInitialized), grad.domain());

    grad.setup(&Options::new(4, 0)).unwrap();
    assert!(grad.setup(&Options::new(5, 0)).is_err());
    assert_eq!(Ok(4), grad.domain());
    assert_eq!(Ok(2), grad.wrapped().ell());
}

#[rstest]
fn test_dimension_mismatch() {
    let mut grad = CentralDet::default();
    grad.setup(&Options::new(4, 0)).unwrap();
    assert_eq!(
        Err(Error::Dimension { expected: 4, actual: 3 }),
        grad.call(&[1.0, 2.0, 3.0])
    );
}

#[rstest]
fn test_wrapped_lists_restored_after_gradient() {
    let mut grad = ForwardDet::default();
    grad.setup(&Options::new(16, 0)).unwrap();
    let x: Vec<f64> = (0..16).map(|k| (k * 7 % 5) as f64 - 2.0).collect();
    grad.call(&x).unwrap();
    let (rows, cols) = grad.wrapped().index_lists().unwrap();
    assert_eq!(&[1, 2, 3, 4, 0], rows.as_slice());
    assert_eq!(&[1, 2, 3, 4, 0], cols.as_slice());
}

fn matrix() -> impl Strategy<Value = (usize, Vec<f64>)> {
    (1usize..=4).prop_flat_map(|ell| (Just(ell), prop::collection::vec(-2.0f64..2.0, ell * ell)))
}

proptest! {
    #[test]
    fn proptest_forward_matches_central((ell, x) in matrix()) {
        let option = Options::new(ell * ell, 0).with("step", 1e-5);
        let mut forward = ForwardDet::default();
        let mut central = CentralDet::default();
        forward.setup(&option).unwrap();
        central.setup(&option).unwrap();

        let g_forward = forward.call(&x).unwrap();
        let g_central = central.call(&x).unwrap();
        for (a, b) in g_forward.iter().zip(&g_central) {
            prop_assert!(approx::abs_diff_eq!(*a, *b, epsilon = 1e-6), "{a} != {b}");
        }
    }

    #[test]
    fn proptest_gradient_expands_determinant((ell, x) in matrix()) {
        // Expansion along any row: det = sum_j x[i][j] * d det / d x[i][j]
        let mut det = DetByMinor::<f64>::new();
        let mut grad = ForwardDet::default();
        det.setup(&Options::new(ell * ell, 0)).unwrap();
        grad.setup(&Options::new(ell * ell, 0)).unwrap();

        let d = det.call(&x).unwrap()[0];
        let g = grad.call(&x).unwrap();
        for i in 0..ell {
            let expansion: f64 = (0..ell).map(|j| x[i * ell + j] * g[i * ell + j]).sum();
            prop_assert!(approx::relative_eq!(d, expansion, epsilon = 1e-9, max_relative = 1e-9));
        }
    }
}
