//! Network Parameter Conversion Tests
//!
//! Inverse-pair identities, N-port S/Z consistency and 2-port-only rejection.

use ndarray::{Array2, Array3};
use num_complex::Complex64;
use rfnet_core::math::{
    a2z, h2z, max_gain, s2t, s2t_series, s2z, s2z_series, stability_factor, t2s, t2s_series,
    y2z, y2z_series, z2a, z2h, z2s, z2s_series, z2y, z2y_series, ReferenceImpedance,
};
use rfnet_core::{touchstone, NetworkError};

mod common;
use common::Lcg;

const TEST_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/data");

fn assert_matrix_close(a: &Array2<Complex64>, b: &Array2<Complex64>, tol: f64) {
    assert_eq!(a.dim(), b.dim());
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).norm() <= tol * (1.0 + y.norm()), "{x} vs {y}");
    }
}

// ============================================================================
// Inverse pairs (2-port)
// ============================================================================

#[test]
fn test_s_t_inverse_pair() {
    let mut rng = Lcg(1);
    for _ in 0..20 {
        let mut s = rng.s_matrix(2);
        // Keep S21 away from zero
        s[[1, 0]] += Complex64::new(0.8, 0.0);

        let t = s2t(&s).unwrap();
        assert_matrix_close(&t2s(&t).unwrap(), &s, 1e-9);

        let mut t = rng.z_matrix(2).mapv(|c| c / 100.0);
        t[[0, 0]] += Complex64::new(1.0, 0.0);
        assert_matrix_close(&s2t(&t2s(&t).unwrap()).unwrap(), &t, 1e-9);
    }
}

#[test]
fn test_s_z_inverse_pair() {
    let mut rng = Lcg(2);
    let zref = ReferenceImpedance::default();
    for _ in 0..20 {
        let s = rng.s_matrix(2);
        let z = s2z(&s, &zref).unwrap();
        assert_matrix_close(&z2s(&z, &zref).unwrap(), &s, 1e-9);

        let z = rng.z_matrix(2);
        assert_matrix_close(&s2z(&z2s(&z, &zref).unwrap(), &zref).unwrap(), &z, 1e-9);
    }
}

#[test]
fn test_z_y_h_abcd_inverse_pairs() {
    let mut rng = Lcg(3);
    for _ in 0..20 {
        let z = rng.z_matrix(2);
        assert_matrix_close(&y2z(&z2y(&z).unwrap()).unwrap(), &z, 1e-9);
        assert_matrix_close(&h2z(&z2h(&z).unwrap()).unwrap(), &z, 1e-9);
        assert_matrix_close(&a2z(&z2a(&z).unwrap()).unwrap(), &z, 1e-9);

        let y = z2y(&z).unwrap();
        assert_matrix_close(&z2y(&y2z(&y).unwrap()).unwrap(), &y, 1e-9);
    }
}

// ============================================================================
// N-port
// ============================================================================

#[test]
fn test_nport_s_z_unit_reference() {
    let mut rng = Lcg(4);
    let zref = ReferenceImpedance::from(1.0);
    for n in 1..=4 {
        for _ in 0..5 {
            let s = rng.s_matrix(n);
            let z = s2z(&s, &zref).unwrap();
            assert_matrix_close(&z2s(&z, &zref).unwrap(), &s, 1e-9);
        }
    }
}

#[test]
fn test_nport_z_y_general_inverse() {
    let mut rng = Lcg(5);
    for n in [1, 3, 4] {
        let z = rng.z_matrix(n);
        let y = z2y(&z).unwrap();
        assert_matrix_close(&y2z(&y).unwrap(), &z, 1e-9);
    }
}

#[test]
fn test_per_port_reference_impedance() {
    let mut rng = Lcg(6);
    let zref = ReferenceImpedance::from(vec![
        Complex64::new(50.0, 0.0),
        Complex64::new(25.0, 5.0),
        Complex64::new(75.0, -10.0),
    ]);
    let s = rng.s_matrix(3);
    let z = s2z(&s, &zref).unwrap();
    assert_matrix_close(&z2s(&z, &zref).unwrap(), &s, 1e-9);

    let short = ReferenceImpedance::from(vec![50.0, 50.0]);
    assert!(matches!(s2z(&s, &short), Err(NetworkError::Dimension(_))));
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_two_port_only_reject_three_port() {
    let m = Array2::<Complex64>::eye(3);
    let is_dim = |r: Result<_, NetworkError>| matches!(r, Err(NetworkError::Dimension(_)));

    assert!(is_dim(s2t(&m).map(drop)));
    assert!(is_dim(t2s(&m).map(drop)));
    assert!(is_dim(z2h(&m).map(drop)));
    assert!(is_dim(h2z(&m).map(drop)));
    assert!(is_dim(z2a(&m).map(drop)));
    assert!(is_dim(a2z(&m).map(drop)));
    assert!(is_dim(stability_factor(&m).map(drop)));
    assert!(is_dim(max_gain(&m).map(drop)));
}

#[test]
fn test_series_rejects_non_square() {
    let s = Array3::<Complex64>::zeros((2, 2, 3));
    assert!(matches!(
        s2z_series(&s, &ReferenceImpedance::default()),
        Err(NetworkError::Dimension(_))
    ));
}

// ============================================================================
// Sample scenario
// ============================================================================

#[test]
fn test_sample_round_trip_through_z_and_y() {
    let (s, _freq) = touchstone::load(format!("{}/sample.s2p", TEST_DATA_DIR)).unwrap();
    let zref = ReferenceImpedance::default();

    let z = s2z_series(&s, &zref).unwrap();
    let y = z2y_series(&z).unwrap();
    let z_back = y2z_series(&y).unwrap();
    let s_back = z2s_series(&z_back, &zref).unwrap();

    assert_eq!(s_back.shape(), s.shape());
    for (a, b) in s_back.iter().zip(s.iter()) {
        assert!((a - b).norm() < 1e-9, "{a} vs {b}");
    }
}

#[test]
fn test_sample_t_series_round_trip() {
    let (s, _freq) = touchstone::load(format!("{}/sample.s2p", TEST_DATA_DIR)).unwrap();
    let back = t2s_series(&s2t_series(&s).unwrap()).unwrap();
    for (a, b) in back.iter().zip(s.iter()) {
        assert!((a - b).norm() < 1e-9);
    }
}
