//! Network Tests
//!
//! Loading a network from file and reading derived parameter traces.

use approx::assert_relative_eq;
use rfnet_core::math::{max_gain_with_regime, GainRegime};
use rfnet_core::network::{Network, ParamKind, Trace};
use rfnet_core::NetworkError;

const TEST_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/data");

fn load(name: &str) -> rfnet_core::Result<Network> {
    Network::from_touchstone(format!("{}/{}", TEST_DATA_DIR, name))
}

#[test]
fn test_from_touchstone_sample() {
    let ntwk = load("sample.s2p").unwrap();

    assert_eq!(ntwk.name(), "sample.s2p");
    assert_eq!(ntwk.nports(), 2);
    assert_eq!(ntwk.nfreq(), 5);
    assert_relative_eq!(ntwk.f()[2], 2.0e9);
    assert_eq!(ntwk.available(), ParamKind::ALL.to_vec());
}

#[test]
fn test_from_touchstone_rejects_empty() {
    assert!(matches!(
        load("empty_data.s1p"),
        Err(NetworkError::Data(ref msg)) if msg == "no data was loaded"
    ));
}

#[test]
fn test_from_touchstone_propagates_format_errors() {
    assert!(matches!(load("sample.txt"), Err(NetworkError::Format(_))));
    assert!(matches!(load("comments_only.s2p"), Err(NetworkError::Format(_))));
}

#[test]
fn test_three_port_available_kinds() {
    let ntwk = load("coupler_db.s3p").unwrap();
    assert_eq!(
        ntwk.available(),
        vec![ParamKind::S, ParamKind::Z, ParamKind::Y, ParamKind::GroupDelay]
    );
    assert!(ntwk.trace(ParamKind::ABCD, 0, 0).is_none());
    assert!(matches!(ntwk.stability_factor(), Err(NetworkError::Dimension(_))));
    assert!(ntwk.trace(ParamKind::Z, 2, 2).is_some());
    assert!(ntwk.trace(ParamKind::Z, 3, 0).is_none());
}

#[test]
fn test_s_trace_matches_file() {
    let ntwk = load("sample.s2p").unwrap();
    let Some(Trace::Complex(s21)) = ntwk.trace(ParamKind::S, 1, 0) else {
        panic!("expected complex trace");
    };
    assert_eq!(s21.len(), 5);
    assert_relative_eq!(s21[0].re, 2.10);
    assert_relative_eq!(s21[0].im, 1.45);
}

#[test]
fn test_gain_traces_follow_regime() {
    let ntwk = load("sample.s2p").unwrap();
    let k = ntwk.stability_factor().unwrap();
    let gain = ntwk.max_gain().unwrap();

    for (idx, s) in ntwk.s().outer_iter().enumerate() {
        let (expected, regime) = max_gain_with_regime(&s.to_owned()).unwrap();
        assert_relative_eq!(gain[idx], expected, epsilon = 1e-12);
        assert_eq!(regime == GainRegime::Available, k[idx] > 1.0);
    }

    let Some(Trace::Real(trace)) = ntwk.trace(ParamKind::MaxGain, 0, 0) else {
        panic!("expected real trace");
    };
    assert_eq!(trace, gain.to_vec());
}

#[test]
fn test_group_delay_trace_shape() {
    let ntwk = load("load_ma.s1p").unwrap();
    let gd = ntwk.group_delay().unwrap();
    assert_eq!(gd.shape(), &[4, 1, 1]);

    // -30 degrees per 100 MHz wraps to 330 degrees
    let expected = 330.0 / 360.0 / 100e6;
    assert_relative_eq!(gd[[1, 0, 0]], expected, max_relative = 1e-9);
    assert_eq!(gd[[0, 0, 0]], gd[[1, 0, 0]]);
}

#[test]
fn test_check_reports_errors() {
    let ntwk = load("coupler_db.s3p").unwrap();
    assert!(ntwk.check(ParamKind::S).is_ok());
    assert!(ntwk.check(ParamKind::Y).is_ok());
    assert!(matches!(ntwk.check(ParamKind::H), Err(NetworkError::Dimension(_))));
}
