//! Derived network figures of merit
//!
//! Rollett stability factor, maximum gain and finite-difference group delay.

use ndarray::{Array1, Array2, Array3, Axis};
use num_complex::Complex64;
use std::f64::consts::PI;

use super::matrix_ops::{det_2x2, ensure_two_port, map_series_scalar};
use crate::error::{NetworkError, Result};

/// Which gain definition `max_gain` evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainRegime {
    /// K > 1: maximum available gain (unconditionally stable)
    Available,
    /// K <= 1: maximum stable gain |S21| / |S12|
    Stable,
}

/// Stability factor K (Rollett stability factor) of a 2-port S-matrix
///
/// K = (1 - |S11|² - |S22|² + |Δ|²) / (2|S12||S21|)
/// where Δ = S11*S22 - S12*S21
pub fn stability_factor(s: &Array2<Complex64>) -> Result<f64> {
    ensure_two_port(s)?;
    let delta = det_2x2(s);

    let numerator = 1.0 - s[[0, 0]].norm_sqr() - s[[1, 1]].norm_sqr() + delta.norm_sqr();
    Ok(numerator / (2.0 * s[[1, 0]].norm() * s[[0, 1]].norm()))
}

/// Maximum gain of a 2-port S-matrix together with the regime it came from
///
/// K > 1: MAG = (K - sqrt(K² - 1)) * |S21| / |S12|
/// otherwise: MSG = |S21| / |S12|
pub fn max_gain_with_regime(s: &Array2<Complex64>) -> Result<(f64, GainRegime)> {
    let k = stability_factor(s)?;
    let msg = s[[1, 0]].norm() / s[[0, 1]].norm();

    if k > 1.0 {
        Ok(((k - (k * k - 1.0).sqrt()) * msg, GainRegime::Available))
    } else {
        Ok((msg, GainRegime::Stable))
    }
}

/// Maximum gain of a 2-port S-matrix (linear, not dB)
///
/// Returns the maximum available gain when K > 1 and the maximum stable
/// gain otherwise; use [`max_gain_with_regime`] to tell the two apart.
pub fn max_gain(s: &Array2<Complex64>) -> Result<f64> {
    max_gain_with_regime(s).map(|(gain, _)| gain)
}

pub fn stability_factor_series(s: &Array3<Complex64>) -> Result<Array1<f64>> {
    map_series_scalar(s, stability_factor)
}

pub fn max_gain_series(s: &Array3<Complex64>) -> Result<Array1<f64>> {
    map_series_scalar(s, max_gain)
}

/// Group delay in seconds for every matrix entry
///
/// τ[k] = mod(arg S[k] - arg S[k-1], 2π) / (2π (f[k] - f[k-1])) for k >= 1.
/// The first sample reuses the k = 1 difference. Returns an array with the
/// same `[nfreq, nports, nports]` shape as the input.
pub fn group_delay(s: &Array3<Complex64>, frequency: &[f64]) -> Result<Array3<f64>> {
    let nfreq = s.len_of(Axis(0));
    if nfreq != frequency.len() {
        return Err(NetworkError::dimension(
            "S and frequency must be the same vector length",
        ));
    }
    if nfreq < 2 {
        return Err(NetworkError::data(
            "group delay calculation requires two or more data points",
        ));
    }

    let mut gd = Array3::<f64>::zeros(s.raw_dim());
    for k in 1..nfreq {
        let domega = 2.0 * PI * (frequency[k] - frequency[k - 1]);
        let prev = s.index_axis(Axis(0), k - 1);
        let curr = s.index_axis(Axis(0), k);

        let mut out = gd.index_axis_mut(Axis(0), k);
        ndarray::Zip::from(&mut out)
            .and(&curr)
            .and(&prev)
            .for_each(|tau, c, p| {
                let dphi = (c.arg() - p.arg()).rem_euclid(2.0 * PI);
                *tau = dphi / domega;
            });
    }

    let second = gd.index_axis(Axis(0), 1).to_owned();
    gd.index_axis_mut(Axis(0), 0).assign(&second);

    Ok(gd)
}
