//! Derived parameter sets and per-entry traces
//!
//! Every derived set is computed from S with a uniform 50 Ω reference.

use ndarray::{Array1, Array3, Axis};
use num_complex::Complex64;
use std::fmt;

use super::core::Network;
use crate::error::{NetworkError, Result};
use crate::math::metrics::{group_delay, max_gain_series, stability_factor_series};
use crate::math::transforms::{s2z_series, z2a_series, z2h_series, z2y_series, ReferenceImpedance};

/// Parameter sets a network can be viewed as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    S,
    Z,
    Y,
    H,
    ABCD,
    GroupDelay,
    StabilityFactor,
    MaxGain,
}

impl ParamKind {
    pub const ALL: [ParamKind; 8] = [
        ParamKind::S,
        ParamKind::Z,
        ParamKind::Y,
        ParamKind::H,
        ParamKind::ABCD,
        ParamKind::GroupDelay,
        ParamKind::StabilityFactor,
        ParamKind::MaxGain,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ParamKind::S => "S Parameter",
            ParamKind::Z => "Z Parameter",
            ParamKind::Y => "Y Parameter",
            ParamKind::H => "H Parameter",
            ParamKind::ABCD => "ABCD Parameter",
            ParamKind::GroupDelay => "Group Delay",
            ParamKind::StabilityFactor => "Stability Factor",
            ParamKind::MaxGain => "Maximum Gain",
        }
    }

    /// True for kinds defined only on 2-port networks
    pub fn two_port_only(&self) -> bool {
        matches!(
            self,
            ParamKind::H | ParamKind::ABCD | ParamKind::StabilityFactor | ParamKind::MaxGain
        )
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One parameter entry across frequency
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    Complex(Vec<Complex64>),
    Real(Vec<f64>),
}

impl Trace {
    pub fn len(&self) -> usize {
        match self {
            Trace::Complex(v) => v.len(),
            Trace::Real(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Network {
    fn reference(&self) -> ReferenceImpedance {
        ReferenceImpedance::default()
    }

    /// Get Z-parameters (impedance)
    pub fn z(&self) -> Result<Array3<Complex64>> {
        s2z_series(&self.s, &self.reference())
    }

    /// Get Y-parameters (admittance), via Z
    pub fn y(&self) -> Result<Array3<Complex64>> {
        z2y_series(&self.z()?)
    }

    /// Get H-parameters (hybrid); 2-port only
    pub fn h(&self) -> Result<Array3<Complex64>> {
        z2h_series(&self.z()?)
    }

    /// Get ABCD parameters (chain); 2-port only
    ///
    /// ABCD matrix organization: [[A, B], [C, D]]
    pub fn abcd(&self) -> Result<Array3<Complex64>> {
        z2a_series(&self.z()?)
    }

    /// Group delay in seconds for every entry, same shape as S
    pub fn group_delay(&self) -> Result<Array3<f64>> {
        group_delay(&self.s, self.frequency.f())
    }

    /// Rollett stability factor per frequency; 2-port only
    pub fn stability_factor(&self) -> Result<Array1<f64>> {
        stability_factor_series(&self.s)
    }

    /// Maximum gain (linear) per frequency; 2-port only
    pub fn max_gain(&self) -> Result<Array1<f64>> {
        max_gain_series(&self.s)
    }

    /// Parameter kinds defined for this network
    ///
    /// 2-port-only kinds are listed for 2-port networks; group delay needs
    /// at least two frequency points.
    pub fn available(&self) -> Vec<ParamKind> {
        ParamKind::ALL
            .into_iter()
            .filter(|kind| !kind.two_port_only() || self.nports() == 2)
            .filter(|kind| *kind != ParamKind::GroupDelay || self.nfreq() >= 2)
            .collect()
    }

    /// Compute a parameter set and report why it failed, if it did
    ///
    /// [`Network::trace`] collapses failures to `None`; this keeps the error.
    pub fn check(&self, kind: ParamKind) -> Result<()> {
        if kind.two_port_only() && self.nports() != 2 {
            return Err(NetworkError::dimension("must be a 2x2 matrix"));
        }
        match kind {
            ParamKind::S => Ok(()),
            ParamKind::Z => self.z().map(drop),
            ParamKind::Y => self.y().map(drop),
            ParamKind::H => self.h().map(drop),
            ParamKind::ABCD => self.abcd().map(drop),
            ParamKind::GroupDelay => self.group_delay().map(drop),
            ParamKind::StabilityFactor => self.stability_factor().map(drop),
            ParamKind::MaxGain => self.max_gain().map(drop),
        }
    }

    /// Entry (n, m) of a parameter set across frequency
    ///
    /// Scalar kinds (stability factor, maximum gain) ignore `n` and `m`.
    /// Returns `None` when the kind is unavailable, cannot be computed for
    /// this data, or the indices are out of range.
    pub fn trace(&self, kind: ParamKind, n: usize, m: usize) -> Option<Trace> {
        if !self.available().contains(&kind) {
            return None;
        }

        match kind {
            ParamKind::S => complex_entry(&self.s, n, m),
            ParamKind::Z => complex_entry(&self.z().ok()?, n, m),
            ParamKind::Y => complex_entry(&self.y().ok()?, n, m),
            ParamKind::H => complex_entry(&self.h().ok()?, n, m),
            ParamKind::ABCD => complex_entry(&self.abcd().ok()?, n, m),
            ParamKind::GroupDelay => {
                let gd = self.group_delay().ok()?;
                in_range(&gd, n, m).then(|| Trace::Real(gd.slice(ndarray::s![.., n, m]).to_vec()))
            }
            ParamKind::StabilityFactor => Some(Trace::Real(self.stability_factor().ok()?.to_vec())),
            ParamKind::MaxGain => Some(Trace::Real(self.max_gain().ok()?.to_vec())),
        }
    }
}

fn in_range<T>(a: &Array3<T>, n: usize, m: usize) -> bool {
    n < a.len_of(Axis(1)) && m < a.len_of(Axis(2))
}

fn complex_entry(a: &Array3<Complex64>, n: usize, m: usize) -> Option<Trace> {
    in_range(a, n, m).then(|| Trace::Complex(a.slice(ndarray::s![.., n, m]).to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::Frequency;
    use approx::assert_relative_eq;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    /// Lossy attenuator-like 2-port: S11 = S22 = 0.1, S21 = S12 = 0.5
    fn two_port(nfreq: usize) -> Network {
        let mut s = Array3::<Complex64>::zeros((nfreq, 2, 2));
        for k in 0..nfreq {
            s[[k, 0, 0]] = c(0.1, 0.0);
            s[[k, 1, 1]] = c(0.1, 0.0);
            s[[k, 0, 1]] = Complex64::from_polar(0.5, -0.1 * k as f64);
            s[[k, 1, 0]] = Complex64::from_polar(0.5, -0.1 * k as f64);
        }
        let f = (0..nfreq).map(|k| 1e9 + 1e6 * k as f64).collect();
        Network::new(Frequency::from_hz(f), s, "atten").unwrap()
    }

    #[test]
    fn test_labels() {
        assert_eq!(ParamKind::S.to_string(), "S Parameter");
        assert_eq!(ParamKind::ABCD.label(), "ABCD Parameter");
        assert_eq!(ParamKind::MaxGain.label(), "Maximum Gain");
    }

    #[test]
    fn test_available_two_port() {
        assert_eq!(two_port(3).available(), ParamKind::ALL.to_vec());
        let single = two_port(1).available();
        assert!(!single.contains(&ParamKind::GroupDelay));
        assert_eq!(single.len(), 7);
    }

    #[test]
    fn test_available_one_port() {
        let s = Array3::from_elem((2, 1, 1), c(0.2, 0.1));
        let ntwk = Network::new(Frequency::from_hz(vec![1.0, 2.0]), s, "load").unwrap();
        assert_eq!(
            ntwk.available(),
            vec![ParamKind::S, ParamKind::Z, ParamKind::Y, ParamKind::GroupDelay]
        );
        assert!(ntwk.trace(ParamKind::H, 0, 0).is_none());
        assert!(matches!(ntwk.check(ParamKind::MaxGain), Err(NetworkError::Dimension(_))));
        // Z = 50 (1 + Γ) / (1 - Γ)
        let Some(Trace::Complex(z)) = ntwk.trace(ParamKind::Z, 0, 0) else {
            panic!("expected complex trace");
        };
        let expected = 50.0 * (c(1.2, 0.1) / c(0.8, -0.1));
        assert_relative_eq!(z[0].re, expected.re, epsilon = 1e-9);
        assert_relative_eq!(z[0].im, expected.im, epsilon = 1e-9);
    }

    #[test]
    fn test_trace_entries() {
        let ntwk = two_port(3);
        let Some(Trace::Complex(s21)) = ntwk.trace(ParamKind::S, 1, 0) else {
            panic!("expected complex trace");
        };
        assert_eq!(s21.len(), 3);
        assert_eq!(s21[0], c(0.5, 0.0));

        assert!(ntwk.trace(ParamKind::S, 2, 0).is_none());
        assert!(ntwk.trace(ParamKind::GroupDelay, 0, 2).is_none());

        let Some(Trace::Real(k)) = ntwk.trace(ParamKind::StabilityFactor, 7, 7) else {
            panic!("expected real trace");
        };
        assert_eq!(k.len(), 3);

        let Some(Trace::Real(gd)) = ntwk.trace(ParamKind::GroupDelay, 1, 0) else {
            panic!("expected real trace");
        };
        // -0.1 rad per 1 MHz wraps to 2π - 0.1
        let expected = (2.0 * std::f64::consts::PI - 0.1) / (2.0 * std::f64::consts::PI * 1e6);
        assert_relative_eq!(gd[1], expected, epsilon = 1e-15);
        assert_eq!(gd[0], gd[1]);
    }

    #[test]
    fn test_derived_sets_consistent() {
        let ntwk = two_port(2);
        let z = ntwk.z().unwrap();
        let y = ntwk.y().unwrap();
        let a = ntwk.abcd().unwrap();
        let h = ntwk.h().unwrap();

        // Z * Y = I
        let zy = z.index_axis(Axis(0), 0).dot(&y.index_axis(Axis(0), 0));
        assert_relative_eq!(zy[[0, 0]].re, 1.0, epsilon = 1e-9);
        assert!(zy[[0, 1]].norm() < 1e-9);

        // A = Z11 / Z21, H11 = det(Z) / Z22
        let z0 = z.index_axis(Axis(0), 0);
        let a11 = z0[[0, 0]] / z0[[1, 0]];
        assert_relative_eq!(a[[0, 0, 0]].re, a11.re, epsilon = 1e-9);
        let det = z0[[0, 0]] * z0[[1, 1]] - z0[[0, 1]] * z0[[1, 0]];
        assert_relative_eq!(h[[0, 0, 0]].re, (det / z0[[1, 1]]).re, epsilon = 1e-9);
    }
}
