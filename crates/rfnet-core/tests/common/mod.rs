//! Helpers shared by the integration tests

#![allow(dead_code)]

use ndarray::{Array2, Array3};
use num_complex::Complex64;

/// Deterministic LCG so randomized checks do not depend on an RNG crate
pub struct Lcg(pub u64);

impl Lcg {
    /// Uniform in [-1, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    }

    pub fn complex(&mut self, scale: f64) -> Complex64 {
        Complex64::new(self.next_f64() * scale, self.next_f64() * scale)
    }

    /// `[nfreq, nports, nports]` series with unit-scale entries
    pub fn series(&mut self, nfreq: usize, nports: usize) -> Array3<Complex64> {
        Array3::from_shape_fn((nfreq, nports, nports), |_| self.complex(1.0))
    }

    /// S-matrix with Frobenius norm below one, so I - S is invertible
    pub fn s_matrix(&mut self, n: usize) -> Array2<Complex64> {
        let scale = 0.6 / n as f64;
        Array2::from_shape_fn((n, n), |_| self.complex(scale))
    }

    /// Diagonally dominant impedance matrix
    pub fn z_matrix(&mut self, n: usize) -> Array2<Complex64> {
        Array2::from_shape_fn((n, n), |(i, j)| {
            let offset = if i == j { 100.0 } else { 0.0 };
            Complex64::new(offset, 0.0) + self.complex(30.0)
        })
    }
}
