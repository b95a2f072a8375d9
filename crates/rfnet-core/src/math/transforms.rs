//! Network parameter transformation functions
//!
//! Provides conversions between S, T, Z, Y, H and ABCD parameters.
//!
//! Every transform exists in two forms: one acting on a single N x N matrix
//! and a `*_series` variant acting on a `[nfreq, nports, nports]` array. The
//! series form applies the matrix form independently at each frequency
//! sample, so results keep the input's frequency order.
//!
//! S <-> Z, Z -> Y and Y -> Z accept any port count. S <-> T, Z <-> H and
//! Z <-> ABCD use closed-form 2-port formulas and reject other sizes.

use ndarray::{array, Array1, Array2, Array3};
use num_complex::Complex64;

use super::linalg::inv_complex;
use super::matrix_ops::{det_2x2, diag_matrix, ensure_square, ensure_two_port, map_series};
use crate::constants::DEFAULT_Z0;
use crate::error::{NetworkError, Result};

const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Reference impedance for S <-> Z conversions
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceImpedance {
    /// Same impedance on every port
    Uniform(Complex64),
    /// One impedance per port; length must equal the port count
    PerPort(Vec<Complex64>),
}

impl ReferenceImpedance {
    /// Expand to one value per port
    pub fn resolve(&self, nports: usize) -> Result<Array1<Complex64>> {
        match self {
            ReferenceImpedance::Uniform(z) => Ok(Array1::from_elem(nports, *z)),
            ReferenceImpedance::PerPort(zs) if zs.len() == nports => {
                Ok(Array1::from_vec(zs.clone()))
            }
            ReferenceImpedance::PerPort(_) => Err(NetworkError::dimension(
                "zref vector length must be equal to the number of ports",
            )),
        }
    }
}

impl Default for ReferenceImpedance {
    fn default() -> Self {
        ReferenceImpedance::Uniform(Complex64::new(DEFAULT_Z0, 0.0))
    }
}

impl From<f64> for ReferenceImpedance {
    fn from(z: f64) -> Self {
        ReferenceImpedance::Uniform(Complex64::new(z, 0.0))
    }
}

impl From<Complex64> for ReferenceImpedance {
    fn from(z: Complex64) -> Self {
        ReferenceImpedance::Uniform(z)
    }
}

impl From<Vec<Complex64>> for ReferenceImpedance {
    fn from(zs: Vec<Complex64>) -> Self {
        ReferenceImpedance::PerPort(zs)
    }
}

impl From<Vec<f64>> for ReferenceImpedance {
    fn from(zs: Vec<f64>) -> Self {
        ReferenceImpedance::PerPort(zs.into_iter().map(|z| Complex64::new(z, 0.0)).collect())
    }
}

fn singular() -> NetworkError {
    NetworkError::data("singular matrix")
}

/// Power-wave normalisation matrices `(F, F^-1, G)`
///
/// F = diag(0.5 / sqrt(|Re(zref)|)), G = diag(zref)
fn power_wave_matrices(
    zref: &Array1<Complex64>,
) -> (Array2<Complex64>, Array2<Complex64>, Array2<Complex64>) {
    let f_vals: Vec<Complex64> = zref
        .iter()
        .map(|z| Complex64::new(0.5 / z.re.abs().sqrt(), 0.0))
        .collect();
    let f_inv_vals: Vec<Complex64> = f_vals.iter().map(|f| ONE / f).collect();
    let g_vals: Vec<Complex64> = zref.to_vec();

    (
        diag_matrix(&f_vals),
        diag_matrix(&f_inv_vals),
        diag_matrix(&g_vals),
    )
}

// ============================================================================
// S <-> T
// ============================================================================

/// Convert S-parameters to T-parameters (2-port)
///
/// T = [[-det(S)/S21, S11/S21], [-S22/S21, 1/S21]]
pub fn s2t(s: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    ensure_two_port(s)?;
    let det_s = det_2x2(s);
    let s21 = s[[1, 0]];

    Ok(array![
        [-det_s / s21, s[[0, 0]] / s21],
        [-s[[1, 1]] / s21, ONE / s21]
    ])
}

/// Convert T-parameters to S-parameters (2-port)
///
/// S = [[T12/T22, det(T)/T22], [1/T22, -T21/T22]]
pub fn t2s(t: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    ensure_two_port(t)?;
    let det_t = det_2x2(t);
    let t22 = t[[1, 1]];

    Ok(array![
        [t[[0, 1]] / t22, det_t / t22],
        [ONE / t22, -t[[1, 0]] / t22]
    ])
}

// ============================================================================
// S <-> Z (N-port)
// ============================================================================

/// Convert S-parameters to Z-parameters
///
/// Formula: Z = F^-1 (I - S)^-1 (S G + G^H) F
/// where F = diag(0.5 / sqrt(|Re(zref)|)) and G = diag(zref)
pub fn s2z(s: &Array2<Complex64>, zref: &ReferenceImpedance) -> Result<Array2<Complex64>> {
    let nports = ensure_square(s)?;
    let (f_mat, inv_f_mat, g_mat) = power_wave_matrices(&zref.resolve(nports)?);
    let g_h = g_mat.t().mapv(|c| c.conj());
    let identity = Array2::<Complex64>::eye(nports);

    let inv_i_minus_s = inv_complex(&(&identity - s)).ok_or_else(singular)?;
    let term = s.dot(&g_mat) + &g_h;

    Ok(inv_f_mat.dot(&inv_i_minus_s).dot(&term).dot(&f_mat))
}

/// Convert Z-parameters to S-parameters
///
/// Formula: S = F (Z - G^H) (Z + G)^-1 F^-1
pub fn z2s(z: &Array2<Complex64>, zref: &ReferenceImpedance) -> Result<Array2<Complex64>> {
    let nports = ensure_square(z)?;
    let (f_mat, inv_f_mat, g_mat) = power_wave_matrices(&zref.resolve(nports)?);
    let g_h = g_mat.t().mapv(|c| c.conj());

    let inv_z_plus_g = inv_complex(&(z + &g_mat)).ok_or_else(singular)?;
    let z_minus_gh = z - &g_h;

    Ok(f_mat.dot(&z_minus_gh).dot(&inv_z_plus_g).dot(&inv_f_mat))
}

// ============================================================================
// Z <-> Y
// ============================================================================

/// Convert Z-parameters to Y-parameters (Y = Z^-1, any port count)
pub fn z2y(z: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    ensure_square(z)?;
    inv_complex(z).ok_or_else(singular)
}

/// Convert Y-parameters to Z-parameters
///
/// 2-port: Z = [[Y22, -Y12], [-Y21, Y11]] / det(Y).
/// Other port counts fall back to Z = Y^-1.
pub fn y2z(y: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    if ensure_square(y)? != 2 {
        return inv_complex(y).ok_or_else(singular);
    }

    let det_y = det_2x2(y);
    Ok(array![
        [y[[1, 1]] / det_y, -y[[0, 1]] / det_y],
        [-y[[1, 0]] / det_y, y[[0, 0]] / det_y]
    ])
}

// ============================================================================
// Z <-> H
// ============================================================================

/// Convert Z-parameters to H-parameters (2-port)
///
/// H = [[det(Z)/Z22, Z12/Z22], [-Z21/Z22, 1/Z22]]
pub fn z2h(z: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    ensure_two_port(z)?;
    let det_z = det_2x2(z);
    let z22 = z[[1, 1]];

    Ok(array![
        [det_z / z22, z[[0, 1]] / z22],
        [-z[[1, 0]] / z22, ONE / z22]
    ])
}

/// Convert H-parameters to Z-parameters (2-port)
///
/// Z = [[det(H)/H22, H12/H22], [-H21/H22, 1/H22]]
pub fn h2z(h: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    ensure_two_port(h)?;
    let det_h = det_2x2(h);
    let h22 = h[[1, 1]];

    Ok(array![
        [det_h / h22, h[[0, 1]] / h22],
        [-h[[1, 0]] / h22, ONE / h22]
    ])
}

// ============================================================================
// Z <-> ABCD
// ============================================================================

/// Convert Z-parameters to ABCD (chain) parameters (2-port)
///
/// ABCD = [[Z11/Z21, det(Z)/Z21], [1/Z21, Z22/Z21]]
pub fn z2a(z: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    ensure_two_port(z)?;
    let det_z = det_2x2(z);
    let z21 = z[[1, 0]];

    Ok(array![
        [z[[0, 0]] / z21, det_z / z21],
        [ONE / z21, z[[1, 1]] / z21]
    ])
}

/// Convert ABCD (chain) parameters to Z-parameters (2-port)
///
/// Z = [[A/C, det(ABCD)/C], [1/C, D/C]]
pub fn a2z(a: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    ensure_two_port(a)?;
    let det_a = det_2x2(a);
    let c = a[[1, 0]];

    Ok(array![
        [a[[0, 0]] / c, det_a / c],
        [ONE / c, a[[1, 1]] / c]
    ])
}

// ============================================================================
// Series variants: [nfreq, nports, nports]
// ============================================================================

pub fn s2t_series(s: &Array3<Complex64>) -> Result<Array3<Complex64>> {
    map_series(s, s2t)
}

pub fn t2s_series(t: &Array3<Complex64>) -> Result<Array3<Complex64>> {
    map_series(t, t2s)
}

pub fn s2z_series(s: &Array3<Complex64>, zref: &ReferenceImpedance) -> Result<Array3<Complex64>> {
    map_series(s, |m| s2z(m, zref))
}

pub fn z2s_series(z: &Array3<Complex64>, zref: &ReferenceImpedance) -> Result<Array3<Complex64>> {
    map_series(z, |m| z2s(m, zref))
}

pub fn z2y_series(z: &Array3<Complex64>) -> Result<Array3<Complex64>> {
    map_series(z, z2y)
}

pub fn y2z_series(y: &Array3<Complex64>) -> Result<Array3<Complex64>> {
    map_series(y, y2z)
}

pub fn z2h_series(z: &Array3<Complex64>) -> Result<Array3<Complex64>> {
    map_series(z, z2h)
}

pub fn h2z_series(h: &Array3<Complex64>) -> Result<Array3<Complex64>> {
    map_series(h, h2z)
}

pub fn z2a_series(z: &Array3<Complex64>) -> Result<Array3<Complex64>> {
    map_series(z, z2a)
}

pub fn a2z_series(a: &Array3<Complex64>) -> Result<Array3<Complex64>> {
    map_series(a, a2z)
}
