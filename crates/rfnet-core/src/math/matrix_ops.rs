//! Matrix operation helpers
//!
//! Shape checks, small closed-form kernels and the per-frequency mapping
//! that lifts a single-matrix conversion onto a whole series.

use ndarray::{Array1, Array2, Array3, Axis};
use num_complex::Complex64;

use crate::constants::NEAR_ZERO;
use crate::error::{NetworkError, Result};

/// Check that `m` is square and return its port count
#[inline]
pub fn ensure_square(m: &Array2<Complex64>) -> Result<usize> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(NetworkError::dimension("not a square matrix"));
    }
    Ok(rows)
}

/// Check that `m` is a square 2x2 matrix
#[inline]
pub fn ensure_two_port(m: &Array2<Complex64>) -> Result<()> {
    if ensure_square(m)? != 2 {
        return Err(NetworkError::dimension("must be a 2x2 matrix"));
    }
    Ok(())
}

/// Create a diagonal matrix from a slice of values
#[inline]
pub fn diag_matrix(values: &[Complex64]) -> Array2<Complex64> {
    let n = values.len();
    let mut m = Array2::<Complex64>::zeros((n, n));
    for (i, v) in values.iter().enumerate() {
        m[[i, i]] = *v;
    }
    m
}

/// Determinant of a 2x2 complex matrix
#[inline]
pub fn det_2x2(m: &Array2<Complex64>) -> Complex64 {
    m[[0, 0]] * m[[1, 1]] - m[[0, 1]] * m[[1, 0]]
}

/// Invert a 2x2 complex matrix
///
/// Returns None if the matrix is singular: the determinant is negligible
/// relative to the squared magnitude of the largest entry, or the result
/// is not finite.
#[inline]
pub fn invert_2x2(m: &Array2<Complex64>) -> Option<Array2<Complex64>> {
    if m.shape() != [2, 2] {
        return None;
    }

    let scale = m.iter().map(|c| c.norm()).fold(0.0_f64, f64::max);
    let det = det_2x2(m);
    if scale == 0.0 || det.norm() <= NEAR_ZERO * scale * scale {
        return None;
    }

    let inv_det = Complex64::new(1.0, 0.0) / det;
    let mut result = Array2::<Complex64>::zeros((2, 2));
    result[[0, 0]] = m[[1, 1]] * inv_det;
    result[[0, 1]] = -m[[0, 1]] * inv_det;
    result[[1, 0]] = -m[[1, 0]] * inv_det;
    result[[1, 1]] = m[[0, 0]] * inv_det;

    let finite = result.iter().all(|c| c.re.is_finite() && c.im.is_finite());
    finite.then_some(result)
}

/// Extract the matrix at a single frequency index
#[inline]
pub fn extract_freq_slice(s: &Array3<Complex64>, f: usize) -> Array2<Complex64> {
    s.index_axis(Axis(0), f).to_owned()
}

fn ensure_square_series(series: &Array3<Complex64>) -> Result<()> {
    let shape = series.shape();
    if shape[1] != shape[2] {
        return Err(NetworkError::dimension("not a square matrix"));
    }
    Ok(())
}

/// Apply a per-matrix conversion independently at every frequency sample
///
/// `result[k] = op(series[k])`; the first failing sample aborts the whole
/// series and no partial result is returned.
pub fn map_series<F>(series: &Array3<Complex64>, op: F) -> Result<Array3<Complex64>>
where
    F: Fn(&Array2<Complex64>) -> Result<Array2<Complex64>>,
{
    ensure_square_series(series)?;
    let mut result = Array3::<Complex64>::zeros(series.raw_dim());

    for k in 0..series.len_of(Axis(0)) {
        let converted = op(&extract_freq_slice(series, k))?;
        result.index_axis_mut(Axis(0), k).assign(&converted);
    }

    Ok(result)
}

/// Reduce every matrix of a series to one real value
pub fn map_series_scalar<F>(series: &Array3<Complex64>, op: F) -> Result<Array1<f64>>
where
    F: Fn(&Array2<Complex64>) -> Result<f64>,
{
    ensure_square_series(series)?;
    series
        .outer_iter()
        .map(|matrix| op(&matrix.to_owned()))
        .collect::<Result<Vec<f64>>>()
        .map(Array1::from_vec)
}
