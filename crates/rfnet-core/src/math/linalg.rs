//! Linear algebra operations
//!
//! Thin wrapper over nalgebra so that callers work purely with ndarray.
//! All ndarray <-> nalgebra conversions are contained here.

use nalgebra::DMatrix;
use ndarray::Array2;
use num_complex::Complex64;

use super::matrix_ops::invert_2x2;

// ============================================================================
// Conversion helpers (internal)
// ============================================================================

/// Convert ndarray Array2<Complex64> to nalgebra DMatrix<Complex<f64>>
#[inline]
fn to_na_complex(a: &Array2<Complex64>) -> DMatrix<nalgebra::Complex<f64>> {
    let (m, n) = a.dim();
    DMatrix::from_fn(m, n, |i, j| {
        nalgebra::Complex::new(a[[i, j]].re, a[[i, j]].im)
    })
}

/// Convert nalgebra DMatrix<Complex<f64>> to ndarray Array2<Complex64>
#[inline]
fn from_na_complex(m: &DMatrix<nalgebra::Complex<f64>>) -> Array2<Complex64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| {
        Complex64::new(m[(i, j)].re, m[(i, j)].im)
    })
}

// ============================================================================
// Matrix inversion
// ============================================================================

/// Invert a complex matrix
///
/// Returns None if the matrix is singular, non-square or empty.
pub fn inv_complex(a: &Array2<Complex64>) -> Option<Array2<Complex64>> {
    let (m, n) = a.dim();
    if m != n || m == 0 {
        return None;
    }
    if m == 2 {
        return invert_2x2(a);
    }

    let inv = to_na_complex(a).try_inverse().map(|inv| from_na_complex(&inv))?;
    let finite = inv.iter().all(|c| c.re.is_finite() && c.im.is_finite());
    finite.then_some(inv)
}
