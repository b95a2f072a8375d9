//! Touchstone file I/O module
//!
//! Provides reading and writing of Touchstone (.sNp) files.
//!
//! [`load`] and [`write`] are the path-based entry points; [`Touchstone`]
//! is the in-memory document they go through.

pub mod options;
pub mod parser;
pub mod writer;

use ndarray::{Array3, Axis};
use num_complex::Complex64;
use std::path::Path;

pub use options::{DataFormat, OptionLine, ParameterType, WriteOptions};

use crate::error::{NetworkError, Result};
use crate::frequency::Frequency;

/// Touchstone document: option line header plus the decoded data block
#[derive(Debug, Clone)]
pub struct Touchstone {
    /// Number of ports
    pub nports: usize,
    /// Header state from the option line
    pub options: OptionLine,
    /// Frequency samples in Hz
    pub frequency: Frequency,
    /// Parameter data [nfreq, nports, nports]
    pub data: Array3<Complex64>,
}

impl Touchstone {
    /// Build a document for writing
    ///
    /// Fails with a dimension error when the matrices are not square or
    /// the series and frequency lengths differ.
    pub fn new(data: Array3<Complex64>, frequency: Frequency, options: OptionLine) -> Result<Self> {
        let shape = data.shape();
        if shape[1] != shape[2] {
            return Err(NetworkError::dimension("not a square matrix"));
        }
        if shape[1] == 0 {
            return Err(NetworkError::dimension("a network needs at least one port"));
        }
        if shape[0] != frequency.npoints() {
            return Err(NetworkError::dimension(
                "S and frequency must be the same vector length",
            ));
        }

        Ok(Self {
            nports: shape[1],
            options,
            frequency,
            data,
        })
    }

    /// Get the number of frequency points
    #[inline]
    pub fn nfreq(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// Split into the S-parameter series and its frequency vector
    ///
    /// The declared parameter type is not applied: the data block is
    /// returned unchanged whatever `options.param_type` says.
    pub fn into_parts(self) -> (Array3<Complex64>, Frequency) {
        (self.data, self.frequency)
    }
}

/// Matrix entry order of one data row
///
/// 2-port files list (1,1), (2,1), (1,2), (2,2); all others are row-major.
pub(crate) fn entry_order(nports: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..nports).flat_map(move |a| {
        (0..nports).map(move |b| if nports == 2 { (b, a) } else { (a, b) })
    })
}

/// Load a `.sNp` file as an S-parameter series and its frequency vector
pub fn load<P: AsRef<Path>>(path: P) -> Result<(Array3<Complex64>, Frequency)> {
    Touchstone::from_file(path).map(Touchstone::into_parts)
}

/// Write an S-parameter series to a `.sNp` file, replacing any existing file
pub fn write<P: AsRef<Path>>(
    data: &Array3<Complex64>,
    frequency: &Frequency,
    path: P,
    options: &WriteOptions,
) -> Result<()> {
    Touchstone::new(data.clone(), frequency.clone(), *options)?.write(path)
}
