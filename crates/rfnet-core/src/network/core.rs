//! Core Network struct and constructors

use ndarray::{Array3, Axis};
use num_complex::Complex64;
use std::path::Path;

use crate::error::{NetworkError, Result};
use crate::frequency::Frequency;
use crate::touchstone::Touchstone;

/// An N-port network loaded from a Touchstone file
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) frequency: Frequency,
    /// S-parameter data [nfreq, nports, nports]
    pub(crate) s: Array3<Complex64>,
    pub(crate) name: String,
}

impl Network {
    /// Create a new Network from S-parameters
    pub fn new(frequency: Frequency, s: Array3<Complex64>, name: impl Into<String>) -> Result<Self> {
        let shape = s.shape();
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
            frequency,
            s,
            name: name.into(),
        })
    }

    /// Create from a Touchstone file
    ///
    /// The network is named after the file. A file that decodes to zero
    /// frequency rows is rejected with a data error.
    pub fn from_touchstone<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ts = Touchstone::from_file(path)?;
        if ts.nfreq() == 0 {
            return Err(NetworkError::data("no data was loaded"));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (s, frequency) = ts.into_parts();
        Self::new(frequency, s, name)
    }

    /// Get S-parameters
    pub fn s(&self) -> &Array3<Complex64> {
        &self.s
    }

    /// Get frequency object
    pub fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    /// Get frequency vector in Hz
    pub fn f(&self) -> &[f64] {
        self.frequency.f()
    }

    /// Display name (the source file name for loaded networks)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of ports
    #[inline]
    pub fn nports(&self) -> usize {
        self.s.len_of(Axis(1))
    }

    /// Get the number of frequency points
    #[inline]
    pub fn nfreq(&self) -> usize {
        self.s.len_of(Axis(0))
    }
}
