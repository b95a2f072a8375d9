//! Frequency module - frequency vector with a display unit
//!
//! Samples are always stored in Hz; the unit only affects how they are
//! scaled when read from or written to a Touchstone file.

use std::fmt;
use std::str::FromStr;

use crate::error::NetworkError;

/// Frequency unit accepted on a Touchstone option line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyUnit {
    #[default]
    Hz,
    KHz,
    MHz,
    GHz,
}

impl FrequencyUnit {
    /// Get the multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
        }
    }

    /// Upper-case keyword as it appears on an option line
    pub fn keyword(&self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "HZ",
            FrequencyUnit::KHz => "KHZ",
            FrequencyUnit::MHz => "MHZ",
            FrequencyUnit::GHz => "GHZ",
        }
    }
}

impl FromStr for FrequencyUnit {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HZ" => Ok(FrequencyUnit::Hz),
            "KHZ" => Ok(FrequencyUnit::KHz),
            "MHZ" => Ok(FrequencyUnit::MHz),
            "GHZ" => Ok(FrequencyUnit::GHz),
            _ => Err(NetworkError::format(format!("unknown frequency unit: {s}"))),
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Ordered frequency samples in Hz
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frequency {
    f: Vec<f64>,
}

impl Frequency {
    /// Create from samples already expressed in Hz
    pub fn from_hz(f: Vec<f64>) -> Self {
        Self { f }
    }

    /// Create from samples expressed in `unit`
    pub fn from_scaled(f: &[f64], unit: FrequencyUnit) -> Self {
        let mult = unit.multiplier();
        Self {
            f: f.iter().map(|&x| x * mult).collect(),
        }
    }

    /// Evenly spaced sweep from `start` to `stop` (inclusive), both in `unit`
    pub fn linspace(start: f64, stop: f64, npoints: usize, unit: FrequencyUnit) -> Self {
        let mult = unit.multiplier();
        let f = match npoints {
            0 => Vec::new(),
            1 => vec![start * mult],
            _ => {
                let step = (stop - start) / (npoints - 1) as f64;
                (0..npoints)
                    .map(|i| (start + i as f64 * step) * mult)
                    .collect()
            }
        };
        Self { f }
    }

    /// Get frequency vector in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Get frequency vector scaled to `unit`
    pub fn f_scaled(&self, unit: FrequencyUnit) -> Vec<f64> {
        let mult = unit.multiplier();
        self.f.iter().map(|&x| x / mult).collect()
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.f.is_empty()
    }

    /// True when samples are non-negative and strictly increasing
    pub fn is_monotonic(&self) -> bool {
        self.f.first().map_or(true, |&f0| f0 >= 0.0) && self.f.windows(2).all(|w| w[1] > w[0])
    }
}

impl From<Vec<f64>> for Frequency {
    fn from(f: Vec<f64>) -> Self {
        Self::from_hz(f)
    }
}
