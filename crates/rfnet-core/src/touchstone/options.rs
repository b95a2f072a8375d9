//! Touchstone option line
//!
//! `# <FREQ_UNIT> <PARAM_TYPE> <DATA_FORMAT> R <impedance>`

use num_complex::Complex64;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::constants::DEFAULT_Z0;
use crate::error::{NetworkError, Result};
use crate::frequency::FrequencyUnit;
use crate::math::conversions::{
    complex_2_db, complex_2_degree, complex_2_magnitude, dbdeg_2_reim, magdeg_2_reim,
};

/// Data pair encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    /// Magnitude-Angle (degrees)
    MA,
    /// dB-Angle (degrees)
    DB,
    /// Real-Imaginary
    #[default]
    RI,
}

impl DataFormat {
    pub fn keyword(&self) -> &'static str {
        match self {
            DataFormat::MA => "MA",
            DataFormat::DB => "DB",
            DataFormat::RI => "RI",
        }
    }

    /// Column label prefixes used in the written header comment
    pub fn label_prefixes(&self) -> (&'static str, &'static str) {
        match self {
            DataFormat::MA => ("mag", "ang"),
            DataFormat::DB => ("db", "ang"),
            DataFormat::RI => ("re", "im"),
        }
    }

    /// Rebuild a complex value from one data pair
    pub fn decode(&self, a: f64, b: f64) -> Complex64 {
        match self {
            DataFormat::MA => magdeg_2_reim(a, b),
            DataFormat::DB => dbdeg_2_reim(a, b),
            DataFormat::RI => Complex64::new(a, b),
        }
    }

    /// Split a complex value into one data pair
    pub fn encode(&self, c: Complex64) -> (f64, f64) {
        match self {
            DataFormat::MA => (complex_2_magnitude(c), complex_2_degree(c)),
            DataFormat::DB => (complex_2_db(c), complex_2_degree(c)),
            DataFormat::RI => (c.re, c.im),
        }
    }
}

impl FromStr for DataFormat {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "MA" => Ok(DataFormat::MA),
            "DB" => Ok(DataFormat::DB),
            "RI" => Ok(DataFormat::RI),
            _ => Err(NetworkError::format(format!("unknown data format: {s}"))),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Network parameter type declared on the option line
///
/// The loader records this but always returns the data block as-is,
/// tagged as S-parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterType {
    #[default]
    S,
    Y,
    Z,
    G,
    H,
}

impl ParameterType {
    pub fn keyword(&self) -> &'static str {
        match self {
            ParameterType::S => "S",
            ParameterType::Y => "Y",
            ParameterType::Z => "Z",
            ParameterType::G => "G",
            ParameterType::H => "H",
        }
    }
}

impl FromStr for ParameterType {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "S" => Ok(ParameterType::S),
            "Y" => Ok(ParameterType::Y),
            "Z" => Ok(ParameterType::Z),
            "G" => Ok(ParameterType::G),
            "H" => Ok(ParameterType::H),
            _ => Err(NetworkError::format(format!("unknown parameter type: {s}"))),
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

fn option_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^#\s+(HZ|KHZ|MHZ|GHZ)\s+(S|Y|Z|G|H)\s+(MA|DB|RI)\s+R\s+[+-]?([0-9]*[.])?[0-9]+",
        )
        .expect("option line pattern is a valid regex")
    })
}

/// Parsed option line; also the set of knobs used when writing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionLine {
    pub unit: FrequencyUnit,
    pub param_type: ParameterType,
    pub format: DataFormat,
    /// Reference impedance in Ohm
    pub z0: f64,
}

/// Options accepted by the writer; identical to what the option line carries.
pub type WriteOptions = OptionLine;

impl Default for OptionLine {
    fn default() -> Self {
        Self {
            unit: FrequencyUnit::Hz,
            param_type: ParameterType::S,
            format: DataFormat::RI,
            z0: DEFAULT_Z0,
        }
    }
}

impl OptionLine {
    pub fn with_unit(mut self, unit: FrequencyUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_param_type(mut self, param_type: ParameterType) -> Self {
        self.param_type = param_type;
        self
    }

    pub fn with_format(mut self, format: DataFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_z0(mut self, z0: f64) -> Self {
        self.z0 = z0;
        self
    }

    /// Parse an option line
    ///
    /// Matching is case-insensitive. Returns `Ok(None)` for a `#` line that
    /// does not follow the grammar; such lines are not an error.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim().to_uppercase();
        if !option_line_regex().is_match(&line) {
            return Ok(None);
        }

        // Regex guarantees at least six whitespace separated words
        let words: Vec<&str> = line.split_whitespace().collect();
        let z0 = words[5].parse::<f64>().map_err(|_| {
            NetworkError::format(format!("invalid reference impedance: {}", words[5]))
        })?;

        Ok(Some(Self {
            unit: words[1].parse()?,
            param_type: words[2].parse()?,
            format: words[3].parse()?,
            z0,
        }))
    }
}

impl fmt::Display for OptionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "# {} {} {} R {:.6}",
            self.unit, self.param_type, self.format, self.z0
        )
    }
}
