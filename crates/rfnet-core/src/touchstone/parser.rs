//! Touchstone file parser
//!
//! Reads `.sNp` files: `!` comments are stripped, the first valid option
//! line fixes unit and data format, and every other line contributes
//! whitespace separated numbers to one flat stream that is reshaped into
//! rows of `2 * N² + 1` values.

use ndarray::Array3;
use num_complex::Complex64;
use regex::{Regex, RegexBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use super::options::OptionLine;
use super::{entry_order, Touchstone};
use crate::error::{NetworkError, Result};
use crate::frequency::Frequency;

impl Touchstone {
    /// Parse a Touchstone file; the port count comes from the `.sNp` extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| NetworkError::format("invalid file extension"))?;
        let nports = Self::parse_extension(ext)?;

        let file = File::open(path)?;
        let ts = Self::parse(BufReader::new(file), nports)?;
        log::debug!(
            "loaded {}: {} ports, {} frequency points",
            path.display(),
            ts.nports,
            ts.nfreq()
        );
        Ok(ts)
    }

    /// Parse from string content
    ///
    /// # Arguments
    /// * `content` - Touchstone file content as string
    /// * `nports` - Number of ports (normally taken from the file extension)
    ///
    /// # Example
    /// ```
    /// use rfnet_core::touchstone::Touchstone;
    /// let content = "# GHz S RI R 50\n1.0 0.1 0.0 0.9 0.0 0.9 0.0 0.1 0.0";
    /// let ts = Touchstone::from_str(content, 2).unwrap();
    /// assert_eq!(ts.nfreq(), 1);
    /// ```
    pub fn from_str(content: &str, nports: usize) -> Result<Self> {
        Self::parse(std::io::Cursor::new(content), nports)
    }

    /// Parse extension (without the dot) to get number of ports
    pub fn parse_extension(ext: &str) -> Result<usize> {
        extension_regex()
            .captures(ext)
            .and_then(|caps| caps[1].parse::<usize>().ok())
            .ok_or_else(|| NetworkError::format("invalid file extension"))
    }

    fn parse<R: BufRead>(reader: R, nports: usize) -> Result<Self> {
        let mut state = ParserState::new(nports)?;

        for (idx, line_result) in reader.lines().enumerate() {
            state.parse_line(&line_result?, idx + 1)?;
        }

        state.finalize()
    }
}

fn extension_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(r"^s([1-9][0-9]*)p$")
            .case_insensitive(true)
            .build()
            .expect("extension pattern is a valid regex")
    })
}

/// `2 * N² + 1`, bounded so an `[rows, N, N]` array shape stays addressable
fn row_width(nports: usize) -> Result<usize> {
    nports
        .checked_mul(nports)
        .and_then(|n2| n2.checked_mul(2))
        .and_then(|w| w.checked_add(1))
        .filter(|&w| w <= isize::MAX as usize)
        .ok_or_else(|| NetworkError::format(format!("port count {nports} is too large")))
}

/// Internal parser state
struct ParserState {
    nports: usize,
    /// Values per logical row: frequency plus 2 * N² components
    row_width: usize,
    /// Set by the first valid option line
    options: Option<OptionLine>,
    values: Vec<f64>,
}

impl ParserState {
    fn new(nports: usize) -> Result<Self> {
        Ok(Self {
            nports,
            row_width: row_width(nports)?,
            options: None,
            values: Vec::new(),
        })
    }

    fn parse_line(&mut self, raw: &str, line_no: usize) -> Result<()> {
        let content = match raw.find('!') {
            Some(idx) => &raw[..idx],
            None => raw,
        };
        let line = content.trim().to_uppercase();
        if line.is_empty() {
            return Ok(());
        }

        if line.starts_with('#') {
            return self.parse_option_line(&line, line_no);
        }

        for token in line.split_whitespace() {
            let val = token.parse::<f64>().map_err(|_| {
                NetworkError::format(format!("line {line_no}: invalid number '{token}'"))
            })?;
            self.values.push(val);
        }
        Ok(())
    }

    fn parse_option_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        match OptionLine::parse(line)? {
            None => log::debug!("line {line_no}: ignoring unrecognized option line"),
            Some(opts) if self.options.is_none() => {
                log::debug!("line {line_no}: option line {opts}");
                self.options = Some(opts);
            }
            Some(_) => log::warn!("line {line_no}: ignoring additional option line"),
        }
        Ok(())
    }

    fn finalize(self) -> Result<Touchstone> {
        let options = self
            .options
            .ok_or_else(|| NetworkError::format("option line not found"))?;

        let nports = self.nports;
        let row_width = self.row_width;
        let nrows = self.values.len() / row_width;
        let remainder = self.values.len() % row_width;
        if remainder != 0 {
            log::warn!("dropping {remainder} trailing values that do not fill a row of {row_width}");
        }

        let mult = options.unit.multiplier();
        let mut data = Array3::<Complex64>::zeros((nrows, nports, nports));
        let mut freq = Vec::with_capacity(nrows);

        for (k, row) in self.values.chunks_exact(row_width).enumerate() {
            freq.push(row[0] * mult);
            for (m, (i, j)) in entry_order(nports).enumerate() {
                data[[k, i, j]] = options.format.decode(row[1 + 2 * m], row[2 + 2 * m]);
            }
        }

        Ok(Touchstone {
            nports,
            options,
            frequency: Frequency::from_hz(freq),
            data,
        })
    }
}
