//! Touchstone file writer
//!
//! Layout: option line, a commented column header, then one data row per
//! frequency. Headers and rows wrap after four column pairs.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{entry_order, Touchstone};
use crate::constants::{BRACKET_LABEL_PORTS, PAIRS_PER_LINE};
use crate::error::Result;

impl fmt::Display for Touchstone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.write_to(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

impl Touchstone {
    /// Write to a Touchstone file
    ///
    /// The file is truncated first; a failure part way leaves it incomplete.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        self.write_to(&mut writer)?;
        writer.flush()?;
        log::debug!(
            "wrote {}: {} ports, {} frequency points",
            path.display(),
            self.nports,
            self.nfreq()
        );
        Ok(())
    }

    /// Write to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let opts = &self.options;
        let order: Vec<_> = entry_order(self.nports).collect();
        let last = order.len().saturating_sub(1);

        writeln!(writer, "{opts}")?;

        // Column header comment
        let (prefix_a, prefix_b) = opts.format.label_prefixes();
        write!(writer, "{:<12}", format!("! FREQ({})", opts.unit))?;
        for (m, &(i, j)) in order.iter().enumerate() {
            let suffix = if self.nports < BRACKET_LABEL_PORTS {
                format!("{}{}", i + 1, j + 1)
            } else {
                format!("[{},{}]", i + 1, j + 1)
            };
            write!(writer, "  {:<12}", format!("{prefix_a}{}{suffix}", opts.param_type))?;
            write!(writer, "  {:<12}", format!("{prefix_b}{}{suffix}", opts.param_type))?;
            if m == last {
                writeln!(writer)?;
            } else if (m + 1) % PAIRS_PER_LINE == 0 {
                write!(writer, "\n{:<12}", "!")?;
            }
        }

        // Data rows
        let f_scaled = self.frequency.f_scaled(opts.unit);
        for (k, freq) in f_scaled.iter().enumerate() {
            write!(writer, "{}", sci(*freq))?;
            for (m, &(i, j)) in order.iter().enumerate() {
                let (a, b) = opts.format.encode(self.data[[k, i, j]]);
                write!(writer, " {:>13} {:>13}", sci(a), sci(b))?;
                if m == last {
                    writeln!(writer)?;
                } else if (m + 1) % PAIRS_PER_LINE == 0 {
                    write!(writer, "\n{:<12}", "")?;
                }
            }
        }

        Ok(())
    }
}

/// Scientific notation with 6 fractional digits and a signed, two-digit
/// exponent (`1.000000e+09`, `-2.500000e-01`)
fn sci(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let raw = format!("{x:.6e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => raw,
    }
}
