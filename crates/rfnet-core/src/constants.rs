//! Numerical constants for network calculations
//!
//! Provides tolerance values and fixed conventions shared by the codec and
//! the parameter converters.

/// Relative tolerance for detecting singular 2x2 matrices.
/// A determinant at or below `NEAR_ZERO * max|m_ij|²` is treated as zero.
pub const NEAR_ZERO: f64 = 1e-15;

/// Default reference impedance in Ohm.
pub const DEFAULT_Z0: f64 = 50.0;

/// Number of column pairs emitted on one physical line before wrapping.
pub const PAIRS_PER_LINE: usize = 4;

/// Port count from which header labels switch from `ij` to `[i,j]`.
pub const BRACKET_LABEL_PORTS: usize = 9;
