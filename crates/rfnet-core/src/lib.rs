//! rfnet-core: RF network-parameter engine
//!
//! Reads and writes Touchstone (.sNp) files and converts between network
//! parameter representations.
//!
//! ## Modules
//!
//! - `frequency` - Frequency vector and units
//! - `math` - Complex encodings, S/T/Z/Y/H/ABCD transforms, stability, gain, group delay
//! - `touchstone` - Touchstone file I/O
//! - `network` - Loaded network with derived parameter sets
//!
//! ## Example
//!
//! ```
//! use rfnet_core::math::{s2z, z2s, ReferenceImpedance};
//! use ndarray::array;
//! use num_complex::Complex64;
//!
//! let s = array![
//!     [Complex64::new(0.1, 0.0), Complex64::new(0.8, 0.0)],
//!     [Complex64::new(0.8, 0.0), Complex64::new(0.1, 0.0)],
//! ];
//! let zref = ReferenceImpedance::default();
//! let z = s2z(&s, &zref).unwrap();
//! let back = z2s(&z, &zref).unwrap();
//! assert!((back[[1, 0]] - s[[1, 0]]).norm() < 1e-12);
//! ```

pub mod constants;
pub mod error;
pub mod frequency;
pub mod math;
pub mod network;
pub mod touchstone;

pub use error::{NetworkError, Result};
pub use frequency::{Frequency, FrequencyUnit};
pub use network::{Network, ParamKind, Trace};
pub use touchstone::{load, write, Touchstone, WriteOptions};
