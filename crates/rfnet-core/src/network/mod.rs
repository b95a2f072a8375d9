//! Network module - loaded N-port network and its derived parameter sets
//!
//! A [`Network`] wraps the S-parameter series read from a Touchstone file.
//! Derived representations (Z, Y, H, ABCD, group delay, stability factor,
//! maximum gain) are computed on request with a 50 Ω reference.

mod core;
mod params;

pub use self::core::Network;
pub use params::{ParamKind, Trace};
