//! Mathematical functions module
//!
//! Complex encodings, small linear algebra, network parameter transforms
//! and derived 2-port figures of merit.

pub mod conversions;
pub mod linalg;
pub mod matrix_ops;
pub mod metrics;
pub mod transforms;

pub use conversions::*;
pub use metrics::*;
pub use transforms::*;
