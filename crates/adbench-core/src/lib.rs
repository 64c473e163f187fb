//! # Function objects for differentiation benchmarks
//!
//! Defines the protocol every benchmark algorithm and every differentiation adapter implements:
//! configuration through [`Options`], fixed argument and result sizes, and repeated evaluation.
pub mod error;
pub mod fun;
pub mod option;

pub use error::{check_dimension, ConfigurationError, Error, Result};
pub use fun::{FunObj, Scalar};
pub use option::Options;
