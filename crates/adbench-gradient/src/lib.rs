//! # Gradient adapters
//!
//! Decorators that wrap a [`FunObj`](adbench_core::FunObj) and expose the gradient of its last
//! output as another function object, with the same setup and evaluation protocol.
pub mod dual;
pub mod finite_diff;
pub mod forward;

pub use dual::Dual;
pub use finite_diff::CentralDifference;
pub use forward::ForwardGradient;
