//! # Benchmark algorithms
//!
//! Algorithms implementing the [`FunObj`](adbench_core::FunObj) protocol, generic over their
//! scalar type so they can be driven by any differentiation engine.
pub mod det_by_minor;
pub mod det_of_minor;
pub mod index_list;

pub use det_by_minor::DetByMinor;
pub use det_of_minor::det_of_minor;
pub use index_list::{IndexList, Unlinked};
