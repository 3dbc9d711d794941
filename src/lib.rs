//! `hllpp` is a Rust crate estimating the number of distinct elements in a stream or dataset
//! using HyperLogLog++.
//!
//! Small cardinalities are tracked in a sparse representation which stays close to exact,
//! large ones in `2^P` packed 6-bit registers corrected with per-precision empirical bias
//! data. Counters of the same precision can be merged, which makes the library suitable for
//! counting over partitioned or distributed data.
//!
//! ```
//! use hllpp::HyperLogLogPlus;
//!
//! let mut counter = HyperLogLogPlus::new(14)?;
//! counter.insert("apple");
//! counter.insert("banana");
//! counter.insert("apple");
//! assert_eq!(counter.estimate()?, 2);
//! # Ok::<(), hllpp::Error>(())
//! ```
mod bias;
mod bias_data;
pub mod bits;
mod counter;
mod dense;
mod encoding;
mod error;
pub mod estimate;
mod representation;
#[cfg(feature = "with_serde")]
mod serde;
mod sparse;

pub use bias::{linear_counting_threshold, BiasCorrectionTable, LINEAR_COUNTING_THRESHOLDS};
pub use counter::{HyperLogLogPlus, State};
pub use encoding::{SparseCodec, MAX_PRECISION, MIN_PRECISION, SPARSE_PRECISION};
pub use error::{Error, Result};
pub use representation::Mode;
