//! Dispersion statistics for streaming data
//!
//! Variance and standard deviation in population or sample form, weighted
//! and unweighted, computed in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use meanflow::dispersion::{StandardDeviation, Variance};
//! use meanflow::traits::{Accumulator, DataKind};
//!
//! let mut variance = Variance::new(DataKind::Sample);
//! let mut stddev = StandardDeviation::new(DataKind::Sample);
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     variance.update(value);
//!     stddev.update(value);
//! }
//!
//! println!("Variance: {}", variance.value());
//! println!("Stddev: {}", stddev.value());
//! ```

mod deviation;
mod variance;

pub use deviation::{StandardDeviation, WeightedStandardDeviation};
pub use variance::{Variance, WeightedVariance};
