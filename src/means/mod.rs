//! Location statistics for streaming data
//!
//! Each family has a weighted base accumulator and an unweighted one that
//! wraps it with unit weights, so both always agree on equal-weight data.
//!
//! # Accumulators
//!
//! - [`Mean`] / [`WeightedMean`]: arithmetic mean
//! - [`GeometricMean`] / [`WeightedGeometricMean`]: geometric mean
//! - [`HarmonicMean`] / [`WeightedHarmonicMean`]: harmonic mean
//!
//! # Example
//!
//! ```
//! use meanflow::means::{Mean, WeightedMean};
//! use meanflow::traits::Accumulator;
//!
//! let mut mean = Mean::new();
//! let mut weighted = WeightedMean::new();
//!
//! for (x, w) in [(1.0, 1.0), (2.0, 1.0), (3.0, 2.0)] {
//!     mean.update(x);
//!     weighted.update((x, w));
//! }
//!
//! println!("Mean: {}", mean.value());
//! println!("Weighted mean: {}", weighted.value());
//! ```

mod arithmetic;
mod geometric;
mod harmonic;

pub use arithmetic::{Mean, WeightedMean};
pub use geometric::{GeometricMean, WeightedGeometricMean};
pub use harmonic::{HarmonicMean, WeightedHarmonicMean};
