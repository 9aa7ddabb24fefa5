//! # Meanflow
//!
//! Single-pass accumulators for summary statistics.
//!
//! Meanflow computes means and dispersion over a sequence of values,
//! optionally paired with weights, without keeping the sequence around.
//! Several statistics can share one traversal of the data.
//!
//! ## Features
//!
//! - **Means**: arithmetic, geometric and harmonic
//! - **Dispersion**: variance and standard deviation, population or sample
//! - **Weights**: every statistic has a weighted form; the unweighted one is
//!   the weighted one with unit weights
//! - **Fused traversal**: feed one pass to many accumulators
//! - **Batch functions**: compute a statistic straight from a sequence
//!
//! ## Quick Start
//!
//! ```rust
//! use meanflow::prelude::*;
//!
//! assert_eq!(mean([1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
//! assert_eq!(weighted_mean([1.0, 2.0, 3.0], [1.0, 1.0, 2.0]), 2.25);
//! ```
//!
//! ## One Pass, Many Statistics
//!
//! ```rust
//! use meanflow::prelude::*;
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//!
//! let mut mu = Mean::<f64>::new();
//! let mut sigma = StandardDeviation::<f64>::new(DataKind::Population);
//! stats_accumulate(values, (&mut mu, &mut sigma));
//!
//! assert_eq!(mu.value(), 5.0);
//! assert_eq!(sigma.value(), 2.0);
//! ```
//!
//! ## Degenerate Input
//!
//! [`Accumulator::value`](traits::Accumulator::value) does not guard its
//! denominators: with no data, zero total weight or too few observations it
//! returns whatever the arithmetic gives (NaN or infinity for floats).
//! [`Accumulator::checked_value`](traits::Accumulator::checked_value)
//! reports those cases as a [`StatsError`](traits::StatsError) instead.
//!
//! ## Feature Flags
//!
//! Accumulator families:
//! - `means` (default): arithmetic, geometric and harmonic means
//! - `dispersion` (default): variance and standard deviation
//! - `full`: enable all families
//!
//! Platform features:
//! - `std` (default): standard library support
//! - `libm`: float math for `no_std` builds
//! - `serde`: serialize accumulator state
//! - `logging`: emit `log` records from traversals and degenerate queries

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("meanflow needs float math: enable either the `std` or the `libm` feature");

mod macros;

// Core traits always available
pub mod traits;

pub mod accumulate;
pub mod batch;

#[cfg(feature = "means")]
#[cfg_attr(docsrs, doc(cfg(feature = "means")))]
pub mod means;

#[cfg(feature = "dispersion")]
#[cfg_attr(docsrs, doc(cfg(feature = "dispersion")))]
pub mod dispersion;

pub mod prelude {
    pub use crate::accumulate::{stats_accumulate, stats_accumulate_weighted, AccumulatorSet};
    pub use crate::batch::{get_stat, get_weighted_stat};
    pub use crate::traits::*;

    #[cfg(feature = "means")]
    pub use crate::batch::{
        geometric_mean, harmonic_mean, mean, weighted_geometric_mean, weighted_harmonic_mean,
        weighted_mean,
    };
    #[cfg(feature = "means")]
    pub use crate::means::{
        GeometricMean, HarmonicMean, Mean, WeightedGeometricMean, WeightedHarmonicMean,
        WeightedMean,
    };

    #[cfg(feature = "dispersion")]
    pub use crate::batch::{
        standard_deviation, standard_deviation_ddof, variance, variance_ddof,
        weighted_standard_deviation, weighted_variance,
    };
    #[cfg(feature = "dispersion")]
    pub use crate::dispersion::{
        StandardDeviation, Variance, WeightedStandardDeviation, WeightedVariance,
    };
}

pub use accumulate::{stats_accumulate, stats_accumulate_weighted};
pub use traits::{Accumulator, DataKind, StatsError};

#[cfg(feature = "means")]
pub use means::{
    GeometricMean, HarmonicMean, Mean, WeightedGeometricMean, WeightedHarmonicMean, WeightedMean,
};

#[cfg(feature = "dispersion")]
pub use dispersion::{StandardDeviation, Variance, WeightedStandardDeviation, WeightedVariance};
