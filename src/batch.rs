//! Compute a statistic directly from a sequence
//!
//! Each function builds one fresh accumulator, runs it over the data with a
//! single traversal and returns its value. Degenerate input (empty data,
//! zero total weight, too few observations) is not checked; see
//! [`Accumulator::checked_value`] for a guarded alternative.
//!
//! # Example
//!
//! ```
//! use meanflow::batch::{mean, variance, weighted_mean};
//! use meanflow::traits::DataKind;
//!
//! assert_eq!(mean([1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
//! assert_eq!(weighted_mean([1.0, 2.0, 3.0], [1.0, 1.0, 2.0]), 2.25);
//! assert!((variance([1.0_f64, 2.0, 3.0], DataKind::Sample) - 1.0).abs() < 1e-12);
//! ```

use crate::accumulate::{stats_accumulate, stats_accumulate_weighted};
use crate::macros::trace;
use crate::traits::Accumulator;

#[cfg(feature = "dispersion")]
use crate::dispersion::{StandardDeviation, Variance, WeightedStandardDeviation, WeightedVariance};
#[cfg(feature = "means")]
use crate::means::{
    GeometricMean, HarmonicMean, Mean, WeightedGeometricMean, WeightedHarmonicMean, WeightedMean,
};
#[cfg(feature = "dispersion")]
use crate::traits::DataKind;
#[cfg(any(feature = "means", feature = "dispersion"))]
use num_traits::Float;
#[cfg(any(feature = "means", feature = "dispersion"))]
use num_traits::Num;

/// Run a freshly constructed accumulator over `values` and return its value
///
/// # Example
///
/// ```
/// use meanflow::batch::get_stat;
/// use meanflow::means::HarmonicMean;
///
/// let h = get_stat([40.0, 60.0], HarmonicMean::<f64>::new());
/// assert!((h - 48.0).abs() < 1e-9);
/// ```
pub fn get_stat<I, A>(values: I, mut accumulator: A) -> A::Output
where
    I: IntoIterator<Item = A::Item>,
    A: Accumulator,
    A::Item: Clone,
{
    let visited = stats_accumulate(values, (&mut accumulator,));
    trace!("batch statistic over {} values", visited);
    accumulator.value()
}

/// Run a freshly constructed weighted accumulator over zipped values and weights
pub fn get_weighted_stat<I, J, A, T, W>(values: I, weights: J, mut accumulator: A) -> A::Output
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = W>,
    A: Accumulator<Item = (T, W)>,
    T: Clone,
    W: Clone,
{
    let visited = stats_accumulate_weighted(values, weights, (&mut accumulator,));
    trace!("batch weighted statistic over {} pairs", visited);
    accumulator.value()
}

/// Arithmetic mean of `values`
#[cfg(feature = "means")]
pub fn mean<T, I>(values: I) -> T
where
    T: Num + Copy,
    I: IntoIterator<Item = T>,
{
    get_stat(values, Mean::new())
}

/// Weighted arithmetic mean of `values`
#[cfg(feature = "means")]
pub fn weighted_mean<T, W, I, J>(values: I, weights: J) -> T
where
    T: Num + Copy,
    W: Copy + Into<T>,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = W>,
{
    get_weighted_stat(values, weights, WeightedMean::new())
}

/// Geometric mean of `values`
#[cfg(feature = "means")]
pub fn geometric_mean<T, I>(values: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    get_stat(values, GeometricMean::new())
}

/// Weighted geometric mean of `values`
#[cfg(feature = "means")]
pub fn weighted_geometric_mean<T, W, I, J>(values: I, weights: J) -> T
where
    T: Float,
    W: Copy + Into<T>,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = W>,
{
    get_weighted_stat(values, weights, WeightedGeometricMean::new())
}

/// Harmonic mean of `values`
#[cfg(feature = "means")]
pub fn harmonic_mean<T, I>(values: I) -> T
where
    T: Num + Copy,
    I: IntoIterator<Item = T>,
{
    get_stat(values, HarmonicMean::new())
}

/// Weighted harmonic mean of `values`
#[cfg(feature = "means")]
pub fn weighted_harmonic_mean<T, W, I, J>(values: I, weights: J) -> T
where
    T: Num + Copy,
    W: Copy + Into<T>,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = W>,
{
    get_weighted_stat(values, weights, WeightedHarmonicMean::new())
}

/// Population or sample variance of `values`
#[cfg(feature = "dispersion")]
pub fn variance<T, I>(values: I, kind: DataKind) -> T
where
    T: Num + Copy + PartialOrd,
    I: IntoIterator<Item = T>,
{
    get_stat(values, Variance::new(kind))
}

/// Variance of `values` with an explicit delta degrees of freedom
#[cfg(feature = "dispersion")]
pub fn variance_ddof<T, I>(values: I, ddof: T) -> T
where
    T: Num + Copy + PartialOrd,
    I: IntoIterator<Item = T>,
{
    get_stat(values, Variance::with_ddof(ddof))
}

/// Population or sample weighted variance of `values`
#[cfg(feature = "dispersion")]
pub fn weighted_variance<T, W, I, J>(values: I, weights: J, kind: DataKind) -> T
where
    T: Num + Copy,
    W: Copy + Into<T>,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = W>,
{
    get_weighted_stat(values, weights, WeightedVariance::new(kind))
}

/// Population or sample standard deviation of `values`
#[cfg(feature = "dispersion")]
pub fn standard_deviation<T, I>(values: I, kind: DataKind) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    get_stat(values, StandardDeviation::new(kind))
}

/// Standard deviation of `values` with an explicit delta degrees of freedom
#[cfg(feature = "dispersion")]
pub fn standard_deviation_ddof<T, I>(values: I, ddof: T) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    get_stat(values, StandardDeviation::with_ddof(ddof))
}

/// Population or sample weighted standard deviation of `values`
#[cfg(feature = "dispersion")]
pub fn weighted_standard_deviation<T, W, I, J>(values: I, weights: J, kind: DataKind) -> T
where
    T: Float,
    W: Copy + Into<T>,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = W>,
{
    get_weighted_stat(values, weights, WeightedStandardDeviation::new(kind))
}
