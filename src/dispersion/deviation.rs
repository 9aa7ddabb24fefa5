//! Standard deviation as the square root of a running variance

use super::variance::{Variance, WeightedVariance};
use crate::traits::{Accumulator, DataKind, StatsError};
use num_traits::Float;

/// Running standard deviation
///
/// Wraps a [`Variance`] and takes the square root on read, so every
/// degenerate case of the variance carries over unchanged.
///
/// # Example
///
/// ```
/// use meanflow::dispersion::StandardDeviation;
/// use meanflow::traits::Accumulator;
///
/// let mut acc = StandardDeviation::<f64>::with_ddof(0.0);
/// for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
///
/// assert!((acc.value() - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardDeviation<T> {
    inner: Variance<T>,
}

impl<T: Float> StandardDeviation<T> {
    /// Create an accumulator for population or sample standard deviation
    pub fn new(kind: DataKind) -> Self {
        Self {
            inner: Variance::new(kind),
        }
    }

    /// Create an accumulator with an explicit delta degrees of freedom
    pub fn with_ddof(ddof: T) -> Self {
        Self {
            inner: Variance::with_ddof(ddof),
        }
    }

    /// Delta degrees of freedom subtracted from the count
    pub fn ddof(&self) -> T {
        self.inner.ddof()
    }

    /// Add a value
    pub fn add(&mut self, x: T) {
        self.inner.add(x);
    }

    /// Variance the deviation is taken from
    pub fn variance(&self) -> T {
        self.inner.variance()
    }

    /// Current standard deviation
    pub fn standard_deviation(&self) -> T {
        self.variance().sqrt()
    }
}

impl<T: Float> Accumulator for StandardDeviation<T> {
    type Item = T;
    type Output = T;

    fn update(&mut self, x: T) {
        self.add(x);
    }

    fn value(&self) -> T {
        self.standard_deviation()
    }

    /// Guards the same denominators as [`Variance`]. Cancellation in the
    /// running sums is not guarded: a variance that rounds to a tiny negative
    /// number yields `Ok(NaN)`, matching [`Accumulator::value`].
    fn checked_value(&self) -> Result<T, StatsError> {
        self.inner
            .checked_variance("standard deviation")
            .map(Float::sqrt)
    }

    fn count(&self) -> u64 {
        self.inner.count()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

/// Running weighted standard deviation
///
/// Wraps a [`WeightedVariance`] and takes the square root on read.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct WeightedStandardDeviation<T, W = T> {
    inner: WeightedVariance<T, W>,
}

impl<T: Float, W> WeightedStandardDeviation<T, W> {
    /// Create an accumulator for population or sample standard deviation
    pub fn new(kind: DataKind) -> Self {
        Self {
            inner: WeightedVariance::new(kind),
        }
    }

    /// Population or sample reduction
    pub fn data_kind(&self) -> DataKind {
        self.inner.data_kind()
    }

    /// Variance the deviation is taken from
    pub fn variance(&self) -> T {
        self.inner.variance()
    }

    /// Current weighted standard deviation
    pub fn standard_deviation(&self) -> T {
        self.variance().sqrt()
    }
}

impl<T: Float, W: Copy + Into<T>> WeightedStandardDeviation<T, W> {
    /// Add a value with its weight
    pub fn add(&mut self, x: T, w: W) {
        self.inner.add(x, w);
    }
}

impl<T: Float, W: Copy + Into<T>> Accumulator for WeightedStandardDeviation<T, W> {
    type Item = (T, W);
    type Output = T;

    fn update(&mut self, (x, w): (T, W)) {
        self.add(x, w);
    }

    fn value(&self) -> T {
        self.standard_deviation()
    }

    fn checked_value(&self) -> Result<T, StatsError> {
        self.inner
            .checked_variance("weighted standard deviation")
            .map(Float::sqrt)
    }

    fn count(&self) -> u64 {
        self.inner.count()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}
