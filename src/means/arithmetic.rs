//! Arithmetic mean, weighted and unweighted

use crate::traits::{degenerate, Accumulator, StatsError};
use core::marker::PhantomData;
use num_traits::Num;

/// Running weighted arithmetic mean
///
/// Tracks `Σw` and `Σ(w·x)`; the value is their ratio. Weights of type `W`
/// are converted into `T` as they arrive.
///
/// # Example
///
/// ```
/// use meanflow::means::WeightedMean;
///
/// let mut acc = WeightedMean::<f64>::new();
/// for (x, w) in [(1.0, 1.0), (2.0, 1.0), (3.0, 2.0)] {
///     acc.add(x, w);
/// }
///
/// assert!((acc.mean() - 2.25).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct WeightedMean<T, W = T> {
    /// Number of updates
    count: u64,
    /// Sum of weights
    v1: T,
    /// Sum of weighted values
    s1: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _weight: PhantomData<fn(W)>,
}

impl<T: Num + Copy, W> Default for WeightedMean<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Num + Copy, W> WeightedMean<T, W> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            v1: T::zero(),
            s1: T::zero(),
            _weight: PhantomData,
        }
    }

    /// Sum of weights seen so far
    pub fn total_weight(&self) -> T {
        self.v1
    }

    /// Current mean, `Σ(w·x) / Σw`
    pub fn mean(&self) -> T {
        self.s1 / self.v1
    }

    fn add_unit(&mut self, x: T) {
        self.count += 1;
        self.v1 = self.v1 + T::one();
        self.s1 = self.s1 + x;
    }

    fn checked_mean(&self, name: &str) -> Result<T, StatsError> {
        if self.count == 0 {
            return degenerate(name, StatsError::Empty);
        }
        if self.v1.is_zero() {
            return degenerate(name, StatsError::ZeroTotalWeight);
        }
        Ok(self.mean())
    }
}

impl<T: Num + Copy, W: Copy + Into<T>> WeightedMean<T, W> {
    /// Add a value with its weight
    pub fn add(&mut self, x: T, w: W) {
        let w = w.into();
        self.count += 1;
        self.v1 = self.v1 + w;
        self.s1 = self.s1 + w * x;
    }
}

impl<T: Num + Copy, W: Copy + Into<T>> Accumulator for WeightedMean<T, W> {
    type Item = (T, W);
    type Output = T;

    fn update(&mut self, (x, w): (T, W)) {
        self.add(x, w);
    }

    fn value(&self) -> T {
        self.mean()
    }

    fn checked_value(&self) -> Result<T, StatsError> {
        self.checked_mean("weighted mean")
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Running arithmetic mean
///
/// A [`WeightedMean`] fed with unit weights.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct Mean<T> {
    inner: WeightedMean<T>,
}

impl<T: Num + Copy> Default for Mean<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Num + Copy> Mean<T> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            inner: WeightedMean::new(),
        }
    }

    /// Add a value
    pub fn add(&mut self, x: T) {
        self.inner.add_unit(x);
    }

    /// Current mean, `Σx / n`
    pub fn mean(&self) -> T {
        self.inner.mean()
    }
}

impl<T: Num + Copy> Accumulator for Mean<T> {
    type Item = T;
    type Output = T;

    fn update(&mut self, x: T) {
        self.add(x);
    }

    fn value(&self) -> T {
        self.mean()
    }

    fn checked_value(&self) -> Result<T, StatsError> {
        self.inner.checked_mean("mean")
    }

    fn count(&self) -> u64 {
        self.inner.count
    }

    fn clear(&mut self) {
        self.inner = WeightedMean::new();
    }
}
