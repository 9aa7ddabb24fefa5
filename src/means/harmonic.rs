//! Harmonic mean, weighted and unweighted

use crate::traits::{degenerate, Accumulator, StatsError};
use core::marker::PhantomData;
use num_traits::Num;

/// Running weighted harmonic mean
///
/// Tracks `Σw` and `Σ(w/x)`; the value is `Σw / Σ(w/x)`.
///
/// # Example
///
/// ```
/// use meanflow::means::WeightedHarmonicMean;
///
/// // 5 km at 40 km/h, 30 km at 60 km/h
/// let mut acc = WeightedHarmonicMean::<f64>::new();
/// acc.add(40.0, 5.0);
/// acc.add(60.0, 30.0);
///
/// assert!((acc.harmonic_mean() - 56.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct WeightedHarmonicMean<T, W = T> {
    count: u64,
    /// Sum of weights
    v1: T,
    /// Sum of weights over values
    s1: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _weight: PhantomData<fn(W)>,
}

impl<T: Num + Copy, W> Default for WeightedHarmonicMean<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Num + Copy, W> WeightedHarmonicMean<T, W> {
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

    /// Current harmonic mean
    pub fn harmonic_mean(&self) -> T {
        self.v1 / self.s1
    }

    fn add_unit(&mut self, x: T) {
        self.count += 1;
        self.v1 = self.v1 + T::one();
        self.s1 = self.s1 + T::one() / x;
    }

    fn checked_harmonic_mean(&self, name: &str) -> Result<T, StatsError> {
        if self.count == 0 {
            return degenerate(name, StatsError::Empty);
        }
        if self.v1.is_zero() {
            return degenerate(name, StatsError::ZeroTotalWeight);
        }
        if self.s1.is_zero() {
            return degenerate(name, StatsError::ZeroReciprocalSum);
        }
        Ok(self.harmonic_mean())
    }
}

impl<T: Num + Copy, W: Copy + Into<T>> WeightedHarmonicMean<T, W> {
    /// Add a value with its weight
    pub fn add(&mut self, x: T, w: W) {
        let w = w.into();
        self.count += 1;
        self.v1 = self.v1 + w;
        self.s1 = self.s1 + w / x;
    }
}

impl<T: Num + Copy, W: Copy + Into<T>> Accumulator for WeightedHarmonicMean<T, W> {
    type Item = (T, W);
    type Output = T;

    fn update(&mut self, (x, w): (T, W)) {
        self.add(x, w);
    }

    fn value(&self) -> T {
        self.harmonic_mean()
    }

    fn checked_value(&self) -> Result<T, StatsError> {
        self.checked_harmonic_mean("weighted harmonic mean")
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Running harmonic mean
///
/// A [`WeightedHarmonicMean`] fed with unit weights.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct HarmonicMean<T> {
    inner: WeightedHarmonicMean<T>,
}

impl<T: Num + Copy> Default for HarmonicMean<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Num + Copy> HarmonicMean<T> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            inner: WeightedHarmonicMean::new(),
        }
    }

    /// Add a value
    pub fn add(&mut self, x: T) {
        self.inner.add_unit(x);
    }

    /// Current harmonic mean, `n / Σ(1/x)`
    pub fn harmonic_mean(&self) -> T {
        self.inner.harmonic_mean()
    }
}

impl<T: Num + Copy> Accumulator for HarmonicMean<T> {
    type Item = T;
    type Output = T;

    fn update(&mut self, x: T) {
        self.add(x);
    }

    fn value(&self) -> T {
        self.harmonic_mean()
    }

    fn checked_value(&self) -> Result<T, StatsError> {
        self.inner.checked_harmonic_mean("harmonic mean")
    }

    fn count(&self) -> u64 {
        self.inner.count
    }

    fn clear(&mut self) {
        self.inner = WeightedHarmonicMean::new();
    }
}
