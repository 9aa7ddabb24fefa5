//! Geometric mean, weighted and unweighted
//!
//! The running state is the product of the values (raised to their weights),
//! so long streams of large or small values can overflow or underflow `T`.

use crate::traits::{degenerate, Accumulator, StatsError};
use core::marker::PhantomData;
use num_traits::Float;

/// Running weighted geometric mean
///
/// Tracks `Σw` and `Π(x^w)`; the value is `Π(x^w)^(1/Σw)`.
/// Zero or negative values are not rejected: they yield zero or NaN
/// through `powf`.
///
/// # Example
///
/// ```
/// use meanflow::means::WeightedGeometricMean;
/// use meanflow::traits::Accumulator;
///
/// let mut acc = WeightedGeometricMean::<f64>::new();
/// for (x, w) in [(1.0, 2.0), (2.0, 1.0), (4.0, 2.0)] {
///     acc.update((x, w));
/// }
///
/// assert!((acc.value() - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct WeightedGeometricMean<T, W = T> {
    count: u64,
    /// Sum of weights
    v1: T,
    /// Product of values raised to their weights
    s1: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _weight: PhantomData<fn(W)>,
}

impl<T: Float, W> Default for WeightedGeometricMean<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float, W> WeightedGeometricMean<T, W> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            v1: T::zero(),
            s1: T::one(),
            _weight: PhantomData,
        }
    }

    /// Sum of weights seen so far
    pub fn total_weight(&self) -> T {
        self.v1
    }

    /// Current geometric mean
    pub fn geometric_mean(&self) -> T {
        self.s1.powf(T::one() / self.v1)
    }

    // x^1 == x, so the unit-weight path skips the powf.
    fn add_unit(&mut self, x: T) {
        self.count += 1;
        self.v1 = self.v1 + T::one();
        self.s1 = self.s1 * x;
    }

    fn checked_geometric_mean(&self, name: &str) -> Result<T, StatsError> {
        if self.count == 0 {
            return degenerate(name, StatsError::Empty);
        }
        if self.v1.is_zero() {
            return degenerate(name, StatsError::ZeroTotalWeight);
        }
        Ok(self.geometric_mean())
    }
}

impl<T: Float, W: Copy + Into<T>> WeightedGeometricMean<T, W> {
    /// Add a value with its weight
    pub fn add(&mut self, x: T, w: W) {
        let w = w.into();
        self.count += 1;
        self.v1 = self.v1 + w;
        self.s1 = self.s1 * x.powf(w);
    }
}

impl<T: Float, W: Copy + Into<T>> Accumulator for WeightedGeometricMean<T, W> {
    type Item = (T, W);
    type Output = T;

    fn update(&mut self, (x, w): (T, W)) {
        self.add(x, w);
    }

    fn value(&self) -> T {
        self.geometric_mean()
    }

    fn checked_value(&self) -> Result<T, StatsError> {
        self.checked_geometric_mean("weighted geometric mean")
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Running geometric mean
///
/// A [`WeightedGeometricMean`] fed with unit weights.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct GeometricMean<T> {
    inner: WeightedGeometricMean<T>,
}

impl<T: Float> Default for GeometricMean<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GeometricMean<T> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            inner: WeightedGeometricMean::new(),
        }
    }

    /// Add a value
    pub fn add(&mut self, x: T) {
        self.inner.add_unit(x);
    }

    /// Current geometric mean, `(Πx)^(1/n)`
    pub fn geometric_mean(&self) -> T {
        self.inner.geometric_mean()
    }
}

impl<T: Float> Accumulator for GeometricMean<T> {
    type Item = T;
    type Output = T;

    fn update(&mut self, x: T) {
        self.add(x);
    }

    fn value(&self) -> T {
        self.geometric_mean()
    }

    fn checked_value(&self) -> Result<T, StatsError> {
        self.inner.checked_geometric_mean("geometric mean")
    }

    fn count(&self) -> u64 {
        self.inner.count
    }

    fn clear(&mut self) {
        self.inner = WeightedGeometricMean::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut acc = GeometricMean::<f64>::new();
        for v in [1.0, 2.0, 4.0] {
            acc.add(v);
        }

        assert_eq!(acc.count(), 3);
        assert!((acc.value() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted() {
        let mut acc = WeightedGeometricMean::<f64>::new();
        acc.add(1.0, 2.0);
        acc.add(2.0, 1.0);
        acc.add(4.0, 2.0);

        // (1^2 * 2 * 4^2)^(1/5) = 32^(1/5)
        assert!((acc.value() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_weights_match_unweighted() {
        let data = [1.5, 3.0, 0.25, 9.0];
        let mut plain = GeometricMean::<f64>::new();
        let mut weighted = WeightedGeometricMean::<f64>::new();
        for x in data {
            plain.add(x);
            weighted.add(x, 1.0);
        }

        assert!((plain.value() - weighted.value()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_value() {
        let mut acc = GeometricMean::<f64>::new();
        acc.add(3.0);
        acc.add(0.0);

        assert_eq!(acc.value(), 0.0);
    }

    #[test]
    fn test_negative_value_is_nan() {
        let mut acc = WeightedGeometricMean::<f64>::new();
        acc.add(-2.0, 0.5);

        assert!(acc.value().is_nan());
    }

    #[test]
    fn test_empty() {
        let acc = GeometricMean::<f64>::new();

        // 1^(1/0) = 1^inf
        assert_eq!(acc.value(), 1.0);
        assert_eq!(acc.checked_value(), Err(StatsError::Empty));
    }

    #[test]
    fn test_f32() {
        let mut acc = GeometricMean::<f32>::new();
        acc.add(2.0);
        acc.add(8.0);

        assert!((acc.value() - 4.0).abs() < 1e-5);
    }
}
