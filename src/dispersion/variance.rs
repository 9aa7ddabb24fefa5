//! Variance from running power sums
//!
//! Both accumulators keep raw sums (`Σx`, `Σx²` and their weighted forms)
//! and reduce them in closed form on read. This is cheaper per update than
//! Welford's recurrence but loses precision when the mean is large relative
//! to the spread.

use crate::traits::{degenerate, Accumulator, DataKind, StatsError};
use core::marker::PhantomData;
use num_traits::Num;

/// Running variance with an explicit delta degrees of freedom
///
/// The value is `n / (n - ddof) · (Σx²/n - (Σx/n)²)`. Constructing from a
/// [`DataKind`] is the same as `ddof = 0` for `Population` and `ddof = 1`
/// for `Sample`.
///
/// # Example
///
/// ```
/// use meanflow::dispersion::Variance;
/// use meanflow::traits::{Accumulator, DataKind};
///
/// let mut population = Variance::<f64>::new(DataKind::Population);
/// let mut sample = Variance::<f64>::with_ddof(1.0);
///
/// for x in [1.0, 2.0, 3.0] {
///     population.update(x);
///     sample.update(x);
/// }
///
/// assert!((population.value() - 2.0 / 3.0).abs() < 1e-12);
/// assert!((sample.value() - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variance<T> {
    /// Delta degrees of freedom
    ddof: T,
    count: u64,
    /// Number of values, as `T`
    v1: T,
    /// Sum of values
    s1: T,
    /// Sum of squared values
    s2: T,
}

impl<T: Num + Copy + PartialOrd> Variance<T> {
    /// Create an accumulator for population or sample variance
    pub fn new(kind: DataKind) -> Self {
        Self::with_ddof(kind.ddof())
    }

    /// Create an accumulator with an explicit delta degrees of freedom
    pub fn with_ddof(ddof: T) -> Self {
        Self {
            ddof,
            count: 0,
            v1: T::zero(),
            s1: T::zero(),
            s2: T::zero(),
        }
    }

    /// Delta degrees of freedom subtracted from the count
    pub fn ddof(&self) -> T {
        self.ddof
    }

    /// Add a value
    pub fn add(&mut self, x: T) {
        self.count += 1;
        self.v1 = self.v1 + T::one();
        self.s1 = self.s1 + x;
        self.s2 = self.s2 + x * x;
    }

    /// Current variance
    pub fn variance(&self) -> T {
        let mean = self.s1 / self.v1;
        self.v1 / (self.v1 - self.ddof) * (self.s2 / self.v1 - mean * mean)
    }

    pub(crate) fn checked_variance(&self, name: &str) -> Result<T, StatsError> {
        if self.count == 0 {
            return degenerate(name, StatsError::Empty);
        }
        if self.v1 <= self.ddof {
            return degenerate(name, StatsError::InsufficientDegreesOfFreedom);
        }
        Ok(self.variance())
    }
}

impl<T: Num + Copy + PartialOrd> Accumulator for Variance<T> {
    type Item = T;
    type Output = T;

    fn update(&mut self, x: T) {
        self.add(x);
    }

    fn value(&self) -> T {
        self.variance()
    }

    fn checked_value(&self) -> Result<T, StatsError> {
        self.checked_variance("variance")
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::with_ddof(self.ddof);
    }
}

/// Running weighted variance
///
/// Tracks `Σw`, `Σw²`, `Σ(w·x)` and `Σ(w·x²)`. The [`DataKind`] picks the
/// reduction:
///
/// - population: `Σ(w·x²)/Σw - (Σ(w·x)/Σw)²`
/// - sample (reliability weights): `Σw / ((Σw)² - Σw²) · (Σ(w·x²) - Σ(w·x)·Σ(w·x)/Σw)`
///
/// `Σw²` is only needed for the sample reduction but is always tracked, so
/// one accumulator state serves both kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct WeightedVariance<T, W = T> {
    kind: DataKind,
    count: u64,
    /// Sum of weights
    v1: T,
    /// Sum of squared weights
    v2: T,
    /// Sum of weighted values
    s1: T,
    /// Sum of weighted squared values
    s2: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _weight: PhantomData<fn(W)>,
}

impl<T: Num + Copy, W> WeightedVariance<T, W> {
    /// Create an accumulator for population or sample variance
    pub fn new(kind: DataKind) -> Self {
        Self {
            kind,
            count: 0,
            v1: T::zero(),
            v2: T::zero(),
            s1: T::zero(),
            s2: T::zero(),
            _weight: PhantomData,
        }
    }

    /// Population or sample reduction
    pub fn data_kind(&self) -> DataKind {
        self.kind
    }

    /// Sum of weights seen so far
    pub fn total_weight(&self) -> T {
        self.v1
    }

    /// Current weighted variance
    pub fn variance(&self) -> T {
        match self.kind {
            DataKind::Population => {
                let mean = self.s1 / self.v1;
                self.s2 / self.v1 - mean * mean
            }
            DataKind::Sample => {
                self.v1 / (self.v1 * self.v1 - self.v2) * (self.s2 - self.s1 * (self.s1 / self.v1))
            }
        }
    }

    pub(crate) fn checked_variance(&self, name: &str) -> Result<T, StatsError> {
        if self.count == 0 {
            return degenerate(name, StatsError::Empty);
        }
        if self.v1.is_zero() {
            return degenerate(name, StatsError::ZeroTotalWeight);
        }
        if self.kind == DataKind::Sample && (self.v1 * self.v1 - self.v2).is_zero() {
            return degenerate(name, StatsError::DegenerateWeights);
        }
        Ok(self.variance())
    }
}

impl<T: Num + Copy, W: Copy + Into<T>> WeightedVariance<T, W> {
    /// Add a value with its weight
    pub fn add(&mut self, x: T, w: W) {
        let w = w.into();
        let wx = w * x;
        self.count += 1;
        self.v1 = self.v1 + w;
        self.v2 = self.v2 + w * w;
        self.s1 = self.s1 + wx;
        self.s2 = self.s2 + wx * x;
    }
}

impl<T: Num + Copy, W: Copy + Into<T>> Accumulator for WeightedVariance<T, W> {
    type Item = (T, W);
    type Output = T;

    fn update(&mut self, (x, w): (T, W)) {
        self.add(x, w);
    }

    fn value(&self) -> T {
        self.variance()
    }

    fn checked_value(&self) -> Result<T, StatsError> {
        self.checked_variance("weighted variance")
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::new(self.kind);
    }
}
