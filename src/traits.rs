//! Core traits and shared types for streaming accumulators
//!
//! Every accumulator implements [`Accumulator`], which is all the fused
//! traversal in [`crate::accumulate`] needs to drive it.

use crate::macros::debug;
use num_traits::{One, Zero};

/// Error reported by [`Accumulator::checked_value`]
///
/// [`Accumulator::value`] never reports these; it returns whatever the
/// underlying arithmetic produces for a degenerate denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// No values have been accumulated
    Empty,
    /// Values were accumulated but their weights sum to zero
    ZeroTotalWeight,
    /// The observation count does not exceed the delta degrees of freedom
    InsufficientDegreesOfFreedom,
    /// Sample weighted variance with all weight on a single observation
    DegenerateWeights,
    /// Harmonic mean whose reciprocal sum `Σ(w/x)` is zero
    ZeroReciprocalSum,
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::Empty => write!(f, "no values accumulated"),
            StatsError::ZeroTotalWeight => write!(f, "total weight is zero"),
            StatsError::InsufficientDegreesOfFreedom => {
                write!(f, "observation count does not exceed ddof")
            }
            StatsError::DegenerateWeights => {
                write!(f, "squared weight sum equals sum of squared weights")
            }
            StatsError::ZeroReciprocalSum => write!(f, "sum of weights over values is zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Whether the data is a whole population or a sample drawn from one
///
/// Selects the closed-form variance reduction. For unweighted data
/// `Population` is equivalent to `ddof = 0` and `Sample` to `ddof = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataKind {
    /// Divide by the total weight
    #[default]
    Population,
    /// Bessel-corrected estimate
    Sample,
}

impl DataKind {
    /// Delta degrees of freedom matching this kind
    pub fn ddof<T: Zero + One>(self) -> T {
        match self {
            DataKind::Population => T::zero(),
            DataKind::Sample => T::one(),
        }
    }
}

/// Core trait for all streaming accumulators
///
/// An accumulator holds only the running sums its formula needs. `value()`
/// recomputes from those sums on every call, so it may be queried at any
/// point in the stream, including before the first update.
pub trait Accumulator {
    /// One observation: `T` for unweighted accumulators, `(T, W)` for weighted ones
    type Item;

    /// The statistic produced
    type Output;

    /// Fold one observation into the running sums
    fn update(&mut self, item: Self::Item);

    /// Current value of the statistic
    ///
    /// Degenerate denominators (no data, zero total weight, too few
    /// observations) are not guarded.
    fn value(&self) -> Self::Output;

    /// Current value, or the reason the formula is degenerate
    fn checked_value(&self) -> Result<Self::Output, StatsError>;

    /// Number of updates applied
    fn count(&self) -> u64;

    /// Reset the running sums, keeping construction parameters
    fn clear(&mut self);

    /// Check if no updates have been applied
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Log a degenerate query and return it as an error
pub(crate) fn degenerate<T>(accumulator: &str, err: StatsError) -> Result<T, StatsError> {
    debug!("{} value is degenerate: {}", accumulator, err);
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_kind_ddof() {
        assert_eq!(DataKind::Population.ddof::<f64>(), 0.0);
        assert_eq!(DataKind::Sample.ddof::<f64>(), 1.0);
        assert_eq!(DataKind::Sample.ddof::<u32>(), 1);
        assert_eq!(DataKind::default(), DataKind::Population);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_error_display() {
        assert_eq!(StatsError::Empty.to_string(), "no values accumulated");
        assert_eq!(
            StatsError::InsufficientDegreesOfFreedom.to_string(),
            "observation count does not exceed ddof"
        );
        assert_eq!(
            StatsError::ZeroReciprocalSum.to_string(),
            "sum of weights over values is zero"
        );
    }

    #[cfg(all(feature = "logging", feature = "std", feature = "means"))]
    mod logging {
        use super::*;
        use crate::means::HarmonicMean;
        use std::sync::Mutex;

        static RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

        struct Capture;

        impl log::Log for Capture {
            fn enabled(&self, _: &log::Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &log::Record<'_>) {
                if let Ok(mut records) = RECORDS.lock() {
                    records.push((record.level(), record.args().to_string()));
                }
            }

            fn flush(&self) {}
        }

        static CAPTURE: Capture = Capture;

        #[test]
        fn test_degenerate_query_emits_debug_record() {
            let _ = log::set_logger(&CAPTURE);
            log::set_max_level(log::LevelFilter::Trace);

            let acc = HarmonicMean::<f64>::new();
            assert_eq!(acc.checked_value(), Err(StatsError::Empty));

            let records = RECORDS.lock().unwrap();
            assert!(records.iter().any(|(level, msg)| {
                *level == log::Level::Debug
                    && msg == "harmonic mean value is degenerate: no values accumulated"
            }));
        }
    }
}
