//! Fused traversal: feed one pass over the data to several accumulators
//!
//! Instead of re-scanning a sequence once per statistic, hand every
//! accumulator to a single traversal. Each element is visited exactly once
//! and delivered to every accumulator before the next element is read.
//!
//! Two kinds of accumulator sets are supported:
//!
//! - tuples of `&mut A` (up to eight), dispatched statically
//! - `&mut [&mut dyn Accumulator<..>]`, for a set whose size is only known at runtime
//!
//! # Example
//!
//! ```
//! use meanflow::accumulate::stats_accumulate;
//! use meanflow::dispersion::StandardDeviation;
//! use meanflow::means::Mean;
//! use meanflow::traits::Accumulator;
//!
//! let mut values = [1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let mut mean = Mean::<f64>::new();
//! let mut stddev = StandardDeviation::<f64>::with_ddof(0.0);
//! stats_accumulate(values, (&mut mean, &mut stddev));
//!
//! // Standardize in place
//! let (mu, sigma) = (mean.value(), stddev.value());
//! for x in values.iter_mut() {
//!     *x = (*x - mu) / sigma;
//! }
//! assert!(values[2].abs() < 1e-12);
//! ```

use crate::macros::trace;
use crate::traits::Accumulator;

/// A group of accumulators updated together by one traversal
pub trait AccumulatorSet<X> {
    /// Deliver one item to every accumulator in the set
    fn update_all(&mut self, item: X);
}

macro_rules! impl_accumulator_set {
    ($( ( $($acc:ident $idx:tt),+ ) )+) => {$(
        impl<'a, X: Clone, $($acc),+> AccumulatorSet<X> for ($(&'a mut $acc,)+)
        where
            $($acc: Accumulator<Item = X> + ?Sized),+
        {
            fn update_all(&mut self, item: X) {
                $(self.$idx.update(item.clone());)+
            }
        }
    )+};
}

impl_accumulator_set! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
}

impl<'s, 'a, X: Clone, O> AccumulatorSet<X>
    for &'s mut [&'a mut dyn Accumulator<Item = X, Output = O>]
{
    fn update_all(&mut self, item: X) {
        for acc in self.iter_mut() {
            acc.update(item.clone());
        }
    }
}

/// Feed every value to every accumulator in `accumulators`
///
/// Returns the number of values visited. An empty sequence leaves the
/// accumulators untouched.
pub fn stats_accumulate<I, S>(values: I, mut accumulators: S) -> u64
where
    I: IntoIterator,
    S: AccumulatorSet<I::Item>,
{
    let mut visited = 0u64;
    for x in values {
        accumulators.update_all(x);
        visited += 1;
    }
    trace!("fused traversal visited {} values", visited);
    visited
}

/// Feed every `(value, weight)` pair to every accumulator in `accumulators`
///
/// The sequences are zipped: traversal stops at the end of the shorter one
/// and the excess of the longer one is ignored. Returns the number of pairs
/// visited.
///
/// # Example
///
/// ```
/// use meanflow::accumulate::stats_accumulate_weighted;
/// use meanflow::means::WeightedMean;
/// use meanflow::traits::Accumulator;
///
/// let mut acc = WeightedMean::<f64>::new();
/// let visited = stats_accumulate_weighted([1.0, 2.0, 3.0, 99.0], [1.0, 1.0, 2.0], (&mut acc,));
///
/// assert_eq!(visited, 3);
/// assert!((acc.value() - 2.25).abs() < 1e-12);
/// ```
pub fn stats_accumulate_weighted<I, J, S>(values: I, weights: J, mut accumulators: S) -> u64
where
    I: IntoIterator,
    J: IntoIterator,
    S: AccumulatorSet<(I::Item, J::Item)>,
{
    let mut visited = 0u64;
    for pair in values.into_iter().zip(weights) {
        accumulators.update_all(pair);
        visited += 1;
    }
    trace!("fused weighted traversal visited {} pairs", visited);
    visited
}
