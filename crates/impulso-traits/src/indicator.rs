//! Indicator trait for trailing-window transforms.
//!
//! An indicator consumes an ordered sequence of values and produces one
//! output per fully formed trailing window. Outputs are right-aligned: the
//! last output belongs to the last input, so keyed inputs are re-keyed onto
//! the tail of their index.

use crate::{Result, TimeSeries};

/// A transform over an ordered numeric sequence.
///
/// Implementations should be thread-safe (`Send + Sync`) so a configured
/// indicator can be shared across threads working on independent inputs.
///
/// # Example
///
/// ```
/// use impulso_traits::{Indicator, Result};
///
/// struct Change;
///
/// impl Indicator for Change {
///     fn name(&self) -> &str {
///         "change"
///     }
///
///     fn lookback(&self) -> usize {
///         2
///     }
///
///     fn compute(&self, values: &[f64]) -> Result<Vec<f64>> {
///         Ok(values.windows(2).map(|w| w[1] - w[0]).collect())
///     }
/// }
///
/// assert_eq!(Change.compute(&[1.0, 3.0, 6.0]).unwrap(), vec![2.0, 3.0]);
/// ```
pub trait Indicator: Send + Sync {
    /// Returns the name of this indicator, used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Returns the window length.
    ///
    /// The first `lookback() - 1` positions of an input have no output.
    fn lookback(&self) -> usize;

    /// Computes the indicator over `values`.
    ///
    /// The result has one value per full window and is right-aligned with
    /// `values`.
    ///
    /// # Errors
    ///
    /// Returns an error if the indicator is misconfigured.
    fn compute(&self, values: &[f64]) -> Result<Vec<f64>>;
}

/// Applies `indicator` to a keyed series, re-keying the output onto the
/// tail of the input index.
pub fn apply_to_series<I, K>(indicator: &I, series: &TimeSeries<K>) -> Result<TimeSeries<K>>
where
    I: Indicator + ?Sized,
    K: Clone,
{
    let values = indicator.compute(series.values())?;
    series.align_tail(values)
}
