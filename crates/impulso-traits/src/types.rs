//! Common types used throughout impulso.
//!
//! This module defines the keyed series container that indicators consume
//! and produce, along with the date type used for daily data.

use crate::{ImpulsoError, Result};
use serde::Serialize;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// An ordered series of `f64` values keyed by a strictly increasing index.
///
/// The index can be any ordered key: trading dates, timestamps, or plain
/// positions. Keys are unique and sorted ascending, which construction
/// enforces.
///
/// # Example
///
/// ```
/// use impulso_traits::{Date, TimeSeries};
///
/// let index = vec![
///     Date::from_ymd_opt(2024, 1, 2).unwrap(),
///     Date::from_ymd_opt(2024, 1, 3).unwrap(),
/// ];
/// let series = TimeSeries::new(index, vec![101.5, 102.25]).unwrap();
/// assert_eq!(series.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries<K> {
    index: Vec<K>,
    values: Vec<f64>,
}

impl<K: Ord> TimeSeries<K> {
    /// Creates a series from an index and its values.
    ///
    /// # Errors
    ///
    /// Returns [`ImpulsoError::InvalidData`] if the lengths differ or the
    /// keys are not strictly increasing.
    pub fn new(index: Vec<K>, values: Vec<f64>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(ImpulsoError::InvalidData(format!(
                "index has {} keys but {} values were given",
                index.len(),
                values.len()
            )));
        }

        if let Some(pos) = index.windows(2).position(|w| w[0] >= w[1]) {
            return Err(ImpulsoError::InvalidData(format!(
                "index keys must be strictly increasing (violated at position {})",
                pos + 1
            )));
        }

        Ok(Self { index, values })
    }
}

impl<K> TimeSeries<K> {
    /// Creates an empty series.
    pub const fn empty() -> Self {
        Self {
            index: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Returns the index keys.
    pub fn index(&self) -> &[K] {
        &self.index
    }

    /// Returns the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the most recent observation.
    pub fn last(&self) -> Option<(&K, f64)> {
        self.index.last().zip(self.values.last().copied())
    }

    /// Iterates over `(key, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.index.iter().zip(self.values.iter().copied())
    }

    /// Consumes the series, returning the index and values.
    pub fn into_parts(self) -> (Vec<K>, Vec<f64>) {
        (self.index, self.values)
    }
}

impl<K: Clone> TimeSeries<K> {
    /// Re-keys `values` onto the tail of this series' index.
    ///
    /// The most recent output value is paired with the most recent key, so
    /// an output of length `n` takes the last `n` keys.
    ///
    /// # Errors
    ///
    /// Returns [`ImpulsoError::InvalidData`] if `values` is longer than the
    /// series.
    pub fn align_tail(&self, values: Vec<f64>) -> Result<Self> {
        let offset = self.len().checked_sub(values.len()).ok_or_else(|| {
            ImpulsoError::InvalidData(format!(
                "cannot align {} values onto an index of {} keys",
                values.len(),
                self.len()
            ))
        })?;

        Ok(Self {
            index: self.index[offset..].to_vec(),
            values,
        })
    }
}

impl TimeSeries<usize> {
    /// Creates a positionally indexed series (`0..n`).
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            index: (0..values.len()).collect(),
            values,
        }
    }
}

impl<K> Default for TimeSeries<K> {
    fn default() -> Self {
        Self::empty()
    }
}
