//! Momentum of a series relative to a trailing-window reference value.

use crate::{
    Differential, Method,
    window::{current_values, reference_values, window_count},
};
use impulso_traits::{
    ImpulsoError, Indicator, Result, TimeSeries, apply_to_frame, apply_to_series,
};
use ndarray::{Array1, ArrayView1};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Configuration for the momentum indicator.
///
/// `differential` and `method` fall back to their defaults (`last` and
/// `normal`) when omitted during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentumConfig {
    /// Window length. Must be at least 1.
    pub period: usize,
    /// Reference value rule.
    #[serde(default)]
    pub differential: Differential,
    /// Comparison rule.
    #[serde(default)]
    pub method: Method,
}

impl MomentumConfig {
    /// Creates a configuration with the default differential and method.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self {
            period,
            differential: Differential::Last,
            method: Method::Normal,
        }
    }

    /// Sets the reference value rule.
    #[must_use]
    pub const fn with_differential(mut self, differential: Differential) -> Self {
        self.differential = differential;
        self
    }

    /// Sets the comparison rule.
    #[must_use]
    pub const fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Checks that the configuration can produce output.
    ///
    /// # Errors
    ///
    /// Returns [`ImpulsoError::InvalidParameter`] if `period` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.period < 1 {
            return Err(ImpulsoError::InvalidParameter(format!(
                "period must be at least 1, got {}",
                self.period
            )));
        }
        Ok(())
    }
}

/// Momentum indicator.
///
/// For each position `i` with a full window of `period` values ending at
/// `i`, compares `history[i]` with the window's reference value. The output
/// has `max(0, len - period + 1)` values and is right-aligned with the
/// input.
///
/// # Example
///
/// ```
/// use impulso_momentum::{Momentum, MomentumConfig};
///
/// let momentum = Momentum::new(MomentumConfig::new(2));
/// let out = momentum.compute(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(out, vec![1.0, 1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Momentum {
    config: MomentumConfig,
}

impl Momentum {
    /// Create a new momentum indicator with the given configuration.
    #[must_use]
    pub const fn new(config: MomentumConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &MomentumConfig {
        &self.config
    }

    /// Get the window length.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.config.period
    }

    /// Computes momentum over a slice of values.
    ///
    /// # Errors
    ///
    /// Returns [`ImpulsoError::InvalidParameter`] if the period is zero.
    pub fn compute(&self, history: &[f64]) -> Result<Vec<f64>> {
        self.config.validate()?;

        let MomentumConfig {
            period,
            differential,
            method,
        } = self.config;

        let reference = reference_values(history, period, differential);
        let current = current_values(history, period);
        debug_assert_eq!(reference.len(), current.len());

        let out: Vec<f64> = current
            .iter()
            .zip(&reference)
            .map(|(&ct, &ctx)| method.apply(ct, ctx))
            .collect();

        tracing::debug!(
            period,
            differential = %differential,
            method = %method,
            input_len = history.len(),
            output_len = out.len(),
            "Computed momentum"
        );

        Ok(out)
    }

    /// Computes momentum over an ndarray view.
    ///
    /// # Errors
    ///
    /// Returns [`ImpulsoError::InvalidParameter`] if the period is zero.
    pub fn compute_array(&self, history: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        let out = match history.as_slice() {
            Some(values) => self.compute(values)?,
            None => self.compute(&history.to_vec())?,
        };
        Ok(Array1::from_vec(out))
    }

    /// Computes momentum over a keyed series, keeping the tail of its index.
    ///
    /// # Errors
    ///
    /// Returns [`ImpulsoError::InvalidParameter`] if the period is zero.
    pub fn compute_series<K: Clone>(&self, history: &TimeSeries<K>) -> Result<TimeSeries<K>> {
        apply_to_series(self, history)
    }

    /// Computes momentum for every value column of a table.
    ///
    /// Each non-index column is treated as an independent series. The index
    /// column, if named, is sliced to the rows the output covers.
    ///
    /// # Errors
    ///
    /// Returns [`ImpulsoError::InvalidParameter`] if the period is zero,
    /// [`ImpulsoError::MissingColumn`] if the index column is absent, or a
    /// Polars error if a value column is not numeric.
    pub fn compute_frame(&self, df: &DataFrame, index_column: Option<&str>) -> Result<DataFrame> {
        self.config.validate()?;
        apply_to_frame(self, df, index_column)
    }

    /// Returns the number of values produced for an input of `len` values.
    #[must_use]
    pub const fn output_len(&self, len: usize) -> usize {
        if self.config.period == 0 {
            return 0;
        }
        window_count(len, self.config.period)
    }
}

impl Indicator for Momentum {
    fn name(&self) -> &str {
        "momentum"
    }

    fn lookback(&self) -> usize {
        self.config.period
    }

    fn compute(&self, values: &[f64]) -> Result<Vec<f64>> {
        Self::compute(self, values)
    }
}

/// Computes momentum over `history`.
///
/// Shorthand for `Momentum::new(config).compute(history)`.
///
/// # Errors
///
/// Returns [`ImpulsoError::InvalidParameter`] if `period` is zero.
///
/// # Example
///
/// ```
/// use impulso_momentum::{Differential, Method, momentum};
///
/// let out = momentum(&[10.0, 20.0, 30.0], 2, Differential::Mean, Method::Normal).unwrap();
/// assert_eq!(out, vec![5.0, 5.0]);
/// ```
pub fn momentum(
    history: &[f64],
    period: usize,
    differential: Differential,
    method: Method,
) -> Result<Vec<f64>> {
    let config = MomentumConfig {
        period,
        differential,
        method,
    };
    Momentum::new(config).compute(history)
}

/// Computes momentum with `differential` and `method` given by name.
///
/// Both names are parsed before any computation, so an unknown name fails
/// immediately.
///
/// # Errors
///
/// Returns [`ImpulsoError::InvalidParameter`] for an unknown differential or
/// method, or a zero period.
pub fn momentum_str(
    history: &[f64],
    period: usize,
    differential: &str,
    method: &str,
) -> Result<Vec<f64>> {
    let differential = differential.parse()?;
    let method = method.parse()?;
    momentum(history, period, differential, method)
}
