#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/impulso/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # impulso
//!
//! impulso is an umbrella crate that re-exports the impulso sub-crates for
//! convenience.
//!
//! ## Crate Organization
//!
//! - [`traits`] - Error types, [`TimeSeries`], and the [`Indicator`] trait
//! - [`indicators`] - Indicator implementations ([`Momentum`])
//!
//! ## Alignment
//!
//! Every indicator drops the positions that lack a full trailing window, so
//! an input of length `L` with window `period` yields `L - period + 1`
//! outputs keyed by the tail of the input index:
//!
//! ```text
//! index    t0   t1   t2   t3   t4
//! input    1    2    3    4    5
//! output        1    1    1    1      (period = 2, last, normal)
//! ```

/// Version information for the impulso crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Core types and trait definitions.
///
/// - [`Indicator`] - Trailing-window transform with right-aligned output
/// - [`TimeSeries`] - Ordered series with strictly increasing keys
/// - [`ImpulsoError`] - Error taxonomy shared by every indicator
pub mod traits {
    pub use impulso_traits::*;
}

pub use impulso_traits::{
    Date, ImpulsoError, Indicator, Result, TimeSeries, apply_to_frame, apply_to_series,
};

// ============================================================================
// Indicators
// ============================================================================

/// Indicator implementations.
///
/// ## Momentum
///
/// ```text
/// normal:  mo = ct - ctx
/// roc:     mo = 100 * ct / ctx
/// roclog:  mo = 100 * ln(ct / ctx)
/// ```
///
/// where `ct` is the value at the end of the window and `ctx` is the
/// window's first value (`last`) or its mean (`mean`).
///
/// # Example
///
/// ```
/// use impulso::indicators::momentum::{Differential, Method, Momentum, MomentumConfig};
///
/// let config = MomentumConfig::new(3)
///     .with_differential(Differential::Mean)
///     .with_method(Method::RocLog);
/// let out = Momentum::new(config).compute(&[10.0, 10.0, 10.0, 10.0]).unwrap();
/// assert_eq!(out, vec![0.0, 0.0]);
/// ```
pub mod indicators {
    /// Trailing-window momentum.
    pub mod momentum {
        pub use impulso_momentum::*;
    }
}

pub use impulso_momentum::{
    Differential, Method, Momentum, MomentumConfig, momentum, momentum_str,
};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use impulso::prelude::*;
///
/// let out = momentum(&[100.0, 200.0], 2, Differential::Last, Method::Roc).unwrap();
/// assert_eq!(out, vec![200.0]);
/// ```
pub mod prelude {
    pub use crate::{Date, ImpulsoError, Indicator, Result, TimeSeries};
    pub use crate::{Differential, Method, Momentum, MomentumConfig, momentum, momentum_str};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use polars::prelude::df;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        fn _accept_indicator(_indicator: &dyn Indicator) {}
        _accept_indicator(&Momentum::new(MomentumConfig::new(2)));

        let _result: Result<()> = Ok(());
        let _error: ImpulsoError = ImpulsoError::InvalidParameter("test".to_string());
    }

    #[test]
    fn test_daily_series_end_to_end() {
        let dates: Vec<Date> = [2, 3, 4, 5, 8, 9]
            .iter()
            .map(|&d| Date::from_ymd_opt(2024, 1, d).unwrap())
            .collect();
        let closes = vec![185.6, 184.3, 181.9, 181.2, 185.6, 185.1];
        let series = TimeSeries::new(dates.clone(), closes.clone()).unwrap();

        let config = MomentumConfig::new(5).with_method(Method::Roc);
        let out = Momentum::new(config).compute_series(&series).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out.index(), &dates[4..]);
        assert_relative_eq!(out.values()[0], 100.0);
        assert_relative_eq!(out.values()[1], 100.0 * 185.1 / 184.3);
    }

    #[test]
    fn test_table_and_series_agree() {
        let a = vec![3.0, 4.5, 4.0, 6.5, 7.0];
        let b = vec![20.0, 18.0, 19.5, 21.0, 22.5];
        let df = df! {
            "t" => &[1i64, 2, 3, 4, 5],
            "a" => &a,
            "b" => &b,
        }
        .unwrap();

        let indicator = Momentum::new(
            MomentumConfig::new(3)
                .with_differential(Differential::Mean)
                .with_method(Method::RocLog),
        );
        let table = indicator.compute_frame(&df, Some("t")).unwrap();

        for (name, values) in [("a", &a), ("b", &b)] {
            let expected = indicator.compute(values).unwrap();
            let column = traits::frame::column_values(table.column(name).unwrap()).unwrap();
            assert_eq!(column, expected);
        }
    }

    #[test]
    fn test_string_parameters_fail_fast() {
        let result = momentum_str(&[1.0, 2.0, 3.0], 2, "mean", "percent");
        assert!(matches!(result, Err(ImpulsoError::InvalidParameter(_))));
    }
}
