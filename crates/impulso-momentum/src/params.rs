//! Momentum parameters.

use impulso_traits::{ImpulsoError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How the reference value of a window is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Differential {
    /// The value at the first position of the window.
    #[default]
    Last,
    /// The arithmetic mean of the window.
    Mean,
}

impl Differential {
    /// Returns the canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Last => "last",
            Self::Mean => "mean",
        }
    }
}

impl fmt::Display for Differential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Differential {
    type Err = ImpulsoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" => Ok(Self::Last),
            "mean" => Ok(Self::Mean),
            other => Err(ImpulsoError::InvalidParameter(format!(
                "unknown differential '{other}', expected one of: last, mean"
            ))),
        }
    }
}

/// How the current value is compared against the reference value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// `current - reference`.
    #[default]
    Normal,
    /// `100 * current / reference`.
    ///
    /// This is a ratio scaled by 100, equal to 100 when the value is
    /// unchanged. It is not the percentage change
    /// `100 * (current - reference) / reference`.
    Roc,
    /// `100 * ln(current / reference)`.
    RocLog,
}

impl Method {
    /// Returns the canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Roc => "roc",
            Self::RocLog => "roclog",
        }
    }

    /// Combines a current value with its reference value.
    #[inline]
    pub fn apply(&self, current: f64, reference: f64) -> f64 {
        match self {
            Self::Normal => current - reference,
            Self::Roc => 100.0 * current / reference,
            Self::RocLog => 100.0 * (current / reference).ln(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ImpulsoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "roc" => Ok(Self::Roc),
            "roclog" => Ok(Self::RocLog),
            other => Err(ImpulsoError::InvalidParameter(format!(
                "unknown method '{other}', expected one of: normal, roc, roclog"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        assert_eq!(Differential::default(), Differential::Last);
        assert_eq!(Method::default(), Method::Normal);
    }

    #[test]
    fn test_parse_differential() {
        assert_eq!("last".parse::<Differential>().unwrap(), Differential::Last);
        assert_eq!(" Mean ".parse::<Differential>().unwrap(), Differential::Mean);

        let err = "first".parse::<Differential>().unwrap_err();
        assert!(matches!(err, ImpulsoError::InvalidParameter(_)));
    }

    #[test]
    fn test_parse_method() {
        assert_eq!("normal".parse::<Method>().unwrap(), Method::Normal);
        assert_eq!("ROC".parse::<Method>().unwrap(), Method::Roc);
        assert_eq!("roclog".parse::<Method>().unwrap(), Method::RocLog);

        let err = "log".parse::<Method>().unwrap_err();
        assert!(matches!(err, ImpulsoError::InvalidParameter(_)));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for d in [Differential::Last, Differential::Mean] {
            assert_eq!(d.to_string().parse::<Differential>().unwrap(), d);
        }
        for m in [Method::Normal, Method::Roc, Method::RocLog] {
            assert_eq!(m.to_string().parse::<Method>().unwrap(), m);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Method::RocLog).unwrap(), "\"roclog\"");
        assert_eq!(serde_json::to_string(&Differential::Mean).unwrap(), "\"mean\"");
        assert_eq!(serde_json::from_str::<Method>("\"roc\"").unwrap(), Method::Roc);
        assert!(serde_json::from_str::<Method>("\"rate\"").is_err());
    }

    #[test]
    fn test_apply_normal() {
        assert_relative_eq!(Method::Normal.apply(12.0, 10.0), 2.0);
        assert_relative_eq!(Method::Normal.apply(8.0, 10.0), -2.0);
    }

    #[test]
    fn test_apply_roc_is_a_ratio() {
        assert_relative_eq!(Method::Roc.apply(10.0, 10.0), 100.0);
        assert_relative_eq!(Method::Roc.apply(200.0, 100.0), 200.0);
    }

    #[test]
    fn test_apply_roclog_sign() {
        assert!(Method::RocLog.apply(9.0, 10.0) < 0.0);
        assert_eq!(Method::RocLog.apply(10.0, 10.0), 0.0);
        assert!(Method::RocLog.apply(11.0, 10.0) > 0.0);
        assert_relative_eq!(
            Method::RocLog.apply(std::f64::consts::E, 1.0),
            100.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_apply_non_positive_values_follow_ieee() {
        assert_eq!(Method::Roc.apply(5.0, 0.0), f64::INFINITY);
        assert_eq!(Method::Roc.apply(-5.0, 0.0), f64::NEG_INFINITY);
        assert!(Method::Roc.apply(0.0, 0.0).is_nan());
        assert_eq!(Method::RocLog.apply(0.0, 5.0), f64::NEG_INFINITY);
        assert!(Method::RocLog.apply(-1.0, 5.0).is_nan());
    }
}
