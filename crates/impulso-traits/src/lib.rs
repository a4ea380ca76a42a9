#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/impulso/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and trait definitions for impulso.
//!
//! This crate provides the abstractions shared by every indicator: the error
//! taxonomy, the keyed series container, and the `Indicator` trait with its
//! series and table adapters.

/// The version of the impulso-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod frame;
pub mod indicator;
pub mod types;

// Re-exports
pub use error::{ImpulsoError, Result};
pub use frame::apply_to_frame;
pub use indicator::{Indicator, apply_to_series};
pub use types::{Date, TimeSeries};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
