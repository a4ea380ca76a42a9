//! Trailing-window momentum for impulso.
//!
//! Momentum compares each value of a series with a reference value taken
//! from the window of `period` values ending at it:
//!
//! - Reference ([`Differential`]): the window's first value (`last`) or its
//!   mean (`mean`).
//! - Comparison ([`Method`]): difference (`normal`), scaled ratio (`roc`)
//!   or scaled log ratio (`roclog`).
//!
//! Positions without a full window are dropped, so the output is the tail
//! of the input index.
//!
//! # Example
//!
//! ```
//! use impulso_momentum::{Differential, Method, Momentum, MomentumConfig};
//!
//! let config = MomentumConfig::new(2)
//!     .with_differential(Differential::Last)
//!     .with_method(Method::Roc);
//! let out = Momentum::new(config).compute(&[100.0, 200.0]).unwrap();
//! assert_eq!(out, vec![200.0]);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod momentum;
mod params;
pub mod window;

// Re-export key types
pub use momentum::{Momentum, MomentumConfig, momentum, momentum_str};
pub use params::{Differential, Method};
