//! Core types and traits for the signals workspace.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries, Timeframe)
//! - Signal types (Signal, Recommendation, ContributingSignal)
//! - Indicator traits and the error taxonomy

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, IndicatorError, SignalsError, SignalsResult};
pub use traits::*;
pub use types::*;
