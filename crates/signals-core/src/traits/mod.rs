//! Core trait definitions.

mod indicator;

pub use indicator::{Indicator, OhlcvIndicator};
