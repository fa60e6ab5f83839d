//! Core data types for the signals workspace.

mod ohlcv;
mod signal;
mod timeframe;

pub use ohlcv::{Bar, BarSeries};
pub use signal::{ContributingSignal, Direction, Recommendation, Signal};
pub use timeframe::Timeframe;
