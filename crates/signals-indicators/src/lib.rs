//! Technical indicators with index-aligned outputs.
//!
//! This crate provides the indicator engine:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD, Stochastic)
//! - Volatility indicators (ATR, Bollinger Bands)
//! - Rolling support/resistance levels
//!
//! Every indicator returns a vector the same length as its input, with
//! leading `None` entries where not enough history exists. The catalog
//! module dispatches by indicator name for the service layer.

pub mod catalog;
pub mod levels;
pub mod momentum;
pub mod moving_average;
pub mod volatility;

pub use catalog::{compute_indicator, IndicatorKind, IndicatorParams, IndicatorReport};
pub use levels::{LevelsPoint, SupportResistance};
pub use momentum::{Macd, MacdPoint, Rsi, Stochastic, StochasticPoint};
pub use moving_average::{Ema, Sma};
pub use volatility::{Atr, BollingerBands, BollingerPoint};
