//! Trading signal types produced by the scoring layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete recommendation label derived from a bounded score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Recommendation::StrongBuy => "STRONG_BUY",
            Recommendation::Buy => "BUY",
            Recommendation::Neutral => "NEUTRAL",
            Recommendation::Sell => "SELL",
            Recommendation::StrongSell => "STRONG_SELL",
        };
        write!(f, "{}", s)
    }
}

/// Direction of a single contributing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

/// One human-readable reason behind a signal, in rule evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributingSignal {
    pub description: String,
    pub direction: Direction,
}

impl ContributingSignal {
    pub fn new(description: impl Into<String>, direction: Direction) -> Self {
        Self {
            description: description.into(),
            direction,
        }
    }
}

/// Aggregated trading signal for one symbol at one point in time.
///
/// Derived transiently per request and never persisted. The score is always
/// clamped to [-100, 100] and maps onto exactly one recommendation band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Symbol the signal was computed for
    pub symbol: String,
    /// Timestamp of the latest bar (unix ms)
    pub timestamp: i64,
    /// Close price the rules were evaluated against
    pub price: f64,
    /// Aggregate score in [-100, 100]
    pub score: i32,
    /// Recommendation label for the score
    pub recommendation: Recommendation,
    /// Reasons in rule evaluation order
    pub contributing_signals: Vec<ContributingSignal>,
}
