//! Scoring policy configuration.

use serde::{Deserialize, Serialize};
use signals_core::error::SignalsError;
use signals_core::types::Recommendation;

/// Immutable scoring policy: indicator lookbacks, rule weights and the
/// score-to-recommendation bands.
///
/// Default constants are a documented policy choice:
/// weights trend ±25, momentum ±20, band ±15, level ±15 (maximum magnitude
/// 75 before clamping); bands ≥60 STRONG_BUY, ≥20 BUY, (-20, 20) NEUTRAL,
/// ≤-20 SELL, ≤-60 STRONG_SELL. The 2% level tolerance follows the original
/// support/resistance proximity check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Short SMA period for the trend rule
    pub short_sma_period: usize,
    /// Long SMA period for the trend rule
    pub long_sma_period: usize,
    /// RSI period for the momentum rule
    pub rsi_period: usize,
    /// Bollinger period for the mean-reversion rule
    pub bollinger_period: usize,
    /// Bollinger standard-deviation multiplier
    pub bollinger_std_dev: f64,
    /// Lookback for rolling support/resistance
    pub level_period: usize,

    /// Weight added (or subtracted) by the trend rule
    pub trend_weight: i32,
    /// Weight added (or subtracted) by the momentum rule
    pub momentum_weight: i32,
    /// Weight added (or subtracted) by the mean-reversion rule
    pub band_weight: i32,
    /// Weight added (or subtracted) by the level rule
    pub level_weight: i32,

    /// RSI level below which the market counts as oversold
    pub rsi_oversold: f64,
    /// RSI level above which the market counts as overbought
    pub rsi_overbought: f64,
    /// Relative distance that counts as "near" a support/resistance level
    pub level_tolerance: f64,

    /// Scores at or above this are STRONG_BUY
    pub strong_buy_threshold: i32,
    /// Scores at or above this (and below strong_buy) are BUY
    pub buy_threshold: i32,
    /// Scores at or below this (and above strong_sell) are SELL
    pub sell_threshold: i32,
    /// Scores at or below this are STRONG_SELL
    pub strong_sell_threshold: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            short_sma_period: 20,
            long_sma_period: 50,
            rsi_period: 14,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            level_period: 20,
            trend_weight: 25,
            momentum_weight: 20,
            band_weight: 15,
            level_weight: 15,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            level_tolerance: 0.02,
            strong_buy_threshold: 60,
            buy_threshold: 20,
            sell_threshold: -20,
            strong_sell_threshold: -60,
        }
    }
}

impl ScoringConfig {
    /// Validate the policy.
    pub fn validate(&self) -> Result<(), SignalsError> {
        if self.short_sma_period == 0
            || self.long_sma_period == 0
            || self.rsi_period == 0
            || self.bollinger_period == 0
            || self.level_period == 0
        {
            return Err(SignalsError::Config(
                "All indicator periods must be greater than 0".to_string(),
            ));
        }
        if self.short_sma_period >= self.long_sma_period {
            return Err(SignalsError::Config(
                "Short SMA period must be less than long SMA period".to_string(),
            ));
        }
        if self.bollinger_std_dev <= 0.0 {
            return Err(SignalsError::Config(
                "Bollinger std dev multiplier must be positive".to_string(),
            ));
        }
        if self.trend_weight < 0
            || self.momentum_weight < 0
            || self.band_weight < 0
            || self.level_weight < 0
        {
            return Err(SignalsError::Config(
                "Rule weights must be non-negative".to_string(),
            ));
        }
        if !(0.0..100.0).contains(&self.rsi_oversold)
            || !(0.0..=100.0).contains(&self.rsi_overbought)
            || self.rsi_oversold >= self.rsi_overbought
        {
            return Err(SignalsError::Config(
                "RSI levels must satisfy 0 <= oversold < overbought <= 100".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.level_tolerance) {
            return Err(SignalsError::Config(
                "Level tolerance must be in [0, 1)".to_string(),
            ));
        }
        if !(self.strong_sell_threshold < self.sell_threshold
            && self.sell_threshold < self.buy_threshold
            && self.buy_threshold < self.strong_buy_threshold)
        {
            return Err(SignalsError::Config(
                "Recommendation thresholds must be strictly ordered".to_string(),
            ));
        }
        Ok(())
    }

    /// Map a clamped score onto exactly one recommendation band.
    pub fn recommendation_for(&self, score: i32) -> Recommendation {
        if score >= self.strong_buy_threshold {
            Recommendation::StrongBuy
        } else if score >= self.buy_threshold {
            Recommendation::Buy
        } else if score <= self.strong_sell_threshold {
            Recommendation::StrongSell
        } else if score <= self.sell_threshold {
            Recommendation::Sell
        } else {
            Recommendation::Neutral
        }
    }

    /// Longest lookback any rule needs; used for insufficiency reporting.
    pub fn max_lookback(&self) -> usize {
        self.long_sma_period
            .max(self.rsi_period + 1)
            .max(self.bollinger_period)
            .max(self.level_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_short_must_be_less_than_long() {
        let config = ScoringConfig {
            short_sma_period: 50,
            long_sma_period: 20,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_thresholds_must_be_ordered() {
        let config = ScoringConfig {
            buy_threshold: 70,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_recommendation_bands() {
        let config = ScoringConfig::default();

        assert_eq!(config.recommendation_for(100), Recommendation::StrongBuy);
        assert_eq!(config.recommendation_for(60), Recommendation::StrongBuy);
        assert_eq!(config.recommendation_for(59), Recommendation::Buy);
        assert_eq!(config.recommendation_for(20), Recommendation::Buy);
        assert_eq!(config.recommendation_for(19), Recommendation::Neutral);
        assert_eq!(config.recommendation_for(0), Recommendation::Neutral);
        assert_eq!(config.recommendation_for(-19), Recommendation::Neutral);
        assert_eq!(config.recommendation_for(-20), Recommendation::Sell);
        assert_eq!(config.recommendation_for(-59), Recommendation::Sell);
        assert_eq!(config.recommendation_for(-60), Recommendation::StrongSell);
        assert_eq!(config.recommendation_for(-100), Recommendation::StrongSell);
    }

    #[test]
    fn test_max_lookback() {
        let config = ScoringConfig::default();
        assert_eq!(config.max_lookback(), 50);
    }
}
