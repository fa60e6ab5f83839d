//! The signal generator: fixed-order weighted rules over indicator readings.

use signals_core::error::IndicatorError;
use signals_core::traits::{Indicator, OhlcvIndicator};
use signals_core::types::{BarSeries, ContributingSignal, Direction, Signal};
use signals_indicators::{BollingerBands, Rsi, Sma, SupportResistance};
use tracing::debug;

use crate::config::ScoringConfig;

/// Stateless signal generator parameterized by an immutable scoring policy.
///
/// Each call reads only its arguments; there is no retained session state,
/// so the generator is safe to share across concurrent requests.
pub struct SignalGenerator {
    config: ScoringConfig,
}

impl SignalGenerator {
    /// Create a generator with a validated policy.
    pub fn new(config: ScoringConfig) -> Result<Self, signals_core::error::SignalsError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a generator with the documented default policy.
    pub fn with_defaults() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    /// The active policy.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Generate a signal for the latest bar, using its close as the price.
    pub fn generate_latest(&self, series: &BarSeries) -> Result<Signal, IndicatorError> {
        let price = series.last().map(|b| b.close).ok_or_else(|| {
            IndicatorError::InsufficientData {
                required: self.config.max_lookback(),
                available: 0,
            }
        })?;
        self.generate(series, price)
    }

    /// Generate a signal for the given current price.
    ///
    /// Rules run in a fixed order (trend, momentum, mean reversion, levels);
    /// any rule whose indicator is undefined at the latest index is skipped.
    ///
    /// # Errors
    /// `InsufficientData` only when no rule could be evaluated at all.
    pub fn generate(&self, series: &BarSeries, price: f64) -> Result<Signal, IndicatorError> {
        let cfg = &self.config;
        let bars_available = series.len();

        let closes = series.closes();
        let highs = series.highs();
        let lows = series.lows();

        let mut score: i32 = 0;
        let mut reasons: Vec<ContributingSignal> = Vec::new();
        let mut rules_evaluated = 0usize;

        // Rule 1: trend (short SMA vs long SMA)
        let short_sma = latest(Sma::new(cfg.short_sma_period)?.calculate(&closes))?;
        let long_sma = latest(Sma::new(cfg.long_sma_period)?.calculate(&closes))?;
        if let (Some(short), Some(long)) = (short_sma, long_sma) {
            rules_evaluated += 1;
            if short > long {
                score = score.saturating_add(cfg.trend_weight);
                reasons.push(ContributingSignal::new(
                    format!(
                        "SMA {} > SMA {} (Bullish Trend)",
                        cfg.short_sma_period, cfg.long_sma_period
                    ),
                    Direction::Bullish,
                ));
            } else if short < long {
                score = score.saturating_sub(cfg.trend_weight);
                reasons.push(ContributingSignal::new(
                    format!(
                        "SMA {} < SMA {} (Bearish Trend)",
                        cfg.short_sma_period, cfg.long_sma_period
                    ),
                    Direction::Bearish,
                ));
            }
            // Equal SMAs contribute nothing
        }

        // Rule 2: momentum (RSI against oversold/overbought levels)
        let rsi = latest(Rsi::new(cfg.rsi_period)?.calculate(&closes))?;
        if let Some(rsi) = rsi {
            rules_evaluated += 1;
            if rsi < cfg.rsi_oversold {
                score = score.saturating_add(cfg.momentum_weight);
                reasons.push(ContributingSignal::new(
                    format!("Oversold (RSI < {:.0})", cfg.rsi_oversold),
                    Direction::Bullish,
                ));
            } else if rsi > cfg.rsi_overbought {
                score = score.saturating_sub(cfg.momentum_weight);
                reasons.push(ContributingSignal::new(
                    format!("Overbought (RSI > {:.0})", cfg.rsi_overbought),
                    Direction::Bearish,
                ));
            } else {
                reasons.push(ContributingSignal::new(
                    format!("RSI: {:.2}", rsi),
                    Direction::Neutral,
                ));
            }
        }

        // Rule 3: mean reversion (price against the Bollinger envelope)
        let bands = latest(
            BollingerBands::new(cfg.bollinger_period, cfg.bollinger_std_dev)?.calculate(&closes),
        )?;
        if let Some(bands) = bands {
            rules_evaluated += 1;
            if price < bands.lower {
                score = score.saturating_add(cfg.band_weight);
                reasons.push(ContributingSignal::new(
                    "Near Lower Band (Oversold)",
                    Direction::Bullish,
                ));
            } else if price > bands.upper {
                score = score.saturating_sub(cfg.band_weight);
                reasons.push(ContributingSignal::new(
                    "Near Upper Band (Overbought)",
                    Direction::Bearish,
                ));
            }
        }

        // Rule 4: levels (price near rolling support or resistance).
        // Support is checked first; the two arms are mutually exclusive.
        let levels = latest(
            SupportResistance::new(cfg.level_period)?.calculate_hlc(&highs, &lows, &closes),
        )?;
        if let Some(levels) = levels {
            rules_evaluated += 1;
            if price <= levels.support * (1.0 + cfg.level_tolerance) {
                score = score.saturating_add(cfg.level_weight);
                reasons.push(ContributingSignal::new("Near Support", Direction::Bullish));
            } else if price >= levels.resistance * (1.0 - cfg.level_tolerance) {
                score = score.saturating_sub(cfg.level_weight);
                reasons.push(ContributingSignal::new(
                    "Near Resistance",
                    Direction::Bearish,
                ));
            }
        }

        if rules_evaluated == 0 {
            return Err(IndicatorError::InsufficientData {
                required: cfg.max_lookback(),
                available: bars_available,
            });
        }

        let score = score.clamp(-100, 100);
        let recommendation = cfg.recommendation_for(score);
        debug!(
            symbol = series.symbol.as_str(),
            score,
            %recommendation,
            rules_evaluated,
            "signal generated"
        );

        Ok(Signal {
            symbol: series.symbol.clone(),
            timestamp: series.last().map(|b| b.timestamp).unwrap_or_default(),
            price,
            score,
            recommendation,
            contributing_signals: reasons,
        })
    }
}

/// Latest defined value of an indicator run, treating "not enough bars"
/// as an undefined reading rather than an error.
fn latest<T: Copy>(
    result: Result<Vec<Option<T>>, IndicatorError>,
) -> Result<Option<T>, IndicatorError> {
    match result {
        Ok(values) => Ok(values.last().copied().flatten()),
        Err(IndicatorError::InsufficientData { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signals_core::types::{Bar, Recommendation, Timeframe};

    fn series_from(closes: &[f64], half_range: f64) -> BarSeries {
        let mut series = BarSeries::new("TEST".to_string(), Timeframe::Daily);
        for (i, &close) in closes.iter().enumerate() {
            series.push(Bar::new(
                i as i64 * 86_400_000,
                close,
                close + half_range,
                close - half_range,
                close,
                1000.0,
            ));
        }
        series
    }

    /// Gentle uptrend with alternating noise: RSI stays in the neutral band,
    /// price stays inside the Bollinger envelope, and the wide bar range
    /// keeps the close away from rolling support and resistance.
    fn trend_only_series() -> BarSeries {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + 0.05 * i as f64 + if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        series_from(&closes, 5.0)
    }

    #[test]
    fn test_trend_rule_only() {
        let generator = SignalGenerator::with_defaults();
        let signal = generator.generate_latest(&trend_only_series()).unwrap();

        // Only the trend rule contributes; momentum adds a neutral reason
        assert_eq!(signal.score, 25);
        assert_eq!(signal.recommendation, Recommendation::Buy);
        assert_eq!(signal.contributing_signals.len(), 2);
        assert_eq!(signal.contributing_signals[0].direction, Direction::Bullish);
        assert!(signal.contributing_signals[0]
            .description
            .contains("Bullish Trend"));
        assert_eq!(signal.contributing_signals[1].direction, Direction::Neutral);
        assert!(signal.contributing_signals[1].description.starts_with("RSI:"));
    }

    #[test]
    fn test_rule_order_is_stable() {
        // Steep rise with a narrow bar range: trend bullish, RSI pinned at
        // 100 (overbought), close pressed against rolling resistance.
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let series = series_from(&closes, 0.5);

        let generator = SignalGenerator::with_defaults();
        let signal = generator.generate_latest(&series).unwrap();

        assert_eq!(signal.score, 25 - 20 - 15);
        assert_eq!(signal.recommendation, Recommendation::Neutral);
        let directions: Vec<Direction> = signal
            .contributing_signals
            .iter()
            .map(|c| c.direction)
            .collect();
        assert_eq!(
            directions,
            vec![Direction::Bullish, Direction::Bearish, Direction::Bearish]
        );
        assert!(signal.contributing_signals[1]
            .description
            .contains("Overbought"));
        assert_eq!(signal.contributing_signals[2].description, "Near Resistance");
    }

    #[test]
    fn test_score_is_clamped() {
        let config = ScoringConfig {
            trend_weight: 500,
            ..Default::default()
        };
        let generator = SignalGenerator::new(config).unwrap();
        let signal = generator.generate_latest(&trend_only_series()).unwrap();

        assert_eq!(signal.score, 100);
        assert_eq!(signal.recommendation, Recommendation::StrongBuy);
    }

    #[test]
    fn test_extreme_weights_saturate_before_clamp() {
        // Steep fall with a narrow bar range: RSI pins at 0 (oversold) and
        // the close rides rolling support, so both near-i32::MAX weights
        // fire. Accumulation must saturate instead of overflowing.
        let closes: Vec<f64> = (0..60).map(|i| 200.0 - i as f64).collect();
        let series = series_from(&closes, 0.5);

        let config = ScoringConfig {
            momentum_weight: 2_000_000_000,
            level_weight: 2_000_000_000,
            ..Default::default()
        };
        let generator = SignalGenerator::new(config).unwrap();
        let signal = generator.generate_latest(&series).unwrap();

        assert_eq!(signal.score, 100);
        assert_eq!(signal.recommendation, Recommendation::StrongBuy);
    }

    #[test]
    fn test_partial_history_skips_rules() {
        // 30 flat bars: the 50-bar SMA is undefined so the trend rule is
        // skipped entirely, while the remaining rules still evaluate.
        let series = series_from(&vec![100.0; 30], 0.0);
        let generator = SignalGenerator::with_defaults();
        let signal = generator.generate_latest(&series).unwrap();

        assert!(signal
            .contributing_signals
            .iter()
            .all(|c| !c.description.contains("Trend")));
        // Flat series: zero average loss pins RSI at 100 (overbought, -20);
        // close sits on both collapsed levels, support is checked first (+15)
        assert_eq!(signal.score, -5);
        assert_eq!(signal.recommendation, Recommendation::Neutral);
    }

    #[test]
    fn test_empty_series_fails() {
        let generator = SignalGenerator::with_defaults();
        let series = BarSeries::new("TEST".to_string(), Timeframe::Daily);
        let err = generator.generate_latest(&series).unwrap_err();
        assert!(matches!(
            err,
            IndicatorError::InsufficientData { available: 0, .. }
        ));
    }

    #[test]
    fn test_too_short_for_every_rule_fails() {
        let series = series_from(&[100.0, 101.0, 102.0, 101.0, 100.0], 1.0);
        let generator = SignalGenerator::with_defaults();
        let err = generator.generate_latest(&series).unwrap_err();
        assert!(matches!(
            err,
            IndicatorError::InsufficientData {
                required: 50,
                available: 5
            }
        ));
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let config = ScoringConfig {
            level_tolerance: 2.0,
            ..Default::default()
        };
        assert!(SignalGenerator::new(config).is_err());
    }
}
