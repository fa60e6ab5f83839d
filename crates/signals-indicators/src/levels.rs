//! Rolling support/resistance levels.

use serde::{Deserialize, Serialize};
use signals_core::error::IndicatorError;
use signals_core::traits::OhlcvIndicator;

/// Support and resistance levels for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelsPoint {
    /// Rolling price floor: min(low) over the trailing window
    pub support: f64,
    /// Rolling price ceiling: max(high) over the trailing window
    pub resistance: f64,
}

/// Rolling support/resistance over a trailing lookback window.
///
/// Recomputed per bar, not a single global level.
#[derive(Debug, Clone)]
pub struct SupportResistance {
    period: usize,
}

impl SupportResistance {
    /// Create a rolling support/resistance indicator. The common period is 20.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "Support/resistance period must be greater than 0".to_string(),
            ));
        }
        Ok(Self { period })
    }
}

impl OhlcvIndicator for SupportResistance {
    type Output = LevelsPoint;

    fn calculate_hlc(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<Option<LevelsPoint>>, IndicatorError> {
        self.validate_hlc(high, low, close)?;

        let len = close.len();
        let mut result = vec![None; self.period - 1];
        result.reserve(len - self.period + 1);

        for i in (self.period - 1)..len {
            let start = i + 1 - self.period;
            let resistance = high[start..=i]
                .iter()
                .cloned()
                .fold(f64::NEG_INFINITY, f64::max);
            let support = low[start..=i].iter().cloned().fold(f64::INFINITY, f64::min);
            result.push(Some(LevelsPoint {
                support,
                resistance,
            }));
        }

        Ok(result)
    }

    fn min_len(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "Support/Resistance"
    }
}
