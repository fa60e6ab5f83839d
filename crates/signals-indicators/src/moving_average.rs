//! Moving average indicators.

use signals_core::error::IndicatorError;
use signals_core::traits::Indicator;

/// Simple Moving Average (SMA).
///
/// Arithmetic mean of the trailing `period` values; undefined for the first
/// `period - 1` indices.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "SMA period must be greater than 0".to_string(),
            ));
        }
        Ok(Self { period })
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Result<Vec<Option<f64>>, IndicatorError> {
        self.validate_data(data)?;

        let period_f64 = self.period as f64;
        let mut result = vec![None; self.period - 1];
        result.reserve(data.len() - self.period + 1);

        // Initial sum, then sliding window
        let mut sum: f64 = data[..self.period].iter().sum();
        result.push(Some(sum / period_f64));

        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            result.push(Some(sum / period_f64));
        }

        Ok(result)
    }

    fn min_len(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Recursive smoothing with multiplier `2 / (period + 1)`. The first defined
/// value, at index `period - 1`, is the SMA of the first `period` values;
/// subsequent values recurse forward from it.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    multiplier: f64,
}

impl Ema {
    /// Create a new EMA with the specified period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "EMA period must be greater than 0".to_string(),
            ));
        }
        let multiplier = 2.0 / (period as f64 + 1.0);
        Ok(Self { period, multiplier })
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Result<Vec<Option<f64>>, IndicatorError> {
        self.validate_data(data)?;

        let mut result = vec![None; self.period - 1];
        result.reserve(data.len() - self.period + 1);

        // Seed with the SMA of the first window
        let mut ema: f64 = data[..self.period].iter().sum::<f64>() / self.period as f64;
        result.push(Some(ema));

        let one_minus_mult = 1.0 - self.multiplier;
        for &price in &data[self.period..] {
            ema = price * self.multiplier + ema * one_minus_mult;
            result.push(Some(ema));
        }

        Ok(result)
    }

    fn min_len(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "EMA"
    }
}
