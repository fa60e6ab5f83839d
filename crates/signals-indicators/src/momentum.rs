//! Momentum indicators.

use serde::{Deserialize, Serialize};
use signals_core::error::IndicatorError;
use signals_core::traits::{Indicator, OhlcvIndicator};

use crate::moving_average::{Ema, Sma};

/// Relative Strength Index (RSI).
///
/// Wilder-smoothed average gain over average loss, mapped onto [0, 100].
/// The first defined value sits at index `period` since `period` price
/// changes are needed. When the average loss is exactly zero the RSI is 100.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Conventional overbought level reported alongside RSI values.
    pub const OVERBOUGHT: f64 = 70.0;
    /// Conventional oversold level reported alongside RSI values.
    pub const OVERSOLD: f64 = 30.0;

    /// Create a new RSI indicator. Common periods are 14 or 9.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "RSI period must be greater than 0".to_string(),
            ));
        }
        Ok(Self { period })
    }

    fn rs_to_rsi(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        }
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Result<Vec<Option<f64>>, IndicatorError> {
        self.validate_data(data)?;

        let mut gains = Vec::with_capacity(data.len() - 1);
        let mut losses = Vec::with_capacity(data.len() - 1);
        for i in 1..data.len() {
            let change = data[i] - data[i - 1];
            gains.push(change.max(0.0));
            losses.push((-change).max(0.0));
        }

        let period_f64 = self.period as f64;
        let mut result = vec![None; self.period];
        result.reserve(data.len() - self.period);

        let mut avg_gain: f64 = gains[..self.period].iter().sum::<f64>() / period_f64;
        let mut avg_loss: f64 = losses[..self.period].iter().sum::<f64>() / period_f64;
        result.push(Some(Self::rs_to_rsi(avg_gain, avg_loss)));

        // Wilder's smoothing: avg = (prev_avg * (period-1) + value) / period
        for i in self.period..gains.len() {
            avg_gain = (avg_gain * (period_f64 - 1.0) + gains[i]) / period_f64;
            avg_loss = (avg_loss * (period_f64 - 1.0) + losses[i]) / period_f64;
            result.push(Some(Self::rs_to_rsi(avg_gain, avg_loss)));
        }

        Ok(result)
    }

    fn min_len(&self) -> usize {
        self.period + 1 // Need `period` price changes
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// MACD values for one bar.
///
/// The MACD line becomes defined before its signal line does, so `signal`
/// and `histogram` are optional within an otherwise defined point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of the MACD line)
    pub signal: Option<f64>,
    /// Histogram (MACD - signal)
    pub histogram: Option<f64>,
}

/// MACD (Moving Average Convergence Divergence).
#[derive(Debug, Clone)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Macd {
    /// Create a MACD indicator. Conventional periods are (12, 26, 9).
    pub fn new(fast: usize, slow: usize, signal: usize) -> Result<Self, IndicatorError> {
        if fast == 0 || slow == 0 || signal == 0 {
            return Err(IndicatorError::InvalidParameter(
                "MACD periods must be greater than 0".to_string(),
            ));
        }
        if fast >= slow {
            return Err(IndicatorError::InvalidParameter(format!(
                "MACD fast period ({}) must be less than slow period ({})",
                fast, slow
            )));
        }
        Ok(Self {
            fast_period: fast,
            slow_period: slow,
            signal_period: signal,
            fast: Ema::new(fast)?,
            slow: Ema::new(slow)?,
            signal: Ema::new(signal)?,
        })
    }

    /// Fast EMA period.
    pub fn fast_period(&self) -> usize {
        self.fast_period
    }

    /// Slow EMA period.
    pub fn slow_period(&self) -> usize {
        self.slow_period
    }

    /// Signal EMA period.
    pub fn signal_period(&self) -> usize {
        self.signal_period
    }
}

impl Indicator for Macd {
    type Output = MacdPoint;

    fn calculate(&self, data: &[f64]) -> Result<Vec<Option<MacdPoint>>, IndicatorError> {
        self.validate_data(data)?;

        let fast_ema = self.fast.calculate(data)?;
        let slow_ema = self.slow.calculate(data)?;

        // MACD line is defined wherever the slow EMA is
        let macd_line: Vec<Option<f64>> = fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(f, s)| match (f, s) {
                (Some(f), Some(s)) => Some(f - s),
                _ => None,
            })
            .collect();

        let first_defined = self.slow_period - 1;
        let defined: Vec<f64> = macd_line.iter().filter_map(|v| *v).collect();

        // Signal line is the EMA of the defined MACD values, spliced back
        // at the MACD line's first defined index
        let signal_line: Vec<Option<f64>> = if defined.len() >= self.signal_period {
            self.signal.calculate(&defined)?
        } else {
            vec![None; defined.len()]
        };

        let result = macd_line
            .iter()
            .enumerate()
            .map(|(i, m)| {
                m.map(|macd| {
                    let signal = signal_line
                        .get(i - first_defined)
                        .copied()
                        .flatten();
                    MacdPoint {
                        macd,
                        signal,
                        histogram: signal.map(|s| macd - s),
                    }
                })
            })
            .collect();

        Ok(result)
    }

    fn min_len(&self) -> usize {
        self.slow_period
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

/// Stochastic oscillator values for one bar.
///
/// %K becomes defined before its %D smoothing does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticPoint {
    /// %K: position of the close within the trailing high/low range
    pub k: f64,
    /// %D: SMA of %K over the smoothing period
    pub d: Option<f64>,
}

/// Stochastic oscillator.
///
/// %K = 100 × (close - lowest_low) / (highest_high - lowest_low) over the
/// trailing period, with the flat-market convention %K = 50 when the range
/// is zero. %D is the SMA of %K over `smooth` bars.
#[derive(Debug, Clone)]
pub struct Stochastic {
    period: usize,
    smooth: usize,
}

impl Stochastic {
    /// Create a stochastic oscillator. Conventional parameters are (14, 3).
    pub fn new(period: usize, smooth: usize) -> Result<Self, IndicatorError> {
        if period == 0 || smooth == 0 {
            return Err(IndicatorError::InvalidParameter(
                "Stochastic periods must be greater than 0".to_string(),
            ));
        }
        Ok(Self { period, smooth })
    }
}

impl OhlcvIndicator for Stochastic {
    type Output = StochasticPoint;

    fn calculate_hlc(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<Option<StochasticPoint>>, IndicatorError> {
        self.validate_hlc(high, low, close)?;

        let len = close.len();
        let mut k_values: Vec<Option<f64>> = vec![None; self.period - 1];
        k_values.reserve(len - self.period + 1);

        for i in (self.period - 1)..len {
            let start = i + 1 - self.period;
            let highest = high[start..=i].iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let lowest = low[start..=i].iter().cloned().fold(f64::INFINITY, f64::min);

            let range = highest - lowest;
            let k = if range == 0.0 {
                50.0 // Flat market convention
            } else {
                100.0 * (close[i] - lowest) / range
            };
            k_values.push(Some(k));
        }

        let first_defined = self.period - 1;
        let defined: Vec<f64> = k_values.iter().filter_map(|v| *v).collect();

        let d_values: Vec<Option<f64>> = if defined.len() >= self.smooth {
            Sma::new(self.smooth)?.calculate(&defined)?
        } else {
            vec![None; defined.len()]
        };

        let result = k_values
            .iter()
            .enumerate()
            .map(|(i, k)| {
                k.map(|k| StochasticPoint {
                    k,
                    d: d_values.get(i - first_defined).copied().flatten(),
                })
            })
            .collect();

        Ok(result)
    }

    fn min_len(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "Stochastic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_bounded() {
        let rsi = Rsi::new(14).unwrap();
        let data: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();

        let result = rsi.calculate(&data).unwrap();
        assert_eq!(result.len(), data.len());
        assert!(result[..14].iter().all(|v| v.is_none()));

        for value in result.into_iter().flatten() {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_rsi_monotonic_rise_is_100() {
        let rsi = Rsi::new(14).unwrap();
        let data: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let result = rsi.calculate(&data).unwrap();

        // No losses in the window, so RSI pins at 100
        for value in result.into_iter().flatten() {
            assert!((value - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_rsi_all_losses_is_zero() {
        let rsi = Rsi::new(5).unwrap();
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.calculate(&data).unwrap();

        assert!(result[5].unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let rsi = Rsi::new(14).unwrap();
        let err = rsi.calculate(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
        assert!(matches!(
            err,
            IndicatorError::InsufficientData {
                required: 15,
                available: 5
            }
        ));
    }

    #[test]
    fn test_macd_alignment_and_uptrend() {
        let macd = Macd::new(12, 26, 9).unwrap();
        let data: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let result = macd.calculate(&data).unwrap();

        assert_eq!(result.len(), data.len());
        assert!(result[..25].iter().all(|v| v.is_none()));
        assert!(result[25].is_some());
        // Signal line needs another signal_period - 1 bars
        assert!(result[25].unwrap().signal.is_none());
        let last = result.last().unwrap().unwrap();
        assert!(last.macd > 0.0);
        let signal = last.signal.unwrap();
        assert!((last.histogram.unwrap() - (last.macd - signal)).abs() < 1e-10);
    }

    #[test]
    fn test_macd_fast_must_be_less_than_slow() {
        assert!(matches!(
            Macd::new(26, 12, 9),
            Err(IndicatorError::InvalidParameter(_))
        ));
        assert!(Macd::new(12, 26, 9).is_ok());
    }

    #[test]
    fn test_stochastic_bounded() {
        let stoch = Stochastic::new(14, 3).unwrap();
        let high: Vec<f64> = (0..30).map(|i| 105.0 + i as f64).collect();
        let low: Vec<f64> = (0..30).map(|i| 95.0 + i as f64).collect();
        let close: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();

        let result = stoch.calculate_hlc(&high, &low, &close).unwrap();
        assert_eq!(result.len(), close.len());

        for point in result.into_iter().flatten() {
            assert!((0.0..=100.0).contains(&point.k));
            if let Some(d) = point.d {
                assert!((0.0..=100.0).contains(&d));
            }
        }
    }

    #[test]
    fn test_stochastic_flat_market_is_50() {
        let stoch = Stochastic::new(5, 3).unwrap();
        let flat = vec![100.0; 10];

        let result = stoch.calculate_hlc(&flat, &flat, &flat).unwrap();
        for point in result.into_iter().flatten() {
            assert!((point.k - 50.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_stochastic_close_at_high() {
        let stoch = Stochastic::new(5, 3).unwrap();
        let high = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0];
        let low = vec![5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
        let close = high.clone();

        let result = stoch.calculate_hlc(&high, &low, &close).unwrap();
        assert!((result.last().unwrap().unwrap().k - 100.0).abs() < 1e-10);
    }
}
