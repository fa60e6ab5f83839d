//! Volatility indicators.

use serde::{Deserialize, Serialize};
use signals_core::error::IndicatorError;
use signals_core::traits::{Indicator, OhlcvIndicator};

/// Average True Range (ATR).
///
/// Wilder-smoothed average of the True Range, where
/// TR(i) = max(high-low, |high - prev_close|, |low - prev_close|).
/// True-range samples start at index 1, so the first defined ATR value
/// sits at index `period`.
#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
}

impl Atr {
    /// Create a new ATR indicator. The common period is 14.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "ATR period must be greater than 0".to_string(),
            ));
        }
        Ok(Self { period })
    }
}

impl OhlcvIndicator for Atr {
    type Output = f64;

    fn calculate_hlc(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<Option<f64>>, IndicatorError> {
        self.validate_hlc(high, low, close)?;

        let len = close.len();
        let mut tr = Vec::with_capacity(len - 1);
        for i in 1..len {
            let high_low = high[i] - low[i];
            let high_close = (high[i] - close[i - 1]).abs();
            let low_close = (low[i] - close[i - 1]).abs();
            tr.push(high_low.max(high_close).max(low_close));
        }

        let period_f64 = self.period as f64;
        let mut result = vec![None; self.period];
        result.reserve(len - self.period);

        // Initial ATR is the SMA of the first `period` true ranges
        let mut atr: f64 = tr[..self.period].iter().sum::<f64>() / period_f64;
        result.push(Some(atr));

        // Wilder's smoothing
        for &tr_val in &tr[self.period..] {
            atr = (atr * (period_f64 - 1.0) + tr_val) / period_f64;
            result.push(Some(atr));
        }

        Ok(result)
    }

    fn min_len(&self) -> usize {
        self.period + 1
    }

    fn name(&self) -> &str {
        "ATR"
    }
}

/// Bollinger Band values for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerPoint {
    /// Upper band
    pub upper: f64,
    /// Middle band (SMA)
    pub middle: f64,
    /// Lower band
    pub lower: f64,
}

/// Bollinger Bands.
///
/// Middle band is the SMA over the window; upper and lower bands sit at
/// ± `std_dev_multiplier` population standard deviations from it.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl BollingerBands {
    /// Create Bollinger Bands. Conventional parameters are (20, 2.0).
    pub fn new(period: usize, std_dev_multiplier: f64) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "Bollinger period must be greater than 0".to_string(),
            ));
        }
        if std_dev_multiplier <= 0.0 {
            return Err(IndicatorError::InvalidParameter(
                "Bollinger std dev multiplier must be positive".to_string(),
            ));
        }
        Ok(Self {
            period,
            std_dev_multiplier,
        })
    }
}

impl Indicator for BollingerBands {
    type Output = BollingerPoint;

    fn calculate(&self, data: &[f64]) -> Result<Vec<Option<BollingerPoint>>, IndicatorError> {
        self.validate_data(data)?;

        let period_f64 = self.period as f64;
        let mut result = vec![None; self.period - 1];
        result.reserve(data.len() - self.period + 1);

        for window in data.windows(self.period) {
            let mean: f64 = window.iter().sum::<f64>() / period_f64;
            let variance: f64 =
                window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period_f64;
            let half_width = self.std_dev_multiplier * variance.sqrt();

            result.push(Some(BollingerPoint {
                upper: mean + half_width,
                middle: mean,
                lower: mean - half_width,
            }));
        }

        Ok(result)
    }

    fn min_len(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moving_average::Sma;

    #[test]
    fn test_atr_alignment() {
        let atr = Atr::new(3).unwrap();
        let high = vec![10.0, 11.0, 12.0, 11.0, 13.0, 14.0];
        let low = vec![8.0, 9.0, 10.0, 9.0, 11.0, 12.0];
        let close = vec![9.0, 10.0, 11.0, 10.0, 12.0, 13.0];

        let result = atr.calculate_hlc(&high, &low, &close).unwrap();
        assert_eq!(result.len(), close.len());
        assert!(result[..3].iter().all(|v| v.is_none()));
        for value in result.into_iter().flatten() {
            assert!(value > 0.0);
        }
    }

    #[test]
    fn test_atr_insufficient_data() {
        let atr = Atr::new(14).unwrap();
        let bars = vec![10.0; 5];
        let err = atr.calculate_hlc(&bars, &bars, &bars).unwrap_err();
        assert!(matches!(
            err,
            IndicatorError::InsufficientData {
                required: 15,
                available: 5
            }
        ));
    }

    #[test]
    fn test_atr_mismatched_lengths() {
        let atr = Atr::new(3).unwrap();
        let err = atr
            .calculate_hlc(&[1.0, 2.0], &[1.0], &[1.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidParameter(_)));
    }

    #[test]
    fn test_bollinger_middle_equals_sma() {
        let bb = BollingerBands::new(5, 2.0).unwrap();
        let sma = Sma::new(5).unwrap();
        let data: Vec<f64> = (0..30)
            .map(|i| 100.0 + (i as f64 * 0.1).sin() * 5.0)
            .collect();

        let bands = bb.calculate(&data).unwrap();
        let means = sma.calculate(&data).unwrap();

        for (band, mean) in bands.iter().zip(means.iter()) {
            match (band, mean) {
                (Some(b), Some(m)) => assert!((b.middle - m).abs() < 1e-10),
                (None, None) => {}
                _ => panic!("band/SMA alignment mismatch"),
            }
        }
    }

    #[test]
    fn test_bollinger_band_ordering() {
        let bb = BollingerBands::new(5, 2.0).unwrap();
        let data: Vec<f64> = (0..20)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 3.0)
            .collect();

        for point in bb.calculate(&data).unwrap().into_iter().flatten() {
            assert!(point.upper >= point.middle);
            assert!(point.middle >= point.lower);
        }
    }

    #[test]
    fn test_bollinger_constant_series_collapses() {
        let bb = BollingerBands::new(5, 2.0).unwrap();
        let data = vec![100.0; 8];

        for point in bb.calculate(&data).unwrap().into_iter().flatten() {
            assert!((point.upper - 100.0).abs() < 1e-10);
            assert!((point.lower - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_bollinger_invalid_params() {
        assert!(BollingerBands::new(0, 2.0).is_err());
        assert!(BollingerBands::new(20, 0.0).is_err());
        assert!(BollingerBands::new(20, -1.0).is_err());
    }

    #[test]
    fn test_bollinger_single_bar_window() {
        // A 1-bar window has zero standard deviation, so every band
        // collapses onto the price itself.
        let bb = BollingerBands::new(1, 2.0).unwrap();
        let points = bb.calculate(&[10.0, 11.0, 12.0]).unwrap();

        assert_eq!(points.len(), 3);
        for (point, &price) in points.iter().zip(&[10.0, 11.0, 12.0]) {
            let p = point.unwrap();
            assert_eq!(p.upper, price);
            assert_eq!(p.middle, price);
            assert_eq!(p.lower, price);
        }
    }
}
