//! Indicator trait definitions.

use crate::error::IndicatorError;

/// Trait for technical indicators computed over a single price series
/// (typically closes).
///
/// Outputs are aligned 1:1 by index to the input: entries without enough
/// trailing history are `None`, never a fabricated zero. The output vector
/// always has the same length as the input.
pub trait Indicator: Send + Sync {
    /// The per-bar output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// # Errors
    /// Returns [`IndicatorError::InsufficientData`] when the series is too
    /// short for even a single defined output point.
    fn calculate(&self, data: &[f64]) -> Result<Vec<Option<Self::Output>>, IndicatorError>;

    /// Minimum number of data points required for one defined output.
    fn min_len(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate that there's enough data for at least one output point.
    fn validate_data(&self, data: &[f64]) -> Result<(), IndicatorError> {
        if data.len() < self.min_len() {
            return Err(IndicatorError::InsufficientData {
                required: self.min_len(),
                available: data.len(),
            });
        }
        Ok(())
    }
}

/// Indicator that needs high/low/close data (not just closes).
pub trait OhlcvIndicator: Send + Sync {
    /// The per-bar output type of the indicator.
    type Output;

    /// Calculate indicator values from high/low/close series of equal length.
    ///
    /// # Errors
    /// Returns [`IndicatorError::InsufficientData`] when the series is too
    /// short for even a single defined output point, and
    /// [`IndicatorError::InvalidParameter`] when the slices disagree in length.
    fn calculate_hlc(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<Option<Self::Output>>, IndicatorError>;

    /// Minimum number of bars required for one defined output.
    fn min_len(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate slice lengths and history depth.
    fn validate_hlc(&self, high: &[f64], low: &[f64], close: &[f64]) -> Result<(), IndicatorError> {
        if high.len() != low.len() || low.len() != close.len() {
            return Err(IndicatorError::InvalidParameter(
                "high, low, and close series must have the same length".to_string(),
            ));
        }
        if close.len() < self.min_len() {
            return Err(IndicatorError::InsufficientData {
                required: self.min_len(),
                available: close.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WindowSum {
        period: usize,
    }

    impl Indicator for WindowSum {
        type Output = f64;

        fn calculate(&self, data: &[f64]) -> Result<Vec<Option<f64>>, IndicatorError> {
            self.validate_data(data)?;
            let mut out = vec![None; self.period - 1];
            out.extend(data.windows(self.period).map(|w| Some(w.iter().sum())));
            Ok(out)
        }

        fn min_len(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "WindowSum"
        }
    }

    #[test]
    fn test_insufficient_data() {
        let indicator = WindowSum { period: 5 };
        let err = indicator.calculate(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::InsufficientData {
                required: 5,
                available: 3
            }
        );
    }

    #[test]
    fn test_aligned_output() {
        let indicator = WindowSum { period: 3 };
        let result = indicator.calculate(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(&result[..2], &[None, None]);
        assert_eq!(result[2], Some(6.0));
        assert_eq!(result[4], Some(12.0));
    }
}
