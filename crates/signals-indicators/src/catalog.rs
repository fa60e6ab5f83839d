//! Named indicator catalog and dispatch.
//!
//! The service layer addresses indicators by name with loosely-typed
//! parameters; this module resolves names, applies per-indicator defaults,
//! and returns a serializable report of aligned value arrays plus metadata.

use serde::{Deserialize, Serialize};
use signals_core::error::IndicatorError;
use signals_core::traits::{Indicator, OhlcvIndicator};
use signals_core::types::BarSeries;
use std::fmt;
use std::str::FromStr;

use crate::levels::SupportResistance;
use crate::momentum::{Macd, Rsi, Stochastic};
use crate::moving_average::{Ema, Sma};
use crate::volatility::{Atr, BollingerBands};

/// Default moving-average period (SMA/EMA/Bollinger/support-resistance).
pub const DEFAULT_MA_PERIOD: usize = 20;
/// Default RSI period.
pub const DEFAULT_RSI_PERIOD: usize = 14;
/// Default ATR period.
pub const DEFAULT_ATR_PERIOD: usize = 14;
/// Default stochastic lookback period.
pub const DEFAULT_STOCH_PERIOD: usize = 14;
/// Default stochastic %D smoothing.
pub const DEFAULT_STOCH_SMOOTH: usize = 3;
/// Default MACD periods (fast, slow, signal).
pub const DEFAULT_MACD_PERIODS: (usize, usize, usize) = (12, 26, 9);
/// Default Bollinger standard-deviation multiplier.
pub const DEFAULT_BOLLINGER_STD_DEV: f64 = 2.0;

/// The fixed indicator catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorKind {
    Sma,
    Ema,
    Rsi,
    Macd,
    Bollinger,
    Atr,
    Stochastic,
    SupportResistance,
}

impl IndicatorKind {
    /// All catalog entries in a stable order.
    pub fn all() -> &'static [IndicatorKind] {
        &[
            IndicatorKind::Sma,
            IndicatorKind::Ema,
            IndicatorKind::Rsi,
            IndicatorKind::Macd,
            IndicatorKind::Bollinger,
            IndicatorKind::Atr,
            IndicatorKind::Stochastic,
            IndicatorKind::SupportResistance,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKind::Sma => "Simple Moving Average",
            IndicatorKind::Ema => "Exponential Moving Average",
            IndicatorKind::Rsi => "Relative Strength Index",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::Bollinger => "Bollinger Bands",
            IndicatorKind::Atr => "Average True Range",
            IndicatorKind::Stochastic => "Stochastic Oscillator",
            IndicatorKind::SupportResistance => "Support & Resistance",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IndicatorKind::Sma => "SMA",
            IndicatorKind::Ema => "EMA",
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::Bollinger => "BOLLINGER",
            IndicatorKind::Atr => "ATR",
            IndicatorKind::Stochastic => "STOCHASTIC",
            IndicatorKind::SupportResistance => "SUPPORT_RESISTANCE",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for IndicatorKind {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SMA" => Ok(IndicatorKind::Sma),
            "EMA" => Ok(IndicatorKind::Ema),
            "RSI" => Ok(IndicatorKind::Rsi),
            "MACD" => Ok(IndicatorKind::Macd),
            "BOLLINGER" | "BB" => Ok(IndicatorKind::Bollinger),
            "ATR" => Ok(IndicatorKind::Atr),
            "STOCHASTIC" | "STOCH" => Ok(IndicatorKind::Stochastic),
            "SUPPORT_RESISTANCE" | "SR" => Ok(IndicatorKind::SupportResistance),
            _ => Err(IndicatorError::InvalidParameter(format!(
                "Unknown indicator: {}",
                s
            ))),
        }
    }
}

/// Optional parameter overrides; unset fields fall back to the
/// per-indicator defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub period: Option<usize>,
    pub fast: Option<usize>,
    pub slow: Option<usize>,
    pub signal: Option<usize>,
    pub smooth: Option<usize>,
    pub std_dev: Option<f64>,
}

impl IndicatorParams {
    /// Override just the lookback period.
    pub fn with_period(period: usize) -> Self {
        Self {
            period: Some(period),
            ..Default::default()
        }
    }
}

/// Effective parameters echoed back with the results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slow: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overbought: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oversold: Option<f64>,
}

/// Aligned value arrays for one indicator. Undefined leading entries
/// serialize as `null`, never as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValues {
    Series(Vec<Option<f64>>),
    Macd {
        macd: Vec<Option<f64>>,
        signal: Vec<Option<f64>>,
        histogram: Vec<Option<f64>>,
    },
    Bands {
        upper: Vec<Option<f64>>,
        middle: Vec<Option<f64>>,
        lower: Vec<Option<f64>>,
    },
    Stochastic {
        k: Vec<Option<f64>>,
        d: Vec<Option<f64>>,
    },
    Levels {
        support: Vec<Option<f64>>,
        resistance: Vec<Option<f64>>,
    },
}

/// Result of one catalog computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorReport {
    pub symbol: String,
    pub indicator: IndicatorKind,
    pub values: IndicatorValues,
    pub metadata: IndicatorMetadata,
}

/// Compute one catalog indicator over a bar series.
///
/// # Errors
/// `InsufficientData` when the series is too short for any defined output
/// point; `InvalidParameter` for bad periods or fast >= slow.
pub fn compute_indicator(
    series: &BarSeries,
    kind: IndicatorKind,
    params: &IndicatorParams,
) -> Result<IndicatorReport, IndicatorError> {
    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();

    let (values, metadata) = match kind {
        IndicatorKind::Sma => {
            let period = params.period.unwrap_or(DEFAULT_MA_PERIOD);
            let values = Sma::new(period)?.calculate(&closes)?;
            (
                IndicatorValues::Series(values),
                IndicatorMetadata {
                    period: Some(period),
                    ..Default::default()
                },
            )
        }
        IndicatorKind::Ema => {
            let period = params.period.unwrap_or(DEFAULT_MA_PERIOD);
            let values = Ema::new(period)?.calculate(&closes)?;
            (
                IndicatorValues::Series(values),
                IndicatorMetadata {
                    period: Some(period),
                    ..Default::default()
                },
            )
        }
        IndicatorKind::Rsi => {
            let period = params.period.unwrap_or(DEFAULT_RSI_PERIOD);
            let values = Rsi::new(period)?.calculate(&closes)?;
            (
                IndicatorValues::Series(values),
                IndicatorMetadata {
                    period: Some(period),
                    overbought: Some(Rsi::OVERBOUGHT),
                    oversold: Some(Rsi::OVERSOLD),
                    ..Default::default()
                },
            )
        }
        IndicatorKind::Macd => {
            let (default_fast, default_slow, default_signal) = DEFAULT_MACD_PERIODS;
            let fast = params.fast.unwrap_or(default_fast);
            let slow = params.slow.unwrap_or(default_slow);
            let signal = params.signal.unwrap_or(default_signal);
            let points = Macd::new(fast, slow, signal)?.calculate(&closes)?;
            (
                IndicatorValues::Macd {
                    macd: points.iter().map(|p| p.map(|p| p.macd)).collect(),
                    signal: points.iter().map(|p| p.and_then(|p| p.signal)).collect(),
                    histogram: points.iter().map(|p| p.and_then(|p| p.histogram)).collect(),
                },
                IndicatorMetadata {
                    fast: Some(fast),
                    slow: Some(slow),
                    signal: Some(signal),
                    ..Default::default()
                },
            )
        }
        IndicatorKind::Bollinger => {
            let period = params.period.unwrap_or(DEFAULT_MA_PERIOD);
            let std_dev = params.std_dev.unwrap_or(DEFAULT_BOLLINGER_STD_DEV);
            let points = BollingerBands::new(period, std_dev)?.calculate(&closes)?;
            (
                IndicatorValues::Bands {
                    upper: points.iter().map(|p| p.map(|p| p.upper)).collect(),
                    middle: points.iter().map(|p| p.map(|p| p.middle)).collect(),
                    lower: points.iter().map(|p| p.map(|p| p.lower)).collect(),
                },
                IndicatorMetadata {
                    period: Some(period),
                    std_dev: Some(std_dev),
                    ..Default::default()
                },
            )
        }
        IndicatorKind::Atr => {
            let period = params.period.unwrap_or(DEFAULT_ATR_PERIOD);
            let values = Atr::new(period)?.calculate_hlc(&highs, &lows, &closes)?;
            (
                IndicatorValues::Series(values),
                IndicatorMetadata {
                    period: Some(period),
                    ..Default::default()
                },
            )
        }
        IndicatorKind::Stochastic => {
            let period = params.period.unwrap_or(DEFAULT_STOCH_PERIOD);
            let smooth = params.smooth.unwrap_or(DEFAULT_STOCH_SMOOTH);
            let points =
                Stochastic::new(period, smooth)?.calculate_hlc(&highs, &lows, &closes)?;
            (
                IndicatorValues::Stochastic {
                    k: points.iter().map(|p| p.map(|p| p.k)).collect(),
                    d: points.iter().map(|p| p.and_then(|p| p.d)).collect(),
                },
                IndicatorMetadata {
                    period: Some(period),
                    smooth: Some(smooth),
                    ..Default::default()
                },
            )
        }
        IndicatorKind::SupportResistance => {
            let period = params.period.unwrap_or(DEFAULT_MA_PERIOD);
            let points =
                SupportResistance::new(period)?.calculate_hlc(&highs, &lows, &closes)?;
            (
                IndicatorValues::Levels {
                    support: points.iter().map(|p| p.map(|p| p.support)).collect(),
                    resistance: points.iter().map(|p| p.map(|p| p.resistance)).collect(),
                },
                IndicatorMetadata {
                    period: Some(period),
                    ..Default::default()
                },
            )
        }
    };

    Ok(IndicatorReport {
        symbol: series.symbol.clone(),
        indicator: kind,
        values,
        metadata,
    })
}
