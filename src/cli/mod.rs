//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "signals")]
#[command(author, version, about = "Technical indicator engine and rule-based signal scoring")]
pub struct Cli {
    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute one indicator over a CSV bar file
    Indicator(IndicatorArgs),
    /// Generate a scored trading signal from a CSV bar file
    Signal(SignalArgs),
    /// List the indicator catalog
    List,
}

#[derive(clap::Args)]
pub struct IndicatorArgs {
    /// CSV file with OHLCV bars
    #[arg(short, long)]
    pub data: PathBuf,

    /// Indicator name (SMA, EMA, RSI, MACD, BOLLINGER, ATR, STOCHASTIC, SUPPORT_RESISTANCE)
    #[arg(short, long)]
    pub indicator: String,

    /// Symbol label for the output
    #[arg(short, long, default_value = "DATA")]
    pub symbol: String,

    /// Timeframe of the bars
    #[arg(short, long, default_value = "1d")]
    pub timeframe: String,

    /// Lookback period override
    #[arg(short, long)]
    pub period: Option<usize>,

    /// MACD fast period override
    #[arg(long)]
    pub fast: Option<usize>,

    /// MACD slow period override
    #[arg(long)]
    pub slow: Option<usize>,

    /// MACD signal period override
    #[arg(long)]
    pub signal_period: Option<usize>,

    /// Stochastic %D smoothing override
    #[arg(long)]
    pub smooth: Option<usize>,

    /// Bollinger standard-deviation multiplier override
    #[arg(long)]
    pub std_dev: Option<f64>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}

#[derive(clap::Args)]
pub struct SignalArgs {
    /// CSV file with OHLCV bars
    #[arg(short, long)]
    pub data: PathBuf,

    /// Symbol label for the output
    #[arg(short, long, default_value = "DATA")]
    pub symbol: String,

    /// Timeframe of the bars
    #[arg(short, long, default_value = "1d")]
    pub timeframe: String,

    /// Scoring policy file (TOML); defaults to the built-in policy
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}
