//! Indicator command implementation.

use anyhow::{Context, Result};
use signals_core::types::Timeframe;
use signals_data::CsvBarSource;
use signals_indicators::{compute_indicator, IndicatorKind, IndicatorParams};
use tracing::info;

use crate::cli::IndicatorArgs;

pub fn run(args: IndicatorArgs) -> Result<()> {
    let kind: IndicatorKind = args
        .indicator
        .parse()
        .with_context(|| format!("Unknown indicator '{}'", args.indicator))?;
    let timeframe: Timeframe = args
        .timeframe
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let series = CsvBarSource::new(&args.data)
        .and_then(|source| source.load(&args.symbol, timeframe))
        .with_context(|| format!("Failed to load bars from {}", args.data.display()))?;
    info!(symbol = args.symbol.as_str(), bars = series.len(), "bars loaded");

    let params = IndicatorParams {
        period: args.period,
        fast: args.fast,
        slow: args.slow,
        signal: args.signal_period,
        smooth: args.smooth,
        std_dev: args.std_dev,
    };

    let report = compute_indicator(&series, kind, &params)
        .with_context(|| format!("Failed to compute {}", kind))?;

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => {
            println!("{} ({})", kind, kind.label());
            println!("symbol: {}", report.symbol);
            println!("bars: {}", series.len());
            let json = serde_json::to_value(&report.metadata)?;
            println!("parameters: {}", json);
            println!("values: {}", serde_json::to_string(&report.values)?);
        }
    }

    Ok(())
}
