//! Signal command implementation.

use anyhow::{Context, Result};
use signals_core::types::Timeframe;
use signals_data::CsvBarSource;
use signals_scoring::{ScoringConfig, SignalGenerator};
use tracing::info;

use crate::cli::SignalArgs;

pub fn run(args: SignalArgs) -> Result<()> {
    let timeframe: Timeframe = args
        .timeframe
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let series = CsvBarSource::new(&args.data)
        .and_then(|source| source.load(&args.symbol, timeframe))
        .with_context(|| format!("Failed to load bars from {}", args.data.display()))?;
    info!(symbol = args.symbol.as_str(), bars = series.len(), "bars loaded");

    let config = match &args.policy {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read policy file {}", path.display()))?;
            toml::from_str::<ScoringConfig>(&contents)
                .with_context(|| format!("Invalid policy file {}", path.display()))?
        }
        None => ScoringConfig::default(),
    };

    let generator = SignalGenerator::new(config).context("Invalid scoring policy")?;
    let signal = generator
        .generate_latest(&series)
        .context("No signal could be computed")?;

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&signal)?),
        _ => {
            println!("{} @ {:.2}", signal.symbol, signal.price);
            println!("score: {:+}", signal.score);
            println!("recommendation: {}", signal.recommendation);
            println!("contributing signals:");
            for reason in &signal.contributing_signals {
                println!("  [{:?}] {}", reason.direction, reason.description);
            }
        }
    }

    Ok(())
}
