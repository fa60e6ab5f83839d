//! List catalog command.

use anyhow::Result;
use signals_indicators::IndicatorKind;

pub fn run() -> Result<()> {
    println!("Indicator Catalog");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for kind in IndicatorKind::all() {
        println!("  {:<20} {}", kind.to_string(), kind.label());
    }

    println!();
    println!("Use `signals indicator --indicator <name>` to compute one.");

    Ok(())
}
