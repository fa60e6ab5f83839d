//! Signal generation by weighted rule aggregation.
//!
//! Consumes indicator readings at the latest bar and produces a bounded
//! score in [-100, 100], a recommendation label, and the ordered list of
//! contributing reasons. Rules run in a fixed order so tie-breaks and
//! score accumulation are reproducible; a rule whose indicator lacks
//! history is skipped rather than failing the request.

mod config;
mod generator;

pub use config::ScoringConfig;
pub use generator::SignalGenerator;
