//! Scan cycle bookkeeping

use rust_decimal::Decimal;

use super::Opportunity;

/// Outcome of one scan cycle, kept distinct for observability: a cycle that
/// found nothing is not the same as one that found candidates below the
/// profit threshold, or one the gas gate rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    SkippedGasPrice,
    NoOpportunity,
    BelowThreshold,
    Actionable,
}

/// Ephemeral value describing one pass over the token universe.
#[derive(Debug, Clone)]
pub struct ScanCycle {
    pub sequence: u64,
    pub gas_price_gwei: Decimal,
    pub opportunities: Vec<Opportunity>,
    pub best: Option<Opportunity>,
    pub outcome: CycleOutcome,
}

impl ScanCycle {
    pub fn skipped(sequence: u64, gas_price_gwei: Decimal) -> Self {
        Self {
            sequence,
            gas_price_gwei,
            opportunities: Vec::new(),
            best: None,
            outcome: CycleOutcome::SkippedGasPrice,
        }
    }
}
