//! Scan cycle runner: admission gate, token iteration, best selection

use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    arbitrage::detector::check_token,
    config::Config,
    quotes::QuoteSource,
    types::{CycleOutcome, Opportunity, ScanCycle},
};

/// Runs one scan cycle over the token universe.
///
/// The gas-price admission gate is applied first: when the sampled price is
/// above the configured ceiling no quote is issued at all. Tokens are scanned
/// strictly sequentially so the first-found-wins tie-break is deterministic;
/// the shutdown signal is honored between tokens.
#[allow(clippy::too_many_arguments)]
pub async fn run_scan_cycle(
    sequence: u64,
    router_a: &dyn QuoteSource,
    router_b: &dyn QuoteSource,
    borrowed_asset: Address,
    tokens: &[(&str, Address)],
    amount_in: U256,
    gas_price_gwei: Decimal,
    config: &Config,
    shutdown: &watch::Receiver<bool>,
) -> ScanCycle {
    info!("🔍 Scan #{} - checking for arbitrage opportunities...", sequence);
    info!("⛽ Current gas price: {:.2} gwei", gas_price_gwei);

    if gas_price_gwei > Decimal::from(config.max_gas_price_gwei) {
        info!(
            "⛽ Gas price too high ({:.2} gwei, ceiling {} gwei). Skipping this scan.",
            gas_price_gwei, config.max_gas_price_gwei
        );
        return ScanCycle::skipped(sequence, gas_price_gwei);
    }

    let mut opportunities: Vec<Opportunity> = Vec::new();
    let mut best: Option<Opportunity> = None;

    for (token_name, token) in tokens {
        if *shutdown.borrow() {
            info!("Shutdown requested, stopping token scan early");
            break;
        }

        debug!("Checking {} for arbitrage opportunities...", token_name);
        let candidates = check_token(
            router_a,
            router_b,
            borrowed_asset,
            *token,
            token_name,
            amount_in,
            config.flash_loan_fee_bps,
        )
        .await;

        for candidate in candidates {
            // Strict greater-than: ties keep the earlier find.
            if best
                .as_ref()
                .map_or(true, |b| candidate.profit_percent > b.profit_percent)
            {
                best = Some(candidate.clone());
            }
            opportunities.push(candidate);
        }
    }

    let outcome = match &best {
        None => {
            info!("No arbitrage opportunities found");
            CycleOutcome::NoOpportunity
        }
        Some(b) if b.profit_percent > config.min_profit_percent => {
            info!(
                "🏆 Best opportunity: {} at {:.2}% via {}",
                b.token_name, b.profit_percent, b.route
            );
            CycleOutcome::Actionable
        }
        Some(b) => {
            info!(
                "Best opportunity {:.2}% with {} is below the {:.2}% threshold",
                b.profit_percent, b.token_name, config.min_profit_percent
            );
            CycleOutcome::BelowThreshold
        }
    };

    ScanCycle {
        sequence,
        gas_price_gwei,
        opportunities,
        best,
        outcome,
    }
}
