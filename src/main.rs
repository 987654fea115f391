//! Flash-Loan Arbitrage Bot - Main Entry Point
//!
//! Scans two DEX routers for round-trip price discrepancies and executes the
//! best one through a flash-loan arbitrage contract.

use alloy::primitives::U256;
use anyhow::Result;
use flashloan_arb_bot::*;
use flashloan_arb_bot::decision::{AutoPolicy, ConfirmationRequest, DecisionPolicy, InteractivePolicy};
use flashloan_arb_bot::execution::ExecutionEngine;
use flashloan_arb_bot::quotes::RouterQuoter;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("==================================================");
    info!("🏦 Flash Loan Arbitrage Bot v0.3.0");
    info!("==================================================");
    info!("📋 Configuration:");
    info!("   Scan Interval: {}s", config.scan_interval_secs);
    info!("   Flash Loan Amount: {} ETH", config.flash_loan_amount_eth);
    info!("   Min Profit: {}%", config.min_profit_percent);
    info!("   Max Gas Price: {} gwei", config.max_gas_price_gwei);
    info!("   Flash Loan Fee: {} bps", config.flash_loan_fee_bps);
    info!("   Auto-execute: {}", if config.auto_execute { "ON" } else { "OFF" });
    info!("   Execution: {}", if config.enable_execution { "ENABLED" } else { "SCAN-ONLY" });
    info!("   Tokens scanned: {}", TOKENS_MAINNET.len());

    // Validate configuration
    if config.flash_loan_amount_eth < config::MIN_FLASH_LOAN_ETH
        || config.flash_loan_amount_eth > config::MAX_FLASH_LOAN_ETH
    {
        return Err(anyhow::anyhow!(
            "Flash loan amount out of bounds: {} ETH",
            config.flash_loan_amount_eth
        ));
    }

    // Setup network provider and the two quote sources
    let provider = network::setup_mainnet_provider(&config).await?;
    let router_a = RouterQuoter::new("UniswapV2", UNISWAP_V2_ROUTER, provider.clone());
    let router_b = RouterQuoter::new("SushiSwap", SUSHISWAP_ROUTER, provider.clone());

    let engine = if config.enable_execution {
        let engine = ExecutionEngine::new(provider.clone(), &config).await?;
        engine.startup_checks().await?;
        info!("🔐 Execution engine ready (sender: {:#x})", engine.sender());
        Some(engine)
    } else {
        info!("👀 Scan-only mode: opportunities are reported, never executed");
        None
    };

    let policy: Box<dyn DecisionPolicy> = if config.auto_execute {
        Box::new(AutoPolicy)
    } else {
        Box::new(InteractivePolicy)
    };

    // Setup shutdown handler
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        info!("\n📛 Received shutdown signal (Ctrl+C)...");
        let _ = shutdown_tx.send(true);
    });

    info!("\n🚀 Starting scan loop...\n");

    // Outer restart loop: a cycle-fatal error cools down and restarts the
    // scan loop with fresh state.
    let mut restart_count: u32 = 0;
    loop {
        match run_scan_loop(
            &provider,
            &router_a,
            &router_b,
            engine.as_ref(),
            policy.as_ref(),
            &config,
            shutdown_rx.clone(),
        )
        .await
        {
            Ok(()) => break,
            Err(e) => {
                restart_count += 1;
                error!("💥 Scan loop crashed (restart #{}): {:#}", restart_count, e);
                info!("Restarting in {}s...", config::RESTART_COOLDOWN_SECS);

                let mut rx = shutdown_rx.clone();
                tokio::select! {
                    _ = tokio::time::sleep(Duration::from_secs(config::RESTART_COOLDOWN_SECS)) => {}
                    _ = rx.changed() => {}
                }
                if *shutdown_rx.borrow() {
                    info!("Shutdown during restart cooldown, exiting");
                    break;
                }
            }
        }
    }

    info!("Bot stopped.");
    Ok(())
}

/// Scan loop state; rebuilt from scratch after every restart.
struct ScanLoopState {
    started: Instant,
    scan_count: u64,
    total_opportunities: u64,
    actionable_cycles: u64,
    execution_count: u64,
    successful_executions: u64,
    total_expected_profit_weth: Decimal,
    records: Vec<ExecutionRecord>,
}

impl ScanLoopState {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            scan_count: 0,
            total_opportunities: 0,
            actionable_cycles: 0,
            execution_count: 0,
            successful_executions: 0,
            total_expected_profit_weth: Decimal::ZERO,
            records: Vec::new(),
        }
    }
}

/// Runs scan cycles back-to-back until shutdown. Any error escaping a cycle
/// propagates to the restart loop in `main`.
async fn run_scan_loop(
    provider: &Arc<ConcreteProvider>,
    router_a: &RouterQuoter,
    router_b: &RouterQuoter,
    engine: Option<&ExecutionEngine>,
    policy: &dyn DecisionPolicy,
    config: &Config,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let amount_in = utils::eth_to_wei(config.flash_loan_amount_eth)?;
    let mut state = ScanLoopState::new();

    info!(
        "Scanning every {}s with a {} ETH flash loan",
        config.scan_interval_secs, config.flash_loan_amount_eth
    );

    loop {
        if *shutdown.borrow() {
            break;
        }

        state.scan_count += 1;
        run_cycle(
            provider, router_a, router_b, engine, policy, config, amount_in, &mut state, &shutdown,
        )
        .await?;

        if state.scan_count % 10 == 0 {
            utils::print_session_stats(
                state.started,
                state.scan_count,
                state.total_opportunities,
                state.actionable_cycles,
                state.execution_count,
                state.successful_executions,
                state.total_expected_profit_weth,
            );
        }

        info!("⏳ Waiting {}s until next scan...", config.scan_interval_secs);
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(config.scan_interval_secs)) => {}
            _ = shutdown.changed() => break,
        }
    }

    print_final_statistics(&state);
    Ok(())
}

/// One full cycle: admission gate, scan, decide, execute.
#[allow(clippy::too_many_arguments)]
async fn run_cycle(
    provider: &Arc<ConcreteProvider>,
    router_a: &RouterQuoter,
    router_b: &RouterQuoter,
    engine: Option<&ExecutionEngine>,
    policy: &dyn DecisionPolicy,
    config: &Config,
    amount_in: U256,
    state: &mut ScanLoopState,
    shutdown: &watch::Receiver<bool>,
) -> Result<()> {
    // Re-sampled every cycle; a failure here is cycle-fatal.
    let gas_price_gwei = network::sample_gas_price_gwei(provider).await?;

    let cycle = arbitrage::run_scan_cycle(
        state.scan_count,
        router_a,
        router_b,
        WETH_MAINNET,
        TOKENS_MAINNET,
        amount_in,
        gas_price_gwei,
        config,
        shutdown,
    )
    .await;

    state.total_opportunities += cycle.opportunities.len() as u64;
    for opp in &cycle.opportunities {
        if let Err(e) = storage::save_opportunity(opp) {
            error!("Failed to save opportunity: {}", e);
        }
    }

    if cycle.outcome != CycleOutcome::Actionable {
        return Ok(());
    }
    let Some(best) = cycle.best else {
        return Ok(());
    };

    state.actionable_cycles += 1;
    utils::print_opportunity(&best);

    let request = ConfirmationRequest::from(&best);
    if !policy.approve(&request).await {
        info!(
            "Execution skipped for {} ({:.2}%)",
            best.token_name, best.profit_percent
        );
        return Ok(());
    }

    let Some(engine) = engine else {
        info!("Execution disabled: opportunity recorded, not executed");
        return Ok(());
    };

    state.execution_count += 1;
    info!("Executing arbitrage #{}", state.execution_count);
    let record = engine.execute(&best).await;

    if record.is_success() {
        state.successful_executions += 1;
        state.total_expected_profit_weth +=
            utils::u256_to_decimal(best.profit).unwrap_or_default() / utils::pow10(18);
    }

    utils::print_execution_record(&record);
    if let Err(e) = storage::save_execution_record(&record) {
        error!("Failed to save execution record: {}", e);
    }
    state.records.push(record);

    Ok(())
}

/// Print final statistics on shutdown
fn print_final_statistics(state: &ScanLoopState) {
    let failed_executions = state
        .records
        .iter()
        .filter(|record| !record.is_success())
        .count();

    info!("\n🛑 Shutting down gracefully...");
    info!("Final statistics:");
    info!("   Total runtime: {:?}", state.started.elapsed());
    info!("   Scan cycles: {}", state.scan_count);
    info!("   Opportunities found: {}", state.total_opportunities);
    info!("   Actionable cycles: {}", state.actionable_cycles);
    info!(
        "   Executions: {} ({} successful, {} failed)",
        state.execution_count, state.successful_executions, failed_executions
    );
    info!(
        "   Expected profit booked: {:.6} WETH",
        state.total_expected_profit_weth
    );
}
