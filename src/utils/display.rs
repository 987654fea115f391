//! Display and printing utilities

use rust_decimal::Decimal;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::types::{ExecutionRecord, ExecutionStatus, Opportunity};
use crate::utils::format_weth;

pub fn print_opportunity(opp: &Opportunity) {
    warn!("\n🎯 ARBITRAGE OPPORTUNITY #{}", opp.id);
    warn!("📍 Token: {} ({:#x})", opp.token_name, opp.token);
    warn!("📋 Route: {}", opp.route);
    warn!("💰 Profit Analysis:");
    warn!("   Input:          {} WETH", format_weth(opp.input_amount));
    warn!("   Output:         {} WETH", format_weth(opp.output_amount));
    warn!("   Flash Loan Fee: {} WETH", format_weth(opp.flash_loan_fee));
    warn!(
        "   Net Profit:     {} WETH ({:.2}%)",
        format_weth(opp.profit),
        opp.profit_percent
    );
}

pub fn print_execution_record(record: &ExecutionRecord) {
    match record.status {
        ExecutionStatus::Confirmed => {
            warn!("\n✅ ARBITRAGE EXECUTED #{}", record.id);
            warn!("📍 Token: {} | {}", record.token_name, record.route);
            if let Some(tx_hash) = &record.tx_hash {
                warn!("   Tx Hash: {}", tx_hash);
            }
            if let Some(gas_used) = record.gas_used {
                warn!("   Gas Used: {}", gas_used);
            }
            warn!("   Expected Profit: {:.2}%", record.expected_profit_percent);
            warn!("   Execution Time: {}ms", record.execution_time_ms);
        }
        ExecutionStatus::Reverted => {
            error!("\n❌ ARBITRAGE REVERTED #{}", record.id);
            if let Some(tx_hash) = &record.tx_hash {
                error!("   Tx Hash: {}", tx_hash);
            }
            if let Some(gas_used) = record.gas_used {
                error!("   Gas Burned: {}", gas_used);
            }
        }
        ExecutionStatus::Failed => {
            error!("\n❌ ARBITRAGE EXECUTION FAILED #{}", record.id);
            error!(
                "   Error: {}",
                record.error_message.as_deref().unwrap_or("unknown")
            );
        }
    }
}

pub fn print_session_stats(
    start_time: Instant,
    scan_count: u64,
    total_opportunities: u64,
    actionable_cycles: u64,
    total_executions: u64,
    successful_executions: u64,
    total_expected_profit_weth: Decimal,
) {
    let runtime = start_time.elapsed().as_secs() / 60;

    info!("\n📊 Session Statistics ({} minutes)", runtime);
    info!("   🔄 SCANNING:");
    info!("     Cycles completed: {}", scan_count);
    info!("     Opportunities found: {}", total_opportunities);
    info!("     Actionable cycles: {}", actionable_cycles);
    info!("   🚀 EXECUTION:");
    info!("     Total executions: {}", total_executions);
    info!("     Successful: {}", successful_executions);
    info!(
        "     Success rate: {:.1}%",
        if total_executions > 0 {
            (successful_executions as f64 / total_executions as f64) * 100.0
        } else {
            0.0
        }
    );
    info!(
        "     Total expected profit: {:.6} WETH",
        total_expected_profit_weth
    );
    info!("");
}
