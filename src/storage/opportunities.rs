//! Arbitrage opportunity storage

use anyhow::Result;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;

use crate::types::Opportunity;

pub fn save_opportunity(opp: &Opportunity) -> Result<()> {
    let filename = format!(
        "output/opportunities/arbitrage_{}.jsonl",
        Utc::now().format("%Y-%m-%d")
    );

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filename)?;

    writeln!(file, "{}", serde_json::to_string(opp)?)?;

    info!(
        opportunity_id = %opp.id,
        token = %opp.token_name,
        profit_percent = %opp.profit_percent,
        "Saved arbitrage opportunity"
    );

    Ok(())
}
