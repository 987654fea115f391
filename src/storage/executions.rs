//! Execution record storage

use anyhow::Result;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;

use crate::types::ExecutionRecord;

pub fn save_execution_record(record: &ExecutionRecord) -> Result<()> {
    let filename = format!(
        "output/executions/arbitrage_{}.jsonl",
        Utc::now().format("%Y-%m-%d")
    );

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filename)?;

    writeln!(file, "{}", serde_json::to_string(record)?)?;

    info!(
        execution_id = %record.id,
        status = ?record.status,
        tx_hash = ?record.tx_hash,
        "Saved execution record"
    );

    Ok(())
}
