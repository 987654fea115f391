//! Execution outcome types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Opportunity, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExecutionStatus {
    /// Mined with a success receipt.
    Confirmed,
    /// Mined, but the transaction reverted on chain.
    Reverted,
    /// Never confirmed: build, sign, submit, or confirmation-wait failed.
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecutionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub opportunity_id: String,
    pub route: Route,
    pub token_name: String,
    pub expected_profit_percent: Decimal,
    pub status: ExecutionStatus,
    pub tx_hash: Option<String>,
    pub gas_used: Option<u64>,
    pub execution_time_ms: u64,
    pub error_message: Option<String>,
}

impl ExecutionRecord {
    fn base(opportunity: &Opportunity, elapsed_ms: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            opportunity_id: opportunity.id.clone(),
            route: opportunity.route,
            token_name: opportunity.token_name.clone(),
            expected_profit_percent: opportunity.profit_percent,
            status: ExecutionStatus::Failed,
            tx_hash: None,
            gas_used: None,
            execution_time_ms: elapsed_ms,
            error_message: None,
        }
    }

    pub fn confirmed(
        opportunity: &Opportunity,
        tx_hash: String,
        gas_used: u64,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            status: ExecutionStatus::Confirmed,
            tx_hash: Some(tx_hash),
            gas_used: Some(gas_used),
            ..Self::base(opportunity, elapsed_ms)
        }
    }

    pub fn reverted(
        opportunity: &Opportunity,
        tx_hash: String,
        gas_used: u64,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            status: ExecutionStatus::Reverted,
            tx_hash: Some(tx_hash),
            gas_used: Some(gas_used),
            error_message: Some("transaction reverted on chain".to_string()),
            ..Self::base(opportunity, elapsed_ms)
        }
    }

    pub fn failed(opportunity: &Opportunity, error: String, elapsed_ms: u64) -> Self {
        Self {
            status: ExecutionStatus::Failed,
            error_message: Some(error),
            ..Self::base(opportunity, elapsed_ms)
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ExecutionStatus::Confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};

    fn sample_opportunity() -> Opportunity {
        Opportunity::evaluate(
            Route::AToB,
            Address::repeat_byte(0xbb),
            "TEST",
            U256::from(5_000_000_000_000_000_000u128),
            U256::from(1_000u64),
            U256::from(5_100_000_000_000_000_000u128),
            9,
            vec![Address::repeat_byte(0xaa), Address::repeat_byte(0xbb)],
            vec![Address::repeat_byte(0xbb), Address::repeat_byte(0xaa)],
        )
        .unwrap()
    }

    #[test]
    fn confirmed_record_carries_gas_used() {
        let opp = sample_opportunity();
        let record = ExecutionRecord::confirmed(&opp, "0xabc".to_string(), 412_345, 900);
        assert!(record.is_success());
        assert_eq!(record.gas_used, Some(412_345));
        assert_eq!(record.tx_hash.as_deref(), Some("0xabc"));
        assert!(record.error_message.is_none());
    }

    #[test]
    fn failed_record_never_claims_success() {
        let opp = sample_opportunity();
        let record = ExecutionRecord::failed(&opp, "submit raised".to_string(), 120);
        assert!(!record.is_success());
        assert_eq!(record.status, ExecutionStatus::Failed);
        assert_eq!(record.error_message.as_deref(), Some("submit raised"));
        assert!(record.tx_hash.is_none());
        assert!(record.gas_used.is_none());
    }

    #[test]
    fn reverted_record_keeps_hash_and_gas() {
        let opp = sample_opportunity();
        let record = ExecutionRecord::reverted(&opp, "0xdef".to_string(), 699_999, 2_000);
        assert!(!record.is_success());
        assert_eq!(record.status, ExecutionStatus::Reverted);
        assert_eq!(record.tx_hash.as_deref(), Some("0xdef"));
        assert_eq!(record.gas_used, Some(699_999));
    }
}
