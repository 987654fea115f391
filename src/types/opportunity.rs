//! Arbitrage opportunity types and profit arithmetic

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::ratio_percent;

/// Direction of the round trip between the two routers.
///
/// `AToB` buys the token on router A and sells it back on router B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    AToB,
    BToA,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::AToB => write!(f, "router A -> router B"),
            Route::BToA => write!(f, "router B -> router A"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Opportunity {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub route: Route,
    pub token: Address,
    pub token_name: String,
    /// Borrowed-asset units put into the first hop.
    pub input_amount: U256,
    /// Token units received from the first hop.
    pub intermediate_amount: U256,
    /// Borrowed-asset units received from the second hop.
    pub output_amount: U256,
    pub flash_loan_fee: U256,
    /// `output - input - fee`, always positive.
    pub profit: U256,
    /// Reporting/threshold value only; profit existence is decided in integers.
    pub profit_percent: Decimal,
    /// First-hop floor: 5% slippage tolerance on the intermediate amount.
    pub min_intermediate_amount: U256,
    /// Smallest acceptable final return: input scaled by 1.001.
    pub min_output_amount: U256,
    pub path1: Vec<Address>,
    pub path2: Vec<Address>,
}

/// Flash-loan fee in borrowed-asset base units, floored.
pub fn flash_loan_fee(amount_in: U256, fee_bps: u64) -> U256 {
    amount_in * U256::from(fee_bps) / U256::from(10_000u64)
}

impl Opportunity {
    /// Evaluates one direction for one token. Returns `None` unless the round
    /// trip beats the input amount by more than the flash-loan fee.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate(
        route: Route,
        token: Address,
        token_name: &str,
        input_amount: U256,
        intermediate_amount: U256,
        output_amount: U256,
        fee_bps: u64,
        path1: Vec<Address>,
        path2: Vec<Address>,
    ) -> Option<Self> {
        if input_amount.is_zero() || output_amount <= input_amount {
            return None;
        }

        let fee = flash_loan_fee(input_amount, fee_bps);
        let gross = output_amount - input_amount;
        if gross <= fee {
            return None;
        }
        let profit = gross - fee;
        let profit_percent = ratio_percent(profit, input_amount).ok()?;

        Some(Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            route,
            token,
            token_name: token_name.to_string(),
            input_amount,
            intermediate_amount,
            output_amount,
            flash_loan_fee: fee,
            profit,
            profit_percent,
            min_intermediate_amount: intermediate_amount * U256::from(95u64) / U256::from(100u64),
            min_output_amount: input_amount * U256::from(1001u64) / U256::from(1000u64),
            path1,
            path2,
        })
    }
}
