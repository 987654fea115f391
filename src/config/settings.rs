//! Bot configuration settings and environment variable handling

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::str::FromStr;

// Configuration constants
pub const MIN_FLASH_LOAN_ETH: Decimal = dec!(0.1);
pub const MAX_FLASH_LOAN_ETH: Decimal = dec!(100.0);
pub const DEFAULT_FLASH_LOAN_FEE_BPS: u64 = 9; // 0.09%, Aave-style
pub const MAX_GAS_PRICE_CAP_GWEI: u64 = 500;

// Execution policy constants
pub const ARBITRAGE_GAS_LIMIT: u128 = 700_000;
pub const PRIORITY_FEE_GWEI: u128 = 2;
pub const MAX_FEE_MULTIPLIER: u128 = 2;
pub const CONFIRMATION_TIMEOUT_SECS: u64 = 120;

// Scheduler constants
pub const RESTART_COOLDOWN_SECS: u64 = 60;
pub const MIN_SENDER_BALANCE_ETH: Decimal = dec!(0.01);

#[derive(Debug, Clone)]
pub struct Config {
    pub scan_interval_secs: u64,
    pub min_profit_percent: Decimal,
    pub auto_execute: bool,
    pub max_gas_price_gwei: u64,
    pub flash_loan_amount_eth: Decimal,
    pub flash_loan_fee_bps: u64,
    // Execution configuration
    pub enable_execution: bool,
    pub private_key: Option<String>,
    pub executor_address: Option<String>,
    // Alchemy API Key
    pub alchemy_api_key: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            alchemy_api_key: env::var("ALCHEMY_API_KEY").ok(),
            scan_interval_secs: env::var("SCAN_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            min_profit_percent: env::var("MIN_PROFIT_PERCENT")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(0.15)),
            auto_execute: env::var("AUTO_EXECUTE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            max_gas_price_gwei: env::var("MAX_GAS_PRICE_GWEI")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(80)
                .min(MAX_GAS_PRICE_CAP_GWEI),
            flash_loan_amount_eth: env::var("FLASH_LOAN_AMOUNT_ETH")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(5.0))
                .max(MIN_FLASH_LOAN_ETH)
                .min(MAX_FLASH_LOAN_ETH),
            flash_loan_fee_bps: env::var("FLASH_LOAN_FEE_BPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_FLASH_LOAN_FEE_BPS),
            enable_execution: env::var("ENABLE_EXECUTION")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            private_key: env::var("PRIVATE_KEY").ok(),
            executor_address: env::var("ARB_EXECUTOR_ADDRESS").ok(),
        }
    }
}
