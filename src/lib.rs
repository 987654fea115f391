//! Flash-Loan Arbitrage Bot - dual-router scanner for Ethereum mainnet
//!
//! This bot quotes a fixed WETH notional against two DEX routers in both
//! directions, detects round-trip price discrepancies that stay profitable
//! after the flash-loan fee, and can execute the winning route atomically
//! through a deployed arbitrage-executor contract.

pub mod arbitrage;
pub mod config;
pub mod decision;
pub mod errors;
pub mod execution;
pub mod network;
pub mod quotes;
pub mod storage;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{BotError, BotResult};
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
