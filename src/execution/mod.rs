//! Arbitrage transaction execution

pub mod engine;

pub use engine::*;
