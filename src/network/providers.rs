//! Network provider setup and gas-price sampling

use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    ConcreteProvider,
    config::Config,
    errors::BotResult,
    network::retry::{RetryConfig, retry_with_backoff},
    utils::wei_to_gwei,
};

pub async fn setup_mainnet_provider(config: &Config) -> Result<Arc<ConcreteProvider>> {
    let alchemy_key = config
        .alchemy_api_key
        .as_ref()
        .context("ALCHEMY_API_KEY is required")?;
    let rpc_url = format!("https://eth-mainnet.g.alchemy.com/v2/{}", alchemy_key);

    let provider: Arc<ConcreteProvider> = Arc::new(
        ProviderBuilder::new()
            .on_http(rpc_url.parse()?)
            .boxed()
    );

    info!("🔗 Testing connection to Ethereum mainnet...");
    let block = retry_with_backoff(
        || async {
            provider.get_block_number().await
                .context("Failed to get block number")
        },
        &RetryConfig {
            max_attempts: 5,
            initial_delay_ms: 500,
            max_delay_ms: 10000,
            exponential_base: 2.0,
        },
        "Ethereum mainnet connection",
    ).await
    .map_err(|e| {
        warn!("⚠️ Network connection attempt failed: {}", e);
        anyhow::anyhow!("Network connection failed: {}", e)
    })?;

    info!("✅ Connected to Ethereum mainnet at block {}", block);
    Ok(provider)
}

/// Samples the current network gas price in gwei. Re-sampled every cycle for
/// the admission gate; a failure after retries is cycle-fatal.
pub async fn sample_gas_price_gwei(provider: &Arc<ConcreteProvider>) -> BotResult<Decimal> {
    let wei = retry_with_backoff(
        || async {
            provider.get_gas_price().await
                .context("Failed to fetch gas price")
        },
        &RetryConfig {
            max_attempts: 3,
            initial_delay_ms: 200,
            ..Default::default()
        },
        "gas price sample",
    ).await?;

    Ok(wei_to_gwei(wei))
}
