//! Flash-loan arbitrage execution engine

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::Address,
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    signers::local::PrivateKeySigner,
    sol,
    sol_types::SolCall,
};
use anyhow::{Context, Result};
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::{
    ConcreteProvider,
    config::{
        ARBITRAGE_GAS_LIMIT, CONFIRMATION_TIMEOUT_SECS, Config, MAX_FEE_MULTIPLIER,
        MIN_SENDER_BALANCE_ETH, PRIORITY_FEE_GWEI,
    },
    types::{ExecutionRecord, Opportunity, WETH_MAINNET},
    utils::{format_weth, pow10, u256_to_decimal},
};

sol! {
    interface IArbitrageExecutor {
        function executeArbitrage(address borrowedToken, uint256 amount, address[] calldata path1, address[] calldata path2) external;
    }
}

struct TxOutcome {
    tx_hash: String,
    gas_used: u64,
    reverted: bool,
}

pub struct ExecutionEngine {
    provider: Arc<ConcreteProvider>,
    wallet: EthereumWallet,
    sender: Address,
    executor: Address,
    chain_id: u64,
}

impl ExecutionEngine {
    pub async fn new(provider: Arc<ConcreteProvider>, config: &Config) -> Result<Self> {
        let pk = config
            .private_key
            .as_ref()
            .context("PRIVATE_KEY is required when ENABLE_EXECUTION=true")?;
        let signer = PrivateKeySigner::from_str(pk).context("Failed to parse private key")?;
        let sender = signer.address();
        let wallet = EthereumWallet::from(signer);

        let executor = config
            .executor_address
            .as_ref()
            .context("ARB_EXECUTOR_ADDRESS is required when ENABLE_EXECUTION=true")?;
        let executor =
            Address::from_str(executor).context("Failed to parse ARB_EXECUTOR_ADDRESS")?;

        let chain_id = provider
            .get_chain_id()
            .await
            .context("Failed to fetch chain id")?;

        Ok(Self {
            provider,
            wallet,
            sender,
            executor,
            chain_id,
        })
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    /// Verifies the executor contract is deployed and the sender can pay for
    /// gas. Run once before the scan loop starts.
    pub async fn startup_checks(&self) -> Result<()> {
        let code = self
            .provider
            .get_code_at(self.executor)
            .await
            .context("Failed to read executor contract code")?;
        if code.is_empty() {
            anyhow::bail!("No arbitrage executor deployed at {:#x}", self.executor);
        }
        info!("✅ Arbitrage executor verified at {:#x}", self.executor);

        let balance = self
            .provider
            .get_balance(self.sender)
            .await
            .context("Failed to read sender balance")?;
        let balance_eth = u256_to_decimal(balance)? / pow10(18);
        if balance_eth < MIN_SENDER_BALANCE_ETH {
            warn!(
                "⚠️ ETH balance is low ({:.4} ETH). Gas costs may not be covered.",
                balance_eth
            );
        } else {
            info!("💰 Sender balance: {:.4} ETH", balance_eth);
        }

        Ok(())
    }

    /// Runs one full attempt: Building -> Signed -> Submitted -> Confirmed.
    ///
    /// Every failure along the way is classified into the returned record;
    /// this call never brings the scan loop down.
    pub async fn execute(&self, opportunity: &Opportunity) -> ExecutionRecord {
        let started = Instant::now();
        info!(
            "🚀 Executing flash loan arbitrage: {} via {}",
            opportunity.token_name, opportunity.route
        );
        info!("   Borrowing {} WETH", format_weth(opportunity.input_amount));

        match self.submit_and_confirm(opportunity).await {
            Ok(outcome) if !outcome.reverted => {
                info!(
                    "✅ Arbitrage confirmed: {} (gas used: {})",
                    outcome.tx_hash, outcome.gas_used
                );
                ExecutionRecord::confirmed(
                    opportunity,
                    outcome.tx_hash,
                    outcome.gas_used,
                    elapsed_ms(started),
                )
            }
            Ok(outcome) => {
                warn!("Transaction {} reverted on chain", outcome.tx_hash);
                ExecutionRecord::reverted(
                    opportunity,
                    outcome.tx_hash,
                    outcome.gas_used,
                    elapsed_ms(started),
                )
            }
            Err(e) => {
                warn!("Arbitrage execution failed: {:#}", e);
                ExecutionRecord::failed(opportunity, format!("{e:#}"), elapsed_ms(started))
            }
        }
    }

    async fn submit_and_confirm(&self, opportunity: &Opportunity) -> Result<TxOutcome> {
        // Fee policy: small fixed priority fee, max fee at a multiple of the
        // sampled price.
        let gas_price = self
            .provider
            .get_gas_price()
            .await
            .context("Failed to sample gas price")?;
        let max_fee = gas_price.saturating_mul(MAX_FEE_MULTIPLIER);
        let priority_fee = PRIORITY_FEE_GWEI * 1_000_000_000;

        let nonce = self
            .provider
            .get_transaction_count(self.sender)
            .await
            .context("Failed to fetch account nonce")?;

        let call = IArbitrageExecutor::executeArbitrageCall {
            borrowedToken: WETH_MAINNET,
            amount: opportunity.input_amount,
            path1: opportunity.path1.clone(),
            path2: opportunity.path2.clone(),
        };

        let tx = TransactionRequest::default()
            .with_from(self.sender)
            .with_to(self.executor)
            .with_input(call.abi_encode())
            .with_nonce(nonce)
            .with_chain_id(self.chain_id)
            .with_gas_limit(ARBITRAGE_GAS_LIMIT as u64)
            .with_max_fee_per_gas(max_fee)
            .with_max_priority_fee_per_gas(priority_fee);

        let envelope = tx
            .build(&self.wallet)
            .await
            .context("Failed to sign arbitrage transaction")?;

        let pending = self
            .provider
            .send_tx_envelope(envelope)
            .await
            .context("Failed to submit arbitrage transaction")?;
        let tx_hash = format!("{:#x}", pending.tx_hash());
        info!("📡 Arbitrage transaction sent: {}", tx_hash);

        // Wait for confirmation with an explicit timeout
        tokio::select! {
            result = pending.get_receipt() => {
                let receipt = result.context("Confirmation failed")?;
                Ok(TxOutcome {
                    tx_hash,
                    gas_used: receipt.gas_used as u64,
                    reverted: !receipt.status(),
                })
            }
            _ = tokio::time::sleep(Duration::from_secs(CONFIRMATION_TIMEOUT_SECS)) => {
                Err(anyhow::anyhow!(
                    "Confirmation timeout after {}s for {}",
                    CONFIRMATION_TIMEOUT_SECS,
                    tx_hash
                ))
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
