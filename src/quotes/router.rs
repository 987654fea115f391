//! Router quoting via read-only `getAmountsOut` calls

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol,
    sol_types::SolCall,
};
use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    ConcreteProvider,
    errors::{BotError, BotResult},
};

sol! {
    interface IUniswapV2Router {
        function getAmountsOut(uint256 amountIn, address[] calldata path) external view returns (uint256[] memory amounts);
    }
}

/// Read-only quoting capability of one DEX router.
///
/// Any transport or revert error surfaces as [`BotError::Quote`]; callers
/// treat that as "no quote available" rather than aborting the scan.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    fn name(&self) -> &str;

    /// Amounts a router would produce at each hop of `path` for `amount_in`.
    async fn amounts_out(&self, amount_in: U256, path: &[Address]) -> BotResult<Vec<U256>>;
}

pub struct RouterQuoter {
    name: String,
    address: Address,
    provider: Arc<ConcreteProvider>,
}

impl RouterQuoter {
    pub fn new(name: impl Into<String>, address: Address, provider: Arc<ConcreteProvider>) -> Self {
        Self {
            name: name.into(),
            address,
            provider,
        }
    }
}

#[async_trait]
impl QuoteSource for RouterQuoter {
    fn name(&self) -> &str {
        &self.name
    }

    async fn amounts_out(&self, amount_in: U256, path: &[Address]) -> BotResult<Vec<U256>> {
        if amount_in.is_zero() {
            return Err(BotError::Quote {
                router: self.name.clone(),
                message: "input amount must be positive".to_string(),
            });
        }
        if path.len() < 2 {
            return Err(BotError::Quote {
                router: self.name.clone(),
                message: format!("swap path needs at least 2 addresses, got {}", path.len()),
            });
        }

        let call = IUniswapV2Router::getAmountsOutCall {
            amountIn: amount_in,
            path: path.to_vec(),
        };
        let tx = TransactionRequest::default()
            .to(self.address)
            .input(call.abi_encode().into());

        let raw = self.provider.call(&tx).await.map_err(|e| BotError::Quote {
            router: self.name.clone(),
            message: format!("getAmountsOut call failed: {e}"),
        })?;

        let decoded = IUniswapV2Router::getAmountsOutCall::abi_decode_returns(&raw, true)
            .map_err(|e| BotError::Quote {
                router: self.name.clone(),
                message: format!("could not decode getAmountsOut return: {e}"),
            })?;

        Ok(decoded.amounts)
    }
}
