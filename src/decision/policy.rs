//! Confirmation capability: auto and interactive variants

use alloy::primitives::Address;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::types::{Opportunity, Route};

/// Summary handed to the confirmation boundary.
#[derive(Debug, Clone)]
pub struct ConfirmationRequest {
    pub route: Route,
    pub token: Address,
    pub token_name: String,
    pub profit_percent: Decimal,
}

impl From<&Opportunity> for ConfirmationRequest {
    fn from(opp: &Opportunity) -> Self {
        Self {
            route: opp.route,
            token: opp.token,
            token_name: opp.token_name.clone(),
            profit_percent: opp.profit_percent,
        }
    }
}

/// Decides whether a selected opportunity gets executed. Declining is a
/// normal outcome, never an error.
#[async_trait]
pub trait DecisionPolicy: Send + Sync {
    async fn approve(&self, request: &ConfirmationRequest) -> bool;
}

/// Executes every opportunity that passed the profit threshold.
pub struct AutoPolicy;

#[async_trait]
impl DecisionPolicy for AutoPolicy {
    async fn approve(&self, request: &ConfirmationRequest) -> bool {
        info!(
            "🤖 Auto-execute enabled, approving {:.2}% arbitrage with {}",
            request.profit_percent, request.token_name
        );
        true
    }
}

/// Console-backed confirmation: prompts the operator and reads one line from
/// stdin on a blocking thread so the runtime is never stalled.
pub struct InteractivePolicy;

#[async_trait]
impl DecisionPolicy for InteractivePolicy {
    async fn approve(&self, request: &ConfirmationRequest) -> bool {
        println!(
            "Execute this {:.2}% arbitrage with {} ({})? (y/n): ",
            request.profit_percent, request.token_name, request.route
        );

        let answer = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            std::io::stdin().read_line(&mut line).map(|_| line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => {
                let approved = matches!(line.trim().to_lowercase().as_str(), "y" | "yes");
                if !approved {
                    info!("Operator declined execution");
                }
                approved
            }
            Ok(Err(e)) => {
                warn!("Failed to read confirmation ({}), declining", e);
                false
            }
            Err(e) => {
                warn!("Confirmation task failed ({}), declining", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;
    use rust_decimal_macros::dec;

    fn sample_request() -> ConfirmationRequest {
        ConfirmationRequest {
            route: Route::AToB,
            token: Address::repeat_byte(0x22),
            token_name: "TEST".to_string(),
            profit_percent: dec!(0.5),
        }
    }

    struct DeclineAll;

    #[async_trait]
    impl DecisionPolicy for DeclineAll {
        async fn approve(&self, _request: &ConfirmationRequest) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn auto_policy_approves_everything() {
        assert!(AutoPolicy.approve(&sample_request()).await);
    }

    #[tokio::test]
    async fn declining_policy_blocks_execution_without_error() {
        let policy: Box<dyn DecisionPolicy> = Box::new(DeclineAll);
        assert!(!policy.approve(&sample_request()).await);
    }

    #[test]
    fn confirmation_request_summarizes_opportunity() {
        let opp = Opportunity::evaluate(
            Route::BToA,
            Address::repeat_byte(0x22),
            "LINK",
            U256::from(5_000_000_000_000_000_000u128),
            U256::from(900u64),
            U256::from(5_100_000_000_000_000_000u128),
            9,
            vec![Address::repeat_byte(0x11), Address::repeat_byte(0x22)],
            vec![Address::repeat_byte(0x22), Address::repeat_byte(0x11)],
        )
        .unwrap();

        let request = ConfirmationRequest::from(&opp);
        assert_eq!(request.route, Route::BToA);
        assert_eq!(request.token_name, "LINK");
        assert_eq!(request.profit_percent, opp.profit_percent);
    }
}
