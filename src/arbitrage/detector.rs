//! Per-token opportunity detection across two routers

use alloy::primitives::{Address, U256};
use tracing::{debug, info, warn};

use crate::{
    quotes::QuoteSource,
    types::{Opportunity, Route},
    utils::format_weth,
};

/// Checks one token for a profitable round trip in both directions.
///
/// Both directions are evaluated independently and surfaced separately;
/// cross-direction comparison happens at the cycle level.
pub async fn check_token(
    router_a: &dyn QuoteSource,
    router_b: &dyn QuoteSource,
    borrowed_asset: Address,
    token: Address,
    token_name: &str,
    amount_in: U256,
    fee_bps: u64,
) -> Vec<Opportunity> {
    let path1 = vec![borrowed_asset, token];
    let path2 = vec![token, borrowed_asset];

    let out_a1 = quote_final_amount(router_a, amount_in, &path1, token_name).await;
    let out_b1 = quote_final_amount(router_b, amount_in, &path1, token_name).await;

    if out_a1.is_none() && out_b1.is_none() {
        debug!("No first-hop quotes available for {}", token_name);
        return Vec::new();
    }

    let mut found = Vec::new();

    // Buy the token on A, sell it back on B
    if let Some(intermediate) = out_a1 {
        if intermediate > U256::ZERO {
            if let Some(output) =
                quote_final_amount(router_b, intermediate, &path2, token_name).await
            {
                if let Some(opp) = Opportunity::evaluate(
                    Route::AToB,
                    token,
                    token_name,
                    amount_in,
                    intermediate,
                    output,
                    fee_bps,
                    path1.clone(),
                    path2.clone(),
                ) {
                    log_candidate(&opp, router_a.name(), router_b.name());
                    found.push(opp);
                }
            }
        }
    }

    // Buy the token on B, sell it back on A
    if let Some(intermediate) = out_b1 {
        if intermediate > U256::ZERO {
            if let Some(output) =
                quote_final_amount(router_a, intermediate, &path2, token_name).await
            {
                if let Some(opp) = Opportunity::evaluate(
                    Route::BToA,
                    token,
                    token_name,
                    amount_in,
                    intermediate,
                    output,
                    fee_bps,
                    path1.clone(),
                    path2.clone(),
                ) {
                    log_candidate(&opp, router_b.name(), router_a.name());
                    found.push(opp);
                }
            }
        }
    }

    found
}

async fn quote_final_amount(
    source: &dyn QuoteSource,
    amount_in: U256,
    path: &[Address],
    token_name: &str,
) -> Option<U256> {
    match source.amounts_out(amount_in, path).await {
        Ok(amounts) => amounts.last().copied(),
        Err(e) => {
            warn!("⚠️ {} quote failed for {}: {}", source.name(), token_name, e);
            None
        }
    }
}

fn log_candidate(opp: &Opportunity, buy_router: &str, sell_router: &str) {
    info!(
        "💡 {} candidate: buy on {}, sell on {} | net profit {} WETH ({:.2}%)",
        opp.token_name,
        buy_router,
        sell_router,
        format_weth(opp.profit),
        opp.profit_percent
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::testkit::MockQuoteSource;

    const AMOUNT_IN: u128 = 1_000_000_000_000_000_000; // 1 WETH

    fn weth() -> Address {
        Address::repeat_byte(0x11)
    }

    fn token() -> Address {
        Address::repeat_byte(0x22)
    }

    fn path1() -> Vec<Address> {
        vec![weth(), token()]
    }

    fn path2() -> Vec<Address> {
        vec![token(), weth()]
    }

    #[tokio::test]
    async fn returns_nothing_when_both_first_hops_fail() {
        let amount = U256::from(AMOUNT_IN);
        let a = MockQuoteSource::named("A").with_failure(amount, path1());
        let b = MockQuoteSource::named("B").with_failure(amount, path1());

        let found = check_token(&a, &b, weth(), token(), "TEST", amount, 9).await;

        assert!(found.is_empty());
        assert_eq!(a.call_count(), 1);
        assert_eq!(b.call_count(), 1);
    }

    #[tokio::test]
    async fn detects_profitable_a_to_b_round_trip() {
        let amount = U256::from(AMOUNT_IN);
        let intermediate = U256::from(2_500_000u64);
        // 1% above input: beats the 9 bps fee comfortably
        let output = U256::from(AMOUNT_IN + AMOUNT_IN / 100);

        let a = MockQuoteSource::named("A").with_quote(amount, path1(), vec![amount, intermediate]);
        let b = MockQuoteSource::named("B")
            .with_failure(amount, path1())
            .with_quote(intermediate, path2(), vec![intermediate, output]);

        let found = check_token(&a, &b, weth(), token(), "TEST", amount, 9).await;

        assert_eq!(found.len(), 1);
        let opp = &found[0];
        assert_eq!(opp.route, Route::AToB);
        assert_eq!(opp.intermediate_amount, intermediate);
        assert_eq!(opp.output_amount, output);
        assert_eq!(opp.path1, path1());
        assert_eq!(opp.path2, path2());
    }

    #[tokio::test]
    async fn surfaces_both_directions_independently() {
        let amount = U256::from(AMOUNT_IN);
        let inter_a = U256::from(1_000_000u64);
        let inter_b = U256::from(2_000_000u64);
        let out_via_b = U256::from(AMOUNT_IN + AMOUNT_IN / 100);
        let out_via_a = U256::from(AMOUNT_IN + AMOUNT_IN / 50);

        let a = MockQuoteSource::named("A")
            .with_quote(amount, path1(), vec![amount, inter_a])
            .with_quote(inter_b, path2(), vec![inter_b, out_via_a]);
        let b = MockQuoteSource::named("B")
            .with_quote(amount, path1(), vec![amount, inter_b])
            .with_quote(inter_a, path2(), vec![inter_a, out_via_b]);

        let found = check_token(&a, &b, weth(), token(), "TEST", amount, 9).await;

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].route, Route::AToB);
        assert_eq!(found[1].route, Route::BToA);
        assert!(found[1].profit_percent > found[0].profit_percent);
    }

    #[tokio::test]
    async fn second_hop_failure_forfeits_only_that_direction() {
        let amount = U256::from(AMOUNT_IN);
        let inter_a = U256::from(1_000_000u64);
        let inter_b = U256::from(2_000_000u64);
        let out_via_a = U256::from(AMOUNT_IN + AMOUNT_IN / 100);

        // B cannot re-quote A's intermediate, but the B->A direction works.
        let a = MockQuoteSource::named("A")
            .with_quote(amount, path1(), vec![amount, inter_a])
            .with_quote(inter_b, path2(), vec![inter_b, out_via_a]);
        let b = MockQuoteSource::named("B")
            .with_quote(amount, path1(), vec![amount, inter_b])
            .with_failure(inter_a, path2());

        let found = check_token(&a, &b, weth(), token(), "TEST", amount, 9).await;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].route, Route::BToA);
    }

    #[tokio::test]
    async fn unprofitable_round_trip_yields_nothing() {
        let amount = U256::from(AMOUNT_IN);
        let intermediate = U256::from(3_000_000u64);

        let a = MockQuoteSource::named("A").with_quote(amount, path1(), vec![amount, intermediate]);
        // Round trip returns exactly the input: no profit before the fee.
        let b = MockQuoteSource::named("B")
            .with_failure(amount, path1())
            .with_quote(intermediate, path2(), vec![intermediate, amount]);

        let found = check_token(&a, &b, weth(), token(), "TEST", amount, 9).await;

        assert!(found.is_empty());
    }
}
