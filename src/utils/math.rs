//! Mathematical utility functions

use alloy::primitives::U256;
use anyhow::{Context, Result, bail};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::str::FromStr;

pub fn pow10(n: i32) -> Decimal {
    match n {
        0 => dec!(1),
        6 => dec!(1_000_000),
        18 => dec!(1_000_000_000_000_000_000),
        _ => {
            let mut result = dec!(1);
            if n > 0 {
                for _ in 0..n {
                    result *= dec!(10);
                }
            } else {
                for _ in 0..(-n) {
                    result /= dec!(10);
                }
            }
            result
        }
    }
}

pub fn u256_to_decimal(value: U256) -> Result<Decimal> {
    Decimal::from_str(&value.to_string())
        .with_context(|| format!("amount {value} exceeds decimal range"))
}

/// `part / whole * 100`, for reporting and threshold comparison.
pub fn ratio_percent(part: U256, whole: U256) -> Result<Decimal> {
    if whole.is_zero() {
        bail!("ratio denominator is zero");
    }
    Ok(u256_to_decimal(part)? / u256_to_decimal(whole)? * dec!(100))
}

pub fn wei_to_gwei(wei: u128) -> Decimal {
    Decimal::from_u128(wei).unwrap_or(Decimal::MAX) / dec!(1_000_000_000)
}

pub fn eth_to_wei(eth: Decimal) -> Result<U256> {
    let wei = (eth * pow10(18))
        .trunc()
        .to_u128()
        .with_context(|| format!("ETH amount {eth} does not fit into wei range"))?;
    Ok(U256::from(wei))
}

/// Human-readable WETH rendering of a wei amount.
pub fn format_weth(wei: U256) -> String {
    match u256_to_decimal(wei) {
        Ok(amount) => format!("{:.6}", amount / pow10(18)),
        Err(_) => format!("{wei} wei"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow10_covers_common_scales() {
        assert_eq!(pow10(0), dec!(1));
        assert_eq!(pow10(6), dec!(1_000_000));
        assert_eq!(pow10(18), dec!(1_000_000_000_000_000_000));
        assert_eq!(pow10(-2), dec!(0.01));
    }

    #[test]
    fn eth_to_wei_round_trips_whole_amounts() {
        assert_eq!(
            eth_to_wei(dec!(5)).unwrap(),
            U256::from(5_000_000_000_000_000_000u128)
        );
        assert_eq!(eth_to_wei(dec!(0.1)).unwrap(), U256::from(100_000_000_000_000_000u128));
    }

    #[test]
    fn wei_to_gwei_scales_down() {
        assert_eq!(wei_to_gwei(80_000_000_000), dec!(80));
        assert_eq!(wei_to_gwei(1_500_000_000), dec!(1.5));
    }

    #[test]
    fn ratio_percent_matches_worked_example() {
        let part = U256::from(95_500_000_000_000_000u128);
        let whole = U256::from(5_000_000_000_000_000_000u128);
        assert_eq!(ratio_percent(part, whole).unwrap(), dec!(1.91));
    }

    #[test]
    fn ratio_percent_rejects_zero_denominator() {
        assert!(ratio_percent(U256::from(1u64), U256::ZERO).is_err());
    }
}
