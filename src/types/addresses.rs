//! Mainnet addresses: borrowed asset, routers, and the scanned token universe

use alloy::primitives::{Address, address};

/// Wrapped Ether, the borrowed asset for every flash loan.
pub const WETH_MAINNET: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

// The two routers being compared
pub const UNISWAP_V2_ROUTER: Address = address!("7a250d5630B4cF539739dF2C5dAcb4c659F2488D");
pub const SUSHISWAP_ROUTER: Address = address!("d9e1cE17f2641f24aE83637ab66a2cca9C378B9F");

/// Token universe scanned each cycle, in scan order.
///
/// Format: `(display_name, token_address)`.
pub const TOKENS_MAINNET: &[(&str, Address)] = &[
    ("DAI", address!("6B175474E89094C44Da98b954EedeAC495271d0F")),
    ("USDC", address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")),
    ("USDT", address!("dAC17F958D2ee523a2206206994597C13D831ec7")),
    ("WBTC", address!("2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599")),
    ("LINK", address!("514910771AF9Ca656af840dff83E8264EcF986CA")),
    ("UNI", address!("1f9840a85d5aF5bf1D1762F925BDADdC4201F984")),
    ("AAVE", address!("7Fc66500c84A76Ad7e9c93437bFc5Ac33E2DDaE9")),
    ("MKR", address!("9f8F72aA9304c8B593d555F12eF6589cC3A579A2")),
    ("CRV", address!("D533a949740bb3306d119CC777fa900bA034cd52")),
];
