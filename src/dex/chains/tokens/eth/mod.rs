use crate::create_token_provider;
use crate::dex::chains::{Network, Token, TokenMap};
use std::collections::HashMap;

create_token_provider!(EthereumTokens, Network::Ethereum, {
    TokenMap::WETH => ("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", "Wrapped Ether", "WETH", 18),
    TokenMap::USDC => ("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "USD Coin", "USDC", 6),
    TokenMap::USDT => ("0xdAC17F958D2ee523a2206206994597C13D831ec7", "Tether USD", "USDT", 6),
    TokenMap::DAI => ("0x6B175474E89094C44Da98b954EedeAC495271d0F", "Dai Stablecoin", "DAI", 18),
    TokenMap::BTC => ("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599", "Wrapped BTC", "WBTC", 8),
});
