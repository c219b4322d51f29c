use crate::common::{SwapRouterError, parse_address};
use crate::dex::chains::Network;
use ethers::types::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub network: Network,
}

impl Token {
    pub fn new(
        address: Address,
        name: String,
        symbol: String,
        decimals: u8,
        network: Network,
    ) -> Self {
        Self {
            address,
            name,
            symbol,
            decimals,
            network,
        }
    }

    /// Creates a token from a hex address string (any letter case).
    pub fn create(
        address: &str,
        name: &str,
        symbol: &str,
        decimals: u8,
        network: Network,
    ) -> Result<Self, SwapRouterError> {
        Ok(Self::new(
            parse_address(address)?,
            name.to_string(),
            symbol.to_string(),
            decimals,
            network,
        ))
    }
}

/// Well-known tokens looked up through the per-network registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenMap {
    WETH,
    USDC,
    USDT,
    DAI,
    BTC,
}

/// Builds a per-network token registry backed by a `HashMap<TokenMap, Token>`.
/// Entries with an unparsable address are skipped.
#[macro_export]
macro_rules! create_token_provider {
    (
        $struct_name:ident, $network:expr, {
            $($key:expr => ($address:expr, $name:expr, $symbol:expr, $decimals:expr)),* $(,)?
        }
    ) => {
        pub struct $struct_name {
            tokens: HashMap<TokenMap, Token>,
        }

        impl $struct_name {
            pub fn new() -> Self {
                let mut tokens = HashMap::new();
                $(
                    if let Ok(token) = Token::create($address, $name, $symbol, $decimals, $network) {
                        tokens.insert($key, token);
                    }
                )*
                Self { tokens }
            }

            pub fn get(&self, key: &TokenMap) -> Option<&Token> {
                self.tokens.get(key)
            }

            pub fn network(&self) -> Network {
                $network
            }

            pub fn all(&self) -> impl Iterator<Item = &Token> {
                self.tokens.values()
            }
        }

        impl Default for $struct_name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

// Case-insensitive comparison of two hex address strings
pub fn same_address(a: &str, b: &str) -> bool {
    match (parse_address(a), parse_address(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
