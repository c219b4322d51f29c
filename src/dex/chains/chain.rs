use crate::common::{SwapRouterError, parse_address};
use ethers::types::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ETHEREUM_RPC_URL: &str = "https://ethereum-rpc.publicnode.com";
const ETHEREUM_QUOTER_V2: &str = "0x61fFE014bA17989E743c5F6cB21bF9697530B21e";
const ETHEREUM_WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

const BASE_RPC_URL: &str = "https://mainnet.base.org";
const BASE_QUOTER_V2: &str = "0x3d4e44Eb1374240CE5F1B871ab261CD16335B76a";
const BASE_WETH: &str = "0x4200000000000000000000000000000000000006";

/// Supported deployments: a mainnet and a rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Ethereum = 0x1,
    Base = 0x2105,
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Network::Ethereum => "ethereum",
            Network::Base => "base",
        }
    }

    pub fn chain_id(&self) -> u64 {
        *self as u64
    }

    /// Environment variable that overrides the default RPC endpoint.
    pub fn rpc_env_var(&self) -> &'static str {
        match self {
            Network::Ethereum => "ETHEREUM_RPC_URL",
            Network::Base => "BASE_RPC_URL",
        }
    }

    /// Resolves the deployed quoter, bridge token and default RPC endpoint.
    pub fn profile(&self) -> Result<NetworkProfile, SwapRouterError> {
        let (rpc_url, quoter, bridge) = match self {
            Network::Ethereum => (ETHEREUM_RPC_URL, ETHEREUM_QUOTER_V2, ETHEREUM_WETH),
            Network::Base => (BASE_RPC_URL, BASE_QUOTER_V2, BASE_WETH),
        };
        Ok(NetworkProfile {
            network: *self,
            chain_id: self.chain_id(),
            rpc_url: rpc_url.to_string(),
            quoter: parse_address(quoter)?,
            bridge_token: parse_address(bridge)?,
            bridge_symbol: "WETH".to_string(),
        })
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = SwapRouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ethereum" | "mainnet" | "1" => Ok(Network::Ethereum),
            "base" | "8453" => Ok(Network::Base),
            other => Err(SwapRouterError::ConfigError(format!(
                "Unsupported network '{}'",
                other
            ))),
        }
    }
}

/// Everything the route finder needs to talk to one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub network: Network,
    pub chain_id: u64,
    pub rpc_url: String,
    /// Uniswap V3 QuoterV2 deployment.
    pub quoter: Address,
    /// Wrapped native asset every indirect route is forced through.
    pub bridge_token: Address,
    pub bridge_symbol: String,
}

impl NetworkProfile {
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    pub fn is_bridge_token(&self, token: &Address) -> bool {
        self.bridge_token == *token
    }
}
