//! `uniswap-route-finder`
//!
//! Pick the Uniswap V3 route with the largest output for an exact-input swap, comparing
//! direct pools with two-hop routes through the network's wrapped native token.
//!
//! ## Quickstart
//!
//! ```no_run
//! use uniswap_route_finder::dex::chains::{EthereumTokens, TokenMap};
//! use uniswap_route_finder::{Network, find_best_swap_path};
//! use ethers::types::U256;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let tokens = EthereumTokens::new();
//! let usdc = tokens.get(&TokenMap::USDC).unwrap();
//! let dai = tokens.get(&TokenMap::DAI).unwrap();
//!
//! match find_best_swap_path(Network::Ethereum, usdc, dai, U256::from(1_000_000_000u64)).await {
//!     Some(path) => println!("{} -> {}", path.describe(), path.format_amount_out(dai.decimals)),
//!     None => println!("route unavailable"),
//! }
//! # }
//! ```

pub mod common;
pub mod dex;

// Re-export common types
pub use common::{
    DEFAULT_FEE_TIERS, FeeTier, RouterConfig, SwapRouterError, init_logging, load_dotenv,
};
pub use dex::chains::{Network, NetworkProfile, Token};
pub use dex::{
    Quote, QuoteClient, QuoterV2, RouteFinder, RouteSearch, SwapKind, SwapPath, decode_path,
    encode_path, find_best_swap_path,
};
