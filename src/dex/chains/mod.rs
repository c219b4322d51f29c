pub mod chain;
pub mod tokens;

// Re-export
pub use chain::{Network, NetworkProfile};
pub use tokens::{BaseTokens, EthereumTokens, Token, TokenMap, same_address};
