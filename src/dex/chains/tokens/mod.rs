pub mod base;
pub mod eth;
pub mod token;

// Re-export
pub use base::BaseTokens;
pub use eth::EthereumTokens;
pub use token::{Token, TokenMap, same_address};
