#[derive(thiserror::Error, Debug)]
pub enum SwapRouterError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Quote reverted: {0}")]
    QuoteReverted(String),

    #[error("ABI error: {0}")]
    AbiError(#[from] ethers::abi::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid fee tier: {0}")]
    InvalidFeeTier(u32),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl SwapRouterError {
    /// True when the quoting contract itself rejected the call (no pool, no liquidity),
    /// as opposed to the RPC transport failing.
    pub fn is_revert(&self) -> bool {
        matches!(self, SwapRouterError::QuoteReverted(_))
    }
}
