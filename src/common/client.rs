use crate::common::SwapRouterError;
use ethers::providers::{Http, Provider};
use std::time::Duration;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Builds an HTTP JSON-RPC provider for `rpc_url`.
pub fn create_rpc_provider(rpc_url: &str) -> Result<Provider<Http>, SwapRouterError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| SwapRouterError::ProviderError(format!("invalid RPC url '{}': {}", rpc_url, e)))?;
    Ok(provider.interval(DEFAULT_POLL_INTERVAL))
}
