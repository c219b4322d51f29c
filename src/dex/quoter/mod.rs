//! Read-only access to the Uniswap V3 QuoterV2 contract.
//!
//! Quotes are simulated with `eth_call`; the contract reverts when a pool is missing
//! or lacks liquidity, which surfaces as [SwapRouterError::QuoteReverted].

pub mod abi;
pub mod types;

use crate::common::{FeeTier, SwapRouterError};
use async_trait::async_trait;
use ethers::core::types::{Address, Bytes, TransactionRequest, U256};
use ethers::providers::{Middleware, MiddlewareError};
use std::sync::Arc;

pub use types::Quote;

/// The quoting-contract boundary the route finder is written against.
#[async_trait]
pub trait QuoteClient: Send + Sync {
    /// Quote for swapping `amount_in` of `token_in` through the single pool at `fee`.
    async fn quote_exact_input_single(
        &self,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        fee: FeeTier,
    ) -> Result<Quote, SwapRouterError>;

    /// Quote for swapping `amount_in` along an encoded multi-hop path.
    async fn quote_exact_input(
        &self,
        path: &Bytes,
        amount_in: U256,
    ) -> Result<Quote, SwapRouterError>;
}

#[async_trait]
impl<T: QuoteClient + ?Sized> QuoteClient for Arc<T> {
    async fn quote_exact_input_single(
        &self,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        fee: FeeTier,
    ) -> Result<Quote, SwapRouterError> {
        (**self)
            .quote_exact_input_single(token_in, token_out, amount_in, fee)
            .await
    }

    async fn quote_exact_input(
        &self,
        path: &Bytes,
        amount_in: U256,
    ) -> Result<Quote, SwapRouterError> {
        (**self).quote_exact_input(path, amount_in).await
    }
}

/// QuoterV2 deployment reached through any ethers middleware.
#[derive(Debug)]
pub struct QuoterV2<M> {
    provider: Arc<M>,
    address: Address,
}

impl<M: Middleware + 'static> QuoterV2<M> {
    pub fn new(provider: Arc<M>, address: Address) -> Self {
        Self { provider, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    async fn eth_call(&self, data: Bytes) -> Result<Bytes, SwapRouterError> {
        let tx = TransactionRequest::new().to(self.address).data(data);
        self.provider
            .call(&tx.into(), None)
            .await
            .map_err(classify_call_error)
    }
}

// Only an execution revert (code 3 or "revert" in the message) means the pool
// rejected the quote. Rate limits, unknown blocks and transport errors never reached it.
fn classify_call_error<E: MiddlewareError>(err: E) -> SwapRouterError {
    match err.as_error_response().filter(|rpc| rpc.is_revert()) {
        Some(rpc) => SwapRouterError::QuoteReverted(format!("{} (code {})", rpc.message, rpc.code)),
        None => SwapRouterError::ProviderError(err.to_string()),
    }
}

#[async_trait]
impl<M: Middleware + 'static> QuoteClient for QuoterV2<M> {
    async fn quote_exact_input_single(
        &self,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        fee: FeeTier,
    ) -> Result<Quote, SwapRouterError> {
        let data = abi::quote_exact_input_single_calldata(token_in, token_out, amount_in, fee);
        let res = self.eth_call(data).await?;
        abi::decode_single_quote(&res)
    }

    async fn quote_exact_input(
        &self,
        path: &Bytes,
        amount_in: U256,
    ) -> Result<Quote, SwapRouterError> {
        let data = abi::quote_exact_input_calldata(path, amount_in);
        let res = self.eth_call(data).await?;
        abi::decode_path_quote(&res)
    }
}
