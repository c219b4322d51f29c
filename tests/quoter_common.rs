#![allow(dead_code)]

use async_trait::async_trait;
use ethers::types::{Address, Bytes, U256};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use uniswap_route_finder::{
    FeeTier, Network, NetworkProfile, Quote, QuoteClient, SwapRouterError, Token, encode_path,
};

pub const TOKEN_X: &str = "0x1111111111111111111111111111111111111111";
pub const TOKEN_Y: &str = "0x2222222222222222222222222222222222222222";
pub const GAS_ESTIMATE: u64 = 120_000;

pub fn profile() -> NetworkProfile {
    Network::Ethereum.profile().expect("ethereum profile")
}

pub fn token_x() -> Token {
    Token::create(TOKEN_X, "Token X", "X", 6, Network::Ethereum).unwrap()
}

pub fn token_y() -> Token {
    Token::create(TOKEN_Y, "Token Y", "Y", 18, Network::Ethereum).unwrap()
}

pub fn bridge() -> Token {
    let p = profile();
    Token::new(
        p.bridge_token,
        "Wrapped Ether".to_string(),
        p.bridge_symbol.clone(),
        18,
        Network::Ethereum,
    )
}

pub fn fee(v: u32) -> FeeTier {
    FeeTier::new(v).unwrap()
}

/// In-memory quoter: listed pools/paths quote, everything else reverts.
#[derive(Default)]
pub struct MockQuoter {
    single: HashMap<(Address, Address, FeeTier), U256>,
    paths: HashMap<Vec<u8>, U256>,
    transport_down: bool,
    calls: AtomicUsize,
}

impl MockQuoter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pool(mut self, token_in: &Token, token_out: &Token, fee_tier: u32, out: u64) -> Self {
        self.single.insert(
            (token_in.address, token_out.address, fee(fee_tier)),
            U256::from(out),
        );
        self
    }

    pub fn with_path(mut self, tokens: &[&Token], fees: &[u32], out: u64) -> Self {
        let addrs: Vec<Address> = tokens.iter().map(|t| t.address).collect();
        let fees: Vec<FeeTier> = fees.iter().map(|f| fee(*f)).collect();
        let path = encode_path(&addrs, &fees).unwrap();
        self.paths.insert(path.to_vec(), U256::from(out));
        self
    }

    pub fn transport_down(mut self) -> Self {
        self.transport_down = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn quote(&self, amount_out: Option<U256>, hops: usize) -> Result<Quote, SwapRouterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.transport_down {
            return Err(SwapRouterError::ProviderError("connection refused".into()));
        }
        let amount_out =
            amount_out.ok_or_else(|| SwapRouterError::QuoteReverted("execution reverted".into()))?;
        Ok(Quote {
            amount_out,
            sqrt_price_x96_after: vec![U256::one(); hops],
            initialized_ticks_crossed: vec![1; hops],
            gas_estimate: U256::from(GAS_ESTIMATE),
        })
    }
}

#[async_trait]
impl QuoteClient for MockQuoter {
    async fn quote_exact_input_single(
        &self,
        token_in: Address,
        token_out: Address,
        _amount_in: U256,
        fee: FeeTier,
    ) -> Result<Quote, SwapRouterError> {
        let out = self.single.get(&(token_in, token_out, fee)).copied();
        self.quote(out, 1)
    }

    async fn quote_exact_input(
        &self,
        path: &Bytes,
        _amount_in: U256,
    ) -> Result<Quote, SwapRouterError> {
        let out = self.paths.get(&path[..]).copied();
        self.quote(out, 2)
    }
}
