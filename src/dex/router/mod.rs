//! Exact-input route selection over Uniswap V3 pools.
//!
//! When neither side of the pair is the network's bridge token (WETH), every
//! `in -> bridge -> out` fee combination is quoted alongside the direct pools.
//! Otherwise only direct pools are quoted. The candidate with the largest output wins.
//!
//! Candidates are enumerated single-hop first (fee tiers in configured order), then
//! multi-hop `(f1, f2)` row-major. All quotes run concurrently but results are folded
//! in that order, so an exact tie keeps the earlier candidate.

pub mod types;

use crate::common::{
    DEFAULT_FEE_TIERS, FeeTier, RouterConfig, SwapRouterError, create_rpc_provider, format_units,
    get_timestamp_millis,
};
use crate::dex::chains::{Network, NetworkProfile, Token};
use crate::dex::path::encode_path;
use crate::dex::quoter::{Quote, QuoteClient, QuoterV2};
use ethers::providers::{Http, Provider};
use ethers::types::U256;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub use types::{RouteSearch, SwapKind, SwapPath};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidate {
    Single(FeeTier),
    Multi(FeeTier, FeeTier),
}

pub struct RouteFinder<Q> {
    quoter: Q,
    profile: NetworkProfile,
    fee_tiers: Vec<FeeTier>,
}

impl RouteFinder<QuoterV2<Provider<Http>>> {
    /// Finder backed by the network's QuoterV2 over HTTP JSON-RPC.
    pub fn from_config(config: &RouterConfig) -> Result<Self, SwapRouterError> {
        let provider = create_rpc_provider(&config.profile.rpc_url)?;
        let quoter = QuoterV2::new(Arc::new(provider), config.profile.quoter);
        RouteFinder::new(quoter, config.profile.clone()).with_fee_tiers(config.fee_tiers.clone())
    }
}

impl<Q: QuoteClient> RouteFinder<Q> {
    pub fn new(quoter: Q, profile: NetworkProfile) -> Self {
        Self {
            quoter,
            profile,
            fee_tiers: DEFAULT_FEE_TIERS.to_vec(),
        }
    }

    /// Replaces the candidate fee tiers. Duplicates are dropped, first occurrence kept.
    pub fn with_fee_tiers(mut self, fee_tiers: Vec<FeeTier>) -> Result<Self, SwapRouterError> {
        let mut tiers: Vec<FeeTier> = Vec::with_capacity(fee_tiers.len());
        for fee in fee_tiers {
            if !tiers.contains(&fee) {
                tiers.push(fee);
            }
        }
        if tiers.is_empty() {
            return Err(SwapRouterError::ConfigError(
                "at least one fee tier is required".to_string(),
            ));
        }
        self.fee_tiers = tiers;
        Ok(self)
    }

    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }

    pub fn fee_tiers(&self) -> &[FeeTier] {
        &self.fee_tiers
    }

    /// Best route for swapping `amount_in` of `token_in` into `token_out`, or `None`
    /// when no candidate could be quoted.
    pub async fn find_best_swap_path(
        &self,
        token_in: &Token,
        token_out: &Token,
        amount_in: U256,
    ) -> Option<SwapPath> {
        self.search(token_in, token_out, amount_in).await.best
    }

    /// Quotes every candidate and reports the winner together with failure counts.
    pub async fn search(&self, token_in: &Token, token_out: &Token, amount_in: U256) -> RouteSearch {
        if amount_in.is_zero() {
            warn!(
                token_in = %token_in.symbol,
                token_out = %token_out.symbol,
                "amount_in is zero, skipping route search"
            );
            return RouteSearch::default();
        }

        let must_bridge = !self.profile.is_bridge_token(&token_in.address)
            && !self.profile.is_bridge_token(&token_out.address);
        let candidates = self.candidates(must_bridge);

        debug!(
            network = %self.profile.network,
            token_in = %token_in.symbol,
            token_out = %token_out.symbol,
            amount_in = %format_units(amount_in, token_in.decimals),
            must_bridge,
            candidates = candidates.len(),
            "searching swap routes"
        );

        let results = join_all(
            candidates
                .iter()
                .map(|candidate| self.evaluate(*candidate, token_in, token_out, amount_in)),
        )
        .await;

        let mut search = RouteSearch {
            candidates: candidates.len(),
            ..RouteSearch::default()
        };

        for (candidate, result) in candidates.iter().zip(results) {
            match result {
                Ok(path) => {
                    debug!(?candidate, amount_out = %path.amount_out, "candidate quoted");
                    let better = search
                        .best
                        .as_ref()
                        .is_none_or(|best| path.amount_out > best.amount_out);
                    if better {
                        search.best = Some(path);
                    }
                }
                Err(e) if e.is_revert() => {
                    search.reverted += 1;
                    debug!(?candidate, error = %e, "candidate reverted");
                }
                Err(e) => {
                    search.failed += 1;
                    warn!(?candidate, error = %e, "candidate quote failed");
                }
            }
        }

        match &search.best {
            Some(best) => info!(
                network = %self.profile.network,
                route = %best.describe(),
                amount_in = %format_units(amount_in, token_in.decimals),
                amount_out = %best.format_amount_out(token_out.decimals),
                gas_estimate = %best.gas_estimate,
                "best swap route selected"
            ),
            None => info!(
                network = %self.profile.network,
                token_in = %token_in.symbol,
                token_out = %token_out.symbol,
                reverted = search.reverted,
                failed = search.failed,
                "no swap route found"
            ),
        }

        search
    }

    fn candidates(&self, must_bridge: bool) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> =
            self.fee_tiers.iter().copied().map(Candidate::Single).collect();
        if must_bridge {
            for first in &self.fee_tiers {
                for second in &self.fee_tiers {
                    candidates.push(Candidate::Multi(*first, *second));
                }
            }
        }
        candidates
    }

    async fn evaluate(
        &self,
        candidate: Candidate,
        token_in: &Token,
        token_out: &Token,
        amount_in: U256,
    ) -> Result<SwapPath, SwapRouterError> {
        match candidate {
            Candidate::Single(fee) => {
                let quote = self
                    .quoter
                    .quote_exact_input_single(token_in.address, token_out.address, amount_in, fee)
                    .await?;
                Ok(self.build_path(
                    SwapKind::SingleHop,
                    None,
                    vec![fee],
                    token_in,
                    token_out,
                    amount_in,
                    quote,
                ))
            }
            Candidate::Multi(first, second) => {
                let tokens = [token_in.address, self.profile.bridge_token, token_out.address];
                let encoded = encode_path(&tokens, &[first, second])?;
                let quote = self.quoter.quote_exact_input(&encoded, amount_in).await?;
                Ok(self.build_path(
                    SwapKind::MultiHop,
                    Some(encoded),
                    vec![first, second],
                    token_in,
                    token_out,
                    amount_in,
                    quote,
                ))
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn build_path(
        &self,
        kind: SwapKind,
        encoded_path: Option<ethers::types::Bytes>,
        fees: Vec<FeeTier>,
        token_in: &Token,
        token_out: &Token,
        amount_in: U256,
        quote: Quote,
    ) -> SwapPath {
        let (route, route_symbols) = match kind {
            SwapKind::SingleHop => (
                vec![token_in.address, token_out.address],
                vec![token_in.symbol.clone(), token_out.symbol.clone()],
            ),
            SwapKind::MultiHop => (
                vec![token_in.address, self.profile.bridge_token, token_out.address],
                vec![
                    token_in.symbol.clone(),
                    self.profile.bridge_symbol.clone(),
                    token_out.symbol.clone(),
                ],
            ),
        };
        let fee_tier = match kind {
            SwapKind::SingleHop => fees.first().copied(),
            SwapKind::MultiHop => None,
        };

        SwapPath {
            kind,
            encoded_path,
            fee_tier,
            fees,
            amount_in,
            amount_out: quote.amount_out,
            gas_estimate: quote.gas_estimate,
            route,
            route_symbols,
            quoted_at: get_timestamp_millis(),
        }
    }
}

/// One-shot route search on `network` using the environment-derived [RouterConfig].
///
/// Provider or configuration failures are logged and reported as `None`, the same as
/// "no liquidity". Use [RouteFinder::search] to tell the two apart.
pub async fn find_best_swap_path(
    network: Network,
    token_in: &Token,
    token_out: &Token,
    amount_in: U256,
) -> Option<SwapPath> {
    let finder = match RouterConfig::from_env(network).and_then(|c| RouteFinder::from_config(&c)) {
        Ok(finder) => finder,
        Err(e) => {
            error!(network = %network, error = %e, "failed to build route finder");
            return None;
        }
    };
    finder.find_best_swap_path(token_in, token_out, amount_in).await
}
