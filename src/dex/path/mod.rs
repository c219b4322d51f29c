//! Uniswap V3 multi-hop path encoding.
//!
//! A path is `token0 ‖ fee0 ‖ token1 ‖ fee1 ‖ … ‖ tokenN`: raw 20-byte addresses
//! interleaved with the 3-byte big-endian fee of the pool that follows each token.
//! No fee trails the final token.

use crate::common::{FeeTier, SwapRouterError};
use ethers::types::{Address, Bytes};

pub const ADDR_SIZE: usize = 20;
pub const FEE_SIZE: usize = 3;
/// Offset from one token to the next.
pub const NEXT_OFFSET: usize = ADDR_SIZE + FEE_SIZE;

/// Encodes `tokens` and the fees between them. Requires `tokens.len() == fees.len() + 1`.
pub fn encode_path(tokens: &[Address], fees: &[FeeTier]) -> Result<Bytes, SwapRouterError> {
    if tokens.is_empty() {
        return Err(SwapRouterError::InvalidPath(
            "path needs at least one token".to_string(),
        ));
    }
    if tokens.len() != fees.len() + 1 {
        return Err(SwapRouterError::InvalidPath(format!(
            "expected {} fees for {} tokens, got {}",
            tokens.len() - 1,
            tokens.len(),
            fees.len()
        )));
    }

    let mut out = Vec::with_capacity(tokens.len() * ADDR_SIZE + fees.len() * FEE_SIZE);
    for (token, fee) in tokens.iter().zip(fees) {
        out.extend_from_slice(token.as_bytes());
        out.extend_from_slice(&fee.to_be_bytes());
    }
    if let Some(last) = tokens.last() {
        out.extend_from_slice(last.as_bytes());
    }
    Ok(Bytes::from(out))
}

/// Splits an encoded path back into its tokens and fees.
pub fn decode_path(path: &[u8]) -> Result<(Vec<Address>, Vec<FeeTier>), SwapRouterError> {
    if path.len() < ADDR_SIZE || (path.len() - ADDR_SIZE) % NEXT_OFFSET != 0 {
        return Err(SwapRouterError::InvalidPath(format!(
            "invalid encoded path length {}",
            path.len()
        )));
    }

    let hops = (path.len() - ADDR_SIZE) / NEXT_OFFSET;
    let mut tokens = Vec::with_capacity(hops + 1);
    let mut fees = Vec::with_capacity(hops);

    for i in 0..hops {
        let start = i * NEXT_OFFSET;
        tokens.push(Address::from_slice(&path[start..start + ADDR_SIZE]));
        let fee = &path[start + ADDR_SIZE..start + NEXT_OFFSET];
        fees.push(FeeTier::from_be_bytes([fee[0], fee[1], fee[2]]));
    }
    let last = hops * NEXT_OFFSET;
    tokens.push(Address::from_slice(&path[last..last + ADDR_SIZE]));

    Ok((tokens, fees))
}

/// Number of pools the path traverses.
pub fn num_pools(path: &[u8]) -> usize {
    path.len().saturating_sub(ADDR_SIZE) / NEXT_OFFSET
}
