use crate::common::{FeeTier, SwapRouterError, format_units};
use ethers::types::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

const BPS_DENOMINATOR: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapKind {
    /// One pool, `route = [in, out]`.
    SingleHop,
    /// Two pools through the bridge token, `route = [in, bridge, out]`.
    MultiHop,
}

/// Best route found for one exact-input request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapPath {
    pub kind: SwapKind,
    /// MultiHop only: path bytes in the format the quoter and router expect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_path: Option<Bytes>,
    /// SingleHop only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_tier: Option<FeeTier>,
    /// Fee of each pool along `route`.
    pub fees: Vec<FeeTier>,
    pub amount_in: U256,
    pub amount_out: U256,
    pub gas_estimate: U256,
    pub route: Vec<Address>,
    pub route_symbols: Vec<String>,
    pub quoted_at: u64,
}

impl SwapPath {
    pub fn is_multi_hop(&self) -> bool {
        self.kind == SwapKind::MultiHop
    }

    /// Minimum acceptable output after `slippage_bps` (50 = 0.5%), rounded down.
    pub fn min_amount_out(&self, slippage_bps: u32) -> Result<U256, SwapRouterError> {
        if u64::from(slippage_bps) > BPS_DENOMINATOR {
            return Err(SwapRouterError::InvalidAmount(format!(
                "slippage {} bps exceeds 100%",
                slippage_bps
            )));
        }
        let keep = U256::from(BPS_DENOMINATOR - u64::from(slippage_bps));
        self.amount_out
            .checked_mul(keep)
            .map(|v| v / U256::from(BPS_DENOMINATOR))
            .ok_or_else(|| SwapRouterError::InvalidAmount("amount out overflow".to_string()))
    }

    pub fn format_amount_out(&self, decimals: u8) -> String {
        format_units(self.amount_out, decimals)
    }

    /// e.g. `USDC -(500)-> WETH -(3000)-> DAI`
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for (i, symbol) in self.route_symbols.iter().enumerate() {
            if i > 0 {
                match self.fees.get(i - 1) {
                    Some(fee) => out.push_str(&format!(" -({})-> ", fee)),
                    None => out.push_str(" -> "),
                }
            }
            out.push_str(symbol);
        }
        out
    }
}

/// Outcome of one route search, with failure counts the `Option` view hides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSearch {
    pub best: Option<SwapPath>,
    pub candidates: usize,
    /// Quotes the contract rejected (pool missing or illiquid).
    pub reverted: usize,
    /// Quotes lost to transport or decoding problems.
    pub failed: usize,
}

impl RouteSearch {
    /// True when nothing succeeded and at least one failure was not a revert.
    pub fn is_inconclusive(&self) -> bool {
        self.best.is_none() && self.failed > 0
    }
}
