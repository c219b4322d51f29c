use ethers::types::U256;
use serde::{Deserialize, Serialize};

/// Result of a simulated exact-input swap.
///
/// Single-hop quotes carry one entry in each per-pool list; path quotes carry one per hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub amount_out: U256,
    pub sqrt_price_x96_after: Vec<U256>,
    pub initialized_ticks_crossed: Vec<u32>,
    pub gas_estimate: U256,
}
