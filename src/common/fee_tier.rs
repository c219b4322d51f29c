use crate::common::SwapRouterError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Uniswap V3 pool fee in hundredths of a basis point (3000 = 0.30%).
///
/// Stored on-chain as `uint24`, so only values below 2^24 are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FeeTier(u32);

pub const MAX_FEE_TIER: u32 = (1 << 24) - 1;

impl FeeTier {
    pub const LOW: FeeTier = FeeTier(500);
    pub const MEDIUM: FeeTier = FeeTier(3000);
    pub const HIGH: FeeTier = FeeTier(10000);

    pub fn new(fee: u32) -> Result<Self, SwapRouterError> {
        if fee > MAX_FEE_TIER {
            return Err(SwapRouterError::InvalidFeeTier(fee));
        }
        Ok(Self(fee))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Big-endian `uint24` bytes as they appear inside an encoded path.
    pub fn to_be_bytes(&self) -> [u8; 3] {
        let b = self.0.to_be_bytes();
        [b[1], b[2], b[3]]
    }

    pub fn from_be_bytes(bytes: [u8; 3]) -> Self {
        Self(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    /// Fee as a percentage, e.g. 0.3 for the 3000 tier.
    pub fn percent(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }
}

/// Candidate set used for single-hop and each leg of multi-hop search.
pub const DEFAULT_FEE_TIERS: [FeeTier; 3] = [FeeTier::LOW, FeeTier::MEDIUM, FeeTier::HIGH];

impl TryFrom<u32> for FeeTier {
    type Error = SwapRouterError;

    fn try_from(fee: u32) -> Result<Self, Self::Error> {
        FeeTier::new(fee)
    }
}

impl From<FeeTier> for u32 {
    fn from(fee: FeeTier) -> Self {
        fee.0
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a comma-separated list such as `"500,3000,10000"`.
pub fn parse_fee_tiers(value: &str) -> Result<Vec<FeeTier>, SwapRouterError> {
    let tiers = value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| SwapRouterError::ConfigError(format!("Invalid fee tier '{}'", part)))
                .and_then(FeeTier::new)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if tiers.is_empty() {
        return Err(SwapRouterError::ConfigError(
            "Fee tier list cannot be empty".to_string(),
        ));
    }
    Ok(tiers)
}
