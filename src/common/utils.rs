// src/common/utils.rs
use crate::common::SwapRouterError;
use ethers::types::{Address, U256};
use std::str::FromStr;

// Parse a hex address, with or without 0x prefix, in any letter case
pub fn parse_address(value: &str) -> Result<Address, SwapRouterError> {
    let trimmed = value.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if hex.len() != 40 {
        return Err(SwapRouterError::InvalidAddress(value.to_string()));
    }
    Address::from_str(hex).map_err(|_| SwapRouterError::InvalidAddress(value.to_string()))
}

const MAX_U256_DECIMALS: u8 = 77;

/// Converts a raw integer amount (smallest unit) into a decimal string using `decimals`,
/// trailing zeros trimmed (`1500000`, 6 -> `1.5`).
pub fn format_units(amount: U256, decimals: u8) -> String {
    let scaled = if decimals <= MAX_U256_DECIMALS {
        ethers::utils::format_units(amount, u32::from(decimals)).ok()
    } else {
        None
    };
    // more decimals than a U256 can carry: every digit is fractional
    let formatted = scaled.unwrap_or_else(|| {
        let digits = amount.to_string();
        let pad = usize::from(decimals).saturating_sub(digits.len());
        format!("0.{}{}", "0".repeat(pad), digits)
    });
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

// get timestamp in milliseconds
pub fn get_timestamp_millis() -> u64 {
    chrono::Utc::now()
        .timestamp_millis()
        .try_into()
        .unwrap_or(0)
}
