pub mod client;
pub mod config;
pub mod errors;
pub mod fee_tier;
pub mod logging;
pub mod utils;

// Re-export
pub use client::create_rpc_provider;
pub use config::{RouterConfig, load_dotenv};
pub use errors::SwapRouterError;
pub use fee_tier::{DEFAULT_FEE_TIERS, FeeTier, parse_fee_tiers};
pub use logging::init_logging;
pub use utils::{format_units, get_timestamp_millis, parse_address};
