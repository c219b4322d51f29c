use crate::common::{DEFAULT_FEE_TIERS, FeeTier, SwapRouterError, init_logging, parse_fee_tiers};
use crate::dex::chains::{Network, NetworkProfile};

pub const FEE_TIERS_ENV: &str = "ROUTER_FEE_TIERS";
pub const LOG_LEVEL_ENV: &str = "ROUTER_LOG";
pub const LOG_JSON_ENV: &str = "ROUTER_LOG_JSON";

/// Loads `.env` from the current or project directory. Call before reading env vars (e.g. in tests).
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Runtime settings for one route finder.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub profile: NetworkProfile,
    pub fee_tiers: Vec<FeeTier>,
    pub log_level: String,
    pub log_json: bool,
}

impl RouterConfig {
    /// Built-in profile and default fee tiers, no environment lookups.
    pub fn new(network: Network) -> Result<Self, SwapRouterError> {
        Ok(Self {
            profile: network.profile()?,
            fee_tiers: DEFAULT_FEE_TIERS.to_vec(),
            log_level: "info".to_string(),
            log_json: false,
        })
    }

    /// Like [RouterConfig::new], then applies overrides from the environment (after `.env`).
    pub fn from_env(network: Network) -> Result<Self, SwapRouterError> {
        load_dotenv();
        Self::new(network)?.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Installs the global tracing subscriber from the configured level and format.
    pub fn init_logging(&self) {
        init_logging(&self.log_level, self.log_json);
    }

    /// Applies overrides from any key/value source; empty values are ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, SwapRouterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(self.profile.network.rpc_env_var()) {
            self.profile = self.profile.with_rpc_url(url.trim());
        }
        if let Some(tiers) = get(FEE_TIERS_ENV) {
            self.fee_tiers = parse_fee_tiers(&tiers)?;
        }
        if let Some(level) = get(LOG_LEVEL_ENV) {
            self.log_level = level.trim().to_string();
        }
        if let Some(json) = get(LOG_JSON_ENV) {
            self.log_json = match json.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(SwapRouterError::ConfigError(format!(
                        "Invalid {} value '{}'",
                        LOG_JSON_ENV, other
                    )));
                }
            };
        }
        Ok(self)
    }
}
