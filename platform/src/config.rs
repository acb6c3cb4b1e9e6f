//! Platform configuration

use economics::{PricingParams, RewardRates};
use serde::{Deserialize, Serialize};

use token::Address;

/// Deployment parameters of the platform. Immutable after
/// construction.
///
/// `start_price` is in smallest native-currency units per whole token;
/// `start_supply_tokens` is in whole tokens and gets scaled to base
/// units by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Privileged address allowed to withdraw retained treasury funds.
    pub owner: Address,
    /// Address under which the platform holds token custody.
    pub custody: Address,
    /// Length of every round, in seconds.
    pub round_duration: u64,
    pub start_price: u64,
    pub start_supply_tokens: u64,
    pub rewards: RewardRates,
    pub pricing: PricingParams,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            owner: "owner".to_string(),
            custody: "platform".to_string(),
            round_duration: 259_200, // 3 days
            start_price: 10_000_000_000_000,
            start_supply_tokens: 100_000,
            rewards: RewardRates::default(),
            pricing: PricingParams::default(),
        }
    }
}

impl PlatformConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
