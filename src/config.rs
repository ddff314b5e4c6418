//! Engine configuration.
//!
//! Loaded from TOML or from environment variables, falling back to
//! defaults for anything unset.
//!
//! ```toml
//! order_capacity = 4096
//! zero_ask_policy = "refund"
//! ```

use std::env;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default number of pre-allocated order slots per pool
pub const DEFAULT_ORDER_CAPACITY: usize = 1024;

/// What happens to an incoming order whose wanted amount is fully satisfied
/// while escrow remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroAskPolicy {
    /// Queue the remainder with a zero ask. It will cross with any future
    /// counter-order and give its remaining escrow away. A fill that would
    /// deliver more than the remaining ask aborts the submission.
    #[default]
    Preserve,
    /// Never overshoot the ask: a resting order offering more than the
    /// incoming order still wants is incompatible, and once the ask reaches
    /// zero the leftover escrow is returned to the trader.
    Refund,
}

impl FromStr for ZeroAskPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(ZeroAskPolicy::Preserve),
            "refund" => Ok(ZeroAskPolicy::Refund),
            other => Err(ConfigError::InvalidValue {
                key: "zero_ask_policy".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Per-pool engine settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Pre-allocated order slots per pool
    pub order_capacity: usize,
    pub zero_ask_policy: ZeroAskPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            order_capacity: DEFAULT_ORDER_CAPACITY,
            zero_ask_policy: ZeroAskPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read `DARK_POOL_ORDER_CAPACITY` and `DARK_POOL_ZERO_ASK_POLICY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = env::var("DARK_POOL_ORDER_CAPACITY") {
            config.order_capacity = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "DARK_POOL_ORDER_CAPACITY".to_string(),
                value,
            })?;
        }

        if let Ok(value) = env::var("DARK_POOL_ZERO_ASK_POLICY") {
            config.zero_ask_policy = value.parse()?;
        }

        Ok(config)
    }

    pub fn with_zero_ask_policy(mut self, policy: ZeroAskPolicy) -> Self {
        self.zero_ask_policy = policy;
        self
    }
}
