use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Fallbacks used when the state tree has nothing better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Helper-service domain used until wallet options are loaded.
    #[serde(default = "default_wallet_helper_domain")]
    pub wallet_helper_domain: String,
    /// Fiat currency used when settings are not loaded (default: "USD").
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Analytics dispatcher settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// When false, commands are acknowledged without posting anything.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Pause before reporting custom variables on session init (default: 10000).
    #[serde(default = "default_custom_variable_delay_ms")]
    pub custom_variable_delay_ms: u64,
    /// Upper bound on waiting for user data before giving up (default: 30000).
    #[serde(default = "default_user_data_timeout_ms")]
    pub user_data_timeout_ms: u64,
    /// Poll interval while waiting for user data (default: 250).
    #[serde(default = "default_user_data_poll_ms")]
    pub user_data_poll_ms: u64,
    /// Command queue capacity (default: 32).
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_wallet_helper_domain() -> String {
    "https://wallet-helper.blockchain.com".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_custom_variable_delay_ms() -> u64 {
    10_000
}

fn default_user_data_timeout_ms() -> u64 {
    30_000
}

fn default_user_data_poll_ms() -> u64 {
    250
}

fn default_channel_capacity() -> usize {
    32
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            wallet_helper_domain: default_wallet_helper_domain(),
            currency: default_currency(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            custom_variable_delay_ms: default_custom_variable_delay_ms(),
            user_data_timeout_ms: default_user_data_timeout_ms(),
            user_data_poll_ms: default_user_data_poll_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}
