use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`YahooProvider`](super::YahooProvider).
///
/// Every field has a default, so an empty `[provider]` table is valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YahooConfig {
    /// Scheme and host of the chart API. Tests point this at a local stub.
    pub base_url: String,
    /// Yahoo rejects requests that carry no browser-like user agent.
    pub user_agent: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
