use serde::{Deserialize, Serialize};

/// Provider access for registration lookups. Lookups are disabled until
/// an API key is set; the cache layer never calls out without one.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhoisApiConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Client-side cap on the provider call; expiry is a provider failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl WhoisApiConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for WhoisApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "https://jsonwhois.com/api/v1/whois/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
