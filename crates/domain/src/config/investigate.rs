use serde::{Deserialize, Serialize};

/// External link templates for correlated rows. The requested name is
/// appended to each.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InvestigateConfig {
    #[serde(default = "default_search_url")]
    pub search_url: String,

    #[serde(default = "default_whois_url")]
    pub whois_url: String,
}

impl Default for InvestigateConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            whois_url: default_whois_url(),
        }
    }
}

fn default_search_url() -> String {
    "https://duckduckgo.com/?q=".to_string()
}

fn default_whois_url() -> String {
    "https://who.is/whois/".to_string()
}
