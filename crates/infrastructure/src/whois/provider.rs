use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;
use trackdown_application::ports::WhoisProvider;
use trackdown_domain::config::WhoisApiConfig;
use trackdown_domain::DomainError;

/// HTTP client for the registration-lookup service. One GET per lookup,
/// token credential in the Authorization header, no retries.
pub struct JsonWhoisProvider {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl JsonWhoisProvider {
    pub fn new(config: &WhoisApiConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::ProviderTransport(e.to_string()))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl WhoisProvider for JsonWhoisProvider {
    async fn fetch(&self, domain: &str) -> Result<String, DomainError> {
        debug!(domain, url = %self.api_url, "Fetching whois record");

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("domain", domain)])
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Token token={}", self.api_key))
            .send()
            .await
            .map_err(|e| DomainError::ProviderTransport(e.to_string()))?;

        let status = response.status();

        // 400 is the provider's way of saying the domain does not exist
        if status == StatusCode::BAD_REQUEST {
            return Err(DomainError::DomainNotFound(domain.to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::ProviderTransport(e.to_string()))?;

        if status.as_u16() >= 300 {
            return Err(DomainError::ProviderStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
