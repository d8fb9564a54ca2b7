use crate::ports::{WhoisCacheRepository, WhoisProvider};
use chrono::{NaiveDateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};
use trackdown_domain::{DomainError, WhoisPayload, WhoisRecord};

/// Registration data for a domain plus where it came from.
#[derive(Debug, Clone)]
pub struct WhoisLookup {
    pub payload: WhoisPayload,
    pub saved_at: NaiveDateTime,
    pub from_cache: bool,
}

/// Cache-aside registration lookup. The cache must be checked before
/// the provider is called: that ordering bounds spend on the metered
/// provider API. Cached records never expire.
pub struct LookupWhoisUseCase {
    cache: Arc<dyn WhoisCacheRepository>,
    provider: Arc<dyn WhoisProvider>,
}

impl LookupWhoisUseCase {
    pub fn new(cache: Arc<dyn WhoisCacheRepository>, provider: Arc<dyn WhoisProvider>) -> Self {
        Self { cache, provider }
    }

    pub async fn execute(&self, domain: &str) -> Result<WhoisLookup, DomainError> {
        if let Some(record) = self.cache.find(domain).await? {
            debug!(domain, saved_at = %record.saved_at, "Whois served from cache");
            return Self::decode(record.raw, record.saved_at, true);
        }

        let raw = self.provider.fetch(domain).await?;
        let saved_at = Utc::now().naive_utc();

        // Persisted unconditionally, parseable or not: the quota was
        // spent, a retry must not spend it again.
        let record = WhoisRecord::new(domain.to_string(), saved_at, raw);
        if let Err(e) = self.cache.save(&record).await {
            warn!(domain, error = %e, "Failed to cache whois record");
        }
        info!(domain, "Whois record fetched from provider");

        Self::decode(record.raw, saved_at, false)
    }

    fn decode(
        raw: String,
        saved_at: NaiveDateTime,
        from_cache: bool,
    ) -> Result<WhoisLookup, DomainError> {
        let payload: WhoisPayload = serde_json::from_str(&raw)
            .map_err(|e| DomainError::ProviderPayload(format!("undecodable record: {e}")))?;

        // Provider-reported error embedded in an otherwise-good response
        if let Some(error) = payload.error {
            return Err(DomainError::ProviderPayload(error));
        }

        Ok(WhoisLookup {
            payload,
            saved_at,
            from_cache,
        })
    }
}
