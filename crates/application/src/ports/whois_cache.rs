use async_trait::async_trait;
use trackdown_domain::{DomainError, WhoisRecord};

/// Persistent whois snapshot store. No TTL: records are kept until an
/// eviction policy lands behind this trait.
#[async_trait]
pub trait WhoisCacheRepository: Send + Sync {
    /// First record stored for the domain, if any. No freshness check.
    async fn find(&self, domain: &str) -> Result<Option<WhoisRecord>, DomainError>;

    /// Persist a snapshot exactly as fetched.
    async fn save(&self, record: &WhoisRecord) -> Result<(), DomainError>;
}
