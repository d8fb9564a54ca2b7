use async_trait::async_trait;
use trackdown_domain::DomainError;

/// Remote registration-lookup service. Calls are metered by the
/// provider; the cache layer is responsible for bounding call volume.
#[async_trait]
pub trait WhoisProvider: Send + Sync {
    /// Raw response body for a 2xx lookup. A 400 maps to
    /// `DomainNotFound`; any other failure status or transport error is
    /// a provider failure. Never retried here.
    async fn fetch(&self, domain: &str) -> Result<String, DomainError>;
}
