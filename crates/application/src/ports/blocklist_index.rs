use async_trait::async_trait;
use trackdown_domain::{DomainError, SiteMatcher};

/// Lookup into the compiled blocklist: which source contributed a site.
#[async_trait]
pub trait BlocklistIndex: Send + Sync {
    /// Source tag of the first entry satisfying the matcher, if any.
    async fn find_source(&self, matcher: &SiteMatcher) -> Result<Option<String>, DomainError>;
}
