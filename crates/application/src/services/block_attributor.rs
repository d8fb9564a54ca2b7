use crate::ports::BlocklistIndex;
use std::sync::Arc;
use tracing::debug;
use trackdown_domain::{Attribution, DomainError, SiteMatcher};

/// Resolves which blocklist caused a block by walking the ordered
/// fallback chain against the index: exact entry, then any entry ending
/// with the registrable domain, then a bare-TLD entry.
pub struct BlockAttributor {
    index: Arc<dyn BlocklistIndex>,
}

impl BlockAttributor {
    pub fn new(index: Arc<dyn BlocklistIndex>) -> Self {
        Self { index }
    }

    pub async fn attribute(&self, requested_name: &str) -> Result<Attribution, DomainError> {
        for matcher in SiteMatcher::chain(requested_name) {
            if let Some(tag) = self.index.find_source(&matcher).await? {
                debug!(requested_name, source = %tag, ?matcher, "Block attributed");
                return Ok(Attribution::from_source_tag(&tag));
            }
        }
        // No entry found: probably an IP literal or malformed lookup
        Ok(Attribution::Unknown)
    }
}
