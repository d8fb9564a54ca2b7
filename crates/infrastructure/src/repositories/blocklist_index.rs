use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use trackdown_application::ports::BlocklistIndex;
use trackdown_domain::{DomainError, SiteMatcher};

/// Blocklist lookups backed by the `blocklist` table the list compiler
/// maintains. Each matcher strategy is its own parameterized query; the
/// fallback ordering lives with the caller.
pub struct SqliteBlocklistIndex {
    pool: SqlitePool,
}

impl SqliteBlocklistIndex {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlocklistIndex for SqliteBlocklistIndex {
    async fn find_source(&self, matcher: &SiteMatcher) -> Result<Option<String>, DomainError> {
        let query = match matcher {
            SiteMatcher::Exact(name) => {
                sqlx::query("SELECT bl_source FROM blocklist WHERE site = ?1 LIMIT 1")
                    .bind(name.clone())
            }
            SiteMatcher::RegistrableSuffix(suffix) => {
                sqlx::query("SELECT bl_source FROM blocklist WHERE site LIKE ?1 LIMIT 1")
                    .bind(format!("%{suffix}"))
            }
            SiteMatcher::BareTld(tld) => {
                sqlx::query("SELECT bl_source FROM blocklist WHERE site = ?1 LIMIT 1")
                    .bind(tld.clone())
            }
        };

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::QueryExecution(e.to_string()))?;

        Ok(row.map(|r| r.get("bl_source")))
    }
}
