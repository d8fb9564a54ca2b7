use sqlx::SqlitePool;
use std::sync::Arc;
use trackdown_domain::config::Config;
use trackdown_domain::DomainError;
use trackdown_infrastructure::repositories::{
    SqliteBlocklistIndex, SqliteQueryLogRepository, SqliteWhoisCacheRepository,
};
use trackdown_infrastructure::whois::JsonWhoisProvider;

pub struct Repositories {
    pub query_log: Arc<SqliteQueryLogRepository>,
    pub blocklist: Arc<SqliteBlocklistIndex>,
    pub whois_cache: Arc<SqliteWhoisCacheRepository>,
    pub whois_provider: Arc<JsonWhoisProvider>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, config: &Config) -> Result<Self, DomainError> {
        Ok(Self {
            query_log: Arc::new(SqliteQueryLogRepository::new(pool.clone())),
            blocklist: Arc::new(SqliteBlocklistIndex::new(pool.clone())),
            whois_cache: Arc::new(SqliteWhoisCacheRepository::new(pool)),
            whois_provider: Arc::new(JsonWhoisProvider::new(&config.whois)?),
        })
    }
}
