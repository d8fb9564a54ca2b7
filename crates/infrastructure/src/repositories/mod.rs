pub mod blocklist_index;
pub mod query_log_repository;
pub mod whois_cache_repository;

pub use blocklist_index::SqliteBlocklistIndex;
pub use query_log_repository::SqliteQueryLogRepository;
pub use whois_cache_repository::SqliteWhoisCacheRepository;
