mod blocklist_index;
mod query_log_repository;
mod whois_cache;
mod whois_provider;

pub use blocklist_index::BlocklistIndex;
pub use query_log_repository::QueryLogRepository;
pub use whois_cache::WhoisCacheRepository;
pub use whois_provider::WhoisProvider;
