use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::net::IpAddr;
use trackdown_domain::{activity::DailyGroup, DomainError, LogEvent};

/// Read-only view over the append-only DNS query log.
#[async_trait]
pub trait QueryLogRepository: Send + Sync {
    /// Events for one system inside the correlation window around the
    /// reference instant: `(reference - 5s, reference + 3s)`, both ends
    /// exclusive, ascending by timestamp. The look-back is wider than
    /// the look-ahead so the moments leading up to the reference event
    /// are kept.
    async fn events_around(
        &self,
        system: IpAddr,
        reference: NaiveDateTime,
    ) -> Result<Vec<LogEvent>, DomainError>;

    /// Per-day, per-result totals for every logged name ending with the
    /// given domain, across all time. Grouping is by `%m-%d` day key.
    async fn daily_counts(&self, domain: &str) -> Result<Vec<DailyGroup>, DomainError>;
}
