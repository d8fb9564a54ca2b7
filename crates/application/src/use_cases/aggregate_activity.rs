use crate::ports::QueryLogRepository;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::debug;
use trackdown_domain::{
    activity::{fold_groups, zero_filled_buckets},
    DailyCount, DomainError,
};

/// Fixed-window daily histogram of allowed vs blocked queries for a
/// domain. Always 31 points; days with no activity stay zero.
pub struct AggregateActivityUseCase {
    repository: Arc<dyn QueryLogRepository>,
}

impl AggregateActivityUseCase {
    pub fn new(repository: Arc<dyn QueryLogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, domain: &str) -> Result<Vec<DailyCount>, DomainError> {
        self.execute_at(domain, Utc::now().date_naive()).await
    }

    /// Split out so the window edges are testable without a clock.
    pub async fn execute_at(
        &self,
        domain: &str,
        today: NaiveDate,
    ) -> Result<Vec<DailyCount>, DomainError> {
        let groups = self.repository.daily_counts(domain).await?;
        debug!(domain, groups = groups.len(), "Aggregating query activity");

        let mut buckets = zero_filled_buckets(today);
        fold_groups(&mut buckets, &groups);
        Ok(buckets)
    }
}
