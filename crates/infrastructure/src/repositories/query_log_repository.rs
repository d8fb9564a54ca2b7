use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::net::IpAddr;
use std::str::FromStr;
use tracing::{debug, warn};
use trackdown_application::ports::QueryLogRepository;
use trackdown_domain::{activity::DailyGroup, DomainError, LogEvent, QueryResult};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn row_to_log_event(row: SqliteRow) -> Option<LogEvent> {
    let log_time: String = row.get("log_time");
    let sys: String = row.get("sys");
    let dns_result: String = row.get("dns_result");

    let timestamp = NaiveDateTime::parse_from_str(&log_time, TIME_FORMAT).ok()?;
    let system: IpAddr = sys.parse().ok()?;
    let result = QueryResult::from_str(&dns_result).ok()?;

    Some(LogEvent {
        id: Some(row.get("id")),
        timestamp,
        system,
        requested_name: row.get("dns_request"),
        result,
    })
}

pub struct SqliteQueryLogRepository {
    pool: SqlitePool,
}

impl SqliteQueryLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryLogRepository for SqliteQueryLogRepository {
    async fn events_around(
        &self,
        system: IpAddr,
        reference: NaiveDateTime,
    ) -> Result<Vec<LogEvent>, DomainError> {
        let reference = reference.format(TIME_FORMAT).to_string();
        let rows = sqlx::query(
            r#"
            SELECT id, datetime(log_time) AS log_time, sys, dns_request, dns_result
            FROM dnslog
            WHERE sys = ?1
              AND log_time > datetime(?2, '-5 seconds')
              AND log_time < datetime(?2, '+3 seconds')
            ORDER BY log_time ASC
            "#,
        )
        .bind(system.to_string())
        .bind(&reference)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::QueryExecution(e.to_string()))?;

        let total = rows.len();
        let events: Vec<LogEvent> = rows.into_iter().filter_map(row_to_log_event).collect();
        if events.len() < total {
            warn!(
                dropped = total - events.len(),
                "Skipped malformed dnslog rows in correlation window"
            );
        }
        Ok(events)
    }

    async fn daily_counts(&self, domain: &str) -> Result<Vec<DailyGroup>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT strftime('%m-%d', log_time) AS log_date, dns_result, COUNT(1) AS count
            FROM dnslog
            WHERE dns_request LIKE ?1
            GROUP BY dns_result, log_date
            "#,
        )
        .bind(format!("%{domain}"))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::QueryExecution(e.to_string()))?;

        debug!(domain, groups = rows.len(), "Fetched daily query groups");

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let dns_result: String = row.get("dns_result");
                Some(DailyGroup {
                    day: row.get("log_date"),
                    result: QueryResult::from_str(&dns_result).ok()?,
                    count: row.get::<i64, _>("count") as u64,
                })
            })
            .collect())
    }
}
