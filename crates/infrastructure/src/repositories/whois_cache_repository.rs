use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{Row, SqlitePool};
use tokio::sync::OnceCell;
use tracing::{debug, info};
use trackdown_application::ports::WhoisCacheRepository;
use trackdown_domain::{DomainError, WhoisRecord};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Whois snapshots persisted in the `whois` table, created lazily the
/// first time the cache is touched. Rows accumulate without eviction;
/// reads take the oldest row for a domain.
pub struct SqliteWhoisCacheRepository {
    pool: SqlitePool,
    table_ready: OnceCell<()>,
}

impl SqliteWhoisCacheRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            table_ready: OnceCell::new(),
        }
    }

    async fn ensure_table(&self) -> Result<(), DomainError> {
        self.table_ready
            .get_or_try_init(|| async {
                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS whois (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        save_time DATETIME NOT NULL,
                        domain TEXT NOT NULL,
                        record TEXT NOT NULL
                    )
                    "#,
                )
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::QueryExecution(e.to_string()))?;
                info!("Whois cache table ready");
                Ok::<(), DomainError>(())
            })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl WhoisCacheRepository for SqliteWhoisCacheRepository {
    async fn find(&self, domain: &str) -> Result<Option<WhoisRecord>, DomainError> {
        self.ensure_table().await?;

        let row = sqlx::query(
            r#"
            SELECT id, datetime(save_time) AS save_time, domain, record
            FROM whois
            WHERE domain = ?1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::QueryExecution(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let save_time: String = row.get("save_time");
        let saved_at = NaiveDateTime::parse_from_str(&save_time, TIME_FORMAT)
            .map_err(|e| DomainError::QueryExecution(format!("bad save_time: {e}")))?;

        debug!(domain, %saved_at, "Whois cache hit");
        Ok(Some(WhoisRecord {
            id: Some(row.get("id")),
            saved_at,
            domain: row.get("domain"),
            raw: row.get("record"),
        }))
    }

    async fn save(&self, record: &WhoisRecord) -> Result<(), DomainError> {
        self.ensure_table().await?;

        sqlx::query("INSERT INTO whois (save_time, domain, record) VALUES (?1, ?2, ?3)")
            .bind(record.saved_at.format(TIME_FORMAT).to_string())
            .bind(&record.domain)
            .bind(&record.raw)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::QueryExecution(e.to_string()))?;

        debug!(domain = %record.domain, "Whois record cached");
        Ok(())
    }
}
