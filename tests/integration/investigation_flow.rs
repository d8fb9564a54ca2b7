//! End-to-end investigation flow over a real (in-memory) SQLite store:
//! correlation with attribution, whois cache-aside, and the 30-day
//! activity series, wired the same way the binary wires them.

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use trackdown_application::ports::WhoisCacheRepository;
use trackdown_application::services::BlockAttributor;
use trackdown_application::use_cases::{
    AggregateActivityUseCase, CorrelateEventsUseCase, LinkTemplates, LookupWhoisUseCase,
};
use trackdown_domain::{Attribution, QueryResult, RowClass, WhoisRecord};
use trackdown_infrastructure::database::init_schema;
use trackdown_infrastructure::repositories::{
    SqliteBlocklistIndex, SqliteQueryLogRepository, SqliteWhoisCacheRepository,
};

async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}

async fn insert_event(pool: &SqlitePool, log_time: &str, sys: &str, request: &str, result: &str) {
    sqlx::query("INSERT INTO dnslog (log_time, sys, dns_request, dns_result) VALUES (?, ?, ?, ?)")
        .bind(log_time)
        .bind(sys)
        .bind(request)
        .bind(result)
        .execute(pool)
        .await
        .unwrap();
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn correlate_use_case(pool: &SqlitePool) -> CorrelateEventsUseCase {
    CorrelateEventsUseCase::new(
        Arc::new(SqliteQueryLogRepository::new(pool.clone())),
        BlockAttributor::new(Arc::new(SqliteBlocklistIndex::new(pool.clone()))),
        LinkTemplates {
            search_url: "https://duckduckgo.com/?q=".to_string(),
            whois_url: "https://who.is/whois/".to_string(),
        },
    )
}

#[tokio::test]
async fn blocked_query_is_correlated_and_attributed_to_notrack() {
    let pool = create_test_db().await;
    insert_event(&pool, "2026-08-06 10:00:00", "10.0.0.5", "ads.example.com", "B").await;
    sqlx::query("INSERT INTO blocklist (site, bl_source) VALUES ('.example.com', 'bl_notrack')")
        .execute(&pool)
        .await
        .unwrap();

    let rows = correlate_use_case(&pool)
        .execute("10.0.0.5".parse().unwrap(), at("2026-08-06 10:00:01"), "")
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.event.result, QueryResult::Blocked);
    assert_eq!(row.row_class, RowClass::Blocked);
    assert_eq!(row.attribution, Some(Attribution::NoTrack));
    let report = row.action.as_ref().unwrap().report.as_ref().unwrap();
    assert!(report.blocked && report.attributed);
}

#[tokio::test]
async fn correlation_mixes_results_within_the_window() {
    let pool = create_test_db().await;
    let sys = "192.168.1.30";
    insert_event(&pool, "2026-08-06 17:45:57", sys, "www.example.com", "A").await;
    insert_event(&pool, "2026-08-06 17:45:58", sys, "ads.example.com", "B").await;
    insert_event(&pool, "2026-08-06 17:45:59", sys, "printer.lan", "L").await;
    insert_event(&pool, "2026-08-06 17:46:10", sys, "late.example.com", "A").await;
    sqlx::query("INSERT INTO blocklist (site, bl_source) VALUES ('ads.example.com', 'bl_easylist')")
        .execute(&pool)
        .await
        .unwrap();

    let rows = correlate_use_case(&pool)
        .execute(sys.parse().unwrap(), at("2026-08-06 17:46:00"), "www.example.com")
        .await
        .unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].row_class, RowClass::Highlight);
    assert_eq!(rows[1].row_class, RowClass::Blocked);
    assert_eq!(
        rows[1].attribution,
        Some(Attribution::List("bl_easylist".to_string()))
    );
    assert_eq!(rows[2].row_class, RowClass::Local);
    assert!(rows[2].action.is_none());
}

#[tokio::test]
async fn activity_series_counts_only_the_domain_suffix() {
    let pool = create_test_db().await;
    let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    for _ in 0..5 {
        insert_event(&pool, "2026-08-01 09:00:00", "10.0.0.5", "www.example.com", "A").await;
    }
    insert_event(&pool, "2026-08-01 09:10:00", "10.0.0.5", "ads.example.com", "B").await;
    insert_event(&pool, "2026-08-01 09:11:00", "10.0.0.6", "ads.example.com", "B").await;
    insert_event(&pool, "2026-08-01 09:12:00", "10.0.0.5", "unrelated.org", "A").await;

    let series = AggregateActivityUseCase::new(Arc::new(SqliteQueryLogRepository::new(pool)))
        .execute_at("example.com", today)
        .await
        .unwrap();

    assert_eq!(series.len(), 31);
    let day = series.iter().find(|p| p.day == "08-01").unwrap();
    assert_eq!((day.allowed, day.blocked), (5, 2));
    let total: u64 = series.iter().map(|p| p.allowed + p.blocked).sum();
    assert_eq!(total, 7);
}

#[tokio::test]
async fn whois_round_trip_persists_across_use_case_instances() {
    let pool = create_test_db().await;
    let cache = Arc::new(SqliteWhoisCacheRepository::new(pool.clone()));
    cache
        .save(&WhoisRecord::new(
            "example.com".to_string(),
            at("2026-08-06 10:15:00"),
            r#"{"domain":"example.com","status":"registered"}"#.to_string(),
        ))
        .await
        .unwrap();

    // a fresh repository over the same pool sees the cached record
    let cache_again = Arc::new(SqliteWhoisCacheRepository::new(pool));
    let provider = Arc::new(PanickingProvider);
    let lookup = LookupWhoisUseCase::new(cache_again, provider)
        .execute("example.com")
        .await
        .unwrap();

    assert!(lookup.from_cache);
    assert_eq!(lookup.payload.status.as_deref(), Some("registered"));
    assert_eq!(lookup.saved_at, at("2026-08-06 10:15:00"));
}

/// Provider that must never be reached: cache-aside ordering under test.
struct PanickingProvider;

#[async_trait::async_trait]
impl trackdown_application::ports::WhoisProvider for PanickingProvider {
    async fn fetch(&self, domain: &str) -> Result<String, trackdown_domain::DomainError> {
        panic!("provider called for {domain} despite a cached record");
    }
}
