#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use trackdown_application::ports::{
    BlocklistIndex, QueryLogRepository, WhoisCacheRepository, WhoisProvider,
};
use trackdown_domain::{activity::DailyGroup, DomainError, LogEvent, SiteMatcher, WhoisRecord};

pub struct MockQueryLogRepository {
    events: Arc<RwLock<Vec<LogEvent>>>,
    groups: Arc<RwLock<Vec<DailyGroup>>>,
    fail_with: Arc<RwLock<Option<String>>>,
}

impl MockQueryLogRepository {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
            groups: Arc::new(RwLock::new(Vec::new())),
            fail_with: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn set_events(&self, events: Vec<LogEvent>) {
        *self.events.write().await = events;
    }

    pub async fn set_groups(&self, groups: Vec<DailyGroup>) {
        *self.groups.write().await = groups;
    }

    pub async fn set_failure(&self, message: &str) {
        *self.fail_with.write().await = Some(message.to_string());
    }
}

#[async_trait]
impl QueryLogRepository for MockQueryLogRepository {
    async fn events_around(
        &self,
        _system: IpAddr,
        _reference: NaiveDateTime,
    ) -> Result<Vec<LogEvent>, DomainError> {
        if let Some(message) = self.fail_with.read().await.clone() {
            return Err(DomainError::QueryExecution(message));
        }
        Ok(self.events.read().await.clone())
    }

    async fn daily_counts(&self, _domain: &str) -> Result<Vec<DailyGroup>, DomainError> {
        if let Some(message) = self.fail_with.read().await.clone() {
            return Err(DomainError::QueryExecution(message));
        }
        Ok(self.groups.read().await.clone())
    }
}

/// In-memory blocklist with the same matcher semantics as the SQL
/// index. Records every matcher it was asked to evaluate.
pub struct MockBlocklistIndex {
    entries: Arc<RwLock<Vec<(String, String)>>>,
    seen: Arc<RwLock<Vec<SiteMatcher>>>,
}

impl MockBlocklistIndex {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            seen: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn add_entry(&self, site: &str, source: &str) {
        self.entries
            .write()
            .await
            .push((site.to_string(), source.to_string()));
    }

    pub async fn seen_matchers(&self) -> Vec<SiteMatcher> {
        self.seen.read().await.clone()
    }
}

#[async_trait]
impl BlocklistIndex for MockBlocklistIndex {
    async fn find_source(&self, matcher: &SiteMatcher) -> Result<Option<String>, DomainError> {
        self.seen.write().await.push(matcher.clone());
        let entries = self.entries.read().await;
        let hit = entries.iter().find(|(site, _)| match matcher {
            SiteMatcher::Exact(name) => site == name,
            SiteMatcher::RegistrableSuffix(suffix) => site.ends_with(suffix.as_str()),
            SiteMatcher::BareTld(tld) => site == tld,
        });
        Ok(hit.map(|(_, source)| source.clone()))
    }
}

pub struct MockWhoisCache {
    records: Arc<RwLock<Vec<WhoisRecord>>>,
    saves: AtomicUsize,
}

impl MockWhoisCache {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            saves: AtomicUsize::new(0),
        }
    }

    pub async fn seed(&self, record: WhoisRecord) {
        self.records.write().await.push(record);
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WhoisCacheRepository for MockWhoisCache {
    async fn find(&self, domain: &str) -> Result<Option<WhoisRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.domain == domain)
            .cloned())
    }

    async fn save(&self, record: &WhoisRecord) -> Result<(), DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.records.write().await.push(record.clone());
        Ok(())
    }
}

pub struct MockWhoisProvider {
    response: Arc<RwLock<Result<String, DomainError>>>,
    calls: AtomicUsize,
}

impl MockWhoisProvider {
    pub fn returning(body: &str) -> Self {
        Self {
            response: Arc::new(RwLock::new(Ok(body.to_string()))),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            response: Arc::new(RwLock::new(Err(error))),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WhoisProvider for MockWhoisProvider {
    async fn fetch(&self, _domain: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.read().await.clone()
    }
}
