//! Trackdown Domain Layer
pub mod activity;
pub mod attribution;
pub mod config;
pub mod errors;
pub mod investigation;
pub mod log_event;
pub mod validators;
pub mod whois;

pub use activity::{DailyCount, DailyGroup};
pub use attribution::{Attribution, SiteMatcher};
pub use config::Config;
pub use errors::DomainError;
pub use investigation::{AnnotatedEvent, ReportAction, RowAction, RowClass};
pub use log_event::{LogEvent, QueryResult};
pub use whois::{WhoisPayload, WhoisRecord};
