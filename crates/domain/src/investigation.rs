use crate::{Attribution, LogEvent, QueryResult};

/// Presentation emphasis for one correlated row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Normal,
    Blocked,
    /// Blocked with no resolvable reason. Treated as a probable IP
    /// literal or malformed lookup, not a data gap.
    Invalid,
    Local,
    /// The row matches the site that was searched for.
    Highlight,
}

impl RowClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowClass::Normal => "normal",
            RowClass::Blocked => "blocked",
            RowClass::Invalid => "invalid",
            RowClass::Local => "local",
            RowClass::Highlight => "highlight",
        }
    }
}

/// Payload for the report-site workflow handled outside this service.
/// `blocked` is the state being reported, `attributed` whether the block
/// is already tied to a curated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportAction {
    pub site: String,
    pub blocked: bool,
    pub attributed: bool,
}

/// Per-row links and actions. Local queries carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub search_url: String,
    pub whois_url: String,
    pub report: Option<ReportAction>,
}

/// A log event joined with its block attribution and presentation hints.
#[derive(Debug, Clone)]
pub struct AnnotatedEvent {
    pub event: LogEvent,
    pub attribution: Option<Attribution>,
    pub row_class: RowClass,
    pub action: Option<RowAction>,
}

impl AnnotatedEvent {
    /// Classify a row the way the query table renders it. Highlight wins
    /// whenever the requested name is the searched site, whatever the
    /// query result was.
    pub fn classify(
        result: QueryResult,
        attribution: Option<&Attribution>,
        requested_name: &str,
        searched_site: &str,
    ) -> RowClass {
        if !searched_site.is_empty() && requested_name == searched_site {
            return RowClass::Highlight;
        }
        match result {
            QueryResult::Allowed => RowClass::Normal,
            QueryResult::Blocked => match attribution {
                Some(Attribution::Unknown) => RowClass::Invalid,
                _ => RowClass::Blocked,
            },
            QueryResult::Local => RowClass::Local,
        }
    }
}
