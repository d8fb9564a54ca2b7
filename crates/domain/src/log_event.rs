use chrono::NaiveDateTime;
use std::net::IpAddr;
use std::str::FromStr;

/// One DNS query observation from the resolver log. Immutable here: the
/// resolution subsystem writes these rows, investigation only reads them.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub id: Option<i64>,
    pub timestamp: NaiveDateTime,
    pub system: IpAddr,
    pub requested_name: String,
    pub result: QueryResult,
}

/// Outcome recorded for a query, stored as a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryResult {
    Allowed,
    Blocked,
    Local,
}

impl QueryResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryResult::Allowed => "A",
            QueryResult::Blocked => "B",
            QueryResult::Local => "L",
        }
    }
}

impl FromStr for QueryResult {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(QueryResult::Allowed),
            "B" => Ok(QueryResult::Blocked),
            "L" => Ok(QueryResult::Local),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for QueryResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
