use serde::{Deserialize, Serialize};
use trackdown_application::use_cases::WhoisLookup;
use trackdown_domain::{AnnotatedEvent, Attribution, DailyCount};

#[derive(Deserialize, Debug)]
pub struct InvestigateParams {
    pub site: Option<String>,
    pub sys: Option<String>,
    pub datetime: Option<String>,
}

/// The three sections are independent read paths: a section is absent
/// when its parameters were not supplied, and carries its own error
/// when its query failed. One failing section never hides the others.
#[derive(Serialize, Debug, Default)]
pub struct InvestigateResponse {
    pub site: Option<String>,
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois: Option<WhoisSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivitySection>,
}

#[derive(Serialize, Debug)]
pub struct CorrelationSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<EventRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct EventRow {
    pub time: String,
    pub system: String,
    pub site: String,
    pub result: &'static str,
    pub row_class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionView>,
}

#[derive(Serialize, Debug)]
pub struct ActionView {
    pub search_url: String,
    pub whois_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportView>,
}

#[derive(Serialize, Debug)]
pub struct ReportView {
    pub site: String,
    pub blocked: bool,
    pub attributed: bool,
}

impl From<AnnotatedEvent> for EventRow {
    fn from(row: AnnotatedEvent) -> Self {
        let block_reason = match &row.attribution {
            Some(Attribution::Unknown) => Some("Invalid request".to_string()),
            Some(attribution) => attribution.label().map(|name| format!("Blocked by {name}")),
            None => None,
        };
        Self {
            time: row.event.timestamp.format("%H:%M:%S").to_string(),
            system: row.event.system.to_string(),
            site: row.event.requested_name.clone(),
            result: row.event.result.as_str(),
            row_class: row.row_class.as_str(),
            block_reason,
            action: row.action.map(|action| ActionView {
                search_url: action.search_url,
                whois_url: action.whois_url,
                report: action.report.map(|report| ReportView {
                    site: report.site,
                    blocked: report.blocked,
                    attributed: report.attributed,
                }),
            }),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct WhoisSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<WhoisView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub needs_api_key: bool,
}

#[derive(Serialize, Debug)]
pub struct WhoisView {
    pub domain: Option<String>,
    pub registrar: Option<String>,
    pub status: Option<String>,
    pub created_on: Option<String>,
    pub updated_on: Option<String>,
    pub expires_on: Option<String>,
    pub nameservers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant: Option<RegistrantView>,
    pub retrieved_at: String,
    pub from_cache: bool,
}

#[derive(Serialize, Debug)]
pub struct RegistrantView {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
}

fn date_only(value: Option<String>) -> Option<String> {
    value.map(|v| v.chars().take(10).collect())
}

fn capitalized(value: Option<String>) -> Option<String> {
    value.map(|v| {
        let mut chars = v.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => v,
        }
    })
}

impl From<WhoisLookup> for WhoisView {
    fn from(lookup: WhoisLookup) -> Self {
        let payload = lookup.payload;
        Self {
            domain: payload.domain,
            registrar: payload.registrar.and_then(|r| r.name),
            status: capitalized(payload.status),
            created_on: date_only(payload.created_on),
            updated_on: date_only(payload.updated_on),
            expires_on: date_only(payload.expires_on),
            nameservers: payload
                .nameservers
                .into_iter()
                .filter_map(|ns| ns.name)
                .take(4)
                .collect(),
            registrant: payload.registrant_contacts.into_iter().next().map(|c| {
                RegistrantView {
                    name: c.name,
                    organization: c.organization,
                    address: c.address,
                    city: c.city,
                    zip: c.zip,
                    state: c.state,
                    country: c.country,
                    phone: c.phone,
                    fax: c.fax,
                    email: c.email.map(|e| e.to_lowercase()),
                }
            }),
            retrieved_at: lookup.saved_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            from_cache: lookup.from_cache,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ActivitySection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<DayView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct DayView {
    pub day: String,
    pub allowed: u64,
    pub blocked: u64,
}

impl From<DailyCount> for DayView {
    fn from(point: DailyCount) -> Self {
        Self {
            day: point.day,
            allowed: point.allowed,
            blocked: point.blocked,
        }
    }
}
