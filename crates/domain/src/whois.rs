use chrono::NaiveDateTime;
use serde::Deserialize;

/// One cached registration snapshot, stored raw exactly as the provider
/// returned it. Records never expire: a row, once fetched, is reused
/// indefinitely.
#[derive(Debug, Clone)]
pub struct WhoisRecord {
    pub id: Option<i64>,
    pub saved_at: NaiveDateTime,
    pub domain: String,
    pub raw: String,
}

impl WhoisRecord {
    pub fn new(domain: String, saved_at: NaiveDateTime, raw: String) -> Self {
        Self {
            id: None,
            saved_at,
            domain,
            raw,
        }
    }
}

/// Structured view of the provider's registration document. Every field
/// is optional: the provider omits sections freely, and an error body
/// carries nothing but `error`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WhoisPayload {
    pub domain: Option<String>,
    pub registrar: Option<Registrar>,
    pub status: Option<String>,
    pub created_on: Option<String>,
    pub updated_on: Option<String>,
    pub expires_on: Option<String>,
    #[serde(default)]
    pub nameservers: Vec<Nameserver>,
    #[serde(default)]
    pub registrant_contacts: Vec<RegistrantContact>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Registrar {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Nameserver {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RegistrantContact {
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
