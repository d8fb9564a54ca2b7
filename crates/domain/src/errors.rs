use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Query execution failed: {0}")]
    QueryExecution(String),

    #[error("Domain does not exist: {0}")]
    DomainNotFound(String),

    #[error("Whois provider returned status {status}: {body}")]
    ProviderStatus { status: u16, body: String },

    #[error("Whois provider unreachable: {0}")]
    ProviderTransport(String),

    #[error("Whois record error: {0}")]
    ProviderPayload(String),

    #[error("No whois API key configured")]
    ConfigurationMissing,

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid site: {0}")]
    InvalidSite(String),
}
