mod database;
mod errors;
mod investigate;
mod logging;
mod root;
mod server;
mod whois_api;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use investigate::InvestigateConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use whois_api::WhoisApiConfig;
