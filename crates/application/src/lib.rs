//! Trackdown Application Layer
//!
//! Ports (traits) over the log store, blocklist index, whois cache and
//! whois provider, plus the use cases that orchestrate them.
pub mod ports;
pub mod services;
pub mod use_cases;
