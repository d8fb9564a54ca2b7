//! Trackdown Infrastructure Layer
//!
//! SQLite-backed repositories for the query log, blocklist index and
//! whois cache, plus the HTTP client for the whois provider.
pub mod database;
pub mod repositories;
pub mod whois;
