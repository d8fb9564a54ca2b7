pub mod aggregate_activity;
pub mod correlate_events;
pub mod lookup_whois;

pub use aggregate_activity::AggregateActivityUseCase;
pub use correlate_events::{CorrelateEventsUseCase, LinkTemplates};
pub use lookup_whois::{LookupWhoisUseCase, WhoisLookup};
