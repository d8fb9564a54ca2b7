use std::sync::Arc;
use trackdown_application::use_cases::{
    AggregateActivityUseCase, CorrelateEventsUseCase, LookupWhoisUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub correlate: Arc<CorrelateEventsUseCase>,
    pub lookup_whois: Arc<LookupWhoisUseCase>,
    pub aggregate: Arc<AggregateActivityUseCase>,
    /// Provider lookups are skipped entirely until an API key is set.
    pub whois_configured: bool,
}
