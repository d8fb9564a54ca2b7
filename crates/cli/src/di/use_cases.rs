use super::Repositories;
use std::sync::Arc;
use trackdown_application::services::BlockAttributor;
use trackdown_application::use_cases::{
    AggregateActivityUseCase, CorrelateEventsUseCase, LinkTemplates, LookupWhoisUseCase,
};
use trackdown_domain::config::Config;

pub struct UseCases {
    pub correlate: Arc<CorrelateEventsUseCase>,
    pub lookup_whois: Arc<LookupWhoisUseCase>,
    pub aggregate: Arc<AggregateActivityUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        let attributor = BlockAttributor::new(repos.blocklist.clone());
        let links = LinkTemplates {
            search_url: config.investigate.search_url.clone(),
            whois_url: config.investigate.whois_url.clone(),
        };

        Self {
            correlate: Arc::new(CorrelateEventsUseCase::new(
                repos.query_log.clone(),
                attributor,
                links,
            )),
            lookup_whois: Arc::new(LookupWhoisUseCase::new(
                repos.whois_cache.clone(),
                repos.whois_provider.clone(),
            )),
            aggregate: Arc::new(AggregateActivityUseCase::new(repos.query_log.clone())),
        }
    }
}
