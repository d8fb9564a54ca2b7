use crate::ports::QueryLogRepository;
use crate::services::BlockAttributor;
use chrono::NaiveDateTime;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;
use trackdown_domain::{
    AnnotatedEvent, Attribution, DomainError, QueryResult, ReportAction, RowAction,
};

/// External link templates the requested name is appended to.
#[derive(Debug, Clone)]
pub struct LinkTemplates {
    pub search_url: String,
    pub whois_url: String,
}

/// Returns every log event from one system inside the correlation
/// window around a reference instant, each annotated with its block
/// attribution, presentation class and row actions.
pub struct CorrelateEventsUseCase {
    repository: Arc<dyn QueryLogRepository>,
    attributor: BlockAttributor,
    links: LinkTemplates,
}

impl CorrelateEventsUseCase {
    pub fn new(
        repository: Arc<dyn QueryLogRepository>,
        attributor: BlockAttributor,
        links: LinkTemplates,
    ) -> Self {
        Self {
            repository,
            attributor,
            links,
        }
    }

    /// An empty result is a normal outcome: nothing was logged for that
    /// system in the window.
    pub async fn execute(
        &self,
        system: IpAddr,
        reference: NaiveDateTime,
        searched_site: &str,
    ) -> Result<Vec<AnnotatedEvent>, DomainError> {
        let events = self.repository.events_around(system, reference).await?;
        debug!(%system, %reference, count = events.len(), "Correlated log events");

        let mut annotated = Vec::with_capacity(events.len());
        for event in events {
            let attribution = match event.result {
                QueryResult::Blocked => {
                    Some(self.attributor.attribute(&event.requested_name).await?)
                }
                _ => None,
            };
            let row_class = AnnotatedEvent::classify(
                event.result,
                attribution.as_ref(),
                &event.requested_name,
                searched_site,
            );
            let action = self.action_for(event.result, attribution.as_ref(), &event.requested_name);
            annotated.push(AnnotatedEvent {
                event,
                attribution,
                row_class,
                action,
            });
        }
        Ok(annotated)
    }

    fn action_for(
        &self,
        result: QueryResult,
        attribution: Option<&Attribution>,
        requested_name: &str,
    ) -> Option<RowAction> {
        let report = match result {
            QueryResult::Local => return None,
            QueryResult::Allowed => Some(ReportAction {
                site: requested_name.to_string(),
                blocked: false,
                attributed: true,
            }),
            QueryResult::Blocked => match attribution {
                Some(Attribution::NoTrack) | Some(Attribution::Custom) => Some(ReportAction {
                    site: requested_name.to_string(),
                    blocked: true,
                    attributed: true,
                }),
                Some(Attribution::List(_)) => Some(ReportAction {
                    site: requested_name.to_string(),
                    blocked: true,
                    attributed: false,
                }),
                // Unattributed blocks keep the lookup links but are not
                // reportable
                _ => None,
            },
        };
        Some(RowAction {
            search_url: format!("{}{}", self.links.search_url, requested_name),
            whois_url: format!("{}{}", self.links.whois_url, requested_name),
            report,
        })
    }
}
