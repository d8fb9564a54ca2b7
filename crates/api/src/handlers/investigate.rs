use crate::dto::{
    ActivitySection, CorrelationSection, DayView, EventRow, InvestigateParams,
    InvestigateResponse, WhoisSection, WhoisView,
};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, error, instrument};
use trackdown_domain::{validators, DomainError};

/// One investigation request. Correlation runs when `sys` and
/// `datetime` both validate, whois and activity when `site` does.
/// Invalid parameters are dropped at the boundary exactly like absent
/// ones, and each section fails on its own.
#[instrument(skip(state), name = "api_investigate")]
pub async fn investigate(
    State(state): State<AppState>,
    Query(params): Query<InvestigateParams>,
) -> Json<InvestigateResponse> {
    let site = params
        .site
        .as_deref()
        .and_then(|s| validators::validate_site(s).ok().map(str::to_string));
    let domain = site.as_deref().map(validators::registrable_domain);
    let system = params
        .sys
        .as_deref()
        .and_then(|s| validators::parse_system(s).ok());
    let reference = params
        .datetime
        .as_deref()
        .and_then(|s| validators::parse_reference_time(s).ok());

    debug!(?site, ?domain, ?system, ?reference, "Investigation request");

    let mut response = InvestigateResponse {
        site: site.clone(),
        domain: domain.clone(),
        ..Default::default()
    };

    if let (Some(system), Some(reference)) = (system, reference) {
        let searched = site.as_deref().unwrap_or("");
        response.correlation = Some(match state.correlate.execute(system, reference, searched).await {
            Ok(events) => CorrelationSection {
                events: Some(events.into_iter().map(EventRow::from).collect()),
                error: None,
            },
            Err(e) => {
                error!(error = %e, "Correlation query failed");
                CorrelationSection {
                    events: None,
                    error: Some(e.to_string()),
                }
            }
        });
    }

    let Some(domain) = domain else {
        return Json(response);
    };

    response.whois = Some(if !state.whois_configured {
        WhoisSection {
            data: None,
            error: Some(DomainError::ConfigurationMissing.to_string()),
            needs_api_key: true,
        }
    } else {
        match state.lookup_whois.execute(&domain).await {
            Ok(lookup) => WhoisSection {
                data: Some(WhoisView::from(lookup)),
                error: None,
                needs_api_key: false,
            },
            Err(DomainError::DomainNotFound(name)) => WhoisSection {
                data: None,
                error: Some(format!("{name} does not exist")),
                needs_api_key: false,
            },
            Err(e) => {
                error!(error = %e, %domain, "Whois lookup failed");
                WhoisSection {
                    data: None,
                    error: Some(e.to_string()),
                    needs_api_key: false,
                }
            }
        }
    });

    response.activity = Some(match state.aggregate.execute(&domain).await {
        Ok(series) => ActivitySection {
            days: Some(series.into_iter().map(DayView::from).collect()),
            error: None,
        },
        Err(e) => {
            error!(error = %e, %domain, "Activity aggregation failed");
            ActivitySection {
                days: None,
                error: Some(e.to_string()),
            }
        }
    });

    Json(response)
}
