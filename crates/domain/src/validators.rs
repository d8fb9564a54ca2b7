use crate::DomainError;
use chrono::NaiveDateTime;
use std::net::IpAddr;

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Trailing `label.label` of a requested name, if it ends with one.
/// This is the approximate registrable domain: multi-label public
/// suffixes (`co.uk`) are not special-cased.
pub fn registrable_parts(name: &str) -> Option<(&str, &str)> {
    let (rest, tld) = name.rsplit_once('.')?;
    if tld.is_empty() || !tld.chars().all(is_label_char) {
        return None;
    }
    let label = match rest.rsplit_once('.') {
        Some((_, label)) => label,
        None => rest,
    };
    if label.is_empty() || !label.chars().all(is_label_char) {
        return None;
    }
    Some((label, tld))
}

/// Registrable domain of a site, falling back to the site itself when no
/// trailing `label.label` can be extracted.
pub fn registrable_domain(site: &str) -> String {
    match registrable_parts(site) {
        Some((label, tld)) => format!("{label}.{tld}"),
        None => site.to_string(),
    }
}

/// Boundary filter for the `sys` request parameter.
pub fn parse_system(value: &str) -> Result<IpAddr, DomainError> {
    value
        .parse()
        .map_err(|_| DomainError::InvalidIpAddress(value.to_string()))
}

/// Boundary filter for the `datetime` request parameter, second precision.
pub fn parse_reference_time(value: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map_err(|_| DomainError::InvalidTimestamp(value.to_string()))
}

/// Boundary filter for the `site` request parameter: dotted labels of
/// hostname characters, no scheme, no path.
pub fn validate_site(value: &str) -> Result<&str, DomainError> {
    let site = value.trim();
    let valid = !site.is_empty()
        && site.len() <= 253
        && !site.starts_with('.')
        && !site.ends_with('.')
        && site.split('.').all(|l| {
            !l.is_empty() && l.len() <= 63 && l.chars().all(is_label_char)
        });
    if valid {
        Ok(site)
    } else {
        Err(DomainError::InvalidSite(value.to_string()))
    }
}
