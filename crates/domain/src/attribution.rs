use crate::validators::registrable_parts;

/// Which blocklist source caused a query to be blocked.
///
/// `bl_notrack` and `custom` are sentinel tags kept apart from ordinary
/// third-party lists: both still permit reporting, but they render
/// differently and a report against them is already attributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribution {
    NoTrack,
    Custom,
    List(String),
    Unknown,
}

impl Attribution {
    pub fn from_source_tag(tag: &str) -> Self {
        match tag {
            "bl_notrack" => Attribution::NoTrack,
            "custom" => Attribution::Custom,
            _ => Attribution::List(tag.to_string()),
        }
    }

    /// Human-readable list name, `None` for unattributed blocks.
    pub fn label(&self) -> Option<String> {
        match self {
            Attribution::NoTrack => Some("NoTrack list".to_string()),
            Attribution::Custom => Some("Black list".to_string()),
            Attribution::List(tag) => Some(
                display_name(tag)
                    .map(str::to_string)
                    .unwrap_or_else(|| tag.clone()),
            ),
            Attribution::Unknown => None,
        }
    }
}

/// Display names for the curated third-party lists. Tags missing here
/// fall back to the raw tag.
fn display_name(tag: &str) -> Option<&'static str> {
    match tag {
        "bl_tld" => Some("Top Level Domain list"),
        "bl_hexxium" => Some("Hexxium Creations Threat list"),
        "bl_disconnectmalvertising" => Some("Malvertising list by Disconnect"),
        "bl_easylist" => Some("EasyList"),
        "bl_easyprivacy" => Some("EasyPrivacy"),
        "bl_malwaredomainlist" => Some("Malware Domain List"),
        "bl_malwaredomains" => Some("Malware Domains"),
        "bl_pglyoyo" => Some("Peter Lowe's Ad server list"),
        "bl_someonewhocares" => Some("Dan Pollock's hosts file"),
        "bl_spam404" => Some("Spam404"),
        "bl_swissransom" => Some("Swiss Security Ransomware tracker"),
        "bl_windowsspyblocker" => Some("Windows Spy Blocker"),
        _ => None,
    }
}

/// One step of the ordered fallback chain used to find the blocklist
/// entry responsible for a block. First match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteMatcher {
    /// The stored site equals the requested name verbatim.
    Exact(String),
    /// The stored site ends with the requested name's trailing
    /// `label.label` pair.
    RegistrableSuffix(String),
    /// The stored site is a bare-TLD entry, `.tld`.
    BareTld(String),
}

impl SiteMatcher {
    /// Build the fallback chain for a requested name. A name with no
    /// trailing `label.label` pair only gets the exact matcher.
    pub fn chain(requested_name: &str) -> Vec<SiteMatcher> {
        let mut matchers = vec![SiteMatcher::Exact(requested_name.to_string())];
        if let Some((label, tld)) = registrable_parts(requested_name) {
            matchers.push(SiteMatcher::RegistrableSuffix(format!("{label}.{tld}")));
            matchers.push(SiteMatcher::BareTld(format!(".{tld}")));
        }
        matchers
    }
}
