//! Per-site audit orchestration.
//!
//! One audit walks a fixed sequence: fetch the origin page, resolve its
//! privacy-policy link, fetch the policy page if one was found, fetch the
//! raw body for tracker scanning, then run the classifiers and assemble
//! the record. Failed fetches degrade the affected verdicts; nothing
//! short of an invalid input URL aborts an audit.

use crate::audit::classifiers;
use crate::audit::policy_link::find_privacy_link;
use crate::audit::record::{AuditRecord, Verdict};
use crate::audit::registry::TrackerRegistry;
use crate::error::AuditError;
use crate::fetch::client::Fetcher;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Derive the `scheme://host` origin of an audit target.
///
/// Only http(s) URLs with a host are auditable; anything else is an
/// [`AuditError::InvalidUrl`] surfaced to the caller before any network
/// traffic, never a guess.
pub fn origin_of(url: &str) -> Result<String, AuditError> {
    let parsed =
        Url::parse(url).map_err(|e| AuditError::invalid_url(url, e.to_string()))?;
    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(AuditError::invalid_url(
            url,
            format!("unsupported scheme {scheme:?}"),
        ));
    }
    let host = parsed
        .host_str()
        .ok_or_else(|| AuditError::invalid_url(url, "missing host"))?;
    Ok(match parsed.port() {
        Some(port) => format!("{scheme}://{host}:{port}"),
        None => format!("{scheme}://{host}"),
    })
}

/// Audits a single website into an [`AuditRecord`].
#[derive(Clone)]
pub struct SiteAuditor {
    fetcher: Arc<dyn Fetcher>,
    registry: Arc<TrackerRegistry>,
}

impl SiteAuditor {
    pub fn new(fetcher: Arc<dyn Fetcher>, registry: Arc<TrackerRegistry>) -> Self {
        Self { fetcher, registry }
    }

    /// Audit one website.
    ///
    /// The origin fetch always precedes the policy fetch, since the
    /// policy URL is discovered on the origin page. The tracker scan uses
    /// its own raw fetch of the input URL and never reuses the parsed
    /// origin page.
    pub async fn audit(&self, url: &str) -> Result<AuditRecord, AuditError> {
        let origin = origin_of(url)?;
        debug!(url, origin = %origin, "starting audit");

        let origin_page = match self.fetcher.fetch(url).await {
            Ok(page) => Some(page),
            Err(e) => {
                warn!(url, "origin fetch degraded: {e}");
                None
            }
        };

        let privacy_link = find_privacy_link(origin_page.as_ref(), &origin);

        let policy_page = match &privacy_link {
            Some(link) => match self.fetcher.fetch(link).await {
                Ok(page) => Some(page),
                Err(e) => {
                    warn!(url, link = %link, "policy fetch degraded: {e}");
                    None
                }
            },
            None => None,
        };

        let raw_body = match self.fetcher.fetch_raw(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(url, "tracker fetch degraded: {e}");
                None
            }
        };

        let link_present = if privacy_link.is_some() {
            Verdict::Yes
        } else {
            Verdict::No
        };

        Ok(AuditRecord {
            website: url.to_string(),
            privacy_policy_link_present: link_present,
            privacy_policy_child_section: classifiers::child_section(policy_page.as_ref()),
            asks_for_personal_data: classifiers::personal_data_form(origin_page.as_ref()),
            parental_consent_mechanism: classifiers::parental_consent(origin_page.as_ref()),
            third_party_trackers_detected: classifiers::trackers(
                raw_body.as_deref(),
                &self.registry,
            ),
            ads_visible_to_children: Verdict::Manual,
            ad_type: Verdict::Manual,
            child_friendly_ui: Verdict::Manual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_of_scheme_and_host() {
        assert_eq!(
            origin_of("https://example.com/games/page?q=1").unwrap(),
            "https://example.com"
        );
        assert_eq!(
            origin_of("http://example.com:8080/x").unwrap(),
            "http://example.com:8080"
        );
    }

    #[test]
    fn test_origin_of_rejects_malformed_input() {
        assert!(matches!(
            origin_of("example.com"),
            Err(AuditError::InvalidUrl { .. })
        ));
        assert!(matches!(
            origin_of("ftp://example.com"),
            Err(AuditError::InvalidUrl { .. })
        ));
        assert!(matches!(
            origin_of("https://"),
            Err(AuditError::InvalidUrl { .. })
        ));
    }
}
