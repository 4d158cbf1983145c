//! Heuristic content classifiers.
//!
//! Each classifier is a pure function over already-fetched content and
//! defines its own behavior for absent input, so a failed fetch degrades
//! the verdict instead of faulting. The rules are fixed keyword and
//! substring heuristics; their precision/recall limits are a documented
//! property of the audit, not something to patch per-site.

use crate::audit::record::{TrackerReport, Verdict};
use crate::audit::registry::TrackerRegistry;
use crate::fetch::page::FetchedPage;

/// Terms a child-aware privacy policy is expected to mention.
const CHILD_SECTION_TERMS: [&str; 5] =
    ["child", "children", "minor", "under 13", "parental consent"];

/// Input-name fragments that indicate personal-data collection.
const PERSONAL_DATA_FIELDS: [&str; 7] =
    ["email", "name", "dob", "birth", "age", "phone", "contact"];

/// Terms that indicate a parental-consent or age-gate mechanism.
const PARENTAL_CONSENT_TERMS: [&str; 5] = [
    "parental consent",
    "guardian",
    "age verification",
    "over 13",
    "over 18",
];

/// Does the privacy policy address children?
///
/// `page` is the fetched policy page; `None` means no privacy link was
/// found (or the policy page could not be fetched), which is reported as
/// [`Verdict::NotFound`] regardless of anything on the origin page.
pub fn child_section(page: Option<&FetchedPage>) -> Verdict {
    let Some(page) = page else {
        return Verdict::NotFound;
    };
    let text = page.text().to_lowercase();
    if CHILD_SECTION_TERMS.iter().any(|term| text.contains(term)) {
        Verdict::Yes
    } else {
        Verdict::No
    }
}

/// Does the origin page solicit personal data through form inputs?
pub fn personal_data_form(page: Option<&FetchedPage>) -> Verdict {
    let Some(page) = page else {
        return Verdict::No;
    };
    let solicits = page.input_names().iter().any(|name| {
        let name = name.to_lowercase();
        PERSONAL_DATA_FIELDS.iter().any(|field| name.contains(field))
    });
    if solicits {
        Verdict::Yes
    } else {
        Verdict::No
    }
}

/// Does the origin page mention a parental-consent mechanism?
pub fn parental_consent(page: Option<&FetchedPage>) -> Verdict {
    let Some(page) = page else {
        return Verdict::No;
    };
    let text = page.text().to_lowercase();
    if PARENTAL_CONSENT_TERMS.iter().any(|term| text.contains(term)) {
        Verdict::Yes
    } else {
        Verdict::No
    }
}

/// Which registry domains appear in the raw response body?
///
/// `body` is the independently fetched raw body of the audited URL;
/// `None` marks a failed raw fetch. Matching is case-insensitive plain
/// substring search over the whole body (markup included), and every
/// match is reported in registry order.
pub fn trackers(body: Option<&str>, registry: &TrackerRegistry) -> TrackerReport {
    let Some(body) = body else {
        return TrackerReport::Error;
    };
    let body = body.to_lowercase();
    let found: Vec<String> = registry
        .iter()
        .filter(|domain| body.contains(*domain))
        .map(str::to_string)
        .collect();
    if found.is_empty() {
        TrackerReport::Clean
    } else {
        TrackerReport::Found(found)
    }
}
