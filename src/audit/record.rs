//! Audit verdicts and the per-site audit record.

use serde::{Serialize, Serializer};
use std::fmt;

/// Categorical outcome of a single heuristic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// The signal was detected.
    Yes,
    /// The signal was not detected (or the page could not be fetched).
    No,
    /// The page the check needed does not exist (no privacy link found).
    NotFound,
    /// Left for a human annotator; never computed by the pipeline.
    Manual,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Yes => "Yes",
            Verdict::No => "No",
            Verdict::NotFound => "NotFound",
            Verdict::Manual => "Manual",
        };
        f.pad(s)
    }
}

/// Outcome of scanning a site's raw response body for tracker domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerReport {
    /// Registry domains found in the body, in registry order.
    Found(Vec<String>),
    /// The body was scanned and no registry domain appeared.
    Clean,
    /// The raw fetch itself failed; nothing was scanned.
    Error,
}

impl TrackerReport {
    pub fn is_clean(&self) -> bool {
        matches!(self, TrackerReport::Clean)
    }
}

impl fmt::Display for TrackerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerReport::Found(domains) => f.write_str(&domains.join(", ")),
            TrackerReport::Clean => f.write_str("None"),
            TrackerReport::Error => f.write_str("Error"),
        }
    }
}

// Serialized as its display form so records stay flat tabular rows.
impl Serialize for TrackerReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// One structured summary of privacy-relevant signals for a single website.
///
/// Built once per audited site and never mutated afterwards. The three
/// `Manual` fields are placeholders filled in by an external annotation
/// pass, not by this pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    /// The input URL, verbatim.
    pub website: String,
    pub privacy_policy_link_present: Verdict,
    pub privacy_policy_child_section: Verdict,
    pub asks_for_personal_data: Verdict,
    pub parental_consent_mechanism: Verdict,
    pub third_party_trackers_detected: TrackerReport,
    pub ads_visible_to_children: Verdict,
    pub ad_type: Verdict,
    pub child_friendly_ui: Verdict,
}
