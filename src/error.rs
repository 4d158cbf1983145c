//! Crate-level error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to callers of the audit pipeline.
///
/// Degraded fetches are not errors: they are folded into the audit record
/// by the fetcher's fail-soft boundary. What remains here are genuine
/// precondition and configuration failures.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The input URL cannot yield a scheme+host origin.
    #[error("invalid audit target {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A configuration file could not be read.
    #[error("failed to read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("failed to parse config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AuditError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
