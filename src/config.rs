//! Injected audit configuration.
//!
//! Everything the pipeline can be tuned on (tracker domains, request
//! identity, timeout, concurrency) arrives through this value. There is
//! no global state to reconfigure; operators extend the tracker set by
//! editing a config file, not the code.

use crate::audit::registry::{TrackerRegistry, DEFAULT_TRACKER_DOMAINS};
use crate::error::AuditError;
use crate::fetch::client::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Tracker domains to scan for, in reporting order.
    pub tracker_domains: Vec<String>,
    /// User-Agent sent with every outbound request.
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// How many sites may be audited at once. 1 audits strictly
    /// sequentially.
    pub concurrency: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            tracker_domains: DEFAULT_TRACKER_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            concurrency: 1,
        }
    }
}

impl AuditConfig {
    /// Load configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so a file may override
    /// just the tracker list.
    pub fn load(path: &Path) -> Result<Self, AuditError> {
        let raw = std::fs::read_to_string(path).map_err(|source| AuditError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| AuditError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the tracker registry this configuration describes.
    pub fn registry(&self) -> TrackerRegistry {
        TrackerRegistry::new(&self.tracker_domains)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
