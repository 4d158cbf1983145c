//! Registry of known third-party tracker domains.

/// Tracker domains shipped as the default detection set.
///
/// Order matters: detection reports list matches in registry order.
pub const DEFAULT_TRACKER_DOMAINS: [&str; 10] = [
    "google-analytics.com",
    "googletagmanager.com",
    "facebook.net",
    "doubleclick.net",
    "adservice.google.com",
    "hotjar.com",
    "mixpanel.com",
    "segment.io",
    "criteo.com",
    "twitter.com",
];

/// An immutable, ordered set of tracker domains.
///
/// Constructed from configuration and handed to the pipeline by value;
/// there is no process-wide registry and no mutation after construction.
#[derive(Debug, Clone)]
pub struct TrackerRegistry {
    domains: Vec<String>,
}

impl TrackerRegistry {
    /// Build a registry from configured domains.
    ///
    /// Domains are lowercased so matching stays case-insensitive;
    /// configuration order is preserved.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Iterate domains in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for TrackerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_TRACKER_DOMAINS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_preserves_order() {
        let registry = TrackerRegistry::default();
        let domains: Vec<&str> = registry.iter().collect();
        assert_eq!(domains.len(), 10);
        assert_eq!(domains[0], "google-analytics.com");
        assert_eq!(domains[9], "twitter.com");
    }

    #[test]
    fn test_registry_lowercases_configured_domains() {
        let registry = TrackerRegistry::new(["Example-Tracker.COM"]);
        assert_eq!(registry.iter().next(), Some("example-tracker.com"));
    }
}
