//! Coppascan — privacy auditor for children's websites.
//!
//! For each audited site the pipeline fetches the origin page, follows
//! its privacy-policy link, and runs independent keyword heuristics over
//! the fetched content: does the policy address children, does the site
//! solicit personal data, is there a parental-consent mechanism, and
//! which known third-party tracker domains appear in the page body. The
//! result is one flat [`AuditRecord`] per site, in input order, ready for
//! downstream tabulation.
//!
//! Fetching is fail-soft end to end: a dead host, timeout, or error
//! status degrades the affected verdicts and never aborts the batch.

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod sites;

pub use audit::auditor::SiteAuditor;
pub use audit::record::{AuditRecord, TrackerReport, Verdict};
pub use audit::registry::TrackerRegistry;
pub use audit::runner::BatchRunner;
pub use config::AuditConfig;
pub use error::AuditError;
pub use fetch::client::{FetchError, Fetcher, HttpFetcher};
pub use fetch::page::FetchedPage;
