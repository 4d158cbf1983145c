//! Batch execution over an ordered list of audit targets.

use crate::audit::auditor::{origin_of, SiteAuditor};
use crate::audit::record::AuditRecord;
use crate::error::AuditError;
use futures::stream::{self, StreamExt};
use tracing::info;

/// Runs the site auditor over a URL list under a concurrency bound.
///
/// Output order always equals input order: results land in index-keyed
/// slots, not an append-on-completion list, so raising the concurrency
/// bound never reorders records. The default bound of 1 audits sites
/// strictly one after another.
pub struct BatchRunner {
    auditor: SiteAuditor,
    concurrency: usize,
}

impl BatchRunner {
    pub fn new(auditor: SiteAuditor, concurrency: usize) -> Self {
        Self {
            auditor,
            concurrency: concurrency.max(1),
        }
    }

    /// Audit every URL, returning one record per input in input order.
    ///
    /// All URLs are validated up front; an invalid target aborts the
    /// batch before any network traffic. Past validation the batch is
    /// total: per-site fetch failures degrade that site's fields and
    /// never drop its record.
    pub async fn run_all(&self, urls: &[String]) -> Result<Vec<AuditRecord>, AuditError> {
        for url in urls {
            origin_of(url)?;
        }

        let mut slots: Vec<Option<AuditRecord>> = urls.iter().map(|_| None).collect();

        let mut audits = stream::iter(urls.iter().enumerate())
            .map(|(index, url)| {
                let auditor = &self.auditor;
                async move { (index, auditor.audit(url).await) }
            })
            .buffer_unordered(self.concurrency);

        let total = urls.len();
        let mut done = 0usize;
        while let Some((index, result)) = audits.next().await {
            let record = result?;
            done += 1;
            info!(website = %record.website, "audited {done}/{total}");
            slots[index] = Some(record);
        }

        Ok(slots
            .into_iter()
            .map(|slot| slot.expect("every index audited exactly once"))
            .collect())
    }
}
