//! `coppascan audit` — audit websites for child-privacy signals.

use crate::audit::auditor::SiteAuditor;
use crate::audit::record::{AuditRecord, TrackerReport, Verdict};
use crate::audit::runner::BatchRunner;
use crate::cli::output::{self, Styled};
use crate::cli::targets;
use crate::config::AuditConfig;
use crate::fetch::client::HttpFetcher;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Run the audit command.
pub async fn run(
    urls: Vec<String>,
    sites_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    concurrency: Option<usize>,
    timeout: Option<u64>,
) -> Result<()> {
    let s = Styled::new();
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(n) = concurrency {
        config.concurrency = n;
    }
    if let Some(secs) = timeout {
        config.timeout_secs = secs;
    }

    let targets = targets::resolve(urls, sites_file)?;

    let fetcher =
        HttpFetcher::new(&config.user_agent, config.timeout()).context("building HTTP client")?;
    let auditor = SiteAuditor::new(Arc::new(fetcher), Arc::new(config.registry()));
    let runner = BatchRunner::new(auditor, config.concurrency);

    if !output::is_quiet() && !output::is_json() {
        output::print_header(&s);
        eprintln!(
            "  Auditing {} site{} (concurrency {})...",
            targets.len(),
            if targets.len() == 1 { "" } else { "s" },
            config.concurrency
        );
        eprintln!();
    }

    let records = runner.run_all(&targets).await?;

    if output::is_json() {
        output::print_json(&serde_json::to_value(&records)?);
        return Ok(());
    }

    for record in &records {
        print_record_line(&s, record);
    }

    if !output::is_quiet() {
        print_summary(&s, &records, start.elapsed());
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<AuditConfig> {
    match path {
        Some(path) => AuditConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(AuditConfig::default()),
    }
}

/// One row per audited site: symbol, URL, and the computed verdicts.
fn print_record_line(s: &Styled, record: &AuditRecord) {
    let symbol = match record.privacy_policy_link_present {
        Verdict::Yes => s.ok_sym(),
        _ => s.fail_sym(),
    };

    let trackers = match &record.third_party_trackers_detected {
        TrackerReport::Found(domains) => s.yellow(&format!("{} tracker(s)", domains.len())),
        TrackerReport::Clean => s.green("no trackers"),
        TrackerReport::Error => s.red("tracker scan failed"),
    };

    eprintln!(
        "  {symbol} {:<44} policy {:<8} child {:<8} forms {:<4} consent {:<4} {trackers}",
        record.website,
        record.privacy_policy_link_present,
        record.privacy_policy_child_section,
        record.asks_for_personal_data,
        record.parental_consent_mechanism,
    );

    if output::is_verbose() {
        if let TrackerReport::Found(domains) = &record.third_party_trackers_detected {
            eprintln!("      {}", s.dim(&domains.join(", ")));
        }
    }
}

/// Aggregate counts over the batch.
fn print_summary(s: &Styled, records: &[AuditRecord], elapsed: std::time::Duration) {
    let total = records.len();
    let count = |f: &dyn Fn(&AuditRecord) -> bool| records.iter().filter(|r| f(r)).count();

    let with_policy = count(&|r| r.privacy_policy_link_present == Verdict::Yes);
    let with_child_section = count(&|r| r.privacy_policy_child_section == Verdict::Yes);
    let asking_data = count(&|r| r.asks_for_personal_data == Verdict::Yes);
    let with_consent = count(&|r| r.parental_consent_mechanism == Verdict::Yes);
    let with_trackers = count(&|r| {
        matches!(r.third_party_trackers_detected, TrackerReport::Found(_))
    });
    let scan_errors = count(&|r| r.third_party_trackers_detected == TrackerReport::Error);

    eprintln!();
    eprintln!("  Audit complete in {:.1}s", elapsed.as_secs_f64());
    eprintln!();
    eprintln!("  {}", s.bold("Summary"));
    eprintln!("    Privacy policy linked:   {with_policy}/{total}");
    eprintln!("    Child section in policy: {with_child_section}/{total}");
    eprintln!("    Asks for personal data:  {asking_data}/{total}");
    eprintln!("    Parental consent:        {with_consent}/{total}");
    eprintln!("    Third-party trackers:    {with_trackers}/{total}");
    if scan_errors > 0 {
        eprintln!("    Tracker scans failed:    {scan_errors}/{total}");
    }
}
