//! `coppascan trackers` — print the effective tracker registry.

use crate::cli::output;
use crate::config::AuditConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Run the trackers command.
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => AuditConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AuditConfig::default(),
    };
    let registry = config.registry();

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "count": registry.len(),
            "tracker_domains": registry.iter().collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    for domain in registry.iter() {
        println!("{domain}");
    }
    Ok(())
}
