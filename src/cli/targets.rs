//! Resolve the effective audit target list.

use crate::sites;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Pick the target list: explicit URLs win, then a sites file, then the
/// built-in default list.
pub fn resolve(urls: Vec<String>, sites_file: Option<PathBuf>) -> Result<Vec<String>> {
    if !urls.is_empty() {
        if sites_file.is_some() {
            bail!("pass either URLs or --sites, not both");
        }
        return Ok(urls);
    }

    match sites_file {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading sites file {}", path.display()))?;
            let targets = parse_sites_file(&raw);
            if targets.is_empty() {
                bail!("sites file {} contains no URLs", path.display());
            }
            Ok(targets)
        }
        None => Ok(sites::default_sites()),
    }
}

/// One URL per line; blank lines and `#` comments are skipped.
fn parse_sites_file(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
