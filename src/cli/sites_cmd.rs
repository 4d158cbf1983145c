//! `coppascan sites` — print the effective audit target list.

use crate::cli::output;
use crate::cli::targets;
use anyhow::Result;
use std::path::PathBuf;

/// Run the sites command.
pub fn run(sites_file: Option<PathBuf>) -> Result<()> {
    let targets = targets::resolve(Vec::new(), sites_file)?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "count": targets.len(),
            "sites": targets,
        }));
        return Ok(());
    }

    for target in &targets {
        println!("{target}");
    }
    Ok(())
}
