//! Coppascan binary entry point.

use clap::{Parser, Subcommand};
use coppascan::cli;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "coppascan",
    version,
    about = "Audit websites for child-privacy signals"
)]
struct Cli {
    /// Emit machine-readable JSON on stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress progress and summary output.
    #[arg(long, global = true)]
    quiet: bool,

    /// Show extra detail (e.g. matched tracker domains per site).
    #[arg(long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Audit websites and print one record per site.
    Audit {
        /// URLs to audit; defaults to the built-in survey list.
        urls: Vec<String>,

        /// File with one URL per line (# comments allowed).
        #[arg(long)]
        sites: Option<PathBuf>,

        /// JSON config file (tracker domains, user agent, timeout, concurrency).
        #[arg(long)]
        config: Option<PathBuf>,

        /// How many sites to audit concurrently.
        #[arg(long)]
        concurrency: Option<usize>,

        /// Per-request timeout in seconds.
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Print the effective audit target list.
    Sites {
        /// File with one URL per line (# comments allowed).
        #[arg(long)]
        sites: Option<PathBuf>,
    },

    /// Print the effective tracker registry.
    Trackers {
        /// JSON config file (tracker domains, user agent, timeout, concurrency).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Output helpers read these flags from the environment so every
    // command sees the same modes without threading them through.
    if cli.json {
        std::env::set_var("COPPASCAN_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("COPPASCAN_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("COPPASCAN_VERBOSE", "1");
    }
    if cli.no_color {
        std::env::set_var("COPPASCAN_NO_COLOR", "1");
    }

    let default_filter = if cli.verbose {
        "coppascan=debug"
    } else {
        "coppascan=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Audit {
            urls,
            sites,
            config,
            concurrency,
            timeout,
        } => cli::audit_cmd::run(urls, sites, config, concurrency, timeout).await,
        Command::Sites { sites } => cli::sites_cmd::run(sites),
        Command::Trackers { config } => cli::trackers_cmd::run(config),
    }
}
