//! CLI subcommand implementations for the coppascan binary.

pub mod audit_cmd;
pub mod output;
pub mod sites_cmd;
pub mod targets;
pub mod trackers_cmd;
