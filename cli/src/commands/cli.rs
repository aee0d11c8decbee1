use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Flags source references to tickets whose status is no longer allowed")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./jiratodo.toml, then the user config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `jiratodo_core=trace`. RUST_LOG wins when set.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ScanOverrides {
    /// Only report references to these projects (repeatable).
    #[arg(long = "project", action = clap::ArgAction::Append)]
    pub project: Vec<String>,

    /// Reference pattern with named groups `key`, `project` and `number`.
    #[arg(long)]
    pub regex: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CheckArgs {
    /// Files or glob patterns to scan.
    #[arg(required = true)]
    pub patterns: Vec<String>,

    #[command(flatten)]
    pub overrides: ScanOverrides,

    /// Allowed status ids (repeatable). Replaces the configured list.
    #[arg(long = "allowed-status", action = clap::ArgAction::Append)]
    pub allowed_status: Vec<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report problems but exit successfully.
    #[arg(long, default_value_t = false)]
    pub warn_only: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ExtractArgs {
    /// Files or glob patterns to scan.
    #[arg(required = true)]
    pub patterns: Vec<String>,

    #[command(flatten)]
    pub overrides: ScanOverrides,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve referenced tickets and report disallowed statuses.
    Check(CheckArgs),
    /// Print extracted references as JSON without contacting the tracker.
    Extract(ExtractArgs),
}
