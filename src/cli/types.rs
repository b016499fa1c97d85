//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::models::QueryDate;

#[derive(Parser, Debug)]
#[command(name = "cdash-verify")]
#[command(about = "Check that expected CDash builds exist and pass", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (default: .cdash-verify/config.yaml and local.yaml)
    #[arg(short, long, global = true, env = "CDASH_VERIFY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub dashboard: DashboardArgs,
}

/// Overrides for the `dashboard` and `cache` config sections.
#[derive(Args, Debug, Clone, Default)]
pub struct DashboardArgs {
    /// CDash base URL, e.g. https://my.cdash.org
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// CDash project name
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Raw filter query string appended to every query URL
    #[arg(long, global = true)]
    pub filter_fields: Option<String>,

    /// Directory for cached query responses
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that every build passes and the expected build names exist
    Check(CheckArgs),

    /// Report expected builds that are missing or have no test results
    Missing(MissingArgs),

    /// Print the dashboard query and browser URLs for a date
    Urls(UrlsArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Testing day to query (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: QueryDate,

    /// Build names that must exist (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub expect: Vec<String>,

    /// Read the index from the cache directory instead of querying CDash
    #[arg(long)]
    pub use_cache: bool,
}

#[derive(Args, Debug)]
pub struct MissingArgs {
    /// Testing day to query (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: QueryDate,

    /// CSV file with `group, site, buildname` columns
    #[arg(short, long)]
    pub expected_builds: PathBuf,

    /// Write an HTML report to this file
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Maximum rows per HTML table (default: report.limit_rows)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Read the index from the cache directory instead of querying CDash
    #[arg(long)]
    pub use_cache: bool,
}

#[derive(Args, Debug)]
pub struct UrlsArgs {
    /// Testing day to query (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: QueryDate,
}
