use serde::{Deserialize, Serialize};

/// Main configuration structure for cdash-verify
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Dashboard connection and query settings
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Cache settings for raw dashboard responses
    #[serde(default)]
    pub cache: CacheConfig,

    /// Report rendering settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DashboardConfig {
    /// Base URL of the CDash site, e.g. `https://my.cdash.org`
    #[serde(default = "default_dashboard_url")]
    pub url: String,

    /// CDash project name
    #[serde(default)]
    pub project: String,

    /// Raw filter query string appended to every query URL
    #[serde(default)]
    pub filter_fields: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_dashboard_url() -> String {
    "https://my.cdash.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    60
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            url: default_dashboard_url(),
            project: String::new(),
            filter_fields: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Directory holding cached query responses (no caching when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Read responses from the cache instead of querying the dashboard
    #[serde(default)]
    pub use_cached: bool,
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    /// Maximum rows shown per HTML summary table
    #[serde(default = "default_limit_rows")]
    pub limit_rows: usize,

    /// Directory HTML reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

const fn default_limit_rows() -> usize {
    50
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            limit_rows: default_limit_rows(),
            output_dir: default_output_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stderr only when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// Log file rotation: daily, hourly or never
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_log_rotation(),
        }
    }
}
