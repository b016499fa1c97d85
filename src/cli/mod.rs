//! Command-line interface.

pub mod commands;
pub mod display;
pub mod output;
pub mod types;

use std::process::ExitCode;

use anyhow::Result;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

pub use types::{CheckArgs, Cli, Commands, DashboardArgs, MissingArgs, UrlsArgs};

/// Exit code when every check passed.
pub const EXIT_PASS: u8 = 0;
/// Exit code when a build is missing or failing.
pub const EXIT_FAIL: u8 = 1;
/// Exit code when the check could not be carried out.
pub const EXIT_ERROR: u8 = 2;

/// Load configuration for `cli`, apply command-line overrides and validate.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    apply_overrides(&mut config, &cli.dashboard);
    ConfigLoader::validate(&config)?;
    Ok(config)
}

/// Command-line values win over every config layer.
pub fn apply_overrides(config: &mut Config, args: &DashboardArgs) {
    if let Some(url) = &args.url {
        config.dashboard.url.clone_from(url);
    }
    if let Some(project) = &args.project {
        config.dashboard.project.clone_from(project);
    }
    if let Some(filter_fields) = &args.filter_fields {
        config.dashboard.filter_fields.clone_from(filter_fields);
    }
    if let Some(dir) = &args.cache_dir {
        config.cache.dir = Some(dir.display().to_string());
    }
}

/// Print `err` and return [`EXIT_ERROR`] for `main` to exit with.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ExitCode {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {err:#}", console::style("Error:").red().bold());
    }
    ExitCode::from(EXIT_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = Config::default();
        config.dashboard.project = "FromFile".to_string();
        config.dashboard.filter_fields = "filtercount=0".to_string();

        let args = DashboardArgs {
            url: Some("https://testing.example.org/cdash".to_string()),
            project: Some("Trilinos".to_string()),
            filter_fields: None,
            cache_dir: Some(PathBuf::from("/tmp/cache")),
        };
        apply_overrides(&mut config, &args);

        assert_eq!(config.dashboard.url, "https://testing.example.org/cdash");
        assert_eq!(config.dashboard.project, "Trilinos");
        assert_eq!(config.dashboard.filter_fields, "filtercount=0");
        assert_eq!(config.cache.dir.as_deref(), Some("/tmp/cache"));
    }

    #[test]
    fn test_handle_error_returns_error_code() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(handle_error(&err, true), ExitCode::from(EXIT_ERROR));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = Config::default();
        apply_overrides(&mut config, &DashboardArgs::default());
        assert_eq!(config.dashboard.url, "https://my.cdash.org");
        assert!(config.cache.dir.is_none());
    }
}
