//! cdash-verify CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use cdash_verify::cli::{self, commands, Cli, Commands, EXIT_FAIL, EXIT_PASS};
use cdash_verify::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli::load_config(&cli) {
        Ok(config) => config,
        Err(err) => return cli::handle_error(&err, cli.json),
    };

    // Held until main returns so the file writer flushes on every exit path.
    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args, &config, cli.json).await,
        Commands::Missing(args) => commands::missing::execute(args, &config, cli.json).await,
        Commands::Urls(args) => commands::urls::execute(&args, &config, cli.json),
    };

    match result {
        Ok(true) => ExitCode::from(EXIT_PASS),
        Ok(false) => ExitCode::from(EXIT_FAIL),
        Err(err) => cli::handle_error(&err, cli.json),
    }
}
