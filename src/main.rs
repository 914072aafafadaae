use std::process::ExitCode;

use clap::Parser;
use marathon_client::cli::output::{self, OutputConfig};
use marathon_client::cli::{handler, Cli};
use marathon_client::client::Client;
use marathon_client::config::Config;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    output::configure(OutputConfig {
        json: cli.json,
        quiet: cli.quiet,
    });

    let mut config = match Config::load_with_url(&cli.config, cli.url) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            return ExitCode::FAILURE;
        }
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    config.logging.init();
    debug!(url = %config.marathon.url, "marathonctl starting");

    let client = Client::from_config(&config.marathon);
    match handler::execute(&client, cli.command).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
