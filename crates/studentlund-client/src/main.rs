//! studentlund CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use studentlund_client::cli::{Cli, Command, ConfigAction};
use studentlund_client::commands;
use studentlund_client::config::ClientConfig;
use studentlund_client::error::{ClientError, ClientResult};
use studentlund_core::{TracingConfig, init_tracing};
use studentlund_feed::Granularity;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(TracingConfig::cli(cli.debug)) {
        eprintln!("warning: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let config_path = cli.config.clone().unwrap_or_else(ClientConfig::default_path);

    // An explicit path must exist, the default one may not.
    let config = if cli.config.is_some() {
        ClientConfig::load_from(&config_path)
    } else {
        ClientConfig::load_if_exists(&config_path)
    }
    .map_err(ClientError::Config)?;

    match cli.command {
        Command::Day(args) => commands::events::show(Granularity::Day, &args, &config).await,
        Command::Week(args) => commands::events::show(Granularity::Week, &args, &config).await,
        Command::Month(args) => commands::events::show(Granularity::Month, &args, &config).await,
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config, &config_path),
            ConfigAction::Path => commands::config::path(&config_path),
        },
    }
}
