mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use krnames::ConfigError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use config::Config;

/// Exit code for bad inputs (missing source, malformed range, missing db path)
const EXIT_CONFIG: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "krnames=info,krnames_cli=info".into()),
        )
        .with(stderr_layer)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[fatal] {:#}", err);
            if err.chain().any(|e| e.is::<ConfigError>()) {
                ExitCode::from(EXIT_CONFIG)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fetch(args) => commands::fetch::handle(args),

        Commands::Convert {
            csv,
            kind,
            out,
            only_ok,
        } => commands::convert::handle(&csv, kind, &out, only_ok),

        Commands::Configure {
            base_url,
            delay,
            timeout,
            max_retries,
            backoff,
            show,
        } => commands::configure::handle(
            Config {
                base_url,
                delay_secs: delay,
                timeout_secs: timeout,
                max_retries,
                backoff_secs: backoff,
            },
            show,
        ),
    }
}
