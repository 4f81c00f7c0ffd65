//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up krnames fetch defaults.

use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
///
/// # Arguments
/// * `update` - Values to store; unset fields keep their current value
/// * `show` - If true, show current configuration
pub fn handle(update: Config, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if update.is_empty() {
        show_usage();
        return Ok(());
    }

    config.merge(update);
    config.save()?;

    println!("Configuration updated");
    show_config(&config);
    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    println!("{}", describe(config));

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn describe(config: &Config) -> String {
    let mark = |set: bool| if set { "" } else { " (default)" };
    let base_url = mark(config.base_url.is_some());
    let delay = mark(config.delay_secs.is_some());
    let timeout = mark(config.timeout_secs.is_some());
    let retries = mark(config.max_retries.is_some());
    let backoff = mark(config.backoff_secs.is_some());

    [
        format!("Base URL: {}{}", config.base_url(), base_url),
        format!("Delay: {:?}{}", config.delay(), delay),
        format!("Timeout: {:?}{}", config.timeout(), timeout),
        format!("Max retries: {}{}", config.max_retries(), retries),
        format!("Backoff: {:?}{}", config.backoff(), backoff),
    ]
    .join("\n")
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: krnames configure [--base-url URL] [--delay S]");
    println!("                         [--timeout S] [--max-retries N]");
    println!("                         [--backoff S]");
    println!("   or: krnames configure --show");
    println!();
    println!("Flags on `krnames fetch` override these defaults.");
}
