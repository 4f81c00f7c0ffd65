//! Fetch command handler
//!
//! Resolves identifiers, harvests a name for each one and writes the result CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use krnames::{ConfigError, Fetcher, Harvester, IdSelection, Kind, UreqTransport};

use crate::cli::FetchArgs;
use crate::config::Config;

/// Output path used when `--out` is not given
pub fn default_out_path(kind: Kind) -> PathBuf {
    PathBuf::from(format!("{}_kr_from_ragnaplace.csv", kind))
}

/// Settings from the config file with command-line values laid over them
fn effective_config(base: Config, args: &FetchArgs) -> Config {
    let mut config = base;
    config.merge(Config {
        base_url: args.base_url.clone(),
        delay_secs: args.delay,
        timeout_secs: args.timeout,
        max_retries: args.max_retries,
        backoff_secs: args.backoff,
    });
    config
}

fn selection(args: &FetchArgs) -> IdSelection {
    IdSelection {
        db_root: args.db_root.clone(),
        range: args.id_range.clone(),
        start_at: args.start_at,
        limit: args.limit,
    }
}

/// Handle `fetch`
pub fn handle(args: FetchArgs) -> Result<()> {
    let ids = selection(&args).resolve(args.kind)?;
    if ids.is_empty() {
        return Err(ConfigError::NoIdentifiers.into());
    }

    let config = effective_config(Config::load()?, &args);
    let out = args.out.clone();
    let out = out.unwrap_or_else(|| default_out_path(args.kind));

    println!(
        "type={}, ids={}, out={}",
        args.kind,
        ids.len(),
        out.display()
    );
    tracing::debug!(
        "base_url={} delay={:?} timeout={:?} max_retries={} backoff={:?}",
        config.base_url(),
        config.delay(),
        config.timeout(),
        config.max_retries(),
        config.backoff()
    );

    let fetcher = Fetcher::new(
        UreqTransport::new(config.timeout()),
        config.max_retries(),
        config.backoff(),
    );
    let harvester = Harvester::new(fetcher, config.base_url(), args.kind, config.delay());
    let ctx = harvester.run(&ids);

    krnames::write_rows(&out, &ctx.rows)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "wrote {} rows, translated={}, file={}",
        ctx.rows.len(),
        ctx.ok_count,
        out.display()
    );
    Ok(())
}
