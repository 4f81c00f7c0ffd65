//! Fetch command CLI definitions

use clap::Args;
use krnames::{Identifier, Kind};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Kind of game object (mob or item)
    #[arg(long = "type", visible_alias = "kind")]
    pub kind: Kind,

    /// Output CSV path (default: <type>_kr_from_ragnaplace.csv)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Path to rAthena db directory, scanned for mob_db* / item_db* files
    #[arg(long, visible_alias = "rathena-db")]
    pub db_root: Option<PathBuf>,

    /// Range like 1001-1100
    #[arg(long)]
    pub id_range: Option<String>,

    /// Delay between requests in seconds
    #[arg(long, value_parser = parse_secs)]
    pub delay: Option<f64>,

    /// HTTP timeout in seconds
    #[arg(long, value_parser = parse_secs)]
    pub timeout: Option<f64>,

    /// Maximum attempts per page
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Backoff unit between attempts in seconds (multiplied by attempt number)
    #[arg(long, value_parser = parse_secs)]
    pub backoff: Option<f64>,

    /// Skip IDs lower than this
    #[arg(long)]
    pub start_at: Option<Identifier>,

    /// Process first N IDs only
    #[arg(long)]
    pub limit: Option<usize>,

    /// RagnaPlace base URL
    #[arg(long, env = "KRNAMES_BASE_URL")]
    pub base_url: Option<String>,
}

/// Parse a non-negative, finite number of seconds
pub fn parse_secs(s: &str) -> Result<f64, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", s))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("'{}' must be a non-negative number of seconds", s));
    }
    Ok(secs)
}
