//! Core CLI definitions

use clap::{Parser, Subcommand};
use krnames::Kind;
use std::path::PathBuf;

use super::fetch::{parse_secs, FetchArgs};

#[derive(Parser)]
#[command(name = "krnames")]
#[command(about = "Korean name harvester for rAthena", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch Korean names from RagnaPlace and export CSV
    #[command(visible_alias = "f")]
    Fetch(FetchArgs),

    /// Generate rAthena import YAML from a Korean-name CSV
    #[command(visible_alias = "c")]
    Convert {
        /// CSV with id,kind,name_kr,source_url,status columns
        #[arg(long)]
        csv: PathBuf,

        /// Kind of rows to export (mob or item)
        #[arg(long)]
        kind: Kind,

        /// Output YAML path
        #[arg(long)]
        out: PathBuf,

        /// Only export rows whose status is ok
        #[arg(long)]
        only_ok: bool,
    },

    /// Configure default fetch settings
    Configure {
        /// Default RagnaPlace base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Default delay between requests in seconds
        #[arg(long, value_parser = parse_secs)]
        delay: Option<f64>,

        /// Default HTTP timeout in seconds
        #[arg(long, value_parser = parse_secs)]
        timeout: Option<f64>,

        /// Default maximum attempts per page
        #[arg(long)]
        max_retries: Option<u32>,

        /// Default backoff unit between attempts in seconds
        #[arg(long, value_parser = parse_secs)]
        backoff: Option<f64>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
