//! CLI argument definitions for krnames
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod fetch;

pub use core::{Cli, Commands};
pub use fetch::FetchArgs;
