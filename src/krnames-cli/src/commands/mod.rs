//! Command handlers for krnames CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod convert;
pub mod fetch;
