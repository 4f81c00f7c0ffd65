//! # krnames
//!
//! Korean display-name harvesting for rAthena monster and item databases.
//!
//! This library provides functionality to:
//! - Resolve the identifiers to look up from rAthena `db` files or a range
//! - Fetch RagnaPlace pages with bounded retry
//! - Pull the embedded `__NEXT_DATA__` payload out of a page
//! - Pick the most plausible Korean name out of that payload
//! - Write result CSVs and convert them into rAthena import YAML
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//! use krnames::{Fetcher, Harvester, IdSelection, Kind, UreqTransport};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ids = IdSelection {
//!     range: Some("1001-1010".to_string()),
//!     ..Default::default()
//! }
//! .resolve(Kind::Mob)?;
//!
//! let fetcher = Fetcher::new(
//!     UreqTransport::new(Duration::from_secs(20)),
//!     3,
//!     Duration::from_millis(500),
//! );
//! let harvester = Harvester::new(
//!     fetcher,
//!     krnames::DEFAULT_BASE_URL,
//!     Kind::Mob,
//!     Duration::from_millis(800),
//! );
//!
//! let ctx = harvester.run(&ids);
//! krnames::write_rows(std::path::Path::new("mob_kr.csv"), &ctx.rows)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fetch;
pub mod harvest;
pub mod ids;
pub mod import;
pub mod kind;
pub mod next_data;
pub mod report;
pub mod score;

#[doc(inline)]
pub use error::{ConfigError, ParseError, ReportError};
#[doc(inline)]
pub use fetch::{FetchFailure, FetchResult, Fetcher, Transport, UreqTransport};
#[doc(inline)]
pub use harvest::{page_url, HarvestContext, Harvester, DEFAULT_BASE_URL};
#[doc(inline)]
pub use ids::{parse_range, scan_db_ids, IdSelection};
#[doc(inline)]
pub use import::{convert, render_import, ImportEntry};
#[doc(inline)]
pub use kind::{Identifier, Kind};
#[doc(inline)]
pub use next_data::extract_next_data;
#[doc(inline)]
pub use report::{write_rows, ResultRow, Status};
#[doc(inline)]
pub use score::{pick_korean_name, Candidate};
