//! Result rows and the CSV they are written to.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ReportError};
use crate::fetch::FetchFailure;
use crate::kind::{Identifier, Kind};

/// CSV column order for result rows
pub const ROW_HEADER: [&str; 5] = ["id", "kind", "name_kr", "source_url", "status"];

const UTF8_BOM: &str = "\u{feff}";

/// Outcome recorded for one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Status {
    Ok,
    NoKrFound,
    NoNextData,
    Fetch(FetchFailure),
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::NoKrFound => write!(f, "no_kr_found"),
            Self::NoNextData => write!(f, "no_next_data"),
            Self::Fetch(failure) => write!(f, "{}", failure),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Self::Ok),
            "no_kr_found" => Ok(Self::NoKrFound),
            "no_next_data" => Ok(Self::NoNextData),
            "not_found" => Ok(Self::Fetch(FetchFailure::NotFound)),
            "timeout" => Ok(Self::Fetch(FetchFailure::Timeout)),
            "url_error" => Ok(Self::Fetch(FetchFailure::UrlError)),
            "error" => Ok(Self::Fetch(FetchFailure::Error)),
            other => other
                .strip_prefix("http_")
                .and_then(|code| code.parse().ok())
                .map(|code| Self::Fetch(FetchFailure::Http(code)))
                .ok_or_else(|| ParseError::InvalidStatus(s.to_string())),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.to_string()
    }
}

impl TryFrom<String> for Status {
    type Error = ParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// One output record of a harvest run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: Identifier,
    pub kind: Kind,
    /// Empty unless `status` is `ok`
    pub name_kr: String,
    pub source_url: String,
    pub status: Status,
}

/// Write rows as UTF-8 CSV with a byte-order mark, creating parent directories
pub fn write_rows(path: &Path, rows: &[ResultRow]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    file.write_all(UTF8_BOM.as_bytes())?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(ROW_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Read CSV text into records, ignoring a leading byte-order mark.
///
/// Rows may be shorter or longer than the header.
pub fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes())
}
