//! rAthena import document generation from harvested CSV.
//!
//! The CSV may come from any tool, so rows are read leniently: missing
//! columns are empty and rows that cannot be used are skipped.

use std::fs;
use std::path::Path;

use crate::error::ReportError;
use crate::kind::{Identifier, Kind};
use crate::report::csv_reader;

/// A name accepted into the import document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    pub id: Identifier,
    pub name: String,
}

/// Rows of `kind` with a usable id and name, sorted by id
pub fn accepted_entries(
    csv_text: &str,
    kind: Kind,
    only_ok: bool,
) -> Result<Vec<ImportEntry>, ReportError> {
    let mut reader = csv_reader(csv_text);
    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);
    let (id_col, kind_col) = (column("id"), column("kind"));
    let (name_col, status_col) = (column("name_kr"), column("status"));

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |col: Option<usize>| col.and_then(|i| record.get(i)).unwrap_or("");

        if field(kind_col) != kind.as_str() {
            continue;
        }
        let name = field(name_col).trim();
        if name.is_empty() {
            continue;
        }
        if only_ok && field(status_col) != "ok" {
            continue;
        }
        let Ok(id) = field(id_col).trim().parse::<Identifier>() else {
            continue;
        };

        entries.push(ImportEntry {
            id,
            name: name.to_string(),
        });
    }

    entries.sort_by_key(|e| e.id);
    Ok(entries)
}

/// Escape a name for a double-quoted YAML scalar
pub fn yaml_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the import document body
pub fn render_import(kind: Kind, entries: &[ImportEntry]) -> String {
    let mut out = String::new();
    out.push_str("Header:\n");
    out.push_str(&format!("  Type: {}\n", kind.import_type()));
    out.push_str("  Version: 1\n");
    out.push_str("Body:\n");

    for entry in entries {
        out.push_str(&format!("  - Id: {}\n", entry.id));
        out.push_str(&format!("    Name: \"{}\"\n", yaml_escape(&entry.name)));
    }

    out
}

/// Convert the CSV at `csv_path` into an import document at `out`.
///
/// Returns the number of entries written.
pub fn convert(
    csv_path: &Path,
    kind: Kind,
    only_ok: bool,
    out: &Path,
) -> Result<usize, ReportError> {
    let text = fs::read_to_string(csv_path)?;
    let entries = accepted_entries(&text, kind, only_ok)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(out, render_import(kind, &entries))?;

    tracing::debug!(
        "{} -> {} ({} entries)",
        csv_path.display(),
        out.display(),
        entries.len()
    );
    Ok(entries.len())
}
