//! Convert command handler

use anyhow::{Context, Result};
use krnames::Kind;
use std::path::Path;

/// Handle `convert`
pub fn handle(csv: &Path, kind: Kind, out: &Path, only_ok: bool) -> Result<()> {
    let written = krnames::convert(csv, kind, only_ok, out)
        .with_context(|| format!("Failed to convert {} to {}", csv.display(), out.display()))?;

    println!("wrote {} entries -> {}", written, out.display());
    Ok(())
}
