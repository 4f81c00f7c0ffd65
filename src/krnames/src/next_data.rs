//! Embedded page-data extraction.
//!
//! Server-rendered Next.js pages ship their state as JSON inside
//! `<script id="__NEXT_DATA__">`. Only the first such element is considered.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static NEXT_DATA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<script[^>]+id=["']__NEXT_DATA__["'][^>]*>(.*?)</script>"#)
        .expect("valid regex")
});

/// Parse the `__NEXT_DATA__` payload of `html`, if present and valid JSON
pub fn extract_next_data(html: &str) -> Option<Value> {
    let caps = NEXT_DATA.captures(html)?;
    let raw = caps.get(1)?.as_str().trim();

    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("__NEXT_DATA__ is not valid JSON: {}", e);
            None
        }
    }
}
