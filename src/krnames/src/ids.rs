//! Identifier source resolution.
//!
//! Identifiers come from two optional sources: `Id:` declarations scanned out
//! of rAthena `mob_db*` / `item_db*` files, and an inclusive `A-B` range.
//! The union is deduplicated and sorted, then optionally floored and capped.

use std::collections::BTreeSet;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConfigError;
use crate::kind::{Identifier, Kind};

static ID_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*Id:\s*(\d+)\s*$").expect("valid regex")
});

static RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)-(\d+)$").expect("valid regex")
});

/// Where identifiers come from and how the result is trimmed
#[derive(Debug, Clone, Default)]
pub struct IdSelection {
    /// rAthena `db` directory to scan recursively
    pub db_root: Option<PathBuf>,
    /// Inclusive range like `1001-1100`
    pub range: Option<String>,
    /// Drop identifiers below this value
    pub start_at: Option<Identifier>,
    /// Keep only the first N identifiers after filtering
    pub limit: Option<usize>,
}

impl IdSelection {
    /// Resolve to a strictly ascending, duplicate-free identifier list
    pub fn resolve(&self, kind: Kind) -> Result<Vec<Identifier>, ConfigError> {
        if self.db_root.is_none() && self.range.is_none() {
            return Err(ConfigError::MissingSource);
        }

        let floor = self.start_at.unwrap_or(0);
        let limit = self.limit.unwrap_or(usize::MAX);

        let mut ids = BTreeSet::new();
        if let Some(root) = &self.db_root {
            ids.extend(scan_db_ids(root, kind)?);
        }
        if let Some(range) = &self.range {
            // Only the first `limit` range members at or above the floor can
            // survive the final cut, so the rest are never materialized.
            let range = parse_range(range)?;
            let lo = (*range.start()).max(floor);
            ids.extend((lo..=*range.end()).take(limit));
        }

        let ids = ids.into_iter().filter(|id| *id >= floor);
        Ok(ids.take(limit).collect())
    }
}

/// Collect every `Id: <n>` declared in the kind's db files under `root`
pub fn scan_db_ids(root: &Path, kind: Kind) -> Result<BTreeSet<Identifier>, ConfigError> {
    if !root.exists() {
        return Err(ConfigError::DbRootNotFound(root.to_path_buf()));
    }

    let prefix = kind.db_file_prefix();
    let mut ids = BTreeSet::new();

    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let matches = entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with(prefix))
            .unwrap_or(false);
        if !matches {
            continue;
        }

        let bytes = match fs::read(entry.path()) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Skipping unreadable {}: {}", entry.path().display(), e);
                continue;
            }
        };

        let before = ids.len();
        ids.extend(ids_in_text(&String::from_utf8_lossy(&bytes)));
        let added = ids.len() - before;
        tracing::debug!("{}: {} new ids", entry.path().display(), added);
    }

    Ok(ids)
}

/// Identifiers declared on whole `Id: <n>` lines of a db file.
///
/// Only surrounding whitespace is allowed; YAML sequence items (`- Id: 1001`)
/// do not count.
pub fn ids_in_text(text: &str) -> impl Iterator<Item = Identifier> + '_ {
    text.lines().filter_map(|line| {
        ID_LINE
            .captures(line)
            .and_then(|caps| caps[1].parse::<Identifier>().ok())
    })
}

/// Parse `A-B` into an inclusive identifier range, swapping reversed bounds
pub fn parse_range(text: &str) -> Result<RangeInclusive<Identifier>, ConfigError> {
    let invalid = || ConfigError::InvalidRange(text.to_string());

    let caps = RANGE.captures(text.trim()).ok_or_else(invalid)?;
    let a: Identifier = caps[1].parse().map_err(|_| invalid())?;
    let b: Identifier = caps[2].parse().map_err(|_| invalid())?;

    Ok(if a > b { b..=a } else { a..=b })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn assert_strictly_ascending(ids: &[Identifier]) {
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "{:?}", ids);
    }

    #[test]
    fn test_parse_range_basic() {
        assert_eq!(parse_range("1001-1005").unwrap(), 1001..=1005);
        assert_eq!(parse_range(" 7-7 ").unwrap().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_parse_range_reversed_matches_forward() {
        assert_eq!(
            parse_range("1100-1001").unwrap(),
            parse_range("1001-1100").unwrap()
        );
        assert_eq!(parse_range("1100-1001").unwrap().count(), 100);
    }

    #[test]
    fn test_parse_range_malformed() {
        for bad in [
            "",
            "1001",
            "1001-",
            "-5",
            "a-b",
            "1-2-3",
            "1 - 2",
            "99999999999-1",
        ] {
            assert!(
                matches!(parse_range(bad), Err(ConfigError::InvalidRange(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_ids_in_text_whole_line_only() {
        let text = "Body:\nId: 1002\n    AegisName: PORING\n  Id: 1001  \n\
                    Id: 12 # note\n\tId:7\n    ViewId: 55\n  - Id: 3\n-Id: 4\n";
        let ids: Vec<_> = ids_in_text(text).collect();
        assert_eq!(ids, vec![1002, 1001, 7]);
    }

    #[test]
    fn test_ids_in_text_rejects_sequence_items() {
        assert_eq!(ids_in_text("- Id: 1001\n").count(), 0);
        assert_eq!(ids_in_text("  - Id: 1001\n").count(), 0);
    }

    #[test]
    fn test_scan_db_ids_matches_kind_prefix_recursively() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write(&root.join("re/mob_db.yml"), "Id: 1002\n  Id: 1001\n");
        write(&root.join("pre-re/mob_db2.txt"), "Id: 1001\nId: 2000\n");
        write(&root.join("re/item_db_usable.yml"), "  Id: 501\n");
        write(&root.join("import/mob_skill_db.yml"), "Id: 9999\n");

        let mobs = scan_db_ids(root, Kind::Mob).unwrap();
        assert_eq!(mobs.into_iter().collect::<Vec<_>>(), vec![1001, 1002, 2000]);

        let items = scan_db_ids(root, Kind::Item).unwrap();
        assert_eq!(items.into_iter().collect::<Vec<_>>(), vec![501]);
    }

    #[test]
    fn test_scan_db_ids_missing_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope");
        assert!(matches!(
            scan_db_ids(&missing, Kind::Mob),
            Err(ConfigError::DbRootNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_requires_a_source() {
        let selection = IdSelection::default();
        assert!(matches!(
            selection.resolve(Kind::Mob),
            Err(ConfigError::MissingSource)
        ));
    }

    #[test]
    fn test_resolve_unions_sources() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(&temp_dir.path().join("mob_db.yml"), "Id: 1003\nId: 1500\n");

        let selection = IdSelection {
            db_root: Some(temp_dir.path().to_path_buf()),
            range: Some("1004-1001".to_string()),
            ..Default::default()
        };
        let ids = selection.resolve(Kind::Mob).unwrap();
        assert_eq!(ids, vec![1001, 1002, 1003, 1004, 1500]);
        assert_strictly_ascending(&ids);
    }

    #[test]
    fn test_resolve_start_at_then_limit() {
        let selection = IdSelection {
            range: Some("1-20".to_string()),
            start_at: Some(10),
            limit: Some(3),
            ..Default::default()
        };
        assert_eq!(selection.resolve(Kind::Item).unwrap(), vec![10, 11, 12]);
    }

    #[test]
    fn test_resolve_limit_applies_to_union() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(&temp_dir.path().join("mob_db.yml"), "Id: 5\nId: 11\n");

        let selection = IdSelection {
            db_root: Some(temp_dir.path().to_path_buf()),
            range: Some("10-20".to_string()),
            limit: Some(3),
            ..Default::default()
        };
        assert_eq!(selection.resolve(Kind::Mob).unwrap(), vec![5, 10, 11]);
    }

    #[test]
    fn test_resolve_full_width_range_with_limit() {
        let selection = IdSelection {
            range: Some("0-4294967295".to_string()),
            start_at: Some(4294967290),
            limit: Some(3),
            ..Default::default()
        };
        assert_eq!(
            selection.resolve(Kind::Mob).unwrap(),
            vec![4294967290, 4294967291, 4294967292]
        );

        let selection = IdSelection {
            range: Some("4294967295-0".to_string()),
            limit: Some(2),
            ..Default::default()
        };
        assert_eq!(selection.resolve(Kind::Mob).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_resolve_malformed_range_is_config_error() {
        let selection = IdSelection {
            range: Some("ten-twenty".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            selection.resolve(Kind::Mob),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
