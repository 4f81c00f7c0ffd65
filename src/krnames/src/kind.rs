//! Game-object kinds.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Numeric key of a game object within a [`Kind`].
pub type Identifier = u32;

/// Category of game object a name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Mob,
    Item,
}

impl Kind {
    pub const ALL: &'static [Kind] = &[Kind::Mob, Kind::Item];

    /// Lowercase name, also used as the URL path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mob => "mob",
            Self::Item => "item",
        }
    }

    /// File-name prefix of the rAthena database files declaring this kind
    pub fn db_file_prefix(&self) -> &'static str {
        match self {
            Self::Mob => "mob_db",
            Self::Item => "item_db",
        }
    }

    /// Record type written in the import document header
    pub fn import_type(&self) -> &'static str {
        match self {
            Self::Mob => "MOB_DB",
            Self::Item => "ITEM_DB",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mob" => Ok(Self::Mob),
            "item" => Ok(Self::Item),
            _ => Err(ParseError::InvalidKind(s.to_string())),
        }
    }
}
