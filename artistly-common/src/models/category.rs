//! Performance categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Performance-type tag used for filtering and multi-tagging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Singers,
    Dancers,
    Speakers,
    Djs,
}

impl CategoryId {
    /// Every category, in display order
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Singers,
        CategoryId::Dancers,
        CategoryId::Speakers,
        CategoryId::Djs,
    ];

    /// Identifier as used in URLs and form values
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Singers => "singers",
            CategoryId::Dancers => "dancers",
            CategoryId::Speakers => "speakers",
            CategoryId::Djs => "djs",
        }
    }

    /// Display information for this category
    pub fn info(&self) -> &'static Category {
        Category::lookup(*self)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown category: {}", s)))
    }
}

/// Category card shown on the home page and as artist badges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Advisory listing count for marketing copy; not derived from data
    pub count: u32,
}

/// Display data for every category, indexed in `CategoryId::ALL` order
pub const CATEGORIES: [Category; 4] = [
    Category {
        id: CategoryId::Singers,
        name: "Singers",
        icon: "🎤",
        description: "Vocal performers for all genres",
        count: 150,
    },
    Category {
        id: CategoryId::Dancers,
        name: "Dancers",
        icon: "💃",
        description: "Professional dance performers",
        count: 120,
    },
    Category {
        id: CategoryId::Speakers,
        name: "Speakers",
        icon: "🎙️",
        description: "Motivational and keynote speakers",
        count: 80,
    },
    Category {
        id: CategoryId::Djs,
        name: "DJs",
        icon: "🎧",
        description: "Music mixers and party entertainers",
        count: 95,
    },
];

impl Category {
    pub fn lookup(id: CategoryId) -> &'static Category {
        match id {
            CategoryId::Singers => &CATEGORIES[0],
            CategoryId::Dancers => &CATEGORIES[1],
            CategoryId::Speakers => &CATEGORIES[2],
            CategoryId::Djs => &CATEGORIES[3],
        }
    }

    /// Badge text, e.g. "🎤 Singers"
    pub fn badge(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}
