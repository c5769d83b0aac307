//! Typed plan model.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::Error;
use crate::part::Part;

/// Period key covering every lectionary year.
pub const ALL_YEARS: &str = "abc";

/// Which table layout a plan is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Hymn list: hymn and psalm formatting.
    #[default]
    Hymns,
    /// Mass setting: every entry formatted as a Mass part.
    Mass,
}

impl TableKind {
    /// Infer the layout from the plan document's top-level key.
    pub fn from_root_key(key: &str) -> Self {
        if key == "mass" {
            Self::Mass
        } else {
            Self::Hymns
        }
    }
}

impl FromStr for TableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hymns" => Ok(Self::Hymns),
            "mass" => Ok(Self::Mass),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hymns => f.write_str("hymns"),
            Self::Mass => f.write_str("mass"),
        }
    }
}

/// Choices for one lectionary period, keyed by part in plan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub key: String,
    pub parts: IndexMap<Part, Vec<Entry>>,
}

impl Period {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            parts: IndexMap::new(),
        }
    }

    /// Append entries to a part, creating it if needed.
    pub fn with_part(mut self, part: Part, entries: Vec<Entry>) -> Self {
        self.parts.entry(part).or_default().extend(entries);
        self
    }

    /// Human label: `Years A, B, C` for the common period, else `Year X`.
    pub fn label(&self) -> String {
        if self.key == ALL_YEARS {
            "Years A, B, C".to_string()
        } else {
            format!("Year {}", self.key.to_uppercase())
        }
    }

    pub fn has_part(&self, part: Part) -> bool {
        self.parts.contains_key(&part)
    }

    pub fn entries(&self, part: Part) -> &[Entry] {
        self.parts.get(&part).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of entries across all parts.
    pub fn entry_count(&self) -> usize {
        self.parts.values().map(Vec::len).sum()
    }
}

/// Full plan: periods in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub periods: Vec<Period>,
}

impl Plan {
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    pub fn period(&self, key: &str) -> Option<&Period> {
        self.periods.iter().find(|p| p.key == key)
    }

    /// Whether any period lists choral anthems.
    pub fn has_anthems(&self) -> bool {
        self.periods.iter().any(|p| p.has_part(Part::Anthems))
    }

    pub fn entry_count(&self) -> usize {
        self.periods.iter().map(Period::entry_count).sum()
    }
}

/// A loaded plan together with the top-level key it was found under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDocument {
    /// Top-level key, e.g. `hymns` or `mass`.
    pub root: String,
    pub plan: Plan,
}

impl PlanDocument {
    /// Layout implied by the top-level key.
    pub fn kind(&self) -> TableKind {
        TableKind::from_root_key(&self.root)
    }
}
