//! Entry priority.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How strongly a choice is preferred. Drives the row background color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// No preference expressed.
    #[default]
    None,
    /// Must be sung.
    Required,
    /// Strongly preferred.
    Preferred,
    /// May be sung.
    Optional,
    /// Any reasonable substitute is fine.
    Flexible,
}

impl Priority {
    /// Every priority, in palette order.
    pub const ALL: [Priority; 5] = [
        Self::None,
        Self::Required,
        Self::Preferred,
        Self::Optional,
        Self::Flexible,
    ];

    /// The key used in plan files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Required => "required",
            Self::Preferred => "preferred",
            Self::Optional => "optional",
            Self::Flexible => "flexible",
        }
    }

    /// Default background color for rows of this priority.
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::None => "#FFFFFF",
            Self::Required => "#f5b7b1",
            Self::Preferred => "#fad7a0",
            Self::Optional => "#f9e79f",
            Self::Flexible => "#a9dfbf",
        }
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::UnknownPriority(s.to_string()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
