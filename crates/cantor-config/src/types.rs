//! Configuration types.

use std::path::PathBuf;

use cantor_core::{Priority, TableKind};
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CantorConfig {
    /// Rendering options.
    pub render: RenderConfig,
    /// Row colors by priority.
    pub palette: PaletteConfig,
    /// URL index location.
    pub urls: UrlsConfig,
}

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Styled HTML tables.
    #[default]
    Html,
    /// Pipe tables for Quarto/Pandoc.
    Markdown,
}

/// Rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Index name passed to `\index[...]` after linked titles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Force a table layout instead of inferring it from the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TableKind>,
}

/// Background color for each priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub none: String,
    pub required: String,
    pub preferred: String,
    pub optional: String,
    pub flexible: String,
}

impl PaletteConfig {
    /// Color for rows of the given priority.
    pub fn color(&self, priority: Priority) -> &str {
        match priority {
            Priority::None => &self.none,
            Priority::Required => &self.required,
            Priority::Preferred => &self.preferred,
            Priority::Optional => &self.optional,
            Priority::Flexible => &self.flexible,
        }
    }

    /// All `(priority, color)` pairs in palette order.
    pub fn entries(&self) -> impl Iterator<Item = (Priority, &str)> {
        Priority::ALL.into_iter().map(move |p| (p, self.color(p)))
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            none: Priority::None.default_color().to_string(),
            required: Priority::Required.default_color().to_string(),
            preferred: Priority::Preferred.default_color().to_string(),
            optional: Priority::Optional.default_color().to_string(),
            flexible: Priority::Flexible.default_color().to_string(),
        }
    }
}

/// URL index location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlsConfig {
    /// Path to a YAML or JSON `slug: url` mapping, relative to the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}
