//! URL index loading.

use std::path::{Path, PathBuf};

use cantor_core::UrlIndex;
use thiserror::Error;
use tracing::debug;

/// URL index loading errors.
#[derive(Debug, Error)]
pub enum UrlIndexError {
    #[error("failed to read URL index {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid URL index at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    Parse { line: Option<usize>, message: String },
}

/// Parse a YAML or JSON `slug: url` mapping. Empty input is an empty index.
pub fn parse_url_index(text: &str) -> Result<UrlIndex, UrlIndexError> {
    if text.trim().is_empty() {
        return Ok(UrlIndex::new());
    }

    serde_yaml::from_str(text).map_err(|e| UrlIndexError::Parse {
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })
}

/// Read and parse a URL index file.
pub fn load_url_index(path: impl AsRef<Path>) -> Result<UrlIndex, UrlIndexError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| UrlIndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let index = parse_url_index(&text)?;
    debug!(path = %path.display(), urls = index.len(), "loaded URL index");
    Ok(index)
}
