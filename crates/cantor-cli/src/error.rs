//! CLI error handling and formatting.

use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use cantor_config::{ConfigError, PlanError, UrlIndexError};
use thiserror::Error;

use crate::Exit;

/// CLI error type with rich context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    Validation {
        message: String,
        hint: Option<String>,
    },

    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Validation { .. } => "E004",
            Self::Other(_) => "E999",
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config { .. } => Exit::ConfigError,
            Self::Io { .. } => Exit::IoError,
            Self::Validation { .. } => Exit::ValidationError,
            Self::Other(_) => Exit::GeneralError,
        }
        .into()
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } | Self::Validation { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(
        message: impl Into<String>,
        source: io::Error,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source,
            path: Some(path.into()),
        }
    }

    /// Format the error for stderr: `error[CODE]: message`, then a hint line.
    pub fn report(&self, color: bool) -> String {
        let (red, cyan, bold, reset) = if color {
            ("\x1b[31m", "\x1b[36m", "\x1b[1m", "\x1b[0m")
        } else {
            ("", "", "", "")
        };

        let mut output = format!("{bold}{red}error[{}]:{reset} {self}", self.code());
        if let Self::Io {
            path: Some(path), ..
        } = self
        {
            let _ = write!(output, "\n  --> {}", path.display());
        }
        if let Some(hint) = self.hint() {
            let _ = write!(output, "\n{bold}{cyan}hint:{reset} {hint}");
        }
        output
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            path: None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config {
            message: format!("Configuration error: {err}"),
            source: Some(Box::new(err)),
            hint: Some("Check your .cantor/config.yaml settings file".to_string()),
        }
    }
}

impl From<UrlIndexError> for CliError {
    fn from(err: UrlIndexError) -> Self {
        match err {
            UrlIndexError::Io { path, source } => Self::Io {
                message: format!("failed to read URL index: {source}"),
                source,
                path: Some(path),
            },
            parse @ UrlIndexError::Parse { .. } => Self::Config {
                message: parse.to_string(),
                source: Some(Box::new(parse)),
                hint: Some("The URL index must be a `slug: url` mapping".to_string()),
            },
        }
    }
}

impl From<PlanError> for CliError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::Io { path, source } => Self::Io {
                message: format!("failed to read plan: {source}"),
                source,
                path: Some(path),
            },
            other if other.is_validation() => {
                let hint = match &other {
                    PlanError::UnknownParts { .. } => {
                        Some("Part names are kebab-case, e.g. `preparation-of-gifts`")
                    }
                    PlanError::MissingPriority { .. } => {
                        Some("Every entry outside `anthems` needs a `priority`")
                    }
                    _ => None,
                };
                Self::Validation {
                    message: other.to_string(),
                    hint: hint.map(str::to_string),
                }
            }
            other => Self::Other(other.into()),
        }
    }
}
