//! Settings file loading and parsing.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::types::CantorConfig;

/// Directory holding the settings file, relative to the project.
pub const CONFIG_DIR: &str = ".cantor";

/// Settings file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Project directory this loader resolves paths against.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the settings file.
    pub fn config_path(&self) -> PathBuf {
        self.base_path.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration from `.cantor/config.yaml`, or defaults if absent.
    pub fn load(&self) -> Result<CantorConfig, ConfigError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no settings file, using defaults");
            return Ok(CantorConfig::default());
        }

        self.load_file(&config_path)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_file(&self, path: &Path) -> Result<CantorConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let config = self.parse(&contents)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(config)
    }

    /// Parse settings text, expanding environment variables first.
    pub fn parse(&self, contents: &str) -> Result<CantorConfig, ConfigError> {
        let expanded = self.expand_env_vars(contents)?;

        // An empty file means "all defaults".
        if expanded.trim().is_empty() {
            return Ok(CantorConfig::default());
        }

        let config: CantorConfig =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        self.validate(&config)?;
        Ok(config)
    }

    /// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
    fn expand_env_vars(&self, content: &str) -> Result<String, ConfigError> {
        let re = env_var_pattern();
        let mut result = content.to_string();

        for cap in re.captures_iter(content) {
            let full_match = &cap[0];
            let var_name = &cap[1];
            let default = cap.get(2).map(|m| m.as_str());

            let value = match std::env::var(var_name) {
                Ok(v) => v,
                Err(_) => match default {
                    Some(d) => d.to_string(),
                    None => {
                        return Err(ConfigError::EnvVarNotFound {
                            var: var_name.to_string(),
                        })
                    }
                },
            };

            result = result.replace(full_match, &value);
        }

        Ok(result)
    }

    /// Validate configuration values.
    fn validate(&self, config: &CantorConfig) -> Result<(), ConfigError> {
        let bad: Vec<String> = config
            .palette
            .entries()
            .filter(|(_, color)| !is_hex_color(color))
            .map(|(priority, color)| format!("{priority}={color}"))
            .collect();

        if !bad.is_empty() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "palette colors must be #rgb or #rrggbb: {}",
                    bad.join(", ")
                ),
            });
        }

        if let Some(index) = &config.render.index {
            if index.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "render.index must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Save configuration to `.cantor/config.yaml`.
    pub fn save(&self, config: &CantorConfig) -> Result<(), ConfigError> {
        let config_dir = self.base_path.join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir)?;

        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        std::fs::write(config_dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").expect("env var pattern is valid")
    })
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
