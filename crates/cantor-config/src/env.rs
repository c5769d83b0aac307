//! Environment variable handling.

use std::env;
use std::path::Path;

use tracing::debug;

/// Environment variable names.
pub mod vars {
    /// Settings file to use instead of `.cantor/config.yaml`.
    pub const CANTOR_CONFIG: &str = "CANTOR_CONFIG";
    /// Default URL index path.
    pub const CANTOR_URLS: &str = "CANTOR_URLS";

    pub const CANTOR_LOG_LEVEL: &str = "CANTOR_LOG_LEVEL";
    pub const CANTOR_LOG_FORMAT: &str = "CANTOR_LOG_FORMAT";
    pub const CANTOR_LOG_FILE: &str = "CANTOR_LOG_FILE";
    pub const CANTOR_LOG_SOURCE: &str = "CANTOR_LOG_SOURCE";
    pub const CANTOR_LOG_SPANS: &str = "CANTOR_LOG_SPANS";

    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Load `.env` then `.env.local` from `dir`; later files override earlier.
///
/// Missing files are not an error. Returns how many files were loaded.
pub fn load_dotenv(dir: &Path) -> usize {
    let mut loaded = 0;
    for name in [".env", ".env.local"] {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match dotenvy::from_path_override(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "loaded env file");
                loaded += 1;
            }
            Err(e) => debug!(path = %path.display(), error = %e, "skipped env file"),
        }
    }
    loaded
}

/// Get an optional string variable.
pub fn get(var: &str) -> Option<String> {
    env::var(var).ok()
}

/// Get a boolean variable (`true`, `1`, `yes`).
pub fn get_bool(var: &str) -> Option<bool> {
    env::var(var)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_dotenv_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "CANTOR_DOTENV_TEST=base\n").unwrap();
        std::fs::write(dir.path().join(".env.local"), "CANTOR_DOTENV_TEST=local\n").unwrap();

        assert_eq!(load_dotenv(dir.path()), 2);
        assert_eq!(get("CANTOR_DOTENV_TEST").as_deref(), Some("local"));

        env::remove_var("CANTOR_DOTENV_TEST");
    }

    #[test]
    fn test_load_dotenv_skips_malformed_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "this is not an assignment\n").unwrap();
        std::fs::write(dir.path().join(".env.local"), "CANTOR_DOTENV_SKIP=ok\n").unwrap();

        assert_eq!(load_dotenv(dir.path()), 1);
        assert_eq!(get("CANTOR_DOTENV_SKIP").as_deref(), Some("ok"));

        env::remove_var("CANTOR_DOTENV_SKIP");
    }

    #[test]
    fn test_load_dotenv_missing() {
        let dir = tempdir().unwrap();
        assert_eq!(load_dotenv(dir.path()), 0);
    }

    #[test]
    fn test_get_bool() {
        env::set_var("CANTOR_BOOL_TEST", "Yes");
        assert_eq!(get_bool("CANTOR_BOOL_TEST"), Some(true));
        env::set_var("CANTOR_BOOL_TEST", "off");
        assert_eq!(get_bool("CANTOR_BOOL_TEST"), Some(false));
        env::remove_var("CANTOR_BOOL_TEST");
        assert_eq!(get_bool("CANTOR_BOOL_TEST"), None);
    }
}
