//! CLI argument definitions using clap derive macros.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use cantor_config::{CantorConfig, ConfigLoader};
use clap::{ArgAction, ColorChoice, Parser, Subcommand, ValueHint};
use tracing::debug;

use crate::commands::{CheckCommand, RenderCommand};
use crate::error::CliError;

/// Cantor - liturgical music planning sheets
///
/// Renders hymn lists and Mass settings written in YAML into tables for
/// Quarto or HTML documents.
#[derive(Debug, Parser)]
#[command(
    name = "cantor",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Path to settings file
    #[arg(
        short,
        long,
        global = true,
        env = "CANTOR_CONFIG",
        value_hint = ValueHint::FilePath,
        help = "Path to settings file (default: .cantor/config.yaml)"
    )]
    pub config: Option<PathBuf>,

    /// When to use colors
    #[arg(
        long,
        global = true,
        default_value = "auto",
        value_enum,
        help = "When to use terminal colors"
    )]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a plan into tables
    Render(RenderCommand),

    /// Load and validate a plan without rendering it
    Check(CheckCommand),
}

impl Cli {
    /// Whether stderr output should be colored.
    pub fn use_color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        }
    }

    /// Project directory settings paths are resolved against.
    pub fn project_dir(&self) -> PathBuf {
        match self.config.as_deref().and_then(Path::parent) {
            // `.cantor/config.yaml` belongs to the directory above `.cantor`.
            Some(parent) if parent.ends_with(cantor_config::CONFIG_DIR) => parent
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            Some(parent) => parent.to_path_buf(),
            None => std::env::current_dir().unwrap_or_default(),
        }
    }

    /// Load settings from `--config` or the project's default location.
    pub fn load_config(&self) -> Result<CantorConfig, CliError> {
        let loader = ConfigLoader::new(self.project_dir());
        let config = match &self.config {
            Some(path) => loader.load_file(path)?,
            None => loader.load()?,
        };
        debug!(project = %loader.base_path().display(), "settings loaded");
        Ok(config)
    }

    /// Execute the selected command
    pub fn execute(self, config: CantorConfig) -> Result<(), CliError> {
        let ctx = CommandContext {
            project_dir: self.project_dir(),
            config,
            quiet: self.quiet,
        };

        match self.command {
            Command::Render(cmd) => cmd.execute(&ctx),
            Command::Check(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub project_dir: PathBuf,
    pub config: CantorConfig,
    pub quiet: bool,
}

impl CommandContext {
    /// Resolve a settings-relative path against the project directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "cantor",
            "-vv",
            "render",
            "plan.yaml",
            "--format",
            "markdown",
            "--kind",
            "mass",
            "--index",
            "music",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Render(cmd) => {
                assert_eq!(cmd.plan, PathBuf::from("plan.yaml"));
                assert_eq!(cmd.index.as_deref(), Some("music"));
                assert!(cmd.output.is_none());
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["cantor", "-q", "-v", "check", "plan.yaml"]).is_err());
    }

    #[test]
    fn test_project_dir_from_config_path() {
        let cli = Cli::try_parse_from([
            "cantor",
            "--config",
            "/parish/.cantor/config.yaml",
            "check",
            "plan.yaml",
        ])
        .unwrap();
        assert_eq!(cli.project_dir(), PathBuf::from("/parish"));

        let cli = Cli::try_parse_from([
            "cantor",
            "--config",
            "/parish/settings.yaml",
            "check",
            "plan.yaml",
        ])
        .unwrap();
        assert_eq!(cli.project_dir(), PathBuf::from("/parish"));
    }
}
