//! Cantor - liturgical music planning sheets
//!
//! Main entry point for the `cantor` binary.

use std::process::ExitCode;

use cantor_config::env::vars;
use cantor_log::{LogConfig, LogLevel};
use clap::Parser;

mod cli;
mod commands;
mod error;

use cli::Cli;
use error::CliError;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
    IoError = 3,
    ValidationError = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    // `.env` may set CANTOR_CONFIG or CANTOR_URLS, so it is read before parsing.
    if let Ok(cwd) = std::env::current_dir() {
        cantor_config::load_dotenv(&cwd);
    }

    let cli = Cli::parse();
    let color = cli.use_color();
    init_tracing(&cli, color);

    match run(cli) {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            eprintln!("{}", e.report(color));
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.load_config()?;
    cli.execute(config)
}

fn init_tracing(cli: &Cli, color: bool) {
    let mut config = LogConfig::from_env().with_ansi(color);
    // Command-line verbosity wins unless the level was set explicitly.
    if cli.verbose > 0 || cli.quiet || std::env::var_os(vars::CANTOR_LOG_LEVEL).is_none() {
        config = config.with_level(LogLevel::from_verbosity(cli.verbose, cli.quiet));
    }

    if let Err(e) = cantor_log::init(&config) {
        eprintln!("warning: {e}");
    }
}
