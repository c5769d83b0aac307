//! `cantor check`: load and validate a plan.

use std::path::PathBuf;

use cantor_config::load_plan_file;
use clap::{Args, ValueHint};
use tracing::info;

use crate::cli::CommandContext;
use crate::error::CliError;

/// Validate a plan without rendering it
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Plan file: YAML, or a document with YAML front matter
    #[arg(value_hint = ValueHint::FilePath)]
    pub plan: PathBuf,
}

impl CheckCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let doc = load_plan_file(&self.plan)?;
        let kind = ctx.config.render.kind.unwrap_or_else(|| doc.kind());
        info!(plan = %self.plan.display(), "plan is valid");

        if !ctx.quiet {
            println!(
                "{}: ok ({kind}, {} periods, {} entries{})",
                self.plan.display(),
                doc.plan.periods.len(),
                doc.plan.entry_count(),
                if doc.plan.has_anthems() { ", anthems" } else { "" }
            );
        }
        Ok(())
    }
}
