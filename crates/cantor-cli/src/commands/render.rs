//! `cantor render`: turn a plan into tables.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use cantor_config::{load_plan_file, load_url_index, OutputFormat};
use cantor_core::{TableKind, UrlIndex};
use cantor_render::{RenderOptions, Renderer};
use clap::{Args, ValueEnum, ValueHint};
use tracing::{debug, info};

use crate::cli::CommandContext;
use crate::error::CliError;

/// Output format argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Html,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => Self::Html,
            FormatArg::Markdown => Self::Markdown,
        }
    }
}

/// Table layout argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Hymns,
    Mass,
}

impl From<KindArg> for TableKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Hymns => Self::Hymns,
            KindArg::Mass => Self::Mass,
        }
    }
}

/// Render a plan into tables
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Plan file: YAML, or a document with YAML front matter
    #[arg(value_hint = ValueHint::FilePath)]
    pub plan: PathBuf,

    /// URL index mapping entry slugs to video links
    #[arg(short, long, env = "CANTOR_URLS", value_hint = ValueHint::FilePath)]
    pub urls: Option<PathBuf>,

    /// Output format (overrides the settings file)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Table layout (default: inferred from the plan's top-level key)
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Add `\index[NAME]{...}` after linked titles
    #[arg(long, value_name = "NAME")]
    pub index: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Produce a complete HTML page
    #[arg(long)]
    pub standalone: bool,
}

impl RenderCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let doc = load_plan_file(&self.plan)?;
        let urls = self.load_urls(ctx)?;
        let renderer = Renderer::new(&urls, self.options(ctx));

        match &self.output {
            Some(path) => {
                let file = File::create(path).map_err(|e| {
                    CliError::io_with_path("failed to create output file", e, path)
                })?;
                renderer
                    .write_document(&doc, &mut BufWriter::new(file))
                    .map_err(|e| CliError::io_with_path("failed to write output file", e, path))?;
                info!(path = %path.display(), "wrote document");
            }
            None => {
                renderer
                    .write_document(&doc, &mut io::stdout().lock())
                    .context("failed to write rendered document to stdout")?;
            }
        }
        Ok(())
    }

    /// Settings-file options with command-line overrides applied.
    pub fn options(&self, ctx: &CommandContext) -> RenderOptions {
        let mut options = RenderOptions::from(&ctx.config);
        if let Some(format) = self.format {
            options.format = format.into();
        }
        if let Some(kind) = self.kind {
            options.kind = Some(kind.into());
        }
        if let Some(index) = &self.index {
            options.index = Some(index.clone());
        }
        options.standalone = self.standalone;
        options
    }

    fn load_urls(&self, ctx: &CommandContext) -> Result<UrlIndex, CliError> {
        let path = match (&self.urls, &ctx.config.urls.path) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => ctx.resolve(path),
            (None, None) => {
                debug!("no URL index, entries will not be linked");
                return Ok(UrlIndex::new());
            }
        };
        Ok(load_url_index(path)?)
    }
}
