//! Subcommand implementations.

mod check;
mod render;

pub use check::CheckCommand;
pub use render::{FormatArg, KindArg, RenderCommand};
