//! Configuration for Cantor.
//!
//! Loads and validates plan documents, URL indexes and the optional
//! `.cantor/config.yaml` settings file.

pub mod env;
pub mod frontmatter;
pub mod loader;
pub mod plan;
pub mod types;
pub mod urls;


pub use env::*;
pub use frontmatter::extract_front_matter;
pub use loader::*;
pub use plan::*;
pub use types::*;
pub use urls::*;
