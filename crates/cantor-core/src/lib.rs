//! Cantor core types.
//!
//! The closed vocabularies (liturgical parts and priorities) and the typed
//! plan model shared by the loader and the renderer.

pub mod entry;
pub mod error;
pub mod part;
pub mod plan;
pub mod priority;
pub mod urls;

pub use entry::Entry;
pub use error::{Error, Result};
pub use part::Part;
pub use plan::{Period, Plan, PlanDocument, TableKind};
pub use priority::Priority;
pub use urls::UrlIndex;
