//! Plan rendering for Cantor.
//!
//! Turns a validated plan into per-period tables (HTML or markdown) and the
//! choral anthem section.

pub mod anthem;
pub mod document;
pub mod format;
pub mod grid;
pub mod html;
pub mod markdown;
pub mod slug;
pub mod table;
pub mod text;

pub use anthem::{has_anthems, render_anthems};
pub use document::{RenderOptions, Renderer};
pub use format::{EntryFormatter, FormatMode};
pub use grid::{Alignment, Cell, Column, Table, TableStyle};
pub use slug::{resolve, slug};
pub use table::{assemble, blank_repeated_labels, build_table, Row};
pub use text::{abbreviate_book, capitalize_words, title_case};
