//! Period table assembly.

use cantor_config::PaletteConfig;
use cantor_core::{Part, Period, Priority, TableKind};
use tracing::debug;

use crate::format::{EntryFormatter, FormatMode};
use crate::grid::{Alignment, Cell, Column, Table};
use crate::text::abbreviate_book;

/// One row of a period table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub part: Part,
    /// Part label, blank when it repeats the row above.
    pub label: String,
    /// Hymnal abbreviation.
    pub hymnal: String,
    /// Formatted entry text.
    pub text: String,
    pub priority: Priority,
}

/// Width in percent of the option column for a table kind.
pub fn option_width(kind: TableKind) -> u8 {
    match kind {
        TableKind::Hymns => 80,
        TableKind::Mass => 75,
    }
}

/// Width in percent of the hymnal column.
pub const HYMNAL_WIDTH: u8 = 10;

/// Flatten a period into rows, skipping anthems.
pub fn assemble(period: &Period, formatter: &EntryFormatter<'_>, kind: TableKind) -> Vec<Row> {
    let mut rows = Vec::new();
    for (&part, entries) in &period.parts {
        if part == Part::Anthems {
            continue;
        }
        let mode = FormatMode::for_part(part, kind);
        for entry in entries {
            rows.push(Row {
                part,
                label: part.label().to_string(),
                hymnal: entry.book.as_deref().map(abbreviate_book).unwrap_or_default(),
                text: formatter.format(entry, mode),
                priority: entry.priority,
            });
        }
    }

    blank_repeated_labels(&mut rows);
    debug!(period = %period.key, rows = rows.len(), "assembled period table");
    rows
}

/// Blank every label equal to the one directly above it.
pub fn blank_repeated_labels(rows: &mut [Row]) {
    let mut previous: Option<String> = None;
    for row in rows.iter_mut() {
        if previous.as_deref() == Some(row.label.as_str()) {
            row.label.clear();
        } else {
            previous = Some(row.label.clone());
        }
    }
}

/// Lay rows out in the three-column plan table.
pub fn build_table(rows: &[Row], kind: TableKind, palette: &PaletteConfig) -> Table {
    let option = option_width(kind);
    let mut table = Table::new(vec![
        Column::new("Part")
            .align(Alignment::Right)
            .bold()
            .width(100 - option - HYMNAL_WIDTH),
        Column::new("Hymnal")
            .align(Alignment::Center)
            .width(HYMNAL_WIDTH),
        Column::new("Option").width(option),
    ])
    .hide_headers();

    for row in rows {
        table.add_row(vec![
            Cell::new(row.label.as_str()),
            Cell::new(row.hymnal.as_str()).background(palette.color(row.priority)),
            Cell::new(row.text.as_str()),
        ]);
    }
    table
}
