//! Markdown pipe-table writer.

use std::fmt::Write;

use crate::grid::{Alignment, Cell, Column, Table};

/// Render a table as a pipe table.
///
/// Hidden headers become an empty header row, which pipe tables require.
/// Column widths are emitted as a `tbl-colwidths` attribute line.
pub fn render_table(table: &Table) -> String {
    let mut out = String::new();

    out.push('|');
    for column in table.columns() {
        if table.shows_headers() {
            let _ = write!(out, " {} |", escape_cell(&column.header));
        } else {
            out.push_str("   |");
        }
    }
    out.push('\n');

    out.push('|');
    for column in table.columns() {
        let sep = match column.alignment {
            Alignment::Left => ":--",
            Alignment::Right => "--:",
            Alignment::Center => ":-:",
        };
        out.push_str(sep);
        out.push('|');
    }
    out.push('\n');

    for row in table.rows() {
        out.push('|');
        for (cell, column) in row.iter().zip(table.columns()) {
            let _ = write!(out, " {} |", render_cell(cell, column));
        }
        out.push('\n');
    }

    if let Some(widths) = table.widths() {
        let widths: Vec<String> = widths.iter().map(u8::to_string).collect();
        let _ = writeln!(out, ": {{tbl-colwidths=\"[{}]\"}}", widths.join(","));
    }

    out
}

fn render_cell(cell: &Cell, column: &Column) -> String {
    let mut text = escape_cell(&cell.text);
    if column.bold && !text.is_empty() {
        text = format!("**{text}**");
    }
    match &cell.background {
        Some(color) => format!("<span style=\"background-color:{color};\">{text}</span>"),
        None => text,
    }
}

/// Keep cell text on one line and away from the column separators.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}
