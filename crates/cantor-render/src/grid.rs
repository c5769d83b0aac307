//! Generic table layout shared by the HTML and markdown writers.

use crate::{html, markdown};

/// Table output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableStyle {
    /// `<table>` element with inline styles.
    #[default]
    Html,
    /// Pipe table.
    Markdown,
}

/// Column alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

/// Table column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub alignment: Alignment,
    /// Share of the table width, in percent.
    pub width: Option<u8>,
    pub bold: bool,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Left,
            width: None,
            bold: false,
        }
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn width(mut self, percent: u8) -> Self {
        self.width = Some(percent);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// One table cell. Text is inline markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub background: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            background: None,
        }
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Table structure
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
    show_headers: bool,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            show_headers: true,
        }
    }

    /// Leave the header row empty.
    pub fn hide_headers(mut self) -> Self {
        self.show_headers = false;
        self
    }

    pub fn add_row(&mut self, row: Vec<impl Into<Cell>>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn shows_headers(&self) -> bool {
        self.show_headers
    }

    /// Column widths, if every column has one.
    pub fn widths(&self) -> Option<Vec<u8>> {
        self.columns.iter().map(|c| c.width).collect()
    }

    /// Render the table to a string
    pub fn render(&self, style: TableStyle) -> String {
        match style {
            TableStyle::Html => html::render_table(self),
            TableStyle::Markdown => markdown::render_table(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_require_every_column() {
        let table = Table::new(vec![Column::new("A").width(20), Column::new("B").width(80)]);
        assert_eq!(table.widths(), Some(vec![20, 80]));

        let table = Table::new(vec![Column::new("A").width(20), Column::new("B")]);
        assert_eq!(table.widths(), None);
    }

    #[test]
    fn test_add_row() {
        let mut table = Table::new(vec![Column::new("A"), Column::new("B")]).hide_headers();
        table.add_row(vec![Cell::new("1").background("#fff"), Cell::from("2")]);
        table.add_row(vec!["3", "4"]);

        assert!(!table.shows_headers());
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0][0].background.as_deref(), Some("#fff"));
        assert_eq!(table.rows()[1][1], Cell::new("4"));
    }
}
