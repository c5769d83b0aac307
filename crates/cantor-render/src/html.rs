//! HTML table writer.

use std::fmt::Write;

use pulldown_cmark::{html, Options, Parser};

use crate::grid::{Alignment, Table};

/// Convert inline markdown to HTML without the enclosing paragraph.
pub fn inline_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut output = String::new();
    html::push_html(&mut output, parser);

    let trimmed = output.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => trimmed.to_string(),
    }
}

/// Convert a whole markdown document to HTML.
pub fn document_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Wrap rendered HTML in a complete page.
pub fn standalone_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{}</title>
    <style>
        body {{ font-family: system-ui, sans-serif; max-width: 900px; margin: 0 auto; padding: 2rem; }}
        table {{ border-collapse: collapse; width: 100%; }}
        td {{ padding: 6px 8px; }}
    </style>
</head>
<body>
{}
</body>
</html>
"#,
        escape(title),
        body
    )
}

/// Render a table as a `<table>` element. Column labels are not shown.
pub fn render_table(table: &Table) -> String {
    let mut out = String::new();
    out.push_str("<table style=\"width:100%;border-collapse:collapse;\">\n");

    if table.columns().iter().any(|c| c.width.is_some()) {
        out.push_str("<colgroup>\n");
        for column in table.columns() {
            match column.width {
                Some(w) => {
                    let _ = writeln!(out, "<col style=\"width:{w}%;\">");
                }
                None => out.push_str("<col>\n"),
            }
        }
        out.push_str("</colgroup>\n");
    }

    if table.shows_headers() {
        out.push_str("<thead>\n<tr>\n");
        for column in table.columns() {
            let _ = writeln!(
                out,
                "<th style=\"text-align:{};\">{}</th>",
                align(column.alignment),
                escape(&column.header)
            );
        }
        out.push_str("</tr>\n</thead>\n");
    }

    out.push_str("<tbody>\n");
    for row in table.rows() {
        out.push_str("<tr>\n");
        for (cell, column) in row.iter().zip(table.columns()) {
            let mut style = format!("text-align:{};vertical-align:top;", align(column.alignment));
            if column.bold {
                style.push_str("font-weight:bold;");
            }
            if let Some(color) = &cell.background {
                let _ = write!(style, "background-color:{color};");
            }
            let _ = writeln!(out, "<td style=\"{style}\">{}</td>", inline_html(&cell.text));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn align(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Right => "right",
        Alignment::Center => "center",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
