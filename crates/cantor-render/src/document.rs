//! Whole-document rendering.

use std::io;

use cantor_config::{CantorConfig, OutputFormat, PaletteConfig};
use cantor_core::{Period, PlanDocument, TableKind, UrlIndex};
use tracing::{debug, info};

use crate::anthem::render_anthems;
use crate::format::EntryFormatter;
use crate::grid::TableStyle;
use crate::html;
use crate::table::{assemble, build_table};

/// Title of standalone HTML pages.
const PAGE_TITLE: &str = "Music Plan";

/// Rendering options, usually taken from the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Table layout; inferred from the plan when unset.
    pub kind: Option<TableKind>,
    /// Index name for `\index[...]` annotations.
    pub index: Option<String>,
    pub palette: PaletteConfig,
    /// Wrap the output in a complete HTML page.
    pub standalone: bool,
}

impl From<&CantorConfig> for RenderOptions {
    fn from(config: &CantorConfig) -> Self {
        Self {
            format: config.render.format,
            kind: config.render.kind,
            index: config.render.index.clone(),
            palette: config.palette.clone(),
            standalone: false,
        }
    }
}

/// Renders plan documents against a URL index.
#[derive(Debug, Clone)]
pub struct Renderer<'a> {
    urls: &'a UrlIndex,
    options: RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(urls: &'a UrlIndex, options: RenderOptions) -> Self {
        Self { urls, options }
    }

    /// Layout used for `doc`.
    pub fn kind_for(&self, doc: &PlanDocument) -> TableKind {
        self.options.kind.unwrap_or_else(|| doc.kind())
    }

    fn formatter(&self) -> EntryFormatter<'_> {
        EntryFormatter::new(self.urls).with_index(self.options.index.as_deref())
    }

    fn style(&self) -> TableStyle {
        match self.options.format {
            OutputFormat::Html => TableStyle::Html,
            OutputFormat::Markdown => TableStyle::Markdown,
        }
    }

    /// Heading and table for one period, or `None` if it only has anthems.
    pub fn render_period(&self, period: &Period, kind: TableKind) -> Option<String> {
        let rows = assemble(period, &self.formatter(), kind);
        if rows.is_empty() {
            debug!(period = %period.key, "no table rows, skipping period");
            return None;
        }

        let table = build_table(&rows, kind, &self.options.palette);
        Some(format!(
            "### {}\n\n{}",
            period.label(),
            table.render(self.style())
        ))
    }

    /// Render every period table followed by the anthem section.
    pub fn render_document(&self, doc: &PlanDocument) -> String {
        let kind = self.kind_for(doc);
        info!(
            root = %doc.root,
            %kind,
            periods = doc.plan.periods.len(),
            entries = doc.plan.entry_count(),
            "rendering plan"
        );

        let mut sections: Vec<String> = doc
            .plan
            .periods
            .iter()
            .filter_map(|period| self.render_period(period, kind))
            .collect();
        sections.extend(render_anthems(&doc.plan, &self.formatter()));

        let body = sections.join("\n");
        if self.options.standalone {
            html::standalone_page(PAGE_TITLE, &html::document_html(&body))
        } else {
            body
        }
    }

    /// Render `doc` into a writer.
    pub fn write_document<W: io::Write>(&self, doc: &PlanDocument, out: &mut W) -> io::Result<()> {
        out.write_all(self.render_document(doc).as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantor_core::{Entry, Part, Plan, Priority};

    fn doc(root: &str, plan: Plan) -> PlanDocument {
        PlanDocument {
            root: root.to_string(),
            plan,
        }
    }

    #[test]
    fn test_options_from_config() {
        let mut config = CantorConfig::default();
        config.render.format = OutputFormat::Markdown;
        config.render.index = Some("hymns".to_string());
        config.palette.required = "#ff0000".to_string();

        let options = RenderOptions::from(&config);
        assert_eq!(options.format, OutputFormat::Markdown);
        assert_eq!(options.index.as_deref(), Some("hymns"));
        assert_eq!(options.palette.color(Priority::Required), "#ff0000");
        assert!(!options.standalone);
    }

    #[test]
    fn test_kind_override() {
        let urls = UrlIndex::new();
        let mass = doc("mass", Plan::default());

        let inferred = Renderer::new(&urls, RenderOptions::default());
        assert_eq!(inferred.kind_for(&mass), TableKind::Mass);

        let forced = Renderer::new(
            &urls,
            RenderOptions {
                kind: Some(TableKind::Hymns),
                ..RenderOptions::default()
            },
        );
        assert_eq!(forced.kind_for(&mass), TableKind::Hymns);
    }

    #[test]
    fn test_anthem_only_period_has_no_table() {
        let urls = UrlIndex::new();
        let renderer = Renderer::new(&urls, RenderOptions::default());
        let period = Period::new("abc").with_part(Part::Anthems, vec![Entry::new("x")]);
        assert!(renderer.render_period(&period, TableKind::Hymns).is_none());
    }

    #[test]
    fn test_render_period_heading() {
        let urls = UrlIndex::new();
        let renderer = Renderer::new(&urls, RenderOptions::default());
        let period = Period::new("b").with_part(Part::Gloria, vec![Entry::new("gloria")]);
        let out = renderer.render_period(&period, TableKind::Mass).unwrap();
        assert!(out.starts_with("### Year B\n\n<table"));
    }

    #[test]
    fn test_standalone_page() {
        let urls = UrlIndex::new();
        let renderer = Renderer::new(
            &urls,
            RenderOptions {
                format: OutputFormat::Markdown,
                standalone: true,
                ..RenderOptions::default()
            },
        );
        let plan = Plan::new(vec![
            Period::new("a").with_part(Part::Opening, vec![Entry::new("be thou my vision")]),
        ]);
        let out = renderer.render_document(&doc("hymns", plan));
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<h3>Year A</h3>"));
        assert!(out.contains("Be Thou My Vision"));
        assert!(out.contains("<table>"));
    }

    #[test]
    fn test_write_document() {
        let urls = UrlIndex::new();
        let renderer = Renderer::new(&urls, RenderOptions::default());
        let plan = Plan::new(vec![
            Period::new("a").with_part(Part::Opening, vec![Entry::new("x")]),
        ]);
        let mut buf = Vec::new();
        renderer.write_document(&doc("hymns", plan), &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("### Year A"));
    }
}
