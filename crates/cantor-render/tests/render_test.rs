use cantor_config::{load_plan, OutputFormat};
use cantor_render::{RenderOptions, Renderer};
use cantor_test_utils::{assert_ok, sample_urls, SAMPLE_HYMNS, SAMPLE_MASS};
use pretty_assertions::assert_eq;

fn markdown() -> RenderOptions {
    RenderOptions {
        format: OutputFormat::Markdown,
        ..RenderOptions::default()
    }
}

#[test]
fn test_hymn_list_markdown() {
    let doc = assert_ok!(load_plan(SAMPLE_HYMNS));
    let urls = sample_urls();
    let out = Renderer::new(&urls, markdown()).render_document(&doc);

    let expected = r#"### Year A

|   |   |   |
|--:|:-:|:--|
| **Opening** | <span style="background-color:#fad7a0;">WIV</span> | [All Creatures of Our God and King (<span style="font-variant:small-caps;">lasst uns erfreuen</span>)](https://example.com/watch/all-creatures) |
|  | <span style="background-color:#f9e79f;">G</span> | Praise to the Lord, the Almighty (<span style="font-variant:small-caps;">lobe den herren</span>) (<i>verses 1, 3-4</i>) |
| **Psalm** | <span style="background-color:#f5b7b1;"></span> | <i>Psalm 23 The Lord Is My Shepherd (<span style="font-variant:small-caps;">Gelineau</span>) (Joseph Gelineau)</i> |
| **Communion** | <span style="background-color:#a9dfbf;">[OCP](https://www.ocp.org)</span> | Taste and See (James Moore) (during Communion) |
: {tbl-colwidths="[10,10,80]"}

::: {.red}

### Choral Anthems

:::
|          |                                  |
|:--------:|:---------------------------------|
| [**Year A**]{.red} | |
| [**Years A, B, C**]{.red} | [Ave Verum Corpus](https://example.com/watch/ave-verum) (W. A. Mozart)
 | |O Sacrum Convivium (Thomas Tallis) |
: Choral anthems could be sung before Mass, in place of an offertory hymn, in place of a Communion hymn (if appropriate), or after Communion for meditation. {tbl-colwidths="[15,85]"}
"#;
    assert_eq!(out, expected);
}

#[test]
fn test_mass_setting_markdown() {
    let doc = assert_ok!(load_plan(SAMPLE_MASS));
    let urls = sample_urls();
    let out = Renderer::new(&urls, markdown()).render_document(&doc);

    let expected = r#"### Years A, B, C

|   |   |   |
|--:|:-:|:--|
| **Kyrie** | <span style="background-color:#f5b7b1;"></span> | [Kyrie](https://example.com/watch/kyrie), Form A (Missa De Angelis) |
| **Holy, Holy, Holy** | <span style="background-color:#fad7a0;"></span> | <b>Year A:</b> Holy, Holy, Holy (Richard Proulx) |
| **Lamb of God** | <span style="background-color:#FFFFFF;"></span> | Lamb of God (Tune: agnus dei xviii) (during the fraction rite) |
: {tbl-colwidths="[15,10,75]"}
"#;
    assert_eq!(out, expected);
}

#[test]
fn test_hymn_list_html() {
    let doc = assert_ok!(load_plan(SAMPLE_HYMNS));
    let urls = sample_urls();
    let out = Renderer::new(&urls, RenderOptions::default()).render_document(&doc);

    assert!(out.starts_with("### Year A\n\n<table"));
    assert!(out.contains("<col style=\"width:80%;\">"));
    assert!(out.contains(
        "<a href=\"https://example.com/watch/all-creatures\">All Creatures of Our God and King"
    ));
    assert!(out.contains("background-color:#f9e79f;\">G</td>"));
    assert!(out.contains("<a href=\"https://www.ocp.org\">OCP</a>"));
    // Anthems stay markdown in both formats.
    assert!(out.contains("### Choral Anthems"));
    assert_eq!(out.matches("<table").count(), 1);
}

#[test]
fn test_index_and_palette_from_options() {
    let doc = assert_ok!(load_plan(SAMPLE_HYMNS));
    let urls = sample_urls();
    let mut options = markdown();
    options.index = Some("music".to_string());
    options.palette.preferred = "#123456".to_string();

    let out = Renderer::new(&urls, options).render_document(&doc);
    assert!(out.contains("\\index[music]{All Creatures of Our God and King"));
    assert!(out.contains("\\index[music]{Ave Verum Corpus}"));
    assert!(out.contains("background-color:#123456;\">WIV"));
}

#[test]
fn test_forced_kind() {
    let doc = assert_ok!(load_plan(SAMPLE_HYMNS));
    let urls = sample_urls();
    let mut options = markdown();
    options.kind = Some(cantor_core::TableKind::Mass);

    let out = Renderer::new(&urls, options).render_document(&doc);
    assert!(out.contains("{tbl-colwidths=\"[15,10,75]\"}"));
    // Psalms are formatted as Mass parts.
    assert!(out.contains("| Psalm 23 the Lord Is My Shepherd (Tune: Gelineau) (Joseph Gelineau) |"));
}
