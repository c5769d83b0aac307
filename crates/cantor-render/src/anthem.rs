//! Choral anthem section.

use cantor_core::{Part, Plan};
use tracing::debug;

use crate::format::{EntryFormatter, FormatMode};

const HEADER: &str = "\
::: {.red}

### Choral Anthems

:::
|          |                                  |
|:--------:|:---------------------------------|
";

const FOOTER: &str = ": Choral anthems could be sung before Mass, in place of an offertory hymn, \
in place of a Communion hymn (if appropriate), or after Communion for meditation. \
{tbl-colwidths=\"[15,85]\"}\n";

/// Separator between anthems sharing one period row.
const ANTHEM_SEPARATOR: &str = "\n | |";

/// Whether any period lists anthems.
pub fn has_anthems(plan: &Plan) -> bool {
    plan.has_anthems()
}

/// Markdown for the anthem section, or `None` when the plan has no anthems.
///
/// Every period gets a row, in plan order; periods without anthems get an
/// empty second cell.
pub fn render_anthems(plan: &Plan, formatter: &EntryFormatter<'_>) -> Option<String> {
    if !has_anthems(plan) {
        return None;
    }

    let mut out = String::from(HEADER);
    for period in &plan.periods {
        let label = period.label();
        let anthems = period.entries(Part::Anthems);
        if anthems.is_empty() {
            out.push_str(&format!("| [**{label}**]{{.red}} | |\n"));
        } else {
            let names: Vec<String> = anthems
                .iter()
                .map(|entry| formatter.format(entry, FormatMode::Anthem))
                .collect();
            out.push_str(&format!(
                "| [**{label}**]{{.red}} | {} |\n",
                names.join(ANTHEM_SEPARATOR)
            ));
        }
    }
    out.push_str(FOOTER);

    debug!(periods = plan.periods.len(), "rendered anthem section");
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantor_core::{Entry, Period, UrlIndex};
    use cantor_test_utils::sample_urls;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_anthems() {
        let plan = Plan::new(vec![
            Period::new("a").with_part(Part::Opening, vec![Entry::new("x")]),
        ]);
        let urls = UrlIndex::new();
        assert!(!has_anthems(&plan));
        assert_eq!(render_anthems(&plan, &EntryFormatter::new(&urls)), None);
    }

    #[test]
    fn test_one_row_per_period() {
        let plan = Plan::new(vec![
            Period::new("a").with_part(
                Part::Anthems,
                vec![
                    Entry::new("ave verum corpus").with_composer("w. a. mozart"),
                    Entry::new("o sacrum convivium").with_composer("thomas tallis"),
                ],
            ),
            Period::new("b").with_part(Part::Opening, vec![Entry::new("x")]),
            Period::new("abc").with_part(
                Part::Anthems,
                vec![Entry::new("locus iste").with_note("Verses 1-2")],
            ),
        ]);
        let urls = sample_urls();

        let section = render_anthems(&plan, &EntryFormatter::new(&urls)).unwrap();
        let expected = "\
::: {.red}

### Choral Anthems

:::
|          |                                  |
|:--------:|:---------------------------------|
| [**Year A**]{.red} | [Ave Verum Corpus](https://example.com/watch/ave-verum) (W. A. Mozart)
 | |O Sacrum Convivium (Thomas Tallis) |
| [**Year B**]{.red} | |
| [**Years A, B, C**]{.red} | Locus Iste (Verses 1-2) |
: Choral anthems could be sung before Mass, in place of an offertory hymn, in place of a Communion hymn (if appropriate), or after Communion for meditation. {tbl-colwidths=\"[15,85]\"}
";
        assert_eq!(section, expected);
    }

    #[test]
    fn test_anthem_index() {
        let plan = Plan::new(vec![Period::new("c").with_part(
            Part::Anthems,
            vec![Entry::new("ave verum corpus").with_composer("w. a. mozart")],
        )]);
        let urls = sample_urls();
        let formatter = EntryFormatter::new(&urls).with_index(Some("anthems"));

        let section = render_anthems(&plan, &formatter).unwrap();
        assert!(section.contains(
            "| [**Year C**]{.red} | [Ave Verum Corpus](https://example.com/watch/ave-verum)\\index[anthems]{Ave Verum Corpus} (W. A. Mozart) |"
        ));
    }
}
