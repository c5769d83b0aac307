//! Entry slugs and URL lookup.

use std::sync::OnceLock;

use cantor_core::{Entry, UrlIndex};
use regex::Regex;
use tracing::trace;

/// Build the URL index key for an entry.
///
/// Name, composer and tune are joined with parentheses, stripped of anything
/// but ASCII letters, digits and spaces, lowercased, and hyphenated.
pub fn slug(entry: &Entry) -> String {
    let mut key = entry.name.clone();
    if let Some(composer) = &entry.composer {
        key.push_str(" (");
        key.push_str(composer);
    }
    if let Some(tune) = &entry.tune {
        key.push_str(" (");
        key.push_str(tune);
    }

    let cleaned = disallowed_chars().replace_all(&key, "");
    cleaned
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Look up the entry's video URL.
pub fn resolve<'a>(entry: &Entry, urls: &'a UrlIndex) -> Option<&'a str> {
    let key = slug(entry);
    let url = urls.get(&key);
    if url.is_none() {
        trace!(slug = %key, "no URL for entry");
    }
    url
}

fn disallowed_chars() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^A-Za-z0-9 ]+").expect("slug pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantor_test_utils::sample_urls;
    use proptest::prelude::*;

    #[test]
    fn test_slug_name_only() {
        assert_eq!(slug(&Entry::new("Be Thou My Vision")), "be-thou-my-vision");
    }

    #[test]
    fn test_slug_with_composer_and_tune() {
        let entry = Entry::new("Ave Verum Corpus").with_composer("W. A. Mozart");
        assert_eq!(slug(&entry), "ave-verum-corpus-w-a-mozart");

        let entry = Entry::new("Holy God, We Praise Thy Name")
            .with_composer("Traditional")
            .with_tune("Grosser Gott");
        assert_eq!(
            slug(&entry),
            "holy-god-we-praise-thy-name-traditional-grosser-gott"
        );
    }

    #[test]
    fn test_slug_collapses_whitespace() {
        let entry = Entry::new("  Lord,  Have   Mercy  ").with_tune(" - ");
        assert_eq!(slug(&entry), "lord-have-mercy");
    }

    #[test]
    fn test_slug_drops_non_ascii() {
        assert_eq!(slug(&Entry::new("Adoro Te Devote · Thomas")), "adoro-te-devote-thomas");
    }

    #[test]
    fn test_resolve() {
        let urls = sample_urls();
        let entry = Entry::new("All Creatures of Our God and King").with_tune("Lasst Uns Erfreuen");
        assert!(resolve(&entry, &urls).is_some());
        assert!(resolve(&Entry::new("Unlisted"), &urls).is_none());
    }

    #[test]
    fn test_resolve_ignores_case() {
        let urls = sample_urls();
        let entry = Entry::new("KYRIE").with_composer("missa DE angelis");
        assert_eq!(
            resolve(&entry, &urls),
            urls.get("kyrie-missa-de-angelis")
        );
    }

    proptest! {
        #[test]
        fn slug_is_case_insensitive(name in "[A-Za-z ,.'()-]{0,40}", tune in proptest::option::of("[A-Za-z ]{1,20}")) {
            let mut lower = Entry::new(name.to_lowercase());
            let mut upper = Entry::new(name.to_uppercase());
            if let Some(tune) = &tune {
                lower = lower.with_tune(tune.to_lowercase());
                upper = upper.with_tune(tune.to_uppercase());
            }
            prop_assert_eq!(slug(&lower), slug(&upper));
        }

        #[test]
        fn slug_is_url_safe(name in "\\PC{0,40}") {
            let s = slug(&Entry::new(name));
            prop_assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!s.starts_with('-') && !s.ends_with('-'));
            prop_assert!(!s.contains("--"));
        }
    }
}
