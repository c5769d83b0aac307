//! Text casing helpers.

/// Words kept lowercase inside a headline.
const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "of", "on", "or", "the",
    "to", "v", "v.", "via", "vs", "vs.",
];

/// Characters that end a subphrase; the next word is capitalised.
const SUBPHRASE_END: &[char] = &[':', '.', ';', '?', '!'];

/// Headline-style title case.
///
/// Small words stay lowercase unless they open or close the title or follow
/// a colon or sentence end. Words with inner capitals or inner dots are kept
/// as written, and hyphenated words are cased per segment. A title written
/// entirely in capitals is lowered before casing.
pub fn title_case(text: &str) -> String {
    let all_caps = is_all_caps(text);
    let words: Vec<&str> = text.split(' ').collect();
    let first = words.iter().position(|w| !w.is_empty());
    let last = words.iter().rposition(|w| !w.is_empty());

    let mut out = Vec::with_capacity(words.len());
    let mut after_break = false;
    for (i, word) in words.iter().enumerate() {
        if word.is_empty() {
            out.push(String::new());
            continue;
        }
        let edge = Some(i) == first || Some(i) == last || after_break;
        out.push(case_word(word, all_caps, edge));
        after_break = word.ends_with(SUBPHRASE_END);
    }
    out.join(" ")
}

/// Capitalise the first letter of every alphabetic run and lowercase the rest.
///
/// `w. a. mozart` becomes `W. A. Mozart` and `o'brien` becomes `O'Brien`.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Hymnal abbreviation: the uppercase letters of `book`.
///
/// Markdown links (`[OCP](https://...)`) are passed through unchanged.
pub fn abbreviate_book(book: &str) -> String {
    if book.contains("](") {
        book.to_string()
    } else {
        book.chars().filter(char::is_ascii_uppercase).collect()
    }
}

fn is_all_caps(text: &str) -> bool {
    let mut letters = text.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_uppercase)
}

fn case_word(word: &str, all_caps: bool, edge: bool) -> String {
    // Split off surrounding punctuation such as quotes and brackets.
    let start = word
        .char_indices()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, _)| i);
    let Some(start) = start else {
        return word.to_string();
    };
    let end = word
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(word.len());

    let (prefix, rest) = word.split_at(start);
    let (core, suffix) = rest.split_at(end - start);

    let cased = if core.contains('.') || (!all_caps && has_inner_capital(core)) {
        core.to_string()
    } else {
        let core = if all_caps {
            core.to_lowercase()
        } else {
            core.to_string()
        };
        if !edge && is_small_word(&core, suffix) {
            core.to_lowercase()
        } else if core.contains('-') {
            core.split('-')
                .map(capitalize_first)
                .collect::<Vec<_>>()
                .join("-")
        } else {
            capitalize_name(&core)
        }
    };

    format!("{prefix}{cased}{suffix}")
}

fn is_small_word(core: &str, suffix: &str) -> bool {
    let lower = core.to_lowercase();
    if SMALL_WORDS.contains(&lower.as_str()) {
        return true;
    }
    // `v.` and `vs.` keep their dot in the suffix.
    suffix.starts_with('.') && SMALL_WORDS.contains(&format!("{lower}.").as_str())
}

fn has_inner_capital(core: &str) -> bool {
    core.chars().skip(1).any(char::is_uppercase)
}

/// Capitalise with the `O'Neil` and `McDonald` special cases.
fn capitalize_name(core: &str) -> String {
    let chars: Vec<char> = core.chars().collect();
    if chars.len() > 2
        && matches!(chars[0].to_ascii_lowercase(), 'd' | 'o' | 'l')
        && matches!(chars[1], '\'' | '\u{2019}')
    {
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[2..].iter().collect();
        let stem = tail.strip_suffix("'s").unwrap_or(&tail);
        if !stem.is_empty() && stem.chars().all(char::is_lowercase) {
            return format!("{}{}", capitalize_first(&head), capitalize_first(&tail));
        }
    }
    if chars.len() > 3 && chars[0].to_ascii_lowercase() == 'm' && chars[1] == 'c' {
        let tail: String = chars[2..].iter().collect();
        return format!("Mc{}", capitalize_first(&tail));
    }
    capitalize_first(core)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
