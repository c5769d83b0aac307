//! Front matter extraction.
//!
//! Plans usually live in the YAML header of a Quarto or markdown document.

/// Return the YAML front matter of `text`, or `text` itself when it has none.
///
/// Front matter starts with a `---` line and ends at the next `---` or `...`
/// line. An unterminated block runs to the end of the input.
pub fn extract_front_matter(text: &str) -> &str {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let Some(first_break) = text.find('\n') else {
        return text;
    };
    if text[..first_break].trim_end() != "---" {
        return text;
    }

    let body = &text[first_break + 1..];
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return &body[..offset];
        }
        offset += line.len();
    }

    body
}
