//! Entry formatting.
//!
//! Each mode is an ordered list of clauses. A clause fires only when the
//! entry carries the field it needs, so a missing field drops exactly its
//! own text.

use cantor_core::{Entry, Part, TableKind, UrlIndex};

use crate::slug::resolve;
use crate::text::{capitalize_words, title_case};

/// How an entry is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Hymns.
    Hymn,
    /// Choral anthems: hymn clauses, text left as written.
    Anthem,
    /// Psalms in a hymn list, set in italics.
    Psalm,
    /// Parts of a Mass setting.
    MassPart,
}

impl FormatMode {
    /// Mode for an entry of `part` in a table of `kind`.
    pub fn for_part(part: Part, kind: TableKind) -> Self {
        match kind {
            TableKind::Mass => Self::MassPart,
            TableKind::Hymns if part == Part::Anthems => Self::Anthem,
            TableKind::Hymns if part.is_psalm() => Self::Psalm,
            TableKind::Hymns => Self::Hymn,
        }
    }

    /// Clauses applied after the name, in order.
    pub fn clauses(self) -> &'static [Clause] {
        match self {
            Self::Hymn | Self::Anthem => &HYMN_CLAUSES,
            Self::Psalm => &PSALM_CLAUSES,
            Self::MassPart => &MASS_CLAUSES,
        }
    }

    fn base(self, entry: &Entry) -> String {
        match self {
            Self::Psalm => entry.name.clone(),
            Self::Hymn | Self::Anthem | Self::MassPart => title_case(&entry.name),
        }
    }

    fn finish(self, text: String) -> String {
        match self {
            Self::Psalm => format!("<i>{text}</i>").replace("Verses", "verses"),
            Self::Hymn => text.replace("Verses", "verses"),
            Self::Anthem => text,
            Self::MassPart => text.replace("Verses", "verses").replace("During", "during"),
        }
    }
}

/// Inputs shared by every clause.
#[derive(Debug, Clone, Copy)]
pub struct FormatContext<'a> {
    pub url: Option<&'a str>,
    pub index: Option<&'a str>,
}

/// One step of an entry's display text.
pub struct Clause {
    pub name: &'static str,
    applies: fn(&Entry, &FormatContext<'_>) -> bool,
    apply: fn(String, &Entry, &FormatContext<'_>) -> String,
}

impl Clause {
    /// Apply the clause if its field is present.
    pub fn run(&self, text: String, entry: &Entry, ctx: &FormatContext<'_>) -> String {
        if (self.applies)(entry, ctx) {
            (self.apply)(text, entry, ctx)
        } else {
            text
        }
    }
}

impl std::fmt::Debug for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clause").field("name", &self.name).finish()
    }
}

static HYMN_CLAUSES: [Clause; 6] = [
    Clause {
        name: "tune",
        applies: |e, _| e.tune.is_some(),
        apply: small_caps_tune,
    },
    LINK,
    YEAR,
    COMPOSER,
    VERSES,
    NOTE,
];

static PSALM_CLAUSES: [Clause; 5] = [
    Clause {
        name: "tune",
        applies: |e, _| e.tune.is_some(),
        apply: plain_small_caps_tune,
    },
    LINK,
    COMPOSER,
    VERSES,
    NOTE,
];

static MASS_CLAUSES: [Clause; 6] = [
    LINK,
    YEAR,
    Clause {
        name: "option",
        applies: |e, _| e.option.is_some(),
        apply: |text, e, _| format!("{text}, {}", e.option.as_deref().unwrap_or_default()),
    },
    Clause {
        name: "tune",
        applies: |e, _| e.tune.is_some(),
        apply: |text, e, _| format!("{text} (Tune: {})", e.tune.as_deref().unwrap_or_default()),
    },
    COMPOSER,
    NOTE,
];

const LINK: Clause = Clause {
    name: "link",
    applies: |_, ctx| ctx.url.is_some(),
    apply: link,
};

const YEAR: Clause = Clause {
    name: "year",
    applies: |e, _| e.year.is_some(),
    apply: |text, e, _| format!("<b>Year {}:</b> {text}", e.year.as_deref().unwrap_or_default()),
};

const COMPOSER: Clause = Clause {
    name: "composer",
    applies: |e, _| e.composer.is_some(),
    apply: |text, e, _| {
        let composer = capitalize_words(e.composer.as_deref().unwrap_or_default());
        format!("{text} ({composer})")
    },
};

const VERSES: Clause = Clause {
    name: "verses",
    applies: |e, _| e.verses.is_some(),
    apply: |text, e, _| {
        format!("{text} (<i>verses {}</i>)", e.verses.as_deref().unwrap_or_default())
    },
};

const NOTE: Clause = Clause {
    name: "note",
    applies: |e, _| e.note.is_some(),
    apply: |text, e, _| format!("{text} ({})", e.note.as_deref().unwrap_or_default()),
};

fn small_caps_tune(text: String, entry: &Entry, _: &FormatContext<'_>) -> String {
    let tune = entry.tune.as_deref().unwrap_or_default().to_lowercase();
    format!("{text} (<span style=\"font-variant:small-caps;\">{tune}</span>)")
}

fn plain_small_caps_tune(text: String, entry: &Entry, _: &FormatContext<'_>) -> String {
    let tune = entry.tune.as_deref().unwrap_or_default();
    format!("{text} (<span style=\"font-variant:small-caps;\">{tune}</span>)")
}

fn link(text: String, _: &Entry, ctx: &FormatContext<'_>) -> String {
    let url = ctx.url.unwrap_or_default();
    match ctx.index {
        Some(index) => format!("[{text}]({url})\\index[{index}]{{{text}}}"),
        None => format!("[{text}]({url})"),
    }
}

/// Formats entries against a URL index.
#[derive(Debug, Clone, Copy)]
pub struct EntryFormatter<'a> {
    urls: &'a UrlIndex,
    index: Option<&'a str>,
}

impl<'a> EntryFormatter<'a> {
    pub fn new(urls: &'a UrlIndex) -> Self {
        Self { urls, index: None }
    }

    /// Add `\index[name]{...}` after every linked title.
    pub fn with_index(mut self, index: Option<&'a str>) -> Self {
        self.index = index;
        self
    }

    /// Display text for `entry` in `mode`.
    pub fn format(&self, entry: &Entry, mode: FormatMode) -> String {
        let ctx = FormatContext {
            url: resolve(entry, self.urls),
            index: self.index,
        };
        let text = mode
            .clauses()
            .iter()
            .fold(mode.base(entry), |text, clause| clause.run(text, entry, &ctx));
        mode.finish(text)
    }
}
