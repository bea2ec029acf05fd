use crate::config::TitleConfig;
use crate::pipeline::Stage;

/// Expand the Latin typographic ligatures (U+FB00..U+FB06).
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{FB05}', '\u{FB06}'], "st")
}

/// Replace doubled typewriter quotes with the matching double-quote glyph.
pub fn normalize_quotes(text: &str) -> String {
    text.replace("\u{2018}\u{2018}", "\u{201C}")
        .replace("\u{2019}\u{2019}", "\u{201D}")
        .replace("``", "\u{201F}")
        .replace(",,", "\u{201E}")
}

/// Strip one trailing period, then one trailing asterisk.
pub fn strip_trailing_marks(text: &str) -> String {
    let text = text.strip_suffix('.').unwrap_or(text);
    let text = text.strip_suffix('*').unwrap_or(text);
    text.to_string()
}

pub struct Ligatures;

impl Stage<String> for Ligatures {
    fn name(&self) -> &'static str {
        "ligatures"
    }

    fn apply(&self, title: String, _config: &TitleConfig) -> String {
        expand_ligatures(&title)
    }
}

/// Drops footnote asterisks and sentence periods at the end of a title.
pub struct TrailingMarks;

impl Stage<String> for TrailingMarks {
    fn name(&self) -> &'static str {
        "trailing-marks"
    }

    fn apply(&self, title: String, _config: &TitleConfig) -> String {
        strip_trailing_marks(&title)
    }
}

pub struct Quotes;

impl Stage<String> for Quotes {
    fn name(&self) -> &'static str {
        "quotes"
    }

    fn apply(&self, title: String, _config: &TitleConfig) -> String {
        normalize_quotes(&title)
    }
}
