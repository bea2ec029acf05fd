use serde::Serialize;
use tracing::debug;

use crate::config::TitleConfig;
use crate::layout::TextBlock;

/// Phrases marking journal branding or separators rather than a title.
pub const DEFAULT_EXCLUDED_PHRASES: &[&str] = &["Open Access", "Global Journal", "____", "figshare"];

/// The block picked as title and the text taken from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub font_id: String,
    pub font_size: f64,
    /// All lines joined, or only the first line when `multiline` is off.
    pub text: String,
}

/// Pick the first block, in rank order, that reads like a title.
///
/// A candidate is skipped when its joined text is a single token (logos,
/// running-header artifacts) or contains an excluded phrase. `None` means no
/// candidate survived, which is a valid outcome.
pub fn choose_title(blocks: &[TextBlock], config: &TitleConfig) -> Option<Selection> {
    for block in blocks {
        let joined = block.joined_text();
        if !joined.contains(char::is_whitespace) {
            debug!(font_id = %block.font_id, "skipping single-token candidate");
            continue;
        }
        if let Some(phrase) = excluded_phrase(&joined, config) {
            debug!(font_id = %block.font_id, phrase, "skipping excluded candidate");
            continue;
        }

        let text = if config.multiline {
            joined
        } else {
            block.lines.first().map(|line| line.text.clone()).unwrap_or_default()
        };
        return Some(Selection { font_id: block.font_id.clone(), font_size: block.font_size, text });
    }
    None
}

fn excluded_phrase<'a>(text: &str, config: &'a TitleConfig) -> Option<&'a str> {
    config
        .excluded_phrases
        .iter()
        .map(String::as_str)
        .find(|phrase| !phrase.is_empty() && text.contains(phrase))
}
