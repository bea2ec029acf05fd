//! Title normalizers applied to the selected candidate text.
//!
//! Each formatter is a pure [`Stage`](crate::pipeline::Stage) over `String`; [`default_formatters`]
//! fixes the order they run in.

pub mod case;
pub mod glyphs;
pub mod spacing;

pub use case::{IrregularCase, UpperCase, is_irregular_case, is_mostly_upper_case, smart_titlecase, titlecase};
pub use glyphs::{Ligatures, Quotes, TrailingMarks, expand_ligatures, normalize_quotes, strip_trailing_marks};
pub use spacing::{
    CollapseWhitespace, LetterSpacing, LinebreakDash, collapse_whitespace, is_letter_spaced, join_linebreak_dash,
    unspace,
};

use crate::config::TitleConfig;
use crate::pipeline::{Stages, transduce};

/// The canonical formatter order.
pub fn default_formatters() -> Stages<String> {
    vec![
        Box::new(Ligatures),
        Box::new(UpperCase),
        Box::new(IrregularCase),
        Box::new(LetterSpacing),
        Box::new(CollapseWhitespace),
        Box::new(LinebreakDash),
        Box::new(TrailingMarks),
        Box::new(Quotes),
    ]
}

/// Run the default formatter chain over a raw title.
pub fn format_title(raw: &str, config: &TitleConfig) -> String {
    transduce(&default_formatters(), raw.to_string(), config)
}
