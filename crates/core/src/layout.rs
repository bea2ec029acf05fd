//! Positioned text of a document's first page.
//!
//! [`PageLayout`] is what a [`LayoutSource`](crate::source::LayoutSource)
//! produces: the page geometry, the declared fonts and every text fragment in
//! document order. [`TextBlock`] is the per-font aggregation the title
//! pipeline works on.

use serde::{Deserialize, Serialize};

/// A font declared on the first page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Opaque font identity referenced by fragments.
    pub id: String,
    /// Font size; the only ranking signal.
    pub size: f64,
}

impl FontSpec {
    pub fn new(id: impl Into<String>, size: f64) -> Self {
        Self { id: id.into(), size }
    }
}

/// One rendered run of text on the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFragment {
    pub font_id: String,
    pub top: i64,
    pub height: i64,
    pub width: i64,
    /// Stripped textual content, possibly empty.
    pub text: String,
}

impl TextFragment {
    pub fn new(font_id: impl Into<String>, top: i64, height: i64, width: i64, text: impl Into<String>) -> Self {
        Self { font_id: font_id.into(), top, height, width, text: text.into() }
    }
}

/// First-page layout description handed to the title pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page top in page coordinate units.
    pub top: i64,
    /// Page height in page coordinate units.
    pub height: i64,
    /// Declared fonts, in declaration order.
    #[serde(default)]
    pub fonts: Vec<FontSpec>,
    /// Text fragments, in document order.
    #[serde(default)]
    pub fragments: Vec<TextFragment>,
}

impl PageLayout {
    /// Creates an empty page with the given geometry.
    pub fn new(top: i64, height: i64) -> Self {
        Self { top, height, fonts: Vec::new(), fragments: Vec::new() }
    }

    /// Declares a font.
    pub fn with_font(mut self, id: impl Into<String>, size: f64) -> Self {
        self.fonts.push(FontSpec::new(id, size));
        self
    }

    /// Appends a fragment.
    pub fn with_fragment(mut self, fragment: TextFragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// Size of a declared font, if any.
    pub fn font_size(&self, font_id: &str) -> Option<f64> {
        self.fonts.iter().find(|font| font.id == font_id).map(|font| font.size)
    }

    /// Fragments rendered with `font_id`, in document order.
    pub fn fragments_for<'a>(&'a self, font_id: &'a str) -> impl Iterator<Item = &'a TextFragment> + 'a {
        self.fragments.iter().filter(move |fragment| fragment.font_id == font_id)
    }
}

/// A line accepted into a [`TextBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLine {
    pub top: i64,
    pub height: i64,
    pub width: i64,
    pub text: String,
}

impl From<&TextFragment> for TextLine {
    fn from(fragment: &TextFragment) -> Self {
        Self {
            top: fragment.top,
            height: fragment.height,
            width: fragment.width,
            text: fragment.text.trim().to_string(),
        }
    }
}

/// All first-page lines sharing one font identity: a single title candidate.
///
/// Lines are only ever removed after construction, never added, and
/// `block_top` keeps the value computed at construction time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub font_id: String,
    pub font_size: f64,
    pub page_top: i64,
    pub page_height: i64,
    /// Minimum `top` among the accepted lines.
    pub block_top: i64,
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    /// Line texts joined with single spaces.
    pub fn joined_text(&self) -> String {
        self.lines.iter().map(|line| line.text.as_str()).collect::<Vec<_>>().join(" ")
    }

    /// Character count of [`joined_text`](Self::joined_text).
    pub fn joined_len(&self) -> usize {
        self.joined_text().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
