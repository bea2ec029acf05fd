//! Title extraction from a first-page layout.
//!
//! The flow is: rank fonts by size, build one block per font, narrow the
//! blocks with [`default_filters`], pick a block with [`choose_title`] and
//! normalize its text with [`default_formatters`].
//!
//! # Example
//!
//! ```rust
//! use titulus_core::{PageLayout, TextFragment, TitleConfig, extract_title};
//!
//! let layout = PageLayout::new(0, 1000)
//!     .with_font("A", 24.0)
//!     .with_fragment(TextFragment::new("A", 100, 24, 300, "A STUDY OF DISTRIBUTED CONSENSUS PROTOCOLS"));
//!
//! let title = extract_title(&layout, &TitleConfig::default());
//! assert_eq!(title.as_deref(), Some("A Study Of Distributed Consensus Protocols"));
//! ```

use std::path::Path;

use tracing::{debug, info};

use crate::blocks::build_blocks;
use crate::config::TitleConfig;
use crate::filters::default_filters;
use crate::fonts::rank_fonts;
use crate::formatters::{default_formatters, smart_titlecase};
use crate::layout::PageLayout;
use crate::pipeline::transduce;
use crate::report::TitleReport;
use crate::select::choose_title;
use crate::source::LayoutSource;
use crate::Result;

/// Extract the normalized title of a page, if any candidate survives.
pub fn extract_title(layout: &PageLayout, config: &TitleConfig) -> Option<String> {
    analyze(layout, config).title
}

/// Run the whole pipeline and report what happened along the way.
pub fn analyze(layout: &PageLayout, config: &TitleConfig) -> TitleReport {
    let ranked = rank_fonts(&layout.fonts);
    let blocks = build_blocks(layout, &ranked);
    let candidates = blocks.len();
    debug!(fonts = ranked.len(), candidates, "built candidate blocks");

    let survivors = transduce(&default_filters(), blocks, config);
    let mut report = TitleReport { candidates, survivors: survivors.len(), ..Default::default() };

    let Some(selection) = choose_title(&survivors, config) else {
        debug!("no candidate block survived selection");
        return report;
    };

    let mut title = transduce(&default_formatters(), selection.text.clone(), config);
    if config.smart_titlecase {
        title = smart_titlecase(&title);
    }
    info!(font_id = %selection.font_id, title = %title, "selected title");

    report.font_id = Some(selection.font_id);
    report.font_size = Some(selection.font_size);
    report.raw_title = Some(selection.text);
    report.title = (!title.is_empty()).then_some(title);
    report
}

/// Extracts titles from documents through an injected [`LayoutSource`].
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use titulus_core::{PageLayout, Result, TextFragment, TitleConfig, TitleExtractor};
///
/// let source = |_: &Path| -> Result<PageLayout> {
///     Ok(PageLayout::new(0, 1000)
///         .with_font("1", 20.0)
///         .with_fragment(TextFragment::new("1", 120, 20, 400, "Graph Neural Networks Revisited")))
/// };
/// let extractor = TitleExtractor::new(source, TitleConfig::default());
/// let report = extractor.extract(Path::new("paper.pdf")).unwrap();
/// assert_eq!(report.title.as_deref(), Some("Graph Neural Networks Revisited"));
/// ```
pub struct TitleExtractor<S> {
    source: S,
    config: TitleConfig,
}

impl<S: LayoutSource> TitleExtractor<S> {
    pub fn new(source: S, config: TitleConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &TitleConfig {
        &self.config
    }

    /// Convert the document and extract its title.
    ///
    /// Conversion failures are returned as errors; an absent title is a
    /// successful report with `title: None`.
    pub fn extract(&self, path: &Path) -> Result<TitleReport> {
        self.config.validate()?;
        let layout = self.source.first_page(path)?;
        let mut report = analyze(&layout, &self.config);
        report.source = Some(path.display().to_string());
        Ok(report)
    }
}
