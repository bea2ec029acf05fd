//! Per-font aggregation of first-page fragments into title candidates.

use tracing::trace;

use crate::layout::{PageLayout, TextBlock, TextLine};

/// Build the block for one font identity.
///
/// Fragments are scanned in document order. Empty texts are skipped, and so
/// is any fragment positioned above the last accepted one: only downward
/// progressing lines are kept (equal tops are accepted). Returns `None` when
/// no line was accepted or the block would start at the very page top.
pub fn build_block(layout: &PageLayout, font_id: &str) -> Option<TextBlock> {
    let mut lines: Vec<TextLine> = Vec::new();
    let mut running_top = layout.top;

    for fragment in layout.fragments_for(font_id) {
        let line = TextLine::from(fragment);
        if line.text.is_empty() {
            continue;
        }
        if line.top < running_top {
            trace!(font_id, top = line.top, running_top, "skipping upward fragment");
            continue;
        }
        running_top = line.top;
        lines.push(line);
    }

    let block_top = lines.iter().map(|line| line.top).min()?;
    if block_top <= layout.top {
        return None;
    }

    Some(TextBlock {
        font_id: font_id.to_string(),
        font_size: layout.font_size(font_id).unwrap_or_default(),
        page_top: layout.top,
        page_height: layout.height,
        block_top,
        lines,
    })
}

/// Build one block per ranked font identity, keeping the ranking order.
pub fn build_blocks(layout: &PageLayout, ranked_fonts: &[String]) -> Vec<TextBlock> {
    ranked_fonts.iter().filter_map(|font_id| build_block(layout, font_id)).collect()
}
