//! Block filters run between block construction and title selection.
//!
//! Each filter removes whole blocks or lines inside a block and never
//! reorders anything, so the size ranking of the block list survives every
//! stage. Order matters: later filters see already narrowed blocks.

use crate::config::TitleConfig;
use crate::layout::TextBlock;
use crate::pipeline::{Stage, Stages};

/// The canonical filter order.
pub fn default_filters() -> Stages<Vec<TextBlock>> {
    vec![
        Box::new(DropEmpty),
        Box::new(UpperHalf),
        Box::new(TopMargin),
        Box::new(VerticalText),
        Box::new(TooShort),
        Box::new(TooLong),
        Box::new(UnrelatedLines),
    ]
}

/// Drops blocks without lines.
pub struct DropEmpty;

impl Stage<Vec<TextBlock>> for DropEmpty {
    fn name(&self) -> &'static str {
        "drop-empty"
    }

    fn apply(&self, mut blocks: Vec<TextBlock>, _config: &TitleConfig) -> Vec<TextBlock> {
        blocks.retain(|block| !block.is_empty());
        blocks
    }
}

/// Keeps blocks starting in the upper half of the page.
pub struct UpperHalf;

impl Stage<Vec<TextBlock>> for UpperHalf {
    fn name(&self) -> &'static str {
        "upper-half"
    }

    fn apply(&self, mut blocks: Vec<TextBlock>, _config: &TitleConfig) -> Vec<TextBlock> {
        // blockTop - pageTop < pageHeight / 2, kept in integers
        blocks.retain(|block| {
            2 * (i128::from(block.block_top) - i128::from(block.page_top)) < i128::from(block.page_height)
        });
        blocks
    }
}

/// Keeps blocks starting below the configured header margin.
pub struct TopMargin;

impl Stage<Vec<TextBlock>> for TopMargin {
    fn name(&self) -> &'static str {
        "top-margin"
    }

    fn apply(&self, mut blocks: Vec<TextBlock>, config: &TitleConfig) -> Vec<TextBlock> {
        blocks.retain(|block| block.block_top > config.top_margin);
        blocks
    }
}

/// Drops zero-width lines, which come from rotated or vertical text.
pub struct VerticalText;

impl Stage<Vec<TextBlock>> for VerticalText {
    fn name(&self) -> &'static str {
        "vertical-text"
    }

    fn apply(&self, blocks: Vec<TextBlock>, _config: &TitleConfig) -> Vec<TextBlock> {
        retain_lines(blocks, |block| block.lines.retain(|line| line.width > 0))
    }
}

/// Drops blocks whose joined text is shorter than `min_length`.
pub struct TooShort;

impl Stage<Vec<TextBlock>> for TooShort {
    fn name(&self) -> &'static str {
        "too-short"
    }

    fn apply(&self, mut blocks: Vec<TextBlock>, config: &TitleConfig) -> Vec<TextBlock> {
        blocks.retain(|block| block.joined_len() >= config.min_length);
        blocks
    }
}

/// Drops blocks whose joined text is longer than `max_length`.
pub struct TooLong;

impl Stage<Vec<TextBlock>> for TooLong {
    fn name(&self) -> &'static str {
        "too-long"
    }

    fn apply(&self, mut blocks: Vec<TextBlock>, config: &TitleConfig) -> Vec<TextBlock> {
        blocks.retain(|block| block.joined_len() <= config.max_length);
        blocks
    }
}

/// Truncates a block at the first line that does not continue the previous one.
///
/// The first line is always kept. A following line continues the block when
/// it starts less than half its own height below where the previous kept
/// line ended.
pub struct UnrelatedLines;

impl Stage<Vec<TextBlock>> for UnrelatedLines {
    fn name(&self) -> &'static str {
        "unrelated-lines"
    }

    fn apply(&self, blocks: Vec<TextBlock>, _config: &TitleConfig) -> Vec<TextBlock> {
        retain_lines(blocks, |block| {
            let Some(first) = block.lines.first() else {
                return;
            };
            let mut next_top = i128::from(first.top) + i128::from(first.height);
            let mut keep = 1;
            for line in &block.lines[1..] {
                let (top, height) = (i128::from(line.top), i128::from(line.height));
                // top < nextTop + height / 2, kept in integers
                if 2 * top >= 2 * next_top + height {
                    break;
                }
                next_top = top + height;
                keep += 1;
            }
            block.lines.truncate(keep);
        })
    }
}

fn retain_lines(blocks: Vec<TextBlock>, mut prune: impl FnMut(&mut TextBlock)) -> Vec<TextBlock> {
    blocks
        .into_iter()
        .filter_map(|mut block| {
            prune(&mut block);
            (!block.is_empty()).then_some(block)
        })
        .collect()
}
