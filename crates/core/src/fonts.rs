use crate::layout::FontSpec;

/// Rank font identities by size, largest first.
///
/// The sort is stable, so fonts of equal size keep their declaration order.
/// Titles are assumed to use the largest font on the page.
pub fn rank_fonts(fonts: &[FontSpec]) -> Vec<String> {
    let mut ranked: Vec<&FontSpec> = fonts.iter().collect();
    ranked.sort_by(|a, b| b.size.total_cmp(&a.size));
    ranked.into_iter().map(|font| font.id.clone()).collect()
}
