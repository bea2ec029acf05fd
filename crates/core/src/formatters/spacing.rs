use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::TitleConfig;
use crate::pipeline::Stage;

static CAPITAL_AFTER_NON_HYPHEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^-])([A-Z])").unwrap());

/// True when whitespace makes up at least `threshold` of the characters,
/// as in `"A H i gh - L e ve l F r am e w or k"`.
pub fn is_letter_spaced(text: &str, threshold: f64) -> bool {
    let total = text.chars().count();
    if total == 0 {
        return false;
    }
    let spaces = text.chars().filter(|c| c.is_whitespace()).count();
    spaces as f64 / total as f64 >= threshold
}

/// Remove all whitespace, then put a space before every capital that does
/// not follow a hyphen: `"A H i gh - L e ve l"` becomes `"A High-Level"`.
pub fn unspace(text: &str) -> String {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    CAPITAL_AFTER_NON_HYPHEN.replace_all(&compact, "$1 $2").into_owned()
}

/// Collapse whitespace runs and drop spaces in front of colons.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").replace(" :", ":")
}

/// Join words split by a line-wrap hyphen: `"self- supervised"` becomes
/// `"self-supervised"`. The hyphen must follow a non-space character and the
/// space must be followed by more text.
pub fn join_linebreak_dash(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let wrapped = c == ' '
            && i >= 2
            && i + 1 < chars.len()
            && chars[i - 1] == '-'
            && !chars[i - 2].is_whitespace()
            && chars[i + 1] != '\n';
        if !wrapped {
            out.push(c);
        }
    }
    out
}

/// Compacts artificially letter-spaced titles.
pub struct LetterSpacing;

impl Stage<String> for LetterSpacing {
    fn name(&self) -> &'static str {
        "letter-spacing"
    }

    fn apply(&self, title: String, config: &TitleConfig) -> String {
        if is_letter_spaced(&title, config.letter_spacing_threshold) { unspace(&title) } else { title }
    }
}

pub struct CollapseWhitespace;

impl Stage<String> for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse-whitespace"
    }

    fn apply(&self, title: String, _config: &TitleConfig) -> String {
        collapse_whitespace(&title)
    }
}

pub struct LinebreakDash;

impl Stage<String> for LinebreakDash {
    fn name(&self) -> &'static str {
        "linebreak-dash"
    }

    fn apply(&self, title: String, _config: &TitleConfig) -> String {
        join_linebreak_dash(&title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_letter_spaced_detection() {
        assert!(is_letter_spaced("A  H i gh - L e ve l  Fr am e w or k", 0.2));
        assert!(!is_letter_spaced("A High-Level Framework", 0.2));
        assert!(!is_letter_spaced("", 0.2));
    }

    #[rstest]
    #[case("A  H i gh - L e ve l  Fr am e w or k", "A High-Level Framework")]
    #[case("T h e  W eb", "The Web")]
    #[case("ABC", "A BC")]
    fn test_unspace(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(unspace(input), expected);
    }

    #[rstest]
    #[case("Deep   Learning\tfor  Proteins", "Deep Learning for Proteins")]
    #[case("Consensus : a survey", "Consensus: a survey")]
    #[case("  padded  ", "padded")]
    fn test_collapse_whitespace(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(collapse_whitespace(input), expected);
    }

    #[rstest]
    #[case("Robust self- supervised learning", "Robust self-supervised learning")]
    #[case("self- supervised and semi- supervised", "self-supervised and semi-supervised")]
    #[case("Theory - Practice", "Theory - Practice")]
    #[case("ends with a dash- ", "ends with a dash- ")]
    fn test_join_linebreak_dash(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(join_linebreak_dash(input), expected);
    }

    #[test]
    fn test_letter_spacing_stage_threshold_from_config() {
        let strict = TitleConfig::builder().letter_spacing_threshold(0.9).build();
        let title = "T h e  W eb".to_string();
        assert_eq!(LetterSpacing.apply(title.clone(), &strict), title);
        assert_eq!(LetterSpacing.apply(title, &TitleConfig::default()), "The Web");
    }
}
