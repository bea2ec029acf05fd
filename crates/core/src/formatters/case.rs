use crate::config::TitleConfig;
use crate::pipeline::Stage;

/// Titlecase every word: the first cased character after an uncased one is
/// uppercased, every other cased character is lowercased.
///
/// Word boundaries are any non-cased character, so `"don't"` becomes
/// `"Don'T"` and `"x-ray"` becomes `"X-Ray"`. Word starts use the titlecase
/// mapping where it differs from uppercase: `'ß'` becomes `"Ss"` and the
/// Latin digraphs take their titlecase form (`'ǆ'` becomes `'ǅ'`).
pub fn titlecase(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        if previous_cased {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut out, c);
        }
        previous_cased = is_cased(c);
    }
    out
}

/// English title case: small words such as "of" and "for" stay lowercase
/// unless they open the title.
pub fn smart_titlecase(text: &str) -> String {
    titlecase::titlecase(text)
}

fn push_titlecase(out: &mut String, c: char) {
    match c {
        'ß' => out.push_str("Ss"),
        '\u{01C4}'..='\u{01C6}' => out.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => out.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => out.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => out.push('\u{01F2}'),
        _ => out.extend(c.to_uppercase()),
    }
}

fn is_titlecase_digraph(c: char) -> bool {
    matches!(c, '\u{01C5}' | '\u{01C8}' | '\u{01CB}' | '\u{01F2}')
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || is_titlecase_digraph(c)
}

/// True when uppercase letters and whitespace make up at least `threshold`
/// of the characters.
pub fn is_mostly_upper_case(text: &str, threshold: f64) -> bool {
    let total = text.chars().count();
    if total == 0 {
        return false;
    }
    let upper = text.chars().filter(|c| c.is_uppercase() || c.is_whitespace()).count();
    upper as f64 / total as f64 >= threshold
}

/// True when a letter is followed by a case flip inside the window, as in
/// `"A FAult-tolerAnt token BAsed Algorithm"`.
pub fn is_irregular_case(text: &str, window: usize) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let window = window.max(3);
    for i in 0..chars.len().saturating_sub(2) {
        if !chars[i].is_alphabetic() {
            continue;
        }
        let end = (i + window - 1).min(chars.len() - 1);
        for j in i + 1..end {
            let (a, b) = (chars[j], chars[j + 1]);
            if (a.is_uppercase() && b.is_lowercase()) || (a.is_lowercase() && b.is_uppercase()) {
                return true;
            }
        }
    }
    false
}

/// Titlecases shouting titles.
pub struct UpperCase;

impl Stage<String> for UpperCase {
    fn name(&self) -> &'static str {
        "upper-case"
    }

    fn apply(&self, title: String, config: &TitleConfig) -> String {
        if is_mostly_upper_case(&title, config.upper_case_threshold) { titlecase(&title) } else { title }
    }
}

/// Titlecases titles with scrambled letter case.
pub struct IrregularCase;

impl Stage<String> for IrregularCase {
    fn name(&self) -> &'static str {
        "irregular-case"
    }

    fn apply(&self, title: String, config: &TitleConfig) -> String {
        if is_irregular_case(&title, config.case_window) { titlecase(&title) } else { title }
    }
}
