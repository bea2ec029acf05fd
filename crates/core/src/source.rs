//! Sources of first-page layout data.
//!
//! The title pipeline never reads documents itself. A [`LayoutSource`] turns
//! a path into a [`PageLayout`]; [`PdfToHtml`] shells out to poppler's
//! `pdftohtml`, the file sources read layouts converted ahead of time, and
//! any `Fn(&Path) -> Result<PageLayout>` closure can stand in for tests.

use std::fs;
use std::path::Path;
#[cfg(feature = "pdftohtml")]
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
#[cfg(feature = "pdftohtml")]
use tracing::debug;
use tracing::warn;

use crate::layout::{FontSpec, PageLayout, TextFragment};
use crate::{Result, TitulusError};

/// Converts a document into the layout of its first page.
pub trait LayoutSource {
    fn first_page(&self, path: &Path) -> Result<PageLayout>;
}

impl<F> LayoutSource for F
where
    F: Fn(&Path) -> Result<PageLayout>,
{
    fn first_page(&self, path: &Path) -> Result<PageLayout> {
        self(path)
    }
}

/// Runs `pdftohtml -xml` on page one of a PDF.
#[cfg(feature = "pdftohtml")]
#[derive(Debug, Clone)]
pub struct PdfToHtml {
    /// Program to invoke (default: `pdftohtml` from `PATH`).
    pub program: PathBuf,
}

#[cfg(feature = "pdftohtml")]
impl Default for PdfToHtml {
    fn default() -> Self {
        Self { program: PathBuf::from("pdftohtml") }
    }
}

#[cfg(feature = "pdftohtml")]
impl PdfToHtml {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    /// Raw XML produced for page one.
    pub fn convert(&self, path: &Path) -> Result<String> {
        use std::process::{Command, Stdio};

        if !path.exists() {
            return Err(TitulusError::FileNotFound(path.to_path_buf()));
        }

        debug!(program = %self.program.display(), path = %path.display(), "running layout conversion");
        let output = Command::new(&self.program)
            .args(["-xml", "-f", "1", "-l", "1", "-i", "-q", "-nodrm", "-hidden", "-stdout"])
            .arg(path)
            .stderr(Stdio::null())
            .output()
            .map_err(|e| {
                TitulusError::ExtractionFailed(format!("could not run {}: {}", self.program.display(), e))
            })?;

        if !output.status.success() {
            return Err(TitulusError::ExtractionFailed(format!(
                "{} exited with {} for {}",
                self.program.display(),
                output.status,
                path.display()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(feature = "pdftohtml")]
impl LayoutSource for PdfToHtml {
    fn first_page(&self, path: &Path) -> Result<PageLayout> {
        crate::xml::parse_pdf_xml(&self.convert(path)?)
    }
}

/// Reads a document already converted with `pdftohtml -xml`.
#[cfg(feature = "pdftohtml")]
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlLayoutFile;

#[cfg(feature = "pdftohtml")]
impl LayoutSource for XmlLayoutFile {
    fn first_page(&self, path: &Path) -> Result<PageLayout> {
        crate::xml::parse_pdf_xml(&read_file(path)?)
    }
}

/// Reads a serialized [`PageLayout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLayoutFile;

impl LayoutSource for JsonLayoutFile {
    fn first_page(&self, path: &Path) -> Result<PageLayout> {
        parse_layout_json(&read_file(path)?)
    }
}

#[derive(Deserialize)]
struct RawLayout {
    top: Option<Value>,
    height: Option<Value>,
    #[serde(default)]
    fonts: Vec<RawFont>,
    #[serde(default)]
    fragments: Vec<RawFragment>,
}

#[derive(Deserialize)]
struct RawFont {
    id: Option<Value>,
    size: Option<Value>,
}

#[derive(Deserialize)]
struct RawFragment {
    font_id: Option<Value>,
    top: Option<Value>,
    height: Option<Value>,
    width: Option<Value>,
    text: Option<Value>,
}

/// Parse a serialized [`PageLayout`] with the same leniency as the XML reader.
///
/// Fonts and fragments with missing or non-numeric attributes are skipped; a
/// page without an integer `top`/`height` is [`TitulusError::MalformedPage`].
pub fn parse_layout_json(json: &str) -> Result<PageLayout> {
    let raw: RawLayout = serde_json::from_str(json)?;

    let mut layout = PageLayout::new(page_field(&raw.top, "top")?, page_field(&raw.height, "height")?);

    for font in raw.fonts {
        match (font.id.as_ref().and_then(json_id), font.size.as_ref().and_then(Value::as_f64)) {
            (Some(id), Some(size)) => layout.fonts.push(FontSpec::new(id, size)),
            _ => warn!(font = ?font.id, "skipping font without id or numeric size"),
        }
    }

    for fragment in raw.fragments {
        let text = fragment.text.as_ref().and_then(Value::as_str).unwrap_or_default().trim().to_string();
        let geometry = (
            fragment.font_id.as_ref().and_then(json_id),
            fragment.top.as_ref().and_then(Value::as_i64),
            fragment.height.as_ref().and_then(Value::as_i64),
            fragment.width.as_ref().and_then(Value::as_i64),
        );
        match geometry {
            (Some(font_id), Some(top), Some(height), Some(width)) => {
                layout.fragments.push(TextFragment::new(font_id, top, height, width, text));
            }
            _ => warn!(text = text.as_str(), "skipping fragment with malformed geometry"),
        }
    }

    Ok(layout)
}

fn json_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn page_field(value: &Option<Value>, name: &str) -> Result<i64> {
    value
        .as_ref()
        .and_then(Value::as_i64)
        .ok_or_else(|| TitulusError::MalformedPage { attribute: name.to_string() })
}

/// Reads a file to a string.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        Err(TitulusError::FileNotFound(path.to_path_buf()))
    } else {
        fs::read_to_string(path).map_err(TitulusError::from)
    }
}

/// Reads all of standard input.
pub fn read_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TextFragment;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_closure_source() {
        let source = |_: &Path| -> Result<PageLayout> { Ok(PageLayout::new(0, 500).with_font("f", 12.0)) };
        let layout = source.first_page(Path::new("ignored.pdf")).unwrap();
        assert_eq!(layout.height, 500);
    }

    #[test]
    fn test_json_layout_file() {
        let layout = PageLayout::new(0, 1000)
            .with_font("1", 20.0)
            .with_fragment(TextFragment::new("1", 100, 20, 300, "Some Title Here"));
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&layout).unwrap()).unwrap();

        assert_eq!(JsonLayoutFile.first_page(file.path()).unwrap(), layout);
    }

    #[test]
    fn test_json_layout_file_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(JsonLayoutFile.first_page(file.path()), Err(TitulusError::JsonError(_))));
    }

    #[test]
    fn test_json_fragment_with_bad_geometry_is_skipped() {
        let json = r#"{
            "top": 0,
            "height": 1000,
            "fonts": [{"id": "1", "size": 20.0}, {"id": "2"}],
            "fragments": [
                {"font_id": "1", "top": 100, "height": 20, "text": "No Width Here"},
                {"font_id": "1", "top": 120, "height": 20, "width": "wide", "text": "Bad Width"},
                {"font_id": "1", "top": 140, "height": 20, "width": 300, "text": "  Kept Fragment  "}
            ]
        }"#;
        let layout = parse_layout_json(json).unwrap();
        assert_eq!(layout.fonts, vec![FontSpec::new("1", 20.0)]);
        assert_eq!(layout.fragments, vec![TextFragment::new("1", 140, 20, 300, "Kept Fragment")]);
    }

    #[test]
    fn test_json_missing_page_attribute() {
        let err = parse_layout_json(r#"{"height": 1000}"#).unwrap_err();
        assert!(matches!(err, TitulusError::MalformedPage { ref attribute } if attribute == "top"));

        let err = parse_layout_json(r#"{"top": 0, "height": 12.5}"#).unwrap_err();
        assert!(matches!(err, TitulusError::MalformedPage { ref attribute } if attribute == "height"));
    }

    #[test]
    fn test_json_numeric_font_ids() {
        let json = r#"{"top": 0, "height": 800, "fonts": [{"id": 3, "size": 14}],
            "fragments": [{"font_id": 3, "top": 90, "height": 14, "width": 200, "text": "Numeric Ids"}]}"#;
        let layout = parse_layout_json(json).unwrap();
        assert_eq!(layout.font_size("3"), Some(14.0));
        assert_eq!(layout.fragments[0].font_id, "3");
    }

    #[test]
    fn test_read_file_not_found() {
        let result = read_file(Path::new("/nonexistent/path/layout.xml"));
        assert!(matches!(result, Err(TitulusError::FileNotFound(_))));
    }

    #[cfg(feature = "pdftohtml")]
    #[test]
    fn test_pdftohtml_missing_input() {
        let result = PdfToHtml::default().first_page(Path::new("/nonexistent/paper.pdf"));
        assert!(matches!(result, Err(TitulusError::FileNotFound(_))));
    }

    #[cfg(feature = "pdftohtml")]
    #[test]
    fn test_pdftohtml_missing_program() {
        let file = NamedTempFile::new().unwrap();
        let converter = PdfToHtml::new("/nonexistent/bin/pdftohtml");
        assert!(matches!(converter.first_page(file.path()), Err(TitulusError::ExtractionFailed(_))));
    }

    #[cfg(feature = "pdftohtml")]
    #[test]
    fn test_xml_layout_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"<pdf2xml><page number="1" top="0" height="1000"><fontspec id="0" size="18"/></page></pdf2xml>"#
        )
        .unwrap();
        let layout = XmlLayoutFile.first_page(file.path()).unwrap();
        assert_eq!(layout.fonts.len(), 1);
    }
}
