//! Extraction report and its output formats.
//!
//! [`TitleReport`] is the complete result of running the pipeline over one
//! document: the normalized title plus what it was chosen from.

use std::str::FromStr;

use serde::Serialize;

use crate::{Result, TitulusError};

/// Output format options for a [`TitleReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bare title.
    Text,
    /// JSON object.
    Json,
    /// TOML table.
    Toml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(format!("Invalid format: {}. Valid options: text, json, toml", s)),
        }
    }
}

/// The result of extracting a title from one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TitleReport {
    /// Normalized title, absent when no candidate survived.
    pub title: Option<String>,

    /// Text of the chosen block before formatting.
    pub raw_title: Option<String>,

    /// Font identity of the chosen block.
    pub font_id: Option<String>,

    /// Font size of the chosen block.
    pub font_size: Option<f64>,

    /// Number of blocks built, one per font with usable lines.
    pub candidates: usize,

    /// Number of blocks left after filtering.
    pub survivors: usize,

    /// Document the layout came from, if known.
    pub source: Option<String>,
}

impl TitleReport {
    /// Converts the report to the specified format.
    pub fn to_format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json().map(|v| v.to_string()),
            OutputFormat::Toml => Ok(self.to_toml()),
        }
    }

    /// The title, or an empty string.
    pub fn to_text(&self) -> String {
        self.title.clone().unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(TitulusError::from)
    }

    /// Renders the report as a TOML table; absent fields are omitted.
    pub fn to_toml(&self) -> String {
        let mut toml = String::new();

        if let Some(title) = &self.title {
            toml.push_str(&format!("title = {}\n", toml_escape_string(title)));
        }
        if let Some(raw_title) = &self.raw_title {
            toml.push_str(&format!("raw_title = {}\n", toml_escape_string(raw_title)));
        }
        if let Some(font_id) = &self.font_id {
            toml.push_str(&format!("font_id = {}\n", toml_escape_string(font_id)));
        }
        if let Some(font_size) = self.font_size {
            toml.push_str(&format!("font_size = {:.1}\n", font_size));
        }
        toml.push_str(&format!("candidates = {}\n", self.candidates));
        toml.push_str(&format!("survivors = {}\n", self.survivors));
        if let Some(source) = &self.source {
            toml.push_str(&format!("source = {}\n", toml_escape_string(source)));
        }

        toml
    }
}

/// Escape a string for TOML format
fn toml_escape_string(s: &str) -> String {
    let needs_escape = s.contains('"') || s.contains('\\') || s.contains('\n');
    if needs_escape {
        format!(
            "\"{}\"",
            s.replace('\\', "\\\\").replace('\"', "\\\"").replace('\n', "\\n")
        )
    } else {
        format!("\"{}\"", s)
    }
}

/// Make a title usable as a file name: `':'` becomes `" -"` and `'/'`
/// becomes `'-'`.
pub fn sanitize_filename(title: &str) -> String {
    title.replace(':', " -").replace('/', "-")
}
