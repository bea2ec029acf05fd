//! Error types for Titulus operations.
//!
//! This module defines the main error type [`TitulusError`] which represents
//! everything that can go wrong while obtaining a first-page layout and
//! validating configuration. Note that an absent title is *not* an error:
//! the extraction APIs return `Option<String>` for that outcome.
//!
//! # Example
//!
//! ```rust
//! use titulus_core::{TitulusError, Result};
//!
//! fn require_layout(xml: &str) -> Result<&str> {
//!     if xml.is_empty() {
//!         return Err(TitulusError::ExtractionFailed("empty converter output".to_string()));
//!     }
//!     Ok(xml)
//! }
//! # assert!(require_layout("").is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for title extraction operations.
///
/// # Example
///
/// ```rust
/// use titulus_core::{TitulusError, TitleConfig, extract_title, PageLayout};
///
/// let layout = PageLayout::new(0, 1000);
/// match extract_title(&layout, &TitleConfig::default()) {
///     Some(title) => println!("Title: {}", title),
///     None => println!("No candidate survived"),
/// }
///
/// let err = TitulusError::MalformedPage { attribute: "height".to_string() };
/// assert!(err.to_string().contains("height"));
/// ```
#[derive(Error, Debug)]
pub enum TitulusError {
    /// The layout conversion collaborator could not produce first-page data.
    ///
    /// Returned when the converter program is missing, exits with a failure
    /// status, or the document has no first page. No further processing
    /// happens after this error.
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// The converter produced output that is not well-formed XML.
    #[error("Failed to parse layout XML: {0}")]
    XmlParseError(String),

    /// A page-level attribute is missing or not an integer.
    ///
    /// Threshold math needs the page top and height, so this is fatal,
    /// unlike malformed fragments which are skipped.
    #[error("Malformed page: attribute `{attribute}` is missing or not an integer")]
    MalformedPage { attribute: String },

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Layout JSON (de)serialization errors.
    #[error("Invalid layout JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for TitulusError.
///
/// This is a convenience alias for `std::result::Result<T, TitulusError>`.
pub type Result<T> = std::result::Result<T, TitulusError>;
