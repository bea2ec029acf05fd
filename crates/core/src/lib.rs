pub mod blocks;
pub mod config;
pub mod error;
pub mod extract;
pub mod filters;
pub mod fonts;
pub mod formatters;
pub mod layout;
pub mod pipeline;
pub mod report;
pub mod select;
pub mod source;
#[cfg(feature = "pdftohtml")]
pub mod xml;

pub use blocks::{build_block, build_blocks};
pub use config::{TitleConfig, TitleConfigBuilder};
pub use error::{Result, TitulusError};
pub use extract::{TitleExtractor, analyze, extract_title};
pub use filters::default_filters;
pub use fonts::rank_fonts;
pub use formatters::{default_formatters, format_title, smart_titlecase, titlecase};
pub use layout::{FontSpec, PageLayout, TextBlock, TextFragment, TextLine};
pub use pipeline::{Stage, Stages, Vacant, transduce};
pub use report::{OutputFormat, TitleReport, sanitize_filename};
pub use select::{DEFAULT_EXCLUDED_PHRASES, Selection, choose_title};
pub use source::{JsonLayoutFile, LayoutSource, parse_layout_json, read_file, read_stdin};
#[cfg(feature = "pdftohtml")]
pub use source::{PdfToHtml, XmlLayoutFile};
#[cfg(feature = "pdftohtml")]
pub use xml::parse_pdf_xml;
