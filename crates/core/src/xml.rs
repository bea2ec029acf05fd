//! Reader for the `pdftohtml -xml` layout description.
//!
//! Only page one is read. Fragments and font declarations with unusable
//! attributes are skipped; a page without a usable `top`/`height` is an error.

use once_cell::sync::Lazy;
use regex::Regex;
use sxd_document::dom::{Document, Element};
use sxd_document::parser;
use sxd_xpath::{Value, evaluate_xpath};
use tracing::{debug, warn};

use crate::layout::{FontSpec, PageLayout, TextFragment};
use crate::{Result, TitulusError};

static DOCTYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!DOCTYPE[^>]*>").unwrap());

const FIRST_PAGE: &str = "//page[@number='1']";
const FONT_SPECS: &str = "//page[@number='1']/fontspec[@id][@size]";
const TEXTS: &str = "//page[@number='1']/text[@font]";

/// Parse converter output into the first-page layout.
pub fn parse_pdf_xml(xml: &str) -> Result<PageLayout> {
    let cleaned = remove_control_chars(xml);
    let cleaned = DOCTYPE.replace(&cleaned, "");

    let package =
        parser::parse(&cleaned).map_err(|e| TitulusError::XmlParseError(format!("Failed to parse layout: {}", e)))?;
    let document = package.as_document();

    let page = select_elements(&document, FIRST_PAGE)?
        .into_iter()
        .next()
        .map(|(element, _)| element)
        .ok_or_else(|| TitulusError::ExtractionFailed("document has no first page".to_string()))?;

    let mut layout = PageLayout::new(page_attribute(page, "top")?, page_attribute(page, "height")?);

    for (element, _) in select_elements(&document, FONT_SPECS)? {
        let id = element.attribute_value("id").unwrap_or_default();
        match element.attribute_value("size").and_then(|size| size.trim().parse::<f64>().ok()) {
            Some(size) => layout.fonts.push(FontSpec::new(id, size)),
            None => warn!(font_id = id, "skipping fontspec without numeric size"),
        }
    }

    for (element, text) in select_elements(&document, TEXTS)? {
        let font_id = element.attribute_value("font").unwrap_or_default();
        let geometry = (int_attribute(element, "top"), int_attribute(element, "height"), int_attribute(element, "width"));
        match geometry {
            (Some(top), Some(height), Some(width)) => {
                layout.fragments.push(TextFragment::new(font_id, top, height, width, text.trim()));
            }
            _ => warn!(font_id, text = text.trim(), "skipping fragment with malformed geometry"),
        }
    }

    debug!(fonts = layout.fonts.len(), fragments = layout.fragments.len(), "parsed first page");
    Ok(layout)
}

/// Drop ASCII control characters other than tab, LF and CR, which XML rejects.
pub fn remove_control_chars(text: &str) -> String {
    text.chars().filter(|&c| matches!(c, '\t' | '\n' | '\r') || c >= ' ').collect()
}

/// Elements matched by `xpath` in document order, with their string values.
fn select_elements<'d>(document: &'d Document<'d>, xpath: &str) -> Result<Vec<(Element<'d>, String)>> {
    let value = evaluate_xpath(document, xpath)
        .map_err(|e| TitulusError::XmlParseError(format!("XPath '{}' failed: {}", xpath, e)))?;

    match value {
        Value::Nodeset(nodeset) => Ok(nodeset
            .document_order()
            .into_iter()
            .filter_map(|node| node.element().map(|element| (element, node.string_value())))
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn int_attribute(element: Element<'_>, name: &str) -> Option<i64> {
    element.attribute_value(name)?.trim().parse().ok()
}

fn page_attribute(element: Element<'_>, name: &str) -> Result<i64> {
    int_attribute(element, name).ok_or_else(|| TitulusError::MalformedPage { attribute: name.to_string() })
}
