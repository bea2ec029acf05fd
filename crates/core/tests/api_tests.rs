//! Library API integration tests
use std::path::Path;

use titulus_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[cfg(feature = "pdftohtml")]
fn load_layout(name: &str) -> PageLayout {
    let xml = std::fs::read_to_string(get_fixture_path(name)).unwrap();
    parse_pdf_xml(&xml).expect("should parse")
}

#[cfg(feature = "pdftohtml")]
#[test]
fn test_extract_title_api() {
    let layout = load_layout("article.xml");
    let title = extract_title(&layout, &TitleConfig::default());
    assert_eq!(
        title.as_deref(),
        Some("A Fault-Tolerant Token Based Algorithm For Mobile Networks")
    );
}

#[cfg(feature = "pdftohtml")]
#[test]
fn test_analyze_reports_pipeline_counts() {
    let layout = load_layout("article.xml");
    let report = analyze(&layout, &TitleConfig::default());

    assert_eq!(report.candidates, 5);
    assert_eq!(report.survivors, 3);
    assert_eq!(report.font_id.as_deref(), Some("2"));
    assert_eq!(report.font_size, Some(20.0));
    assert_eq!(
        report.raw_title.as_deref(),
        Some("A FAult-tolerAnt token BAsed Algorithm for Mobile Networks")
    );
}

#[cfg(feature = "pdftohtml")]
#[test]
fn test_first_line_only() {
    let layout = load_layout("article.xml");
    let config = TitleConfig::builder().multiline(false).build();
    assert_eq!(
        extract_title(&layout, &config).as_deref(),
        Some("A Fault-Tolerant Token Based")
    );
}

#[cfg(feature = "pdftohtml")]
#[test]
fn test_custom_exclusions() {
    let layout = load_layout("article.xml");

    let config = TitleConfig::builder().excluded_phrases(Vec::new()).build();
    assert_eq!(
        extract_title(&layout, &config).as_deref(),
        Some("Open Access Research Journal")
    );

    let config = TitleConfig::builder().exclude("Mobile Networks").build();
    assert_eq!(
        extract_title(&layout, &config).as_deref(),
        Some("Jane Doe and John Roe University of Somewhere")
    );
}

#[cfg(feature = "pdftohtml")]
#[test]
fn test_letter_spaced_fixture() {
    let layout = load_layout("letter_spaced.xml");
    assert_eq!(
        extract_title(&layout, &TitleConfig::default()).as_deref(),
        Some("A High-Level Framework")
    );
}

#[cfg(feature = "pdftohtml")]
#[test]
fn test_page_without_text() {
    let layout = load_layout("empty_page.xml");
    let report = analyze(&layout, &TitleConfig::default());
    assert!(report.title.is_none());
    assert_eq!(report.candidates, 0);
}

#[cfg(feature = "pdftohtml")]
#[test]
fn test_malformed_page() {
    let xml = std::fs::read_to_string(get_fixture_path("malformed_page.xml")).unwrap();
    let err = parse_pdf_xml(&xml).unwrap_err();
    assert!(matches!(err, TitulusError::MalformedPage { ref attribute } if attribute == "height"));
}

#[cfg(feature = "pdftohtml")]
#[test]
fn test_extractor_with_xml_file() {
    let extractor = TitleExtractor::new(XmlLayoutFile, TitleConfig::default());
    let path = get_fixture_path("article.xml");
    let report = extractor.extract(Path::new(&path)).expect("should extract");

    assert_eq!(
        report.title.as_deref(),
        Some("A Fault-Tolerant Token Based Algorithm For Mobile Networks")
    );
    assert_eq!(report.source.as_deref(), Some(path.as_str()));
}

#[test]
fn test_extractor_with_json_file() {
    let extractor = TitleExtractor::new(JsonLayoutFile, TitleConfig::default());
    let report = extractor
        .extract(Path::new(&get_fixture_path("article.json")))
        .expect("should extract");

    assert_eq!(report.title.as_deref(), Some("A Study Of Distributed Consensus Protocols"));
    assert_eq!(report.font_id.as_deref(), Some("A"));
}

#[test]
fn test_extractor_missing_file() {
    let extractor = TitleExtractor::new(JsonLayoutFile, TitleConfig::default());
    let result = extractor.extract(Path::new(&get_fixture_path("missing.json")));
    assert!(matches!(result, Err(TitulusError::FileNotFound(_))));
}

#[test]
fn test_report_output_formats() {
    let extractor = TitleExtractor::new(JsonLayoutFile, TitleConfig::default());
    let report = extractor.extract(Path::new(&get_fixture_path("article.json"))).unwrap();

    let json = report.to_json().unwrap();
    assert!(json.is_object());
    assert_eq!(json["title"], "A Study Of Distributed Consensus Protocols");

    let toml = report.to_format(OutputFormat::Toml).unwrap();
    assert!(toml.contains("title = \"A Study Of Distributed Consensus Protocols\""));

    assert_eq!(report.to_text(), "A Study Of Distributed Consensus Protocols");
}

#[test]
fn test_config_builder() {
    let config = TitleConfig::builder().top_margin(0).min_length(5).max_length(40).build();
    assert!(config.validate().is_ok());

    let layout = PageLayout::new(0, 800)
        .with_font("t", 18.0)
        .with_fragment(TextFragment::new("t", 30, 18, 200, "Tiny Paper"));
    assert_eq!(extract_title(&layout, &config).as_deref(), Some("Tiny Paper"));
    assert!(extract_title(&layout, &TitleConfig::default()).is_none());
}

#[test]
fn test_custom_stage_chain() {
    let stages: Stages<String> = vec![
        Box::new(formatters::LetterSpacing),
        Box::new(formatters::CollapseWhitespace),
    ];
    let result = transduce(&stages, "S p a c e d  O u t".to_string(), &TitleConfig::default());
    assert_eq!(result, "Spaced Out");
}
