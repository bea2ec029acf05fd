use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use titulus_core::{
    JsonLayoutFile, LayoutSource, OutputFormat, PageLayout, PdfToHtml, TitleConfig, TitleExtractor, TitleReport,
    XmlLayoutFile, analyze, parse_pdf_xml, read_stdin, sanitize_filename,
};
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How the input should be turned into a page layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Auto,
    Pdf,
    Xml,
    Json,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "pdf" => Ok(Self::Pdf),
            "xml" => Ok(Self::Xml),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid input format: {}. Valid options: auto, pdf, xml, json", s)),
        }
    }
}

impl InputFormat {
    /// Resolve `auto` from the input name; `-` is always XML.
    fn resolve(self, input: &str) -> Self {
        if self != Self::Auto {
            return self;
        }
        if input == "-" {
            return Self::Xml;
        }
        match Path::new(input).extension().and_then(|ext| ext.to_str()).map(str::to_lowercase) {
            Some(ext) if ext == "xml" => Self::Xml,
            Some(ext) if ext == "json" => Self::Json,
            _ => Self::Pdf,
        }
    }
}

/// Extract the title of a scholarly PDF from its first-page layout
#[derive(Parser, Debug)]
#[command(name = "titulus")]
#[command(author = "Titulus Contributors")]
#[command(version)]
#[command(about = "Extract document titles from PDF first-page layout", long_about = None)]
struct Args {
    /// PDF file, pdftohtml XML file, layout JSON file, or "-" for XML on stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Input format (auto, pdf, xml, json)
    #[arg(long, default_value = "auto", value_name = "FORMAT")]
    input_format: InputFormat,

    /// Output format (text, json, toml)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// pdftohtml program used to convert PDF input
    #[arg(long, default_value = "pdftohtml", value_name = "PROGRAM")]
    pdftohtml: PathBuf,

    /// Rename the input PDF after its title
    #[arg(long)]
    rename: bool,

    /// Blocks must start below this top coordinate
    #[arg(long, default_value = "70", value_name = "NUM")]
    top_margin: i64,

    /// Minimum length of a candidate block
    #[arg(long, default_value = "15", value_name = "NUM")]
    min_length: usize,

    /// Maximum length of a candidate block
    #[arg(long, default_value = "250", value_name = "NUM")]
    max_length: usize,

    /// Only return the first line of the chosen block
    #[arg(long)]
    first_line_only: bool,

    /// Apply English title-case rules to the extracted title
    #[arg(long)]
    smart_titlecase: bool,

    /// Additional phrase that disqualifies a candidate (repeatable)
    #[arg(long, value_name = "PHRASE")]
    exclude: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> TitleConfig {
        self.exclude
            .iter()
            .fold(TitleConfig::builder(), |builder, phrase| builder.exclude(phrase.as_str()))
            .top_margin(self.top_margin)
            .min_length(self.min_length)
            .max_length(self.max_length)
            .multiline(!self.first_line_only)
            .smart_titlecase(self.smart_titlecase)
            .build()
    }
}

fn init_tracing(verbose: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("titulus_core=debug"),
        Err(_) => return,
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run_extraction(args: &Args, input_format: InputFormat, config: TitleConfig) -> anyhow::Result<TitleReport> {
    if args.input == "-" {
        config.validate()?;
        let xml = read_stdin().context("Failed to read from stdin")?;
        let layout = parse_pdf_xml(&xml).context("Failed to parse layout from stdin")?;
        return Ok(analyze(&layout, &config));
    }

    let program = args.pdftohtml.clone();
    let source = move |path: &Path| -> titulus_core::Result<PageLayout> {
        match input_format {
            InputFormat::Xml => XmlLayoutFile.first_page(path),
            InputFormat::Json => JsonLayoutFile.first_page(path),
            InputFormat::Pdf | InputFormat::Auto => PdfToHtml::new(program.as_path()).first_page(path),
        }
    };

    let extractor = TitleExtractor::new(source, config);
    extractor
        .extract(Path::new(&args.input))
        .with_context(|| format!("Failed to extract title from {}", args.input))
}

/// Rename the input PDF to `<title>.pdf` beside it.
fn rename_input(input: &Path, title: &str) -> anyhow::Result<PathBuf> {
    let file_name = format!("{}.pdf", sanitize_filename(title));
    let target = input.with_file_name(file_name);

    if target.exists() && target != input {
        bail!("Refusing to overwrite {}", target.display());
    }

    fs::rename(input, &target)
        .with_context(|| format!("Failed to rename {} to {}", input.display(), target.display()))?;
    Ok(target)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let input_format = args.input_format.resolve(&args.input);
    if args.rename && (args.input == "-" || input_format != InputFormat::Pdf) {
        bail!("--rename only applies to PDF input files");
    }

    if args.verbose {
        let origin = if args.input == "-" { "stdin".to_string() } else { args.input.clone() };
        echo::print_step(
            1,
            3,
            &format!("Reading {:?} layout from {}", input_format, origin.bright_white()),
        );
    }

    let config = args.config();
    let report = run_extraction(&args, input_format, config)?;

    if args.verbose {
        echo::print_step(2, 3, "Selecting title");
        echo::print_report_details(&report);
    }

    if args.format == OutputFormat::Text && report.title.is_none() {
        bail!("No title found");
    }

    let output = report.to_format(args.format).context("Failed to render report")?;

    if args.verbose {
        echo::print_step(3, 3, "Writing output");
        eprintln!("  {} {}", "Format:".dimmed(), format!("{:?}", args.format).bright_white());
        eprintln!();
    }

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", output))
                .with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => println!("{}", output),
    }

    if args.rename {
        match &report.title {
            Some(title) => {
                let target = rename_input(Path::new(&args.input), title)?;
                echo::print_success(&format!("Renamed to {}", target.display().bright_white()));
            }
            None => echo::print_warning("No title found; input left unchanged"),
        }
    }

    Ok(())
}
