use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("titulus")
        .version("1.0.0")
        .author("Titulus Contributors")
        .about("Extract document titles from PDF first-page layout")
        .arg(clap::arg!(<INPUT> "PDF file, pdftohtml XML file, layout JSON file, or '-' for XML on stdin"))
        .arg(
            clap::arg!(--input_format <FORMAT> "Input format (auto, pdf, xml, json)")
                .long("input-format")
                .value_name("FORMAT")
                .default_value("auto")
                .value_parser(["auto", "pdf", "xml", "json"]),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json, toml)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json", "toml"]),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--pdftohtml <PROGRAM> "pdftohtml program used to convert PDF input")
                .value_name("PROGRAM")
                .default_value("pdftohtml")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--rename "Rename the input PDF after its title"))
        .arg(
            clap::arg!(--top_margin <NUM> "Blocks must start below this top coordinate")
                .long("top-margin")
                .default_value("70"),
        )
        .arg(
            clap::arg!(--min_length <NUM> "Minimum length of a candidate block")
                .long("min-length")
                .default_value("15"),
        )
        .arg(
            clap::arg!(--max_length <NUM> "Maximum length of a candidate block")
                .long("max-length")
                .default_value("250"),
        )
        .arg(clap::arg!(--first_line_only "Only return the first line of the chosen block").long("first-line-only"))
        .arg(
            clap::arg!(--smart_titlecase "Apply English title-case rules to the extracted title")
                .long("smart-titlecase"),
        )
        .arg(
            clap::arg!(--exclude <PHRASE> "Additional phrase that disqualifies a candidate (repeatable)")
                .action(clap::ArgAction::Append),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "titulus", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "titulus", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "titulus", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "titulus", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
