use owo_colors::OwoColorize;
use titulus_core::TitleReport;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Titulus".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Extract document titles from PDF first-page layout\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print what the pipeline chose and how many blocks it went through
pub fn print_report_details(report: &TitleReport) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Selection Details".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!(
        "  {} {}",
        "Candidates:".dimmed(),
        report.candidates.to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Survivors:".dimmed(),
        report.survivors.to_string().bright_white()
    );

    match (&report.font_id, report.font_size) {
        (Some(font_id), Some(size)) => eprintln!(
            "  {} {} ({:.1}pt)",
            "Font:".dimmed(),
            font_id.bright_white(),
            size
        ),
        _ => eprintln!("  {} {}", "Font:".dimmed(), "none".bright_yellow()),
    }

    if let Some(raw) = &report.raw_title {
        eprintln!("  {} {}", "Raw:".dimmed(), raw.bright_white());
    }
    eprintln!();
}
