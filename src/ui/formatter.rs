//! Pure formatting functions for diagnostics.
//!
//! Everything here goes to stderr so stdout stays reserved for the report.
//! The `format_*` functions build the text; the `display_*` functions print it.

use console::style;

use crate::warnings::ChangelogWarning;

/// One-line usage summary printed after a usage error
pub const USAGE: &str = "Usage: changelog-gen --txt | --rtf | --md | --html \
[--repo <PATH>] [--branch <NAME>] [--nocredit] [--output <FILE>] [--config <FILE>] [--page]";

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("Error:").red().for_stderr(), message)
}

pub fn format_warning(warning: &ChangelogWarning) -> String {
    format!("{} {}", style("Warning:").yellow().for_stderr(), warning)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").green().for_stderr(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a warning in yellow.
pub fn display_warning(warning: &ChangelogWarning) {
    eprintln!("{}", format_warning(warning));
}

pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

pub fn display_usage() {
    eprintln!("{}", USAGE);
}
