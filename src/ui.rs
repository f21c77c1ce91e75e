//! Console output for the changelog update.
//!
//! Every line, including warnings and errors, goes to stdout.

use console::{style, StyledObject};
use std::io::{self, Write};

use crate::boundary::BoundaryWarning;
use crate::domain::{Category, ChangeSet};

/// Writes one marked line to `out`.
pub fn write_line<W: Write>(
    out: &mut W,
    marker: StyledObject<&str>,
    message: &str,
) -> io::Result<()> {
    writeln!(out, "{} {}", marker, message)
}

fn print_line(marker: StyledObject<&str>, message: &str) {
    let _ = write_line(&mut io::stdout().lock(), marker, message);
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    print_line(style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    print_line(style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    print_line(style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    print_line(style("⚠ WARNING:").yellow(), &warning.to_string());
}

/// Single comma-separated line of every bucket with its entry count,
/// e.g. `Breaking Changes: 0, Added: 2, Changed: 0, Fixed: 1`.
pub fn format_change_summary(changes: &ChangeSet) -> String {
    Category::ALL
        .iter()
        .map(|category| format!("{}: {}", category, changes.entries(*category).len()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display how many commits landed in each bucket.
pub fn display_change_summary(changes: &ChangeSet) {
    println!(
        "\n{} {}",
        style("Categorized commits:").bold(),
        format_change_summary(changes)
    );
}

/// Display a rendered section, used by `--dry-run`.
pub fn display_section_preview(section: &str) {
    println!("\n{}", style("Section preview:").bold().underlined());
    for line in section.lines() {
        println!("  {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_change_summary() {
        let mut changes = ChangeSet::new();
        changes.push(Category::Added, "add X");
        changes.push(Category::Added, "add Z");
        changes.push(Category::Fixed, "bug Y");
        assert_eq!(
            format_change_summary(&changes),
            "Breaking Changes: 0, Added: 2, Changed: 0, Fixed: 1"
        );
    }

    #[test]
    fn test_write_line_formats_marker_and_message() {
        let mut out = Vec::new();
        write_line(
            &mut out,
            style("⚠ WARNING:").yellow(),
            &BoundaryWarning::NoStableTags {
                newest: "v1.0.0-beta2".to_string(),
            }
            .to_string(),
        )
        .unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.contains("WARNING:"));
        assert!(line.ends_with("No stable tags found, using newest tag 'v1.0.0-beta2'\n"));
    }

    #[test]
    fn test_display_functions_do_not_panic() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
        display_boundary_warning(&BoundaryWarning::NoTags);
        display_section_preview("## [1.0.0] - 2024-01-01\n");
    }
}
