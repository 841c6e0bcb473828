//! Console formatting helpers for the `lofield` CLI.

use colored::{ColoredString, Colorize};

use crate::report::{CheckCategory, Finding, Severity};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("LOFIELD_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Colored icon for a finding severity
pub fn severity_icon(severity: Severity) -> ColoredString {
    match severity {
        Severity::Warning => "⚠".yellow(),
        Severity::Error => "✗".red(),
    }
}

/// Section heading printed before each checker's results
pub fn section_heading(category: CheckCategory) -> String {
    format!("=== {} Validation ===", category)
}

/// Print one checker section: its notes, then its findings or a pass line.
pub fn print_section(category: CheckCategory, notes: &[&str], findings: &[&Finding]) {
    println!("\n{}", section_heading(category).bold());
    for note in notes {
        println!("  {}", note);
    }
    if findings.is_empty() {
        println!("{} No issues", "✓".green());
        return;
    }
    for finding in findings {
        println!("{} {}", severity_icon(finding.severity), finding);
    }
}

/// Format a separator line for sections
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
