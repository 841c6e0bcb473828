//! `lofield validate`: run every check and report errors and warnings.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use lofield::engine;
use lofield::loader::ConfigSet;
use lofield::report::{CheckCategory, Finding, Outcome, Report};
use lofield::ui;

use crate::cli::{OutputFormat, SourceArgs};
use crate::cmd::resolve_config;

/// Machine-readable report for `--format json`
#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    error_count: usize,
    warning_count: usize,
    errors: Vec<String>,
    warnings: Vec<String>,
    findings: &'a [Finding],
}

impl<'a> JsonReport<'a> {
    fn new(report: &'a Report) -> Self {
        Self {
            valid: report.outcome() == Outcome::Success,
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            errors: report.errors(),
            warnings: report.warnings(),
            findings: report.findings(),
        }
    }
}

/// Whether a finished report should make the command fail
fn should_fail(report: &Report, strict: bool) -> bool {
    report.has_errors() || (strict && report.has_warnings())
}

pub fn cmd_validate(
    source: &SourceArgs,
    format: OutputFormat,
    strict: bool,
    quiet: bool,
) -> Result<()> {
    let config = resolve_config(source)?;
    let set = ConfigSet::load(&config.config_dir)?;
    let report = engine::validate(&set, &config.tolerances);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonReport::new(&report))
                .context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Text => print_text(&report, quiet || ui::is_quiet()),
    }

    if should_fail(&report, strict) {
        std::process::exit(1);
    }
    Ok(())
}

fn print_text(report: &Report, quiet: bool) {
    if !quiet {
        println!("{}", "Lofield FM Configuration Validator".bold());
        for category in CheckCategory::ALL {
            let notes: Vec<&str> = report.notes_for(category).collect();
            let findings: Vec<&Finding> = report.by_category(category).collect();
            ui::print_section(category, &notes, &findings);
        }
    }

    report.display_summary();

    if !report.has_errors() {
        println!("\nConfiguration is valid and ready to use.");
    }
}
