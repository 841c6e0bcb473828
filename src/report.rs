//! Findings and the validation report.
//!
//! Every checker produces [`Finding`]s. The engine appends them to a
//! [`Report`] in a fixed checker order, so the rendered error and warning
//! lists are reproducible across runs on identical input.

use colored::Colorize;
use serde::Serialize;

/// Checker that produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    /// JSON syntax and file presence
    Syntax,
    /// Presenter and tag references
    CrossReference,
    /// Music/talk ratio policy
    Ratios,
    /// 24-hour schedule coverage
    Schedule,
    /// AI resource budgets
    Budget,
}

impl CheckCategory {
    /// Every checker in the order the engine runs them
    pub const ALL: [CheckCategory; 5] = [
        Self::Syntax,
        Self::CrossReference,
        Self::Ratios,
        Self::Schedule,
        Self::Budget,
    ];
}

impl std::fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax => write!(f, "JSON Syntax"),
            Self::CrossReference => write!(f, "Cross-Reference"),
            Self::Ratios => write!(f, "Music Ratio"),
            Self::Schedule => write!(f, "Schedule Coverage"),
            Self::Budget => write!(f, "AI Budget"),
        }
    }
}

/// Severity level for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational drift; does not fail validation
    Warning,
    /// Must be fixed before the configuration is used
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A single validation outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub category: CheckCategory,
    /// Show ID or other context the message is scoped to
    pub subject: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn error(category: CheckCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category,
            subject: None,
            message: message.into(),
        }
    }

    pub fn warning(category: CheckCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            subject: None,
            message: message.into(),
        }
    }

    /// Scope this finding to a show or file
    pub fn for_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Display the finding with colored output
    pub fn display(&self) {
        let icon = crate::ui::severity_icon(self.severity);
        match &self.subject {
            Some(subject) => println!("  {} {}: {}", icon, subject.cyan(), self.message),
            None => println!("  {} {}", icon, self.message),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.subject {
            Some(subject) => write!(f, "{}: {}", subject, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Informational line attached to a checker section, such as a per-show
/// ratio summary. Notes never affect the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub category: CheckCategory,
    pub text: String,
}

/// Overall result of a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No errors; warnings may be present
    Success,
    /// At least one error, carrying the error count
    Failure(usize),
}

/// Ordered collection of findings from all checkers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    findings: Vec<Finding>,
    #[serde(skip)]
    notes: Vec<Note>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn note(&mut self, category: CheckCategory, text: impl Into<String>) {
        self.notes.push(Note {
            category,
            text: text.into(),
        });
    }

    /// Append every finding and note of `other` after the current ones
    pub fn merge(&mut self, other: Report) {
        self.findings.extend(other.findings);
        self.notes.extend(other.notes);
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Rendered errors in emission order
    pub fn errors(&self) -> Vec<String> {
        self.rendered(Severity::Error)
    }

    /// Rendered warnings in emission order
    pub fn warnings(&self) -> Vec<String> {
        self.rendered(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn outcome(&self) -> Outcome {
        match self.error_count() {
            0 => Outcome::Success,
            n => Outcome::Failure(n),
        }
    }

    /// Findings produced by one checker, in emission order
    pub fn by_category(&self, category: CheckCategory) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.category == category)
    }

    /// Notes recorded by one checker, in emission order
    pub fn notes_for(&self, category: CheckCategory) -> impl Iterator<Item = &str> {
        self.notes
            .iter()
            .filter(move |n| n.category == category)
            .map(|n| n.text.as_str())
    }

    fn rendered(&self, severity: Severity) -> Vec<String> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .map(|f| f.to_string())
            .collect()
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// Display a summary of the report
    pub fn display_summary(&self) {
        println!();
        println!("{}", "━".repeat(50).cyan());

        match self.outcome() {
            Outcome::Failure(count) => {
                println!(
                    "\n{} VALIDATION FAILED with {} {}:\n",
                    "✗".red(),
                    count,
                    if count == 1 { "error" } else { "errors" }
                );
                for finding in self.findings.iter().filter(|f| f.is_error()) {
                    finding.display();
                }
            }
            Outcome::Success if self.has_warnings() => {
                let count = self.warning_count();
                println!(
                    "\n{} VALIDATION PASSED with {} {}:\n",
                    "⚠".yellow(),
                    count,
                    if count == 1 { "warning" } else { "warnings" }
                );
                for finding in self.findings.iter().filter(|f| !f.is_error()) {
                    finding.display();
                }
            }
            Outcome::Success => {
                println!("\n{} ALL VALIDATION CHECKS PASSED!", "✓".green());
            }
        }
    }
}
