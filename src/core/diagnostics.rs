//! Issue Aggregator
//!
//! Ordered, append-only collection of validation issues.

use serde::Serialize;

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Report order: errors first, info last
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    /// Heading used by the text report
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERRORS",
            Severity::Warning => "WARNINGS",
            Severity::Info => "INFO",
        }
    }
}

/// A single finding
///
/// `line` is 1-based; 0 means the issue concerns the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub line: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Per-severity totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueCounts {
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

impl IssueCounts {
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.info
    }
}

/// Issues in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    issues: Vec<ValidationIssue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn push(
        &mut self,
        severity: Severity,
        line: usize,
        message: impl Into<String>,
        context: Option<&str>,
    ) {
        self.issues.push(ValidationIssue {
            severity,
            line,
            message: message.into(),
            context: context.map(str::to_string),
        });
    }

    pub fn add_error(&mut self, line: usize, message: impl Into<String>, context: Option<&str>) {
        self.push(Severity::Error, line, message, context);
    }

    pub fn add_warning(&mut self, line: usize, message: impl Into<String>, context: Option<&str>) {
        self.push(Severity::Warning, line, message, context);
    }

    pub fn add_info(&mut self, line: usize, message: impl Into<String>, context: Option<&str>) {
        self.push(Severity::Info, line, message, context);
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues of one severity, discovery order preserved
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    pub fn counts(&self) -> IssueCounts {
        self.issues
            .iter()
            .fold(IssueCounts::default(), |mut counts, issue| {
                match issue.severity {
                    Severity::Error => counts.errors += 1,
                    Severity::Warning => counts.warnings += 1,
                    Severity::Info => counts.info += 1,
                }
                counts
            })
    }

    /// True when no ERROR has been recorded; warnings and info never fail a run
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }
}
