//! Validation reports
//!
//! Renders a [`ValidationResult`] for humans (grouped by severity) or as JSON.
//! Only ERROR issues make a report fail.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use crate::core::{IssueCounts, Severity, ValidationIssue};
use crate::validation::ValidationResult;

const RULE_WIDTH: usize = 60;

/// A validation result paired with the file it came from
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    file: &'a Path,
    result: &'a ValidationResult,
}

/// Serialized shape of a report
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    file: String,
    workspace: Option<&'a str>,
    passed: bool,
    summary: IssueCounts,
    issues: &'a [ValidationIssue],
}

impl<'a> Report<'a> {
    pub fn new(file: &'a Path, result: &'a ValidationResult) -> Self {
        Self { file, result }
    }

    pub fn passed(&self) -> bool {
        self.result.is_valid()
    }

    /// 0 when no errors were found, 1 otherwise
    pub fn exit_code(&self) -> ExitCode {
        if self.passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }

    /// Header title: the workspace name, or the file when none was declared
    fn title(&self) -> String {
        match &self.result.workspace_name {
            Some(name) => name.clone(),
            None => self.file.display().to_string(),
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let diagnostics = &self.result.diagnostics;

        if diagnostics.is_empty() {
            return writeln!(out, "C4 model DSL validation passed!");
        }

        writeln!(out, "C4 Model DSL Validation Report for: {}", self.title())?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

        for severity in Severity::ALL {
            let issues: Vec<_> = diagnostics.with_severity(severity).collect();
            if issues.is_empty() {
                continue;
            }

            writeln!(out)?;
            writeln!(out, "{} ({}):", severity.label(), issues.len())?;
            for issue in issues {
                writeln!(out, "  Line {}: {}", issue.line, issue.message)?;
                if let Some(context) = &issue.context {
                    writeln!(out, "    Context: {}", context)?;
                }
            }
        }

        let counts = diagnostics.counts();
        writeln!(out)?;
        writeln!(
            out,
            "Summary: {} errors, {} warnings, {} info messages",
            counts.errors, counts.warnings, counts.info
        )?;
        writeln!(out)?;

        if self.passed() {
            writeln!(out, "Validation completed with warnings/info only.")
        } else {
            writeln!(out, "Validation failed!")
        }
    }

    pub fn to_text(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_text(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let report = JsonReport {
            file: self.file.display().to_string(),
            workspace: self.result.workspace_name.as_deref(),
            passed: self.passed(),
            summary: self.result.diagnostics.counts(),
            issues: self.result.diagnostics.issues(),
        };
        serde_json::to_string_pretty(&report)
    }
}
