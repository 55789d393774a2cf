//! Validation Engine
//!
//! Runs the structural checks, streams statements through the section
//! tracker and declaration parsers, then runs the cross-reference pass. Each
//! call builds its own run state, so nothing carries over between documents.

use std::path::Path;

use crate::core::{Diagnostics, SourceDocument};
use crate::parser::{self, Declaration, ParsedStatement, Statement};
use crate::validation::section::{SectionMode, SectionTracker};
use crate::validation::structure::check_structure;
use crate::validation::symbols::{RelationshipEdge, SymbolTable};

/// Behaviour switches for a validation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    pub section_mode: SectionMode,
    /// Run the end-of-document undefined-reference and orphan checks
    pub cross_references: bool,
}

/// Result of validating one document
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub workspace_name: Option<String>,
    pub diagnostics: Diagnostics,
    pub symbols: SymbolTable,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_valid()
    }
}

/// Validator bound to a set of options
///
/// Holds no per-document state; every call starts from scratch.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn validate_document(&self, content: &str) -> ValidationResult {
        validate_document(content, &self.options)
    }

    pub fn validate_file(&self, path: impl AsRef<Path>) -> ValidationResult {
        validate_file(path, &self.options)
    }
}

/// Read and validate a file
///
/// A read failure becomes the only issue of the run (line 0).
pub fn validate_file(path: impl AsRef<Path>, options: &ValidationOptions) -> ValidationResult {
    match SourceDocument::load(path.as_ref()) {
        Ok(document) => validate_document(&document.content, options),
        Err(err) => {
            log::warn!("{}", err);
            let mut result = ValidationResult::default();
            result.diagnostics.add_error(0, err.to_string(), None);
            result
        }
    }
}

/// Validate document text
pub fn validate_document(content: &str, options: &ValidationOptions) -> ValidationResult {
    let mut run = Run::new(options);

    check_structure(content, &mut run.result.diagnostics);

    for statement in parser::statements(content) {
        run.validate_statement(statement);
    }

    if options.cross_references {
        run.result
            .symbols
            .check_references(&mut run.result.diagnostics);
    }

    let counts = run.result.diagnostics.counts();
    log::info!(
        "Validated {} elements, {} relationships: {} errors, {} warnings, {} info",
        run.result.symbols.elements().len(),
        run.result.symbols.edges().len(),
        counts.errors,
        counts.warnings,
        counts.info
    );

    run.result
}

/// State of a single run
struct Run {
    tracker: SectionTracker,
    result: ValidationResult,
}

impl Run {
    fn new(options: &ValidationOptions) -> Self {
        Self {
            tracker: SectionTracker::new(options.section_mode),
            result: ValidationResult::default(),
        }
    }

    fn validate_statement(&mut self, statement: Statement<'_>) {
        let section = self.tracker.observe(statement.text);
        log::trace!("{:>4} {:?}: {}", statement.line, section, statement.text);

        match parser::parse_statement(statement.text, section) {
            ParsedStatement::Declaration(declaration) => self.register(declaration, statement),
            ParsedStatement::Malformed(kind) => {
                log::debug!("Line {}: malformed {:?}", statement.line, kind);
                self.result.diagnostics.add_error(
                    statement.line,
                    kind.syntax_error(),
                    Some(statement.raw),
                );
            }
            ParsedStatement::Ignored => {}
        }
    }

    fn register(&mut self, declaration: Declaration, statement: Statement<'_>) {
        let symbols = &mut self.result.symbols;

        match declaration {
            Declaration::Workspace { name } => {
                log::debug!("Workspace '{}'", name);
                self.result.workspace_name = Some(name);
            }
            Declaration::Element {
                kind, identifier, ..
            } => {
                symbols.declare(&identifier, kind, statement.line);
            }
            Declaration::Relationship {
                source,
                destination,
                description,
            } => {
                symbols.check_forward_references(
                    &source,
                    &destination,
                    statement.line,
                    statement.raw,
                    &mut self.result.diagnostics,
                );
                symbols.relate(RelationshipEdge {
                    source,
                    destination,
                    description,
                    line: statement.line,
                });
            }
            Declaration::View { .. } | Declaration::Styles => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    const MINIMAL: &str = r#"workspace "X" {
    model {
    }
    views {
    }
}
"#;

    #[test]
    fn test_minimal_document_passes() {
        let result = validate_document(MINIMAL, &ValidationOptions::default());

        assert!(result.is_valid());
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.workspace_name.as_deref(), Some("X"));
    }

    #[test]
    fn test_malformed_line_does_not_stop_validation() {
        let content = r#"workspace "X" {
    model {
        x = person
        y = person "Y"
        y -> z "calls"
    }
    views {
    }
}
"#;
        let result = validate_document(content, &ValidationOptions::default());
        let issues = result.diagnostics.issues();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].line, 3);
        assert_eq!(issues[0].context.as_deref(), Some("x = person"));
        assert_eq!(issues[1].severity, Severity::Warning);
        assert_eq!(issues[1].line, 5);
        assert!(issues[1].message.contains("'z'"));
    }

    #[test]
    fn test_structural_issues_come_first() {
        let content = "model {\n    x = person\n}\n";
        let result = validate_document(content, &ValidationOptions::default());
        let lines: Vec<_> = result.diagnostics.issues().iter().map(|i| i.line).collect();

        assert_eq!(lines, vec![1, 1, 2]);
    }

    #[test]
    fn test_workspace_declaration_error_keeps_going() {
        let content = "workspace {\nmodel {\n}\nviews {\n}\n}\n";
        let result = validate_document(content, &ValidationOptions::default());

        assert_eq!(result.workspace_name, None);
        assert!(
            result
                .diagnostics
                .issues()
                .iter()
                .any(|i| i.line == 1 && i.message.starts_with("Invalid workspace"))
        );
    }

    #[test]
    fn test_validator_has_no_state_between_runs() {
        let validator = Validator::default();
        let noisy = "model {\na -> b\nx = person\n";

        let first = validator.validate_document(noisy);
        let second = validator.validate_document(MINIMAL);

        assert!(!first.diagnostics.is_empty());
        assert!(second.diagnostics.is_empty());
        assert!(second.symbols.elements().is_empty());
        assert!(second.symbols.edges().is_empty());
    }

    #[test]
    fn test_cross_references_are_opt_in() {
        let content = r#"workspace "X" {
    model {
        a -> b
        a = person "A"
    }
    views {
    }
}
"#;
        let parity = validate_document(content, &ValidationOptions::default());
        assert!(parity.is_valid());
        assert_eq!(parity.diagnostics.counts().warnings, 2);

        let strict = validate_document(
            content,
            &ValidationOptions {
                cross_references: true,
                ..ValidationOptions::default()
            },
        );
        let errors: Vec<_> = strict.diagnostics.with_severity(Severity::Error).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("'b'"));
        assert_eq!(errors[0].line, 3);
    }
}
