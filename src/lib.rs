//! C4 Model DSL Validator
//!
//! A static linter for brace-delimited architecture-description documents
//! (workspace / model / views).
//!
//! This library provides:
//! - Statement lexing and per-declaration parsing
//! - Section tracking and symbol resolution
//! - Whole-document structural checks
//! - Severity-ranked reports in text or JSON

pub mod config;
pub mod core;
pub mod parser;
pub mod report;
pub mod validation;

pub use config::{Config, OutputFormat};
pub use crate::core::{Diagnostics, Severity, ValidationIssue};
pub use parser::{ParsedStatement, parse_statement};
pub use report::Report;
pub use validation::{ValidationOptions, ValidationResult, Validator, validate_document, validate_file};
