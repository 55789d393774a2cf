//! Core Types
//!
//! Issue collection and document loading shared by the engine and reporter.

pub mod diagnostics;
pub mod document;

pub use diagnostics::{Diagnostics, IssueCounts, Severity, ValidationIssue};
pub use document::{DocumentError, SourceDocument};
