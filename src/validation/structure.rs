//! Structural Checker
//!
//! Whole-document checks that do not depend on line-by-line parsing. These
//! run first, so a badly broken document still gets its baseline errors.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::Diagnostics;

static WORKSPACE_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"workspace\s+"[^"\n]+"\s*\{"#).expect("valid regex"));

static MODEL_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"model\s*\{").expect("valid regex"));

static VIEWS_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"views\s*\{").expect("valid regex"));

/// Brace totals over the raw text, strings and comments included
pub fn count_braces(content: &str) -> (usize, usize) {
    content.chars().fold((0, 0), |(open, close), c| match c {
        '{' => (open + 1, close),
        '}' => (open, close + 1),
        _ => (open, close),
    })
}

/// Run every structural check, reporting at line 1
pub fn check_structure(content: &str, diagnostics: &mut Diagnostics) {
    if !WORKSPACE_DECLARATION.is_match(content) {
        diagnostics.add_error(1, "Missing workspace declaration", None);
    }

    if !MODEL_BLOCK.is_match(content) {
        diagnostics.add_error(1, "Missing model section", None);
    }

    if !VIEWS_BLOCK.is_match(content) {
        diagnostics.add_warning(
            1,
            "Missing views section (recommended for visualization)",
            None,
        );
    }

    let (open, close) = count_braces(content);
    if open != close {
        diagnostics.add_error(
            1,
            format!("Unbalanced braces: {} opening, {} closing", open, close),
            None,
        );
    }
}
