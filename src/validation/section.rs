//! Section Tracker
//!
//! Decides which top-level section (model, views or none) each statement
//! belongs to.

use crate::parser::Section;
use crate::parser::lexer::brace_delta;

/// How closing braces end a section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionMode {
    /// Any line that is exactly `}` ends the current section, including the
    /// brace closing a nested element or view block
    #[default]
    Flat,
    /// Only the brace matching `model {` / `views {` ends the section
    Nested,
}

/// State machine over `model {`, `views {` and `}` lines
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    mode: SectionMode,
    current: Section,
    /// Brace depth before the current statement (nested mode only)
    depth: usize,
    /// Depth at which the current section was opened (nested mode only)
    opened_at: usize,
}

impl SectionTracker {
    pub fn new(mode: SectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Feed one trimmed, comment-free statement and return the section it
    /// belongs to
    pub fn observe(&mut self, statement: &str) -> Section {
        let previous = self.current;

        match self.mode {
            SectionMode::Flat => self.observe_flat(statement),
            SectionMode::Nested => self.observe_nested(statement),
        }

        if previous != self.current {
            log::debug!("Section {:?} -> {:?}", previous, self.current);
        }
        self.current
    }

    fn observe_flat(&mut self, statement: &str) {
        match statement {
            "model {" => self.current = Section::Model,
            "views {" => self.current = Section::Views,
            "}" => self.current = Section::None,
            _ => {}
        }
    }

    fn observe_nested(&mut self, statement: &str) {
        let section = match statement {
            "model {" => Some(Section::Model),
            "views {" => Some(Section::Views),
            _ => None,
        };

        if let Some(section) = section {
            self.current = section;
            self.opened_at = self.depth;
            self.depth += 1;
            return;
        }

        let (open, close) = brace_delta(statement);
        self.depth = (self.depth + open).saturating_sub(close);
        if self.current != Section::None && self.depth <= self.opened_at {
            self.current = Section::None;
        }
    }
}
