//! Validation Engine
//!
//! Structural checks, section tracking, symbol resolution and the engine
//! tying them together.

pub mod engine;
pub mod section;
pub mod structure;
pub mod symbols;

pub use engine::{ValidationOptions, ValidationResult, Validator, validate_document, validate_file};
pub use section::{SectionMode, SectionTracker};
pub use symbols::{ElementSymbol, RelationshipEdge, SymbolTable, is_external_system};
