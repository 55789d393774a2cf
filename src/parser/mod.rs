//! DSL Parser
//!
//! Statement classification and per-kind declaration parsing. A statement is
//! first matched against the trigger table; the selected parser then either
//! yields a declaration or the statement is reported as malformed.

pub mod ast;
pub mod lexer;

pub use ast::{Declaration, ElementKind, Section, ViewKind};
pub use lexer::{Statement, Token, TokenKind, statements, strip_comment, tokenize_statement};

/// Statement kinds that have a dedicated parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Workspace,
    Element(ElementKind),
    Relationship,
    View,
    Styles,
}

impl StatementKind {
    /// Message reported when the statement triggered this parser but did not match
    pub fn syntax_error(self) -> &'static str {
        match self {
            StatementKind::Workspace => {
                "Invalid workspace declaration syntax. Expected: workspace \"name\" {"
            }
            StatementKind::Element(ElementKind::Person) => {
                "Invalid person declaration syntax. Expected: name = person \"description\" [\"technology\"]"
            }
            StatementKind::Element(ElementKind::SoftwareSystem) => {
                "Invalid software system declaration syntax. Expected: name = softwareSystem \"description\" [\"technology\"] [\"tags\"]"
            }
            StatementKind::Element(ElementKind::Container) => {
                "Invalid container declaration syntax. Expected: name = container \"description\" [\"technology\"] [\"tags\"]"
            }
            StatementKind::Relationship => {
                "Invalid relationship syntax. Expected: source -> destination [\"description\"]"
            }
            StatementKind::View => {
                "Invalid view declaration syntax. Expected: viewType elementName [\"title\"]"
            }
            StatementKind::Styles => "Invalid styles declaration syntax. Expected: styles {",
        }
    }
}

/// Outcome of parsing one statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedStatement {
    Declaration(Declaration),
    /// The statement selected a parser but failed its grammar
    Malformed(StatementKind),
    /// No parser applies
    Ignored,
}

/// Pick the parser for a statement, first match wins
///
/// Triggers are substring tests; the selected parser decides whether the
/// statement is well formed.
pub fn classify(statement: &str, section: Section) -> Option<StatementKind> {
    let in_model = section == Section::Model;
    let in_views = section == Section::Views;
    let assigns = statement.contains('=');

    if statement.starts_with("workspace") {
        Some(StatementKind::Workspace)
    } else if in_model && assigns && statement.contains("person") {
        Some(StatementKind::Element(ElementKind::Person))
    } else if in_model && assigns && statement.contains("softwareSystem") {
        Some(StatementKind::Element(ElementKind::SoftwareSystem))
    } else if in_model && assigns && statement.contains("container") {
        Some(StatementKind::Element(ElementKind::Container))
    } else if in_model && statement.contains("->") {
        Some(StatementKind::Relationship)
    } else if in_views && ViewKind::KEYWORDS.iter().any(|k| statement.contains(*k)) {
        Some(StatementKind::View)
    } else if in_views && statement.starts_with("styles") {
        Some(StatementKind::Styles)
    } else {
        None
    }
}

/// Parse a trimmed, comment-free statement in the given section
pub fn parse_statement(statement: &str, section: Section) -> ParsedStatement {
    let Some(kind) = classify(statement, section) else {
        return ParsedStatement::Ignored;
    };

    let declaration = match kind {
        StatementKind::Workspace => ast::parse_workspace(&tokenize_statement(statement)),
        StatementKind::Element(element) => {
            ast::parse_element(element, &tokenize_statement(statement))
        }
        StatementKind::Relationship => ast::parse_relationship(&tokenize_statement(statement)),
        StatementKind::View => ast::parse_view(&tokenize_statement(statement)),
        StatementKind::Styles => ast::parse_styles(statement),
    };

    match declaration {
        Some(declaration) => ParsedStatement::Declaration(declaration),
        None => ParsedStatement::Malformed(kind),
    }
}
