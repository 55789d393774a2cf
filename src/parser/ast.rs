//! Declarations of the architecture DSL
//!
//! Typed results of the per-statement parsers. Each parser is a prefix match
//! over the statement's tokens: once the required part of the grammar has
//! matched, anything that follows (an opening brace, extra strings) is left
//! alone.

use std::fmt;

use crate::parser::lexer::{Token, TokenKind, is_word_char};

/// Document region a statement belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    None,
    Model,
    Views,
}

/// Kind of model element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Person,
    SoftwareSystem,
    Container,
}

impl ElementKind {
    pub fn keyword(self) -> &'static str {
        match self {
            ElementKind::Person => "person",
            ElementKind::SoftwareSystem => "softwareSystem",
            ElementKind::Container => "container",
        }
    }

    /// People carry a technology string only, no tags
    fn accepts_tags(self) -> bool {
        !matches!(self, ElementKind::Person)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Person => "Person",
            ElementKind::SoftwareSystem => "Software system",
            ElementKind::Container => "Container",
        };
        f.write_str(name)
    }
}

/// Kind of view in the views section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    SystemContext,
    Container,
    Component,
}

impl ViewKind {
    pub const KEYWORDS: [&'static str; 3] = ["systemContext", "container", "component"];

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "systemContext" => Some(ViewKind::SystemContext),
            "container" => Some(ViewKind::Container),
            "component" => Some(ViewKind::Component),
            _ => None,
        }
    }
}

/// A successfully parsed statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `workspace "name" {`
    Workspace { name: String },
    /// `id = person|softwareSystem|container "description" ["technology"] ["tags"]`
    Element {
        kind: ElementKind,
        identifier: String,
        description: String,
        technology: Option<String>,
        tags: Option<String>,
    },
    /// `source -> destination ["description"]`
    Relationship {
        source: String,
        destination: String,
        description: Option<String>,
    },
    /// `systemContext|container|component element ["title"]`
    View {
        kind: ViewKind,
        element: String,
        title: Option<String>,
    },
    /// `styles {`
    Styles,
}

/// Cursor over a statement's tokens
struct Tokens<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Tokens<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn next_if(&mut self, pred: impl FnOnce(&Token) -> bool) -> Option<&'t Token> {
        let token = self.peek().filter(|&t| pred(t))?;
        self.pos += 1;
        Some(token)
    }

    fn keyword(&mut self, keyword: &str) -> Option<()> {
        self.next_if(|t| t.is_ident(keyword)).map(|_| ())
    }

    fn kind(&mut self, kind: TokenKind) -> Option<&'t Token> {
        self.next_if(|t| t.kind == kind)
    }

    /// Whitespace-separated string; `allow_empty` is false for descriptions
    fn spaced_string(&mut self, allow_empty: bool) -> Option<String> {
        self.next_if(|t| {
            t.kind == TokenKind::Str && t.spaced && (allow_empty || !t.text.is_empty())
        })
        .map(|t| t.text.clone())
    }
}

/// `workspace "name" {`
pub fn parse_workspace(tokens: &[Token]) -> Option<Declaration> {
    let mut cursor = Tokens::new(tokens);
    cursor.keyword("workspace")?;
    let name = cursor.spaced_string(false)?;
    cursor.kind(TokenKind::LBrace)?;
    Some(Declaration::Workspace { name })
}

/// `id = <kind> "description" ["technology"] ["tags"]`
pub fn parse_element(kind: ElementKind, tokens: &[Token]) -> Option<Declaration> {
    let mut cursor = Tokens::new(tokens);
    let identifier = cursor.next_if(Token::is_word)?.text.clone();
    cursor.kind(TokenKind::Equals)?;
    cursor.keyword(kind.keyword())?;
    let description = cursor.spaced_string(false)?;
    let technology = cursor.spaced_string(true);
    let tags = if technology.is_some() && kind.accepts_tags() {
        cursor.spaced_string(true)
    } else {
        None
    };

    Some(Declaration::Element {
        kind,
        identifier,
        description,
        technology,
        tags,
    })
}

/// `source -> destination ["description"]`, endpoints may be dotted
pub fn parse_relationship(tokens: &[Token]) -> Option<Declaration> {
    let mut cursor = Tokens::new(tokens);
    let source = cursor.kind(TokenKind::Ident)?.text.clone();
    cursor.kind(TokenKind::Arrow)?;
    let destination = cursor.kind(TokenKind::Ident)?.text.clone();
    let description = cursor.spaced_string(true);

    Some(Declaration::Relationship {
        source,
        destination,
        description,
    })
}

/// `systemContext|container|component element ["title"]`
///
/// Only the leading word of the element name counts; a dotted name ends the
/// match before any title.
pub fn parse_view(tokens: &[Token]) -> Option<Declaration> {
    let mut cursor = Tokens::new(tokens);
    let kind = cursor
        .kind(TokenKind::Ident)
        .and_then(|t| ViewKind::from_keyword(&t.text))?;
    let name = cursor.next_if(|t| {
        t.kind == TokenKind::Ident && t.spaced && t.text.starts_with(is_word_char)
    })?;

    let (element, title) = match name.text.split_once('.') {
        Some((head, _)) => (head.to_string(), None),
        None => (name.text.clone(), cursor.spaced_string(true)),
    };

    Some(Declaration::View {
        kind,
        element,
        title,
    })
}

/// Literally `styles {`
pub fn parse_styles(statement: &str) -> Option<Declaration> {
    (statement == "styles {").then_some(Declaration::Styles)
}
