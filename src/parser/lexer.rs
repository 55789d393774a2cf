//! DSL Lexer
//!
//! Splits a document into logical statements (one per line) and tokenizes a
//! single statement. The DSL is line-oriented, so nothing here looks past the
//! end of a line.

/// Token types in a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword, may contain dots (e.g. "system.webapp")
    Ident,
    /// Quoted string, text holds the contents without quotes
    Str,
    /// String with no closing quote before end of line
    UnterminatedStr,
    LBrace,
    RBrace,
    Equals,
    Arrow,
    /// Any other single character
    Other,
}

/// A token with its text content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Whitespace separates this token from the previous one
    pub spaced: bool,
}

impl Token {
    pub fn is_ident(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Ident && self.text == keyword
    }

    /// Identifier made only of word characters (no dots)
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Ident && self.text.chars().all(is_word_char)
    }
}

/// One logical line of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    /// 1-based line number
    pub line: usize,
    /// Trimmed text with comments removed
    pub text: &'a str,
    /// Trimmed source line, used as issue context
    pub raw: &'a str,
}

/// Iterate over the non-blank, non-comment statements of a document
pub fn statements(content: &str) -> impl Iterator<Item = Statement<'_>> {
    content.lines().enumerate().filter_map(|(idx, line)| {
        let text = strip_comment(line);
        if text.is_empty() {
            None
        } else {
            Some(Statement {
                line: idx + 1,
                text,
                raw: line.trim(),
            })
        }
    })
}

/// Trim a line and drop `#` or `//` comments that start outside a string
pub fn strip_comment(line: &str) -> &str {
    let line = line.trim();
    let mut in_string = false;
    let mut chars = line.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return line[..idx].trim_end(),
            '/' if !in_string && matches!(chars.peek(), Some((_, '/'))) => {
                return line[..idx].trim_end();
            }
            _ => {}
        }
    }

    line
}

/// Count `{` and `}` outside strings
pub fn brace_delta(statement: &str) -> (usize, usize) {
    tokenize_statement(statement)
        .iter()
        .fold((0, 0), |(open, close), token| match token.kind {
            TokenKind::LBrace => (open + 1, close),
            TokenKind::RBrace => (open, close + 1),
            _ => (open, close),
        })
}

/// Tokenize a comment-free statement
pub fn tokenize_statement(statement: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = statement.char_indices().peekable();
    let mut spaced = false;

    while let Some((start_idx, ch)) = chars.next() {
        let token = match ch {
            c if c.is_whitespace() => {
                spaced = true;
                continue;
            }

            '"' => {
                let mut end_idx = None;
                for (idx, next_ch) in chars.by_ref() {
                    if next_ch == '"' {
                        end_idx = Some(idx);
                        break;
                    }
                }
                match end_idx {
                    Some(end) => Token {
                        kind: TokenKind::Str,
                        text: statement[start_idx + 1..end].to_string(),
                        spaced,
                    },
                    None => Token {
                        kind: TokenKind::UnterminatedStr,
                        text: statement[start_idx + 1..].to_string(),
                        spaced,
                    },
                }
            }

            '-' if matches!(chars.peek(), Some((_, '>'))) => {
                chars.next();
                Token {
                    kind: TokenKind::Arrow,
                    text: "->".to_string(),
                    spaced,
                }
            }

            c if is_ident_char(c) => {
                let mut end_idx = start_idx + c.len_utf8();
                while let Some(&(idx, next_ch)) = chars.peek() {
                    if is_ident_char(next_ch) {
                        end_idx = idx + next_ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token {
                    kind: TokenKind::Ident,
                    text: statement[start_idx..end_idx].to_string(),
                    spaced,
                }
            }

            c => {
                let kind = match c {
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    '=' => TokenKind::Equals,
                    _ => TokenKind::Other,
                };
                Token {
                    kind,
                    text: c.to_string(),
                    spaced,
                }
            }
        };

        tokens.push(token);
        spaced = false;
    }

    tokens
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    is_word_char(c) || c == '.'
}
