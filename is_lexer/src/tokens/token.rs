//! Token types emitted by the IS scanner
use crate::grammar::keywords::Keyword;
use crate::utils::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of token classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    FractionalLiteral,
    ExponentLiteral,
    Operator,
    StringLiteral,
    SpecialSymbol,
    /// Part of the closed set; the scanner discards comments and never emits it
    Comment,
    Keyword,
}

impl TokenKind {
    pub const ALL: [TokenKind; 9] = [
        Self::Identifier,
        Self::IntegerLiteral,
        Self::FractionalLiteral,
        Self::ExponentLiteral,
        Self::Operator,
        Self::StringLiteral,
        Self::SpecialSymbol,
        Self::Comment,
        Self::Keyword,
    ];

    /// Stable printed name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "Identifier",
            Self::IntegerLiteral => "IntegerLiteral",
            Self::FractionalLiteral => "FractionalLiteral",
            Self::ExponentLiteral => "ExponentLiteral",
            Self::Operator => "Operator",
            Self::StringLiteral => "StringLiteral",
            Self::SpecialSymbol => "SpecialSymbol",
            Self::Comment => "Comment",
            Self::Keyword => "Keyword",
        }
    }

    /// Numeric literal kinds
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::IntegerLiteral | Self::FractionalLiteral | Self::ExponentLiteral
        )
    }

    /// Literal value kinds (numbers and strings)
    pub fn is_literal(self) -> bool {
        self.is_numeric() || self == Self::StringLiteral
    }

    /// Tokens the parser consumes
    pub fn is_significant(self) -> bool {
        self != Self::Comment
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme and the position of its first character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Surface text; string tokens carry their body without quotes
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Get the reserved word this token spells, if it is a keyword token
    pub fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::from_str(&self.text),
            _ => None,
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.as_keyword() == Some(keyword)
    }

    /// Check for an operator or special symbol with the given text
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(self.kind, TokenKind::Operator | TokenKind::SpecialSymbol) && self.text == symbol
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.text, self.kind, self.position)
    }
}

/// Render tokens one per line in `<text> <kind> <row> <column>` form
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_match_variants() {
        assert_eq!(TokenKind::Identifier.as_str(), "Identifier");
        assert_eq!(TokenKind::ExponentLiteral.to_string(), "ExponentLiteral");
        assert_eq!(TokenKind::ALL.len(), 9);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Identifier, "fib", Position::new(0, 0));
        assert_eq!(token.to_string(), "fib Identifier 1 1");

        let token = Token::new(TokenKind::Operator, "==", Position::new(1, 9));
        assert_eq!(token.to_string(), "== Operator 2 10");
    }

    #[test]
    fn test_render_tokens() {
        let tokens = vec![
            Token::new(TokenKind::Keyword, "return", Position::new(2, 8)),
            Token::new(TokenKind::IntegerLiteral, "0", Position::new(2, 15)),
        ];
        assert_eq!(
            render_tokens(&tokens),
            "return Keyword 3 9\n0 IntegerLiteral 3 16\n"
        );
        assert_eq!(render_tokens(&[]), "");
    }

    #[test]
    fn test_keyword_accessors() {
        let token = Token::new(TokenKind::Keyword, "end", Position::start());
        assert_eq!(token.as_keyword(), Some(Keyword::End));
        assert!(token.is_keyword(Keyword::End));

        // Same text, not rewritten to a keyword
        let token = Token::new(TokenKind::StringLiteral, "end", Position::start());
        assert_eq!(token.as_keyword(), None);
    }

    #[test]
    fn test_symbol_check() {
        let token = Token::new(TokenKind::SpecialSymbol, "(", Position::start());
        assert!(token.is_symbol("("));
        let token = Token::new(TokenKind::StringLiteral, "(", Position::start());
        assert!(!token.is_symbol("("));
    }
}
