//! Parser-facing token stream over scanner output
//!
//! Keeps the full token list and an index of significant tokens, so that a
//! consumer can navigate with lookahead and backtracking while positions stay
//! tied to the original tokens.

use crate::{
    logging::codes::{self, Code},
    tokens::token::{Token, TokenKind},
    utils::{Position, SourceMap},
};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct TokenStream {
    /// All tokens in scan order
    all_tokens: Vec<Token>,
    /// Indices into all_tokens for significant tokens
    significant_indices: Vec<usize>,
    /// Current position in significant_indices
    position: usize,
    /// Source map for caret-style error reporting
    source_map: Option<SourceMap>,
}

impl TokenStream {
    /// Create a new token stream with automatic filtering
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut stream = Self {
            all_tokens: tokens,
            significant_indices: Vec::new(),
            position: 0,
            source_map: None,
        };
        stream.rebuild_significant_indices();
        stream
    }

    /// Create stream with source map for enhanced error reporting
    pub fn with_source_map(tokens: Vec<Token>, source_map: SourceMap) -> Self {
        let mut stream = Self::new(tokens);
        stream.source_map = Some(source_map);
        stream
    }

    fn rebuild_significant_indices(&mut self) {
        self.significant_indices = self
            .all_tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.kind.is_significant())
            .map(|(i, _)| i)
            .collect();
        self.position = 0;

        crate::log_debug!("Token stream built",
            "total_tokens" => self.all_tokens.len(),
            "significant_tokens" => self.significant_indices.len()
        );
    }

    // === CORE NAVIGATION ===

    /// Get the current significant token
    pub fn current(&self) -> Option<&Token> {
        self.peek_ahead(0)
    }

    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    pub fn current_position(&self) -> Option<Position> {
        self.current().map(|token| token.position)
    }

    /// Peek at the next significant token without advancing
    pub fn peek(&self) -> Option<&Token> {
        self.peek_ahead(1)
    }

    /// Peek ahead by n positions in significant tokens
    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.significant_indices
            .get(self.position + n)
            .and_then(|&original_index| self.all_tokens.get(original_index))
    }

    /// Advance to the next significant token
    pub fn advance(&mut self) -> Option<&Token> {
        if self.position < self.significant_indices.len() {
            self.position += 1;
        }
        self.current()
    }

    /// The significant token before the current one
    pub fn previous(&self) -> Option<&Token> {
        let index = self.position.checked_sub(1)?;
        self.significant_indices
            .get(index)
            .and_then(|&original_index| self.all_tokens.get(original_index))
    }

    /// Check if we're at the end of significant tokens
    pub fn is_at_end(&self) -> bool {
        self.position >= self.significant_indices.len()
    }

    /// Get the number of significant tokens
    pub fn len(&self) -> usize {
        self.significant_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.significant_indices.is_empty()
    }

    // === BACKTRACKING ===

    /// Save current position as checkpoint for backtracking
    pub fn checkpoint(&self) -> usize {
        self.position
    }

    /// Restore position from checkpoint
    pub fn restore(&mut self, checkpoint: usize) {
        self.position = checkpoint.min(self.significant_indices.len());
    }

    // === PARSER INTEGRATION ===

    pub fn check_kind(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    pub fn check_text(&self, text: &str) -> bool {
        self.current().map(|token| token.text == text).unwrap_or(false)
    }

    /// Consume the current token if it matches predicate
    pub fn consume_if<F>(&mut self, predicate: F) -> Option<Token>
    where
        F: FnOnce(&Token) -> bool,
    {
        let token = self.current().filter(|token| predicate(token)).cloned()?;
        self.advance();
        Some(token)
    }

    /// Consume a token of the expected kind or report what was found
    pub fn expect_kind(&mut self, expected: TokenKind) -> Result<Token, TokenStreamError> {
        match self.current() {
            Some(token) if token.kind == expected => {
                let token = token.clone();
                self.advance();
                Ok(token)
            }
            Some(token) => Err(TokenStreamError::UnexpectedToken {
                expected: expected.as_str().to_string(),
                found: token.kind.as_str().to_string(),
                text: token.text.clone(),
                position: token.position,
            }),
            None => Err(TokenStreamError::UnexpectedEndOfStream {
                expected: expected.as_str().to_string(),
            }),
        }
    }

    /// Consume a token with exact text, e.g. `(` or `then`
    pub fn expect_text(&mut self, expected: &str) -> Result<Token, TokenStreamError> {
        match self.current() {
            Some(token) if token.text == expected => {
                let token = token.clone();
                self.advance();
                Ok(token)
            }
            Some(token) => Err(TokenStreamError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.kind.as_str().to_string(),
                text: token.text.clone(),
                position: token.position,
            }),
            None => Err(TokenStreamError::UnexpectedEndOfStream {
                expected: expected.to_string(),
            }),
        }
    }

    // === ACCESS ===

    /// Significant tokens in order
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.significant_indices
            .iter()
            .filter_map(|&i| self.all_tokens.get(i))
    }

    /// All tokens, including non-significant ones
    pub fn all(&self) -> &[Token] {
        &self.all_tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.all_tokens
    }

    /// Get remaining significant token count
    pub fn remaining_count(&self) -> usize {
        self.significant_indices.len().saturating_sub(self.position)
    }

    /// Format an error at a position with source context when available
    pub fn format_error(&self, position: Position, message: &str) -> String {
        match self.source_map {
            Some(ref source_map) => source_map.format_error(position, message),
            None => format!("Error at {}: {}", position, message),
        }
    }

    /// Diagnostic summary of the stream position
    pub fn diagnostic(&self) -> String {
        let current_info = match self.current() {
            Some(token) => format!("'{}' at {}", token.text, token.position),
            None => "<EOF>".to_string(),
        };

        format!(
            "TokenStream(pos: {}/{}, current: {})",
            self.position,
            self.significant_indices.len(),
            current_info
        )
    }

    /// Serialize the significant tokens as a JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let tokens: Vec<&Token> = self.significant().collect();
        serde_json::to_string_pretty(&tokens)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenStreamError {
    #[error("Expected '{expected}', found {found} '{text}' at {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        text: String,
        position: Position,
    },

    #[error("Expected '{expected}', but reached end of input")]
    UnexpectedEndOfStream { expected: String },
}

impl TokenStreamError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnexpectedToken { .. } => codes::stream::UNEXPECTED_TOKEN,
            Self::UnexpectedEndOfStream { .. } => codes::stream::UNEXPECTED_END_OF_STREAM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn sample() -> TokenStream {
        TokenStream::new(vec![
            Token::new(TokenKind::Identifier, "x", Position::new(0, 0)),
            Token::new(TokenKind::Comment, "// note", Position::new(0, 2)),
            Token::new(TokenKind::Operator, "=", Position::new(1, 2)),
            Token::new(TokenKind::IntegerLiteral, "1", Position::new(1, 4)),
        ])
    }

    #[test]
    fn test_comments_are_not_significant() {
        let stream = sample();
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.all().len(), 4);
        let texts: Vec<&str> = stream.significant().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "=", "1"]);
    }

    #[test]
    fn test_navigation() {
        let mut stream = sample();
        assert!(stream.previous().is_none());
        assert!(stream.check_kind(TokenKind::Identifier));
        assert_eq!(stream.peek().map(|t| t.text.as_str()), Some("="));
        assert_eq!(stream.peek_ahead(2).map(|t| t.text.as_str()), Some("1"));

        stream.advance();
        assert!(stream.check_text("="));
        assert_eq!(stream.previous().map(|t| t.text.as_str()), Some("x"));

        stream.advance();
        stream.advance();
        assert!(stream.is_at_end());
        assert!(stream.current().is_none());
        assert!(stream.advance().is_none());
        assert_eq!(stream.remaining_count(), 0);
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut stream = sample();
        let checkpoint = stream.checkpoint();
        stream.advance();
        stream.advance();
        stream.restore(checkpoint);
        assert!(stream.check_text("x"));

        stream.restore(100);
        assert!(stream.is_at_end());
    }

    #[test]
    fn test_expect_kind() {
        let mut stream = sample();
        let token = stream.expect_kind(TokenKind::Identifier).unwrap();
        assert_eq!(token.text, "x");

        assert_matches!(
            stream.expect_kind(TokenKind::Keyword),
            Err(TokenStreamError::UnexpectedToken { ref text, position, .. })
                if text == "=" && position == Position::new(1, 2)
        );

        stream.expect_text("=").unwrap();
        stream.expect_kind(TokenKind::IntegerLiteral).unwrap();
        assert_matches!(
            stream.expect_text(")"),
            Err(TokenStreamError::UnexpectedEndOfStream { .. })
        );
    }

    #[test]
    fn test_consume_if() {
        let mut stream = sample();
        assert!(stream.consume_if(|t| t.kind == TokenKind::Operator).is_none());
        assert!(stream.consume_if(|t| t.is_identifier()).is_some());
        assert!(stream.check_text("="));
    }

    #[test]
    fn test_format_error_with_source() {
        let stream = TokenStream::with_source_map(Vec::new(), SourceMap::new("x = )"));
        let rendered = stream.format_error(Position::new(0, 4), "Unexpected ')'");
        assert!(rendered.contains("1 | x = )"));

        let stream = TokenStream::new(Vec::new());
        assert_eq!(
            stream.format_error(Position::new(0, 4), "Unexpected ')'"),
            "Error at 1 5: Unexpected ')'"
        );
    }

    #[test]
    fn test_to_json() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array[0]["kind"], "Identifier");
        assert_eq!(array[2]["position"]["column"], 4);
    }

    #[test]
    fn test_error_codes() {
        let err = TokenStreamError::UnexpectedEndOfStream {
            expected: "end".to_string(),
        };
        assert_eq!(err.error_code(), codes::stream::UNEXPECTED_END_OF_STREAM);
    }
}
