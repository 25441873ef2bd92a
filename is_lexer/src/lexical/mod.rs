//! Lexical analysis module
//!
//! Turns IS source text into positioned tokens. The scanner is split into a
//! character classifier (`condition`), a pure transition table (`transition`)
//! and the driver that applies transitions (`analyzer`).

pub mod analyzer;
pub mod condition;
pub mod transition;

use crate::config::runtime::{ConfigError, LexicalPreferences};
use crate::logging::codes;
use crate::tokens::{TokenKind, TokenStream};
use crate::utils::SourceMap;

pub use analyzer::{Lexer, LexerError, LexicalMetrics};
pub use condition::{classify, Condition};
pub use transition::{transition, State};

// ============================================================================
// MODULE API
// ============================================================================

/// Tokenize `source` with default preferences
pub fn tokenize(source: &str) -> Result<TokenStream, LexerError> {
    tokenize_with_preferences(source, LexicalPreferences::default())
}

/// Tokenize `source` with custom runtime preferences
pub fn tokenize_with_preferences(
    source: &str,
    preferences: LexicalPreferences,
) -> Result<TokenStream, LexerError> {
    let mut lexer = Lexer::with_preferences(preferences);
    lexer.load(source);
    lexer.scan()?;
    Ok(TokenStream::with_source_map(
        lexer.take_tokens(),
        SourceMap::new(source),
    ))
}

/// Create a new lexer with default preferences
pub fn create_analyzer() -> Lexer {
    Lexer::new()
}

/// Create a lexer with custom runtime preferences
pub fn create_analyzer_with_preferences(preferences: LexicalPreferences) -> Lexer {
    Lexer::with_preferences(preferences)
}

// ============================================================================
// MODULE INITIALIZATION AND VALIDATION
// ============================================================================

/// Check that every lexical code is registered with metadata (for system startup)
pub fn init_lexical_analysis_logging() -> Result<(), ConfigError> {
    let lexical_codes = [
        codes::lexical::INVALID_CHARACTER,
        codes::lexical::UNTERMINATED_STRING,
        codes::lexical::MALFORMED_NUMBER,
        codes::success::TOKENIZATION_COMPLETE,
    ];

    for code in &lexical_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(ConfigError::InvalidValue(format!(
                "Lexical code {} not found in metadata registry",
                code.as_str()
            )));
        }
    }

    crate::log_debug!("Lexical analysis codes validated",
        "codes" => lexical_codes.len()
    );

    Ok(())
}

// ============================================================================
// ANALYSIS HELPERS
// ============================================================================

/// Count tokens in a stream by kind
pub fn get_token_counts(token_stream: &TokenStream) -> TokenCounts {
    let mut counts = TokenCounts::default();

    for token in token_stream.all() {
        counts.total += 1;
        match token.kind {
            TokenKind::Keyword => counts.keywords += 1,
            TokenKind::Identifier => counts.identifiers += 1,
            TokenKind::IntegerLiteral
            | TokenKind::FractionalLiteral
            | TokenKind::ExponentLiteral => counts.numbers += 1,
            TokenKind::StringLiteral => counts.strings += 1,
            TokenKind::Operator => counts.operators += 1,
            TokenKind::SpecialSymbol => counts.symbols += 1,
            TokenKind::Comment => counts.comments += 1,
        }
    }

    counts
}

/// Token counts by category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    pub total: usize,
    pub keywords: usize,
    pub identifiers: usize,
    pub numbers: usize,
    pub strings: usize,
    pub operators: usize,
    pub symbols: usize,
    pub comments: usize,
}

impl TokenCounts {
    /// Tokens a parser would consume
    pub fn significant_tokens(&self) -> usize {
        self.total - self.comments
    }

    /// Whether the stream holds anything beyond punctuation
    pub fn has_content(&self) -> bool {
        self.keywords > 0 || self.identifiers > 0 || self.numbers > 0 || self.strings > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::{UnrecognizedCharPolicy, UnterminatedLiteralPolicy};
    use assert_matches::assert_matches;

    fn lenient() -> LexicalPreferences {
        LexicalPreferences {
            on_unrecognized_char: UnrecognizedCharPolicy::Skip,
            on_unterminated_literal: UnterminatedLiteralPolicy::BestEffort,
            clear_output_on_scan: true,
            collect_detailed_metrics: false,
        }
    }

    #[test]
    fn test_tokenize_builds_stream() {
        let mut stream = tokenize_with_preferences("x = 1 // set\nprint(x)", lenient()).unwrap();

        assert_eq!(stream.len(), 7);
        assert!(stream.check_text("x"));
        assert_eq!(stream.advance().map(|t| t.text.as_str()), Some("="));
        assert_eq!(stream.peek().map(|t| t.kind), Some(TokenKind::IntegerLiteral));
    }

    #[test]
    fn test_tokenize_reports_policy_errors() {
        let result = tokenize_with_preferences("a # b", LexicalPreferences::strict());
        assert_matches!(result, Err(LexerError::InvalidCharacter { character: '#', .. }));
    }

    #[test]
    fn test_stream_diagnostics_use_source() {
        let stream = tokenize_with_preferences("foo bar\nbaz", lenient()).unwrap();
        let position = stream.all()[2].position;
        let report = stream.format_error(position, "unexpected name");
        assert!(report.contains("2 | baz"));
    }

    #[test]
    fn test_create_analyzer() {
        let mut lexer = create_analyzer_with_preferences(lenient());
        lexer.load("if");
        lexer.scan().unwrap();
        assert_eq!(lexer.tokens()[0].kind, TokenKind::Keyword);

        assert!(create_analyzer().tokens().is_empty());
    }

    #[test]
    fn test_init_lexical_analysis_logging() {
        assert!(init_lexical_analysis_logging().is_ok());
    }

    #[test]
    fn test_token_counts() {
        let stream = tokenize_with_preferences(
            "if x >= 1.5e3 then\n  s = \"a\" end",
            lenient(),
        )
        .unwrap();
        let counts = get_token_counts(&stream);

        assert_eq!(
            counts,
            TokenCounts {
                total: 9,
                keywords: 3,
                identifiers: 2,
                numbers: 1,
                strings: 1,
                operators: 2,
                symbols: 0,
                comments: 0,
            }
        );
        assert_eq!(counts.significant_tokens(), 9);
        assert!(counts.has_content());

        let empty = get_token_counts(&tokenize_with_preferences("", lenient()).unwrap());
        assert!(!empty.has_content());
    }
}
