//! Scan driver for the IS lexer
//!
//! `Lexer` walks the loaded source one character at a time, classifies it
//! with one character of lookahead, asks the transition table for the next
//! state and applies the side effects of that transition. All mutable scan
//! state lives in a [`ScanContext`] created by [`Lexer::scan`] and dropped
//! when it returns.

use super::condition::classify;
use super::transition::{transition, State};
use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::{
    LexicalPreferences, UnrecognizedCharPolicy, UnterminatedLiteralPolicy,
};
use crate::grammar::keywords::is_reserved_keyword;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind};
use crate::utils::{Position, SourceMap};
use crate::{log_debug, log_error, log_success};
use std::collections::HashMap;

/// Lexical errors, raised only under the strict policies
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character '{character}' at {position}")]
    InvalidCharacter { character: char, position: Position },

    #[error("Unterminated string literal starting at {position}")]
    UnterminatedString { position: Position },

    #[error("Malformed number '{text}' at {position}: exponent has no digits")]
    MalformedNumber { text: String, position: Position },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::MalformedNumber { .. } => codes::lexical::MALFORMED_NUMBER,
        }
    }

    /// Where the offending character or literal starts
    pub fn position(&self) -> Position {
        match self {
            LexerError::InvalidCharacter { position, .. }
            | LexerError::UnterminatedString { position }
            | LexerError::MalformedNumber { position, .. } => *position,
        }
    }
}

/// Counters describing the tokens currently held by a [`Lexer`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub number_tokens: usize,
    pub string_tokens: usize,
    pub operator_tokens: usize,
    pub symbol_tokens: usize,
    pub comment_count: usize,
    /// Non-whitespace characters dropped in idle state
    pub skipped_chars: usize,
    pub unterminated_strings: usize,
    /// Longest string literal body, in characters
    pub max_string_length: usize,

    // Only filled when detailed metrics are enabled
    pub kind_counts: HashMap<TokenKind, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        match token.kind {
            TokenKind::Keyword => self.keyword_tokens += 1,
            TokenKind::Identifier => self.identifier_tokens += 1,
            TokenKind::IntegerLiteral
            | TokenKind::FractionalLiteral
            | TokenKind::ExponentLiteral => self.number_tokens += 1,
            TokenKind::StringLiteral => {
                self.string_tokens += 1;
                self.max_string_length = self.max_string_length.max(token.text.chars().count());
            }
            TokenKind::Operator => self.operator_tokens += 1,
            TokenKind::SpecialSymbol => self.symbol_tokens += 1,
            TokenKind::Comment => self.comment_count += 1,
        }

        if preferences.collect_detailed_metrics {
            *self.kind_counts.entry(token.kind).or_insert(0) += 1;
        }
    }

    pub(crate) fn record_comment(&mut self) {
        self.comment_count += 1;
    }

    pub(crate) fn record_skipped_char(&mut self) {
        self.skipped_chars += 1;
    }

    pub(crate) fn record_unterminated_string(&mut self) {
        self.unterminated_strings += 1;
    }

    /// Count for one kind; zero unless detailed metrics were collected
    pub fn count_of(&self, kind: TokenKind) -> usize {
        self.kind_counts.get(&kind).copied().unwrap_or(0)
    }
}

/// Mutable state of a single scan
struct ScanContext {
    buffer: String,
    state: State,
    row: usize,
    column: usize,
    cursor: usize,
}

impl ScanContext {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            state: State::Empty,
            row: 0,
            column: 0,
            cursor: 0,
        }
    }

    fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }

    /// Append `ch` to the token being built and move past it
    fn accept(&mut self, ch: char, next_state: State) {
        self.buffer.push(ch);
        if ch == '\n' {
            self.row += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.state = next_state;
        self.cursor += 1;
    }

    /// Drop `ch` while idle
    fn absorb(&mut self, ch: char) {
        if ch == '\n' {
            self.row += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.cursor += 1;
    }

    /// Consume a line comment through its newline, or to the end of input
    fn skip_comment(&mut self, chars: &[char]) {
        let newline = chars[self.cursor..]
            .iter()
            .position(|&ch| ch == '\n')
            .map(|offset| self.cursor + offset)
            .unwrap_or(chars.len());

        self.row += 1;
        self.column = 0;
        self.state = State::Empty;
        self.cursor = newline + 1;
    }

    /// Take the accumulated lexeme and return to idle.
    ///
    /// Returns the state the lexeme was built in, its token text and the
    /// column where it started.
    fn take_token(&mut self) -> (State, String, usize) {
        let state = self.state;
        let raw = std::mem::take(&mut self.buffer);
        self.state = State::Empty;

        let (text, quotes) = match state {
            State::EndString => (strip_quotes(&raw, true), CLOSED_STRING_QUOTES),
            State::String | State::StringEscape => {
                (strip_quotes(&raw, false), UNTERMINATED_STRING_QUOTES)
            }
            _ => (raw, 0),
        };

        let column = self
            .column
            .saturating_sub(text.chars().count())
            .saturating_sub(quotes);

        (state, text, column)
    }
}

fn strip_quotes(raw: &str, closed: bool) -> String {
    let mut chars = raw.chars();
    chars.next();
    if closed {
        chars.next_back();
    }
    chars.as_str().to_string()
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_EXCERPT_LENGTH {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(MAX_ERROR_EXCERPT_LENGTH).collect();
        short.push_str("...");
        short
    }
}

/// Finite-state scanner over a loaded IS source
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    output: Vec<Token>,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl Lexer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            source: String::new(),
            output: Vec::new(),
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Replace the input. Does not scan and keeps existing output.
    pub fn load(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Tokenize the loaded source into the output sequence.
    ///
    /// Prior output is cleared first unless `clear_output_on_scan` is off, in
    /// which case tokens accumulate across calls. On error the tokens emitted
    /// before the failure are kept.
    pub fn scan(&mut self) -> Result<(), LexerError> {
        if self.preferences.clear_output_on_scan {
            self.clear_tokens();
        }

        let chars: Vec<char> = self.source.chars().collect();
        let emitted_before = self.output.len();
        let scan_events = crate::logging::config::log_scan_events();

        if scan_events {
            log_debug!("Starting lexical scan",
                "chars" => chars.len(),
                "tokens_before" => emitted_before,
                "on_unrecognized_char" => format!("{:?}", self.preferences.on_unrecognized_char),
                "on_unterminated_literal" => format!("{:?}", self.preferences.on_unterminated_literal)
            );
        }

        let mut context = ScanContext::new();
        if let Err(error) = self.run(&chars, &mut context) {
            let detail = match &error {
                LexerError::InvalidCharacter { character, .. } => format!("{:?}", character),
                LexerError::UnterminatedString { .. } => excerpt(&context.buffer),
                LexerError::MalformedNumber { text, .. } => excerpt(text),
            };
            log_error!(error.error_code(), "Lexical scan failed",
                position = error.position(),
                "error" => &error,
                "text" => detail,
                "tokens_emitted" => self.output.len() - emitted_before
            );
            return Err(error);
        }

        if scan_events {
            log_success!(codes::success::TOKENIZATION_COMPLETE,
                "Lexical scan completed",
                "tokens" => self.output.len() - emitted_before,
                "rows" => context.row,
                "keywords" => self.metrics.keyword_tokens,
                "identifiers" => self.metrics.identifier_tokens,
                "numbers" => self.metrics.number_tokens,
                "strings" => self.metrics.string_tokens,
                "comments" => self.metrics.comment_count,
                "skipped_chars" => self.metrics.skipped_chars
            );
        }

        Ok(())
    }

    fn run(&mut self, chars: &[char], context: &mut ScanContext) -> Result<(), LexerError> {
        let len = chars.len();

        while context.cursor <= len {
            let current = chars.get(context.cursor).copied().unwrap_or(END_OF_INPUT);

            if context.cursor == len && context.state.is_open_string() {
                return self.close_unterminated_string(context);
            }

            let next = chars
                .get(context.cursor + 1)
                .copied()
                .unwrap_or(LOOKAHEAD_SENTINEL);
            let next_state = transition(context.state, classify(current, next));

            match (context.state, next_state) {
                (State::Empty, State::Empty) => {
                    if context.cursor < len && !current.is_ascii_whitespace() {
                        if self.preferences.on_unrecognized_char == UnrecognizedCharPolicy::Fail {
                            return Err(LexerError::InvalidCharacter {
                                character: current,
                                position: context.position(),
                            });
                        }
                        self.metrics.record_skipped_char();
                    }
                    context.absorb(current);
                }
                (_, State::Empty) => self.close_token(context)?,
                (_, State::StringEscape) => {
                    context.state = State::StringEscape;
                    context.cursor += 1;
                }
                (_, State::Comment) => {
                    context.skip_comment(chars);
                    self.metrics.record_comment();
                }
                _ => context.accept(current, next_state),
            }
        }

        Ok(())
    }

    fn close_token(&mut self, context: &mut ScanContext) -> Result<(), LexerError> {
        let (state, text, column) = context.take_token();
        let position = Position::new(context.row, column);

        if state.is_incomplete_exponent()
            && self.preferences.on_unterminated_literal == UnterminatedLiteralPolicy::Fail
        {
            return Err(LexerError::MalformedNumber { text, position });
        }

        let Some(kind) = state.token_kind() else {
            return Ok(());
        };
        let kind = if kind == TokenKind::Identifier && is_reserved_keyword(&text) {
            TokenKind::Keyword
        } else {
            kind
        };

        self.emit(Token::new(kind, text, position));
        Ok(())
    }

    fn close_unterminated_string(&mut self, context: &mut ScanContext) -> Result<(), LexerError> {
        match self.preferences.on_unterminated_literal {
            UnterminatedLiteralPolicy::Fail => {
                let (_, text, column) = context.take_token();
                context.buffer = text;
                Err(LexerError::UnterminatedString {
                    position: Position::new(context.row, column),
                })
            }
            UnterminatedLiteralPolicy::BestEffort => {
                self.metrics.record_unterminated_string();
                self.close_token(context)
            }
        }
    }

    fn emit(&mut self, token: Token) {
        self.metrics.record_token(&token, &self.preferences);
        self.output.push(token);
    }

    /// Copy of every token produced so far
    pub fn tokens(&self) -> Vec<Token> {
        self.output.clone()
    }

    /// Move the produced tokens out, leaving the output empty
    pub fn take_tokens(&mut self) -> Vec<Token> {
        self.metrics = LexicalMetrics::default();
        std::mem::take(&mut self.output)
    }

    pub fn clear_tokens(&mut self) {
        self.output.clear();
        self.metrics = LexicalMetrics::default();
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    pub fn set_preferences(&mut self, preferences: LexicalPreferences) {
        self.preferences = preferences;
    }

    /// Render `error` against the loaded source with a caret under its position
    pub fn format_error(&self, error: &LexerError) -> String {
        SourceMap::new(self.source.as_str()).format_error(error.position(), &error.to_string())
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}
