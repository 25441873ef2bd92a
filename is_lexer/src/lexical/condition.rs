//! Character classification for the scanner
//!
//! Maps the current character and one character of lookahead to a
//! [`Condition`]. Categories are tested in a fixed order and the first match
//! wins, so `e` before a digit is an exponent marker and `/` before `/` opens
//! a comment. The classifier knows nothing about scanner state.

use crate::grammar::operators::{
    is_operator_char, is_sign_char, is_special_symbol, COMMENT_START,
};

/// Character categories driving the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Letter,
    Digit,
    /// `e` or `E` followed by a sign or digit
    ExponentMarker,
    Sign,
    Quote,
    Backslash,
    /// `/` followed by `/`
    CommentStart,
    Arithmetic,
    /// `.` followed by a digit
    FractionStart,
    Dot,
    Newline,
    GroupingOrComma,
    Unclassified,
}

impl Condition {
    pub const ALL: [Condition; 13] = [
        Self::Letter,
        Self::Digit,
        Self::ExponentMarker,
        Self::Sign,
        Self::Quote,
        Self::Backslash,
        Self::CommentStart,
        Self::Arithmetic,
        Self::FractionStart,
        Self::Dot,
        Self::Newline,
        Self::GroupingOrComma,
        Self::Unclassified,
    ];
}

fn is_exponent_marker(current: char, next: char) -> bool {
    matches!(current, 'e' | 'E') && (next.is_ascii_digit() || is_sign_char(next))
}

fn is_comment_start(current: char, next: char) -> bool {
    let mut opener = COMMENT_START.chars();
    opener.next() == Some(current) && opener.next() == Some(next)
}

/// Classify `current` given the character after it
pub fn classify(current: char, next: char) -> Condition {
    if current.is_ascii_digit() {
        Condition::Digit
    } else if is_exponent_marker(current, next) {
        Condition::ExponentMarker
    } else if current.is_ascii_alphabetic() || current == '_' {
        Condition::Letter
    } else if is_sign_char(current) {
        Condition::Sign
    } else if current == '"' {
        Condition::Quote
    } else if current == '\\' {
        Condition::Backslash
    } else if is_comment_start(current, next) {
        Condition::CommentStart
    } else if is_operator_char(current) {
        Condition::Arithmetic
    } else if current == '.' && next.is_ascii_digit() {
        Condition::FractionStart
    } else if current == '.' {
        Condition::Dot
    } else if current == '\n' {
        Condition::Newline
    } else if is_special_symbol(current) {
        Condition::GroupingOrComma
    } else {
        Condition::Unclassified
    }
}
