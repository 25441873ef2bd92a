//! Scanner states and the transition table
//!
//! [`transition`] is a pure, total function over `(State, Condition)`; every
//! side effect of a transition (appending, emitting, moving the position)
//! belongs to the driver in `analyzer`.

use super::condition::Condition;
use crate::tokens::TokenKind;

/// Kind of token currently being accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Idle, between tokens
    Empty,
    Identifier,
    Integer,
    Fraction,
    /// Exponent marker seen, no sign or digit yet
    ExpStart,
    /// Exponent sign seen, no digit yet
    ExpSign,
    ExpDigits,
    Operator,
    String,
    /// Backslash seen inside a string
    StringEscape,
    /// Closing quote seen
    EndString,
    SpecialSymbol,
    Comment,
}

impl State {
    pub const ALL: [State; 13] = [
        Self::Empty,
        Self::Identifier,
        Self::Integer,
        Self::Fraction,
        Self::ExpStart,
        Self::ExpSign,
        Self::ExpDigits,
        Self::Operator,
        Self::String,
        Self::StringEscape,
        Self::EndString,
        Self::SpecialSymbol,
        Self::Comment,
    ];

    /// Token kind emitted when a token in this state closes.
    ///
    /// Identifiers are rewritten to keywords by the driver. `Empty` and
    /// `Comment` never emit.
    pub fn token_kind(self) -> Option<TokenKind> {
        match self {
            Self::Empty | Self::Comment => None,
            Self::Identifier => Some(TokenKind::Identifier),
            Self::Integer => Some(TokenKind::IntegerLiteral),
            Self::Fraction => Some(TokenKind::FractionalLiteral),
            Self::ExpStart | Self::ExpSign | Self::ExpDigits => Some(TokenKind::ExponentLiteral),
            Self::Operator => Some(TokenKind::Operator),
            Self::String | Self::StringEscape | Self::EndString => Some(TokenKind::StringLiteral),
            Self::SpecialSymbol => Some(TokenKind::SpecialSymbol),
        }
    }

    /// Inside an open string literal
    pub fn is_open_string(self) -> bool {
        matches!(self, Self::String | Self::StringEscape)
    }

    /// Exponent literal still missing its digits
    pub fn is_incomplete_exponent(self) -> bool {
        matches!(self, Self::ExpStart | Self::ExpSign)
    }
}

/// Next state for `state` on `condition`
pub fn transition(state: State, condition: Condition) -> State {
    use Condition as C;
    use State as S;

    match (condition, state) {
        (C::Letter, S::Empty | S::Identifier) => S::Identifier,
        (C::Letter, S::String) => S::String,

        (C::ExponentMarker, S::Integer | S::Fraction) => S::ExpStart,
        (C::ExponentMarker, S::Empty | S::Identifier) => S::Identifier,

        (C::Digit, S::Empty | S::Integer) => S::Integer,
        (C::Digit, S::Identifier) => S::Identifier,
        (C::Digit, S::Fraction) => S::Fraction,
        (C::Digit, S::ExpStart | S::ExpSign | S::ExpDigits) => S::ExpDigits,

        (C::Dot, S::Integer) => S::Fraction,
        (C::FractionStart, S::Empty | S::Integer) => S::Fraction,

        (C::Sign, S::ExpStart) => S::ExpSign,
        (C::Sign, S::Empty) => S::Operator,
        (C::Arithmetic, S::Empty | S::Operator) => S::Operator,

        (C::Quote, S::Empty) => S::String,
        (C::Quote, S::String) => S::EndString,
        (C::Backslash, S::String) => S::StringEscape,

        (C::CommentStart, S::Empty) => S::Comment,
        (C::Newline, S::Comment) => S::Empty,

        (C::GroupingOrComma, S::Empty) => S::SpecialSymbol,

        // Strings swallow everything else; an escape lasts one character
        (_, S::String | S::StringEscape) => S::String,
        _ => S::Empty,
    }
}
