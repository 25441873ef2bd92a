//! Reserved words of the IS language
//!
//! The scanner rewrites a finished identifier to a keyword token on an exact,
//! case-sensitive match against this table. There are no partial keyword
//! states in the scanner itself.
use serde::{Deserialize, Serialize};

/// IS reserved words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === CONDITIONALS ===
    If,
    Then,
    Else,
    End,

    // === LOOPS ===
    While,
    For,
    In,
    Break,
    Continue,

    // === FUNCTIONS ===
    Function,
    Return,

    // === LITERAL WORDS ===
    Nil,
    True,
    False,
}

impl Keyword {
    /// Every reserved word, in declaration order
    pub const ALL: [Keyword; 14] = [
        Self::If,
        Self::Then,
        Self::Else,
        Self::End,
        Self::While,
        Self::For,
        Self::In,
        Self::Break,
        Self::Continue,
        Self::Function,
        Self::Return,
        Self::Nil,
        Self::True,
        Self::False,
    ];

    /// Get the exact string representation as it appears in IS source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::End => "end",
            Self::While => "while",
            Self::For => "for",
            Self::In => "in",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Function => "function",
            Self::Return => "return",
            Self::Nil => "nil",
            Self::True => "true",
            Self::False => "false",
        }
    }

    /// Parse keyword from string (case-sensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "if" => Some(Self::If),
            "then" => Some(Self::Then),
            "else" => Some(Self::Else),
            "end" => Some(Self::End),
            "while" => Some(Self::While),
            "for" => Some(Self::For),
            "in" => Some(Self::In),
            "break" => Some(Self::Break),
            "continue" => Some(Self::Continue),
            "function" => Some(Self::Function),
            "return" => Some(Self::Return),
            "nil" => Some(Self::Nil),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            _ => None,
        }
    }

    /// Keywords that open a block closed by `end <keyword>`
    pub fn opens_block(self) -> bool {
        matches!(self, Self::If | Self::While | Self::For | Self::Function)
    }

    /// Keywords that denote a literal value
    pub fn is_literal(self) -> bool {
        matches!(self, Self::Nil | Self::True | Self::False)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check if a word is reserved
pub fn is_reserved_keyword(word: &str) -> bool {
    Keyword::from_str(word).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for keyword in Keyword::ALL {
            assert_eq!(Keyword::from_str(keyword.as_str()), Some(keyword));
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!(is_reserved_keyword("if"));
        assert!(!is_reserved_keyword("If"));
        assert!(!is_reserved_keyword("IF"));
        assert!(!is_reserved_keyword("iff"));
        assert!(!is_reserved_keyword(""));
    }

    #[test]
    fn test_word_operators_are_not_keywords() {
        assert!(!is_reserved_keyword("and"));
        assert!(!is_reserved_keyword("or"));
        assert!(!is_reserved_keyword("not"));
    }

    #[test]
    fn test_keyword_groups() {
        assert!(Keyword::Function.opens_block());
        assert!(!Keyword::Then.opens_block());
        assert!(Keyword::Nil.is_literal());
        assert!(!Keyword::Return.is_literal());
    }
}
