//! Lexical grammar tables for IS

pub mod keywords;
pub mod operators;

// Re-export keywords
pub use keywords::{is_reserved_keyword, Keyword};

// Re-export operator tables
pub use operators::{
    is_known_operator, is_operator_char, is_sign_char, is_special_symbol, is_word_operator,
    KNOWN_OPERATORS,
};
