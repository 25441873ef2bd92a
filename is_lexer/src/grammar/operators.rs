//! Operator and punctuation character sets
//!
//! The scanner only needs the character sets: it grows an operator token
//! greedily and never checks the result. The known-operator table is kept
//! here for the parser, which owns operator validation.

/// Characters that start or extend an operator token
pub const OPERATOR_CHARS: &str = "*/%^=<>!";

/// Characters that start an operator token but never extend one
pub const SIGN_CHARS: &str = "+-";

/// One-character tokens that never extend
pub const SPECIAL_SYMBOLS: &str = "()[],";

/// Line comment opener
pub const COMMENT_START: &str = "//";

/// Operators the language defines, including the word operators
pub const KNOWN_OPERATORS: [&str; 22] = [
    "+", "-", "*", "/", "%", "^", "==", "!=", "<", ">", "<=", ">=", "=", "+=", "-=", "*=", "/=",
    "%=", "^=", "and", "or", "not",
];

/// Word operators; the scanner emits these as identifiers
pub const WORD_OPERATORS: [&str; 3] = ["and", "or", "not"];

pub fn is_operator_char(ch: char) -> bool {
    OPERATOR_CHARS.contains(ch)
}

pub fn is_sign_char(ch: char) -> bool {
    SIGN_CHARS.contains(ch)
}

pub fn is_special_symbol(ch: char) -> bool {
    SPECIAL_SYMBOLS.contains(ch)
}

/// Check whether scanned operator text is a legal operator
pub fn is_known_operator(text: &str) -> bool {
    KNOWN_OPERATORS.contains(&text)
}

/// Check whether an identifier is a word operator
pub fn is_word_operator(text: &str) -> bool {
    WORD_OPERATORS.contains(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_chars_are_not_extension_chars() {
        assert!(!is_operator_char('+'));
        assert!(!is_operator_char('-'));
        assert!(is_sign_char('+'));
        assert!(is_sign_char('-'));
    }

    #[test]
    fn test_known_operators() {
        for op in ["+=", "==", "!=", "<=", ">=", "^", "and"] {
            assert!(is_known_operator(op), "{op} should be known");
        }
        for op in ["+<", "=<", "!!", "==="] {
            assert!(!is_known_operator(op), "{op} should be unknown");
        }
    }

    #[test]
    fn test_special_symbols() {
        for ch in ['(', ')', '[', ']', ','] {
            assert!(is_special_symbol(ch));
        }
        assert!(!is_special_symbol('{'));
        assert!(!is_special_symbol('.'));
    }
}
