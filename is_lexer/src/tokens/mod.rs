//! Token system for IS lexical analysis
//!
//! The scanner produces a flat `Vec<Token>`; each token carries its
//! classification, surface text and the 0-based position of its first
//! character. [`TokenStream`] wraps that output for parser-style navigation
//! with lookahead, checkpoints and comment filtering.

pub mod token;
pub mod token_stream;

pub use token::{render_tokens, Token, TokenKind};
pub use token_stream::{TokenStream, TokenStreamError};

pub use crate::utils::{Position, SourceMap};
