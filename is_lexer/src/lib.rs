//! Finite-state lexical scanner for the IS scripting language
//!
//! ```
//! use is_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new();
//! lexer.load("fib = function(n)");
//! lexer.scan().unwrap();
//!
//! let tokens = lexer.tokens();
//! assert_eq!(tokens[2].kind, TokenKind::Keyword);
//! assert_eq!(tokens[2].to_string(), "function Keyword 1 7");
//! ```

// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use config::{LexicalPreferences, RuntimeConfig};
pub use lexical::{tokenize, tokenize_with_preferences, Lexer, LexerError};
pub use tokens::{render_tokens, Token, TokenKind, TokenStream};
pub use utils::Position;
