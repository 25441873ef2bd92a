//! Configuration module for the IS lexer
//!
//! Compile-time constants live in [`constants`]; user preferences that can be
//! set from the environment or a TOML document live in [`runtime`].

pub mod constants;
pub mod runtime;

pub use runtime::{
    ConfigError, LexicalPreferences, LogLevel, LoggingPreferences, RuntimeConfig,
    UnrecognizedCharPolicy, UnterminatedLiteralPolicy,
};
