//! Shared primitive types for the IS lexer and its consumers

pub mod position;

pub use position::{Position, SourceMap};
