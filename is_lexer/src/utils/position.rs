//! Source location tracking for the IS lexer
//!
//! Positions are stored 0-based, exactly as the scanner counts them, and
//! rendered 1-based at the display boundary. Downstream consumers match
//! against the rendered `"<row> <column>"` form, so that format is fixed.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 0-based (row, column) position in source text.
///
/// Columns count characters, not bytes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (0-based)
    pub row: usize,
    /// Column number (0-based)
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The first character of the input
    pub const fn start() -> Self {
        Self { row: 0, column: 0 }
    }

    /// 1-based line number for display
    pub fn display_row(&self) -> usize {
        self.row + 1
    }

    /// 1-based column number for display
    pub fn display_column(&self) -> usize {
        self.column + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_row(), self.display_column())
    }
}

/// Line lookup over a loaded source, used for caret-style diagnostics
#[derive(Debug, Clone)]
pub struct SourceMap {
    source: String,
    /// Byte offsets of line starts
    line_starts: Vec<usize>,
}

impl SourceMap {
    /// Create a new source map from source text
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut line_starts = vec![0];
        for (offset, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(offset + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// Number of lines, counting a trailing partial line
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a line of text by 0-based row, without its newline
    pub fn line(&self, row: usize) -> Option<&str> {
        let start = *self.line_starts.get(row)?;
        let end = self
            .line_starts
            .get(row + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());

        Some(self.source[start..end].trim_end_matches('\r'))
    }

    /// Format an error message with the offending line and a caret
    pub fn format_error(&self, position: Position, message: &str) -> String {
        let mut result = String::new();

        result.push_str(&format!("Error: {}\n", message));
        result.push_str(&format!(
            "  --> {}:{}\n",
            position.display_row(),
            position.display_column()
        ));

        if let Some(line) = self.line(position.row) {
            let line_num_str = position.display_row().to_string();
            let padding = " ".repeat(line_num_str.len());

            result.push_str(&format!("   {} |\n", padding));
            result.push_str(&format!("{} | {}\n", line_num_str, line));
            result.push_str(&format!(
                "   {} | {}^\n",
                padding,
                " ".repeat(position.column)
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_renders_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "1 1");
        assert_eq!(Position::new(14, 36).to_string(), "15 37");
    }

    #[test]
    fn test_positions_order_by_row_then_column() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
    }

    #[test]
    fn test_source_map_lines() {
        let map = SourceMap::new("x = 1\r\ny = 2\n");
        assert_eq!(map.line_count(), 3);
        assert_eq!(map.line(0), Some("x = 1"));
        assert_eq!(map.line(1), Some("y = 2"));
        assert_eq!(map.line(2), Some(""));
        assert_eq!(map.line(3), None);
    }

    #[test]
    fn test_format_error_points_at_column() {
        let map = SourceMap::new("x # y");
        let rendered = map.format_error(Position::new(0, 2), "Invalid character '#'");

        assert!(rendered.contains("Error: Invalid character '#'"));
        assert!(rendered.contains("--> 1:3"));
        assert!(rendered.contains("1 | x # y"));
        assert!(rendered.ends_with("  |   ^\n"));
    }
}
