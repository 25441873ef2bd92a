//! Type-safe logging macros using Code types with Display support
//!
//! Context values may be any `Display` type; they are formatted only when a
//! global logger is installed.

// ============================================================================
// ERROR LOGGING MACROS
// ============================================================================

/// Log error with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        $crate::logging::log_error_with_context($code, $message, None, vec![])
    };

    ($code:expr, $message:expr, position = $position:expr) => {
        $crate::logging::log_error_with_context($code, $message, Some($position), vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_initialized() {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_error_with_context($code, $message, None, context_refs)
        }
    };

    ($code:expr, $message:expr, position = $position:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_initialized() {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_error_with_context($code, $message, Some($position), context_refs)
        }
    };
}

// ============================================================================
// SUCCESS LOGGING MACROS
// ============================================================================

/// Log success with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        $crate::logging::log_success_with_context($code, $message, vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_initialized() {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_success_with_context($code, $message, context_refs)
        }
    };
}

// ============================================================================
// INFO / WARNING / DEBUG MACROS
// ============================================================================

/// Log informational message - accepts Display types for context values
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::log_leveled_with_context($crate::logging::LogLevel::Info, $message, vec![])
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_initialized() {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_leveled_with_context(
                $crate::logging::LogLevel::Info,
                $message,
                context_refs,
            )
        }
    };
}

/// Log warning message - accepts Display types for context values
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        $crate::logging::log_leveled_with_context($crate::logging::LogLevel::Warning, $message, vec![])
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_initialized() {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_leveled_with_context(
                $crate::logging::LogLevel::Warning,
                $message,
                context_refs,
            )
        }
    };
}

/// Log debug message - skipped entirely unless the installed service takes debug events
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        if $crate::logging::is_debug_enabled() {
            $crate::logging::log_leveled_with_context($crate::logging::LogLevel::Debug, $message, vec![])
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_debug_enabled() {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_leveled_with_context(
                $crate::logging::LogLevel::Debug,
                $message,
                context_refs,
            )
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::logging::codes;
    use crate::utils::Position;

    #[test]
    fn test_macros_are_noops_without_logger() {
        // Every form must expand and run whether or not a logger is installed
        let row: usize = 3;

        log_error!(codes::lexical::INVALID_CHARACTER, "Invalid character");
        log_error!(
            codes::lexical::INVALID_CHARACTER,
            "Invalid character",
            position = Position::new(row, 1)
        );
        log_error!(codes::lexical::INVALID_CHARACTER, "Invalid character",
            "character" => '#',
            "row" => row
        );
        log_error!(codes::lexical::UNTERMINATED_STRING, "Unterminated string",
            position = Position::new(0, 4),
            "length" => 12
        );

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed");
        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
            "tokens" => 157
        );

        log_info!("Scanning");
        log_info!("Scanning", "chars" => 42);
        log_warning!("Odd input");
        log_warning!("Odd input", "is_large" => row > 1000);
        log_debug!("Trace");
        log_debug!("Trace", "state" => "Identifier");
    }
}
