//! Configuration access for logging
//!
//! Compile-time limits come from `config::constants`; user preferences are
//! installed once per process and fall back to environment-derived defaults.

use crate::config::constants::compile_time::logging::*;
use crate::config::runtime::{ConfigError, LoggingPreferences};
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();
static DEFAULT_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), ConfigError> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| ConfigError::AlreadyInitialized("Logging preferences"))
}

/// Get runtime preferences, falling back to defaults read once from the environment
fn get_runtime_preferences() -> &'static LoggingPreferences {
    RUNTIME_PREFERENCES
        .get()
        .unwrap_or_else(|| DEFAULT_PREFERENCES.get_or_init(LoggingPreferences::default))
}

/// Get minimum log level
pub fn get_min_log_level() -> EventsLogLevel {
    get_runtime_preferences().min_log_level.to_events_log_level()
}

/// Check if structured logging is enabled (user preference)
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if scan start and completion events should be logged
pub fn log_scan_events() -> bool {
    get_runtime_preferences().log_scan_events
}

/// Get in-memory logger capacity (compile-time resource constant)
pub fn get_memory_logger_capacity() -> usize {
    MEMORY_LOGGER_CAPACITY
}

/// Get maximum log message length (compile-time resource constant)
pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}

/// Validate current configuration settings
pub fn validate_config() -> Result<(), ConfigError> {
    if MEMORY_LOGGER_CAPACITY == 0 {
        return Err(ConfigError::InvalidValue(
            "Memory logger capacity must be positive".to_string(),
        ));
    }

    if MAX_LOG_MESSAGE_LENGTH < 80 {
        return Err(ConfigError::InvalidValue(format!(
            "Max log message length too small: {}",
            MAX_LOG_MESSAGE_LENGTH
        )));
    }

    Ok(())
}

/// Get configuration summary for diagnostics
pub fn get_config_summary() -> String {
    let preferences = get_runtime_preferences();

    format!(
        "Logging Configuration:\n\
         - Memory logger capacity: {}\n\
         - Max message length: {}\n\
         - Min log level: {:?}\n\
         - Structured logging: {}\n\
         - Scan events: {}",
        MEMORY_LOGGER_CAPACITY,
        MAX_LOG_MESSAGE_LENGTH,
        preferences.min_log_level,
        preferences.use_structured_logging,
        preferences.log_scan_events,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config() {
        assert!(validate_config().is_ok());
    }

    #[test]
    fn test_config_summary() {
        let summary = get_config_summary();
        assert!(summary.contains("Logging Configuration"));
        assert!(summary.contains("Min log level"));
    }

    #[test]
    fn test_default_preferences_are_cached() {
        let first = get_runtime_preferences();
        let second = get_runtime_preferences();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_limits() {
        assert_eq!(get_memory_logger_capacity(), MEMORY_LOGGER_CAPACITY);
        assert!(get_max_log_message_length() >= 80);
    }
}
