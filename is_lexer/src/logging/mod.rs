//! Global logging module for the IS lexer
//!
//! Provides a process-wide logging service, a per-thread source label that is
//! attached to every event, and the `log_*!` macro interface. Until a service
//! is installed every logging call is a no-op.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::ConfigError;
use crate::utils::Position;
use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static SOURCE_LABEL: RefCell<Option<String>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system from the configured preferences
pub fn init_global_logging() -> Result<(), ConfigError> {
    config::validate_config()?;
    validate_code_registry()?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| ConfigError::AlreadyInitialized("Global logger"))?;

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), ConfigError> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| ConfigError::AlreadyInitialized("Global logger"))
}

/// Check that every registered code carries metadata
fn validate_code_registry() -> Result<(), ConfigError> {
    for code in codes::ALL_CODES {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(ConfigError::InvalidValue(format!(
                "Missing metadata for code: {}",
                code
            )));
        }
    }
    Ok(())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether the installed service accepts debug events
pub fn is_debug_enabled() -> bool {
    try_get_global_logger().is_some_and(|logger| logger.should_log(LogLevel::Debug))
}

// ============================================================================
// SOURCE LABEL MANAGEMENT
// ============================================================================

/// Label events logged on this thread with a source name (e.g. a program name)
pub fn set_source_label(label: impl Into<String>) {
    let label = label.into();
    SOURCE_LABEL.with(|current| {
        *current.borrow_mut() = Some(label);
    });
}

/// Clear the source label for the current thread
pub fn clear_source_label() {
    SOURCE_LABEL.with(|current| {
        *current.borrow_mut() = None;
    });
}

/// Execute function with a source label
pub fn with_source_label<F, R>(label: impl Into<String>, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_source_label(label);
    let result = f();
    clear_source_label();
    result
}

/// Get current source label (used by the macro support functions)
pub fn get_current_source_label() -> Option<String> {
    SOURCE_LABEL.with(|current| current.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

fn dispatch(mut event: LogEvent, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(label) = get_current_source_label() {
        event = event.with_context("source", &label);
    }

    logger.log_event(event);
}

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    position: Option<Position>,
    context: Vec<(&str, &str)>,
) {
    let mut event = LogEvent::error(code, message);
    if let Some(position) = position {
        event = event.with_position(position);
    }
    dispatch(event, context);
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::success(code, message), context);
}

/// Log an uncoded event (used by log_info!, log_warning! and log_debug!)
pub fn log_leveled_with_context(level: LogLevel, message: &str, context: Vec<(&str, &str)>) {
    let event = match level {
        LogLevel::Error => LogEvent::error(codes::system::INTERNAL_ERROR, message),
        LogLevel::Warning => LogEvent::warning(message),
        LogLevel::Info => LogEvent::info(message),
        LogLevel::Debug => LogEvent::debug(message),
    };
    dispatch(event, context);
}

/// Safe error logging (falls back to stderr if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    match try_get_global_logger() {
        Some(logger) => logger.log_event(LogEvent::error(code, message)),
        None => eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message),
    }
}

/// Get system diagnostics
pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();

    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    if let Some(label) = get_current_source_label() {
        diagnostics.push_str(&format!("Source: {}\n", label));
    }
    diagnostics.push('\n');
    diagnostics.push_str(&config::get_config_summary());

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_registry_is_complete() {
        assert!(validate_code_registry().is_ok());
    }

    #[test]
    fn test_source_label_management() {
        assert!(get_current_source_label().is_none());

        set_source_label("fibonacci.is");
        assert_eq!(get_current_source_label().as_deref(), Some("fibonacci.is"));

        clear_source_label();
        assert!(get_current_source_label().is_none());
    }

    #[test]
    fn test_with_source_label() {
        let result = with_source_label("maximum.is", || {
            assert_eq!(get_current_source_label().as_deref(), Some("maximum.is"));
            42
        });

        assert_eq!(result, 42);
        assert!(get_current_source_label().is_none());
    }

    #[test]
    fn test_debug_follows_installed_service() {
        // The unit test binary never installs a global service
        assert!(!is_initialized());
        assert!(!is_debug_enabled());
    }

    #[test]
    fn test_safe_logging() {
        // Should not panic whether or not global logging is initialized
        safe_log_error(codes::system::INTERNAL_ERROR, "Test error");
    }

    #[test]
    fn test_diagnostics() {
        let diagnostics = with_source_label("prog.is", get_system_diagnostics);
        assert!(diagnostics.contains("Logging System Diagnostics"));
        assert!(diagnostics.contains("Source: prog.is"));
    }
}
