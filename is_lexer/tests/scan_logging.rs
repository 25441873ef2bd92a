//! Scan events reach the installed global logger.
//!
//! The global logger can only be installed once per process, so everything
//! here runs in a single test.

use is_lexer::config::runtime::{LogLevel as PreferenceLevel, LoggingPreferences};
use is_lexer::logging::{self, codes, LogLevel, LoggingService};
use is_lexer::{LexicalPreferences, Lexer, Position};
use std::sync::Arc;

#[test]
fn test_scan_logs_start_failure_and_completion() {
    logging::config::init_runtime_preferences(LoggingPreferences {
        use_structured_logging: false,
        min_log_level: PreferenceLevel::Debug,
        log_scan_events: true,
    })
    .unwrap();

    let memory = logging::service::create_test_logger();
    logging::init_global_logging_with_service(Arc::new(LoggingService::new(
        memory.clone(),
        LogLevel::Debug,
    )))
    .unwrap();
    assert!(logging::is_debug_enabled());

    let mut lexer = Lexer::with_preferences(LexicalPreferences::default());
    lexer.load("x = 1");
    lexer.scan().unwrap();

    let events = memory.get_events();
    assert!(events
        .iter()
        .any(|e| e.is_debug() && e.message == "Starting lexical scan"));
    assert!(memory.has_success_with_code(codes::success::TOKENIZATION_COMPLETE));
    assert!(!memory.get_summary().has_errors());

    memory.clear();
    let mut strict = Lexer::with_preferences(LexicalPreferences::strict());
    strict.load("#");
    assert!(strict.scan().is_err());

    assert!(memory.has_error_with_code(codes::lexical::INVALID_CHARACTER));
    let errors = memory.get_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].position, Some(Position::new(0, 0)));
    assert!(!memory.has_success_with_code(codes::success::TOKENIZATION_COMPLETE));
}
