// RUNTIME PREFERENCES (User Experience)

use crate::logging::codes::{self, Code};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// What the scanner does with a character that cannot start any token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedCharPolicy {
    /// Consume it silently, advancing the column
    Skip,
    /// Stop with `LexerError::InvalidCharacter`
    Fail,
}

/// What the scanner does with a literal left open at end of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnterminatedLiteralPolicy {
    /// Emit whatever was accumulated
    BestEffort,
    /// Stop with `LexerError::UnterminatedString` or `LexerError::MalformedNumber`
    Fail,
}

impl UnrecognizedCharPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "skip" => Some(Self::Skip),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }
}

impl UnterminatedLiteralPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "best_effort" | "besteffort" => Some(Self::BestEffort),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    pub on_unrecognized_char: UnrecognizedCharPolicy,

    pub on_unterminated_literal: UnterminatedLiteralPolicy,

    /// Whether each scan starts from an empty output sequence.
    /// When false, tokens accumulate across scans.
    pub clear_output_on_scan: bool,

    /// Whether to count tokens per kind in the scan metrics
    pub collect_detailed_metrics: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            on_unrecognized_char: env::var(env_vars::LEXICAL_ON_UNRECOGNIZED_CHAR)
                .ok()
                .and_then(|v| UnrecognizedCharPolicy::parse(&v))
                .unwrap_or(UnrecognizedCharPolicy::Skip),
            on_unterminated_literal: env::var(env_vars::LEXICAL_ON_UNTERMINATED_LITERAL)
                .ok()
                .and_then(|v| UnterminatedLiteralPolicy::parse(&v))
                .unwrap_or(UnterminatedLiteralPolicy::BestEffort),
            clear_output_on_scan: env::var(env_vars::LEXICAL_CLEAR_OUTPUT_ON_SCAN)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            collect_detailed_metrics: env::var(env_vars::LEXICAL_DETAILED_METRICS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl LexicalPreferences {
    /// Reject every malformed input instead of recovering
    pub fn strict() -> Self {
        Self {
            on_unrecognized_char: UnrecognizedCharPolicy::Fail,
            on_unterminated_literal: UnterminatedLiteralPolicy::Fail,
            ..Self::default()
        }
    }

    /// Silent recovery with tokens accumulating across scans
    pub fn legacy() -> Self {
        Self {
            on_unrecognized_char: UnrecognizedCharPolicy::Skip,
            on_unterminated_literal: UnterminatedLiteralPolicy::BestEffort,
            clear_output_on_scan: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,

    /// Whether to log per-scan start and completion events
    pub log_scan_events: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
            log_scan_events: env::var(env_vars::LOGGING_LOG_SCAN_EVENTS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Load preferences from TOML; missing tables and keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("{0} already initialized")]
    AlreadyInitialized(&'static str),
}

impl ConfigError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::Parse(_) | Self::Serialize(_) | Self::InvalidValue(_) => {
                codes::system::CONFIGURATION_ERROR
            }
            Self::AlreadyInitialized(_) => codes::system::INITIALIZATION_FAILURE,
        }
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_ON_UNRECOGNIZED_CHAR: &str = "IS_LEXICAL_ON_UNRECOGNIZED_CHAR";
    pub const LEXICAL_ON_UNTERMINATED_LITERAL: &str = "IS_LEXICAL_ON_UNTERMINATED_LITERAL";
    pub const LEXICAL_CLEAR_OUTPUT_ON_SCAN: &str = "IS_LEXICAL_CLEAR_OUTPUT_ON_SCAN";
    pub const LEXICAL_DETAILED_METRICS: &str = "IS_LEXICAL_DETAILED_METRICS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "IS_LOGGING_USE_STRUCTURED";
    pub const LOGGING_MIN_LEVEL: &str = "IS_LOGGING_MIN_LEVEL";
    pub const LOGGING_LOG_SCAN_EVENTS: &str = "IS_LOGGING_LOG_SCAN_EVENTS";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            UnrecognizedCharPolicy::parse("FAIL"),
            Some(UnrecognizedCharPolicy::Fail)
        );
        assert_eq!(
            UnterminatedLiteralPolicy::parse("best_effort"),
            Some(UnterminatedLiteralPolicy::BestEffort)
        );
        assert_eq!(UnterminatedLiteralPolicy::parse("maybe"), None);
    }

    #[test]
    fn test_preset_preferences() {
        let strict = LexicalPreferences::strict();
        assert_eq!(strict.on_unrecognized_char, UnrecognizedCharPolicy::Fail);
        assert_eq!(
            strict.on_unterminated_literal,
            UnterminatedLiteralPolicy::Fail
        );

        let legacy = LexicalPreferences::legacy();
        assert!(!legacy.clear_output_on_scan);
        assert_eq!(legacy.on_unrecognized_char, UnrecognizedCharPolicy::Skip);
    }

    #[test]
    fn test_toml_partial_config() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [lexical]
            on_unrecognized_char = "fail"
            clear_output_on_scan = false

            [logging]
            min_log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.lexical.on_unrecognized_char,
            UnrecognizedCharPolicy::Fail
        );
        assert!(!config.lexical.clear_output_on_scan);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = RuntimeConfig::default();
        config.lexical.on_unterminated_literal = UnterminatedLiteralPolicy::Fail;

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("on_unterminated_literal = \"fail\""));
        assert_eq!(RuntimeConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        let err = RuntimeConfig::from_toml_str("[lexical]\non_unrecognized_char = \"explode\"")
            .unwrap_err();
        assert_matches!(err, ConfigError::Parse(_));
        assert_eq!(err.error_code(), codes::system::CONFIGURATION_ERROR);
    }

    #[test]
    fn test_env_var_names_exist() {
        assert!(env_vars::LEXICAL_ON_UNRECOGNIZED_CHAR.starts_with("IS_"));
        assert!(env_vars::LOGGING_MIN_LEVEL.starts_with("IS_"));
    }
}
