//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, and DefaultLogger.
//! Global-logger replacement is exercised in tests/logging_integration_tests.rs.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_equality() {
    assert_eq!(LogSeverity::Info, LogSeverity::Info);
    assert_ne!(LogSeverity::Trace, LogSeverity::Error);
}

#[test]
fn test_log_severity_copy() {
    let sev1 = LogSeverity::Warn;
    let sev2 = sev1; // Copy, not move
    assert_eq!(sev1, sev2);
    assert_eq!(sev1, LogSeverity::Warn);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

fn create_test_entry(severity: LogSeverity) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "tether::Tests".to_string(),
        message: "test message".to_string(),
        file: None,
        line: None,
    }
}

#[test]
fn test_log_entry_fields() {
    let entry = create_test_entry(LogSeverity::Info);
    assert_eq!(entry.severity, LogSeverity::Info);
    assert_eq!(entry.source, "tether::Tests");
    assert_eq!(entry.message, "test message");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_clone() {
    let entry = create_test_entry(LogSeverity::Warn);
    let cloned = entry.clone();
    assert_eq!(cloned.severity, entry.severity);
    assert_eq!(cloned.source, entry.source);
    assert_eq!(cloned.message, entry.message);
}

#[test]
fn test_log_entry_with_location() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "tether::Tests".to_string(),
        message: "boom".to_string(),
        file: Some("frame_loop.rs"),
        line: Some(42),
    };
    assert_eq!(entry.file, Some("frame_loop.rs"));
    assert_eq!(entry.line, Some(42));
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger;
    logger.log(&create_test_entry(LogSeverity::Trace));
    logger.log(&create_test_entry(LogSeverity::Info));

    let mut error_entry = create_test_entry(LogSeverity::Error);
    error_entry.file = Some("log_tests.rs");
    error_entry.line = Some(1);
    logger.log(&error_entry);
}
