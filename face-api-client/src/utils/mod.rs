//! Utility modules.

/// Timestamp parsing for service payloads.
pub mod datetime;

/// Log sanitization utilities to keep secrets out of logs.
pub mod log_sanitizer;
