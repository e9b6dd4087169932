//! Error types for recursion-tasks
//!
//! This module defines the error hierarchy for:
//! - Base conversion argument errors
//! - Configuration and CLI errors
//! - Worker thread errors in the summation demos
//!
//! Design philosophy:
//! - Use thiserror for structured error types in library code
//! - Errors should be actionable - include the offending value
//! - The directory walker never fails: unreadable paths become zero bytes

use thiserror::Error;

/// Top-level error type for the recursion-tasks application
#[derive(Error, Debug)]
pub enum TaskError {
    /// Base conversion errors
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors (menu input/output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// User input could not be parsed
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// A demo thread could not be started
    #[error("Failed to spawn thread '{name}': {reason}")]
    ThreadSpawn { name: String, reason: String },

    /// A demo thread panicked before returning its sum
    #[error("Thread '{name}' panicked")]
    ThreadPanicked { name: String },
}

/// Base conversion errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Base outside the supported digit range
    #[error("Base must be between 2 and 36, got {base}")]
    InvalidBase { base: u32 },
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Empty excluded extension
    #[error("Invalid excluded extension '{suffix}': {reason}")]
    InvalidSuffix { suffix: String, reason: String },

    /// Invalid exclude pattern
    #[error("Invalid exclude pattern '{pattern}': {reason}")]
    InvalidExcludePattern { pattern: String, reason: String },

    /// Invalid thread count for the summation demo
    #[error("Invalid thread count {count}: must be between 1 and {max}")]
    InvalidThreadCount { count: usize, max: usize },

    /// Recursion limit of zero
    #[error("Invalid recursion limit {limit}: must be at least 1")]
    InvalidRecursionLimit { limit: u64 },
}

impl TaskError {
    /// Check if the menu can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TaskError::Io(_))
    }
}

/// Result type alias for TaskError
pub type Result<T> = std::result::Result<T, TaskError>;

/// Result type alias for ConvertError
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_message() {
        let err = ConvertError::InvalidBase { base: 37 };
        assert_eq!(err.to_string(), "Base must be between 2 and 36, got 37");
    }

    #[test]
    fn test_error_conversion() {
        let convert_err = ConvertError::InvalidBase { base: 1 };
        let task_err: TaskError = convert_err.into();
        assert!(matches!(task_err, TaskError::Convert(_)));
        assert!(task_err.is_recoverable());
    }

    #[test]
    fn test_io_error_not_recoverable() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let task_err: TaskError = io.into();
        assert!(!task_err.is_recoverable());
    }
}
