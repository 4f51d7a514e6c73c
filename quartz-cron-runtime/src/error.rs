//! Error types for the cron editor runtime.
//!
//! Only integration mistakes are errors. A malformed cron string is reported
//! through [`ValidationResult`](crate::ValidationResult) instead.

use thiserror::Error;

/// Errors that can occur while configuring or driving the editor.
#[derive(Debug, Error)]
pub enum CronEditorError {
    /// Unknown schedule category or sub-category tag
    #[error("Invalid cron tab selection: {0}")]
    InvalidCategorySelection(String),

    /// `default_time` is not a valid `HH:MM:SS` value
    #[error("Invalid default time '{0}', expected HH:MM:SS")]
    InvalidDefaultTime(String),

    /// Configuration source could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, CronEditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CronEditorError::InvalidCategorySelection("daily/everyHour".to_string());
        assert!(err.to_string().contains("Invalid cron tab selection"));
        assert!(err.to_string().contains("daily/everyHour"));

        let err = CronEditorError::InvalidDefaultTime("25:00".to_string());
        assert!(err.to_string().contains("HH:MM:SS"));
    }
}
