//! CLI errors with categories, suggestions and sysexits-style exit codes.

use posh_common::ErrorCategory;
use posh_core::CoreError;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CliError::Core(e) => e.category(),
            CliError::InvalidTimestamp { .. } => ErrorCategory::InvalidInput,
            CliError::Output(_) | CliError::Serialize(_) => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Core(e) => Some(e.suggestion()),
            CliError::InvalidTimestamp { .. } => {
                Some("Use RFC 3339, e.g. 2015-11-27T15:32:00-08:00.".to_string())
            }
            CliError::Output(_) | CliError::Serialize(_) => None,
        }
    }

    pub fn to_json(&self) -> Value {
        let context = match self {
            CliError::Core(e) => e.context(),
            CliError::InvalidTimestamp { input, reason } => json!({
                "input": input,
                "reason": reason
            }),
            CliError::Output(e) => json!({ "reason": e.to_string() }),
            CliError::Serialize(e) => json!({ "reason": e.to_string() }),
        };
        json!({
            "success": false,
            "error": self.to_string(),
            "category": self.category().as_str(),
            "context": context,
            "suggestion": self.suggestion()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_keep_their_category() {
        let err: CliError = CoreError::PatternGroupCount {
            pattern: "abc".into(),
            groups: 0,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::InvalidInput);
        assert_eq!(err.exit_code(), 64);
        assert!(err.to_string().contains("0 capture groups"));
    }

    #[test]
    fn test_timestamp_error_json() {
        let err = CliError::InvalidTimestamp {
            input: "yesterday".into(),
            reason: "input contains invalid characters".into(),
        };
        let value = err.to_json();
        assert_eq!(value["success"], false);
        assert_eq!(value["category"], "invalid_input");
        assert_eq!(value["context"]["input"], "yesterday");
        assert!(value["suggestion"].as_str().unwrap().contains("RFC 3339"));
    }

    #[test]
    fn test_io_error_is_internal() {
        let err = CliError::from(std::io::Error::other("broken pipe"));
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.exit_code(), 74);
        assert!(err.suggestion().is_none());
    }
}
