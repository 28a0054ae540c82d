//! Errors raised by the core helpers.

use posh_common::ErrorCategory;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {reason}")]
    PatternSyntax { pattern: String, reason: String },

    /// The pattern compiled but does not have exactly one capture group.
    #[error("Pattern '{pattern}' has {groups} capture groups, expected exactly 1")]
    PatternGroupCount { pattern: String, groups: usize },

    #[error("Invalid {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

impl CoreError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// True for both pattern failures: bad syntax and wrong group count.
    pub fn is_pattern_error(&self) -> bool {
        matches!(
            self,
            CoreError::PatternSyntax { .. } | CoreError::PatternGroupCount { .. }
        )
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CoreError::PatternSyntax { .. }
            | CoreError::PatternGroupCount { .. }
            | CoreError::InvalidArgument { .. } => ErrorCategory::InvalidInput,
            CoreError::DateOutOfRange(_) => ErrorCategory::OutOfRange,
        }
    }

    /// Returns structured context about the error for debugging.
    pub fn context(&self) -> Value {
        match self {
            CoreError::PatternSyntax { pattern, reason } => json!({
                "pattern": pattern,
                "reason": reason
            }),
            CoreError::PatternGroupCount { pattern, groups } => json!({
                "pattern": pattern,
                "groups": groups
            }),
            CoreError::InvalidArgument { name, reason } => json!({
                "argument": name,
                "reason": reason
            }),
            CoreError::DateOutOfRange(value) => json!({
                "value": value
            }),
        }
    }

    pub fn suggestion(&self) -> String {
        match self {
            CoreError::PatternSyntax { .. } => {
                "Check the pattern syntax; escape literal characters such as '$' or '.'."
                    .to_string()
            }
            CoreError::PatternGroupCount { groups, .. } if *groups == 0 => {
                "Wrap the part to extract in parentheses.".to_string()
            }
            CoreError::PatternGroupCount { .. } => {
                "Use (?:...) for groups that should not be captured.".to_string()
            }
            CoreError::InvalidArgument { name, .. } => {
                format!("Pass a valid value for {}.", name)
            }
            CoreError::DateOutOfRange(_) => {
                "Use a date well inside the supported calendar range.".to_string()
            }
        }
    }
}
