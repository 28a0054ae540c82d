use std::env;

pub const DEFAULT_CONJUNCTION: &str = "and";
pub const DEFAULT_OXFORD_COMMA: bool = true;
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Defaults for the CLI, read from `POSH_*` environment variables.
///
/// Command-line flags always win over these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoshConfig {
    pub conjunction: String,
    pub oxford_comma: bool,
    pub queue_capacity: usize,
    pub log_level: String,
}

impl Default for PoshConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl PoshConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset or unparsable
    /// values fall back to the defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            conjunction: lookup("POSH_CONJUNCTION")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CONJUNCTION.to_string()),
            oxford_comma: lookup("POSH_OXFORD_COMMA")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(DEFAULT_OXFORD_COMMA),
            queue_capacity: lookup("POSH_QUEUE_CAPACITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_QUEUE_CAPACITY),
            log_level: lookup("POSH_LOG_LEVEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    pub fn with_conjunction(mut self, conjunction: impl Into<String>) -> Self {
        self.conjunction = conjunction.into();
        self
    }

    pub fn with_oxford_comma(mut self, enabled: bool) -> Self {
        self.oxford_comma = enabled;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
