//! Error categories shared by every posh error type.
//!
//! Library errors report a category so callers (and the CLI) can react
//! without matching on individual variants.

/// Error category for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller supplied a value the operation cannot accept
    InvalidInput,
    /// A value was well-formed but falls outside what can be represented
    OutOfRange,
    /// Failure outside the caller's control (I/O, serialization)
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::OutOfRange => "out_of_range",
            ErrorCategory::Internal => "internal",
        }
    }

    /// sysexits-style process exit code for this category.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::InvalidInput => 64, // EX_USAGE
            ErrorCategory::OutOfRange => 65,   // EX_DATAERR
            ErrorCategory::Internal => 74,     // EX_IOERR
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invalid_input" => Ok(ErrorCategory::InvalidInput),
            "out_of_range" => Ok(ErrorCategory::OutOfRange),
            "internal" => Ok(ErrorCategory::Internal),
            _ => Err(()),
        }
    }
}
