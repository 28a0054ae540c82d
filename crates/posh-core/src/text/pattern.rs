//! Whole-input regex matching with a single capture group.

use regex::Regex;
use regex_syntax::Parser;
use tracing::debug;

use crate::CoreError;

/// A compiled pattern with exactly one capture group, matched against the
/// entire input.
///
/// The pattern is parsed on its own first, then its normalised form is
/// anchored as `^(?:...)$`. Unbalanced text or a trailing `(?x)` comment in
/// the source therefore cannot reach the anchors.
#[derive(Debug, Clone)]
pub struct SingleGroupPattern {
    source: String,
    regex: Regex,
}

impl SingleGroupPattern {
    pub fn new(pattern: &str) -> Result<Self, CoreError> {
        let syntax_error = |reason: String| {
            debug!(pattern, %reason, "pattern failed to compile");
            CoreError::PatternSyntax {
                pattern: pattern.to_string(),
                reason,
            }
        };

        let hir = Parser::new()
            .parse(pattern)
            .map_err(|e| syntax_error(e.to_string()))?;

        let groups = hir.properties().explicit_captures_len();
        if groups != 1 {
            debug!(pattern, groups, "pattern rejected: wrong capture group count");
            return Err(CoreError::PatternGroupCount {
                pattern: pattern.to_string(),
                groups,
            });
        }

        // Printed Hir is balanced and carries no flags or comments.
        let anchored = format!("^(?:{})$", hir);
        let regex = Regex::new(&anchored).map_err(|e| syntax_error(e.to_string()))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as the caller wrote it.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the captured text when the whole input matches and the group
    /// took part in the match.
    pub fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Compiles `pattern` and extracts its group from `text` in one call.
///
/// `Err` means the pattern itself is unusable; `Ok(None)` means it simply
/// did not match.
pub fn extract_match(pattern: &str, text: &str) -> Result<Option<String>, CoreError> {
    let compiled = SingleGroupPattern::new(pattern)?;
    Ok(compiled.extract(text).map(str::to_string))
}
