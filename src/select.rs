use crate::config::FilterConfig;
use crate::diff::Hunk;
use crate::ConfigError;
use regex::{Regex, RegexBuilder};

/// Decides which hunks survive the filter.
///
/// The pattern is searched anywhere in the hunk content (not the `@@` line)
/// with multi-line mode on, so `^` and `$` match at line boundaries.
#[derive(Debug, Clone)]
pub struct HunkSelector {
    pattern: Regex,
    inverse: bool,
}

impl HunkSelector {
    /// Compile the pattern from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the pattern does not compile.
    pub fn new(config: &FilterConfig) -> Result<Self, ConfigError> {
        let pattern = RegexBuilder::new(&config.pattern)
            .multi_line(true)
            .build()
            .map_err(|e| ConfigError::InvalidPattern {
                pattern: config.pattern.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            pattern,
            inverse: config.inverse,
        })
    }

    /// Whether the pattern occurs in `content`, before inversion
    pub fn matches(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }

    pub fn includes(&self, hunk: &Hunk<'_>) -> bool {
        self.matches(hunk.content()) != self.inverse
    }

    pub fn is_inverse(&self) -> bool {
        self.inverse
    }
}
