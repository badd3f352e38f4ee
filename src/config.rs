/// Settings for one filter run.
///
/// `inverse` defaults to false, which keeps the hunks that match `pattern`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Regular expression searched for in each hunk's content
    pub pattern: String,
    /// Keep the hunks that do NOT match instead
    pub inverse: bool,
}

impl FilterConfig {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            inverse: false,
        }
    }

    #[must_use]
    pub fn inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }
}
