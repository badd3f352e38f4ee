use crate::scan;

/// A single hunk from a diff block.
///
/// Borrows its text from the input. The hunk header is the `@@` line itself
/// and the content is everything after it up to the next hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hunk<'a> {
    span: &'a str,
    header_len: usize,
}

impl<'a> Hunk<'a> {
    /// Token that starts a hunk header line
    pub const MARKER: &'static str = "@@";

    /// Split a block body into its hunks, in order.
    ///
    /// Text before the first `@@` line is not part of any hunk.
    pub fn split(body: &'a str) -> Vec<Self> {
        scan::sections(body, Self::MARKER, 1)
            .into_iter()
            .map(|section| Hunk {
                span: section.span(body),
                header_len: section.header_end - section.start,
            })
            .collect()
    }

    /// The `@@ ... @@` line, including its terminator
    pub fn header(&self) -> &'a str {
        &self.span[..self.header_len]
    }

    /// Text following the header line, possibly empty
    pub fn content(&self) -> &'a str {
        &self.span[self.header_len..]
    }

    /// Header line and content exactly as they appear in the input
    pub fn span(&self) -> &'a str {
        self.span
    }
}
