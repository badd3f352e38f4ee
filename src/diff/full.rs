use super::file::DiffBlock;

/// A complete unified diff as read from the input.
///
/// The text is read once and never modified; blocks and hunks borrow from it.
#[derive(Debug, Clone, Copy)]
pub struct DiffDocument<'a> {
    text: &'a str,
}

impl<'a> DiffDocument<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Per-file blocks in document order
    #[must_use]
    pub fn blocks(&self) -> Vec<DiffBlock<'a>> {
        DiffBlock::split(self.text)
    }
}
