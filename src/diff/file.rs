use super::hunk::Hunk;
use crate::scan;

/// The diff for a single file.
///
/// The header is the `diff --git` line plus the three lines after it
/// (usually `index`, `---` and `+++`). The body holds the hunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffBlock<'a> {
    pub header: &'a str,
    pub body: &'a str,
}

impl<'a> DiffBlock<'a> {
    /// Token that starts a file diff
    pub const MARKER: &'static str = "diff --git";
    /// Number of lines in a block header, marker line included
    pub const HEADER_LINES: usize = 4;

    /// Split a complete diff into file blocks, in order.
    ///
    /// Header lines are taken by count and never inspected. Text before the
    /// first `diff --git` line is not part of any block.
    pub fn split(text: &'a str) -> Vec<Self> {
        scan::sections(text, Self::MARKER, Self::HEADER_LINES)
            .into_iter()
            .map(|section| DiffBlock {
                header: section.header(text),
                body: section.body(text),
            })
            .collect()
    }

    /// Hunks in the block body, in order
    #[must_use]
    pub fn hunks(&self) -> Vec<Hunk<'a>> {
        Hunk::split(self.body)
    }

    /// File path from the `+++ b/path` header line, if there is one.
    ///
    /// Only used for reporting; blocks without it are filtered the same way.
    pub fn path(&self) -> Option<&'a str> {
        self.header
            .lines()
            .find_map(|line| line.strip_prefix("+++ b/"))
            .filter(|path| !path.is_empty())
    }
}
