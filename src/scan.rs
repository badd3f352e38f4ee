//! Line-oriented scanning shared by the block and hunk splitters.
//!
//! Diff structure is recognized by marker lines (`diff --git`, `@@`) that
//! start at the beginning of a line. Everything here works on byte offsets
//! into the original text so callers can hand out zero-copy slices.

use nom::IResult;
use nom::Parser;
use nom::bytes::complete::{tag, take_till};
use nom::character::complete::char;
use nom::combinator::{opt, recognize};

/// A single line of text, including its `\n` terminator when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Byte offset of the first character of the line
    pub offset: usize,
    /// Line text including the terminator (a `\r` before `\n` is kept)
    pub text: &'a str,
}

impl Line<'_> {
    /// Byte offset just past the end of the line
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Iterator over the lines of a text, see [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let (rest, text) = line(self.rest).ok()?;
        let item = Line {
            offset: self.offset,
            text,
        };
        self.offset += text.len();
        self.rest = rest;
        Some(item)
    }
}

/// Iterate over every line of `text`.
///
/// The last line may lack a terminator. Empty input yields nothing.
pub fn lines(text: &str) -> Lines<'_> {
    Lines {
        rest: text,
        offset: 0,
    }
}

/// Recognize one line: everything up to and including the next `\n`.
fn line(input: &str) -> IResult<&str, &str> {
    recognize((take_till(|c: char| c == '\n'), opt(char('\n')))).parse(input)
}

/// Check whether a line begins with the literal `marker` token
pub fn is_marker(line: &str, marker: &str) -> bool {
    let result: IResult<&str, &str> = tag(marker).parse(line);
    result.is_ok()
}

/// Byte ranges of one marker-delimited section of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Offset of the marker line
    pub start: usize,
    /// Offset just past the last header line
    pub header_end: usize,
    /// Offset just past the last body line
    pub end: usize,
}

impl Section {
    pub fn header<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.header_end]
    }

    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.header_end..self.end]
    }

    /// Header and body together, exactly as they appear in `text`
    pub fn span<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Split `text` into sections that each start at a line beginning with `marker`.
///
/// A section's header is the marker line plus the next `header_lines - 1`
/// lines, whatever they contain. If the text ends first, the header keeps the
/// lines that exist and the body is empty. The body runs up to the next marker
/// line or the end of the text. Lines before the first marker are skipped.
pub fn sections(text: &str, marker: &str, header_lines: usize) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut lines = lines(text).peekable();

    while let Some(first) = lines.find(|line| is_marker(line.text, marker)) {
        let mut header_end = first.end();
        for line in lines.by_ref().take(header_lines.saturating_sub(1)) {
            header_end = line.end();
        }

        let mut end = header_end;
        while let Some(line) = lines.next_if(|line| !is_marker(line.text, marker)) {
            end = line.end();
        }

        sections.push(Section {
            start: first.offset,
            header_end,
            end,
        });
    }

    sections
}
