use crate::diff::Hunk;
use std::borrow::Cow;
use std::io::{self, Write};

/// Writes surviving blocks and hunks with LF line endings.
pub struct Emitter<W: Write> {
    out: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one block: its header once, then every included hunk.
    ///
    /// `hunks` pairs each hunk with its inclusion decision, in block order.
    /// Nothing is written unless at least one hunk is included. Returns whether
    /// the header was written.
    pub fn emit_block<'a, I>(&mut self, header: &str, hunks: I) -> io::Result<bool>
    where
        I: IntoIterator<Item = (Hunk<'a>, bool)>,
    {
        let mut header_written = false;

        for (hunk, included) in hunks {
            if !included {
                continue;
            }
            if !header_written {
                self.write_normalized(header)?;
                header_written = true;
            }
            self.write_normalized(hunk.span())?;
        }

        Ok(header_written)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_normalized(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(normalize_line_endings(text).as_bytes())
    }
}

/// Replace every `\r\n` with `\n`. Lone `\r` characters are left alone.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    const HEADER: &str = "diff --git a/x b/x\nindex 1..2\n--- a/x\n+++ b/x\n";

    fn emit(header: &str, body: &str, decisions: &[bool]) -> (String, bool) {
        let hunks = Hunk::split(body);
        assert_eq!(hunks.len(), decisions.len());

        let mut emitter = Emitter::new(Vec::new());
        let written = emitter
            .emit_block(header, hunks.into_iter().zip(decisions.iter().copied()))
            .unwrap();
        (String::from_utf8(emitter.into_inner()).unwrap(), written)
    }

    #[test]
    fn header_written_before_first_included_hunk() {
        let body = "@@ -1 +1 @@\n-a\n+b\n@@ -5 +5 @@\n-c\n+d\n";
        let (out, written) = emit(HEADER, body, &[false, true]);
        assert!(written);
        insta::assert_snapshot!(out, @r"
        diff --git a/x b/x
        index 1..2
        --- a/x
        +++ b/x
        @@ -5 +5 @@
        -c
        +d
        ");
    }

    #[test]
    fn header_written_once_for_many_hunks() {
        let body = "@@ -1 +1 @@\n-a\n@@ -5 +5 @@\n-c\n@@ -9 +9 @@\n-e\n";
        let (out, _) = emit(HEADER, body, &[true, false, true]);
        assert_eq!(out.matches("diff --git").count(), 1);
        assert_eq!(out, format!("{HEADER}@@ -1 +1 @@\n-a\n@@ -9 +9 @@\n-e\n"));
    }

    #[test]
    fn nothing_written_without_included_hunks() {
        let body = "@@ -1 +1 @@\n-a\n@@ -5 +5 @@\n-c\n";
        let (out, written) = emit(HEADER, body, &[false, false]);
        assert!(!written);
        assert_eq!(out, "");
    }

    #[test]
    fn nothing_written_without_hunks() {
        let (out, written) = emit(HEADER, "", &[]);
        assert!(!written);
        assert_eq!(out, "");
    }

    #[test]
    fn crlf_normalized_in_header_and_hunks() {
        let header = "diff --git a/x b/x\r\nindex 1..2\r\n--- a/x\r\n+++ b/x\r\n";
        let body = "@@ -1 +1 @@\r\n-a\r\n+b\r\n";
        let (out, _) = emit(header, body, &[true]);
        assert!(!out.contains("\r\n"));
        assert_eq!(out, format!("{HEADER}@@ -1 +1 @@\n-a\n+b\n"));
    }

    #[test]
    fn normalize_leaves_lone_carriage_return() {
        assert_eq!(normalize_line_endings("a\rb\r\n"), "a\rb\n");
        assert!(matches!(normalize_line_endings("a\nb\n"), Cow::Borrowed(_)));
    }
}
