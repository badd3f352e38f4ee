use error_set::error_set;
use std::borrow::Cow;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

mod config;
mod diff;
mod emit;
mod scan;
mod select;

pub use config::FilterConfig;
pub use diff::{DiffBlock, DiffDocument, Hunk};
pub use emit::{Emitter, normalize_line_endings};
pub use select::HunkSelector;

error_set! {
    /// Top-level error for diff-filter runs
    DiffFilterError := ConfigError || FileError

    /// Errors in the run configuration, raised before any file is touched
    ConfigError := {
        #[display("Missing required argument: {name}")]
        MissingArgument { name: String },
        #[display("Invalid hunk pattern '{pattern}': {message}")]
        InvalidPattern { pattern: String, message: String },
    }

    /// Errors reading the input diff or writing the filtered one
    FileError := {
        #[display("Failed to read {path}: {message}")]
        ReadInput { path: String, message: String },
        #[display("Failed to create {path}: {message}")]
        CreateOutput { path: String, message: String },
        #[display("Failed to write {path}: {message}")]
        WriteOutput { path: String, message: String },
    }
}

/// Counters describing one filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// File blocks found in the input
    pub blocks: usize,
    /// File blocks whose header was written
    pub blocks_written: usize,
    /// Hunks found across all blocks
    pub hunks: usize,
    /// Hunks written to the output
    pub hunks_kept: usize,
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kept {} of {} hunks in {} of {} files",
            self.hunks_kept, self.hunks, self.blocks_written, self.blocks
        )
    }
}

/// Main interface for filtering the hunks of a unified diff
#[derive(Debug, Clone)]
pub struct DiffFilter {
    selector: HunkSelector,
}

impl DiffFilter {
    /// Create a filter from a configuration, compiling its pattern
    ///
    /// # Examples
    /// ```
    /// # use diff_filter::{DiffFilter, FilterConfig};
    /// let filter = DiffFilter::new(&FilterConfig::new("TODO")).unwrap();
    /// let out = filter.filter_str("diff --git a/x b/x\nindex 1..2\n--- a/x\n+++ b/x\n@@ -1 +1 @@\n+TODO\n");
    /// assert!(out.contains("+TODO"));
    /// ```
    pub fn new(config: &FilterConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            selector: HunkSelector::new(config)?,
        })
    }

    pub fn selector(&self) -> &HunkSelector {
        &self.selector
    }

    /// Filter diff text into `out`.
    ///
    /// If the text has no `diff --git` block nothing is written at all.
    pub fn filter<W: Write>(&self, input: &str, out: W) -> io::Result<FilterSummary> {
        let blocks = DiffDocument::new(input).blocks();
        if blocks.is_empty() {
            return Ok(FilterSummary::default());
        }

        let mut emitter = Emitter::new(out);
        let summary = self.emit_blocks(&blocks, &mut emitter)?;
        emitter.flush()?;
        Ok(summary)
    }

    /// Filter diff text and return the output
    pub fn filter_str(&self, input: &str) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.filter(input, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Filter the diff at `input` into a new file at `output`.
    ///
    /// The output file is only created when the input has at least one
    /// `diff --git` block. Invalid UTF-8 in the input is replaced.
    ///
    /// # Examples
    /// ```no_run
    /// # use diff_filter::{DiffFilter, FilterConfig};
    /// # use std::path::Path;
    /// let filter = DiffFilter::new(&FilterConfig::new("unsafe").inverse(true)).unwrap();
    /// let summary = filter.filter_file(Path::new("in.diff"), Path::new("out.diff")).unwrap();
    /// println!("{summary}");
    /// ```
    pub fn filter_file(&self, input: &Path, output: &Path) -> Result<FilterSummary, DiffFilterError> {
        let bytes = fs::read(input).map_err(|e| FileError::ReadInput {
            path: input.display().to_string(),
            message: e.to_string(),
        })?;

        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            warn!(path = %input.display(), "input is not valid UTF-8, invalid bytes replaced");
        }

        let blocks = DiffDocument::new(&text).blocks();
        if blocks.is_empty() {
            info!(path = %input.display(), "no diff --git blocks found, output not created");
            return Ok(FilterSummary::default());
        }

        let write_error = |e: io::Error| FileError::WriteOutput {
            path: output.display().to_string(),
            message: e.to_string(),
        };

        let file = File::create(output).map_err(|e| FileError::CreateOutput {
            path: output.display().to_string(),
            message: e.to_string(),
        })?;

        let mut emitter = Emitter::new(BufWriter::new(file));
        let summary = self.emit_blocks(&blocks, &mut emitter).map_err(write_error)?;
        emitter.flush().map_err(write_error)?;

        info!(%summary, output = %output.display(), "filtered diff written");
        Ok(summary)
    }

    fn emit_blocks<W: Write>(
        &self,
        blocks: &[DiffBlock<'_>],
        emitter: &mut Emitter<W>,
    ) -> io::Result<FilterSummary> {
        let mut summary = FilterSummary {
            blocks: blocks.len(),
            ..FilterSummary::default()
        };

        for block in blocks {
            let path = block.path().unwrap_or("<unknown>");
            let decisions: Vec<(Hunk<'_>, bool)> = block
                .hunks()
                .into_iter()
                .map(|hunk| {
                    let included = self.selector.includes(&hunk);
                    debug!(path, hunk = hunk.header().trim_end(), included, "hunk");
                    (hunk, included)
                })
                .collect();

            summary.hunks += decisions.len();
            summary.hunks_kept += decisions.iter().filter(|(_, included)| *included).count();

            if emitter.emit_block(block.header, decisions)? {
                summary.blocks_written += 1;
            } else {
                debug!(path, "no hunks kept, block skipped");
            }
        }

        Ok(summary)
    }
}
