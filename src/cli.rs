use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use diff_filter::{ConfigError, FilterConfig};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "diff-filter", version)]
#[command(about = "Keep the hunks of a unified diff that match a regular expression")]
pub struct Args {
    /// Input diff file
    #[arg(
        short = 's',
        long = "source",
        visible_alias = "input",
        value_name = "FILE",
        required_unless_present_any = ["completions", "man"]
    )]
    pub source: Option<PathBuf>,

    /// Output diff file (not created when the input has no file diffs)
    #[arg(
        short = 'd',
        long = "destination",
        visible_alias = "output",
        value_name = "FILE",
        required_unless_present_any = ["completions", "man"]
    )]
    pub destination: Option<PathBuf>,

    /// Regular expression searched for in each hunk's content (multi-line mode)
    #[arg(
        short = 'r',
        long = "regex",
        visible_alias = "pattern",
        value_name = "PATTERN",
        required_unless_present_any = ["completions", "man"]
    )]
    pub regex: Option<String>,

    /// Keep the hunks that do NOT match the pattern
    #[arg(short, long)]
    pub inverse: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,

    /// Print a man page and exit
    #[arg(long, exclusive = true)]
    pub man: bool,
}

impl Args {
    /// Build the filter configuration from the pattern flags
    pub fn filter_config(&self) -> Result<FilterConfig, ConfigError> {
        let pattern = self.regex.as_ref().ok_or_else(|| missing("--regex"))?;
        Ok(FilterConfig::new(pattern.as_str()).inverse(self.inverse))
    }

    /// Input and output paths
    pub fn paths(&self) -> Result<(&Path, &Path), ConfigError> {
        let source = self.source.as_deref().ok_or_else(|| missing("--source"))?;
        let destination = self
            .destination
            .as_deref()
            .ok_or_else(|| missing("--destination"))?;
        Ok((source, destination))
    }
}

fn missing(name: &str) -> ConfigError {
    ConfigError::MissingArgument {
        name: name.to_string(),
    }
}

pub fn print_completions(shell: Shell) {
    let mut cmd = Args::command();
    clap_complete::generate(shell, &mut cmd, "diff-filter", &mut io::stdout());
}

pub fn print_man() -> io::Result<()> {
    clap_mangen::Man::new(Args::command()).render(&mut io::stdout())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the flags.
pub fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
