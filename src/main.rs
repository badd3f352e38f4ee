use clap::Parser;
use diff_filter::DiffFilter;
use std::process::ExitCode;

mod cli;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    cli::setup_logging(args.verbose, args.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(shell) = args.completions {
        cli::print_completions(shell);
        return Ok(());
    }
    if args.man {
        cli::print_man()?;
        return Ok(());
    }

    let config = args.filter_config()?;
    let (source, destination) = args.paths()?;

    let summary = DiffFilter::new(&config)?.filter_file(source, destination)?;
    tracing::info!(%summary, "done");

    Ok(())
}
