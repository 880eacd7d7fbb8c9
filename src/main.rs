use std::{io::IsTerminal, path::PathBuf, time::Instant};

use clap::Parser;
use emptydirs::{
    collect_dirs, execute, find_empty, normalize_roots,
    printer::{Printable, Printer, Stats, TerminalPrinter},
    ScanError,
};
use termcolor::{ColorChoice, StandardStream};

use crate::cli::{Cli, Color};

mod cli;

/// Errors from `run` end the process with a single `Error:` line and status 1.
pub fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .with_target(false)
        .init();

    if let Err(err) = run(&cli) {
        let mut stderr = stderr_stream(cli.color);
        // nothing more useful to do if stderr is gone too
        let _ = TerminalPrinter.print(Printable::Error(format!("Error: {err}")), &mut stderr);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let start = Instant::now();
    let options = cli.options();

    let paths = if cli.paths.is_empty() {
        let cwd = std::env::current_dir().map_err(|source| ScanError::Resolve {
            path: PathBuf::from("."),
            source,
        })?;
        vec![cwd]
    } else {
        cli.paths.clone()
    };

    let roots = normalize_roots(&paths)?;
    let dirs = collect_dirs(&roots, &options.vcs_dir)?;
    let empties = find_empty(&dirs, &options)?;

    let printer = TerminalPrinter;
    let choice = color_choice(cli.color, std::io::stdout().is_terminal());
    let mut stdout = StandardStream::stdout(choice);
    let outcome = execute(&empties, &options, &printer, &mut stdout)?;

    if !cli.quiet {
        let stats = Stats {
            empty_dirs: outcome.found,
            scanned_dirs: dirs.len(),
            removed_dirs: options.delete.then_some(outcome.removed),
            duration: start.elapsed(),
        };
        printer.print(Printable::Stats(stats), &mut stderr_stream(cli.color))?;
    }
    Ok(())
}

fn color_choice(color: Color, is_terminal: bool) -> ColorChoice {
    match color {
        Color::Auto if !is_terminal => ColorChoice::Never,
        color => color.into(),
    }
}

fn stderr_stream(color: Color) -> StandardStream {
    StandardStream::stderr(color_choice(color, std::io::stderr().is_terminal()))
}
