use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, ValueEnum};
use termcolor::ColorChoice;

use emptydirs::{Options, DEFAULT_MARKER, DEFAULT_VCS_DIR};

const AFTER_HELP: &str = "Copyright (c) 2018 Richard Wilkes\nMozilla Public License Version 2.0";

#[derive(Parser, Debug)]
#[command(name = "emptydirs", version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// directories to scan for empty directories (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// delete all empty directories found
    #[arg(long)]
    pub delete: bool,

    /// name of the marker file that does not keep a directory alive
    #[arg(long, value_name = "NAME", default_value = DEFAULT_MARKER)]
    pub marker: OsString,

    /// name of the version control directory whose contents are never scanned
    #[arg(long, value_name = "NAME", default_value = DEFAULT_VCS_DIR)]
    pub vcs_dir: OsString,

    /// increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// do not print the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// when to use colors
    #[arg(long, value_enum, default_value_t = Color::Auto)]
    pub color: Color,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorChoice {
    fn from(color: Color) -> Self {
        match color {
            Color::Auto => ColorChoice::Auto,
            Color::Always => ColorChoice::Always,
            Color::Never => ColorChoice::Never,
        }
    }
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            marker: self.marker.clone(),
            vcs_dir: self.vcs_dir.clone(),
            delete: self.delete,
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
