use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

/// Everything that can abort a run. None of these are retried.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot resolve {}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot list {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ScanError {
    /// The path the failing operation was working on, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ScanError::Resolve { path, .. }
            | ScanError::Walk { path, .. }
            | ScanError::List { path, .. }
            | ScanError::Remove { path, .. } => Some(path.as_path()),
            ScanError::Output(_) => None,
        }
    }
}
