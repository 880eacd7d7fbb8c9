//! Find directories that are effectively empty and optionally remove them.
//!
//! A directory is empty when nothing is left in it after discounting
//! subdirectories that are themselves empty and, at most, a single marker
//! file (`.DS_Store` by default). The pipeline runs in four strictly
//! sequential steps:
//!
//! 1. [`normalize_roots`] canonicalizes the input paths and drops the ones
//!    already covered by another root.
//! 2. [`collect_dirs`] walks every root and returns all directories, deepest
//!    first.
//! 3. [`find_empty`] classifies each directory in a single pass.
//! 4. [`execute()`] reports the result and, when asked, deletes it.

use std::ffi::OsString;

pub mod error;
pub mod evaluate;
pub mod execute;
pub mod printer;
pub mod roots;
pub mod walk;

pub use error::{Result, ScanError};
pub use evaluate::{find_empty, EmptyDir, EmptySet, Emptiness};
pub use execute::{execute, remove_empty, Outcome};
pub use roots::normalize_roots;
pub use walk::collect_dirs;

pub const DEFAULT_MARKER: &str = ".DS_Store";
pub const DEFAULT_VCS_DIR: &str = ".git";

/// Settings shared by every stage of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// File name that does not keep a directory from being empty.
    pub marker: OsString,
    /// Directory name that is listed but never descended into.
    pub vcs_dir: OsString,
    /// Whether empty directories are deleted or only reported.
    pub delete: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            marker: OsString::from(DEFAULT_MARKER),
            vcs_dir: OsString::from(DEFAULT_VCS_DIR),
            delete: false,
        }
    }
}
