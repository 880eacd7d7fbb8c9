use std::{ffi::OsStr, fs};

use termcolor::WriteColor;
use tracing::info;

use crate::{
    error::{Result, ScanError},
    evaluate::{EmptyDir, EmptySet, Emptiness},
    printer::{Printable, Printer},
    Options,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub found: usize,
    pub removed: usize,
}

/// Prints the header and every empty directory, deleting each one right
/// after it is printed when `options.delete` is set.
///
/// Entries are handled in the order they were found, so children always go
/// before their parents. The first failed deletion stops the run; whatever
/// was already removed stays removed.
pub fn execute<P: Printer>(
    empties: &EmptySet,
    options: &Options,
    printer: &P,
    stream: &mut dyn WriteColor,
) -> Result<Outcome> {
    let mut outcome = Outcome::default();
    printer.print(
        Printable::Header {
            delete: options.delete,
        },
        stream,
    )?;
    for dir in empties {
        printer.print(Printable::EmptyDir(dir), stream)?;
        outcome.found += 1;
        if options.delete {
            stream.flush()?;
            remove_empty(dir, &options.marker)?;
            outcome.removed += 1;
        }
    }
    Ok(outcome)
}

/// Removes one empty directory, its marker file first when it has one.
///
/// The directory itself is removed non-recursively, so anything that
/// appeared in it since the scan makes this fail instead of being lost.
pub fn remove_empty(dir: &EmptyDir, marker: &OsStr) -> Result<()> {
    if dir.emptiness == Emptiness::MarkerOnly {
        let marker = dir.path.join(marker);
        fs::remove_file(&marker).map_err(|source| ScanError::Remove {
            path: marker.clone(),
            source,
        })?;
    }
    fs::remove_dir(&dir.path).map_err(|source| ScanError::Remove {
        path: dir.path.clone(),
        source,
    })?;
    info!("removed {}", dir.path.display());
    Ok(())
}
