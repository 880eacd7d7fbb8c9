use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScanError};

/// Resolves every input to its canonical path and drops the ones that are
/// equal to, or nested inside, another input.
///
/// The returned roots keep the order in which they were first accepted. A
/// later input that contains earlier roots takes the place of the first root
/// it replaces.
pub fn normalize_roots<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>> {
    let mut roots: Vec<PathBuf> = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let actual = path.canonicalize().map_err(|source| ScanError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;
        accept(&mut roots, actual);
    }
    Ok(roots)
}

fn accept(roots: &mut Vec<PathBuf>, candidate: PathBuf) {
    if let Some(existing) = roots.iter().find(|root| candidate.starts_with(root)) {
        debug!(
            "skipping {}: already covered by {}",
            candidate.display(),
            existing.display()
        );
        return;
    }

    match roots.iter().position(|root| root.starts_with(&candidate)) {
        Some(first) => {
            roots.retain(|root| {
                let covered = root.starts_with(&candidate);
                if covered {
                    debug!(
                        "dropping {}: covered by {}",
                        root.display(),
                        candidate.display()
                    );
                }
                !covered
            });
            roots.insert(first.min(roots.len()), candidate);
        }
        None => {
            debug!("accepting root {}", candidate.display());
            roots.push(candidate);
        }
    }
}
