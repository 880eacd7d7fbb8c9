use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, trace};

use crate::{
    error::{Result, ScanError},
    Options,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emptiness {
    /// Nothing left once empty subdirectories are discounted.
    Bare,
    /// Only the marker file is left.
    MarkerOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyDir {
    pub path: PathBuf,
    pub emptiness: Emptiness,
}

/// Empty directories in the order they were found, with a path index for
/// membership tests.
#[derive(Debug, Default)]
pub struct EmptySet {
    dirs: Vec<EmptyDir>,
    index: HashSet<PathBuf>,
}

impl EmptySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains(path)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmptyDir> {
        self.dirs.iter()
    }

    fn push(&mut self, path: PathBuf, emptiness: Emptiness) {
        self.index.insert(path.clone());
        self.dirs.push(EmptyDir { path, emptiness });
    }
}

impl<'a> IntoIterator for &'a EmptySet {
    type Item = &'a EmptyDir;
    type IntoIter = std::slice::Iter<'a, EmptyDir>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Classifies `dirs`, which must be ordered so that every directory comes
/// after all of its subdirectories (as [`crate::collect_dirs`] returns them).
///
/// A directory is empty when, after discounting entries already found
/// empty, nothing is left, or only a regular file named `options.marker`.
pub fn find_empty(dirs: &[PathBuf], options: &Options) -> Result<EmptySet> {
    let mut empties = EmptySet::new();
    for dir in dirs {
        if let Some(emptiness) = classify(dir, &empties, options)? {
            trace!("{} is empty ({:?})", dir.display(), emptiness);
            empties.push(dir.clone(), emptiness);
        }
    }
    debug!("{} of {} directories are empty", empties.len(), dirs.len());
    Ok(empties)
}

fn classify(dir: &Path, empties: &EmptySet, options: &Options) -> Result<Option<Emptiness>> {
    let list_err = |source| ScanError::List {
        path: dir.to_path_buf(),
        source,
    };

    let mut remaining = None;
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        if empties.contains(&entry.path()) {
            continue;
        }
        if remaining.is_some() {
            return Ok(None);
        }
        remaining = Some(entry);
    }

    let Some(entry) = remaining else {
        return Ok(Some(Emptiness::Bare));
    };
    if entry.file_name() != options.marker {
        return Ok(None);
    }
    let file_type = entry.file_type().map_err(list_err)?;
    if file_type.is_file() {
        Ok(Some(Emptiness::MarkerOnly))
    } else {
        Ok(None)
    }
}
