use std::{
    cmp::Ordering,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{Result, ScanError};

/// Collects every directory under `roots`, roots included, ordered deepest
/// first (see [`deepest_first`]).
///
/// Symlinks are never followed. A directory named `vcs_dir` is listed but
/// its contents are not.
pub fn collect_dirs(roots: &[PathBuf], vcs_dir: &OsStr) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for root in roots {
        walk_root(root, vcs_dir, &mut dirs)?;
    }
    dirs.sort_by(|a, b| deepest_first(a, b));
    debug!("found {} directories under {} roots", dirs.len(), roots.len());
    Ok(dirs)
}

fn walk_root(root: &Path, vcs_dir: &OsStr, dirs: &mut Vec<PathBuf>) -> Result<()> {
    let mut walker = WalkDir::new(root).follow_links(false).into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name() == vcs_dir {
            trace!("not descending into {}", entry.path().display());
            walker.skip_current_dir();
        }
        dirs.push(entry.into_path());
    }
    Ok(())
}

/// Longer paths first, equal lengths by name.
///
/// A subdirectory's path is always strictly longer than its parent's, so
/// every directory sorts after all of its descendants.
pub fn deepest_first(a: &Path, b: &Path) -> Ordering {
    let (a, b) = (a.as_os_str(), b.as_os_str());
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn root(dir: &TempDir) -> PathBuf {
        dir.path().canonicalize().unwrap()
    }

    #[test]
    fn test_sorted_deepest_first() {
        let dir = TempDir::new().unwrap();
        let root = root(&dir);
        fs::create_dir_all(root.join("a/bb/c")).unwrap();
        fs::create_dir_all(root.join("a/ba")).unwrap();
        fs::create_dir_all(root.join("z")).unwrap();
        fs::write(root.join("a/file"), b"x").unwrap();

        let dirs = collect_dirs(&[root.clone()], OsStr::new(".git")).unwrap();
        assert_eq!(
            dirs,
            vec![
                root.join("a/bb/c"),
                root.join("a/ba"),
                root.join("a/bb"),
                root.join("a"),
                root.join("z"),
                root.clone(),
            ]
        );
    }

    #[test]
    fn test_vcs_dir_is_listed_but_not_descended() {
        let dir = TempDir::new().unwrap();
        let root = root(&dir);
        fs::create_dir_all(root.join(".git/objects/aa")).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();

        let dirs = collect_dirs(&[root.clone()], OsStr::new(".git")).unwrap();
        assert!(dirs.contains(&root.join(".git")));
        assert!(!dirs.contains(&root.join(".git/objects")));
        assert!(!dirs.contains(&root.join(".git/objects/aa")));
        assert!(dirs.contains(&root.join("src")));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_dirs_are_not_followed() {
        let dir = TempDir::new().unwrap();
        let root = root(&dir);
        fs::create_dir_all(root.join("real/inner")).unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();

        let dirs = collect_dirs(&[root.clone()], OsStr::new(".git")).unwrap();
        assert!(!dirs.contains(&root.join("link")));
        assert!(!dirs.contains(&root.join("link/inner")));
        assert!(dirs.contains(&root.join("real/inner")));
    }

    #[test]
    fn test_multiple_roots() {
        let dir = TempDir::new().unwrap();
        let root = root(&dir);
        fs::create_dir_all(root.join("one/x")).unwrap();
        fs::create_dir_all(root.join("two")).unwrap();

        let dirs = collect_dirs(&[root.join("two"), root.join("one")], OsStr::new(".git")).unwrap();
        assert_eq!(dirs, vec![root.join("one/x"), root.join("one"), root.join("two")]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = root(&dir).join("gone");
        let err = collect_dirs(&[missing.clone()], OsStr::new(".git")).unwrap_err();
        assert!(matches!(err, ScanError::Walk { .. }));
        assert_eq!(err.path(), Some(missing.as_path()));
    }

    #[test]
    fn test_deepest_first_ordering() {
        assert_eq!(deepest_first(Path::new("/a/b"), Path::new("/a")), Ordering::Less);
        assert_eq!(deepest_first(Path::new("/a/b"), Path::new("/a/c")), Ordering::Less);
        assert_eq!(deepest_first(Path::new("/a/c"), Path::new("/a/b")), Ordering::Greater);
        assert_eq!(deepest_first(Path::new("/a"), Path::new("/a")), Ordering::Equal);
    }
}
