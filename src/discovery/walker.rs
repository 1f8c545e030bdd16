//! Directory walking with ignore-set pruning.
//!
//! Ignored directories are pruned when first reached, so nothing beneath
//! them is ever enumerated. Entries come out in the order the filesystem
//! returns them; no sorting is applied.

use crate::config::ScanConfig;
use crate::error::CollectorError;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One item produced by a walk.
#[derive(Debug)]
pub enum WalkEntry {
    /// A regular file, or a symlink resolving to one.
    File(PathBuf),
    /// An ignored directory that was not descended into.
    Pruned(PathBuf),
    /// A directory that could not be enumerated.
    Error(CollectorError),
}

/// Directory walker that prunes the directory names ignored by a
/// [`ScanConfig`].
///
/// Symbolic links are never followed, so a link to a directory is neither
/// descended nor reported.
pub struct DirectoryWalker<'a> {
    config: &'a ScanConfig,
}

impl<'a> DirectoryWalker<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Walk `root` top-down.
    ///
    /// The root itself is never pruned, whatever its name.
    pub fn walk(&self, root: &Path) -> Walk<'a> {
        Walk {
            config: self.config,
            inner: WalkDir::new(root).follow_links(false).into_iter(),
        }
    }
}

/// Iterator returned by [`DirectoryWalker::walk`].
pub struct Walk<'a> {
    config: &'a ScanConfig,
    inner: walkdir::IntoIter,
}

impl Iterator for Walk<'_> {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(WalkEntry::Error(into_walk_error(err))),
            };

            if entry.file_type().is_dir() {
                if entry.depth() > 0
                    && self
                        .config
                        .is_ignored_dir(&entry.file_name().to_string_lossy())
                {
                    self.inner.skip_current_dir();
                    return Some(WalkEntry::Pruned(entry.into_path()));
                }
                continue;
            }

            if entry.depth() == 0 {
                // A root that is itself a file has no contents to walk.
                continue;
            }

            if entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file())
            {
                return Some(WalkEntry::File(entry.into_path()));
            }
        }
    }
}

fn into_walk_error(err: walkdir::Error) -> CollectorError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    CollectorError::walk_error(path, source)
}

/// Path of `path` relative to `root`, joined with `/` on every platform.
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        fs::write(dir.path().join("a.txt"), "hello").unwrap();

        let src = dir.path().join("src").join("nested");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("lib.rs"), "pub fn f() {}").unwrap();

        let deps = dir.path().join("node_modules").join("pkg");
        fs::create_dir_all(&deps).unwrap();
        fs::write(deps.join("index.js"), "module.exports = {}").unwrap();

        let deep_ignored = dir.path().join("src").join(".git");
        fs::create_dir_all(&deep_ignored).unwrap();
        fs::write(deep_ignored.join("HEAD"), "ref: refs/heads/main").unwrap();

        dir
    }

    fn ignoring(dirs: &[&str]) -> ScanConfig {
        ScanConfig::default().with_ignore_sets(dirs.iter().copied(), std::iter::empty::<&str>())
    }

    fn files(walker: &DirectoryWalker<'_>, root: &Path) -> Vec<String> {
        let mut out: Vec<_> = walker
            .walk(root)
            .filter_map(|e| match e {
                WalkEntry::File(p) => relative_slash_path(root, &p),
                _ => None,
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_walk_prunes_ignored_dirs_at_any_depth() {
        let dir = create_test_dir();
        let config = ignoring(&["node_modules", ".git"]);
        let walker = DirectoryWalker::new(&config);

        assert_eq!(
            files(&walker, dir.path()),
            vec!["a.txt".to_string(), "src/nested/lib.rs".to_string()]
        );
    }

    #[test]
    fn test_walk_reports_pruned_dirs() {
        let dir = create_test_dir();
        let config = ignoring(&["node_modules", ".git"]);
        let walker = DirectoryWalker::new(&config);

        let mut pruned: Vec<_> = walker
            .walk(dir.path())
            .filter_map(|e| match e {
                WalkEntry::Pruned(p) => relative_slash_path(dir.path(), &p),
                _ => None,
            })
            .collect();
        pruned.sort();

        assert_eq!(pruned, vec!["node_modules", "src/.git"]);
    }

    #[test]
    fn test_walk_without_ignores_visits_everything() {
        let dir = create_test_dir();
        let config = ignoring(&[]);
        let walker = DirectoryWalker::new(&config);

        assert_eq!(files(&walker, dir.path()).len(), 4);
    }

    #[test]
    fn test_ignored_name_matches_dirs_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("build"), "not a directory").unwrap();
        let config = ignoring(&["build"]);
        let walker = DirectoryWalker::new(&config);

        assert_eq!(files(&walker, dir.path()), vec!["build"]);
    }

    #[test]
    fn test_root_is_never_pruned() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("build");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("main.c"), "int main(){}").unwrap();

        let config = ignoring(&["build"]);
        let walker = DirectoryWalker::new(&config);
        assert_eq!(files(&walker, &root), vec!["main.c"]);
    }

    #[test]
    fn test_file_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("single.txt");
        fs::write(&file, "x").unwrap();

        let config = ignoring(&[]);
        let walker = DirectoryWalker::new(&config);
        assert_eq!(walker.walk(&file).count(), 0);
    }

    #[test]
    fn test_relative_slash_path() {
        let root = Path::new("/project");
        assert_eq!(
            relative_slash_path(root, &root.join("src").join("main.rs")).as_deref(),
            Some("src/main.rs")
        );
        assert_eq!(relative_slash_path(root, Path::new("/elsewhere/x")), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks() {
        let dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("target.txt"), "linked").unwrap();
        fs::create_dir(outside.path().join("linked_dir")).unwrap();
        fs::write(outside.path().join("linked_dir").join("inner.txt"), "x").unwrap();

        std::os::unix::fs::symlink(
            outside.path().join("target.txt"),
            dir.path().join("link.txt"),
        )
        .unwrap();
        std::os::unix::fs::symlink(outside.path().join("linked_dir"), dir.path().join("dir_link"))
            .unwrap();

        let config = ignoring(&[]);
        let walker = DirectoryWalker::new(&config);
        assert_eq!(files(&walker, dir.path()), vec!["link.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_ignored_dir_is_never_opened_for_listing() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("node_modules");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("c.txt"), "skip me").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let config = ignoring(&["node_modules"]);
        let walker = DirectoryWalker::new(&config);
        let errors = walker
            .walk(dir.path())
            .filter(|e| matches!(e, WalkEntry::Error(_)))
            .count();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(errors, 0);
    }
}
