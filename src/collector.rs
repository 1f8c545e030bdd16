//! Project collection: walk, classify, read and record.

use crate::config::ScanConfig;
use crate::discovery::{
    Classification, DirectoryWalker, WalkEntry, classify, read_text, relative_slash_path,
};
use crate::document::FileRecord;
use crate::error::{CollectorError, Result};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Observer for per-file collection events.
///
/// All methods default to doing nothing.
pub trait CollectListener {
    /// The root was validated and the walk is about to begin.
    fn on_start(&self, _root: &Path) {}

    /// A file was classified. Called before a text file is read in full.
    fn on_classified(&self, _path: &Path, _class: Classification) {}

    /// An ignored directory was skipped without being listed.
    fn on_pruned(&self, _dir: &Path) {}

    /// A text file was read and recorded.
    fn on_collected(&self, _record: &FileRecord) {}

    /// A file or directory could not be read. The walk continues.
    fn on_failed(&self, _path: &Path, _error: &CollectorError) {}
}

/// Listener that ignores every event.
pub struct SilentListener;

impl CollectListener for SilentListener {}

/// Counters for one collection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub collected: usize,
    pub ignored_extension: usize,
    pub binary: usize,
    pub failed: usize,
    pub pruned_dirs: usize,
    pub unreadable_dirs: usize,
}

/// Records in traversal order plus run counters.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub records: Vec<FileRecord>,
    pub stats: CollectStats,
}

/// Collects the text files of one project tree.
pub struct ProjectCollector {
    config: ScanConfig,
}

impl ProjectCollector {
    /// Create a collector for the given scan configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Resolve the root to its canonical path.
    ///
    /// A root that does not exist is [`CollectorError::RootNotFound`]; any
    /// other failure to resolve it keeps its I/O cause.
    pub fn validate_root(&self) -> Result<PathBuf> {
        let root = &self.config.root;
        root.canonicalize().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CollectorError::RootNotFound(root.clone()),
            _ => CollectorError::resolve_error(root, e),
        })
    }

    /// Run one full collection pass.
    ///
    /// Only an unusable root is an error here; per-file problems are logged,
    /// passed to `listener` and counted.
    pub fn collect(&self, listener: &dyn CollectListener) -> Result<Collection> {
        let root = self.validate_root()?;
        // An earlier run's output inside the root must not be collected.
        let excluded = self.config.output.canonicalize().ok();

        info!(root = %root.display(), "Starting collection");
        listener.on_start(&root);

        let mut collection = Collection::default();
        for entry in DirectoryWalker::new(&self.config).walk(&root) {
            match entry {
                WalkEntry::File(path) => {
                    if excluded.as_deref() == Some(path.as_path()) {
                        debug!(path = %path.display(), "Skipping output file");
                        continue;
                    }
                    self.visit_file(&root, &path, listener, &mut collection);
                }
                WalkEntry::Pruned(dir) => {
                    debug!(dir = %dir.display(), "Pruned ignored directory");
                    collection.stats.pruned_dirs += 1;
                    listener.on_pruned(&dir);
                }
                WalkEntry::Error(error) => {
                    warn!(error = %error, "Failed to enumerate directory");
                    collection.stats.unreadable_dirs += 1;
                    let path = match error {
                        CollectorError::Io { ref path, .. } => path.clone(),
                        _ => root.clone(),
                    };
                    listener.on_failed(&path, &error);
                }
            }
        }

        info!(
            collected = collection.stats.collected,
            binary = collection.stats.binary,
            ignored = collection.stats.ignored_extension,
            failed = collection.stats.failed,
            "Collection finished"
        );
        Ok(collection)
    }

    fn visit_file(
        &self,
        root: &Path,
        path: &Path,
        listener: &dyn CollectListener,
        collection: &mut Collection,
    ) {
        let class = classify(&self.config, path);
        listener.on_classified(path, class);

        match class {
            Classification::IgnoredExtension => {
                collection.stats.ignored_extension += 1;
            }
            Classification::Binary => {
                debug!(path = %path.display(), "Skipping binary file");
                collection.stats.binary += 1;
            }
            Classification::Text => match self.read_record(root, path) {
                Ok(record) => {
                    debug!(file = %record.file_path, "Collected");
                    collection.stats.collected += 1;
                    listener.on_collected(&record);
                    collection.records.push(record);
                }
                Err(error) => {
                    warn!(path = %path.display(), error = %error, "Skipping unreadable file");
                    collection.stats.failed += 1;
                    listener.on_failed(path, &error);
                }
            },
        }
    }

    fn read_record(&self, root: &Path, path: &Path) -> Result<FileRecord> {
        let content = read_text(path).map_err(|e| CollectorError::read_error(path, e))?;
        let file_path = relative_slash_path(root, path).ok_or_else(|| {
            CollectorError::read_error(path, io::Error::other("path escapes the scan root"))
        })?;
        Ok(FileRecord::new(file_path, content))
    }
}
