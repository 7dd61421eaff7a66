mod filter;
pub mod text_detection;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::git::TrackedFiles;

/// Trait for enumerating the files a run may check.
pub trait FileScanner {
    /// Every tracked file, or only the text files among them when
    /// `exclude_binary` is set. Paths are relative to the scan root and start
    /// with `./`.
    fn list_tracked_files(&self, exclude_binary: bool) -> Vec<PathBuf>;

    /// Whether a listed path is a directory on disk.
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Listed files accepted by `filter`, each once, in listing order.
    fn find(&self, filter: &dyn FileFilter, exclude_binary: bool) -> Vec<PathBuf> {
        self.list_tracked_files(exclude_binary)
            .into_iter()
            .filter(|path| !self.is_dir(path))
            .filter(|path| filter.should_include(path))
            .collect()
    }
}

/// Lists files from the git index of the repository containing `root`.
///
/// Outside a repository the listing is empty.
pub struct GitScanner {
    root: PathBuf,
}

impl GitScanner {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn tracked_paths(&self, regular_only: bool) -> Vec<PathBuf> {
        match TrackedFiles::discover(&self.root).and_then(|tracked| tracked.paths(regular_only)) {
            Ok(paths) => {
                debug!(root = %self.root.display(), count = paths.len(), "tracked files listed");
                paths
            }
            Err(e) => {
                warn!(root = %self.root.display(), error = %e, "no tracked files found");
                Vec::new()
            }
        }
    }

    fn is_searchable(&self, path: &Path) -> bool {
        match text_detection::is_searchable_text_file(&self.root.join(path)) {
            Ok(true) => true,
            Ok(false) => {
                trace!(path = %path.display(), "skipped binary or empty file");
                false
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipped unreadable file");
                false
            }
        }
    }
}

impl FileScanner for GitScanner {
    fn list_tracked_files(&self, exclude_binary: bool) -> Vec<PathBuf> {
        // Text search only covers regular files; a plain listing keeps links.
        let paths = self.tracked_paths(exclude_binary);
        if !exclude_binary {
            return paths;
        }
        paths
            .into_iter()
            .filter(|path| self.is_searchable(path))
            .collect()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.root.join(path).is_dir()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
