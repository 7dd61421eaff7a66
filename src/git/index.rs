//! Enumeration of files recorded in the repository index.

use std::path::{Path, PathBuf};

use gix::bstr::ByteSlice;
use gix::index::entry::Mode;
use indexmap::IndexSet;

use crate::error::{Result, WsGuardError};

/// Files tracked by the git repository that contains a directory.
pub struct TrackedFiles {
    repo: gix::Repository,
    /// Location of `root` inside the work tree; empty at the top level.
    prefix: PathBuf,
}

impl TrackedFiles {
    /// Discover the repository containing `root`.
    ///
    /// # Errors
    /// Returns an error if `root` is not inside a git work tree.
    pub fn discover(root: &Path) -> Result<Self> {
        let repo = gix::discover(root).map_err(|e| {
            WsGuardError::GitRepoNotFound(format!("{}: {e}", root.display()))
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| WsGuardError::Git("Repository has no working directory".into()))?;

        let root_abs = root.canonicalize().map_err(|e| WsGuardError::FileRead {
            path: root.to_path_buf(),
            source: e,
        })?;
        let workdir_abs = workdir.canonicalize().map_err(|e| WsGuardError::FileRead {
            path: workdir.to_path_buf(),
            source: e,
        })?;

        let prefix = root_abs
            .strip_prefix(&workdir_abs)
            .map_err(|_| {
                WsGuardError::Git(format!(
                    "{} is not within git workdir {}",
                    root_abs.display(),
                    workdir_abs.display()
                ))
            })?
            .to_path_buf();

        Ok(Self { repo, prefix })
    }

    /// Tracked paths under `root`, relative to it and prefixed with `./`,
    /// in index order.
    ///
    /// Submodules are skipped and a path with several merge stages is
    /// listed once. Symbolic links are skipped too when `regular_only` is set.
    ///
    /// # Errors
    /// Returns an error if the index cannot be read.
    pub fn paths(&self, regular_only: bool) -> Result<Vec<PathBuf>> {
        let index = self
            .repo
            .index_or_empty()
            .map_err(|e| WsGuardError::Git(format!("Failed to get git index: {e}")))?;

        let mut paths = IndexSet::new();
        for entry in index.entries() {
            if entry.mode == Mode::COMMIT || (regular_only && entry.mode == Mode::SYMLINK) {
                continue;
            }
            let rela_path = entry.path(&index).to_path_lossy();
            if let Ok(relative) = rela_path.strip_prefix(&self.prefix) {
                paths.insert(Path::new(".").join(relative));
            }
        }

        Ok(paths.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
