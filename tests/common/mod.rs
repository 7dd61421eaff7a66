#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the ws-guard binary.
#[macro_export]
macro_rules! ws_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("ws-guard"))
    };
}

/// A temporary git work tree for integration tests.
pub struct TestRepo {
    pub dir: TempDir,
}

impl TestRepo {
    /// Creates an empty git repository in a fresh temp directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        Command::new("git")
            .args(["init"])
            .current_dir(dir.path())
            .output()
            .expect("Failed to init git repo");
        Self { dir }
    }

    /// Creates a file with the given content without staging it.
    pub fn create_file(&self, relative_path: &str, content: impl AsRef<[u8]>) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file and stages it so it becomes tracked.
    pub fn track_file(&self, relative_path: &str, content: impl AsRef<[u8]>) {
        self.create_file(relative_path, content);
        Command::new("git")
            .args(["add", relative_path])
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to git add");
    }

    /// Returns the path to the work tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
