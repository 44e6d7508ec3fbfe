//! Test utilities for creating temporary directory trees and snapshots.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::location::Location;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `file://` location of the tree root.
    pub fn location(&self) -> Location {
        Location::from_path(self.dir.path())
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create `link` pointing at `target` (stored verbatim, relative targets stay relative).
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        std::os::unix::fs::symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }

    /// Write a namespace snapshot file and return its path.
    pub fn write_snapshot(&self, name: &str, snapshot: &serde_json::Value) -> PathBuf {
        let text = serde_json::to_string_pretty(snapshot).expect("Failed to encode snapshot");
        self.add_file(name, &text)
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot with `width` entries per directory, `depth` levels deep.
pub fn generated_snapshot(width: usize, depth: usize) -> serde_json::Value {
    fn level(width: usize, depth: usize) -> Vec<serde_json::Value> {
        (0..width)
            .rev()
            .map(|i| {
                if depth == 0 {
                    serde_json::json!({ "name": format!("file-{i:03}") })
                } else {
                    serde_json::json!({
                        "name": format!("dir-{i:03}"),
                        "type": "directory",
                        "children": level(width, depth - 1),
                    })
                }
            })
            .collect()
    }
    serde_json::json!({ "roots": { "network:///": { "children": level(width, depth) } } })
}
