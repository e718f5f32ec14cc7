//! Common test utilities for integration tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for small on-disk trees.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .dir("docs")
///     .file("docs/readme.txt")
///     .build();
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    dirs: Vec<String>,
    files: Vec<String>,
    symlinks: Vec<(String, String)>,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self {
            dirs: Vec::new(),
            files: Vec::new(),
            symlinks: Vec::new(),
        }
    }

    /// Adds a directory, creating missing parents.
    pub fn dir(mut self, relative: &str) -> Self {
        self.dirs.push(relative.to_string());
        self
    }

    /// Adds a file holding its own relative path as content.
    pub fn file(mut self, relative: &str) -> Self {
        self.files.push(relative.to_string());
        self
    }

    /// Adds a symlink at `relative` pointing to `target` (unix only).
    pub fn symlink(mut self, relative: &str, target: &str) -> Self {
        self.symlinks.push((relative.to_string(), target.to_string()));
        self
    }

    /// Materializes the tree in a fresh temporary directory.
    pub fn build(self) -> TempDir {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();

        for dir in &self.dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        for file in &self.files {
            let path = root.join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, file).unwrap();
        }
        #[cfg(unix)]
        for (link, target) in &self.symlinks {
            std::os::unix::fs::symlink(root.join(target), root.join(link)).unwrap();
        }

        temp
    }
}

/// Renders a path for the string-based API.
#[allow(dead_code)]
pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
