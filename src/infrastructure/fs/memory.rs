//! In-memory file system for tests

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Clone, Default)]
pub struct MemoryFs {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, registering its ancestor directories.
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        self.add_dirs(path.parent());
        self.files
            .lock()
            .unwrap()
            .insert(path, content.to_string());
        self
    }

    /// Seed an empty directory.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_dirs(Some(&path));
        self
    }

    pub fn dir_exists(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    fn add_dirs(&self, dir: Option<&Path>) {
        let mut dirs = self.dirs.lock().unwrap();
        let mut current = dir;
        while let Some(d) = current {
            if d.as_os_str().is_empty() {
                break;
            }
            dirs.insert(d.to_path_buf());
            current = d.parent();
        }
    }
}

#[async_trait]
impl FileSystem for MemoryFs {
    async fn read_to_string(&self, path: &Path) -> FsResult<String> {
        self.file(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    async fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if let Some(parent) = path.parent() {
            if !self.dirs.lock().unwrap().contains(parent) {
                return Err(FsError::NotFound(parent.to_path_buf()));
            }
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.add_dirs(Some(path));
        Ok(())
    }

    async fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        self.files.lock().unwrap().retain(|p, _| !p.starts_with(path));
        self.dirs.lock().unwrap().retain(|p| !p.starts_with(path));
        Ok(())
    }

    async fn walk(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        if !self.dirs.lock().unwrap().contains(root) {
            return Err(FsError::NotFound(root.to_path_buf()));
        }
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }
}
