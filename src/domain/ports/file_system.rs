//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the compile pipeline read, write and walk template trees without
//! depending on a concrete implementation (local disk, in-memory).

use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },
}

impl FsError {
    /// Classify an I/O error, keeping the path that caused it.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Abstract asynchronous file system interface
///
/// Implementations:
/// - `LocalFs` - tokio-backed disk I/O
/// - `MemoryFs` - in-memory for testing
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read file content as string. Invalid UTF-8 is replaced, never an error.
    async fn read_to_string(&self, path: &Path) -> FsResult<String>;

    /// Write content to file (parent must exist)
    async fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Create directory and parents
    async fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory tree; a missing directory is not an error
    async fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Every regular file below `root`, recursively
    async fn walk(&self, root: &Path) -> FsResult<Vec<PathBuf>>;
}
