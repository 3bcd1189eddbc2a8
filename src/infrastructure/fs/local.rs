//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations on top of
//! `tokio::fs`. Blocking work (atomic rename, directory walks) runs on the
//! blocking pool.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory and are renamed
/// into place, so readers never observe a half-written template.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for LocalFs {
    async fn read_to_string(&self, path: &Path) -> FsResult<String> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| FsError::from_io(path, e))?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(path = %path.display(), "not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    }

    async fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let target = path.to_path_buf();
        let content = content.to_string();
        run_blocking(path, move || atomic_write(&target, content.as_bytes())).await
    }

    async fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| FsError::from_io(path, e))
    }

    async fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        match tokio::fs::remove_dir_all(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FsError::from_io(path, e)),
        }
    }

    async fn walk(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        let target = root.to_path_buf();
        run_blocking(root, move || walk_files(&target)).await
    }
}

async fn run_blocking<T, F>(path: &Path, f: F) -> FsResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> FsResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| FsError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::other(e.to_string()),
        })?
}

/// Write via tempfile + rename.
fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(dir, e))?;
    tmp.write_all(content)
        .map_err(|e| FsError::from_io(path, e))?;
    tmp.persist(path)
        .map_err(|e| FsError::from_io(path, e.error))?;
    Ok(())
}

/// Every regular file below `root`. Hidden files and ignore files are not
/// filtered; a template tree is walked as-is.
fn walk_files(root: &Path) -> FsResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(FsError::NotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .build()
    {
        let entry = entry.map_err(|e| FsError::Walk {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("header.tpl");
        let fs = LocalFs::new();

        fs.write(&file, "<header></header>").await.unwrap();
        let content = fs.read_to_string(&file).await.unwrap();

        assert_eq!(content, "<header></header>");
    }

    #[tokio::test]
    async fn local_fs_read_decodes_invalid_utf8_lossily() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("logo.png");
        std::fs::write(&file, [0x89, b'P', 0xff, 0xfe]).unwrap();

        let content = LocalFs::new().read_to_string(&file).await.unwrap();

        assert_eq!(content, "\u{FFFD}P\u{FFFD}\u{FFFD}");
    }

    #[tokio::test]
    async fn local_fs_write_overwrites() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.tpl");
        let fs = LocalFs::new();

        fs.write(&file, "old").await.unwrap();
        fs.write(&file, "new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[tokio::test]
    async fn local_fs_read_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        let err = fs
            .read_to_string(&dir.path().join("missing.tpl"))
            .await
            .unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[tokio::test]
    async fn local_fs_remove_dir_all_tolerates_missing() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        fs.remove_dir_all(&dir.path().join("nope")).await.unwrap();
    }

    #[tokio::test]
    async fn local_fs_remove_and_create() {
        let dir = tempdir().unwrap();
        let views = dir.path().join("views");
        let fs = LocalFs::new();

        fs.create_dir_all(&views.join("admin")).await.unwrap();
        std::fs::write(views.join("admin/stale.js"), "stale").unwrap();

        fs.remove_dir_all(&views).await.unwrap();
        assert!(!views.exists());

        fs.create_dir_all(&views).await.unwrap();
        assert!(views.is_dir());
    }

    #[tokio::test]
    async fn local_fs_walk_is_recursive_and_includes_hidden() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("partials/topic")).unwrap();
        std::fs::write(root.join("home.tpl"), "").unwrap();
        std::fs::write(root.join("partials/topic/post.tpl"), "").unwrap();
        std::fs::write(root.join(".hidden.tpl"), "").unwrap();
        std::fs::write(root.join(".gitignore"), "*.tpl\n").unwrap();

        let files = LocalFs::new().walk(root).await.unwrap();

        assert!(files.contains(&root.join("home.tpl")));
        assert!(files.contains(&root.join("partials/topic/post.tpl")));
        assert!(files.contains(&root.join(".hidden.tpl")));
        assert!(!files.iter().any(|f| f.ends_with("partials")));
    }

    #[tokio::test]
    async fn local_fs_walk_missing_root_fails() {
        let dir = tempdir().unwrap();
        let err = LocalFs::new()
            .walk(&dir.path().join("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }
}
