use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

/// A file that has been written to the storage sink
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Generated filename under the base directory (random UUID plus the
    /// original extension, if any)
    pub saved_filename: String,
    /// Full path the bytes were written to
    pub path: PathBuf,
    /// Number of bytes written
    pub size: u64,
}

/// Writes uploaded byte streams to a directory on local disk.
///
/// Destination names are derived from a random UUID, so concurrent uploads
/// never contend for the same path and identical content is stored twice.
/// The original filename contributes only its extension.
pub struct DiskSink {
    base_dir: PathBuf,
}

impl DiskSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Write `data` under a freshly generated name and return the saved
    /// filename, full path and byte count.
    ///
    /// The base directory is created on first use. Partial writes are not
    /// cleaned up on failure.
    pub async fn store(&self, original_filename: &str, data: &[u8]) -> Result<StoredFile> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(AppError::Storage)?;

        let saved_filename = match file_extension(original_filename) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };
        let path = self.base_dir.join(&saved_filename);

        fs::write(&path, data).await.map_err(AppError::Storage)?;
        debug!("File saved to: {}", path.display());

        Ok(StoredFile {
            saved_filename,
            path,
            size: data.len() as u64,
        })
    }
}

/// Extension of `name`: the substring after the last `.`.
///
/// Dotfiles (`.gitignore`) and names without a dot have no extension.
fn file_extension(name: &str) -> Option<&str> {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_substring_after_last_dot() {
        assert_eq!(file_extension("report.v2.pdf"), Some("pdf"));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz"));
        assert_eq!(file_extension("a.txt"), Some("txt"));
    }

    #[test]
    fn no_extension_for_plain_names_and_dotfiles() {
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".gitignore"), None);
        assert_eq!(file_extension("trailing."), None);
        assert_eq!(file_extension(""), None);
    }

    #[tokio::test]
    async fn store_writes_all_bytes_and_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DiskSink::new(dir.path());

        let stored = sink.store("a.txt", b"0123456789").await.unwrap();

        assert_eq!(stored.size, 10);
        assert_eq!(std::fs::read(&stored.path).unwrap(), b"0123456789");
        assert!(stored.saved_filename.ends_with(".txt"));
    }

    #[tokio::test]
    async fn store_preserves_only_the_last_extension() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DiskSink::new(dir.path());

        let stored = sink.store("report.v2.pdf", b"pdf bytes").await.unwrap();
        assert!(stored.saved_filename.ends_with(".pdf"));
        assert!(!stored.saved_filename.contains("v2"));
    }

    #[tokio::test]
    async fn store_omits_extension_when_original_has_none() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DiskSink::new(dir.path());

        let stored = sink.store("README", b"readme").await.unwrap();
        assert!(!stored.saved_filename.contains('.'));
    }

    #[tokio::test]
    async fn identical_uploads_get_distinct_names() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DiskSink::new(dir.path());

        let first = sink.store("a.txt", b"same bytes").await.unwrap();
        let second = sink.store("a.txt", b"same bytes").await.unwrap();

        assert_ne!(first.saved_filename, second.saved_filename);
        assert!(first.path.exists());
        assert!(second.path.exists());
    }

    #[tokio::test]
    async fn base_directory_is_created_on_first_use() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("raw");
        let sink = DiskSink::new(&nested);

        let stored = sink.store("a.txt", b"x").await.unwrap();

        assert!(nested.is_dir());
        assert!(stored.path.starts_with(&nested));
    }
}
