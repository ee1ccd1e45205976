use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::read_to_string;

/// Dependency injection interface for reading required files.
///
/// Commands accept `&dyn FileReader` so tests can substitute in-memory
/// content without touching the filesystem. A failed read is a hard
/// error; callers propagate it instead of reporting through the sink.
#[async_trait]
pub trait FileReader: Send + Sync {
    /// # Errors
    /// Returns error if the file cannot be read or is not valid UTF-8.
    async fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Real implementation backed by `tokio::fs`
#[derive(Debug, Default)]
pub struct FsFileReader;

#[async_trait]
impl FileReader for FsFileReader {
    async fn read_to_string(&self, path: &Path) -> Result<String> {
        read_to_string(path)
            .await
            .context(format!("Failed to read file - {}", path.display()))
    }
}
