use std::io;
use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::StoredAsset;

/// Content-hashed binary storage. Every upload is a new object, identical
/// bytes included; the checksum is reported, never used for addressing.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn upload(&self, data: Bytes, suffix: &str) -> Result<StoredAsset, ContentStoreError>;

    /// Largest payload accepted; uploads are buffered fully in memory.
    fn max_upload_bytes(&self) -> u64;

    async fn upload_file(&self, path: &Path) -> Result<StoredAsset, ContentStoreError> {
        let size = tokio::fs::metadata(path).await?.len();
        check_size(size, self.max_upload_bytes())?;

        let data = tokio::fs::read(path).await?;
        let suffix = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        self.upload(Bytes::from(data), &suffix).await
    }
}

pub fn check_size(size: u64, limit: u64) -> Result<(), ContentStoreError> {
    if size > limit {
        return Err(ContentStoreError::TooLarge { size, limit });
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ContentStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("payload of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
    #[error("storage misconfigured: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
