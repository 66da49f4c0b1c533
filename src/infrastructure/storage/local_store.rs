use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ContentStore, ContentStoreError, check_size};
use crate::domain::{AssetId, Checksum, StoredAsset};

/// Filesystem fallback; assets are returned as `file://` URIs under `root`.
pub struct LocalContentStore {
    inner: Arc<LocalFileSystem>,
    root: PathBuf,
    max_upload_bytes: u64,
}

impl LocalContentStore {
    pub fn new(base_path: PathBuf, max_upload_bytes: u64) -> Result<Self, ContentStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let root = std::fs::canonicalize(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(&root)
            .map_err(|e| ContentStoreError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(fs),
            root,
            max_upload_bytes,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ContentStore for LocalContentStore {
    async fn upload(&self, data: Bytes, suffix: &str) -> Result<StoredAsset, ContentStoreError> {
        check_size(data.len() as u64, self.max_upload_bytes)?;

        let checksum = Checksum::of(&data);
        let asset_id = AssetId::new(suffix);
        let size = data.len();

        self.inner
            .put(&StorePath::from(asset_id.as_str()), PutPayload::from(data))
            .await
            .map_err(|e| ContentStoreError::UploadFailed(e.to_string()))?;

        let url = reqwest::Url::from_file_path(self.root.join(asset_id.as_str()))
            .map_err(|_| ContentStoreError::Configuration("storage root is not absolute".into()))?
            .to_string();

        tracing::debug!(asset_id = %asset_id, bytes = size, "Stored asset locally");

        Ok(StoredAsset {
            asset_id,
            url,
            checksum,
        })
    }

    fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }
}
