use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ContentStore, ContentStoreError, check_size};
use crate::domain::{AssetId, Checksum, StoredAsset};

const KEY_PREFIX: &str = "uploads";

pub struct S3ContentStore {
    inner: Arc<dyn ObjectStore>,
    public_base_url: Option<String>,
    max_upload_bytes: u64,
}

pub struct S3Credentials<'a> {
    pub bucket: &'a str,
    pub region: &'a str,
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub endpoint: &'a str,
}

impl S3ContentStore {
    pub fn new(
        credentials: S3Credentials<'_>,
        public_base_url: Option<String>,
        max_upload_bytes: u64,
    ) -> Result<Self, ContentStoreError> {
        let store = AmazonS3Builder::new()
            .with_bucket_name(credentials.bucket)
            .with_region(credentials.region)
            .with_access_key_id(credentials.access_key)
            .with_secret_access_key(credentials.secret_key)
            .with_endpoint(credentials.endpoint)
            .build()
            .map_err(|e| ContentStoreError::Configuration(e.to_string()))?;

        Ok(Self::with_store(Arc::new(store), public_base_url, max_upload_bytes))
    }

    /// Wraps any object store; URLs are joined onto `public_base_url`.
    pub fn with_store(
        inner: Arc<dyn ObjectStore>,
        public_base_url: Option<String>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            inner,
            public_base_url: public_base_url.filter(|u| !u.trim().is_empty()),
            max_upload_bytes,
        }
    }

    fn public_url(&self, key: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
            None => key.to_string(),
        }
    }
}

#[async_trait]
impl ContentStore for S3ContentStore {
    async fn upload(&self, data: Bytes, suffix: &str) -> Result<StoredAsset, ContentStoreError> {
        check_size(data.len() as u64, self.max_upload_bytes)?;

        let checksum = Checksum::of(&data);
        let asset_id = AssetId::new(suffix);
        let key = format!("{}/{}", KEY_PREFIX, asset_id);

        self.inner
            .put(&StorePath::from(key.as_str()), PutPayload::from(data))
            .await
            .map_err(|e| ContentStoreError::UploadFailed(e.to_string()))?;

        tracing::info!(key = %key, "Uploaded asset to object store");

        Ok(StoredAsset {
            url: self.public_url(&key),
            asset_id,
            checksum,
        })
    }

    fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }
}
