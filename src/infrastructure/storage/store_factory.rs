use std::sync::Arc;

use crate::application::ports::{ContentStore, ContentStoreError};
use crate::presentation::config::{StorageSettings, present_key};

use super::local_store::LocalContentStore;
use super::s3_store::{S3ContentStore, S3Credentials};

const DEFAULT_ENDPOINT: &str = "https://s3.amazonaws.com";

pub struct ContentStoreFactory;

impl ContentStoreFactory {
    /// Object store only when bucket and both keys are set; local otherwise.
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn ContentStore>, ContentStoreError> {
        let remote = (
            present_key(&settings.bucket),
            present_key(&settings.access_key),
            present_key(&settings.secret_key),
        );

        match remote {
            (Some(bucket), Some(access_key), Some(secret_key)) => {
                let endpoint = present_key(&settings.endpoint).unwrap_or(DEFAULT_ENDPOINT);
                tracing::info!(bucket = %bucket, endpoint = %endpoint, "Using object store backend");
                let store = S3ContentStore::new(
                    S3Credentials {
                        bucket,
                        region: &settings.region,
                        access_key,
                        secret_key,
                        endpoint,
                    },
                    settings.public_base_url.clone(),
                    settings.max_upload_bytes,
                )?;
                Ok(Arc::new(store))
            }
            _ => {
                tracing::info!(path = %settings.local_path.display(), "Using local storage backend");
                let store =
                    LocalContentStore::new(settings.local_path.clone(), settings.max_upload_bytes)?;
                Ok(Arc::new(store))
            }
        }
    }
}
