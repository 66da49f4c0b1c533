use std::sync::Arc;

use bytes::Bytes;
use object_store::ObjectStore;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;

use adoptify::application::ports::{ContentStore, ContentStoreError};
use adoptify::infrastructure::storage::S3ContentStore;

#[tokio::test]
async fn given_public_base_url_when_uploading_then_url_joins_base_and_key() {
    let backing = Arc::new(InMemory::new());
    let store = S3ContentStore::with_store(
        backing.clone(),
        Some("https://cdn.example.com/".to_string()),
        1024,
    );

    let asset = store
        .upload(Bytes::from_static(b"video"), ".mp4")
        .await
        .unwrap();

    let key = format!("uploads/{}", asset.asset_id);
    assert_eq!(asset.url, format!("https://cdn.example.com/{key}"));
    let stored = backing
        .get(&StorePath::from(key.as_str()))
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    assert_eq!(stored.as_ref(), b"video");
}

#[tokio::test]
async fn given_no_public_base_url_when_uploading_then_url_is_the_key() {
    let store = S3ContentStore::with_store(Arc::new(InMemory::new()), Some("  ".to_string()), 1024);

    let asset = store
        .upload(Bytes::from_static(b"audio"), ".mp3")
        .await
        .unwrap();

    assert_eq!(asset.url, format!("uploads/{}", asset.asset_id));
}

#[tokio::test]
async fn given_payload_over_limit_when_uploading_then_too_large() {
    let store = S3ContentStore::with_store(Arc::new(InMemory::new()), None, 2);

    let result = store.upload(Bytes::from_static(b"abc"), "").await;

    assert!(matches!(result, Err(ContentStoreError::TooLarge { .. })));
}
