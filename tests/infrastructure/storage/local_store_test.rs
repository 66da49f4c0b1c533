use bytes::Bytes;

use adoptify::application::ports::{ContentStore, ContentStoreError};
use adoptify::domain::Checksum;
use adoptify::infrastructure::storage::LocalContentStore;

#[tokio::test]
async fn given_same_bytes_twice_when_uploading_then_distinct_assets_share_checksum() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalContentStore::new(dir.path().join("store"), 1024).unwrap();
    let data = Bytes::from_static(b"pet photo");

    let first = store.upload(data.clone(), ".jpg").await.unwrap();
    let second = store.upload(data, ".jpg").await.unwrap();

    assert_ne!(first.asset_id, second.asset_id);
    assert_ne!(first.url, second.url);
    assert_eq!(first.checksum, second.checksum);
    assert_eq!(first.checksum, Checksum::of(b"pet photo"));
}

#[tokio::test]
async fn given_upload_when_storing_locally_then_file_url_points_at_bytes() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalContentStore::new(dir.path().join("store"), 1024).unwrap();

    let asset = store
        .upload(Bytes::from_static(b"narration"), ".wav")
        .await
        .unwrap();

    assert!(asset.url.starts_with("file://"));
    assert!(asset.asset_id.as_str().ends_with(".wav"));
    let path = reqwest::Url::parse(&asset.url)
        .unwrap()
        .to_file_path()
        .unwrap();
    assert!(path.starts_with(store.root()));
    assert_eq!(std::fs::read(path).unwrap(), b"narration");
}

#[tokio::test]
async fn given_payload_over_limit_when_uploading_then_too_large_and_nothing_written() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalContentStore::new(dir.path().join("store"), 4).unwrap();

    let result = store.upload(Bytes::from_static(b"12345"), ".bin").await;

    assert!(matches!(
        result,
        Err(ContentStoreError::TooLarge { size: 5, limit: 4 })
    ));
    assert_eq!(std::fs::read_dir(store.root()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_file_on_disk_when_uploading_file_then_suffix_follows_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalContentStore::new(dir.path().join("store"), 1024).unwrap();
    let source = dir.path().join("story.avi");
    std::fs::write(&source, b"RIFF").unwrap();

    let asset = store.upload_file(&source).await.unwrap();

    assert!(asset.asset_id.as_str().ends_with(".avi"));
    assert_eq!(asset.checksum, Checksum::of(b"RIFF"));
}
