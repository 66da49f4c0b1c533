use adoptify::domain::{AssetId, Checksum};

#[test]
fn given_same_bytes_when_hashing_then_checksums_match() {
    assert_eq!(Checksum::of(b"luna"), Checksum::of(b"luna"));
    assert_ne!(Checksum::of(b"luna"), Checksum::of(b"rex"));
}

#[test]
fn given_known_input_when_hashing_then_sha256_hex() {
    assert_eq!(
        Checksum::of(b"abc").as_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn given_suffix_when_creating_asset_id_then_prefixed_unique_and_sanitized() {
    let a = AssetId::new(".mp4");
    let b = AssetId::new(".mp4");
    let unsafe_suffix = AssetId::new("/../x.wav");

    assert!(a.as_str().starts_with("asset-"));
    assert!(a.as_str().ends_with(".mp4"));
    assert_ne!(a, b);
    assert!(!unsafe_suffix.as_str().contains('/'));
}
