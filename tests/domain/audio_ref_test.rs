use std::path::PathBuf;

use adoptify::domain::{AudioFormat, AudioRef};

#[test]
fn given_file_uri_when_parsing_then_local_reference() {
    let parsed: AudioRef = "file:///tmp/voice.wav".parse().unwrap();

    assert_eq!(parsed, AudioRef::Local(PathBuf::from("/tmp/voice.wav")));
}

#[test]
fn given_bare_path_when_parsing_then_local_reference() {
    let parsed: AudioRef = "/tmp/voice.mp3".parse().unwrap();

    assert_eq!(parsed, AudioRef::Local(PathBuf::from("/tmp/voice.mp3")));
}

#[test]
fn given_https_url_when_parsing_then_remote_reference() {
    let parsed: AudioRef = "https://cdn.example.com/a/voice.ogg?sig=1".parse().unwrap();

    assert_eq!(parsed.extension(), "ogg");
    assert!(matches!(parsed, AudioRef::Remote(_)));
}

#[test]
fn given_unsupported_scheme_when_parsing_then_error() {
    assert!("ftp://host/voice.mp3".parse::<AudioRef>().is_err());
    assert!("   ".parse::<AudioRef>().is_err());
}

#[test]
fn given_reference_without_extension_when_asking_extension_then_mp3() {
    let remote = AudioRef::Remote("https://cdn.example.com/voice".to_string());

    assert_eq!(remote.extension(), "mp3");
}

#[test]
fn given_local_reference_when_displayed_then_file_uri_round_trips() {
    let local = AudioRef::Local(PathBuf::from("/tmp/v.wav"));

    assert_eq!(local.to_string().parse::<AudioRef>().unwrap(), local);
}

#[test]
fn given_format_names_when_parsing_then_known_formats_accepted() {
    assert_eq!("MP3".parse::<AudioFormat>().unwrap(), AudioFormat::Mp3);
    assert_eq!(".wav".parse::<AudioFormat>().unwrap(), AudioFormat::Wav);
    assert_eq!("ogg".parse::<AudioFormat>().unwrap(), AudioFormat::Ogg);
    assert!("flac".parse::<AudioFormat>().is_err());
}
