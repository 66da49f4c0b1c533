use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where the audio for a mux comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioRef {
    Local(PathBuf),
    Remote(String),
}

impl AudioRef {
    /// File extension hint for the local copy, `mp3` when the reference has none.
    pub fn extension(&self) -> String {
        let candidate = match self {
            AudioRef::Local(path) => path.extension().and_then(|e| e.to_str()).map(str::to_string),
            AudioRef::Remote(url) => {
                let path = url.split(['?', '#']).next().unwrap_or(url);
                let last = path.rsplit('/').next().unwrap_or(path);
                Path::new(last)
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(str::to_string)
            }
        };

        candidate
            .filter(|e| !e.is_empty() && e.len() <= 5 && e.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| "mp3".to_string())
    }
}

impl FromStr for AudioRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty audio reference".to_string());
        }
        if let Some(path) = s.strip_prefix("file://") {
            return Ok(AudioRef::Local(PathBuf::from(path)));
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(AudioRef::Remote(s.to_string()));
        }
        if s.contains("://") {
            return Err(format!("unsupported audio reference scheme: {}", s));
        }
        Ok(AudioRef::Local(PathBuf::from(s)))
    }
}

impl fmt::Display for AudioRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioRef::Local(path) => write!(f, "file://{}", path.display()),
            AudioRef::Remote(url) => f.write_str(url),
        }
    }
}
