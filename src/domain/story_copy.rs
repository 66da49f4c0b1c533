//! Deterministic copy extraction from a ranked script.
//!
//! These are fixed, testable rules rather than language understanding: the
//! first three non-blank lines become captions, lines mentioning a hook yield
//! hook variants, and `#`-prefixed tokens become hashtags.

pub const MAX_CAPTIONS: usize = 3;
pub const MIN_HASHTAGS: usize = 4;
pub const MAX_HASHTAGS: usize = 6;

pub const DEFAULT_CAPTION: &str = "New beginnings start here";
pub const DEFAULT_HOOK: &str = "This weekend only: come meet your new best friend";
pub const DEFAULT_HASHTAGS: [&str; 4] = [
    "#adoptify",
    "#adoptdontshop",
    "#petrescue",
    "#shelterlove",
];

/// Ordered captions, one slide each. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionDeck(Vec<String>);

impl CaptionDeck {
    pub fn from_script(script: &str) -> Self {
        let captions: Vec<String> = script
            .lines()
            .map(strip_bullet)
            .filter(|line| !line.is_empty())
            .take(MAX_CAPTIONS)
            .map(str::to_string)
            .collect();

        Self::from_captions(captions)
    }

    /// Blank captions are dropped; an empty deck becomes the single default slide.
    pub fn from_captions(captions: Vec<String>) -> Self {
        let captions: Vec<String> = captions
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        if captions.is_empty() {
            Self(vec![DEFAULT_CAPTION.to_string()])
        } else {
            Self(captions)
        }
    }

    pub fn captions(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryCopy {
    pub captions: CaptionDeck,
    pub hooks: Vec<String>,
    pub hashtags: Vec<String>,
}

impl StoryCopy {
    pub fn extract(script: &str) -> Self {
        Self {
            captions: CaptionDeck::from_script(script),
            hooks: extract_hooks(script),
            hashtags: extract_hashtags(script),
        }
    }
}

fn strip_bullet(line: &str) -> &str {
    line.trim_matches(|c: char| c == '-' || c == '•' || c.is_whitespace())
}

pub fn extract_hooks(script: &str) -> Vec<String> {
    let hooks: Vec<String> = script
        .lines()
        .filter(|line| line.to_lowercase().contains("hook"))
        .filter_map(|line| line.rsplit(':').next())
        .map(|hook| hook.trim().to_string())
        .filter(|hook| !hook.is_empty())
        .collect();

    if hooks.is_empty() {
        vec![DEFAULT_HOOK.to_string()]
    } else {
        hooks
    }
}

pub fn extract_hashtags(script: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in script.split_whitespace() {
        if token.starts_with('#') && !tags.iter().any(|t| t == token) {
            tags.push(token.to_string());
        }
    }

    if tags.len() < MIN_HASHTAGS {
        for default in DEFAULT_HASHTAGS {
            if !tags.iter().any(|t| t == default) {
                tags.push(default.to_string());
            }
        }
    }

    tags.truncate(MAX_HASHTAGS);
    tags
}
