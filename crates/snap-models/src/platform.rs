//! Video platform classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform a submitted link belongs to.
///
/// Both classifiers only ever return `Youtube` or `Instagram`; anything that
/// is not recognisably YouTube collapses to `Instagram`. `Unknown` is kept so
/// serialized records from other producers still round-trip, but nothing in
/// this workspace assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoPlatform {
    Youtube,
    Instagram,
    Unknown,
}

impl VideoPlatform {
    /// Classify from the raw link text.
    pub fn from_url(url: &str) -> Self {
        let url = url.to_ascii_lowercase();
        if url.contains("youtube.com") || url.contains("youtu.be") {
            VideoPlatform::Youtube
        } else {
            VideoPlatform::Instagram
        }
    }

    /// Classify from the free-text platform name returned by the AI lookup.
    pub fn from_ai_label(label: &str) -> Self {
        if label.to_uppercase().contains("YOUTUBE") {
            VideoPlatform::Youtube
        } else {
            VideoPlatform::Instagram
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoPlatform::Youtube => "YOUTUBE",
            VideoPlatform::Instagram => "INSTAGRAM",
            VideoPlatform::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable badge text.
    pub fn display_name(&self) -> &'static str {
        match self {
            VideoPlatform::Youtube => "YouTube",
            VideoPlatform::Instagram => "Instagram",
            VideoPlatform::Unknown => "Unknown",
        }
    }

    pub fn is_youtube(&self) -> bool {
        matches!(self, VideoPlatform::Youtube)
    }
}

impl fmt::Display for VideoPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url_youtube_hosts() {
        assert_eq!(
            VideoPlatform::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            VideoPlatform::Youtube
        );
        assert_eq!(
            VideoPlatform::from_url("https://youtu.be/dQw4w9WgXcQ"),
            VideoPlatform::Youtube
        );
        assert_eq!(
            VideoPlatform::from_url("https://m.youtube.com/shorts/dQw4w9WgXcQ"),
            VideoPlatform::Youtube
        );
        // Case variations in the host still count
        assert_eq!(
            VideoPlatform::from_url("https://WWW.YOUTUBE.COM/watch?v=dQw4w9WgXcQ"),
            VideoPlatform::Youtube
        );
    }

    #[test]
    fn test_from_url_everything_else_is_instagram() {
        assert_eq!(
            VideoPlatform::from_url("https://www.instagram.com/reel/Cabc123/"),
            VideoPlatform::Instagram
        );
        assert_eq!(
            VideoPlatform::from_url("https://vimeo.com/123456"),
            VideoPlatform::Instagram
        );
        assert_eq!(VideoPlatform::from_url("not a link"), VideoPlatform::Instagram);
    }

    #[test]
    fn test_from_ai_label() {
        assert_eq!(VideoPlatform::from_ai_label("YouTube"), VideoPlatform::Youtube);
        assert_eq!(VideoPlatform::from_ai_label("youtube shorts"), VideoPlatform::Youtube);
        assert_eq!(VideoPlatform::from_ai_label("Instagram"), VideoPlatform::Instagram);
        assert_eq!(VideoPlatform::from_ai_label("TikTok"), VideoPlatform::Instagram);
        assert_eq!(VideoPlatform::from_ai_label(""), VideoPlatform::Instagram);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&VideoPlatform::Youtube).unwrap(),
            "\"YOUTUBE\""
        );
        let parsed: VideoPlatform = serde_json::from_str("\"UNKNOWN\"").unwrap();
        assert_eq!(parsed, VideoPlatform::Unknown);
    }
}
