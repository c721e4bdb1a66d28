//! Video metadata models.

use serde::{Deserialize, Serialize};

use crate::platform::VideoPlatform;

/// Descriptive metadata for a submitted link.
///
/// Built fresh for every resolution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    /// Short local id, unique per resolution attempt
    pub id: String,

    /// Original input string, unmodified
    pub url: String,

    pub platform: VideoPlatform,

    pub title: String,

    pub author: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Display-only quality label (e.g. "HD 1080p"), not a real duration
    pub duration: String,

    /// Short AI-written description of the video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VideoMetadata {
        VideoMetadata {
            id: "k3x9qa".to_string(),
            url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            platform: VideoPlatform::Youtube,
            title: "Never Gonna Give You Up".to_string(),
            author: "Rick Astley".to_string(),
            thumbnail: "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".to_string(),
            duration: "HD 1080p".to_string(),
            ai_summary: None,
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut meta = sample();
        meta.ai_summary = Some("A classic pop music video".to_string());

        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["platform"], "YOUTUBE");
        assert_eq!(value["aiSummary"], "A classic pop music video");
        assert!(value.get("ai_summary").is_none());
    }

    #[test]
    fn test_missing_summary_is_omitted() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("aiSummary").is_none());

        let parsed: VideoMetadata = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.ai_summary, None);
    }
}
