//! Video metadata resolver.
//!
//! Turns a raw link into a [`VideoMetadata`] record. The AI lookup is tried
//! once; if it is not configured or fails in any way (transport, status,
//! JSON, schema) a locally synthesised placeholder record is returned
//! instead. Callers always get a usable record.

use std::sync::Arc;

use snap_ai_client::{AiError, AiMetadata, MetadataLookup};
use snap_models::thumbnail::{placeholder_thumbnail_url, youtube_thumbnail_url, STOCK_THUMBNAIL_URL};
use snap_models::{extract_thumbnail_video_id, generate_local_id, VideoMetadata, VideoPlatform};
use tracing::{debug, info, warn};

pub const UNTITLED_VIDEO: &str = "Untitled video";
pub const UNKNOWN_AUTHOR: &str = "Unknown author";
/// Quality label for resolved records; no real duration is known.
pub const RESOLVED_DURATION: &str = "HD 1080p";

pub const PENDING_TITLE: &str = "Analyzing video...";
pub const PENDING_AUTHOR: &str = "Uploader";
pub const PENDING_DURATION: &str = "HD";
pub const PENDING_SUMMARY: &str = "The system is preparing the video for download.";

/// Outcome of a single resolution.
///
/// Both variants carry a complete record; the tag only tells whether it came
/// from the AI lookup or from the fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(VideoMetadata),
    Unresolved {
        metadata: VideoMetadata,
        reason: String,
    },
}

impl Resolution {
    pub fn metadata(&self) -> &VideoMetadata {
        match self {
            Resolution::Resolved(metadata) => metadata,
            Resolution::Unresolved { metadata, .. } => metadata,
        }
    }

    pub fn into_metadata(self) -> VideoMetadata {
        match self {
            Resolution::Resolved(metadata) => metadata,
            Resolution::Unresolved { metadata, .. } => metadata,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Stateless resolver around an optional AI lookup.
#[derive(Clone)]
pub struct MetadataResolver {
    lookup: Option<Arc<dyn MetadataLookup>>,
}

impl MetadataResolver {
    pub fn new(lookup: Arc<dyn MetadataLookup>) -> Self {
        Self {
            lookup: Some(lookup),
        }
    }

    /// Resolver without an AI lookup; every call takes the fallback.
    pub fn offline() -> Self {
        Self { lookup: None }
    }

    pub fn has_lookup(&self) -> bool {
        self.lookup.is_some()
    }

    /// Resolve `url` into a record. Never fails.
    pub async fn resolve(&self, url: &str) -> VideoMetadata {
        self.resolve_tagged(url).await.into_metadata()
    }

    /// Resolve `url`, keeping track of which path produced the record.
    pub async fn resolve_tagged(&self, url: &str) -> Resolution {
        let Some(lookup) = &self.lookup else {
            debug!(url = %url, "No AI lookup configured, using fallback");
            return Resolution::Unresolved {
                metadata: fallback_metadata(url),
                reason: AiError::unavailable("no API key configured").to_string(),
            };
        };

        match lookup.lookup(url).await {
            Ok(ai) => {
                let metadata = build_resolved(url, ai);
                info!(
                    url = %url,
                    local_id = %metadata.id,
                    platform = %metadata.platform,
                    "Resolved video metadata"
                );
                Resolution::Resolved(metadata)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "AI metadata lookup failed, using fallback");
                Resolution::Unresolved {
                    metadata: fallback_metadata(url),
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Build the record for a successful lookup.
pub fn build_resolved(url: &str, ai: AiMetadata) -> VideoMetadata {
    let platform = VideoPlatform::from_ai_label(&ai.platform);
    let id = generate_local_id();

    let thumbnail = if platform.is_youtube() {
        match extract_thumbnail_video_id(url) {
            Some(video_id) => youtube_thumbnail_url(video_id),
            None => placeholder_thumbnail_url(&id),
        }
    } else {
        // No unauthenticated thumbnail endpoint for Instagram.
        STOCK_THUMBNAIL_URL.to_string()
    };

    VideoMetadata {
        id,
        url: url.to_string(),
        platform,
        title: non_blank_or(ai.title, UNTITLED_VIDEO),
        author: non_blank_or(ai.author, UNKNOWN_AUTHOR),
        thumbnail,
        duration: RESOLVED_DURATION.to_string(),
        ai_summary: Some(ai.summary).filter(|s| !s.trim().is_empty()),
    }
}

/// Placeholder record used whenever the lookup is unavailable or fails.
pub fn fallback_metadata(url: &str) -> VideoMetadata {
    VideoMetadata {
        id: generate_local_id(),
        url: url.to_string(),
        platform: VideoPlatform::from_url(url),
        title: PENDING_TITLE.to_string(),
        author: PENDING_AUTHOR.to_string(),
        thumbnail: STOCK_THUMBNAIL_URL.to_string(),
        duration: PENDING_DURATION.to_string(),
        ai_summary: Some(PENDING_SUMMARY.to_string()),
    }
}

fn non_blank_or(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}
