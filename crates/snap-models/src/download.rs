//! Download handoff payload and history models.
//!
//! The handoff payload is the only thing that leaves the front-end: it is
//! serialized to JSON and pushed through the host platform's data channel,
//! where an external agent picks it up and does the actual download.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::video::VideoMetadata;

/// Errors building or reading a handoff payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Unsupported download format: {0}")]
    InvalidFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Requested output container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    /// Video with audio
    Mp4,
    /// Audio only
    Mp3,
}

impl DownloadFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadFormat::Mp4 => "mp4",
            DownloadFormat::Mp3 => "mp3",
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DownloadFormat {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mp4" => Ok(DownloadFormat::Mp4),
            "mp3" => Ok(DownloadFormat::Mp3),
            other => Err(PayloadError::InvalidFormat(other.to_string())),
        }
    }
}

/// The only action the receiving agent understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadAction {
    Download,
}

/// Payload handed to the host data channel.
///
/// Wire shape: `{"action":"download","url":…,"format":"mp4"|"mp3","title":…}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub action: DownloadAction,
    pub url: String,
    pub format: DownloadFormat,
    pub title: String,
}

impl DownloadRequest {
    /// Build the request for a resolved video card.
    pub fn for_video(video: &VideoMetadata, format: DownloadFormat) -> Self {
        Self {
            action: DownloadAction::Download,
            url: video.url.clone(),
            format,
            title: video.title.clone(),
        }
    }

    /// Serialize to the JSON string sent over the data channel.
    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a payload received from the data channel.
    pub fn from_json(data: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(data)?)
    }
}

/// A handed-off request, kept for the history view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadHistoryItem {
    pub video: VideoMetadata,
    pub format: DownloadFormat,
    pub timestamp: DateTime<Utc>,
}

impl DownloadHistoryItem {
    pub fn new(video: VideoMetadata, format: DownloadFormat) -> Self {
        Self {
            video,
            format,
            timestamp: Utc::now(),
        }
    }
}
