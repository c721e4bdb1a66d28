//! Chat message models for the conversation log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::video::VideoMetadata;

/// Position of a message in its conversation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    User,
    Bot,
}

/// A single entry in the conversation.
///
/// Either plain text or a video card; bot cards carry the resolved metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: MessageId,

    #[serde(rename = "type")]
    pub kind: MessageKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, rename = "videoData", skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoMetadata>,

    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user_text(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            kind: MessageKind::User,
            text: Some(text.into()),
            video: None,
            timestamp: Utc::now(),
        }
    }

    pub fn bot_text(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            kind: MessageKind::Bot,
            text: Some(text.into()),
            video: None,
            timestamp: Utc::now(),
        }
    }

    pub fn bot_card(id: MessageId, video: VideoMetadata) -> Self {
        Self {
            id,
            kind: MessageKind::Bot,
            text: None,
            video: Some(video),
            timestamp: Utc::now(),
        }
    }

    /// Whether this message renders as a video card.
    pub fn is_card(&self) -> bool {
        self.video.is_some()
    }
}
