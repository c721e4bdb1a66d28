//! Shared data models for the SnapMedia chat front-end.
//!
//! This crate provides Serde-serializable types for:
//! - Video platforms and resolved video metadata
//! - Chat messages shown in the conversation log
//! - Download handoff payloads and history
//! - Thumbnail URL conventions and link helpers

pub mod download;
pub mod message;
pub mod platform;
pub mod thumbnail;
pub mod utils;
pub mod video;

// Re-export common types
pub use download::{DownloadFormat, DownloadHistoryItem, DownloadRequest, PayloadError};
pub use message::{ChatMessage, MessageId, MessageKind};
pub use platform::VideoPlatform;
pub use utils::{extract_thumbnail_video_id, find_link, generate_local_id};
pub use video::VideoMetadata;
