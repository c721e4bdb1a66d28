//! Metadata resolver and conversation controller.
//!
//! This crate provides:
//! - The metadata resolver (AI lookup with a local fallback)
//! - The host bridge capability trait implemented by platform adapters
//! - The conversation controller owning the append-only message log
//! - Download handoff and history

pub mod bridge;
pub mod conversation;
pub mod error;
pub mod history;
pub mod resolver;

pub use bridge::{BridgeError, Haptic, HostBridge, ImpactStyle, NotificationKind};
pub use conversation::{Conversation, HandoffOutcome, SendOutcome};
pub use error::{CoreError, CoreResult};
pub use history::DownloadHistory;
pub use resolver::{MetadataResolver, Resolution};
