//! Host platform bridge.
//!
//! The chat front-end runs embedded inside a messaging client. Everything it
//! needs from that client goes through [`HostBridge`]; adapters for a real
//! host (or a terminal) live outside this crate.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Only works inside Telegram")]
    Unavailable,

    #[error("Host data channel error: {0}")]
    Channel(String),
}

impl BridgeError {
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// Haptic feedback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Haptic {
    Impact(ImpactStyle),
    Notification(NotificationKind),
}

/// Capabilities the host platform exposes to the front-end.
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Tell the host the view has finished loading.
    fn signal_ready(&self);

    /// Ask the host to give the view its full height.
    fn expand(&self);

    /// Push a JSON payload to the host data channel. No reply is observable.
    fn send_payload(&self, json: &str) -> Result<(), BridgeError>;

    /// Show a confirmation dialog; resolves to whether the user accepted.
    async fn request_confirmation(&self, message: &str) -> bool;

    /// Close the embedded view.
    fn close(&self);

    fn haptic(&self, _feedback: Haptic) {}

    /// Background colour from the host theme, if any.
    fn theme_background(&self) -> Option<String> {
        None
    }
}
