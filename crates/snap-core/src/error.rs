//! Core error types.

use snap_models::{MessageId, PayloadError};
use thiserror::Error;

use crate::bridge::BridgeError;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    #[error("Message {0} is not a video card")]
    NotAVideoCard(MessageId),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("Payload error: {0}")]
    Payload(#[from] PayloadError),
}

impl CoreError {
    /// Whether the front-end is running outside its host platform.
    pub fn is_host_unavailable(&self) -> bool {
        matches!(self, CoreError::Bridge(BridgeError::Unavailable))
    }
}
