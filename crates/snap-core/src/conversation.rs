//! Conversation controller.
//!
//! Owns the append-only message log and drives the host bridge. Each
//! submission is handled to completion before the next one is accepted, so
//! there is never more than one resolution in flight per conversation.

use std::sync::Arc;

use snap_models::{
    find_link, ChatMessage, DownloadFormat, DownloadHistoryItem, DownloadRequest, MessageId,
    VideoMetadata,
};
use tracing::{debug, info, warn};

use crate::bridge::{Haptic, HostBridge, ImpactStyle, NotificationKind};
use crate::error::{CoreError, CoreResult};
use crate::history::DownloadHistory;
use crate::resolver::MetadataResolver;

pub const WELCOME_TEXT: &str = "Hello! I'm the SnapMedia AI bot. 🤖\n\n\
Send me a YouTube or Instagram link. I'll analyze it and have the real file sent to you.";
pub const INVALID_LINK_TEXT: &str = "Please send a valid link.";
pub const HANDOFF_CONFIRMATION_TEXT: &str =
    "Request received! The bot will send you the file shortly.";

/// What happened to a submitted line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input, nothing appended
    Ignored,
    /// No link found; the guidance reply has this id
    InvalidLink(MessageId),
    /// A video card was appended
    Card {
        message_id: MessageId,
        resolved: bool,
    },
}

/// Result of handing a download request to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffOutcome {
    pub request: DownloadRequest,
    /// Whether the user accepted the confirmation (and the view was closed)
    pub confirmed: bool,
}

pub struct Conversation {
    resolver: MetadataResolver,
    bridge: Arc<dyn HostBridge>,
    messages: Vec<ChatMessage>,
    next_id: u64,
    history: DownloadHistory,
    closed: bool,
}

impl Conversation {
    /// Create a conversation seeded with the welcome message.
    pub fn new(resolver: MetadataResolver, bridge: Arc<dyn HostBridge>) -> Self {
        let mut conversation = Self {
            resolver,
            bridge,
            messages: Vec::new(),
            next_id: 0,
            history: DownloadHistory::new(),
            closed: false,
        };
        let id = conversation.next_message_id();
        conversation
            .messages
            .push(ChatMessage::bot_text(id, WELCOME_TEXT));
        conversation
    }

    /// Tell the host the view is ready and take the full height.
    pub fn start(&self) {
        self.bridge.signal_ready();
        self.bridge.expand();
        if let Some(color) = self.bridge.theme_background() {
            debug!(background = %color, "Applying host theme background");
        }
        info!(ai_lookup = self.resolver.has_lookup(), "Conversation started");
    }

    /// Handle one line of user input.
    pub async fn handle_send(&mut self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        let user_id = self.next_message_id();
        self.messages.push(ChatMessage::user_text(user_id, text));

        if find_link(text).is_none() {
            debug!(input = %text, "Input has no link");
            let id = self.next_message_id();
            self.messages.push(ChatMessage::bot_text(id, INVALID_LINK_TEXT));
            return SendOutcome::InvalidLink(id);
        }

        let resolution = self.resolver.resolve_tagged(text).await;
        let resolved = resolution.is_resolved();
        self.bridge.haptic(Haptic::Impact(ImpactStyle::Medium));

        let id = self.next_message_id();
        self.messages
            .push(ChatMessage::bot_card(id, resolution.into_metadata()));

        SendOutcome::Card {
            message_id: id,
            resolved,
        }
    }

    /// Hand a download request for the card `message_id` to the host.
    ///
    /// On success the request is recorded in the history and the user is
    /// asked to confirm; the view is closed only if they accept.
    pub async fn request_download(
        &mut self,
        message_id: MessageId,
        format: DownloadFormat,
    ) -> CoreResult<HandoffOutcome> {
        let video = self.card(message_id)?.clone();
        let request = DownloadRequest::for_video(&video, format);
        let payload = request.to_json()?;

        if let Err(e) = self.bridge.send_payload(&payload) {
            warn!(message_id = %message_id, error = %e, "Download handoff failed");
            return Err(e.into());
        }

        info!(
            url = %request.url,
            format = %format,
            "Download request handed to host"
        );
        self.bridge
            .haptic(Haptic::Notification(NotificationKind::Success));
        self.history.record(DownloadHistoryItem::new(video, format));

        let confirmed = self
            .bridge
            .request_confirmation(HANDOFF_CONFIRMATION_TEXT)
            .await;
        if confirmed {
            self.close();
        }

        Ok(HandoffOutcome { request, confirmed })
    }

    /// Close the embedded view.
    pub fn close(&mut self) {
        if !self.closed {
            self.bridge.close();
            self.closed = true;
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn message(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Card messages in the order they were appended.
    pub fn cards(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| m.is_card())
    }

    pub fn history(&self) -> &DownloadHistory {
        &self.history
    }

    fn card(&self, id: MessageId) -> CoreResult<&VideoMetadata> {
        let message = self.message(id).ok_or(CoreError::MessageNotFound(id))?;
        message.video.as_ref().ok_or(CoreError::NotAVideoCard(id))
    }

    fn next_message_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }
}
