//! Plain-text rendering of the conversation.

use snap_core::{Conversation, DownloadHistory};
use snap_models::{ChatMessage, MessageId, MessageKind, VideoMetadata};

/// Prints messages as they are appended to the log.
#[derive(Debug, Default)]
pub struct Transcript {
    printed: usize,
    cards: Vec<MessageId>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print every message not printed yet.
    pub fn flush(&mut self, conversation: &Conversation) {
        for message in &conversation.messages()[self.printed..] {
            if message.is_card() {
                self.cards.push(message.id);
            }
            println!("{}", render_message(message, self.cards.len()));
        }
        self.printed = conversation.messages().len();
    }

    /// Message id of card `n` (1-based), or the latest card when `None`.
    pub fn card_id(&self, n: Option<usize>) -> Option<MessageId> {
        match n {
            Some(n) => self.cards.get(n.checked_sub(1)?).copied(),
            None => self.cards.last().copied(),
        }
    }
}

pub const THINKING_TEXT: &str = "AI is thinking...";

/// Indicator shown while a submission is being answered. Blank input gets no
/// reply, so no indicator either.
pub fn thinking_indicator(input: &str) -> Option<&'static str> {
    (!input.trim().is_empty()).then_some(THINKING_TEXT)
}

/// Render one message; `card_number` is only used for cards.
pub fn render_message(message: &ChatMessage, card_number: usize) -> String {
    let speaker = match message.kind {
        MessageKind::User => "you",
        MessageKind::Bot => "bot",
    };

    match (&message.video, &message.text) {
        (Some(video), _) => format!("{}> [card #{}]\n{}", speaker, card_number, render_card(video)),
        (None, Some(text)) => format!("{}> {}", speaker, text),
        (None, None) => format!("{}>", speaker),
    }
}

pub fn render_card(video: &VideoMetadata) -> String {
    let mut lines = vec![
        format!("  [{}] {}", video.platform.display_name(), video.title),
        format!("  by {}  ·  {}", video.author, video.duration),
    ];
    if let Some(summary) = &video.ai_summary {
        lines.push(format!("  \"{}\"", summary));
    }
    lines.push(format!("  thumbnail: {}", video.thumbnail));
    lines.push("  /mp4 to send to the bot, /mp3 for audio only".to_string());
    lines.join("\n")
}

pub fn render_history(history: &DownloadHistory) -> String {
    if history.is_empty() {
        return "No requests sent yet.".to_string();
    }
    history
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "{}. [{}] {} ({}) {}",
                i + 1,
                item.video.platform.display_name(),
                item.video.title,
                item.format,
                item.timestamp.format("%Y-%m-%d %H:%M")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
