//! Input line parsing.

use snap_models::DownloadFormat;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: /{0}")]
    Unknown(String),

    #[error("Card number must be a positive integer, got {0:?}")]
    InvalidCardNumber(String),
}

/// One line typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain chat input
    Send(String),
    /// `/mp4 [n]` or `/mp3 [n]`; `None` means the latest card
    Download {
        card: Option<usize>,
        format: DownloadFormat,
    },
    History,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Ok(Command::Send(line.to_string()));
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let arg = parts.next();

        match name.as_str() {
            "history" => Ok(Command::History),
            "help" => Ok(Command::Help),
            "quit" | "exit" | "close" => Ok(Command::Quit),
            _ => {
                // `/mp4` and `/mp3` are named after the download format.
                let format = name
                    .parse::<DownloadFormat>()
                    .map_err(|_| CommandError::Unknown(name.clone()))?;
                let card = arg.map(parse_card_number).transpose()?;
                Ok(Command::Download { card, format })
            }
        }
    }
}

fn parse_card_number(arg: &str) -> Result<usize, CommandError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidCardNumber(arg.to_string())),
    }
}

pub const HELP_TEXT: &str = "Paste a YouTube or Instagram link to analyze it.\n\
/mp4 [n]   send card n (default: latest) to the bot as video\n\
/mp3 [n]   send card n (default: latest) to the bot as audio\n\
/history   list requests sent to the bot\n\
/quit      close";
