//! Terminal host adapter.
//!
//! Stands in for the messaging client: payloads are echoed to stdout,
//! confirmations are read from the same stdin the chat loop uses.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use snap_core::{BridgeError, Haptic, HostBridge};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Shared line reader over stdin.
pub type InputLines = Arc<Mutex<Lines<BufReader<Stdin>>>>;

pub fn stdin_lines() -> InputLines {
    Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()))
}

pub struct ConsoleBridge {
    input: InputLines,
    theme_background: Option<String>,
    standalone: bool,
    closed: AtomicBool,
}

impl ConsoleBridge {
    pub fn new(input: InputLines, theme_background: Option<String>, standalone: bool) -> Self {
        Self {
            input,
            theme_background,
            standalone,
            closed: AtomicBool::new(false),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostBridge for ConsoleBridge {
    fn signal_ready(&self) {
        debug!("Host: ready");
    }

    fn expand(&self) {
        debug!("Host: expand");
    }

    fn send_payload(&self, json: &str) -> Result<(), BridgeError> {
        if self.standalone {
            return Err(BridgeError::Unavailable);
        }
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, ">> sendData {}", json)
            .and_then(|()| stdout.flush())
            .map_err(|e| BridgeError::channel(e.to_string()))
    }

    async fn request_confirmation(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if let Err(e) = std::io::stdout().flush() {
            warn!(error = %e, "Failed to flush stdout");
        }

        let answer = match self.input.lock().await.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => return false,
            Err(e) => {
                warn!(error = %e, "Failed to read confirmation");
                return false;
            }
        };
        is_affirmative(&answer)
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        println!("[view closed]");
    }

    fn haptic(&self, feedback: Haptic) {
        debug!(?feedback, "Host: haptic");
    }

    fn theme_background(&self) -> Option<String> {
        self.theme_background.clone()
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "ok")
}
