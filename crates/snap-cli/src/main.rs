//! SnapMedia terminal front-end.

mod commands;
mod config;
mod console;
mod logging;
mod render;

use std::io::Write;
use std::sync::Arc;

use snap_ai_client::GeminiClient;
use snap_core::{Conversation, MetadataResolver};
use tracing::{info, warn};

use crate::commands::{Command, HELP_TEXT};
use crate::config::CliConfig;
use crate::console::{stdin_lines, ConsoleBridge};
use crate::render::{render_history, thinking_indicator, Transcript};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env();
    logging::init(config.log_format);

    info!("Starting snapmedia");
    info!("Gemini config: {:?}", config.gemini);

    let resolver = match GeminiClient::new(config.gemini.clone()) {
        Ok(client) => MetadataResolver::new(Arc::new(client)),
        Err(e) => {
            warn!("AI lookup disabled, links will get placeholder cards: {}", e);
            MetadataResolver::offline()
        }
    };

    let input = stdin_lines();
    let bridge = Arc::new(ConsoleBridge::new(
        input.clone(),
        config.theme_background.clone(),
        config.standalone,
    ));

    let mut conversation = Conversation::new(resolver, bridge.clone());
    conversation.start();

    let mut transcript = Transcript::new();
    transcript.flush(&conversation);

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = input.lock().await.next_line().await?;
        let Some(line) = line else {
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Send(text)) => {
                if let Some(indicator) = thinking_indicator(&text) {
                    println!("{}", indicator);
                }
                conversation.handle_send(&text).await;
            }
            Ok(Command::Download { card, format }) => match transcript.card_id(card) {
                Some(message_id) => match conversation.request_download(message_id, format).await {
                    Ok(outcome) => {
                        info!(title = %outcome.request.title, confirmed = outcome.confirmed, "Handoff complete");
                    }
                    Err(e) => println!("! {}", e),
                },
                None => println!("! No such card"),
            },
            Ok(Command::History) => println!("{}", render_history(conversation.history())),
            Ok(Command::Help) => println!("{}", HELP_TEXT),
            Ok(Command::Quit) => conversation.close(),
            Err(e) => println!("! {}", e),
        }

        transcript.flush(&conversation);

        if conversation.is_closed() || bridge.is_closed() {
            break;
        }
    }

    info!("snapmedia exited");
    Ok(())
}
