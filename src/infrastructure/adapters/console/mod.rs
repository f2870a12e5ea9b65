//! Console adapter for local play

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;
use crate::domain::traits::{Bot, BotInfo};

/// Chat id every console message is filed under
pub const CONSOLE_CHAT_ID: &str = "console";

/// Console bot adapter reading guesses from stdin
pub struct ConsoleAdapter {
    info: BotInfo,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self {
            info: BotInfo {
                id: "console".to_string(),
                name: "wordday-bot".to_string(),
                username: "console".to_string(),
            },
        }
    }

    /// Read lines until EOF or `/quit`, replying to each
    pub async fn run(&self, dispatcher: &MessageDispatcher) -> Result<(), BotError> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        loop {
            stdout
                .write_all(b"> ")
                .await
                .map_err(|e| BotError::Internal(e.to_string()))?;
            stdout.flush().await.map_err(|e| BotError::Internal(e.to_string()))?;

            let Some(line) = lines
                .next_line()
                .await
                .map_err(|e| BotError::Internal(e.to_string()))?
            else {
                break;
            };

            if matches!(line.trim(), "/quit" | "/exit") {
                break;
            }

            if let Some(reply) = dispatcher.process_text(CONSOLE_CHAT_ID, line, None).await {
                self.send_message(CONSOLE_CHAT_ID, &reply).await?;
            }
        }

        Ok(())
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode)");
        println!("[BOT] Type /play to start, /quit to leave.");
        Ok(())
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
        println!("[BOT] {}", text);
        Ok("console_msg".to_string())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
