//! Message dispatcher - Routes messages to the game

use super::parser::MessageParser;
use crate::application::game::Reply;
use crate::application::services::GameService;
use crate::domain::entities::{Content, GameCommand, Message, User};

/// Routes parsed messages to the game service and renders replies
pub struct MessageDispatcher {
    parser: MessageParser,
    game: GameService,
}

impl MessageDispatcher {
    pub fn new(parser: MessageParser, game: GameService) -> Self {
        Self { parser, game }
    }

    /// Process a raw text message
    pub async fn process_text(
        &self,
        chat_id: impl Into<String>,
        text: impl Into<String>,
        sender: Option<User>,
    ) -> Option<String> {
        let message = self.parser.parse(chat_id, text, sender);
        self.dispatch(&message).await
    }

    /// Handle one message to completion and return the text to send back
    pub async fn dispatch(&self, message: &Message) -> Option<String> {
        let chat_id = message.chat_id.as_str();
        let who = message
            .sender
            .as_ref()
            .map(|u| u.display_name())
            .unwrap_or_else(|| chat_id.to_string());

        let result = match &message.content {
            Content::Empty => return None,
            Content::Command { name, .. } => {
                tracing::debug!(message_id = %message.id, "[{}] {} sent /{}", chat_id, who, name);
                match GameCommand::from_name(name) {
                    Some(command) => self.game.handle_command(chat_id, command).await,
                    None => self.game.handle_unknown(chat_id, name).await,
                }
            }
            Content::Text(text) => {
                tracing::debug!(message_id = %message.id, "[{}] {} guessed {:?}", chat_id, who, text);
                self.game.handle_guess(chat_id, text).await
            }
        };

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("[{}] Failed to handle message: {}", chat_id, e);
                Reply::Failure
            }
        };

        Some(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::domain::entities::DailyWord;
    use crate::domain::traits::FixedClock;
    use crate::infrastructure::storage::MemorySessionStore;
    use crate::infrastructure::words::StaticWordProvider;

    fn dispatcher() -> MessageDispatcher {
        let game = GameService::new(
            Arc::new(MemorySessionStore::new()),
            Arc::new(StaticWordProvider::new(DailyWord::new("ASSET", "Something of value."))),
            Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())),
        );
        MessageDispatcher::new(MessageParser::new("/"), game)
    }

    #[tokio::test]
    async fn test_start_and_help() {
        let d = dispatcher();
        let welcome = d.process_text("1", "/start", None).await.unwrap();
        assert!(welcome.contains("/play"));

        let help = d.process_text("1", "/help", None).await.unwrap();
        assert!(help.contains("/definition"));
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let d = dispatcher();
        let reply = d.process_text("1", "/quote", None).await.unwrap();
        assert_eq!(reply, "Unknown command: /quote. Try /help.");
    }

    #[tokio::test]
    async fn test_empty_message_ignored() {
        let d = dispatcher();
        assert_eq!(d.process_text("1", "", None).await, None);
    }

    #[tokio::test]
    async fn test_guess_round_trip() {
        let d = dispatcher();
        d.process_text("1", "/play", None).await.unwrap();
        let reply = d.process_text("1", "assee", None).await.unwrap();
        assert!(reply.starts_with("A S S E E\n🟩🟩🟩🟩🟨"));
        assert!(reply.ends_with("Attempt 1/6"));
    }
}
