use async_trait::async_trait;
use crate::application::errors::StorageError;
use crate::domain::entities::Session;

/// Session store - per-chat game state keyed by chat id
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session for a chat, or a fresh one if none exists yet
    async fn load(&self, chat_id: &str) -> Result<Session, StorageError>;

    /// Overwrite the session for a chat
    async fn save(&self, chat_id: &str, session: &Session) -> Result<(), StorageError>;
}
