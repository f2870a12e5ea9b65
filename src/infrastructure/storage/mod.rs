//! In-memory session storage

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::errors::StorageError;
use crate::domain::entities::Session;
use crate::domain::traits::SessionStore;

/// Session store backed by a map keyed by chat id. Lost on restart.
#[derive(Default, Clone)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, chat_id: &str) -> Result<Session, StorageError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(chat_id).cloned().unwrap_or_default())
    }

    async fn save(&self, chat_id: &str, session: &Session) -> Result<(), StorageError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(chat_id.to_string(), session.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DailyWord;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_load_missing_returns_default() {
        let store = MemorySessionStore::new();
        let session = store.load("nobody").await.unwrap();
        assert_eq!(session, Session::default());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let store = MemorySessionStore::new();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let mut session = Session::new();
        session.start(&DailyWord::fallback(), today);
        store.save("1", &session).await.unwrap();

        session.attempts.push("BONDS".to_string());
        store.save("1", &session).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.load("1").await.unwrap().attempts, vec!["BONDS".to_string()]);
        assert_eq!(store.load("2").await.unwrap(), Session::default());
    }
}
