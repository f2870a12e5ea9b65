use std::sync::Arc;

use crate::application::errors::BotError;
use crate::application::game::{play_allowed, step, Event, Reply, Rules};
use crate::domain::entities::{GameCommand, Session};
use crate::domain::traits::{Clock, SessionStore, WordProvider};

/// Runs game events against stored sessions
pub struct GameService {
    store: Arc<dyn SessionStore>,
    words: Arc<dyn WordProvider>,
    clock: Arc<dyn Clock>,
    bypass_daily_limit: bool,
}

impl GameService {
    pub fn new(store: Arc<dyn SessionStore>, words: Arc<dyn WordProvider>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            words,
            clock,
            bypass_daily_limit: false,
        }
    }

    /// Allow more than one game per day (development mode)
    pub fn with_bypass_daily_limit(mut self, bypass: bool) -> Self {
        self.bypass_daily_limit = bypass;
        self
    }

    fn rules(&self) -> Rules {
        Rules::new(self.clock.today(), self.bypass_daily_limit)
    }

    pub async fn handle_command(&self, chat_id: &str, command: GameCommand) -> Result<Reply, BotError> {
        match command {
            GameCommand::Start => self.apply(chat_id, Event::Start).await,
            GameCommand::Help => self.apply(chat_id, Event::Help).await,
            GameCommand::Definition => self.apply(chat_id, Event::Definition).await,
            GameCommand::Play => self.play(chat_id).await,
        }
    }

    pub async fn handle_unknown(&self, chat_id: &str, name: &str) -> Result<Reply, BotError> {
        self.apply(chat_id, Event::Unknown(name.to_string())).await
    }

    pub async fn handle_guess(&self, chat_id: &str, text: &str) -> Result<Reply, BotError> {
        self.apply(chat_id, Event::Guess(text.to_string())).await
    }

    async fn play(&self, chat_id: &str) -> Result<Reply, BotError> {
        let rules = self.rules();
        let session = self.store.load(chat_id).await?;

        // Refuse before touching the word provider
        if !play_allowed(&session, &rules) {
            tracing::debug!("[{}] already played on {}", chat_id, rules.today);
            return Ok(Reply::AlreadyPlayed);
        }

        let word = self.words.word_of_the_day(rules.today).await;
        tracing::info!("[{}] starting game for {}", chat_id, rules.today);
        self.commit(chat_id, Event::Play(word), session, &rules).await
    }

    async fn apply(&self, chat_id: &str, event: Event) -> Result<Reply, BotError> {
        let rules = self.rules();
        let session = self.store.load(chat_id).await?;
        self.commit(chat_id, event, session, &rules).await
    }

    async fn commit(
        &self,
        chat_id: &str,
        event: Event,
        session: Session,
        rules: &Rules,
    ) -> Result<Reply, BotError> {
        let before = session.clone();
        let (session, reply) = step(event, session, rules)?;

        if session != before {
            self.store.save(chat_id, &session).await?;
        }

        if reply.is_terminal() {
            tracing::info!("[{}] game over after {} attempts", chat_id, session.attempt_count());
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::entities::{DailyWord, MAX_ATTEMPTS};
    use crate::domain::traits::FixedClock;
    use crate::infrastructure::storage::MemorySessionStore;
    use crate::infrastructure::words::StaticWordProvider;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    struct Harness {
        service: GameService,
        store: Arc<MemorySessionStore>,
        words: Arc<StaticWordProvider>,
        clock: Arc<FixedClock>,
    }

    fn harness(bypass: bool) -> Harness {
        let store = Arc::new(MemorySessionStore::new());
        let words = Arc::new(StaticWordProvider::new(DailyWord::new("ASSET", "Something of value.")));
        let clock = Arc::new(FixedClock::new(today()));
        let service = GameService::new(store.clone(), words.clone(), clock.clone())
            .with_bypass_daily_limit(bypass);
        Harness { service, store, words, clock }
    }

    #[tokio::test]
    async fn test_play_then_guess() {
        let h = harness(false);
        let reply = h.service.handle_command("1", GameCommand::Play).await.unwrap();
        assert!(matches!(reply, Reply::GameStarted { .. }));

        let reply = h.service.handle_guess("1", "ASSET").await.unwrap();
        assert!(matches!(reply, Reply::Won { attempts: 1, .. }));

        let session = h.store.load("1").await.unwrap();
        assert!(!session.game_active);
        assert_eq!(session.attempts, vec!["ASSET".to_string()]);
    }

    #[tokio::test]
    async fn test_second_play_same_day_skips_provider() {
        let h = harness(false);
        h.service.handle_command("1", GameCommand::Play).await.unwrap();
        h.service.handle_guess("1", "BONDS").await.unwrap();
        assert_eq!(h.words.calls(), 1);

        let reply = h.service.handle_command("1", GameCommand::Play).await.unwrap();
        assert_eq!(reply, Reply::AlreadyPlayed);
        assert_eq!(h.words.calls(), 1);

        let session = h.store.load("1").await.unwrap();
        assert_eq!(session.attempts, vec!["BONDS".to_string()]);
    }

    #[tokio::test]
    async fn test_bypass_allows_replay() {
        let h = harness(true);
        h.service.handle_command("1", GameCommand::Play).await.unwrap();
        h.service.handle_guess("1", "BONDS").await.unwrap();

        let reply = h.service.handle_command("1", GameCommand::Play).await.unwrap();
        assert!(matches!(reply, Reply::GameStarted { .. }));
        assert!(h.store.load("1").await.unwrap().attempts.is_empty());
    }

    #[tokio::test]
    async fn test_new_day_allows_play() {
        let h = harness(false);
        h.service.handle_command("1", GameCommand::Play).await.unwrap();
        h.clock.advance_days(1);

        let reply = h.service.handle_command("1", GameCommand::Play).await.unwrap();
        assert!(matches!(reply, Reply::GameStarted { .. }));
    }

    #[tokio::test]
    async fn test_sessions_are_per_chat() {
        let h = harness(false);
        h.service.handle_command("1", GameCommand::Play).await.unwrap();

        let reply = h.service.handle_guess("2", "ASSET").await.unwrap();
        assert_eq!(reply, Reply::NoActiveGame);

        let reply = h.service.handle_command("2", GameCommand::Play).await.unwrap();
        assert!(matches!(reply, Reply::GameStarted { .. }));
    }

    #[tokio::test]
    async fn test_loss_then_no_active_game() {
        let h = harness(false);
        h.service.handle_command("1", GameCommand::Play).await.unwrap();
        for _ in 1..MAX_ATTEMPTS {
            let reply = h.service.handle_guess("1", "BONDS").await.unwrap();
            assert!(matches!(reply, Reply::Progress { .. }));
        }
        let reply = h.service.handle_guess("1", "BONDS").await.unwrap();
        assert!(matches!(reply, Reply::Lost { .. }));

        let reply = h.service.handle_guess("1", "BONDS").await.unwrap();
        assert_eq!(reply, Reply::NoActiveGame);
    }

    #[tokio::test]
    async fn test_definition_flow() {
        let h = harness(false);
        h.service.handle_command("1", GameCommand::Play).await.unwrap();

        let reply = h.service.handle_command("1", GameCommand::Definition).await.unwrap();
        assert_eq!(reply, Reply::DefinitionLocked);

        h.service.handle_guess("1", "BONDS").await.unwrap();
        let reply = h.service.handle_command("1", GameCommand::Definition).await.unwrap();
        assert!(matches!(reply, Reply::Definition { .. }));
    }
}
