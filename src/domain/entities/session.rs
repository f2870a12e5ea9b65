use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::word::{DailyWord, MAX_ATTEMPTS};

/// Game state for one chat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub current_word: String,
    pub definition: String,
    pub hint: Option<String>,
    pub attempts: Vec<String>,
    pub game_active: bool,
    pub last_game_date: Option<NaiveDate>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a new game may start on `today`
    pub fn can_play(&self, today: NaiveDate, bypass_daily_limit: bool) -> bool {
        bypass_daily_limit || self.last_game_date != Some(today)
    }

    /// Reset into a fresh active game for `word`
    pub fn start(&mut self, word: &DailyWord, today: NaiveDate) {
        self.current_word = word.word.to_uppercase();
        self.definition = word.definition.clone();
        self.hint = word.hint.clone();
        self.attempts.clear();
        self.game_active = true;
        self.last_game_date = Some(today);
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    pub fn is_out_of_attempts(&self) -> bool {
        self.attempts.len() >= MAX_ATTEMPTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert!(!session.game_active);
        assert!(session.attempts.is_empty());
        assert_eq!(session.last_game_date, None);
        assert!(session.can_play(day(1), false));
    }

    #[test]
    fn test_start_resets() {
        let mut session = Session::new();
        session.attempts.push("BONDS".to_string());

        let word = DailyWord::new("asset", "Something of value.").with_hint("Balance sheet");
        session.start(&word, day(2));

        assert_eq!(session.current_word, "ASSET");
        assert_eq!(session.hint.as_deref(), Some("Balance sheet"));
        assert!(session.attempts.is_empty());
        assert!(session.game_active);
        assert_eq!(session.last_game_date, Some(day(2)));
    }

    #[test]
    fn test_daily_limit() {
        let mut session = Session::new();
        session.start(&DailyWord::fallback(), day(5));

        assert!(!session.can_play(day(5), false));
        assert!(session.can_play(day(5), true));
        assert!(session.can_play(day(6), false));
    }

    #[test]
    fn test_attempt_bounds() {
        let mut session = Session::new();
        session.start(&DailyWord::fallback(), day(1));
        for _ in 0..MAX_ATTEMPTS {
            assert!(!session.is_out_of_attempts());
            session.attempts.push("WRONG".to_string());
        }
        assert!(session.is_out_of_attempts());
        assert_eq!(session.attempts_left(), 0);
    }
}
